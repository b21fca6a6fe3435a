use serde::Serialize;

/// Strand of an alignment block or an annotated feature.
///
/// Alignment records only ever carry `+` or `-`. Feature tables also use `.`
/// (unstranded) and `?` (unknown), which are kept verbatim in [`Strand::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Strand {
    Forward,
    Reverse,
    Other(String),
}

impl Strand {
    pub fn parse(s: &str) -> Self {
        match s {
            "+" => Self::Forward,
            "-" => Self::Reverse,
            other => Self::Other(other.to_string()),
        }
    }

    /// Toggle `+` and `-`; any other value is returned unchanged.
    #[must_use]
    pub fn flipped(&self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
            Self::Other(s) => Self::Other(s.clone()),
        }
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "+"),
            Self::Reverse => write!(f, "-"),
            Self::Other(s) => write!(f, "{s}"),
        }
    }
}

/// Orientation symbol written to the `queryRevComp` column of the mapping table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Orientation {
    #[serde(rename = "+")]
    Forward,
    #[serde(rename = "-")]
    Reverse,
}

impl Orientation {
    /// Derive the symbol from a net signed alignment length.
    ///
    /// Only a strictly positive signal is `+`; zero maps to `-`.
    pub fn from_signed_length(rev_comp_len: i64) -> Self {
        if rev_comp_len > 0 {
            Self::Forward
        } else {
            Self::Reverse
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Self::Forward),
            "-" => Some(Self::Reverse),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Forward => "+",
            Self::Reverse => "-",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strand_flip() {
        assert_eq!(Strand::Forward.flipped(), Strand::Reverse);
        assert_eq!(Strand::Reverse.flipped(), Strand::Forward);
        assert_eq!(
            Strand::Other(".".to_string()).flipped(),
            Strand::Other(".".to_string())
        );
    }

    #[test]
    fn test_strand_display_roundtrip() {
        for s in ["+", "-", ".", "?"] {
            assert_eq!(Strand::parse(s).to_string(), s);
        }
    }

    #[test]
    fn test_orientation_from_signed_length() {
        assert_eq!(Orientation::from_signed_length(10), Orientation::Forward);
        assert_eq!(Orientation::from_signed_length(-10), Orientation::Reverse);
        // Zero net signal is reported as "-"
        assert_eq!(Orientation::from_signed_length(0), Orientation::Reverse);
    }

    #[test]
    fn test_orientation_parse() {
        assert_eq!(Orientation::parse("+"), Some(Orientation::Forward));
        assert_eq!(Orientation::parse("-"), Some(Orientation::Reverse));
        assert_eq!(Orientation::parse("."), None);
        assert_eq!(Orientation::parse(""), None);
    }
}
