use crate::core::types::Strand;

/// Minimum number of tab-separated columns in a feature row
pub const MIN_FEATURE_FIELDS: usize = 8;

/// One data row of a feature table (GFF).
///
/// Only the sequence id, coordinates and strand are interpreted. Every other
/// column is kept verbatim in `fields`, whose slots 0, 3, 4 and 6 are
/// overwritten from the typed fields on output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRecord {
    pub chrom: String,
    /// 1-based inclusive start
    pub start: u64,
    /// 1-based inclusive end
    pub end: u64,
    pub strand: Strand,
    fields: Vec<String>,
}

impl FeatureRecord {
    /// Build a record from its raw columns.
    ///
    /// Returns `None` when there are fewer than [`MIN_FEATURE_FIELDS`] columns;
    /// returns `Some(Err(column))` when start or end is not an integer.
    pub fn from_fields(fields: Vec<String>) -> Option<Result<Self, &'static str>> {
        if fields.len() < MIN_FEATURE_FIELDS {
            return None;
        }

        let start = match fields[3].parse::<u64>() {
            Ok(v) => v,
            Err(_) => return Some(Err("start")),
        };
        let end = match fields[4].parse::<u64>() {
            Ok(v) => v,
            Err(_) => return Some(Err("end")),
        };

        Some(Ok(Self {
            chrom: fields[0].clone(),
            start,
            end,
            strand: Strand::parse(&fields[6]),
            fields,
        }))
    }

    /// Columns in output order
    pub fn to_fields(&self) -> Vec<String> {
        let mut fields = self.fields.clone();
        fields[0].clone_from(&self.chrom);
        fields[3] = self.start.to_string();
        fields[4] = self.end.to_string();
        fields[6] = self.strand.to_string();
        fields
    }
}

impl std::fmt::Display for FeatureRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_fields().join("\t"))
    }
}

/// A line of a feature table that survives parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeatureLine {
    /// A `#` line, re-emitted verbatim
    Comment(String),
    Record(FeatureRecord),
}

/// Mirror a 1-based inclusive interval onto the opposite strand of a sequence
/// of `length` bases.
///
/// Returns `None` unless `1 <= start <= end <= length`.
pub fn reverse_coordinates(start: u64, end: u64, length: u64) -> Option<(u64, u64)> {
    if start == 0 || start > end || end > length {
        return None;
    }
    Some((length - end + 1, length - start + 1))
}
