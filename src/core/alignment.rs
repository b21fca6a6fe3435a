use crate::core::types::Strand;

/// One row of alignment evidence between a query and a reference sequence.
///
/// Mirrors the twelve mandatory PAF columns. Coordinates are kept as read and
/// are not interpreted by the matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentRecord {
    pub query_id: String,
    pub query_len: u64,
    pub query_start: u64,
    pub query_end: u64,
    pub strand: Strand,
    pub ref_id: String,
    pub ref_len: u64,
    pub ref_start: u64,
    pub ref_end: u64,
    pub num_residue_matches: u64,
    /// Alignment block length
    pub len_aln: u64,
    pub mapq: u64,
}

impl AlignmentRecord {
    /// Block length signed by strand: negative on `-`, positive otherwise
    pub fn signed_length(&self) -> i64 {
        let len = i64::try_from(self.len_aln).unwrap_or(i64::MAX);
        match self.strand {
            Strand::Reverse => -len,
            _ => len,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Build a record with only the fields the matcher reads
    pub fn record(query: &str, strand: &str, reference: &str, len_aln: u64) -> AlignmentRecord {
        AlignmentRecord {
            query_id: query.to_string(),
            query_len: 1000,
            query_start: 0,
            query_end: len_aln,
            strand: Strand::parse(strand),
            ref_id: reference.to_string(),
            ref_len: 1000,
            ref_start: 0,
            ref_end: len_aln,
            num_residue_matches: len_aln,
            len_aln,
            mapq: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::record;

    #[test]
    fn test_signed_length() {
        assert_eq!(record("q1", "+", "r1", 50).signed_length(), 50);
        assert_eq!(record("q1", "-", "r1", 50).signed_length(), -50);
    }
}
