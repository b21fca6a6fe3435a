/// A named sequence from a FASTA file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    pub id: String,
    /// Text after the id on the definition line, if any
    pub description: Option<String>,
    pub sequence: Vec<u8>,
}

impl SequenceRecord {
    pub fn new(id: impl Into<String>, sequence: impl Into<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            description: None,
            sequence: sequence.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Give the record a new identity; the old description is dropped
    pub fn rename(&mut self, name: &str) {
        self.id = name.to_string();
        self.description = None;
    }

    pub fn reverse_complement_in_place(&mut self) {
        self.sequence = reverse_complement(&self.sequence);
    }
}

/// Complement a single IUPAC nucleotide symbol, preserving case.
///
/// Degenerate codes map to their complementary code (R<->Y, K<->M, B<->V,
/// D<->H); S, W, N and gap symbols are self-complementary. U complements to A.
/// Anything else is returned unchanged.
pub fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' | b'U' => b'A',
        b'G' => b'C',
        b'C' => b'G',
        b'R' => b'Y',
        b'Y' => b'R',
        b'K' => b'M',
        b'M' => b'K',
        b'B' => b'V',
        b'V' => b'B',
        b'D' => b'H',
        b'H' => b'D',
        b'a' => b't',
        b't' | b'u' => b'a',
        b'g' => b'c',
        b'c' => b'g',
        b'r' => b'y',
        b'y' => b'r',
        b'k' => b'm',
        b'm' => b'k',
        b'b' => b'v',
        b'v' => b'b',
        b'd' => b'h',
        b'h' => b'd',
        other => other,
    }
}

/// Reverse complement a nucleotide sequence
pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|&b| complement(b)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_complement_basic() {
        assert_eq!(reverse_complement(b"ATGC"), b"GCAT");
        assert_eq!(reverse_complement(b""), b"");
    }

    #[test]
    fn test_reverse_complement_case_preserved() {
        assert_eq!(reverse_complement(b"AtGc"), b"gCaT");
    }

    #[test]
    fn test_reverse_complement_degenerate() {
        assert_eq!(reverse_complement(b"RYKMBVDHSWN"), b"NWSDHBVKMRY");
        assert_eq!(reverse_complement(b"ryn-"), b"-nry");
    }

    #[test]
    fn test_reverse_complement_twice_is_identity() {
        let original = b"ACGTRYKMBVDHSWNacgtrykmbvdhswn-".to_vec();
        assert_eq!(reverse_complement(&reverse_complement(&original)), original);

        let mut record = SequenceRecord::new("q1", original.clone());
        record.reverse_complement_in_place();
        record.reverse_complement_in_place();
        assert_eq!(record.id, "q1");
        assert_eq!(record.sequence, original);
    }

    #[test]
    fn test_rename() {
        let mut record = SequenceRecord::new("q1", b"ACGT".to_vec());
        record.description = Some("contig one".to_string());
        record.rename("r1");
        assert_eq!(record.id, "r1");
        assert_eq!(record.description, None);
        assert_eq!(record.len(), 4);
    }
}
