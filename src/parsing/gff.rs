//! Reader and writer for GFF feature tables.
//!
//! Lines are trimmed before use. Blank lines are dropped, `#` lines are kept as
//! [`FeatureLine::Comment`], and data rows with fewer than 8 tab-separated
//! columns are dropped without error.

use std::io::{BufRead, Write};

use crate::core::feature::{FeatureLine, FeatureRecord};
use crate::parsing::ParseError;

/// Streaming GFF reader
pub struct GffReader<R> {
    reader: R,
    line: String,
    line_num: usize,
    skipped: usize,
}

impl<R: BufRead> GffReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            line_num: 0,
            skipped: 0,
        }
    }

    /// Number of data rows dropped for having too few columns so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Read the next comment or feature line, or `None` at end of input
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Io` on read failure, or `ParseError::InvalidFormat`
    /// if a complete row has a non-integer start or end.
    pub fn read_line(&mut self) -> Result<Option<FeatureLine>, ParseError> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.line_num += 1;

            let line = self.line.trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with('#') {
                return Ok(Some(FeatureLine::Comment(line.to_string())));
            }

            let fields = line.split('\t').map(str::to_string).collect();
            match FeatureRecord::from_fields(fields) {
                None => self.skipped += 1,
                Some(Ok(record)) => return Ok(Some(FeatureLine::Record(record))),
                Some(Err(column)) => {
                    return Err(ParseError::InvalidFormat(format!(
                        "Invalid {column} coordinate on line {}",
                        self.line_num
                    )))
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for GffReader<R> {
    type Item = Result<FeatureLine, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_line().transpose()
    }
}

/// Write one feature line followed by a newline
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_feature_line<W: Write>(writer: &mut W, line: &FeatureLine) -> std::io::Result<()> {
    match line {
        FeatureLine::Comment(text) => writeln!(writer, "{text}"),
        FeatureLine::Record(record) => writeln!(writer, "{record}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Strand;

    #[test]
    fn test_reader_line_kinds() {
        let gff = "##gff-version 3\n\
                   \n\
                   q1\tsrc\tgene\t10\t20\t.\t+\t.\tID=g1\n\
                   q1\tsrc\tgene\t10\t20\n\
                   # trailing comment\n";

        let mut reader = GffReader::new(gff.as_bytes());
        let lines: Vec<FeatureLine> = reader.by_ref().collect::<Result<_, _>>().unwrap();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], FeatureLine::Comment("##gff-version 3".to_string()));
        match &lines[1] {
            FeatureLine::Record(record) => {
                assert_eq!(record.chrom, "q1");
                assert_eq!(record.strand, Strand::Forward);
            }
            FeatureLine::Comment(_) => panic!("expected a feature record"),
        }
        assert_eq!(
            lines[2],
            FeatureLine::Comment("# trailing comment".to_string())
        );
        assert_eq!(reader.skipped(), 1);
    }

    #[test]
    fn test_reader_trims_whitespace() {
        let gff = "  q1\tsrc\tgene\t10\t20\t.\t-\t.\tID=g1  \r\n";
        let lines: Vec<FeatureLine> = GffReader::new(gff.as_bytes())
            .collect::<Result<_, _>>()
            .unwrap();

        let mut out = Vec::new();
        write_feature_line(&mut out, &lines[0]).unwrap();
        assert_eq!(out, b"q1\tsrc\tgene\t10\t20\t.\t-\t.\tID=g1\n");
    }

    #[test]
    fn test_reader_rejects_bad_coordinates() {
        let gff = "##gff-version 3\nq1\tsrc\tgene\t10\tx\t.\t+\t.\n";
        let result: Result<Vec<FeatureLine>, _> = GffReader::new(gff.as_bytes()).collect();
        let message = result.unwrap_err().to_string();
        assert!(message.contains("end"));
        assert!(message.contains("line 2"));
    }
}
