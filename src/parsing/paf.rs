//! Reader for PAF alignment records.
//!
//! Only the 12 mandatory columns are read; optional SAM-style tags after them
//! are ignored. Blank lines are skipped.

use std::io::BufRead;

use crate::core::alignment::AlignmentRecord;
use crate::core::types::Strand;
use crate::parsing::{parse_u64, ParseError};

/// Number of mandatory PAF columns
pub const PAF_COLUMNS: usize = 12;

/// Streaming PAF reader yielding one [`AlignmentRecord`] per data line
pub struct PafReader<R> {
    reader: R,
    line: String,
    line_num: usize,
}

impl<R: BufRead> PafReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            line_num: 0,
        }
    }

    /// Read the next record, or `None` at end of input
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Io` on read failure, or `ParseError::InvalidFormat`
    /// if a line has fewer than 12 columns or a malformed numeric or strand column.
    pub fn read_record(&mut self) -> Result<Option<AlignmentRecord>, ParseError> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.line_num += 1;

            let line = self.line.trim_end_matches(['\n', '\r']);
            if line.trim().is_empty() {
                continue;
            }

            return parse_paf_line(line, self.line_num).map(Some);
        }
    }
}

impl<R: BufRead> Iterator for PafReader<R> {
    type Item = Result<AlignmentRecord, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record().transpose()
    }
}

/// Parse one PAF line
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if the line has fewer than 12 columns,
/// a non-integer numeric column, or a strand other than `+`/`-`.
pub fn parse_paf_line(line: &str, line_num: usize) -> Result<AlignmentRecord, ParseError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < PAF_COLUMNS {
        return Err(ParseError::InvalidFormat(format!(
            "Line {line_num} has {} fields, expected at least {PAF_COLUMNS}",
            fields.len()
        )));
    }

    let strand = match fields[4] {
        "+" => Strand::Forward,
        "-" => Strand::Reverse,
        other => {
            return Err(ParseError::InvalidFormat(format!(
                "Invalid strand on line {line_num}: '{other}'"
            )))
        }
    };

    Ok(AlignmentRecord {
        query_id: fields[0].to_string(),
        query_len: parse_u64(fields[1], "query length", line_num)?,
        query_start: parse_u64(fields[2], "query start", line_num)?,
        query_end: parse_u64(fields[3], "query end", line_num)?,
        strand,
        ref_id: fields[5].to_string(),
        ref_len: parse_u64(fields[6], "reference length", line_num)?,
        ref_start: parse_u64(fields[7], "reference start", line_num)?,
        ref_end: parse_u64(fields[8], "reference end", line_num)?,
        num_residue_matches: parse_u64(fields[9], "residue matches", line_num)?,
        len_aln: parse_u64(fields[10], "alignment length", line_num)?,
        mapq: parse_u64(fields[11], "mapping quality", line_num)?,
    })
}
