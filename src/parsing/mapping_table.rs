//! The mapping table handed from `match` to `reorder`.
//!
//! Tab-separated with one header row:
//!
//! ```text
//! queryID  refID  queryLenAgg  queryRevCompLen  queryRevComp
//! ```
//!
//! The reader splits on any whitespace and skips the header and blank lines.

use std::io::{BufRead, Write};

use tracing::warn;

use crate::core::mapping::MatchEntry;
use crate::core::types::Orientation;
use crate::parsing::{parse_u64, ParseError};

pub const HEADER: [&str; 5] = [
    "queryID",
    "refID",
    "queryLenAgg",
    "queryRevCompLen",
    "queryRevComp",
];

/// Write the header and one row per entry
///
/// # Errors
///
/// Returns an error if the writer fails.
pub fn write_mapping_table<W: Write>(writer: &mut W, entries: &[MatchEntry]) -> std::io::Result<()> {
    writeln!(writer, "{}", HEADER.join("\t"))?;
    for entry in entries {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}",
            entry.query_id,
            entry.ref_id,
            entry.query_len_agg,
            entry.query_rev_comp_len,
            entry.orientation
        )?;
    }
    Ok(())
}

/// Read every row of a mapping table
///
/// # Errors
///
/// Returns `ParseError::Io` on read failure, or `ParseError::InvalidFormat` if a
/// row has fewer than 5 columns, a non-integer length, or an orientation
/// symbol other than `+`/`-`.
pub fn read_mapping_table<R: BufRead>(reader: R) -> Result<Vec<MatchEntry>, ParseError> {
    let mut entries = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_num = i + 1;

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() || fields[0] == HEADER[0] {
            continue;
        }

        if fields.len() < HEADER.len() {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has {} fields, expected {}",
                fields.len(),
                HEADER.len()
            )));
        }

        let query_len_agg = parse_u64(fields[2], HEADER[2], line_num)?;
        let query_rev_comp_len: i64 = fields[3].parse().map_err(|_| {
            ParseError::InvalidFormat(format!(
                "Invalid {} on line {line_num}: '{}'",
                HEADER[3], fields[3]
            ))
        })?;
        let orientation = Orientation::parse(fields[4]).ok_or_else(|| {
            ParseError::InvalidFormat(format!(
                "Invalid {} on line {line_num}: '{}' (expected '+' or '-')",
                HEADER[4], fields[4]
            ))
        })?;

        if orientation != Orientation::from_signed_length(query_rev_comp_len) {
            warn!(
                "Mapping row for {} has orientation '{orientation}' but {} {query_rev_comp_len}",
                fields[0], HEADER[3]
            );
        }

        entries.push(MatchEntry {
            query_id: fields[0].to_string(),
            ref_id: fields[1].to_string(),
            query_len_agg,
            query_rev_comp_len,
            orientation,
        });
    }

    Ok(entries)
}
