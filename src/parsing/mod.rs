//! Readers and writers for the line-oriented formats the tool exchanges.
//!
//! - **PAF**: alignment records between query and reference sequences (first 12 columns)
//! - **GFF**: feature tables, with comment and blank line handling
//! - **FASTA**: sequence records, read and written with noodles
//! - **Mapping table**: the TSV handed from `match` to `reorder`
//!
//! ## Example
//!
//! ```rust,no_run
//! use gf_reorder::parsing::paf::PafReader;
//! use gf_reorder::utils::io::open_input;
//! use std::path::Path;
//!
//! let reader = PafReader::new(open_input(Path::new("query_vs_ref.paf")).unwrap());
//! for record in reader {
//!     let record = record.unwrap();
//!     println!("{} -> {} ({} bp)", record.query_id, record.ref_id, record.len_aln);
//! }
//! ```

use thiserror::Error;

pub mod fasta;
pub mod gff;
pub mod mapping_table;
pub mod paf;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),
}

/// Parse an unsigned integer column, reporting the 1-based line number on failure
pub(crate) fn parse_u64(value: &str, column: &str, line_num: usize) -> Result<u64, ParseError> {
    value.parse().map_err(|_| {
        ParseError::InvalidFormat(format!(
            "Invalid {column} on line {line_num}: '{value}'"
        ))
    })
}
