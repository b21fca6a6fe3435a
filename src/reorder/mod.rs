//! Applying a rename mapping to a feature table and a genome.
//!
//! - [`Selector`](selector::Selector): which mapping rows are admitted
//! - [`load_rename_mapping`](selector::load_rename_mapping): mapping rows + genome lengths -> [`RenameMapping`](crate::core::mapping::RenameMapping)
//! - [`apply_to_features`](features::apply_to_features): rename and reorient GFF rows
//! - [`apply_to_sequences`](sequences::apply_to_sequences): rename and reverse-complement FASTA records
//! - [`ChangeLog`](log::ChangeLog): one entry per renamed feature or sequence
//!
//! The two apply passes share only the read-only mapping and a caller-owned
//! change log, so they can run in either order.

use thiserror::Error;

use crate::parsing::ParseError;

pub mod features;
pub mod log;
pub mod selector;
pub mod sequences;

#[derive(Error, Debug)]
pub enum ReorderError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Feature {start}-{end} on '{chrom}' is outside its sequence of length {length}")]
    CoordinatesOutOfBounds {
        chrom: String,
        start: u64,
        end: u64,
        length: u64,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
