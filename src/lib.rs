//! # gf-reorder
//!
//! A library for renaming and reorienting a query assembly after a reference
//! assembly, together with its feature annotation.
//!
//! Draft assemblies come with arbitrary contig names and orientations. Once the
//! query has been aligned to a reference (for example with minimap2), each query
//! sequence can be named after the reference sequence it covers best and flipped
//! onto the reference's forward strand.
//!
//! `gf-reorder` does this in two decoupled steps:
//!
//! - **Matching**: collapse PAF alignment records into one best reference per
//!   query, with a net strand signal deciding orientation
//! - **Reordering**: apply that mapping to a GFF file (renaming sequence ids,
//!   mirroring coordinates and flipping strands) and to the query FASTA
//!   (renaming and reverse-complementing)
//!
//! The two steps communicate only through the mapping table, a five-column TSV.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::collections::HashMap;
//! use gf_reorder::{MatchingConfig, MatchingEngine, Selector};
//! use gf_reorder::parsing::paf::PafReader;
//! use gf_reorder::reorder::selector::load_rename_mapping;
//! use gf_reorder::utils::io::open_input;
//! use std::path::Path;
//!
//! let reader = PafReader::new(open_input(Path::new("query_vs_ref.paf")).unwrap());
//! let entries = MatchingEngine::new(MatchingConfig::default())
//!     .try_find_matches(reader)
//!     .unwrap();
//!
//! let lengths = HashMap::from([("ctg1".to_string(), 1_000_000)]);
//! let mapping = load_rename_mapping(&entries, &lengths, &Selector::LengthThreshold(10_000));
//! println!("{} sequences will be renamed", mapping.len());
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Alignment, feature, sequence and mapping types
//! - [`matching`]: Aggregation and best-match selection
//! - [`reorder`]: Applying a mapping to GFF and FASTA streams
//! - [`parsing`]: PAF, GFF, FASTA and mapping-table readers and writers
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod reorder;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::alignment::AlignmentRecord;
pub use crate::core::feature::{reverse_coordinates, FeatureLine, FeatureRecord};
pub use crate::core::mapping::{MatchEntry, RenameEntry, RenameMapping};
pub use crate::core::sequence::{reverse_complement, SequenceRecord};
pub use crate::core::types::*;
pub use crate::matching::engine::{MatchingConfig, MatchingEngine};
pub use crate::reorder::log::{ChangeLog, ChangeLogEntry, LogFormat};
pub use crate::reorder::selector::Selector;
pub use crate::reorder::ReorderError;
