//! Core data types for assembly renaming.
//!
//! - [`AlignmentRecord`](alignment::AlignmentRecord): one PAF row between a query and a reference sequence
//! - [`MatchEntry`](mapping::MatchEntry): the best reference for one query, as written to the mapping table
//! - [`RenameMapping`](mapping::RenameMapping): query name -> new name, length and orientation
//! - [`FeatureRecord`](feature::FeatureRecord): one GFF data row
//! - [`SequenceRecord`](sequence::SequenceRecord): one FASTA record
//! - [`Strand`](types::Strand), [`Orientation`](types::Orientation): strand and orientation symbols
//!
//! ## Coordinates
//!
//! Feature coordinates are 1-based and inclusive. Reversing a feature onto the
//! opposite strand of a sequence of length `L` maps `[start, end]` to
//! `[L - end + 1, L - start + 1]`.

pub mod alignment;
pub mod feature;
pub mod mapping;
pub mod sequence;
pub mod types;
