//! Collapsing alignment records into one reference match per query.
//!
//! - [`MatchingEngine`](engine::MatchingEngine): prefix filtering, selection and thresholds
//! - [`AggregateTable`](aggregate::AggregateTable): per (query, reference) sums
//!
//! ## Matching Algorithm
//!
//! 1. **Prefix filters**: drop records whose reference or query id lacks the configured prefix
//! 2. **Aggregation**: per (query, reference) pair, sum block lengths (`queryLenAgg`) and
//!    strand-signed block lengths (`queryRevCompLen`)
//! 3. **Best per query**: keep the pair with the largest `queryLenAgg`; ties go to the pair seen first
//! 4. **Best per reference** (optional): among queries whose best pair names the same
//!    reference, keep the largest `queryLenAgg`, same tie rule
//! 5. **Thresholds**: `queryLenAgg >= min_query_len` and `|queryRevCompLen| >= min_rev_comp_len`
//!
//! The orientation symbol is `+` when `queryRevCompLen > 0` and `-` otherwise.
//!
//! ## Example
//!
//! ```rust,no_run
//! use gf_reorder::matching::engine::{MatchingConfig, MatchingEngine};
//! use gf_reorder::parsing::paf::PafReader;
//! use gf_reorder::utils::io::open_input;
//! use std::path::Path;
//!
//! let reader = PafReader::new(open_input(Path::new("query_vs_ref.paf")).unwrap());
//! let config = MatchingConfig {
//!     ref_prefix: Some("chr".to_string()),
//!     unique_by_ref: true,
//!     ..MatchingConfig::default()
//! };
//!
//! let entries = MatchingEngine::new(config).try_find_matches(reader).unwrap();
//! for e in &entries {
//!     println!("{} -> {} ({})", e.query_id, e.ref_id, e.orientation);
//! }
//! ```

pub mod aggregate;
pub mod engine;
