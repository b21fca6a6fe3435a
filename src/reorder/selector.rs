use std::collections::HashMap;

use tracing::debug;

use crate::core::mapping::{MatchEntry, RenameEntry, RenameMapping};
use crate::reorder::ReorderError;

/// Rule deciding which mapping rows are applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Admit queries whose sequence is at least this long
    LengthThreshold(u64),
    /// Admit queries whose id starts with this prefix
    Prefix(String),
}

impl Selector {
    /// Build a selector from the two optional settings.
    ///
    /// # Errors
    ///
    /// Returns `ReorderError::Configuration` unless exactly one is given.
    pub fn from_options(
        length_threshold: Option<u64>,
        prefix: Option<String>,
    ) -> Result<Self, ReorderError> {
        match (length_threshold, prefix) {
            (Some(threshold), None) => Ok(Self::LengthThreshold(threshold)),
            (None, Some(prefix)) => Ok(Self::Prefix(prefix)),
            (None, None) => Err(ReorderError::Configuration(
                "either a length threshold or a prefix must be provided".to_string(),
            )),
            (Some(_), Some(_)) => Err(ReorderError::Configuration(
                "a length threshold and a prefix cannot be used together".to_string(),
            )),
        }
    }

    /// Whether a query with the given id and true sequence length is admitted
    pub fn admits(&self, query_id: &str, length: u64) -> bool {
        match self {
            Self::LengthThreshold(threshold) => length >= *threshold,
            Self::Prefix(prefix) => query_id.starts_with(prefix.as_str()),
        }
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthThreshold(threshold) => write!(f, "length threshold {threshold}"),
            Self::Prefix(prefix) => write!(f, "prefix '{prefix}'"),
        }
    }
}

/// Build the rename mapping from mapping-table rows.
///
/// `lengths` holds the true length of every query sequence in the genome.
/// Rows whose query is missing from `lengths` or is not admitted by the
/// selector are skipped. A later row for the same query replaces an earlier one.
#[allow(clippy::implicit_hasher)]
pub fn load_rename_mapping(
    entries: &[MatchEntry],
    lengths: &HashMap<String, u64>,
    selector: &Selector,
) -> RenameMapping {
    let mut mapping = RenameMapping::new();

    for entry in entries {
        let Some(&length) = lengths.get(&entry.query_id) else {
            debug!(
                "Skipping {}: not present in the query genome",
                entry.query_id
            );
            continue;
        };

        if !selector.admits(&entry.query_id, length) {
            debug!("Skipping {}: not admitted by {selector}", entry.query_id);
            continue;
        }

        mapping.insert(
            entry.query_id.clone(),
            RenameEntry {
                new_name: entry.ref_id.clone(),
                length,
                reverse: entry.is_reverse(),
            },
        );
    }

    mapping
}
