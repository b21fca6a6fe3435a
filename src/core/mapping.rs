use std::collections::HashMap;

use serde::Serialize;

use crate::core::types::Orientation;

/// One row of the mapping table: the best reference match for a query sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchEntry {
    #[serde(rename = "queryID")]
    pub query_id: String,

    #[serde(rename = "refID")]
    pub ref_id: String,

    /// Sum of alignment block lengths for this (query, reference) pair
    #[serde(rename = "queryLenAgg")]
    pub query_len_agg: u64,

    /// Sum of block lengths signed by strand
    #[serde(rename = "queryRevCompLen")]
    pub query_rev_comp_len: i64,

    #[serde(rename = "queryRevComp")]
    pub orientation: Orientation,
}

impl MatchEntry {
    pub fn new(
        query_id: impl Into<String>,
        ref_id: impl Into<String>,
        query_len_agg: u64,
        query_rev_comp_len: i64,
    ) -> Self {
        Self {
            query_id: query_id.into(),
            ref_id: ref_id.into(),
            query_len_agg,
            query_rev_comp_len,
            orientation: Orientation::from_signed_length(query_rev_comp_len),
        }
    }

    /// Whether the query must be reverse-complemented onto the reference.
    ///
    /// Only a negative net signal reverses; a zero signal does not, even though
    /// its orientation symbol is `-`.
    pub fn is_reverse(&self) -> bool {
        self.query_rev_comp_len < 0
    }
}

/// The rename decision applied to one query sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEntry {
    pub new_name: String,
    /// True length of the query sequence
    pub length: u64,
    pub reverse: bool,
}

/// Query name -> rename decision, at most one entry per query
#[derive(Debug, Clone, Default)]
pub struct RenameMapping {
    entries: HashMap<String, RenameEntry>,
}

impl RenameMapping {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, replacing any earlier entry for the same query
    pub fn insert(&mut self, query_id: impl Into<String>, entry: RenameEntry) {
        self.entries.insert(query_id.into(), entry);
    }

    pub fn get(&self, query_id: &str) -> Option<&RenameEntry> {
        self.entries.get(query_id)
    }

    pub fn contains(&self, query_id: &str) -> bool {
        self.entries.contains_key(query_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_entry_orientation() {
        let forward = MatchEntry::new("q1", "r1", 100, 40);
        assert_eq!(forward.orientation, Orientation::Forward);
        assert!(!forward.is_reverse());

        let reverse = MatchEntry::new("q1", "r1", 100, -40);
        assert_eq!(reverse.orientation, Orientation::Reverse);
        assert!(reverse.is_reverse());

        let balanced = MatchEntry::new("q1", "r1", 100, 0);
        assert_eq!(balanced.orientation, Orientation::Reverse);
        assert!(!balanced.is_reverse());
    }

    #[test]
    fn test_match_entry_json_field_names() {
        let entry = MatchEntry::new("q1", "r1", 100, -40);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["queryID"], "q1");
        assert_eq!(json["refID"], "r1");
        assert_eq!(json["queryLenAgg"], 100);
        assert_eq!(json["queryRevCompLen"], -40);
        assert_eq!(json["queryRevComp"], "-");
    }

    #[test]
    fn test_rename_mapping_one_entry_per_query() {
        let mut mapping = RenameMapping::new();
        mapping.insert(
            "q1",
            RenameEntry {
                new_name: "r1".to_string(),
                length: 10,
                reverse: false,
            },
        );
        mapping.insert(
            "q1",
            RenameEntry {
                new_name: "r2".to_string(),
                length: 10,
                reverse: true,
            },
        );

        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("q1").unwrap().new_name, "r2");
        assert!(mapping.contains("q1"));
        assert!(!mapping.contains("q2"));
    }
}
