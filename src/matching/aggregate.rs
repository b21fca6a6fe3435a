use std::collections::HashMap;

use crate::core::alignment::AlignmentRecord;

/// Alignment evidence summed over every record of one (query, reference) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchAggregate {
    pub query_id: String,
    pub ref_id: String,
    /// Sum of alignment block lengths
    pub query_len_agg: u64,
    /// Sum of block lengths signed by strand
    pub query_rev_comp_len: i64,
}

/// Arena of [`MatchAggregate`] rows indexed by (query, reference).
///
/// Rows are kept in the order their pair was first seen, which is the order
/// ties are broken in during selection.
#[derive(Debug, Default)]
pub struct AggregateTable {
    rows: Vec<MatchAggregate>,
    index: HashMap<(String, String), usize>,
    records: usize,
}

impl AggregateTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one alignment record into its pair's row
    pub fn add(&mut self, record: &AlignmentRecord) {
        self.records += 1;

        let key = (record.query_id.clone(), record.ref_id.clone());
        let rows = &mut self.rows;
        let idx = *self.index.entry(key).or_insert_with(|| {
            rows.push(MatchAggregate {
                query_id: record.query_id.clone(),
                ref_id: record.ref_id.clone(),
                query_len_agg: 0,
                query_rev_comp_len: 0,
            });
            rows.len() - 1
        });

        let row = &mut self.rows[idx];
        row.query_len_agg += record.len_aln;
        row.query_rev_comp_len += record.signed_length();
    }

    /// Look up the row for a pair
    pub fn get(&self, query_id: &str, ref_id: &str) -> Option<&MatchAggregate> {
        self.index
            .get(&(query_id.to_string(), ref_id.to_string()))
            .map(|&idx| &self.rows[idx])
    }

    /// Rows in first-seen order
    pub fn rows(&self) -> &[MatchAggregate] {
        &self.rows
    }

    /// Number of distinct (query, reference) pairs
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of alignment records folded in
    pub fn record_count(&self) -> usize {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alignment::test_support::record;

    #[test]
    fn test_sums_per_pair() {
        let mut table = AggregateTable::new();
        table.add(&record("q1", "+", "r1", 50));
        table.add(&record("q1", "-", "r1", 50));
        table.add(&record("q1", "-", "r2", 30));
        table.add(&record("q2", "+", "r1", 10));

        assert_eq!(table.len(), 3);
        assert_eq!(table.record_count(), 4);

        let q1r1 = table.get("q1", "r1").unwrap();
        assert_eq!(q1r1.query_len_agg, 100);
        assert_eq!(q1r1.query_rev_comp_len, 0);

        let q1r2 = table.get("q1", "r2").unwrap();
        assert_eq!(q1r2.query_len_agg, 30);
        assert_eq!(q1r2.query_rev_comp_len, -30);

        assert!(table.get("q2", "r2").is_none());
    }

    #[test]
    fn test_first_seen_order() {
        let mut table = AggregateTable::new();
        table.add(&record("q2", "+", "rB", 1));
        table.add(&record("q1", "+", "rA", 1));
        table.add(&record("q2", "+", "rB", 1));

        let pairs: Vec<(&str, &str)> = table
            .rows()
            .iter()
            .map(|r| (r.query_id.as_str(), r.ref_id.as_str()))
            .collect();
        assert_eq!(pairs, vec![("q2", "rB"), ("q1", "rA")]);
    }
}
