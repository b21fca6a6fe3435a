use std::collections::HashMap;
use std::convert::Infallible;

use tracing::debug;

use crate::core::alignment::AlignmentRecord;
use crate::core::mapping::MatchEntry;
use crate::matching::aggregate::{AggregateTable, MatchAggregate};

/// Configuration for the matching engine
#[derive(Debug, Clone, Default)]
pub struct MatchingConfig {
    /// Keep only records whose reference id starts with this prefix
    pub ref_prefix: Option<String>,
    /// Keep only records whose query id starts with this prefix
    pub query_prefix: Option<String>,
    /// Minimum aggregate alignment length for an entry to be emitted
    pub min_query_len: u64,
    /// Minimum absolute net signed alignment length for an entry to be emitted
    pub min_rev_comp_len: u64,
    /// Keep at most one query per reference
    pub unique_by_ref: bool,
}

/// Collapses alignment records into one best reference per query
pub struct MatchingEngine {
    config: MatchingConfig,
}

impl MatchingEngine {
    pub fn new(config: MatchingConfig) -> Self {
        Self { config }
    }

    /// Whether a record passes the reference and query prefix filters
    pub fn accepts(&self, record: &AlignmentRecord) -> bool {
        let ref_ok = self
            .config
            .ref_prefix
            .as_deref()
            .map_or(true, |p| record.ref_id.starts_with(p));
        let query_ok = self
            .config
            .query_prefix
            .as_deref()
            .map_or(true, |p| record.query_id.starts_with(p));
        ref_ok && query_ok
    }

    /// Find the best reference for every query in a stream of records
    pub fn find_matches<I>(&self, records: I) -> Vec<MatchEntry>
    where
        I: IntoIterator<Item = AlignmentRecord>,
    {
        match self.try_find_matches(records.into_iter().map(Ok::<_, Infallible>)) {
            Ok(entries) => entries,
            Err(never) => match never {},
        }
    }

    /// Like [`find_matches`](Self::find_matches), for a fallible record stream
    /// such as a file reader.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by the record stream.
    pub fn try_find_matches<I, E>(&self, records: I) -> Result<Vec<MatchEntry>, E>
    where
        I: IntoIterator<Item = Result<AlignmentRecord, E>>,
    {
        let table = self.aggregate(records)?;
        Ok(self.select(&table))
    }

    /// Group prefix-filtered records by (query, reference)
    ///
    /// # Errors
    ///
    /// Returns the first error produced by the record stream.
    pub fn aggregate<I, E>(&self, records: I) -> Result<AggregateTable, E>
    where
        I: IntoIterator<Item = Result<AlignmentRecord, E>>,
    {
        let mut table = AggregateTable::new();
        let mut filtered = 0usize;

        for record in records {
            let record = record?;
            if self.accepts(&record) {
                table.add(&record);
            } else {
                filtered += 1;
            }
        }

        debug!(
            "Aggregated {} records into {} query/reference pairs ({filtered} filtered by prefix)",
            table.record_count(),
            table.len()
        );

        Ok(table)
    }

    /// Pick one row per query, optionally one per reference, then apply the
    /// length thresholds.
    ///
    /// Entries come out in the order their (query, reference) pair was first seen.
    pub fn select(&self, table: &AggregateTable) -> Vec<MatchEntry> {
        let mut best = best_per_key(table.rows().iter(), |row| row.query_id.as_str());

        if self.config.unique_by_ref {
            let before = best.len();
            best = best_per_key(best.into_iter(), |row| row.ref_id.as_str());
            debug!(
                "Kept {} of {before} queries after one-per-reference selection",
                best.len()
            );
        }

        best.into_iter()
            .filter(|row| {
                row.query_len_agg >= self.config.min_query_len
                    && row.query_rev_comp_len.unsigned_abs() >= self.config.min_rev_comp_len
            })
            .map(|row| {
                MatchEntry::new(
                    row.query_id.clone(),
                    row.ref_id.clone(),
                    row.query_len_agg,
                    row.query_rev_comp_len,
                )
            })
            .collect()
    }
}

/// Keep the row with the largest `query_len_agg` for each key.
///
/// Ties go to the earliest row. The survivors keep their relative order.
fn best_per_key<'a, I, K>(rows: I, key: K) -> Vec<&'a MatchAggregate>
where
    I: Iterator<Item = &'a MatchAggregate>,
    K: Fn(&'a MatchAggregate) -> &'a str,
{
    let rows: Vec<&MatchAggregate> = rows.collect();
    let mut winner: HashMap<&str, usize> = HashMap::new();

    for (i, &row) in rows.iter().enumerate() {
        winner
            .entry(key(row))
            .and_modify(|w| {
                if row.query_len_agg > rows[*w].query_len_agg {
                    *w = i;
                }
            })
            .or_insert(i);
    }

    rows.into_iter()
        .enumerate()
        .filter(|&(i, row)| winner.get(key(row)) == Some(&i))
        .map(|(_, row)| row)
        .collect()
}
