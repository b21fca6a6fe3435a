use std::io::Write;

use tracing::{info, warn};

use crate::core::feature::{reverse_coordinates, FeatureLine, FeatureRecord};
use crate::core::mapping::{RenameEntry, RenameMapping};
use crate::parsing::gff::write_feature_line;
use crate::parsing::ParseError;
use crate::reorder::log::{ChangeLog, ChangeLogEntry, ChangeSource};
use crate::reorder::ReorderError;

/// Counts from one pass over a feature table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureSummary {
    pub comments: usize,
    pub records: usize,
    pub renamed: usize,
    pub reversed: usize,
    /// Reversed records dropped for lying outside their sequence
    pub dropped: usize,
}

/// Rename a feature and, if its sequence is reversed, mirror its interval and
/// flip its strand.
///
/// # Errors
///
/// Returns `ReorderError::CoordinatesOutOfBounds` when a reversed feature does
/// not lie within `1..=entry.length`.
pub fn transform_feature(
    record: &mut FeatureRecord,
    entry: &RenameEntry,
) -> Result<(), ReorderError> {
    if entry.reverse {
        let (start, end) = reverse_coordinates(record.start, record.end, entry.length)
            .ok_or_else(|| ReorderError::CoordinatesOutOfBounds {
                chrom: record.chrom.clone(),
                start: record.start,
                end: record.end,
                length: entry.length,
            })?;
        record.start = start;
        record.end = end;
        record.strand = record.strand.flipped();
    }
    record.chrom.clone_from(&entry.new_name);
    Ok(())
}

/// Stream a feature table through the mapping.
///
/// Comment lines are written unchanged. Records on mapped sequences are
/// transformed with [`transform_feature`] and logged; all other records are
/// written unchanged. A record that cannot be reversed onto its sequence is
/// dropped with a warning. Blank and short lines never reach this function (see
/// [`GffReader`](crate::parsing::gff::GffReader)).
///
/// # Errors
///
/// Returns the first parse error from `lines` or a write failure.
pub fn apply_to_features<I, W>(
    lines: I,
    writer: &mut W,
    mapping: &RenameMapping,
    log: &mut ChangeLog,
) -> Result<FeatureSummary, ReorderError>
where
    I: IntoIterator<Item = Result<FeatureLine, ParseError>>,
    W: Write,
{
    let mut summary = FeatureSummary::default();

    for line in lines {
        let mut line = line?;

        match &mut line {
            FeatureLine::Comment(_) => summary.comments += 1,
            FeatureLine::Record(record) => {
                summary.records += 1;
                if let Some(entry) = mapping.get(&record.chrom) {
                    let from = record.chrom.clone();
                    if let Err(e) = transform_feature(record, entry) {
                        warn!("Dropping feature: {e}");
                        summary.dropped += 1;
                        continue;
                    }

                    summary.renamed += 1;
                    if entry.reverse {
                        summary.reversed += 1;
                    }
                    log.push(ChangeLogEntry {
                        source: ChangeSource::Gff,
                        from,
                        to: entry.new_name.clone(),
                        reverse: entry.reverse,
                        length: entry.length,
                    });
                }
            }
        }

        write_feature_line(writer, &line)?;
    }

    info!(
        "Features: {} records, {} renamed, {} reversed, {} dropped",
        summary.records, summary.renamed, summary.reversed, summary.dropped
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::gff::GffReader;

    fn mapping() -> RenameMapping {
        let mut mapping = RenameMapping::new();
        mapping.insert(
            "q1",
            RenameEntry {
                new_name: "r1".to_string(),
                length: 100,
                reverse: true,
            },
        );
        mapping.insert(
            "q2",
            RenameEntry {
                new_name: "r2".to_string(),
                length: 500,
                reverse: false,
            },
        );
        mapping
    }

    fn run(gff: &str) -> (String, ChangeLog, FeatureSummary) {
        let mut out = Vec::new();
        let mut log = ChangeLog::new();
        let summary = apply_to_features(
            GffReader::new(gff.as_bytes()),
            &mut out,
            &mapping(),
            &mut log,
        )
        .unwrap();
        (String::from_utf8(out).unwrap(), log, summary)
    }

    #[test]
    fn test_reversed_feature() {
        let (out, log, _) = run("q1\tsrc\tgene\t10\t20\t.\t+\t.\tID=g1\n");
        assert_eq!(out, "r1\tsrc\tgene\t81\t91\t.\t-\t.\tID=g1\n");
        assert_eq!(log.len(), 1);
        assert_eq!(
            log.entries()[0].to_string(),
            "GFF: q1 -> r1, Reverse: Yes, Length: 100"
        );
    }

    #[test]
    fn test_forward_feature_only_renamed() {
        let (out, log, _) = run("q2\tsrc\tmRNA\t10\t20\t.\t-\t0\tID=m1;Parent=g1\n");
        assert_eq!(out, "r2\tsrc\tmRNA\t10\t20\t.\t-\t0\tID=m1;Parent=g1\n");
        assert!(!log.entries()[0].reverse);
    }

    #[test]
    fn test_unmapped_and_special_lines() {
        let gff = "##gff-version 3\n\
                   \n\
                   other\tsrc\tgene\t1\t5\t.\t+\t.\tID=x\n\
                   q1\tsrc\tgene\t10\t20\n\
                   q1\tsrc\texon\t1\t100\t.\t.\t.\tID=e1\n";
        let (out, log, summary) = run(gff);

        assert_eq!(
            out,
            "##gff-version 3\n\
             other\tsrc\tgene\t1\t5\t.\t+\t.\tID=x\n\
             r1\tsrc\texon\t1\t100\t.\t.\t.\tID=e1\n"
        );
        // The short row is dropped without a log entry
        assert_eq!(log.len(), 1);
        assert_eq!(
            summary,
            FeatureSummary {
                comments: 1,
                records: 2,
                renamed: 1,
                reversed: 1,
                dropped: 0,
            }
        );
    }

    #[test]
    fn test_transform_out_of_bounds_feature_is_an_error() {
        let mut record = FeatureRecord::from_fields(
            "q1\tsrc\tgene\t90\t120\t.\t+\t."
                .split('\t')
                .map(str::to_string)
                .collect(),
        )
        .unwrap()
        .unwrap();
        let mapping = mapping();

        let result = transform_feature(&mut record, mapping.get("q1").unwrap());
        assert!(matches!(
            result,
            Err(ReorderError::CoordinatesOutOfBounds { length: 100, .. })
        ));
        assert_eq!(record.chrom, "q1");
    }

    #[test]
    fn test_out_of_bounds_feature_is_dropped_and_pass_continues() {
        let gff = "q1\ts\tgene\t10\t20\t.\t+\t.\n\
                   q1\ts\tgene\t90\t120\t.\t+\t.\n\
                   q1\ts\tgene\t1\t5\t.\t+\t.\n";
        let (out, log, summary) = run(gff);

        assert_eq!(
            out,
            "r1\ts\tgene\t81\t91\t.\t-\t.\n\
             r1\ts\tgene\t96\t100\t.\t-\t.\n"
        );
        assert_eq!(log.len(), 2);
        assert_eq!(summary.records, 3);
        assert_eq!(summary.renamed, 2);
        assert_eq!(summary.dropped, 1);
    }

    #[test]
    fn test_out_of_bounds_ignored_when_not_reversed() {
        let (out, _, _) = run("q2\tsrc\tgene\t490\t900\t.\t+\t.\n");
        assert_eq!(out, "r2\tsrc\tgene\t490\t900\t.\t+\t.\n");
    }
}
