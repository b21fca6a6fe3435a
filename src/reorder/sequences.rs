use std::io::Write;

use tracing::{debug, info};

use crate::core::mapping::{RenameEntry, RenameMapping};
use crate::core::sequence::SequenceRecord;
use crate::parsing::fasta::FastaWriter;
use crate::parsing::ParseError;
use crate::reorder::log::{ChangeLog, ChangeLogEntry, ChangeSource};
use crate::reorder::ReorderError;

/// Counts from one pass over a genome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequenceSummary {
    pub records: usize,
    pub renamed: usize,
    pub reversed: usize,
}

/// Rename a sequence and reverse-complement it if the entry says so
pub fn transform_sequence(record: &mut SequenceRecord, entry: &RenameEntry) {
    record.rename(&entry.new_name);
    if entry.reverse {
        record.reverse_complement_in_place();
    }
}

/// Stream sequence records through the mapping, preserving their order.
///
/// Records whose id is in the mapping are transformed with
/// [`transform_sequence`] and logged. Others are written unchanged.
///
/// # Errors
///
/// Returns the first parse error from `records` or a write failure.
pub fn apply_to_sequences<I, W>(
    records: I,
    writer: &mut FastaWriter<W>,
    mapping: &RenameMapping,
    log: &mut ChangeLog,
) -> Result<SequenceSummary, ReorderError>
where
    I: IntoIterator<Item = Result<SequenceRecord, ParseError>>,
    W: Write,
{
    let mut summary = SequenceSummary::default();

    for record in records {
        let mut record = record?;
        summary.records += 1;

        if let Some(entry) = mapping.get(&record.id) {
            let from = record.id.clone();
            if entry.length != record.len() as u64 {
                debug!(
                    "{from} is {} bases here but {} in the length table",
                    record.len(),
                    entry.length
                );
            }
            transform_sequence(&mut record, entry);

            summary.renamed += 1;
            if entry.reverse {
                summary.reversed += 1;
            }
            log.push(ChangeLogEntry {
                source: ChangeSource::Fasta,
                from,
                to: entry.new_name.clone(),
                reverse: entry.reverse,
                length: entry.length,
            });
        }

        writer.write_record(&record)?;
    }

    info!(
        "Sequences: {} records, {} renamed, {} reverse-complemented",
        summary.records, summary.renamed, summary.reversed
    );

    Ok(summary)
}
