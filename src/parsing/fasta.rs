//! FASTA reading and writing using noodles.
//!
//! Supports both uncompressed and gzip/bgzip compressed input. Output is
//! written uncompressed with noodles' default line width.

use std::collections::HashMap;
use std::io::{BufRead, Write};
use std::path::Path;

use noodles::fasta;
use noodles::fasta::record::{Definition, Sequence};

use crate::core::sequence::SequenceRecord;
use crate::parsing::ParseError;
use crate::utils::io::open_input;

/// FASTA reader producing [`SequenceRecord`]s
pub struct FastaReader<R> {
    inner: fasta::io::Reader<R>,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            inner: fasta::io::Reader::new(reader),
        }
    }

    /// Iterate over the records in file order
    pub fn records(&mut self) -> impl Iterator<Item = Result<SequenceRecord, ParseError>> + '_ {
        self.inner.records().map(|result| {
            let record = result
                .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

            Ok(SequenceRecord {
                id: String::from_utf8_lossy(record.name()).to_string(),
                description: record
                    .description()
                    .map(|d| String::from_utf8_lossy(d.as_ref()).to_string()),
                sequence: record.sequence().as_ref().to_vec(),
            })
        })
    }
}

/// Open a FASTA file (plain or gzipped) for reading
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened.
pub fn open_fasta(path: &Path) -> Result<FastaReader<Box<dyn BufRead>>, ParseError> {
    Ok(FastaReader::new(open_input(path)?))
}

/// Read the length of every sequence in a FASTA file, keyed by sequence id.
///
/// If an id occurs more than once the last record wins.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read or `ParseError::Noodles`
/// if parsing fails.
pub fn read_sequence_lengths(path: &Path) -> Result<HashMap<String, u64>, ParseError> {
    let mut reader = open_fasta(path)?;
    let mut lengths = HashMap::new();

    for result in reader.records() {
        let record = result?;
        lengths.insert(record.id, record.sequence.len() as u64);
    }

    Ok(lengths)
}

/// FASTA writer accepting [`SequenceRecord`]s
pub struct FastaWriter<W: Write> {
    inner: fasta::io::Writer<W>,
}

impl<W: Write> FastaWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: fasta::io::Writer::new(writer),
        }
    }

    /// Write one record.
    ///
    /// The description is written verbatim unless it is absent or empty.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Noodles` if the definition line is invalid, or
    /// `ParseError::Io` if writing fails.
    pub fn write_record(&mut self, record: &SequenceRecord) -> Result<(), ParseError> {
        let line = match record.description.as_deref() {
            Some(description) if !description.is_empty() => {
                format!(">{} {description}", record.id)
            }
            _ => format!(">{}", record.id),
        };

        let definition: Definition = line
            .parse()
            .map_err(|e| ParseError::Noodles(format!("Invalid FASTA definition '{line}': {e}")))?;
        let sequence = Sequence::from(record.sequence.clone());

        self.inner
            .write_record(&fasta::Record::new(definition, sequence))?;
        Ok(())
    }
}
