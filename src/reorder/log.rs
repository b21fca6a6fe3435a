use std::io::Write;

use serde::Serialize;

/// Which file a change was made in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChangeSource {
    #[serde(rename = "GFF")]
    Gff,
    #[serde(rename = "FASTA")]
    Fasta,
}

impl std::fmt::Display for ChangeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Gff => write!(f, "GFF"),
            Self::Fasta => write!(f, "FASTA"),
        }
    }
}

/// One renamed feature or sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeLogEntry {
    pub source: ChangeSource,
    pub from: String,
    pub to: String,
    pub reverse: bool,
    pub length: u64,
}

impl std::fmt::Display for ChangeLogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} -> {}, Reverse: {}, Length: {}",
            self.source,
            self.from,
            self.to,
            if self.reverse { "Yes" } else { "No" },
            self.length
        )
    }
}

/// How a change log is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One human-readable line per entry
    #[default]
    Text,
    /// Tab-separated with a header row
    Tsv,
    /// One JSON object per line
    Json,
}

/// Ordered change log shared by the feature and sequence passes of one run
#[derive(Debug, Clone, Default)]
pub struct ChangeLog {
    entries: Vec<ChangeLogEntry>,
}

impl ChangeLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: ChangeLogEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ChangeLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write every entry in order
    ///
    /// # Errors
    ///
    /// Returns an error if the writer fails or an entry cannot be serialized.
    pub fn write<W: Write>(&self, writer: &mut W, format: LogFormat) -> std::io::Result<()> {
        match format {
            LogFormat::Text => {
                for entry in &self.entries {
                    writeln!(writer, "{entry}")?;
                }
            }
            LogFormat::Tsv => {
                writeln!(writer, "source\tfrom\tto\treverse\tlength")?;
                for e in &self.entries {
                    writeln!(
                        writer,
                        "{}\t{}\t{}\t{}\t{}",
                        e.source, e.from, e.to, e.reverse, e.length
                    )?;
                }
            }
            LogFormat::Json => {
                for entry in &self.entries {
                    serde_json::to_writer(&mut *writer, entry)?;
                    writeln!(writer)?;
                }
            }
        }
        Ok(())
    }
}
