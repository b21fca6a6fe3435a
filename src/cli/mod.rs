//! Command-line interface for gf-reorder.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **match**: Collapse a PAF file into one best reference per query sequence
//! - **reorder**: Rename and reorient a GFF file and its genome using a mapping table
//!
//! ## Usage
//!
//! ```text
//! # Align the query assembly to the reference, then build the mapping
//! minimap2 -x asm5 ref.fa query.fa > query_vs_ref.paf
//! gf-reorder match -i query_vs_ref.paf -o rename.tsv --ref-prefix chr --uniq
//!
//! # Apply it to every query sequence of at least 1 Mb
//! gf-reorder reorder -i genes.gff3 -g query.fa -r rename.tsv \
//!     -I genes.renamed.gff3 -G query.renamed.fa --length-threshold 1000000
//! ```

use clap::{Parser, Subcommand};

use crate::reorder::log::LogFormat;

pub mod matching;
pub mod reorder;

#[derive(Parser)]
#[command(name = "gf-reorder")]
#[command(version)]
#[command(about = "Rename and reorient GFF and FASTA files against a reference assembly")]
#[command(
    long_about = "gf-reorder renames the sequences of a query assembly after the reference sequences they align to.\n\nIt works in two steps:\n- match: summarize whole-genome alignments (PAF) into a rename mapping table\n- reorder: apply the mapping to a GFF file and the query FASTA, reverse-complementing sequences and mirroring feature coordinates where needed"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for the mapping table (match) or the change log (reorder)
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Process a PAF file into a rename mapping TSV
    Match(matching::MatchArgs),

    /// Update GFF and FASTA files based on a rename mapping
    Reorder(reorder::ReorderArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

impl From<OutputFormat> for LogFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self::Text,
            OutputFormat::Json => Self::Json,
            OutputFormat::Tsv => Self::Tsv,
        }
    }
}
