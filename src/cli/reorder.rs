use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::cli::OutputFormat;
use crate::core::feature::MIN_FEATURE_FIELDS;
use crate::parsing::fasta::{open_fasta, read_sequence_lengths, FastaWriter};
use crate::parsing::gff::GffReader;
use crate::parsing::mapping_table::read_mapping_table;
use crate::reorder::features::apply_to_features;
use crate::reorder::log::ChangeLog;
use crate::reorder::selector::{load_rename_mapping, Selector};
use crate::reorder::sequences::apply_to_sequences;
use crate::utils::io::{open_input, open_output};

#[derive(Args)]
pub struct ReorderArgs {
    /// Input GFF file
    #[arg(short = 'i', long = "input-gff", alias = "input_gff", required = true)]
    pub input_gff: PathBuf,

    /// Query genome FASTA file
    #[arg(short = 'g', long = "input-genome", alias = "input_genome", required = true)]
    pub input_genome: PathBuf,

    /// Rename mapping TSV produced by `match`
    #[arg(short = 'r', long = "rename-file", alias = "rename_file", required = true)]
    pub rename_file: PathBuf,

    /// Output GFF file
    #[arg(short = 'I', long = "output-gff", alias = "output_gff", required = true)]
    pub output_gff: PathBuf,

    /// Output genome FASTA file
    #[arg(short = 'G', long = "output-genome", alias = "output_genome", required = true)]
    pub output_genome: PathBuf,

    /// Only rename queries whose id starts with this prefix
    #[arg(long, conflicts_with = "length_threshold")]
    pub prefix: Option<String>,

    /// Only rename queries whose sequence is at least this long
    #[arg(long, alias = "length_threshold")]
    pub length_threshold: Option<u64>,

    /// Change log file (default: standard output)
    #[arg(long, alias = "log_file")]
    pub log_file: Option<PathBuf>,
}

/// Execute reorder subcommand
///
/// # Errors
///
/// Returns an error if neither or both selectors are given, or if any input
/// cannot be read or any output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ReorderArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let selector = Selector::from_options(args.length_threshold, args.prefix.clone())?;
    info!("Using {selector}");

    let lengths = read_sequence_lengths(&args.input_genome).with_context(|| {
        format!("Failed to read genome {}", args.input_genome.display())
    })?;
    let rows = read_mapping_table(open_input(&args.rename_file)?)
        .with_context(|| format!("Failed to read mapping {}", args.rename_file.display()))?;
    let mapping = load_rename_mapping(&rows, &lengths, &selector);

    if verbose {
        eprintln!(
            "Applying {} of {} mapping rows ({} sequences in genome)",
            mapping.len(),
            rows.len(),
            lengths.len()
        );
    }

    let mut log = ChangeLog::new();

    let mut gff = GffReader::new(open_input(&args.input_gff)?);
    let mut gff_out = open_output(Some(args.output_gff.as_path()))?;
    apply_to_features(gff.by_ref(), &mut gff_out, &mapping, &mut log)
        .with_context(|| format!("Failed to update {}", args.input_gff.display()))?;
    gff_out.flush()?;
    if gff.skipped() > 0 {
        info!(
            "Skipped {} feature rows with fewer than {MIN_FEATURE_FIELDS} columns",
            gff.skipped()
        );
    }

    let mut genome = open_fasta(&args.input_genome)?;
    let mut genome_out = open_output(Some(args.output_genome.as_path()))?;
    let mut fasta_writer = FastaWriter::new(&mut genome_out);
    apply_to_sequences(genome.records(), &mut fasta_writer, &mapping, &mut log)
        .with_context(|| format!("Failed to update {}", args.input_genome.display()))?;
    drop(fasta_writer);
    genome_out.flush()?;

    let mut log_out = open_output(args.log_file.as_deref())?;
    log.write(&mut log_out, format.into())?;
    log_out.flush()?;

    Ok(())
}
