use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use tracing::info;

use crate::cli::OutputFormat;
use crate::matching::engine::{MatchingConfig, MatchingEngine};
use crate::parsing::mapping_table::write_mapping_table;
use crate::parsing::paf::PafReader;
use crate::utils::io::{open_input, open_output};

#[derive(Args)]
pub struct MatchArgs {
    /// Input PAF file (optionally gzipped). Use '-' for stdin
    #[arg(short, long, required = true)]
    pub input: PathBuf,

    /// Output TSV file (default: standard output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Keep only the best query for each reference
    #[arg(short, long)]
    pub uniq: bool,

    /// Only use alignments whose reference id starts with this prefix
    #[arg(long)]
    pub ref_prefix: Option<String>,

    /// Only use alignments whose query id starts with this prefix
    #[arg(long)]
    pub query_prefix: Option<String>,

    /// Minimum total aligned length (queryLenAgg) to keep a match
    #[arg(long, default_value = "0")]
    pub min_query_len: u64,

    /// Minimum absolute strand-signed aligned length (queryRevCompLen) to keep a match
    #[arg(long, default_value = "0")]
    pub min_rev_comp_len: u64,
}

impl From<&MatchArgs> for MatchingConfig {
    fn from(args: &MatchArgs) -> Self {
        Self {
            ref_prefix: args.ref_prefix.clone(),
            query_prefix: args.query_prefix.clone(),
            min_query_len: args.min_query_len,
            min_rev_comp_len: args.min_rev_comp_len,
            unique_by_ref: args.uniq,
        }
    }
}

/// Execute match subcommand
///
/// # Errors
///
/// Returns an error if the PAF cannot be read or parsed, or the output cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: MatchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let engine = MatchingEngine::new(MatchingConfig::from(&args));

    let reader = PafReader::new(open_input(&args.input)?);
    let entries = engine.try_find_matches(reader)?;

    info!("Selected {} query -> reference matches", entries.len());
    if verbose {
        let reversed = entries.iter().filter(|e| e.is_reverse()).count();
        eprintln!(
            "Matched {} query sequences ({reversed} reverse-complemented)",
            entries.len()
        );
    }

    let mut out = open_output(args.output.as_deref())?;
    match format {
        OutputFormat::Text | OutputFormat::Tsv => write_mapping_table(&mut out, &entries)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &entries)?;
            writeln!(out)?;
        }
    }
    out.flush()?;

    Ok(())
}
