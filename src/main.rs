use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod matching;
mod parsing;
mod reorder;
mod utils;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("gf_reorder=debug,info")
    } else {
        EnvFilter::new("gf_reorder=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Match(args) => {
            cli::matching::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Reorder(args) => {
            cli::reorder::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
