//! File statistics mock binary
//!
//! Reads a JSON document from stdin and prints random chunk and page counts.
//!
//! Run with: echo '{}' | cargo run -p rag-mock --bin rag-mock-file-stats

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use rag_mock::providers::{process_file_input, FileStatsProvider, MockFileStatsProvider};
use rag_mock::{logging, output, MockConfig};

#[derive(Parser)]
#[command(name = "rag-mock-file-stats")]
#[command(about = "Report fabricated chunk and page counts for a file payload read from stdin")]
#[command(version)]
struct Cli {
    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file with mock ranges
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match &cli.config {
        Some(path) => MockConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => MockConfig::default(),
    };

    let provider = match cli.seed {
        Some(seed) => MockFileStatsProvider::with_seed(config.file_stats, seed)?,
        None => MockFileStatsProvider::from_config(config.file_stats)?,
    };

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;
    tracing::debug!(provider = provider.name(), bytes = input.len(), "Processing file payload");

    let stats = process_file_input(&provider, &input).context("Invalid JSON on stdin")?;
    output::write_compact(std::io::stdout().lock(), &stats)?;

    Ok(())
}
