//! Query mock binary
//!
//! Prints a fabricated answer for the built-in sample query, or for a request
//! read from stdin with `--stdin`.
//!
//! Run with: cargo run -p rag-mock --bin rag-mock-query -- --seed 7

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use rag_mock::providers::{AnswerProvider, MockAnswerProvider};
use rag_mock::types::KnownModel;
use rag_mock::{logging, output, MockConfig, QueryRequest};

#[derive(Parser)]
#[command(name = "rag-mock-query")]
#[command(about = "Answer a query with a fabricated, citation-bearing response")]
#[command(version)]
struct Cli {
    /// Read the query request as JSON from stdin instead of using the sample
    #[arg(long)]
    stdin: bool,

    /// Override the query text
    #[arg(short, long)]
    query: Option<String>,

    /// Override the number of references to return
    #[arg(short = 'n', long, allow_negative_numbers = true)]
    references: Option<i64>,

    /// Override the model name
    #[arg(short, long)]
    model: Option<String>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file with mock ranges and placeholder values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print single-line JSON
    #[arg(long)]
    compact: bool,

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

    let mut request = if cli.stdin {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read query request from stdin")?;
        serde_json::from_str::<QueryRequest>(&raw).context("Invalid query request")?
    } else {
        QueryRequest::sample()
    };

    if let Some(query) = cli.query {
        request.query = query;
    }
    if let Some(n) = cli.references {
        request.num_references = n;
    }
    if let Some(model) = cli.model {
        request.model = model;
    }

    if KnownModel::from_id(&request.model).is_none() {
        tracing::info!(model = %request.model, "Model is not offered by any real provider");
    }

    let provider = match cli.seed {
        Some(seed) => MockAnswerProvider::with_seed(config.query, seed)?,
        None => MockAnswerProvider::from_config(config.query)?,
    };
    tracing::debug!(provider = provider.name(), ?request, "Answering query");

    let result = provider.answer(&request)?;

    let stdout = std::io::stdout().lock();
    if cli.compact {
        output::write_compact(stdout, &result)?;
    } else {
        output::write_pretty(stdout, &result)?;
    }

    Ok(())
}
