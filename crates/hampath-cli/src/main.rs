//! `hampath`: per-start Hamiltonian path search over a JSON distance matrix.
//!
//! Logs go to stderr; stdout carries only the report.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

mod loader;
mod report;

use report::{Format, Reporter};

#[derive(Parser, Debug)]
#[command(name = "hampath", version)]
#[command(about = "Find a low-cost Hamiltonian path from every vertex of a complete graph")]
struct Cli {
    /// JSON file holding an n x n distance matrix
    #[arg(default_value = "8n_distances.json")]
    distances: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Report every accepted partial path, not only complete ones
    #[arg(long)]
    all_events: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let graph = loader::load_graph(&cli.distances)?;
    info!(
        path = %cli.distances.display(),
        vertices = graph.vertex_count(),
        "starting search"
    );

    let stdout = io::stdout().lock();
    let mut reporter = Reporter::new(stdout, cli.format, cli.all_events, graph.vertex_count());
    let outcome = hampath_core::find_paths_with(&graph, &mut reporter);
    reporter
        .finish(&outcome)
        .context("failed to write report")?;

    Ok(())
}
