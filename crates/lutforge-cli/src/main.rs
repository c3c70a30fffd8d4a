//! lutforge - Batch .cube LUT generator
//!
//! Scans a directory tree for JSON LUT configurations and bakes each one
//! into a .cube file through the Apple Log to Rec.709 display pipeline.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod batch;

#[derive(Parser)]
#[command(name = "lutforge")]
#[command(author, version, about = "Batch Apple Log to Rec.709 .cube LUT generator")]
#[command(long_about = "
Scans a configuration directory (recursively) for JSON LUT recipes and
bakes each one into a .cube file through the Apple Log to Rec.709
display pipeline. Failed configurations are reported and skipped; the
rest of the batch still completes.

Examples:
  lutforge                                    # configs/ -> output/
  lutforge --config-dir looks --output-dir luts
  lutforge -j 8 -v                            # 8 worker threads, verbose
")]
struct Cli {
    /// Directory containing LUT configuration files
    #[arg(long, default_value = "configs")]
    config_dir: PathBuf,

    /// Directory for generated LUT files
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, default_value = "0")]
    threads: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins; otherwise default to info (debug with --verbose)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "info" }));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    batch::run(&cli.config_dir, &cli.output_dir, cli.verbose)
}
