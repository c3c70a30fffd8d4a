//! Batch LUT generation

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
#[allow(unused_imports)]
use tracing::{debug, info, trace, warn};

use lutforge_cube::LutConfig;

/// Discovers every `*.json` under `config_dir` and bakes each into a
/// `.cube` file. A failing configuration is reported and skipped; any
/// failure makes the whole run exit non-zero after the summary.
pub fn run(config_dir: &Path, output_dir: &Path, verbose: bool) -> Result<()> {
    trace!(config_dir = %config_dir.display(), output_dir = %output_dir.display(), "batch::run");

    // Fatal: nowhere to put results
    std::fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory: {}", output_dir.display())
    })?;

    // Fatal: nothing to traverse. The glob below reports zero matches
    // for a missing directory instead of an error, so check explicitly.
    if !config_dir.is_dir() {
        bail!("Config directory not found: {}", config_dir.display());
    }

    let pattern = config_dir.join("**").join("*.json");
    let pattern = pattern.to_string_lossy().into_owned();
    let files: Vec<PathBuf> = glob::glob(&pattern)
        .with_context(|| format!("Invalid search pattern: {pattern}"))?
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("Failed to scan config directory: {}", config_dir.display()))?
        .into_iter()
        .filter(|p| p.is_file())
        .collect();

    if files.is_empty() {
        warn!(pattern = %pattern, "No configuration files found");
        println!("No configuration files found under {}", config_dir.display());
        return Ok(());
    }

    info!(files = files.len(), pattern = %pattern, "Starting batch generation");

    if verbose {
        println!(
            "Found {} configuration files under '{}'",
            files.len(),
            config_dir.display()
        );
    }

    // Process configurations in parallel; each file is isolated
    let results: Vec<Result<()>> = files
        .par_iter()
        .map(|input| process_file(input, output_dir, verbose))
        .collect();

    let mut success = 0;
    let mut failed = 0;
    for r in results {
        match r {
            Ok(_) => success += 1,
            Err(e) => {
                failed += 1;
                eprintln!("Error: {e:#}");
            }
        }
    }

    info!(success = success, failed = failed, "Batch generation complete");
    println!("Processed: {} success, {} failed", success, failed);

    if failed > 0 {
        bail!("{} configurations failed", failed);
    }

    Ok(())
}

fn process_file(input: &Path, output_dir: &Path, verbose: bool) -> Result<()> {
    let config = LutConfig::read(input)
        .with_context(|| format!("Failed to load config: {}", input.display()))?;

    let dest = resolve_output(output_dir, &config.output);

    if verbose {
        println!("Processing {} -> {}", input.display(), dest.display());
    }

    lutforge_cube::write_file(&dest, &config)
        .with_context(|| format!("Failed to generate: {}", dest.display()))?;

    info!(config = %input.display(), output = %dest.display(), "Generated LUT");

    Ok(())
}

/// Joins the configured output name onto the output directory, unless
/// the name is already an absolute path.
fn resolve_output(output_dir: &Path, output: &str) -> PathBuf {
    let output = Path::new(output);
    if output.is_absolute() {
        output.to_path_buf()
    } else {
        output_dir.join(output)
    }
}
