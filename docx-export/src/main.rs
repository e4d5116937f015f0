//! docx-export - rich document model to Word (.docx) export
//!
//! A CLI front end that reads a document model JSON file and writes the
//! corresponding .docx file.

#![deny(unsafe_code)]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::all))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(clippy::pedantic))]
#![cfg_attr(all(not(debug_assertions), not(test)), deny(missing_docs))]
// Allow some pedantic lints that are too strict for this project
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use docx_export::{pipeline, ExportConfig, ExportPayload};

/// Main entry point for the docx-export CLI application
fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Run the CLI application
fn run() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging if verbose
    if cli.verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let config = match &cli.config {
        Some(path) => ExportConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ExportConfig::default(),
    };

    let output = cli.output_path();
    println!("Input: {}", cli.input.display());
    println!("Output: {}", output.display());

    let bytes = std::fs::read(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input.display()))?;
    let payload = ExportPayload::from_json_slice(&bytes)
        .with_context(|| format!("Failed to parse document model {}", cli.input.display()))?;

    pipeline::export_to_path(&payload, &output, &config)
        .with_context(|| format!("Failed to export DOCX to {}", output.display()))?;

    println!("✓ Successfully wrote: {}", output.display());
    Ok(())
}
