//! Exports the sample document model to a DOCX file
//!
//! Run with: cargo run --example export_sample

use docx_export::{pipeline, ExportConfig, ExportPayload};
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input_path = Path::new("tests/fixtures/sample_document.json");
    let output_path = Path::new("target/sample_document.docx");

    let payload = ExportPayload::from_json_slice(&std::fs::read(input_path)?)?;
    pipeline::export_to_path(&payload, output_path, &ExportConfig::default())?;

    println!("Created document at: {}", output_path.display());
    Ok(())
}
