//! Command-line interface definitions for docx-export

use clap::Parser;
use std::path::PathBuf;

/// CLI structure for the docx-export application
#[derive(Parser)]
#[command(name = "docx-export")]
#[command(version)]
#[command(about = "Export a rich document model (JSON) to Word .docx", long_about = None)]
pub struct Cli {
    /// Document model JSON file
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output .docx path (defaults to the input path with a .docx extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export configuration TOML file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The output path, derived from the input when not given
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("docx"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        let cli = Cli::parse_from(["docx-export", "notes/report.json"]);
        assert_eq!(cli.output_path(), PathBuf::from("notes/report.docx"));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_explicit_options() {
        let cli = Cli::parse_from([
            "docx-export",
            "in.json",
            "-o",
            "out/final.docx",
            "--config",
            "export.toml",
            "-v",
        ]);
        assert_eq!(cli.output_path(), PathBuf::from("out/final.docx"));
        assert_eq!(cli.config, Some(PathBuf::from("export.toml")));
        assert!(cli.verbose);
    }
}
