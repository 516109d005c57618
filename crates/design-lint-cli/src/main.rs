//! design-lint CLI tool.
//!
//! Usage:
//! ```bash
//! design-lint src/styles src/components/App.jsx
//! design-lint --config guidelines.toml --format json --output report.json src/
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use design_lint_core::{GuidelineConfig, ReportFormat, Scanner};
use design_lint_rules::{markup_checks, stylesheet_checks};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod output;

/// Validates stylesheet and markup files against design guidelines
#[derive(Parser)]
#[command(name = "design-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Files or directories to validate
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Path to guideline configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Output format for the report.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text report.
    #[default]
    Text,
    /// Machine-readable JSON array.
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self::Text,
            OutputFormat::Json => Self::Json,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // A malformed config aborts before any scanning
    let config = GuidelineConfig::load(cli.config.as_deref())
        .context("Failed to load guideline configuration")?;

    let scanner = Scanner::builder()
        .config(config)
        .stylesheet_checks(stylesheet_checks())
        .markup_checks(markup_checks())
        .build();

    tracing::info!(
        "Validating {} path(s) with {} checks",
        cli.paths.len(),
        scanner.check_count()
    );

    let result = scanner.scan(&cli.paths).context("Scan failed")?;

    let report = design_lint_core::report::render(&result, cli.format.into())
        .context("Failed to render report")?;

    output::write(&report, cli.output.as_deref())?;

    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}
