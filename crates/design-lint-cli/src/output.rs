//! Report output: stdout or a destination file.

use anyhow::{Context, Result};
use std::path::Path;

/// Writes the rendered report.
///
/// With a destination path the file is overwritten (not appended) and a
/// confirmation line goes to stdout; otherwise the report itself is
/// printed to stdout.
pub fn write(report: &str, destination: Option<&Path>) -> Result<()> {
    match destination {
        Some(path) => {
            std::fs::write(path, report)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            println!("Report written to {}", path.display());
        }
        None => print!("{report}"),
    }
    Ok(())
}
