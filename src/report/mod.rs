pub mod json;
pub mod md;
pub mod text;

use crate::error::{MirrorError, Result};
use crate::types::report::EvaluationReport;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
    Md,
}

pub fn render(report: &EvaluationReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text::to_text(report)),
        OutputFormat::Json => json::to_json(report).map_err(MirrorError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

/// Persists an already rendered report, creating parent directories.
pub fn write_report(path: &Path, rendered: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, rendered)?;
    Ok(())
}
