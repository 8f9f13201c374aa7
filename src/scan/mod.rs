pub mod analyzers;
pub mod filesystem;
pub mod hosting;
pub mod layout;
pub mod readme;

use crate::error::Result;
use crate::types::signals::{CodeMetrics, ProjectFlags, RepositorySignals};
use filesystem::{file_name_lower, list_files, root_entries, RootEntry};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const DEPENDENCY_MANIFESTS: [&str; 4] =
    ["requirements.txt", "pyproject.toml", "setup.py", "Pipfile"];

/// Saved outputs of external tools to fold into the signals.
#[derive(Debug, Clone, Default)]
pub struct ScanInputs {
    pub lint_report: Option<PathBuf>,
    pub complexity_report: Option<PathBuf>,
    pub hosting_metadata: Option<PathBuf>,
    pub hotspot_threshold: f64,
}

#[derive(Debug, Clone)]
pub struct Discovery {
    pub signals: RepositorySignals,
    /// Inputs that could not be used; the run continues with defaults.
    pub warnings: Vec<String>,
}

pub fn discover(root: &Path, inputs: &ScanInputs) -> Result<Discovery> {
    let entries = root_entries(root)?;
    let files = list_files(root);
    let mut warnings = Vec::new();

    let python_files = files
        .iter()
        .filter(|path| path.extension().is_some_and(|ext| ext == "py"))
        .count();
    let test_file_count = files
        .iter()
        .map(|path| file_name_lower(path))
        .filter(|name| name.contains("test") && name.ends_with(".py"))
        .count();
    info!(
        files = files.len(),
        python_files,
        test_file_count,
        "walked repository"
    );

    let readme_path = entries
        .iter()
        .find(|entry| !entry.is_dir && entry.name.eq_ignore_ascii_case("readme.md"))
        .map(|entry| root.join(&entry.name));
    let readme = readme::analyze_readme(readme_path.as_deref());

    let flags = ProjectFlags {
        has_readme: readme_path.is_some(),
        has_tests: test_file_count > 0 || has_test_entry(&entries),
        test_file_count,
        has_ci: root.join(".github/workflows").is_dir(),
        has_dependency_manifest: entries
            .iter()
            .any(|entry| !entry.is_dir && DEPENDENCY_MANIFESTS.contains(&entry.name.as_str())),
    };

    let mut metrics = CodeMetrics {
        python_file_count: python_files,
        ..CodeMetrics::default()
    };

    if let Some(path) = &inputs.lint_report {
        match analyzers::read_lint_report(path) {
            Ok(score) => metrics.lint_score = score,
            Err(err) => degrade(&mut warnings, format!("lint report ignored: {err}")),
        }
    }

    if let Some(path) = &inputs.complexity_report {
        match analyzers::read_complexity_report(path, inputs.hotspot_threshold) {
            Ok(summary) => {
                metrics.average_complexity = summary.average_complexity;
                metrics.complexity_hotspots = summary.hotspots;
                for skipped in summary.skipped {
                    warnings.push(format!("complexity entry skipped: {skipped}"));
                }
            }
            Err(err) => degrade(&mut warnings, format!("complexity report ignored: {err}")),
        }
    }

    let hosting = match &inputs.hosting_metadata {
        Some(path) => match hosting::load_hosting_metadata(path) {
            Ok(metadata) => Some(metadata),
            Err(err) => {
                degrade(&mut warnings, format!("hosting metadata ignored: {err}"));
                None
            }
        },
        None => None,
    };

    Ok(Discovery {
        signals: RepositorySignals {
            metrics,
            flags,
            readme,
            folder_issues: layout::folder_issues(&entries),
            hosting,
        },
        warnings,
    })
}

fn has_test_entry(entries: &[RootEntry]) -> bool {
    entries
        .iter()
        .any(|entry| entry.name.to_lowercase().contains("test"))
}

fn degrade(warnings: &mut Vec<String>, message: String) {
    warn!("{message}");
    warnings.push(message);
}
