//! Raw repository signals gathered by the scan phase.
//!
//! A [`RepositorySignals`] value is built once per run and never mutated by
//! the scoring or recommendation code.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A code block whose cyclomatic complexity exceeds the hotspot threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplexityHotspot {
    pub location: String,
    pub name: String,
    pub complexity: f64,
}

/// Numbers taken from external lint and complexity tools.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeMetrics {
    pub python_file_count: usize,
    /// Mean complexity across analyzed blocks, 0 when no blocks were found.
    pub average_complexity: f64,
    pub complexity_hotspots: Vec<ComplexityHotspot>,
    /// Lint rating on a 0..=10 scale, 0 when unavailable.
    pub lint_score: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectFlags {
    pub has_readme: bool,
    pub has_tests: bool,
    pub test_file_count: usize,
    pub has_ci: bool,
    pub has_dependency_manifest: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadmeSignals {
    pub section_count: usize,
    pub has_installation: bool,
    pub has_usage: bool,
    pub has_contributing: bool,
}

impl ReadmeSignals {
    /// Names of the conventional README sections that were not found.
    pub fn missing_sections(&self) -> Vec<&'static str> {
        [
            ("installation", self.has_installation),
            ("usage", self.has_usage),
            ("contributing", self.has_contributing),
        ]
        .into_iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| name)
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostingMetadata {
    #[serde(default, alias = "stargazers_count")]
    pub stars: u64,
    #[serde(default, alias = "forks_count")]
    pub forks: u64,
    #[serde(default, alias = "open_issues_count")]
    pub open_issues: u64,
    #[serde(default)]
    pub commit_count: u64,
    #[serde(default, alias = "languages")]
    pub language_breakdown: BTreeMap<String, u64>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepositorySignals {
    pub metrics: CodeMetrics,
    pub flags: ProjectFlags,
    pub readme: ReadmeSignals,
    pub folder_issues: Vec<String>,
    pub hosting: Option<HostingMetadata>,
}
