use super::filesystem::read_to_string_if_exists;
use crate::types::signals::ReadmeSignals;
use std::path::Path;

pub fn analyze_readme(readme_path: Option<&Path>) -> ReadmeSignals {
    let Some(content) = readme_path.and_then(read_to_string_if_exists) else {
        return ReadmeSignals::default();
    };
    readme_signals(&content)
}

/// Sections are recognised from Markdown heading lines only.
pub fn readme_signals(content: &str) -> ReadmeSignals {
    let lowered = content.to_lowercase();
    let headings = lowered
        .lines()
        .map(str::trim_start)
        .filter(|line| line.starts_with('#'))
        .collect::<Vec<_>>();
    let has_heading = |keyword: &str| headings.iter().any(|heading| heading.contains(keyword));

    ReadmeSignals {
        section_count: headings.len(),
        has_installation: has_heading("install"),
        has_usage: has_heading("usage"),
        has_contributing: has_heading("contribut"),
    }
}
