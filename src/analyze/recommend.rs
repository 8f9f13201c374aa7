//! Narrative summary and remediation roadmap.
//!
//! Both outputs are gated on the same signal checks. The summary states what
//! was observed; the roadmap turns each observation into one action, ordered
//! from the highest-impact area (layout) down to code-level cleanup.

use crate::types::scoring::{Level, ScoreResult, SignalThresholds};
use crate::types::signals::{ComplexityHotspot, RepositorySignals};

pub const ACTION_RESTRUCTURE: &str =
    "Reorganize source into a conventional top-level layout (src/ or lib/ for code, separate folders for docs and configs)";
pub const ACTION_ADD_TESTS: &str = "Add automated tests covering the core modules";
pub const ACTION_ADD_CI: &str =
    "Add a continuous-integration workflow (for example under .github/workflows) that runs lint and tests";
pub const ACTION_FIX_LINT: &str = "Address static-analysis findings to raise the lint score";
pub const ACTION_REFACTOR: &str = "Refactor functions exceeding the complexity threshold";
pub const ACTION_DECLARE_DEPENDENCIES: &str =
    "Declare dependencies in a manifest such as requirements.txt or pyproject.toml";

fn framing_sentence(level: Level) -> &'static str {
    match level {
        Level::Advanced => "Excellent project depth and a clean codebase.",
        Level::Intermediate => "Solid foundation with consistent code; some improvements are needed.",
        Level::Beginner => "Early-stage project with basic structure and clear room to grow.",
    }
}

fn baseline_sentence(level: Level) -> &'static str {
    match level {
        Level::Advanced => {
            "Excellent project depth and a clean codebase; every hygiene check passed."
        }
        Level::Intermediate => {
            "Solid foundation: structure, documentation, tests and CI are all in place."
        }
        Level::Beginner => {
            "Hygiene basics are in place; keep building on them as the project grows."
        }
    }
}

pub fn generate_summary(
    score: &ScoreResult,
    signals: &RepositorySignals,
    thresholds: &SignalThresholds,
) -> String {
    let mut observations = Vec::new();

    if !signals.folder_issues.is_empty() {
        observations.push(format!(
            "Structural issues found: {}.",
            signals
                .folder_issues
                .iter()
                .map(|issue| issue.trim_end_matches('.'))
                .collect::<Vec<_>>()
                .join("; ")
        ));
    }

    if !signals.flags.has_readme {
        observations.push(
            "No README was found, so installation, usage and contributing guidance are missing."
                .to_string(),
        );
    } else {
        let missing = signals.readme.missing_sections();
        if !missing.is_empty() {
            observations.push(format!(
                "README is missing {} {}.",
                missing.join(", "),
                if missing.len() == 1 {
                    "section"
                } else {
                    "sections"
                }
            ));
        }
    }

    if signals.flags.test_file_count == 0 {
        observations.push("No automated tests were detected.".to_string());
    }

    if !signals.flags.has_ci {
        observations.push("No continuous-integration workflow was found.".to_string());
    }

    if !signals.metrics.complexity_hotspots.is_empty() {
        observations.push(format!(
            "Complexity hotspots: {}.",
            describe_hotspots(&signals.metrics.complexity_hotspots)
        ));
    }

    if signals.metrics.lint_score < thresholds.lint_quality {
        observations.push(format!(
            "Lint score is {:.2}/10, below the {:.1}/10 quality bar.",
            signals.metrics.lint_score.clamp(0.0, 10.0),
            thresholds.lint_quality
        ));
    }

    if needs_dependency_manifest(signals) {
        observations.push("No dependency manifest was found for the Python sources.".to_string());
    }

    if observations.is_empty() {
        return baseline_sentence(score.level).to_string();
    }

    let mut sentences = vec![framing_sentence(score.level).to_string()];
    sentences.extend(observations);
    sentences.join(" ")
}

pub fn generate_roadmap(signals: &RepositorySignals, thresholds: &SignalThresholds) -> Vec<String> {
    let mut roadmap = Vec::new();

    if !signals.folder_issues.is_empty() {
        push_unique(&mut roadmap, ACTION_RESTRUCTURE.to_string());
    }

    if !signals.flags.has_readme {
        push_unique(
            &mut roadmap,
            "Add a README with installation, usage and contributing sections".to_string(),
        );
    } else {
        let missing = signals.readme.missing_sections();
        if !missing.is_empty() {
            push_unique(
                &mut roadmap,
                format!("Extend README with the missing sections: {}", missing.join(", ")),
            );
        }
    }

    if signals.flags.test_file_count == 0 {
        push_unique(&mut roadmap, ACTION_ADD_TESTS.to_string());
    }

    if !signals.flags.has_ci {
        push_unique(&mut roadmap, ACTION_ADD_CI.to_string());
    }

    if signals.metrics.lint_score < thresholds.lint_quality {
        push_unique(
            &mut roadmap,
            format!(
                "{} (currently {:.2}/10, target {:.1}/10)",
                ACTION_FIX_LINT,
                signals.metrics.lint_score.clamp(0.0, 10.0),
                thresholds.lint_quality
            ),
        );
    }

    if !signals.metrics.complexity_hotspots.is_empty() {
        let mut names = Vec::new();
        for hotspot in &signals.metrics.complexity_hotspots {
            if !names.contains(&hotspot.name.as_str()) {
                names.push(hotspot.name.as_str());
            }
        }
        push_unique(
            &mut roadmap,
            format!("{}: {}", ACTION_REFACTOR, names.join(", ")),
        );
    }

    if needs_dependency_manifest(signals) {
        push_unique(&mut roadmap, ACTION_DECLARE_DEPENDENCIES.to_string());
    }

    roadmap
}

fn needs_dependency_manifest(signals: &RepositorySignals) -> bool {
    signals.metrics.python_file_count > 0 && !signals.flags.has_dependency_manifest
}

fn push_unique(roadmap: &mut Vec<String>, step: String) {
    if !roadmap.contains(&step) {
        roadmap.push(step);
    }
}

fn describe_hotspots(hotspots: &[ComplexityHotspot]) -> String {
    hotspots
        .iter()
        .map(|hotspot| format!("{} ({})", hotspot.name, format_complexity(hotspot.complexity)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_complexity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
