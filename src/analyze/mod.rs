//! Scoring and recommendation core.
//!
//! Everything in here is a pure function of [`RepositorySignals`] and a
//! [`ScoringConfig`]; no I/O happens past the scan phase.

pub mod activity;
pub mod code;
pub mod documentation;
pub mod recommend;
pub mod structure;

use crate::types::report::RecommendationResult;
use crate::types::scoring::{Level, ScoreBreakdown, ScoreResult, ScoringConfig};
use crate::types::signals::RepositorySignals;
use tracing::debug;

const FLOAT_SLACK: f64 = 1e-9;

pub fn compute_score(signals: &RepositorySignals, config: &ScoringConfig) -> ScoreResult {
    let breakdown = ScoreBreakdown {
        code_quality: code::code_quality_score(&signals.metrics),
        maintainability: code::maintainability_score(&signals.metrics),
        structure: structure::structure_score(
            &signals.folder_issues,
            config.thresholds.structure_penalty,
        ),
        documentation: documentation::documentation_score(&signals.flags, &signals.readme),
        tests: binary_score(signals.flags.test_file_count > 0),
        ci: binary_score(signals.flags.has_ci),
        commit_activity: activity::commit_activity_score(signals.hosting.as_ref()),
    };

    let weighted = breakdown.weighted_total(&config.weights);
    let overall_score = (weighted + FLOAT_SLACK).floor().clamp(0.0, 100.0) as u8;
    let level = Level::from_score(overall_score, &config.levels);
    debug!(?breakdown, weighted, overall_score, %level, "computed score");

    ScoreResult {
        overall_score,
        level,
        breakdown,
    }
}

pub fn evaluate(
    signals: &RepositorySignals,
    config: &ScoringConfig,
) -> (ScoreResult, RecommendationResult) {
    let score = compute_score(signals, config);
    let recommendations = RecommendationResult {
        summary: recommend::generate_summary(&score, signals, &config.thresholds),
        roadmap: recommend::generate_roadmap(signals, &config.thresholds),
    };
    (score, recommendations)
}

fn binary_score(present: bool) -> f64 {
    if present {
        100.0
    } else {
        0.0
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{healthy_signals, neglected_signals};
    use super::*;
    use crate::types::scoring::{Category, CategoryWeights};
    use crate::types::signals::{ComplexityHotspot, HostingMetadata};

    #[test]
    fn healthy_repository_scores_full_marks() {
        let (score, recommendations) = evaluate(&healthy_signals(), &ScoringConfig::default());
        assert_eq!(score.overall_score, 100);
        assert_eq!(score.level, Level::Advanced);
        assert!(recommendations.roadmap.is_empty());
    }

    #[test]
    fn neglected_repository_is_beginner() {
        let score = compute_score(&neglected_signals(), &ScoringConfig::default());
        assert_eq!(score.breakdown.structure, 85.0);
        assert_eq!(score.breakdown.maintainability, 0.0);
        assert_eq!(score.breakdown.documentation, 0.0);
        assert_eq!(score.breakdown.tests, 0.0);
        assert_eq!(score.breakdown.ci, 0.0);
        assert_eq!(score.breakdown.commit_activity, 50.0);
        // 0.15 * 85 + 0.10 * 50 = 17.75
        assert_eq!(score.overall_score, 17);
        assert_eq!(score.level, Level::Beginner);
    }

    #[test]
    fn scoring_is_idempotent() {
        let signals = neglected_signals();
        let config = ScoringConfig::default();
        assert_eq!(compute_score(&signals, &config), compute_score(&signals, &config));
        assert_eq!(evaluate(&signals, &config), evaluate(&signals, &config));
    }

    #[test]
    fn adding_tests_never_lowers_the_score() {
        let config = ScoringConfig::default();
        let mut signals = neglected_signals();
        let before = compute_score(&signals, &config).overall_score;
        signals.flags.test_file_count = 1;
        let after = compute_score(&signals, &config).overall_score;
        assert!(after >= before);
    }

    #[test]
    fn adding_folder_issues_never_raises_the_score() {
        let config = ScoringConfig::default();
        let mut signals = healthy_signals();
        let mut previous = compute_score(&signals, &config).overall_score;
        for index in 0..10 {
            signals.folder_issues.push(format!("issue {index}"));
            let current = compute_score(&signals, &config).overall_score;
            assert!(current <= previous);
            previous = current;
        }
    }

    #[test]
    fn hosting_metadata_only_moves_commit_activity() {
        let config = ScoringConfig::default();
        let mut without = healthy_signals();
        without.hosting = None;
        let mut with = healthy_signals();
        with.hosting = Some(HostingMetadata {
            commit_count: 5,
            ..HostingMetadata::default()
        });

        let a = compute_score(&without, &config);
        let b = compute_score(&with, &config);
        for category in Category::ALL {
            if category != Category::CommitActivity {
                assert_eq!(a.breakdown.get(category), b.breakdown.get(category));
            }
        }
        assert_eq!(a.breakdown.commit_activity, 50.0);
        assert_eq!(b.breakdown.commit_activity, 50.0);
        assert_eq!(a.overall_score, b.overall_score);
    }

    #[test]
    fn score_stays_in_range_for_extreme_inputs() {
        let config = ScoringConfig::default();
        let mut signals = neglected_signals();
        signals.metrics.lint_score = -50.0;
        signals.metrics.average_complexity = f64::INFINITY;
        signals.folder_issues = (0..100).map(|index| index.to_string()).collect();
        let low = compute_score(&signals, &config);
        assert!(low.overall_score <= 100);
        assert_eq!(low.level, Level::Beginner);

        let mut signals = healthy_signals();
        signals.metrics.lint_score = 500.0;
        signals.metrics.average_complexity = -4.0;
        let high = compute_score(&signals, &config);
        assert_eq!(high.overall_score, 100);
    }

    #[test]
    fn custom_weights_shift_the_total() {
        let mut weights = CategoryWeights::default();
        weights.set(Category::CodeQuality, 0.0);
        weights.set(Category::Structure, 0.40);
        let config = ScoringConfig::default().with_weights(weights);
        // 0.40 * 85 + 0.10 * 50 = 39
        assert_eq!(compute_score(&neglected_signals(), &config).overall_score, 39);
    }

    #[test]
    fn evaluate_summary_mentions_hotspots() {
        let mut signals = healthy_signals();
        signals.metrics.complexity_hotspots.push(ComplexityHotspot {
            location: "app/core.py:10".to_string(),
            name: "parse".to_string(),
            complexity: 14.0,
        });
        let (_, recommendations) = evaluate(&signals, &ScoringConfig::default());
        assert!(recommendations.summary.contains("parse (14)"));
    }
}
