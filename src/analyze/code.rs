use crate::types::scoring::Score;
use crate::types::signals::CodeMetrics;

const LINT_SCALE_MAX: f64 = 10.0;
const COMPLEXITY_PENALTY_PER_POINT: f64 = 10.0;

pub fn code_quality_score(metrics: &CodeMetrics) -> Score {
    let lint = if metrics.lint_score.is_nan() {
        0.0
    } else {
        metrics.lint_score.clamp(0.0, LINT_SCALE_MAX)
    };
    (lint / LINT_SCALE_MAX * 100.0).clamp(0.0, 100.0)
}

/// Saturates at 0 once average complexity reaches 10.
pub fn maintainability_score(metrics: &CodeMetrics) -> Score {
    let complexity = if metrics.average_complexity.is_nan() {
        0.0
    } else {
        metrics.average_complexity.max(0.0)
    };
    (100.0 - complexity * COMPLEXITY_PENALTY_PER_POINT).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(lint_score: f64, average_complexity: f64) -> CodeMetrics {
        CodeMetrics {
            lint_score,
            average_complexity,
            ..CodeMetrics::default()
        }
    }

    #[test]
    fn code_quality_scales_lint_linearly() {
        assert_eq!(code_quality_score(&metrics(10.0, 0.0)), 100.0);
        assert_eq!(code_quality_score(&metrics(7.5, 0.0)), 75.0);
        assert_eq!(code_quality_score(&metrics(0.0, 0.0)), 0.0);
    }

    #[test]
    fn code_quality_clamps_out_of_range_lint() {
        assert_eq!(code_quality_score(&metrics(-3.0, 0.0)), 0.0);
        assert_eq!(code_quality_score(&metrics(14.0, 0.0)), 100.0);
        assert_eq!(code_quality_score(&metrics(f64::NAN, 0.0)), 0.0);
    }

    #[test]
    fn maintainability_drops_ten_points_per_complexity_unit() {
        assert_eq!(maintainability_score(&metrics(0.0, 0.0)), 100.0);
        assert_eq!(maintainability_score(&metrics(0.0, 2.5)), 75.0);
        assert_eq!(maintainability_score(&metrics(0.0, 10.0)), 0.0);
        assert_eq!(maintainability_score(&metrics(0.0, 20.0)), 0.0);
        assert_eq!(maintainability_score(&metrics(0.0, f64::INFINITY)), 0.0);
    }
}
