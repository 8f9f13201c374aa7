use crate::types::scoring::Score;
use crate::types::signals::{ProjectFlags, ReadmeSignals};

const MISSING_INSTALLATION_PENALTY: f64 = 15.0;
const MISSING_USAGE_PENALTY: f64 = 10.0;
const MISSING_CONTRIBUTING_PENALTY: f64 = 10.0;

/// A repository without any README scores 0 here.
pub fn documentation_score(flags: &ProjectFlags, readme: &ReadmeSignals) -> Score {
    if !flags.has_readme {
        return 0.0;
    }
    let mut score: f64 = 100.0;
    if !readme.has_installation {
        score -= MISSING_INSTALLATION_PENALTY;
    }
    if !readme.has_usage {
        score -= MISSING_USAGE_PENALTY;
    }
    if !readme.has_contributing {
        score -= MISSING_CONTRIBUTING_PENALTY;
    }
    score.clamp(0.0, 100.0)
}
