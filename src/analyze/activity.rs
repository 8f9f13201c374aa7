use crate::types::scoring::Score;
use crate::types::signals::HostingMetadata;

const BASELINE: f64 = 50.0;
const STEP: f64 = 25.0;
const ACTIVE_COMMITS: u64 = 10;
const SUSTAINED_COMMITS: u64 = 50;

/// Neutral baseline when hosting metadata is unavailable.
pub fn commit_activity_score(hosting: Option<&HostingMetadata>) -> Score {
    let Some(metadata) = hosting else {
        return BASELINE;
    };
    let mut score = BASELINE;
    if metadata.commit_count > ACTIVE_COMMITS {
        score += STEP;
    }
    if metadata.commit_count > SUSTAINED_COMMITS {
        score += STEP;
    }
    score.clamp(0.0, 100.0)
}
