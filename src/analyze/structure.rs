use crate::types::scoring::Score;

pub fn structure_score(folder_issues: &[String], penalty_per_issue: f64) -> Score {
    (100.0 - penalty_per_issue * folder_issues.len() as f64).clamp(0.0, 100.0)
}
