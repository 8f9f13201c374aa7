use crate::types::scoring::{Level, ScoreBreakdown, ScoreResult};
use crate::types::signals::{
    CodeMetrics, HostingMetadata, ProjectFlags, ReadmeSignals, RepositorySignals,
};
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult {
    pub summary: String,
    pub roadmap: Vec<String>,
}

/// Everything a single run produces, in the shape that gets persisted.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub repository: String,
    pub generated_at: String,
    pub score: u8,
    pub level: Level,
    pub summary: String,
    pub roadmap: Vec<String>,
    pub breakdown: ScoreBreakdown,
    pub metrics: CodeMetrics,
    pub flags: ProjectFlags,
    pub folder_issues: Vec<String>,
    pub readme: ReadmeSignals,
    pub hosting: Option<HostingMetadata>,
}

impl EvaluationReport {
    pub fn new(
        repository: impl Into<String>,
        signals: RepositorySignals,
        score: ScoreResult,
        recommendations: RecommendationResult,
    ) -> Self {
        Self {
            repository: repository.into(),
            generated_at: Utc::now().to_rfc3339(),
            score: score.overall_score,
            level: score.level,
            summary: recommendations.summary,
            roadmap: recommendations.roadmap,
            breakdown: score.breakdown,
            metrics: signals.metrics,
            flags: signals.flags,
            folder_issues: signals.folder_issues,
            readme: signals.readme,
            hosting: signals.hosting,
        }
    }
}
