use serde::Serialize;
use std::fmt;

pub type Score = f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    CodeQuality,
    Maintainability,
    Structure,
    Documentation,
    Tests,
    Ci,
    CommitActivity,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::CodeQuality,
        Category::Maintainability,
        Category::Structure,
        Category::Documentation,
        Category::Tests,
        Category::Ci,
        Category::CommitActivity,
    ];

    /// Key used in config files and reports.
    pub fn key(self) -> &'static str {
        match self {
            Self::CodeQuality => "code_quality",
            Self::Maintainability => "maintainability",
            Self::Structure => "structure",
            Self::Documentation => "documentation",
            Self::Tests => "tests",
            Self::Ci => "ci",
            Self::CommitActivity => "commit_activity",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryWeights {
    pub code_quality: f64,
    pub maintainability: f64,
    pub structure: f64,
    pub documentation: f64,
    pub tests: f64,
    pub ci: f64,
    pub commit_activity: f64,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            code_quality: 0.25,
            maintainability: 0.15,
            structure: 0.15,
            documentation: 0.15,
            tests: 0.10,
            ci: 0.10,
            commit_activity: 0.10,
        }
    }
}

impl CategoryWeights {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::CodeQuality => self.code_quality,
            Category::Maintainability => self.maintainability,
            Category::Structure => self.structure,
            Category::Documentation => self.documentation,
            Category::Tests => self.tests,
            Category::Ci => self.ci,
            Category::CommitActivity => self.commit_activity,
        }
    }

    pub fn set(&mut self, category: Category, weight: f64) {
        let slot = match category {
            Category::CodeQuality => &mut self.code_quality,
            Category::Maintainability => &mut self.maintainability,
            Category::Structure => &mut self.structure,
            Category::Documentation => &mut self.documentation,
            Category::Tests => &mut self.tests,
            Category::Ci => &mut self.ci,
            Category::CommitActivity => &mut self.commit_activity,
        };
        *slot = weight;
    }

    pub fn sum(&self) -> f64 {
        Category::ALL.iter().map(|category| self.get(*category)).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelThresholds {
    pub advanced: u8,
    pub intermediate: u8,
}

impl Default for LevelThresholds {
    fn default() -> Self {
        Self {
            advanced: 85,
            intermediate: 50,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalThresholds {
    /// Lint scores below this (out of 10) trigger a roadmap step.
    pub lint_quality: f64,
    /// Blocks above this complexity are reported as hotspots.
    pub hotspot_complexity: f64,
    /// Points lost per folder layout issue.
    pub structure_penalty: f64,
}

impl Default for SignalThresholds {
    fn default() -> Self {
        Self {
            lint_quality: 8.0,
            hotspot_complexity: 10.0,
            structure_penalty: 15.0,
        }
    }
}

/// Resolved scoring parameters. `Default` yields the canonical weighting.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoringConfig {
    pub weights: CategoryWeights,
    pub levels: LevelThresholds,
    pub thresholds: SignalThresholds,
}

impl ScoringConfig {
    pub fn with_weights(mut self, weights: CategoryWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_levels(mut self, levels: LevelThresholds) -> Self {
        self.levels = levels;
        self
    }

    pub fn with_thresholds(mut self, thresholds: SignalThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    pub fn from_score(score: u8, levels: &LevelThresholds) -> Self {
        if score >= levels.advanced {
            Self::Advanced
        } else if score >= levels.intermediate {
            Self::Intermediate
        } else {
            Self::Beginner
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        };
        f.write_str(name)
    }
}

/// Per-category sub-scores, each already clamped to 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScoreBreakdown {
    pub code_quality: Score,
    pub maintainability: Score,
    pub structure: Score,
    pub documentation: Score,
    pub tests: Score,
    pub ci: Score,
    pub commit_activity: Score,
}

impl ScoreBreakdown {
    pub fn get(&self, category: Category) -> Score {
        match category {
            Category::CodeQuality => self.code_quality,
            Category::Maintainability => self.maintainability,
            Category::Structure => self.structure,
            Category::Documentation => self.documentation,
            Category::Tests => self.tests,
            Category::Ci => self.ci,
            Category::CommitActivity => self.commit_activity,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, Score)> + '_ {
        Category::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    pub fn weighted_total(&self, weights: &CategoryWeights) -> f64 {
        self.iter()
            .map(|(category, score)| score * weights.get(category))
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub overall_score: u8,
    pub level: Level,
    pub breakdown: ScoreBreakdown,
}
