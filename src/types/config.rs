use crate::error::MirrorError;
use crate::types::scoring::{
    Category, CategoryWeights, LevelThresholds, ScoringConfig, SignalThresholds,
};
use serde::Deserialize;
use std::collections::HashMap;

/// On-disk shape of `repomirror.toml` after layer merging.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MirrorConfig {
    pub weights: Option<HashMap<String, f64>>,
    pub levels: Option<LevelsConfig>,
    pub thresholds: Option<ThresholdsConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LevelsConfig {
    pub advanced: Option<u8>,
    pub intermediate: Option<u8>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdsConfig {
    pub lint_quality: Option<f64>,
    pub hotspot_complexity: Option<f64>,
    pub structure_penalty: Option<f64>,
}

impl MirrorConfig {
    pub fn weights(&self) -> CategoryWeights {
        let mut resolved = CategoryWeights::default();
        if let Some(weights) = &self.weights {
            for category in Category::ALL {
                if let Some(weight) = weights.get(category.key()) {
                    resolved.set(category, *weight);
                }
            }
        }
        resolved
    }

    pub fn levels(&self) -> LevelThresholds {
        let defaults = LevelThresholds::default();
        match &self.levels {
            Some(levels) => LevelThresholds {
                advanced: levels.advanced.unwrap_or(defaults.advanced),
                intermediate: levels.intermediate.unwrap_or(defaults.intermediate),
            },
            None => defaults,
        }
    }

    pub fn thresholds(&self) -> SignalThresholds {
        let defaults = SignalThresholds::default();
        match &self.thresholds {
            Some(thresholds) => SignalThresholds {
                lint_quality: thresholds.lint_quality.unwrap_or(defaults.lint_quality),
                hotspot_complexity: thresholds
                    .hotspot_complexity
                    .unwrap_or(defaults.hotspot_complexity),
                structure_penalty: thresholds
                    .structure_penalty
                    .unwrap_or(defaults.structure_penalty),
            },
            None => defaults,
        }
    }

    pub fn scoring_config(&self) -> ScoringConfig {
        ScoringConfig::default()
            .with_weights(self.weights())
            .with_levels(self.levels())
            .with_thresholds(self.thresholds())
    }

    pub fn validate(&self) -> Result<(), MirrorError> {
        if let Some(weights) = &self.weights {
            let unknown = weights
                .keys()
                .filter(|key| !Category::ALL.iter().any(|category| category.key() == *key))
                .cloned()
                .collect::<Vec<_>>();
            if !unknown.is_empty() {
                return Err(MirrorError::ConfigParse(format!(
                    "weights contains unknown key(s): {}",
                    unknown.join(", ")
                )));
            }
        }

        let weights = self.weights();
        if Category::ALL
            .iter()
            .any(|category| !(0.0..=1.0).contains(&weights.get(*category)))
        {
            return Err(MirrorError::ConfigParse(
                "weights values must be between 0.0 and 1.0".to_string(),
            ));
        }
        let weight_sum = weights.sum();
        if (weight_sum - 1.0).abs() > 0.001 {
            return Err(MirrorError::ConfigParse(format!(
                "weights must sum to 1.0 (found {:.3})",
                weight_sum
            )));
        }

        let levels = self.levels();
        if levels.advanced > 100 || levels.intermediate > 100 {
            return Err(MirrorError::ConfigParse(
                "levels thresholds must be between 0 and 100".to_string(),
            ));
        }
        if levels.intermediate > levels.advanced {
            return Err(MirrorError::ConfigParse(format!(
                "levels.intermediate ({}) cannot exceed levels.advanced ({})",
                levels.intermediate, levels.advanced
            )));
        }

        let thresholds = self.thresholds();
        for (name, value) in [
            ("lint_quality", thresholds.lint_quality),
            ("hotspot_complexity", thresholds.hotspot_complexity),
            ("structure_penalty", thresholds.structure_penalty),
        ] {
            if !value.is_finite() {
                return Err(MirrorError::ConfigParse(format!(
                    "thresholds.{name} must be a finite number"
                )));
            }
        }
        if !(0.0..=10.0).contains(&thresholds.lint_quality) {
            return Err(MirrorError::ConfigParse(
                "thresholds.lint_quality must be between 0.0 and 10.0".to_string(),
            ));
        }
        if thresholds.hotspot_complexity <= 0.0 {
            return Err(MirrorError::ConfigParse(
                "thresholds.hotspot_complexity must be greater than 0".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&thresholds.structure_penalty) {
            return Err(MirrorError::ConfigParse(
                "thresholds.structure_penalty must be between 0.0 and 100.0".to_string(),
            ));
        }

        Ok(())
    }
}
