use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Relative weights of the four matching sub-scores. Must sum to 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skills: f64,
    pub experience: f64,
    pub location: f64,
    pub salary: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: 0.5,
            experience: 0.2,
            location: 0.2,
            salary: 0.1,
        }
    }
}

impl MatchWeights {
    pub fn sum(&self) -> f64 {
        self.skills + self.experience + self.location + self.salary
    }
}

/// Matching policy: sub-score weights plus the experience-level penalty
/// curve. Validated once at engine construction, before any scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    pub weights: MatchWeights,
    /// Score lost per level of underqualification.
    pub level_step: f64,
    /// Flat score for candidates above the posting's level.
    pub overqualified_score: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            weights: MatchWeights::default(),
            level_step: 0.3,
            overqualified_score: 0.8,
        }
    }
}

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

impl MatchConfig {
    pub fn validate(&self) -> Result<(), EngineError> {
        let w = &self.weights;
        for (name, value) in [
            ("skills", w.skills),
            ("experience", w.experience),
            ("location", w.location),
            ("salary", w.salary),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(EngineError::Config(format!(
                    "weight '{name}' must be in [0.0, 1.0], got {value}"
                )));
            }
        }
        if (w.sum() - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(EngineError::Config(format!(
                "weights must sum to 1.0, got {}",
                w.sum()
            )));
        }
        if !(0.0..=1.0).contains(&self.level_step) || self.level_step == 0.0 {
            return Err(EngineError::Config(format!(
                "level_step must be in (0.0, 1.0], got {}",
                self.level_step
            )));
        }
        if !(0.0..=1.0).contains(&self.overqualified_score) {
            return Err(EngineError::Config(format!(
                "overqualified_score must be in [0.0, 1.0], got {}",
                self.overqualified_score
            )));
        }
        Ok(())
    }
}

pub(crate) fn validate_min_score(min_score: f64) -> Result<(), EngineError> {
    if !(0.0..=1.0).contains(&min_score) {
        return Err(EngineError::Config(format!(
            "min_score must be in [0.0, 1.0], got {min_score}"
        )));
    }
    Ok(())
}
