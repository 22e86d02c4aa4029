#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EvaluatorConfig {
    /// Minimum score the best action needs before it is applied.
    ///
    /// `None` always applies the best action of a non-empty roster. With `Some(t)`, a decision
    /// whose best (sanitized) score is below `t` applies nothing, allowing fallbacks in
    /// higher-level control flow.
    pub min_score: Option<f32>,
}

impl EvaluatorConfig {
    pub fn with_min_score(mut self, min_score: f32) -> Self {
        self.min_score = Some(min_score);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.min_score {
            Some(t) if t.is_nan() => Err(ConfigError::NanMinScore),
            _ => Ok(()),
        }
    }

    pub(crate) fn admits(&self, score: f32) -> bool {
        self.min_score.is_none_or(|t| score >= t)
    }
}
