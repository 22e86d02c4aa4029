use thiserror::Error;

/// Errors raised while validating an [`EvaluatorConfig`](crate::EvaluatorConfig).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("min_score must not be NaN")]
    NanMinScore,
}
