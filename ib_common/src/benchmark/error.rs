//! Construction-time error taxonomy.
//!
//! Every error is fatal and surfaces before the first step. Per-step
//! arithmetic has no error path.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors raised while building an engine or one of its components.
#[derive(Debug, Clone, Error)]
pub enum BenchmarkError {
    /// A parameter is outside its legal domain.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The configuration file could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl BenchmarkError {
    /// Shorthand for [`BenchmarkError::InvalidConfiguration`].
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration(reason.into())
    }
}
