/// Result alias used across the crate.
pub type StageResult<T> = Result<T, StageError>;

/// Errors raised while building or validating orchestrator configuration.
///
/// Runtime paths (frame handling, scrubbing, offsets) never produce these: degenerate or
/// not-yet-ready inputs degrade to "no animation" instead.
#[derive(thiserror::Error, Debug)]
pub enum StageError {
    /// Invalid configuration value.
    #[error("validation error: {0}")]
    Validation(String),

    /// Measured geometry that cannot be used.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// Scene or trace (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StageError {
    /// Build a [`StageError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`StageError::Geometry`].
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`StageError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for StageError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
