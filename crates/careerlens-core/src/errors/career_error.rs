use super::{ConfigError, DataError, GenerationError, RetrievalError};

/// Top-level error type for the careerlens engine.
///
/// Only `MalformedInput`, `Data` and `Config` reach callers of the service.
/// Retrieval and generation failures are recovered by local fallbacks.
#[derive(Debug, thiserror::Error)]
pub enum CareerError {
    #[error("malformed input for {field}: {reason}")]
    MalformedInput { field: String, reason: String },

    #[error("lock poisoned: {resource}")]
    Lock { resource: String },

    #[error("data error: {0}")]
    Data(#[from] DataError),

    #[error("retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CareerError {
    pub fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
