/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("semantic retrieval unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("index build failed: {reason}")]
    IndexFailed { reason: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
