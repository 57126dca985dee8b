/// Narrative generation errors.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("generation provider unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("generation request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("generation returned an empty response")]
    EmptyResponse,
}
