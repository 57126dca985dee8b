use crate::errors::CareerResult;

/// External narrative generation provider.
pub trait IGenerationProvider: Send + Sync {
    /// Generate text for a prompt. One attempt per call; no retries.
    fn generate(&self, prompt: &str) -> CareerResult<String>;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
