use serde::{Deserialize, Serialize};

use super::defaults;

/// Narrative composition configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InsightConfig {
    /// Sentences kept by the extractive local summary.
    pub summary_sentences: usize,
}

impl Default for InsightConfig {
    fn default() -> Self {
        Self {
            summary_sentences: defaults::DEFAULT_SUMMARY_SENTENCES,
        }
    }
}
