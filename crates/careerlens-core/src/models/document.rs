use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::SOURCE_METADATA_KEY;

/// A free-text report. Immutable once loaded into a cache generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Unique within a generation.
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Where this document came from, falling back to its id.
    pub fn source(&self) -> &str {
        self.metadata
            .get(SOURCE_METADATA_KEY)
            .map(String::as_str)
            .unwrap_or(&self.id)
    }
}

/// Ordered retrieval corpus. Stored order is the tie-break order for ranking.
pub type Corpus = Vec<Document>;
