use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Documents returned when the caller does not specify `top_k`.
    pub default_top_k: usize,
    /// Largest `top_k` a caller may request.
    pub max_top_k: usize,
    /// BM25 term-frequency saturation.
    pub bm25_k1: f64,
    /// BM25 length normalization, in [0, 1].
    pub bm25_b: f64,
    /// Max memoized query embeddings per generation.
    pub query_cache_size: u64,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            default_top_k: defaults::DEFAULT_TOP_K,
            max_top_k: defaults::DEFAULT_MAX_TOP_K,
            bm25_k1: defaults::DEFAULT_BM25_K1,
            bm25_b: defaults::DEFAULT_BM25_B,
            query_cache_size: defaults::DEFAULT_QUERY_CACHE_SIZE,
        }
    }
}
