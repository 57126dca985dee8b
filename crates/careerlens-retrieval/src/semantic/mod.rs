//! Semantic ranking over an external embedding provider.
//!
//! The corpus is embedded once at construction. Construction never fails:
//! a provider or indexing error is logged and leaves the ranker unavailable.
//! `rank` reports call-time failures as `Availability::Unavailable` and
//! leaves the fallback decision to the caller.

mod query_cache;
mod vector_index;

pub use query_cache::QueryEmbeddingCache;
pub use vector_index::{cosine_similarity, VectorIndex};

use std::sync::Arc;

use careerlens_core::errors::{CareerResult, RetrievalError};
use careerlens_core::models::{Corpus, RankedResult};
use careerlens_core::traits::IEmbeddingProvider;
use careerlens_core::Availability;
use tracing::{debug, info, warn};

enum IndexState {
    Ready(VectorIndex),
    Failed(String),
}

/// Capability-gated semantic ranker.
pub struct SemanticRanker {
    provider: Arc<dyn IEmbeddingProvider>,
    corpus: Arc<Corpus>,
    state: IndexState,
    query_cache: QueryEmbeddingCache,
}

impl SemanticRanker {
    /// Embed and index `corpus`. Failures are captured, not returned.
    pub fn build(
        provider: Arc<dyn IEmbeddingProvider>,
        corpus: Arc<Corpus>,
        query_cache_size: u64,
    ) -> Self {
        let state = if !provider.is_available() {
            let reason = format!("provider {} is not available", provider.name());
            warn!(provider = provider.name(), "semantic index skipped: provider unavailable");
            IndexState::Failed(reason)
        } else {
            match VectorIndex::build(&corpus, provider.as_ref()) {
                Ok(index) => {
                    info!(
                        provider = provider.name(),
                        documents = index.len(),
                        dims = index.dimensions(),
                        "semantic index ready"
                    );
                    IndexState::Ready(index)
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "semantic index build failed, ranker disabled"
                    );
                    IndexState::Failed(e.to_string())
                }
            }
        };

        Self {
            provider,
            corpus,
            state,
            query_cache: QueryEmbeddingCache::new(query_cache_size),
        }
    }

    /// True iff the index was built and the provider still reports available.
    pub fn available(&self) -> bool {
        matches!(self.state, IndexState::Ready(_)) && self.provider.is_available()
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Rank the indexed corpus against `query`, returning at most `k` results.
    pub fn rank(&self, query: &str, k: usize) -> Availability<Vec<RankedResult>> {
        let index = match &self.state {
            IndexState::Ready(index) => index,
            IndexState::Failed(reason) => {
                return Availability::unavailable(RetrievalError::Unavailable {
                    reason: reason.clone(),
                })
            }
        };
        Availability::from_result(self.rank_with(index, query, k))
    }

    fn rank_with(&self, index: &VectorIndex, query: &str, k: usize) -> CareerResult<Vec<RankedResult>> {
        let embedding = self.embed_query(query)?;
        let hits = index.search(&embedding, k)?;
        debug!(query, hits = hits.len(), "semantic ranking complete");
        Ok(hits
            .into_iter()
            .map(|(idx, score)| RankedResult {
                document: self.corpus[idx].clone(),
                score,
            })
            .collect())
    }

    fn embed_query(&self, query: &str) -> CareerResult<Vec<f32>> {
        if let Some(cached) = self.query_cache.get(query) {
            return Ok(cached);
        }
        let embedding = self
            .provider
            .embed(query)
            .map_err(|e| RetrievalError::Unavailable {
                reason: e.to_string(),
            })?;
        self.query_cache.insert(query, embedding.clone());
        Ok(embedding)
    }
}
