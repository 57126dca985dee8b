use std::sync::Arc;

use careerlens_core::models::{Corpus, Tables};
use careerlens_retrieval::HybridRetriever;
use chrono::{DateTime, Duration, Utc};

/// One immutable snapshot of every table, the corpus, and its retriever.
///
/// Replaced as a unit on expiry, never mutated.
pub struct CacheGeneration {
    id: u64,
    created_at: DateTime<Utc>,
    tables: Tables,
    retriever: HybridRetriever,
}

impl CacheGeneration {
    pub fn new(id: u64, created_at: DateTime<Utc>, tables: Tables, retriever: HybridRetriever) -> Self {
        Self {
            id,
            created_at,
            tables,
            retriever,
        }
    }

    /// Monotonic per cache, starting at 1.
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    pub fn corpus(&self) -> &Arc<Corpus> {
        self.retriever.corpus()
    }

    pub fn retriever(&self) -> &HybridRetriever {
        &self.retriever
    }

    /// Expired once strictly more than `ttl` has elapsed since creation.
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.created_at > ttl
    }
}

impl std::fmt::Debug for CacheGeneration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheGeneration")
            .field("id", &self.id)
            .field("created_at", &self.created_at)
            .field("outcomes", &self.tables.outcomes.len())
            .field("salaries", &self.tables.salaries.len())
            .field("support", &self.tables.support.len())
            .field("documents", &self.corpus().len())
            .finish()
    }
}
