//! HybridRetriever: semantic ranking when available, BM25 otherwise.
//!
//! A pure fallback chain, not a race: the semantic path is attempted at most
//! once per call and any failure drops straight to lexical ranking.

use std::sync::Arc;

use careerlens_core::config::RetrievalConfig;
use careerlens_core::models::{Corpus, DegradationEvent, Document, RankedResult};
use careerlens_core::traits::IEmbeddingProvider;
use careerlens_core::Availability;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::lexical::LexicalRanker;
use crate::semantic::SemanticRanker;

/// Which ranker produced a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetrievalMethod {
    Semantic,
    Lexical,
}

/// Documents from one query, plus how they were chosen.
#[derive(Debug, Clone)]
pub struct RetrievalTrace {
    pub documents: Vec<Document>,
    pub method: RetrievalMethod,
    /// Present when the semantic path was attempted and failed.
    pub degradation: Option<DegradationEvent>,
}

/// Owns both rankers for one corpus.
pub struct HybridRetriever {
    corpus: Arc<Corpus>,
    lexical: LexicalRanker,
    semantic: Option<SemanticRanker>,
}

impl HybridRetriever {
    pub fn new(corpus: Arc<Corpus>, lexical: LexicalRanker, semantic: Option<SemanticRanker>) -> Self {
        Self {
            corpus,
            lexical,
            semantic,
        }
    }

    /// Lexical-only retriever.
    pub fn lexical_only(corpus: Arc<Corpus>, lexical: LexicalRanker) -> Self {
        Self::new(corpus, lexical, None)
    }

    pub fn corpus(&self) -> &Arc<Corpus> {
        &self.corpus
    }

    /// Whether the next query will attempt the semantic path.
    pub fn semantic_available(&self) -> bool {
        self.semantic.as_ref().is_some_and(SemanticRanker::available)
    }

    /// Top `top_k` documents for `text`.
    pub fn query(&self, text: &str, top_k: usize) -> Vec<Document> {
        self.query_traced(text, top_k).documents
    }

    /// Top `top_k` documents plus the method used and any degradation.
    pub fn query_traced(&self, text: &str, top_k: usize) -> RetrievalTrace {
        let (ranked, method, degradation) = self.rank(text, top_k);
        RetrievalTrace {
            documents: ranked.into_iter().map(|r| r.document).collect(),
            method,
            degradation,
        }
    }

    pub(crate) fn rank(
        &self,
        text: &str,
        top_k: usize,
    ) -> (Vec<RankedResult>, RetrievalMethod, Option<DegradationEvent>) {
        let mut degradation = None;

        if let Some(semantic) = self.semantic.as_ref().filter(|s| s.available()) {
            match semantic.rank(text, top_k) {
                Availability::Ready(results) => {
                    debug!(results = results.len(), "semantic retrieval");
                    return (results, RetrievalMethod::Semantic, None);
                }
                Availability::Unavailable { reason } => {
                    warn!(
                        provider = semantic.provider_name(),
                        error = %reason,
                        "semantic retrieval failed, falling back to BM25"
                    );
                    degradation = Some(DegradationEvent::new(
                        "retrieval",
                        reason,
                        "bm25",
                        Utc::now(),
                    ));
                }
            }
        }

        let results = self.lexical.rank(text, &self.corpus, top_k);
        debug!(results = results.len(), "lexical retrieval");
        (results, RetrievalMethod::Lexical, degradation)
    }
}

/// Builds a `HybridRetriever` for each new corpus with the same settings.
#[derive(Clone)]
pub struct RetrieverFactory {
    lexical: LexicalRanker,
    provider: Option<Arc<dyn IEmbeddingProvider>>,
    query_cache_size: u64,
}

impl RetrieverFactory {
    pub fn new(
        lexical: LexicalRanker,
        provider: Option<Arc<dyn IEmbeddingProvider>>,
        query_cache_size: u64,
    ) -> Self {
        Self {
            lexical,
            provider,
            query_cache_size,
        }
    }

    pub fn from_config(
        config: &RetrievalConfig,
        provider: Option<Arc<dyn IEmbeddingProvider>>,
    ) -> Self {
        Self::new(LexicalRanker::from_config(config), provider, config.query_cache_size)
    }

    /// Lexical-only factory with default BM25 parameters.
    pub fn lexical_only() -> Self {
        Self::new(LexicalRanker::default(), None, 0)
    }

    /// Index `corpus`. Semantic indexing failures leave a lexical-only retriever.
    pub fn build(&self, corpus: Arc<Corpus>) -> HybridRetriever {
        let semantic = self
            .provider
            .as_ref()
            .map(|p| SemanticRanker::build(p.clone(), corpus.clone(), self.query_cache_size));
        HybridRetriever::new(corpus, self.lexical, semantic)
    }
}
