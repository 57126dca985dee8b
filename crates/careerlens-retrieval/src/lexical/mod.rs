//! Lexical ranking: BM25 over whitespace tokens. No external dependency,
//! always available, deterministic for a fixed corpus and query.

mod bm25;
mod tokenizer;

pub use bm25::{Bm25Index, Bm25Params};
pub use tokenizer::tokenize;

use careerlens_core::config::RetrievalConfig;
use careerlens_core::models::{Document, RankedResult};

/// BM25 ranker over a corpus supplied per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalRanker {
    params: Bm25Params,
}

impl LexicalRanker {
    pub fn new(params: Bm25Params) -> Self {
        Self { params }
    }

    pub fn from_config(config: &RetrievalConfig) -> Self {
        Self::new(Bm25Params {
            k1: config.bm25_k1,
            b: config.bm25_b,
        })
    }

    pub fn params(&self) -> Bm25Params {
        self.params
    }

    /// Rank `corpus` against `query`, returning at most `k` results.
    ///
    /// Results are non-increasing by score; ties keep corpus order. An empty
    /// query scores every document 0, so the first `k` come back in order.
    pub fn rank(&self, query: &str, corpus: &[Document], k: usize) -> Vec<RankedResult> {
        Bm25Index::build(corpus, self.params).rank(query, k)
    }
}
