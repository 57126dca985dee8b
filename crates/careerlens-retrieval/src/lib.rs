//! # careerlens-retrieval
//!
//! Ranks report documents against a text query.
//!
//! ## Architecture
//!
//! ```text
//! HybridRetriever
//! ├── SemanticRanker (optional, capability-gated)
//! │   ├── VectorIndex (corpus embedded once per generation)
//! │   ├── QueryEmbeddingCache (moka, blake3 keys)
//! │   └── IEmbeddingProvider (ApiEmbeddingProvider over HTTP)
//! └── LexicalRanker (BM25, always available)
//! ```
//!
//! One path runs to completion per query: semantic when available, lexical
//! otherwise, with at most one semantic → lexical transition.

pub mod hybrid;
pub mod lexical;
pub mod providers;
pub mod semantic;

pub use hybrid::{HybridRetriever, RetrievalMethod, RetrievalTrace, RetrieverFactory};
pub use lexical::{Bm25Params, LexicalRanker};
pub use providers::{create_embedding_provider, ApiEmbeddingProvider};
pub use semantic::{SemanticRanker, VectorIndex};
