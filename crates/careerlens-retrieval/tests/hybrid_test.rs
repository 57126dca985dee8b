//! Retrieval over the fixture report corpus.

use std::sync::Arc;

use careerlens_retrieval::{HybridRetriever, LexicalRanker, RetrievalMethod, SemanticRanker};
use test_fixtures::datasets::sample_corpus;
use test_fixtures::providers::{FailingEmbedder, KeywordEmbedder};

#[test]
fn semantic_and_lexical_agree_on_obvious_match() {
    let corpus = Arc::new(sample_corpus());
    let semantic = SemanticRanker::build(Arc::new(KeywordEmbedder::default()), corpus.clone(), 16);
    let hybrid = HybridRetriever::new(corpus.clone(), LexicalRanker::default(), Some(semantic));
    let lexical = HybridRetriever::lexical_only(corpus, LexicalRanker::default());

    let a = hybrid.query_traced("internships counseling", 1);
    let b = lexical.query_traced("internships counseling", 1);
    assert_eq!(a.method, RetrievalMethod::Semantic);
    assert_eq!(b.method, RetrievalMethod::Lexical);
    assert_eq!(a.documents[0].id, "sup");
    assert_eq!(b.documents[0].id, "sup");
}

#[test]
fn degradation_event_names_the_fallback() {
    let corpus = Arc::new(sample_corpus());
    let semantic = SemanticRanker::build(
        Arc::new(FailingEmbedder::failing_queries_only()),
        corpus.clone(),
        16,
    );
    let hybrid = HybridRetriever::new(corpus, LexicalRanker::default(), Some(semantic));

    let event = hybrid.query_traced("salary", 3).degradation.unwrap();
    assert_eq!(event.component, "retrieval");
    assert_eq!(event.fallback_used, "bm25");
    assert!(event.failure.contains("scripted query failure"));
}

#[test]
fn top_k_larger_than_corpus_returns_everything() {
    let corpus = Arc::new(sample_corpus());
    let hybrid = HybridRetriever::lexical_only(corpus.clone(), LexicalRanker::default());
    assert_eq!(hybrid.query("graduates", 50).len(), corpus.len());
}

#[test]
fn retrieval_method_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&RetrievalMethod::Semantic).unwrap(),
        "\"semantic\""
    );
}
