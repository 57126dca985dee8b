use std::sync::Arc;

use careerlens_core::models::Document;
use careerlens_retrieval::{HybridRetriever, LexicalRanker, RetrievalMethod, SemanticRanker};
use proptest::prelude::*;
use test_fixtures::providers::{FailingEmbedder, KeywordEmbedder};

const WORDS: &[&str] = &[
    "employment", "salary", "career", "counseling", "internships", "engineering",
    "growth", "graduates", "nursing", "business",
];

fn arb_text() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..12).prop_map(|w| w.join(" "))
}

fn arb_corpus() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec(arb_text(), 0..15).prop_map(|texts| {
        texts
            .into_iter()
            .enumerate()
            .map(|(i, t)| Document::new(format!("d{i}"), t))
            .collect()
    })
}

// ── Lexical ranking bounds and ordering ────────────────────────────────────

proptest! {
    #[test]
    fn lexical_respects_k_and_order(corpus in arb_corpus(), query in arb_text(), k in 0usize..20) {
        let results = LexicalRanker::default().rank(&query, &corpus, k);
        prop_assert!(results.len() <= k.min(corpus.len()));
        prop_assert_eq!(results.len(), k.min(corpus.len()));
        for pair in results.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
        for r in &results {
            prop_assert!(r.score.is_finite());
            prop_assert!(corpus.iter().any(|d| d.id == r.document.id));
        }
    }

    #[test]
    fn lexical_is_deterministic(corpus in arb_corpus(), query in arb_text()) {
        let ranker = LexicalRanker::default();
        prop_assert_eq!(ranker.rank(&query, &corpus, 5), ranker.rank(&query, &corpus, 5));
    }
}

// ── Hybrid fallback chain ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn forced_semantic_failure_equals_lexical(corpus in arb_corpus(), query in arb_text(), k in 1usize..10) {
        let corpus = Arc::new(corpus);
        let semantic = SemanticRanker::build(
            Arc::new(FailingEmbedder::failing_queries_only()),
            corpus.clone(),
            8,
        );
        let hybrid = HybridRetriever::new(corpus.clone(), LexicalRanker::default(), Some(semantic));

        let trace = hybrid.query_traced(&query, k);
        let expected: Vec<Document> = LexicalRanker::default()
            .rank(&query, &corpus, k)
            .into_iter()
            .map(|r| r.document)
            .collect();

        prop_assert_eq!(trace.method, RetrievalMethod::Lexical);
        prop_assert_eq!(trace.documents, expected);
    }

    #[test]
    fn semantic_results_come_from_corpus(corpus in arb_corpus(), query in arb_text(), k in 0usize..10) {
        let corpus = Arc::new(corpus);
        let semantic = SemanticRanker::build(Arc::new(KeywordEmbedder::default()), corpus.clone(), 8);
        let hybrid = HybridRetriever::new(corpus.clone(), LexicalRanker::default(), Some(semantic));

        let docs = hybrid.query(&query, k);
        prop_assert!(docs.len() <= k);
        for d in &docs {
            prop_assert!(corpus.contains(d));
        }
    }
}
