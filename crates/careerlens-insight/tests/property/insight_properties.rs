//! Property tests for local composition and generation fallback.

use std::sync::Arc;

use careerlens_core::models::Document;
use careerlens_insight::local::extractive_summary;
use careerlens_insight::{InsightComposer, ProcessingMethod};
use proptest::prelude::*;
use test_fixtures::providers::ScriptedGenerator;

proptest! {
    #[test]
    fn summary_never_exceeds_sentence_limit(text in "[a-z .\n]{0,200}", n in 1usize..10) {
        let summary = extractive_summary(&text, n);
        prop_assert!(summary.ends_with('.'));
        prop_assert!(summary.matches('.').count() <= n);
    }

    #[test]
    fn failed_generation_matches_offline_composition(
        texts in prop::collection::vec("[a-z .]{0,60}", 0..5),
        bullets in prop::collection::vec("[a-z ]{1,30}", 0..6),
    ) {
        let docs: Vec<Document> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Document::new(format!("d{i}"), t.clone()))
            .collect();
        let failing = InsightComposer::new(Some(Arc::new(ScriptedGenerator::failing())), 4);
        let offline = InsightComposer::offline(4);

        let a = failing.summarize("q", &docs);
        let b = offline.summarize("q", &docs);
        prop_assert_eq!(a.method, ProcessingMethod::Statistical);
        prop_assert_eq!(a.text, b.text);

        let a = failing.synthesize(&bullets, "ctx");
        let b = offline.synthesize(&bullets, "ctx");
        prop_assert_eq!(a.text, b.text);
        prop_assert!(a.degradation.is_some());
        prop_assert!(b.degradation.is_none());
    }
}
