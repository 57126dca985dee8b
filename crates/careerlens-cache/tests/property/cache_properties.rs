use std::sync::Arc;
use std::time::Duration as StdDuration;

use careerlens_cache::{DatasetCache, ManualClock};
use careerlens_retrieval::RetrieverFactory;
use chrono::Duration;
use proptest::prelude::*;
use test_fixtures::datasets::CountingLoader;

// ── Generation ids only move forward, one rebuild per expiry ──────────────

proptest! {
    #[test]
    fn rebuilds_match_expiries(steps in prop::collection::vec(0i64..7200, 1..20)) {
        let ttl_secs = 3600i64;
        let loader = Arc::new(CountingLoader::sample());
        let clock = Arc::new(ManualClock::default());
        let cache = DatasetCache::with_clock(
            loader.clone(),
            RetrieverFactory::lexical_only(),
            StdDuration::from_secs(ttl_secs as u64),
            clock.clone(),
        );

        let mut last_id = cache.ensure_fresh().unwrap().id();
        let mut age = 0i64;
        let mut expected_loads = 1usize;

        for step in steps {
            clock.advance(Duration::seconds(step));
            age += step;
            let id = cache.ensure_fresh().unwrap().id();
            if age > ttl_secs {
                expected_loads += 1;
                age = 0;
                prop_assert_eq!(id, last_id + 1);
            } else {
                prop_assert_eq!(id, last_id);
            }
            last_id = id;
        }
        prop_assert_eq!(loader.loads(), expected_loads);
    }
}
