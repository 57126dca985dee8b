//! Concurrency and snapshot consistency of DatasetCache.

use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration as StdDuration;

use careerlens_cache::{DatasetCache, ManualClock};
use careerlens_retrieval::RetrieverFactory;
use chrono::Duration;
use test_fixtures::datasets::CountingLoader;

const HOUR: StdDuration = StdDuration::from_secs(3600);

#[test]
fn concurrent_callers_after_expiry_share_one_rebuild() {
    let loader = Arc::new(CountingLoader::sample());
    let clock = Arc::new(ManualClock::default());
    let cache = Arc::new(DatasetCache::with_clock(
        loader.clone(),
        RetrieverFactory::lexical_only(),
        HOUR,
        clock.clone(),
    ));

    cache.ensure_fresh().unwrap();
    clock.advance(Duration::seconds(3601));

    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));
    let ids: Vec<u64> = thread::scope(|s| {
        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let cache = cache.clone();
                let barrier = barrier.clone();
                s.spawn(move || {
                    barrier.wait();
                    cache.ensure_fresh().unwrap().id()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(ids.iter().all(|&id| id == 2), "ids: {ids:?}");
    assert_eq!(loader.loads(), 2);
}

#[test]
fn generation_bundles_tables_and_corpus_from_one_load() {
    let cache = DatasetCache::new(
        Arc::new(CountingLoader::sample()),
        RetrieverFactory::lexical_only(),
        HOUR,
    );
    let generation = cache.ensure_fresh().unwrap();

    assert_eq!(generation.tables().outcomes.len(), 2);
    assert_eq!(generation.tables().support.len(), 2);
    assert_eq!(generation.corpus().len(), 3);
    assert_eq!(generation.retriever().query("internships", 1)[0].id, "sup");
}

