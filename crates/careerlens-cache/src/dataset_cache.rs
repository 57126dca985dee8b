//! DatasetCache: lazy TTL check, single-writer rebuild, atomic swap.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use careerlens_core::errors::{CareerError, CareerResult, DataError};
use careerlens_core::traits::{IClock, IDatasetLoader, SystemClock};
use careerlens_retrieval::RetrieverFactory;
use chrono::Duration;
use tracing::{debug, info, warn};

use crate::generation::CacheGeneration;

/// Time-bounded cache of one dataset.
///
/// `ensure_fresh` is the only way to obtain a generation for a request. It
/// returns the current generation while within TTL and otherwise rebuilds
/// synchronously. Concurrent callers arriving after expiry collapse into one
/// rebuild: the first takes the rebuild lock, the rest wait and then see the
/// new generation.
pub struct DatasetCache {
    loader: Arc<dyn IDatasetLoader>,
    clock: Arc<dyn IClock>,
    retrievers: RetrieverFactory,
    ttl: Duration,
    current: RwLock<Option<Arc<CacheGeneration>>>,
    rebuild: Mutex<()>,
    next_id: AtomicU64,
}

impl DatasetCache {
    pub fn new(
        loader: Arc<dyn IDatasetLoader>,
        retrievers: RetrieverFactory,
        ttl: std::time::Duration,
    ) -> Self {
        Self::with_clock(loader, retrievers, ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(
        loader: Arc<dyn IDatasetLoader>,
        retrievers: RetrieverFactory,
        ttl: std::time::Duration,
        clock: Arc<dyn IClock>,
    ) -> Self {
        let ttl = Duration::from_std(ttl).unwrap_or_else(|_| Duration::days(365_000));
        Self {
            loader,
            clock,
            retrievers,
            ttl,
            current: RwLock::new(None),
            rebuild: Mutex::new(()),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The current generation if it is within TTL, else a freshly built one.
    ///
    /// # Errors
    /// Loader failures are returned as-is. The previous generation is kept
    /// but not served.
    pub fn ensure_fresh(&self) -> CareerResult<Arc<CacheGeneration>> {
        if let Some(generation) = self.fresh_snapshot()? {
            return Ok(generation);
        }

        let _guard = self.rebuild.lock().map_err(|_| CareerError::Lock {
            resource: "dataset cache rebuild".to_string(),
        })?;

        // Another caller may have rebuilt while we waited.
        if let Some(generation) = self.fresh_snapshot()? {
            debug!(generation = generation.id(), "rebuild already done by another caller");
            return Ok(generation);
        }

        let generation = match self.build_generation() {
            Ok(generation) => Arc::new(generation),
            Err(e) => {
                warn!(error = %e, "dataset rebuild failed");
                return Err(e);
            }
        };

        let mut slot = self.current.write().map_err(|_| CareerError::Lock {
            resource: "dataset cache generation".to_string(),
        })?;
        *slot = Some(generation.clone());
        Ok(generation)
    }

    /// The last built generation, fresh or not, without rebuilding.
    ///
    /// A poisoned slot still holds a whole `Arc`, so its value is read through.
    pub fn current(&self) -> Option<Arc<CacheGeneration>> {
        self.current
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Drop the current generation so the next access rebuilds.
    pub fn invalidate(&self) -> CareerResult<()> {
        let mut slot = self.current.write().map_err(|_| CareerError::Lock {
            resource: "dataset cache generation".to_string(),
        })?;
        if let Some(old) = slot.take() {
            info!(generation = old.id(), "dataset cache invalidated");
        }
        Ok(())
    }

    fn fresh_snapshot(&self) -> CareerResult<Option<Arc<CacheGeneration>>> {
        let slot = self.current.read().map_err(|_| CareerError::Lock {
            resource: "dataset cache generation".to_string(),
        })?;
        let now = self.clock.now();
        Ok(slot
            .as_ref()
            .filter(|g| !g.is_expired(now, self.ttl))
            .cloned())
    }

    fn build_generation(&self) -> CareerResult<CacheGeneration> {
        let tables = self.loader.load_tables()?;
        let corpus = self.loader.load_documents()?;
        if tables.is_empty() && corpus.is_empty() {
            return Err(DataError::EmptyDataset.into());
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let retriever = self.retrievers.build(Arc::new(corpus));

        info!(
            generation = id,
            outcomes = tables.outcomes.len(),
            salaries = tables.salaries.len(),
            support = tables.support.len(),
            documents = retriever.corpus().len(),
            semantic = retriever.semantic_available(),
            "dataset generation built"
        );

        Ok(CacheGeneration::new(id, self.clock.now(), tables, retriever))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use careerlens_core::models::Tables;
    use test_fixtures::datasets::CountingLoader;

    use crate::clock::ManualClock;

    const HOUR: std::time::Duration = std::time::Duration::from_secs(3600);

    fn cache(loader: Arc<CountingLoader>, clock: Arc<ManualClock>) -> DatasetCache {
        DatasetCache::with_clock(loader, RetrieverFactory::lexical_only(), HOUR, clock)
    }

    #[test]
    fn first_access_builds_generation_one() {
        let loader = Arc::new(CountingLoader::sample());
        let cache = cache(loader.clone(), Arc::new(ManualClock::default()));

        assert!(cache.current().is_none());
        let generation = cache.ensure_fresh().unwrap();
        assert_eq!(generation.id(), 1);
        assert_eq!(loader.loads(), 1);
    }

    #[test]
    fn within_ttl_reuses_generation() {
        let loader = Arc::new(CountingLoader::sample());
        let clock = Arc::new(ManualClock::default());
        let cache = cache(loader.clone(), clock.clone());

        let first = cache.ensure_fresh().unwrap();
        clock.advance(Duration::seconds(3600));
        let second = cache.ensure_fresh().unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(loader.loads(), 1);
    }

    #[test]
    fn past_ttl_rebuilds_and_old_snapshot_survives() {
        let loader = Arc::new(CountingLoader::sample());
        let clock = Arc::new(ManualClock::default());
        let cache = cache(loader.clone(), clock.clone());

        let old = cache.ensure_fresh().unwrap();
        clock.advance(Duration::seconds(3601));
        let new = cache.ensure_fresh().unwrap();

        assert_eq!(new.id(), 2);
        assert_eq!(loader.loads(), 2);
        assert_eq!(old.id(), 1);
        assert_eq!(old.tables().outcomes.len(), new.tables().outcomes.len());
    }

    #[test]
    fn failed_rebuild_surfaces_error_and_keeps_previous() {
        let loader = Arc::new(CountingLoader::sample());
        let clock = Arc::new(ManualClock::default());
        let cache = cache(loader.clone(), clock.clone());

        cache.ensure_fresh().unwrap();
        clock.advance(Duration::hours(2));
        loader.set_failing(true);

        assert!(matches!(cache.ensure_fresh(), Err(CareerError::Data(_))));
        assert_eq!(cache.current().map(|g| g.id()), Some(1));

        loader.set_failing(false);
        assert_eq!(cache.ensure_fresh().unwrap().id(), 2);
    }

    #[test]
    fn invalidate_forces_rebuild() {
        let loader = Arc::new(CountingLoader::sample());
        let cache = cache(loader.clone(), Arc::new(ManualClock::default()));

        cache.ensure_fresh().unwrap();
        cache.invalidate().unwrap();
        assert!(cache.current().is_none());
        assert_eq!(cache.ensure_fresh().unwrap().id(), 2);
    }

    #[test]
    fn empty_dataset_is_fatal() {
        let loader = Arc::new(CountingLoader::new(Tables::default(), Vec::new()));
        let cache = cache(loader, Arc::new(ManualClock::default()));
        assert!(matches!(
            cache.ensure_fresh(),
            Err(CareerError::Data(DataError::EmptyDataset))
        ));
    }

    #[test]
    fn poisoned_slot_still_reports_current_generation() {
        let loader = Arc::new(CountingLoader::sample());
        let cache = Arc::new(cache(loader, Arc::new(ManualClock::default())));
        cache.ensure_fresh().unwrap();

        let poisoner = cache.clone();
        let panicked = std::thread::spawn(move || {
            let _slot = poisoner.current.write().unwrap();
            panic!("writer died holding the slot");
        })
        .join()
        .is_err();

        assert!(panicked);
        assert!(cache.current.is_poisoned());
        assert_eq!(cache.current().map(|g| g.id()), Some(1));
    }
}
