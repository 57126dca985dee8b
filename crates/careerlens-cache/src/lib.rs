//! # careerlens-cache
//!
//! Read-through cache of the structured tables and the retrieval corpus.
//!
//! Each load produces an immutable [`CacheGeneration`]. Callers hold an
//! `Arc` to the generation they started with, so a concurrent swap never
//! mixes rows from two loads into one answer.

pub mod clock;
pub mod dataset_cache;
pub mod generation;

pub use clock::ManualClock;
pub use dataset_cache::DatasetCache;
pub use generation::CacheGeneration;
