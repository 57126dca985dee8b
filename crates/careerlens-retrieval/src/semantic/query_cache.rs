//! Query embedding memoization using moka.
//!
//! Keys are blake3 hashes of the query text. Scoped to one generation, so
//! entries never outlive the corpus they were computed against.

use moka::sync::Cache;

pub struct QueryEmbeddingCache {
    cache: Cache<String, Vec<f32>>,
}

impl QueryEmbeddingCache {
    pub fn new(max_entries: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_entries).build(),
        }
    }

    pub fn key(query: &str) -> String {
        blake3::hash(query.as_bytes()).to_hex().to_string()
    }

    pub fn get(&self, query: &str) -> Option<Vec<f32>> {
        self.cache.get(&Self::key(query))
    }

    pub fn insert(&self, query: &str, embedding: Vec<f32>) {
        self.cache.insert(Self::key(query), embedding);
    }
}
