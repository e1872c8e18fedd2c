//! Plugin-lifetime cache of successful lookups.
//!
//! Entries map a query string to the results of its latest successful lookup.
//! A hit pre-populates the dropdown while the fresh request is still sent, so
//! the cache never suppresses network traffic. Nothing is written to disk.

use crate::domain::Character;
use lru::LruCache;
use std::num::NonZeroUsize;

/// Number of queries kept when no capacity is configured.
pub const DEFAULT_CACHE_SIZE: usize = 32;

/// Least-recently-used map from query to results.
#[derive(Debug)]
pub struct QueryCache {
    entries: LruCache<String, Vec<Character>>,
}

impl QueryCache {
    /// Creates a cache holding at most `capacity` queries (minimum one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(capacity),
        }
    }

    /// Results of the last successful lookup for `query`, if still cached.
    pub fn get(&mut self, query: &str) -> Option<&[Character]> {
        self.entries.get(query).map(Vec::as_slice)
    }

    /// Records the results of a successful lookup.
    pub fn insert(&mut self, query: &str, results: Vec<Character>) {
        self.entries.put(query.to_string(), results);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for QueryCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_SIZE)
    }
}
