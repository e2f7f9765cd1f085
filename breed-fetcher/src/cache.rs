use crate::{BreedFetcher, Result};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "graphql")]
use async_graphql::SimpleObject;

/// Cache statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "graphql", derive(SimpleObject))]
pub struct CacheStats {
    pub cached_breeds: usize,
    pub calls_made: usize,
}

/// A [`BreedFetcher`] that remembers every successful lookup of the fetcher
/// it wraps.
///
/// Only successes are stored. A [`BreedNotFound`](crate::Error::BreedNotFound)
/// is handed back to the caller untouched and the next lookup of that breed
/// goes to the wrapped fetcher again. Entries are never replaced or removed.
///
/// Every call that reaches the wrapped fetcher is counted, whatever its
/// outcome; see [`calls_made`](Self::calls_made). Hits change nothing.
///
/// The miss path for a breed holds that breed's map entry until the wrapped
/// fetcher returns, so concurrent misses on the same breed delegate once when
/// the first one succeeds. The wrapped fetcher must not call back into the
/// same cache.
pub struct CachingBreedFetcher<F> {
    fetcher: F,
    cache: DashMap<String, Vec<String>>,
    calls_made: AtomicUsize,
}

impl<F: BreedFetcher> CachingBreedFetcher<F> {
    /// Wrap `fetcher` with an empty cache
    pub fn new(fetcher: F) -> Self {
        log::info!("Initialized breed cache");
        Self {
            fetcher,
            cache: DashMap::new(),
            calls_made: AtomicUsize::new(0),
        }
    }

    /// Number of lookups delegated to the wrapped fetcher so far, failed ones
    /// included.
    pub fn calls_made(&self) -> usize {
        self.calls_made.load(Ordering::SeqCst)
    }

    /// Snapshot of the cache size and delegation count
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            cached_breeds: self.cache.len(),
            calls_made: self.calls_made(),
        }
    }

    /// Check whether a successful lookup of `breed` is stored
    pub fn is_cached(&self, breed: &str) -> bool {
        self.cache.contains_key(breed)
    }

    /// Number of cached breeds
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether no breed has been cached yet
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Get the wrapped fetcher
    pub fn inner(&self) -> &F {
        &self.fetcher
    }

    /// Drop the cache and return the wrapped fetcher
    pub fn into_inner(self) -> F {
        self.fetcher
    }

    fn delegate(&self, breed: &str) -> Result<Vec<String>> {
        self.calls_made.fetch_add(1, Ordering::SeqCst);
        let result = self.fetcher.sub_breeds(breed);
        if let Err(err) = &result {
            log::debug!("Not caching failed lookup for {:?}: {}", breed, err);
        }
        result
    }
}

impl<F: BreedFetcher> BreedFetcher for CachingBreedFetcher<F> {
    fn sub_breeds(&self, breed: &str) -> Result<Vec<String>> {
        if let Some(cached) = self.cache.get(breed) {
            log::debug!("Cache hit for breed: {:?}", breed);
            return Ok(cached.value().clone());
        }

        match self.cache.entry(breed.to_string()) {
            // Filled by another caller between the read above and this lock
            Entry::Occupied(entry) => {
                log::debug!("Cache hit for breed: {:?}", breed);
                Ok(entry.get().clone())
            }
            Entry::Vacant(entry) => {
                log::debug!("Cache miss for breed: {:?}", breed);
                let sub_breeds = self.delegate(breed)?;
                entry.insert(sub_breeds.clone());
                log::debug!("Stored {} sub-breeds for {:?}", sub_breeds.len(), breed);
                Ok(sub_breeds)
            }
        }
    }
}
