//! Filter result caching.
//!
//! This module provides [`FilterCache`], an LRU cache of filter passes so the
//! picker does not rescan its snapshot when the user toggles back to a
//! keyword it has already seen. It is gated behind the `cache` feature flag
//! and uses the [`lru`] crate internally.
//!
//! Entries are keyed by [`FilterKey`] (mode + normalized keyword) and hold
//! [`FilterMatches`], i.e. positions into the snapshot they were computed
//! from. The owner must [`clear`](FilterCache::clear) the cache whenever it
//! swaps in a new snapshot.
//!
//! # Examples
//!
//! ```
//! use category_navigator::cache::{FilterCache, FilterKey};
//! use category_navigator::picker::ModeKind;
//! use category_navigator::search::FilterMatches;
//!
//! let mut cache = FilterCache::new();
//! let key = FilterKey::new(ModeKind::Product, "Case");
//! cache.insert(key.clone(), FilterMatches::Products(vec![3, 9]));
//!
//! let hit = cache.get(&FilterKey::new(ModeKind::Product, " case "));
//! assert_eq!(hit, Some(FilterMatches::Products(vec![3, 9])));
//! assert_eq!(cache.stats().hits, 1);
//! ```

use crate::picker::ModeKind;
use crate::search::{normalize_keyword, FilterMatches};
use crate::{debug_log, trace_log};
use lru::LruCache;
use std::num::NonZeroUsize;

/// Cache key: picker mode plus normalized keyword.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterKey {
    /// Picker mode the matches belong to
    pub mode: ModeKind,
    /// Trimmed, lowercased keyword
    pub keyword: String,
}

impl FilterKey {
    /// Create a key, normalizing the keyword.
    pub fn new(mode: ModeKind, keyword: &str) -> Self {
        Self {
            mode,
            keyword: normalize_keyword(keyword),
        }
    }
}

/// Counters tracking cache hit/miss rates and invalidations.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: usize,
    /// Number of cache misses.
    pub misses: usize,
    /// Number of full cache invalidations (via [`FilterCache::clear`]).
    pub invalidations: usize,
}

impl CacheStats {
    /// Return the hit rate as a value in `0.0..=1.0`.
    ///
    /// Returns `0.0` if no lookups have been performed.
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache of filter passes over one data snapshot.
#[derive(Debug)]
pub struct FilterCache {
    entries: LruCache<FilterKey, FilterMatches>,
    stats: CacheStats,
}

impl FilterCache {
    const DEFAULT_CAPACITY: usize = 64;

    /// Create a cache with the default capacity (64 entries).
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a cache with a custom capacity. Zero is treated as one.
    pub fn with_capacity(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: LruCache::new(cap),
            stats: CacheStats::default(),
        }
    }

    /// Drop every entry and increment the invalidation counter.
    pub fn clear(&mut self) {
        let len = self.entries.len();
        self.entries.clear();
        self.stats.invalidations += 1;
        debug_log!(
            "Filter cache cleared: {} entries removed ({} total invalidations, hit rate: {:.1}%)",
            len,
            self.stats.invalidations,
            self.stats.hit_rate() * 100.0
        );
    }

    /// Look up the cached matches for `key`.
    ///
    /// Returns `None` on a cache miss. Updates hit/miss stats.
    pub fn get(&mut self, key: &FilterKey) -> Option<FilterMatches> {
        if let Some(matches) = self.entries.get(key) {
            self.stats.hits += 1;
            trace_log!("Filter cache hit for {:?} '{}'", key.mode, key.keyword);
            Some(matches.clone())
        } else {
            self.stats.misses += 1;
            trace_log!("Filter cache miss for {:?} '{}'", key.mode, key.keyword);
            None
        }
    }

    /// Store the matches for `key`, evicting the least recently used entry
    /// when full.
    pub fn insert(&mut self, key: FilterKey, matches: FilterMatches) {
        self.entries.push(key, matches);
    }

    /// Return a reference to the current cache statistics.
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Reset all counters in [`CacheStats`] to zero.
    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No entries cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.entries.cap().get()
    }
}

impl Default for FilterCache {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for FilterCache {
    fn clone(&self) -> Self {
        Self {
            entries: LruCache::new(self.entries.cap()),
            stats: self.stats.clone(),
        }
    }
}
