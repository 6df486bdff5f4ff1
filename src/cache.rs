//! # Navigation Cache
//!
//! A bounded least-recently-used cache of rendered artifacts keyed by
//! [`Route::key`]. Rendering collaborators use it to avoid rebuilding screens
//! they showed recently. It has no dependency on the router and is safe to
//! share between threads.
//!
//! ```rust
//! use navrouter::cache::NavigationCache;
//! use navrouter::route::Route;
//!
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! struct Screen(&'static str);
//!
//! impl Route for Screen {
//!     fn key(&self) -> String { self.0.to_string() }
//! }
//!
//! let cache = NavigationCache::new(2);
//! cache.set(&Screen("home"), "home view");
//! assert_eq!(cache.get(&Screen("home")), Some("home view"));
//! assert_eq!(cache.get(&Screen("missing")), None);
//! ```

use lru::LruCache;
use parking_lot::Mutex;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

use crate::route::Route;
use crate::runtime_config::{RouterConfig, DEFAULT_CACHE_CAPACITY};

/// Cache statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups that found an artifact
    pub hits: u64,
    /// Lookups that found nothing
    pub misses: u64,
    /// Entries evicted due to LRU capacity
    pub evictions: u64,
    /// Current number of entries
    pub size: usize,
    /// Maximum number of entries
    pub capacity: usize,
}

impl CacheStats {
    /// Hit rate as a percentage
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// Thread-safe LRU cache of view artifacts keyed by route key.
pub struct NavigationCache<V> {
    // LruCache::get needs &mut to update recency, so reads take the lock too
    entries: Mutex<LruCache<String, V>>,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl<V> NavigationCache<V> {
    /// Create a cache holding at most `capacity` artifacts.
    ///
    /// A zero capacity falls back to the default of 10.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or_else(|| {
            warn!(
                requested = capacity,
                fallback = DEFAULT_CACHE_CAPACITY,
                "Navigation cache capacity must be non-zero, using default"
            );
            NonZeroUsize::new(DEFAULT_CACHE_CAPACITY).unwrap_or(NonZeroUsize::MIN)
        });
        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn from_config(config: &RouterConfig) -> Self {
        Self::new(config.cache_capacity)
    }

    /// Store `artifact` under the route's key, marking it most recently used.
    ///
    /// Evicts the least recently used entry only when the cache is full and
    /// the key is new.
    pub fn set<R: Route>(&self, route: &R, artifact: V) {
        let key = route.key();
        let evicted = self.entries.lock().push(key.clone(), artifact);
        if let Some((old_key, _)) = evicted {
            if old_key != key {
                self.evictions.fetch_add(1, Ordering::Relaxed);
                debug!(evicted = %old_key, inserted = %key, "Navigation cache eviction");
            }
        }
    }

    /// Drop every artifact. Statistics are kept.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Whether an artifact is cached for the route. Does not touch recency.
    #[must_use]
    pub fn contains<R: Route>(&self, route: &R) -> bool {
        self.entries.lock().contains(&route.key())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.lock().cap().get()
    }

    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let (size, capacity) = {
            let entries = self.entries.lock();
            (entries.len(), entries.cap().get())
        };
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            size,
            capacity,
        }
    }
}

impl<V: Clone> NavigationCache<V> {
    /// Look up the route's artifact, marking it most recently used on a hit.
    #[must_use]
    pub fn get<R: Route>(&self, route: &R) -> Option<V> {
        let found = self.entries.lock().get(&route.key()).cloned();
        let counter = if found.is_some() {
            &self.hits
        } else {
            &self.misses
        };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }
}

impl<V> Default for NavigationCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

impl<V> std::fmt::Debug for NavigationCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NavigationCache")
            .field("stats", &self.stats())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct Screen(&'static str);

    impl Route for Screen {
        fn key(&self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn test_evicts_least_recently_used() {
        let cache = NavigationCache::new(2);
        cache.set(&Screen("a"), 1);
        cache.set(&Screen("b"), 2);
        cache.set(&Screen("c"), 3);

        assert!(!cache.contains(&Screen("a")));
        assert_eq!(cache.get(&Screen("b")), Some(2));
        assert_eq!(cache.get(&Screen("c")), Some(3));
        assert_eq!(cache.stats().evictions, 1);
    }

    #[test]
    fn test_get_protects_from_eviction() {
        let cache = NavigationCache::new(2);
        cache.set(&Screen("a"), 1);
        cache.set(&Screen("b"), 2);
        assert_eq!(cache.get(&Screen("a")), Some(1));
        cache.set(&Screen("c"), 3);

        assert!(cache.contains(&Screen("a")));
        assert!(!cache.contains(&Screen("b")));
    }

    #[test]
    fn test_update_existing_key_does_not_evict() {
        let cache = NavigationCache::new(2);
        cache.set(&Screen("a"), 1);
        cache.set(&Screen("b"), 2);
        cache.set(&Screen("a"), 10);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&Screen("a")), Some(10));
        assert_eq!(cache.get(&Screen("b")), Some(2));
        assert_eq!(cache.stats().evictions, 0);
    }

    #[test]
    fn test_clear_empties_cache() {
        let cache = NavigationCache::new(3);
        cache.set(&Screen("a"), 1);
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.get(&Screen("a")), None);
    }

    #[test]
    fn test_stats_track_hits_and_misses() {
        let cache = NavigationCache::new(4);
        cache.set(&Screen("a"), "view");
        let _ = cache.get(&Screen("a"));
        let _ = cache.get(&Screen("a"));
        let _ = cache.get(&Screen("a"));
        let _ = cache.get(&Screen("z"));

        let stats = cache.stats();
        assert_eq!(stats.hits, 3);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.size, 1);
        assert_eq!(stats.capacity, 4);
        assert!((stats.hit_rate() - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_capacity_uses_default() {
        let cache: NavigationCache<u8> = NavigationCache::new(0);
        assert_eq!(cache.capacity(), DEFAULT_CACHE_CAPACITY);
    }

    #[test]
    fn test_concurrent_access() {
        let cache = Arc::new(NavigationCache::new(8));
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    for i in 0..100 {
                        let screen = Screen(if i % 2 == 0 { "even" } else { "odd" });
                        cache.set(&screen, t * 1000 + i);
                        let _ = cache.get(&screen);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(cache.len(), 2);
        assert_eq!(cache.stats().hits, 400);
    }
}
