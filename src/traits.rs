//! # Cache Trait Hierarchy
//!
//! Defines the trait surface for the LRU engine, split so callers can bound
//! on exactly the capabilities they need.
//!
//! ```text
//!   ┌─────────────────────────────────────┐
//!   │          CoreCache<K, V>            │
//!   │                                     │
//!   │  put(&mut, K, V) → bool (evicted)   │
//!   │  get(&mut, &K) → Option<&V>         │
//!   │  contains(&mut, &K) → bool          │
//!   │  len / is_empty / capacity / clear  │
//!   └──────────────────┬──────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────┐
//!   │         MutableCache<K, V>          │
//!   │  remove(&K) → Option<V>             │
//!   └──────────────────┬──────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────┐
//!   │         LruCacheTrait<K, V>         │
//!   │  pop_lru() → (K, V)                 │
//!   │  peek_lru() → (&K, &V)              │
//!   │  touch(&K) → bool                   │
//!   └─────────────────────────────────────┘
//! ```
//!
//! One deliberate departure from the usual map API: [`CoreCache::get`] and
//! [`CoreCache::contains`] both take `&mut self`, because in this engine a
//! hit is never a pure read — it promotes the entry to the most-recently-used
//! position. Callers that must not perturb eviction order use the concrete
//! types' `peek` methods instead.

/// Core operations every cache view supports.
///
/// # Example
///
/// ```
/// use lrukit::traits::CoreCache;
/// use lrukit::policy::lru::LruCore;
///
/// fn warm_cache<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.put(*key, value.clone());
///     }
/// }
///
/// let mut cache = LruCore::try_new(100).unwrap();
/// warm_cache(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
/// assert_eq!(cache.len(), 2);
/// ```
pub trait CoreCache<K, V> {
    /// Inserts a key-value pair, returning `true` if an entry was evicted to
    /// make room.
    ///
    /// Updating a resident key replaces its value in place and promotes it to
    /// most-recently-used; that path never evicts and never grows the cache,
    /// so it always returns `false`.
    fn put(&mut self, key: K, value: V) -> bool;

    /// Looks up a value by key, promoting a hit to most-recently-used.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Checks presence, promoting a hit to most-recently-used.
    ///
    /// Identical to [`get`](Self::get) for recency purposes; only the return
    /// shape differs.
    fn contains(&mut self, key: &K) -> bool;

    /// Returns the current number of entries in the cache.
    fn len(&self) -> usize;

    /// Returns `true` if the cache holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of entries, fixed at construction.
    fn capacity(&self) -> usize;

    /// Removes all entries. Capacity is unchanged.
    fn clear(&mut self);
}

/// Caches that support arbitrary key-based removal.
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes an entry by key, returning its value if it was resident.
    ///
    /// Removing an absent key is a no-op; removing twice is equivalent to
    /// removing once.
    fn remove(&mut self, key: &K) -> Option<V>;
}

/// Recency-specific operations on an LRU cache.
pub trait LruCacheTrait<K, V>: MutableCache<K, V> {
    /// Removes and returns the least-recently-used entry.
    fn pop_lru(&mut self) -> Option<(K, V)>;

    /// Returns the least-recently-used entry without removing or promoting it.
    fn peek_lru(&self) -> Option<(&K, &V)>;

    /// Promotes a key to most-recently-used without retrieving its value;
    /// returns `false` if the key is not resident.
    fn touch(&mut self, key: &K) -> bool;
}

/// Marker trait for cache handles that are safe to share across threads.
#[cfg(feature = "concurrency")]
pub trait ConcurrentCache: Send + Sync {}
