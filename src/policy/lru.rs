//! # Least Recently Used (LRU) Cache
//!
//! Map-style LRU engine composed of a recency list and a key index, plus a
//! mutex-guarded wrapper for shared use.
//!
//! ## Architecture
//!
//! ```text
//!   ┌────────────────────────────────────────────────────────────────┐
//!   │                         LruCore<K, V>                          │
//!   │                                                                │
//!   │   ┌──────────────────────────────────────────────────────┐    │
//!   │   │  FxHashMap<K, SlotId>  (key index)                   │    │
//!   │   │                                                      │    │
//!   │   │   "a" ──► id_2      "b" ──► id_0      "c" ──► id_1   │    │
//!   │   └──────────────────────┬───────────────────────────────┘    │
//!   │                          │  stable handles                    │
//!   │   ┌──────────────────────▼───────────────────────────────┐    │
//!   │   │  RecencyList<Entry<K, V>>  (arena-backed)            │    │
//!   │   │                                                      │    │
//!   │   │  head ──► [id_2] ◄──► [id_0] ◄──► [id_1] ◄── tail    │    │
//!   │   │            MRU                      LRU              │    │
//!   │   └──────────────────────────────────────────────────────┘    │
//!   └────────────────────────────────────────────────────────────────┘
//!
//!   ConcurrentLruCache<K, V> = Arc<parking_lot::Mutex<LruCore<K, V>>>
//! ```
//!
//! Entries live in the recency list's slot arena; the index holds `SlotId`
//! handles, never pointers, so there is no dangling-reference risk and every
//! operation stays O(1) amortized.
//!
//! ## Invariants
//!
//! After every completed operation:
//! - `index.len() == list.len()`, with exactly one node per indexed key
//! - `list.len() <= capacity`
//! - list order is strict recency: front = most recently touched entry
//!
//! ## Concurrency
//!
//! `LruCore` is single-threaded. `ConcurrentLruCache` wraps it in one
//! exclusive `parking_lot::Mutex` held for the full duration of each public
//! operation. A `Mutex` rather than an `RwLock`: `get` and `contains` promote
//! the hit entry, so every path mutates the list and a read lock would never
//! be sound. Values cross the lock boundary as owned clones, never as
//! references into internal storage.

use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

#[cfg(feature = "concurrency")]
use std::sync::Arc;

#[cfg(feature = "concurrency")]
use parking_lot::Mutex;

use crate::ds::recency_list::RecencyList;
use crate::ds::slot_arena::SlotId;
use crate::error::ConfigError;
#[cfg(any(test, debug_assertions))]
use crate::error::InvariantError;
#[cfg(feature = "concurrency")]
use crate::traits::ConcurrentCache;
use crate::traits::{CoreCache, LruCacheTrait, MutableCache};

/// One cached association, stored as a recency-list node value.
///
/// The key is duplicated here so eviction from the list tail can also remove
/// the matching index record.
#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Single-threaded LRU cache core: recency list + hashed key index.
///
/// Capacity is validated at construction and fixed for the lifetime of the
/// cache. All operations after construction are total; absence is reported
/// through `Option`/`bool`, never as an error.
///
/// # Example
///
/// ```
/// use lrukit::policy::lru::LruCore;
///
/// let mut cache: LruCore<&str, u32> = LruCore::try_new(2).unwrap();
/// assert!(!cache.put("a", 1));
/// assert!(!cache.put("b", 2));
/// assert_eq!(cache.get(&"a"), Some(&1)); // "a" is now MRU
/// assert!(cache.put("c", 3));            // evicts "b"
/// assert_eq!(cache.get(&"b"), None);
/// ```
pub struct LruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    index: FxHashMap<K, SlotId>,
    list: RecencyList<Entry<K, V>>,
    capacity: usize,
}

impl<K, V> LruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an LRU cache with the given capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCapacity`] when `capacity < 1`. Invalid
    /// capacities are rejected, never clamped.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity < 1 {
            return Err(ConfigError::InvalidCapacity {
                requested: capacity,
            });
        }
        Ok(LruCore {
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            list: RecencyList::with_capacity(capacity),
            capacity,
        })
    }

    /// Inserts or updates an entry; returns `true` if an entry was evicted.
    ///
    /// A resident key has its value replaced in place and is promoted to the
    /// MRU position without eviction. A new key evicts the LRU entry first
    /// when the cache is full.
    pub fn put(&mut self, key: K, value: V) -> bool {
        if let Some(&id) = self.index.get(&key) {
            if let Some(entry) = self.list.get_mut(id) {
                entry.value = value;
            }
            self.list.move_to_front(id);
            return false;
        }

        let mut evicted = false;
        if self.list.len() == self.capacity {
            if let Some(entry) = self.list.pop_back() {
                self.index.remove(&entry.key);
                evicted = true;
            }
        }

        let id = self.list.push_front(Entry {
            key: key.clone(),
            value,
        });
        self.index.insert(key, id);
        evicted
    }

    /// Looks up a value, promoting a hit to the MRU position.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let id = *self.index.get(key)?;
        self.list.move_to_front(id);
        self.list.get(id).map(|entry| &entry.value)
    }

    /// Checks presence, promoting a hit to the MRU position.
    ///
    /// Counts as a use, exactly like [`get`](Self::get).
    pub fn contains(&mut self, key: &K) -> bool {
        match self.index.get(key) {
            Some(&id) => self.list.move_to_front(id),
            None => false,
        }
    }

    /// Looks up a value without touching recency order.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let id = *self.index.get(key)?;
        self.list.get(id).map(|entry| &entry.value)
    }

    /// Removes an entry by key, returning its value if it was resident.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let id = self.index.remove(key)?;
        self.list.remove(id).map(|entry| entry.value)
    }

    /// Removes and returns the least-recently-used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let entry = self.list.pop_back()?;
        self.index.remove(&entry.key);
        Some((entry.key, entry.value))
    }

    /// Returns the least-recently-used entry without removing or promoting it.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.list.back().map(|entry| (&entry.key, &entry.value))
    }

    /// Promotes a key to the MRU position without retrieving its value.
    pub fn touch(&mut self, key: &K) -> bool {
        match self.index.get(key) {
            Some(&id) => self.list.move_to_front(id),
            None => false,
        }
    }

    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the capacity fixed at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes all entries. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.index.clear();
        self.list.clear();
    }

    /// Returns an iterator over values from most to least recently used.
    pub fn iter_values(&self) -> impl Iterator<Item = &V> {
        self.list.iter().map(|entry| &entry.value)
    }

    #[cfg(any(test, debug_assertions))]
    /// Verifies the index/list consistency invariants.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() != self.list.len() {
            return Err(InvariantError::new(format!(
                "index/list length mismatch: index={}, list={}",
                self.index.len(),
                self.list.len()
            )));
        }
        if self.list.len() > self.capacity {
            return Err(InvariantError::new(format!(
                "capacity exceeded: len={}, capacity={}",
                self.list.len(),
                self.capacity
            )));
        }
        for (key, &id) in &self.index {
            match self.list.get(id) {
                Some(entry) if entry.key == *key => {}
                Some(_) => {
                    return Err(InvariantError::new(
                        "index record points at a node holding a different key",
                    ));
                }
                None => {
                    return Err(InvariantError::new("index record points at a freed slot"));
                }
            }
        }
        self.list.debug_validate_invariants();
        Ok(())
    }
}

impl<K, V> CoreCache<K, V> for LruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn put(&mut self, key: K, value: V) -> bool {
        LruCore::put(self, key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        LruCore::get(self, key)
    }

    #[inline]
    fn contains(&mut self, key: &K) -> bool {
        LruCore::contains(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        LruCore::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        LruCore::capacity(self)
    }

    #[inline]
    fn clear(&mut self) {
        LruCore::clear(self)
    }
}

impl<K, V> MutableCache<K, V> for LruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        LruCore::remove(self, key)
    }
}

impl<K, V> LruCacheTrait<K, V> for LruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn pop_lru(&mut self) -> Option<(K, V)> {
        LruCore::pop_lru(self)
    }

    #[inline]
    fn peek_lru(&self) -> Option<(&K, &V)> {
        LruCore::peek_lru(self)
    }

    #[inline]
    fn touch(&mut self, key: &K) -> bool {
        LruCore::touch(self, key)
    }
}

impl<K, V> fmt::Debug for LruCore<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCore")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}

/// Thread-safe LRU cache: `LruCore` behind one exclusive mutex.
///
/// Every public operation acquires the lock for its full duration, so the
/// core's invariants are never observable in a partially-updated state and
/// concurrent calls behave as if executed in some total order. Cloning the
/// handle shares the same underlying cache.
///
/// # Example
///
/// ```
/// use lrukit::policy::lru::ConcurrentLruCache;
///
/// let cache: ConcurrentLruCache<u64, String> = ConcurrentLruCache::try_new(100).unwrap();
/// cache.put(1, "one".to_string());
/// assert_eq!(cache.get(&1), Some("one".to_string()));
/// ```
#[cfg(feature = "concurrency")]
pub struct ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    inner: Arc<Mutex<LruCore<K, V>>>,
}

#[cfg(feature = "concurrency")]
impl<K, V> Clone for ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a thread-safe LRU cache with the given capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCapacity`] when `capacity < 1`.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Ok(ConcurrentLruCache {
            inner: Arc::new(Mutex::new(LruCore::try_new(capacity)?)),
        })
    }

    /// Inserts or updates an entry; returns `true` if an entry was evicted.
    pub fn put(&self, key: K, value: V) -> bool {
        let mut cache = self.inner.lock();
        cache.put(key, value)
    }

    /// Looks up a value, promoting a hit to the MRU position.
    ///
    /// Returns an owned clone; callers never hold references into the cache.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        let mut cache = self.inner.lock();
        cache.get(key).cloned()
    }

    /// Checks presence, promoting a hit to the MRU position.
    pub fn contains(&self, key: &K) -> bool {
        let mut cache = self.inner.lock();
        cache.contains(key)
    }

    /// Looks up a value without touching recency order.
    pub fn peek(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        let cache = self.inner.lock();
        cache.peek(key).cloned()
    }

    /// Removes an entry by key; returns `true` only if an entry was removed.
    pub fn remove(&self, key: &K) -> bool {
        let mut cache = self.inner.lock();
        cache.remove(key).is_some()
    }

    /// Promotes a key to the MRU position without retrieving its value.
    pub fn touch(&self, key: &K) -> bool {
        let mut cache = self.inner.lock();
        cache.touch(key)
    }

    /// Removes and returns the least-recently-used entry.
    pub fn pop_lru(&self) -> Option<(K, V)> {
        let mut cache = self.inner.lock();
        cache.pop_lru()
    }

    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        let cache = self.inner.lock();
        cache.len()
    }

    /// Returns `true` if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        let cache = self.inner.lock();
        cache.is_empty()
    }

    /// Returns the capacity fixed at construction.
    pub fn capacity(&self) -> usize {
        let cache = self.inner.lock();
        cache.capacity()
    }

    /// Removes all entries. Capacity is unchanged.
    pub fn clear(&self) {
        let mut cache = self.inner.lock();
        cache.clear();
    }

    #[cfg(any(test, debug_assertions))]
    /// Verifies the index/list consistency invariants under the lock.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let cache = self.inner.lock();
        cache.check_invariants()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentCache for ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone + Send,
    V: Send,
{
}

#[cfg(feature = "concurrency")]
impl<K, V> fmt::Debug for ConcurrentLruCache<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.inner.lock();
        f.debug_struct("ConcurrentLruCache")
            .field("len", &cache.len())
            .field("capacity", &cache.capacity())
            .finish_non_exhaustive()
    }
}
