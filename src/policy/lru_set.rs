//! Set-style LRU membership view over the same engine as
//! [`LruCore`](crate::policy::lru::LruCore).
//!
//! Tracks which keys are resident rather than mapping them to values, with
//! identical recency and eviction behavior: `add` on a resident key only
//! promotes it, `contains` counts as a use, and a full set evicts its
//! least-recently-used member.

use std::fmt;
use std::hash::Hash;

#[cfg(feature = "concurrency")]
use std::sync::Arc;

#[cfg(feature = "concurrency")]
use parking_lot::Mutex;

use crate::error::ConfigError;
#[cfg(any(test, debug_assertions))]
use crate::error::InvariantError;
use crate::policy::lru::LruCore;
#[cfg(feature = "concurrency")]
use crate::traits::ConcurrentCache;

/// Capacity-bounded membership set with LRU eviction.
///
/// # Example
///
/// ```
/// use lrukit::policy::lru_set::LruSet;
///
/// let mut set: LruSet<&str> = LruSet::try_new(2).unwrap();
/// assert!(!set.add("a"));
/// assert!(!set.add("b"));
/// assert!(set.contains(&"a")); // "a" is now MRU
/// assert!(set.add("c"));       // evicts "b"
/// assert!(!set.contains(&"b"));
/// ```
pub struct LruSet<K>
where
    K: Eq + Hash + Clone,
{
    inner: LruCore<K, ()>,
}

impl<K> LruSet<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates an LRU set with the given capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCapacity`] when `capacity < 1`.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Ok(LruSet {
            inner: LruCore::try_new(capacity)?,
        })
    }

    /// Adds a key; returns `true` if another member was evicted to make room.
    ///
    /// Re-adding a resident key only promotes it and never evicts.
    pub fn add(&mut self, key: K) -> bool {
        self.inner.put(key, ())
    }

    /// Checks membership, promoting a hit to the MRU position.
    pub fn contains(&mut self, key: &K) -> bool {
        self.inner.contains(key)
    }

    /// Checks membership without touching recency order.
    pub fn peek(&self, key: &K) -> bool {
        self.inner.peek(key).is_some()
    }

    /// Removes a key; returns `true` only if it was resident.
    pub fn remove(&mut self, key: &K) -> bool {
        self.inner.remove(key).is_some()
    }

    /// Removes and returns the least-recently-used member.
    pub fn pop_lru(&mut self) -> Option<K> {
        self.inner.pop_lru().map(|(key, ())| key)
    }

    /// Returns the least-recently-used member without removing it.
    pub fn peek_lru(&self) -> Option<&K> {
        self.inner.peek_lru().map(|(key, ())| key)
    }

    /// Returns the current number of members.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the set holds no members.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the capacity fixed at construction.
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Removes all members. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    #[cfg(any(test, debug_assertions))]
    /// Verifies the underlying engine's consistency invariants.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.inner.check_invariants()
    }
}

impl<K> fmt::Debug for LruSet<K>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruSet")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish_non_exhaustive()
    }
}

/// Thread-safe LRU set: `LruSet` behind one exclusive mutex.
///
/// Same locking discipline as
/// [`ConcurrentLruCache`](crate::policy::lru::ConcurrentLruCache): one lock,
/// held for the whole of each operation.
#[cfg(feature = "concurrency")]
pub struct ConcurrentLruSet<K>
where
    K: Eq + Hash + Clone,
{
    inner: Arc<Mutex<LruSet<K>>>,
}

#[cfg(feature = "concurrency")]
impl<K> Clone for ConcurrentLruSet<K>
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
impl<K> ConcurrentLruSet<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates a thread-safe LRU set with the given capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCapacity`] when `capacity < 1`.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Ok(ConcurrentLruSet {
            inner: Arc::new(Mutex::new(LruSet::try_new(capacity)?)),
        })
    }

    /// Adds a key; returns `true` if another member was evicted.
    pub fn add(&self, key: K) -> bool {
        let mut set = self.inner.lock();
        set.add(key)
    }

    /// Checks membership, promoting a hit to the MRU position.
    pub fn contains(&self, key: &K) -> bool {
        let mut set = self.inner.lock();
        set.contains(key)
    }

    /// Removes a key; returns `true` only if it was resident.
    pub fn remove(&self, key: &K) -> bool {
        let mut set = self.inner.lock();
        set.remove(key)
    }

    /// Returns the current number of members.
    pub fn len(&self) -> usize {
        let set = self.inner.lock();
        set.len()
    }

    /// Returns `true` if the set holds no members.
    pub fn is_empty(&self) -> bool {
        let set = self.inner.lock();
        set.is_empty()
    }

    /// Returns the capacity fixed at construction.
    pub fn capacity(&self) -> usize {
        let set = self.inner.lock();
        set.capacity()
    }

    /// Removes all members. Capacity is unchanged.
    pub fn clear(&self) {
        let mut set = self.inner.lock();
        set.clear();
    }

    #[cfg(any(test, debug_assertions))]
    /// Verifies the underlying engine's consistency invariants under the lock.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let set = self.inner.lock();
        set.check_invariants()
    }
}

#[cfg(feature = "concurrency")]
impl<K> ConcurrentCache for ConcurrentLruSet<K> where K: Eq + Hash + Clone + Send {}

#[cfg(feature = "concurrency")]
impl<K> fmt::Debug for ConcurrentLruSet<K>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let set = self.inner.lock();
        f.debug_struct("ConcurrentLruSet")
            .field("len", &set.len())
            .field("capacity", &set.capacity())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_is_rejected() {
        assert!(LruSet::<u32>::try_new(0).is_err());
    }

    #[test]
    fn add_evicts_least_recent_member() {
        let mut set = LruSet::try_new(2).unwrap();
        assert!(!set.add("a"));
        assert!(!set.add("b"));
        assert!(set.contains(&"a"));

        assert!(set.add("c"));
        assert!(set.peek(&"a"));
        assert!(!set.peek(&"b"));
        assert!(set.peek(&"c"));
        set.check_invariants().unwrap();
    }

    #[test]
    fn re_add_only_promotes() {
        let mut set = LruSet::try_new(2).unwrap();
        set.add("a");
        set.add("b");

        // Re-adding "a" makes "b" the eviction target.
        assert!(!set.add("a"));
        assert_eq!(set.len(), 2);
        assert!(set.add("c"));
        assert!(!set.peek(&"b"));
        set.check_invariants().unwrap();
    }

    #[test]
    fn remove_is_idempotent() {
        let mut set = LruSet::try_new(2).unwrap();
        set.add(1);
        assert!(set.remove(&1));
        assert!(!set.remove(&1));
        assert!(!set.remove(&99));
        assert!(set.is_empty());
        set.check_invariants().unwrap();
    }

    #[test]
    fn contains_miss_on_empty_set() {
        let mut set: LruSet<&str> = LruSet::try_new(3).unwrap();
        assert!(!set.contains(&"q"));
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn pop_lru_drains_in_recency_order() {
        let mut set = LruSet::try_new(3).unwrap();
        set.add(1);
        set.add(2);
        set.add(3);
        set.contains(&1);

        assert_eq!(set.pop_lru(), Some(2));
        assert_eq!(set.pop_lru(), Some(3));
        assert_eq!(set.pop_lru(), Some(1));
        assert_eq!(set.pop_lru(), None);
    }

    #[test]
    fn peek_lru_reports_eviction_target() {
        let mut set = LruSet::try_new(2).unwrap();
        set.add("a");
        set.add("b");
        assert_eq!(set.peek_lru(), Some(&"a"));
        set.contains(&"a");
        assert_eq!(set.peek_lru(), Some(&"b"));
    }

    #[cfg(feature = "concurrency")]
    mod concurrent {
        use super::*;

        #[test]
        fn basic_ops_through_the_guard() {
            let set = ConcurrentLruSet::try_new(2).unwrap();
            assert!(!set.add(1));
            assert!(!set.add(2));
            assert!(set.contains(&1));
            assert!(set.add(3));
            assert!(!set.contains(&2));
            assert_eq!(set.len(), 2);
            set.check_invariants().unwrap();
        }

        #[test]
        fn cloned_handles_share_state() {
            let set = ConcurrentLruSet::try_new(4).unwrap();
            let other = set.clone();
            set.add("a");
            assert!(other.contains(&"a"));
            assert!(other.remove(&"a"));
            assert!(set.is_empty());
        }
    }
}
