pub mod lru;
pub mod lru_set;

#[cfg(feature = "concurrency")]
pub use lru::ConcurrentLruCache;
pub use lru::LruCore;
#[cfg(feature = "concurrency")]
pub use lru_set::ConcurrentLruSet;
pub use lru_set::LruSet;
