pub use crate::ds::{RecencyList, SlotArena, SlotId};
pub use crate::error::{ConfigError, InvariantError};
pub use crate::policy::{LruCore, LruSet};
pub use crate::traits::{CoreCache, LruCacheTrait, MutableCache};

#[cfg(feature = "concurrency")]
pub use crate::policy::{ConcurrentLruCache, ConcurrentLruSet};
#[cfg(feature = "concurrency")]
pub use crate::traits::ConcurrentCache;
