//! lrukit: a capacity-bounded LRU cache built from an arena-backed recency
//! list and a hashed key index, kept consistent behind a single lock.
//!
//! See `DESIGN.md` for internal architecture and invariants.

pub mod ds;
pub mod error;
pub mod policy;
pub mod prelude;
pub mod traits;
