//! Error types for the lrukit library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when cache construction parameters are invalid
//!   (the only runtime-visible failure mode; every cache operation after
//!   construction is total).
//! - [`InvariantError`]: Returned when internal data-structure invariants are
//!   violated (debug-only `check_invariants` methods).
//!
//! ## Example Usage
//!
//! ```
//! use lrukit::error::ConfigError;
//! use lrukit::policy::lru::LruCore;
//!
//! // Fallible constructor: capacity is validated up front
//! let cache: Result<LruCore<String, i32>, ConfigError> = LruCore::try_new(100);
//! assert!(cache.is_ok());
//!
//! // A zero capacity is rejected, never silently clamped
//! let bad = LruCore::<String, i32>::try_new(0);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when cache construction parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`LruCore::try_new`](crate::policy::lru::LruCore::try_new). Construction is
/// the only operation that can fail; lookups, inserts, and removals report
/// absence through `Option`/`bool` return values instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The requested capacity was below the minimum of 1 entry.
    InvalidCapacity {
        /// The capacity the caller asked for.
        requested: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidCapacity { requested } => {
                write!(f, "cache capacity must be >= 1, got {requested}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal cache invariants are violated.
///
/// Produced by debug-only `check_invariants` methods on cache types
/// (e.g. [`LruCore::check_invariants`](crate::policy::lru::LruCore::check_invariants)).
/// Carries a human-readable description of which invariant failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    /// Creates a new `InvariantError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- ConfigError ------------------------------------------------------

    #[test]
    fn config_display_names_requested_capacity() {
        let err = ConfigError::InvalidCapacity { requested: 0 };
        assert_eq!(err.to_string(), "cache capacity must be >= 1, got 0");
    }

    #[test]
    fn config_debug_includes_variant() {
        let err = ConfigError::InvalidCapacity { requested: 0 };
        let dbg = format!("{:?}", err);
        assert!(dbg.contains("InvalidCapacity"));
    }

    #[test]
    fn config_clone_and_eq() {
        let a = ConfigError::InvalidCapacity { requested: 0 };
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn config_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ConfigError>();
    }

    // -- InvariantError ---------------------------------------------------

    #[test]
    fn invariant_display_shows_message() {
        let err = InvariantError::new("index/list length mismatch");
        assert_eq!(err.to_string(), "index/list length mismatch");
    }

    #[test]
    fn invariant_message_accessor() {
        let err = InvariantError::new("dangling slot id");
        assert_eq!(err.message(), "dangling slot id");
    }

    #[test]
    fn invariant_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<InvariantError>();
    }
}
