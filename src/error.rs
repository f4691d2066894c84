//! Error types for the chainkit library.
//!
//! ## Key Components
//!
//! - [`InvariantError`]: Returned when internal data-structure invariants are
//!   violated (`check_invariants` methods on the list engines).
//!
//! The mutation surface itself is total: no engine operation and no predictor
//! call returns an error for well-typed input. `InvariantError` exists so that
//! tests and debug tooling can interrogate structural health without panicking.
//!
//! ## Example Usage
//!
//! ```
//! use chainkit::ListEngine;
//! use chainkit::engine::SinglyList;
//!
//! let mut list = SinglyList::new();
//! list.insert_end(1);
//! list.insert_end(2);
//! assert!(list.check_invariants().is_ok());
//! ```

use std::fmt;

/// Error returned when internal list invariants are violated.
///
/// Produced by `check_invariants` methods on the engine types
/// (e.g. [`CircularList::check_invariants`](crate::engine::CircularList::check_invariants)).
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_shows_message() {
        let err = InvariantError::new("cycle does not close at head");
        assert_eq!(err.to_string(), "cycle does not close at head");
    }

    #[test]
    fn debug_includes_message() {
        let err = InvariantError::new("dangling id index");
        let dbg = format!("{:?}", err);
        assert!(dbg.contains("dangling id index"));
    }

    #[test]
    fn message_accessor() {
        let err = InvariantError::new("test");
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn clone_and_eq() {
        let a = InvariantError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<InvariantError>();
    }
}
