//! Semigroup trait for combining error collections
//!
//! Validation failures are accumulated rather than short-circuited: when two
//! checks fail, their errors are combined into one collection. A `Semigroup`
//! is any type with such an associative combine operation.
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use stillmail::Semigroup;
//!
//! let format = vec!["is invalid".to_string()];
//! let length = vec!["is too short (minimum is 3 characters)".to_string()];
//! assert_eq!(
//!     format.combine(length),
//!     vec![
//!         "is invalid".to_string(),
//!         "is too short (minimum is 3 characters)".to_string(),
//!     ]
//! );
//! ```

/// A type that supports an associative binary operation
///
/// The left operand's contents come first: message ordering in the
/// combined value follows the order in which checks ran.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_vec_combine_preserves_order() {
        let v1 = vec!["format"];
        let v2 = vec!["length"];
        assert_eq!(v1.combine(v2), vec!["format", "length"]);
    }

    #[test]
    fn test_vec_combine_with_empty() {
        let v1: Vec<&str> = vec![];
        assert_eq!(v1.combine(vec!["only"]), vec!["only"]);
    }

    proptest! {
        #[test]
        fn prop_vec_associative(
            a in prop::collection::vec(any::<u8>(), 0..8),
            b in prop::collection::vec(any::<u8>(), 0..8),
            c in prop::collection::vec(any::<u8>(), 0..8),
        ) {
            let left = a.clone().combine(b.clone()).combine(c.clone());
            let right = a.combine(b.combine(c));
            prop_assert_eq!(left, right);
        }
    }
}
