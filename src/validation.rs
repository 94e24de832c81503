//! Validation type for accumulating errors
//!
//! `Validation` is similar to `Result`, but combining two failures keeps the
//! errors of both instead of stopping at the first. This is how a malformed
//! address that is also too short ends up with two messages.
//!
//! # Examples
//!
//! ```
//! use stillmail::Validation;
//!
//! let format = Validation::<(), _>::failure(vec!["is invalid"]);
//! let length = Validation::<(), _>::failure(vec!["is too short"]);
//!
//! assert_eq!(
//!     format.and(length),
//!     Validation::Failure(vec!["is invalid", "is too short"])
//! );
//! ```

use crate::Semigroup;

/// A validation that either succeeds with a value or fails with accumulated errors
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error value (must implement `Semigroup` for accumulation)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Convert this validation to a Result
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Borrow the errors of a failed validation
    #[inline]
    pub fn errors(&self) -> Option<&E> {
        match self {
            Validation::Success(_) => None,
            Validation::Failure(error) => Some(error),
        }
    }

    /// Transform the success value if present
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the error value if present
    ///
    /// # Examples
    ///
    /// ```
    /// use stillmail::Validation;
    ///
    /// let v = Validation::<i32, _>::failure(vec!["is invalid"]);
    /// assert_eq!(v.map_err(|errors| errors.len()), Validation::Failure(1));
    /// ```
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine two validations, accumulating errors using the Semigroup instance
    ///
    /// Errors of `self` come before errors of `other`.
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) => Validation::Failure(e),
            (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }

    /// Combine all validations in a Vec
    ///
    /// Returns every success value when all validations succeed, otherwise
    /// the errors of every failure combined in order.
    pub fn all_vec(validations: Vec<Validation<T, E>>) -> Validation<Vec<T>, E> {
        let mut values = Vec::with_capacity(validations.len());
        let mut errors: Option<E> = None;

        for validation in validations {
            match validation {
                Validation::Success(value) => values.push(value),
                Validation::Failure(error) => {
                    errors = Some(match errors {
                        Some(acc) => acc.combine(error),
                        None => error,
                    });
                }
            }
        }

        match errors {
            Some(error) => Validation::Failure(error),
            None => Validation::Success(values),
        }
    }
}
