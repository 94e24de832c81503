//! Validation integration for predicates

use std::ops::Deref;

use super::combinators::Predicate;
use crate::Validation;

/// Validate a value using a predicate.
///
/// The predicate sees the value through `Deref`, so a `&str` or a `String`
/// is checked by a `Predicate<str>`.
///
/// # Example
///
/// ```rust
/// use stillmail::{Validation, predicate::*};
///
/// let result = validate("a@aa.com", len_max(8), "is too long");
/// assert_eq!(result, Validation::success("a@aa.com"));
///
/// let result = validate("a@aaa.com", len_max(8), "is too long");
/// assert_eq!(result, Validation::failure("is too long"));
/// ```
pub fn validate<T, E, P>(value: T, predicate: P, error: E) -> Validation<T, E>
where
    T: Deref,
    P: Predicate<T::Target>,
{
    if predicate.check(&value) {
        Validation::success(value)
    } else {
        Validation::failure(error)
    }
}

/// Validate a value with an error factory.
///
/// The factory is only called on failure and can inspect the value.
pub fn validate_with<T, E, P, F>(value: T, predicate: P, error_fn: F) -> Validation<T, E>
where
    T: Deref,
    P: Predicate<T::Target>,
    F: FnOnce(&T) -> E,
{
    if predicate.check(&value) {
        Validation::success(value)
    } else {
        Validation::failure(error_fn(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{len_max, len_min};

    #[test]
    fn test_validate_failure() {
        let result = validate("a@", len_min(3), "is too short");
        assert_eq!(result, Validation::failure("is too short"));
    }

    #[test]
    fn test_validate_with_builds_error_from_value() {
        let result = validate_with(String::from("a@aaa.com"), len_max(8), |s| {
            format!("{} is too long", s)
        });
        assert_eq!(
            result,
            Validation::failure("a@aaa.com is too long".to_string())
        );
    }

    #[test]
    fn test_validate_with_not_called_on_success() {
        let result: Validation<&str, String> =
            validate_with("a@aa.com", len_max(8), |_| panic!("not called"));
        assert!(result.is_success());
    }
}
