//! String predicates
//!
//! Lengths are counted in characters (Unicode scalar values), not bytes.

use regex::Regex;

use super::combinators::Predicate;

/// Predicate that checks string length is in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LenBetween {
    min: usize,
    max: usize,
}

impl LenBetween {
    /// Lower bound, inclusive.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Upper bound, inclusive.
    pub fn max(&self) -> usize {
        self.max
    }
}

impl Predicate<str> for LenBetween {
    #[inline]
    fn check(&self, value: &str) -> bool {
        let len = char_len(value);
        len >= self.min && len <= self.max
    }
}

/// Create a predicate that checks if string length is between min and max (inclusive).
///
/// # Example
///
/// ```rust
/// use stillmail::predicate::*;
///
/// let p = len_between(8, 10);
/// assert!(!p.check("a@a.com"));
/// assert!(p.check("a@aa.com"));
/// assert!(p.check("a@aaaa.com"));
/// assert!(!p.check("a@aaaaa.com"));
/// ```
pub fn len_between(min: usize, max: usize) -> LenBetween {
    LenBetween { min, max }
}

/// Create a predicate that checks if string length is at least min.
pub fn len_min(min: usize) -> LenBetween {
    LenBetween {
        min,
        max: usize::MAX,
    }
}

/// Create a predicate that checks if string length is at most max.
pub fn len_max(max: usize) -> LenBetween {
    LenBetween { min: 0, max }
}

/// Create a predicate that checks if string length is exactly len.
///
/// # Example
///
/// ```rust
/// use stillmail::predicate::*;
///
/// assert!(len_eq(8).check("a@aa.com"));
/// assert!(!len_eq(8).check("a@a.com"));
/// ```
pub fn len_eq(len: usize) -> LenBetween {
    LenBetween { min: len, max: len }
}

/// Predicate that checks a string against a regular expression.
///
/// The pattern is borrowed, so compiled statics can back any number of
/// predicates.
#[derive(Clone, Copy, Debug)]
pub struct Matches<'r>(pub &'r Regex);

impl Predicate<str> for Matches<'_> {
    #[inline]
    fn check(&self, value: &str) -> bool {
        self.0.is_match(value)
    }
}

/// Create a predicate that checks if a string matches `regex`.
pub fn matches(regex: &Regex) -> Matches<'_> {
    Matches(regex)
}

/// Number of characters in `value`.
#[inline]
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}
