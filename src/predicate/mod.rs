//! Predicate combinators for composable validation logic
//!
//! Every check this crate performs is a [`Predicate`]: the length bounds,
//! the RFC822 address grammar and the RFC1035 host-name grammar. They can be
//! combined with `and`, `or` and `not`, and lifted into a [`Validation`]
//! with [`validate`].
//!
//! # Example
//!
//! ```rust
//! use stillmail::predicate::*;
//!
//! let strict = email_format(true);
//! let loose = email_format(false);
//!
//! assert!(strict.check("test@example.co.uk"));
//! assert!(!strict.check("test@[127.0.0.1]"));
//! assert!(loose.check("test@[127.0.0.1]"));
//! ```
//!
//! [`Validation`]: crate::Validation

mod combinators;
mod string;
mod validation;

pub use combinators::{And, Not, Or, Predicate, PredicateExt};

pub use string::{
    char_len, len_between, len_eq, len_max, len_min, matches, LenBetween, Matches,
};

pub use validation::{validate, validate_with};

pub use crate::format::{email_format, EmailFormat};
pub use crate::rfc1035;
pub use crate::rfc822;
