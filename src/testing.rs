//! Testing utilities for code that validates email addresses
//!
//! Assertion macros that report the offending address and its messages on
//! failure, and (with the `proptest` feature) strategies for generating
//! addresses and length constraints.
//!
//! # Examples
//!
//! ```rust
//! use stillmail::{assert_email_errors, assert_invalid_email, assert_valid_email};
//! use stillmail::ValidationConfig;
//!
//! let config = ValidationConfig::default();
//!
//! assert_valid_email!(config, "test@example.co.uk");
//! assert_invalid_email!(config, "test@[127.0.0.1]");
//! assert_invalid_email!(config, "a@", count = 2);
//! assert_email_errors!(config, "test@Monday 1:00", ["is invalid"]);
//! ```

/// Assert that an address passes `config`.
///
/// # Example
///
/// ```rust
/// use stillmail::{assert_valid_email, ValidationConfig};
///
/// assert_valid_email!(ValidationConfig::default(), "test@example.com");
/// ```
#[macro_export]
macro_rules! assert_valid_email {
    ($config:expr, $address:expr) => {{
        let address: &str = $address;
        let errors = $crate::validate(address, &$config);
        if !errors.is_empty() {
            panic!("Expected {:?} to be valid, got errors: {:?}", address, errors);
        }
    }};
}

/// Assert that an address fails `config`, optionally with an exact number
/// of messages.
///
/// # Example
///
/// ```rust
/// use stillmail::{assert_invalid_email, ValidationConfig};
///
/// assert_invalid_email!(ValidationConfig::default(), "a");
/// assert_invalid_email!(ValidationConfig::default(), "a", count = 2);
/// ```
#[macro_export]
macro_rules! assert_invalid_email {
    ($config:expr, $address:expr) => {{
        let address: &str = $address;
        if $crate::validate(address, &$config).is_empty() {
            panic!("Expected {:?} to be invalid, but it passed", address);
        }
    }};
    ($config:expr, $address:expr, count = $count:expr) => {{
        let address: &str = $address;
        let errors = $crate::validate(address, &$config);
        if errors.is_empty() {
            panic!("Expected {:?} to be invalid, but it passed", address);
        }
        assert_eq!(
            errors.len(),
            $count,
            "Expected {} errors for {:?}, got {:?}",
            $count,
            address,
            errors
        );
    }};
}

/// Assert the exact messages an address produces under `config`.
///
/// # Example
///
/// ```rust
/// use stillmail::{assert_email_errors, ValidationConfig};
///
/// let config = ValidationConfig::builder().is(8).wrong_length("custom").build().unwrap();
/// assert_email_errors!(config, "a@a.com", ["is invalid", "custom"]);
/// ```
#[macro_export]
macro_rules! assert_email_errors {
    ($config:expr, $address:expr, [$($expected:expr),* $(,)?]) => {{
        let address: &str = $address;
        let errors = $crate::validate(address, &$config);
        let expected: Vec<String> = vec![$(String::from($expected)),*];
        assert_eq!(errors, expected, "Unexpected errors for {:?}", address);
    }};
}

/// Assert that a validation succeeds.
///
/// # Example
///
/// ```rust
/// use stillmail::{assert_success, EmailValidator};
///
/// assert_success!(EmailValidator::<()>::default().check("test@example.com"));
/// ```
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validation fails.
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

#[cfg(feature = "proptest")]
pub use strategies::*;

#[cfg(feature = "proptest")]
mod strategies {
    use proptest::prelude::*;

    use crate::config::LengthConstraint;

    /// Dot-atom local parts: letters, digits and RFC822 specials.
    pub fn local_part() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9!#$%&'*+/=?^_`{|}~-]{1,16}"
    }

    /// Host names that satisfy RFC1035: one to three labels of two or more
    /// characters.
    pub fn host_name() -> impl Strategy<Value = String> {
        prop::collection::vec("[a-z][a-z0-9-]{0,10}[a-z0-9]", 1..=3)
            .prop_map(|labels| labels.join("."))
    }

    /// Addresses that pass strict format checking.
    pub fn strict_address() -> impl Strategy<Value = String> {
        (local_part(), host_name()).prop_map(|(local, host)| format!("{}@{}", local, host))
    }

    impl Arbitrary for LengthConstraint {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            prop_oneof![
                (0usize..64).prop_map(LengthConstraint::Minimum),
                (0usize..64).prop_map(LengthConstraint::Maximum),
                (0usize..64).prop_map(LengthConstraint::Exact),
                (0usize..64, 0usize..64).prop_map(|(a, b)| {
                    LengthConstraint::Range(a.min(b)..=a.max(b))
                }),
            ]
            .boxed()
        }
    }
}
