//! The email address validator
//!
//! Validation runs in three steps:
//!
//! 1. the guard is evaluated against the record, and a failing guard skips
//!    everything else;
//! 2. the format is checked, adding the wrong-format message once on failure;
//! 3. the length is checked against the configured constraint (or 3..=320
//!    when none is set), adding one length message on failure.
//!
//! Format and length are checked independently, so a short malformed value
//! reports both, format first.
//!
//! # Example
//!
//! ```rust
//! use stillmail::{validate, ValidationConfig};
//!
//! let config = ValidationConfig::default();
//!
//! assert!(validate("test@example.com", &config).is_empty());
//! assert_eq!(
//!     validate("a@", &config),
//!     vec![
//!         "is invalid".to_string(),
//!         "is too short (minimum is 3 characters)".to_string(),
//!     ]
//! );
//! ```

use std::fmt;

use crate::config::ValidationConfig;
use crate::format::email_format;
use crate::predicate::{self, char_len};
use crate::Validation;

/// Validate a bare value, returning its error messages in order.
///
/// The guard, if any, is evaluated against `()`.
pub fn validate(value: &str, config: &ValidationConfig) -> Vec<String> {
    validate_record(&(), value, config)
}

/// Validate the value of a record's field, returning its error messages.
pub fn validate_record<R: ?Sized>(
    record: &R,
    value: &str,
    config: &ValidationConfig<R>,
) -> Vec<String> {
    match check_record(record, value, config) {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors,
    }
}

/// Validate the value of a record's field.
///
/// Succeeds with `value` when it passes (or when the guard skips it).
pub fn check_record<'v, R: ?Sized>(
    record: &R,
    value: &'v str,
    config: &ValidationConfig<R>,
) -> Validation<&'v str, Vec<String>> {
    if !config.condition().allows(record) {
        #[cfg(feature = "tracing")]
        tracing::debug!(value, "email validation skipped by condition");
        return Validation::success(value);
    }

    let result = check_format(value, config)
        .and(check_length(value, config))
        .map(|(value, _)| value);

    #[cfg(feature = "tracing")]
    if let Validation::Failure(errors) = &result {
        tracing::debug!(value, errors = errors.len(), "email validation failed");
    }

    result
}

fn check_format<'v, R: ?Sized>(
    value: &'v str,
    config: &ValidationConfig<R>,
) -> Validation<&'v str, Vec<String>> {
    let result = predicate::validate(
        value,
        email_format(config.is_strict()),
        vec![config.messages().wrong_format()],
    );

    #[cfg(feature = "tracing")]
    tracing::trace!(
        value,
        strict = config.is_strict(),
        valid = result.is_success(),
        "format checked"
    );

    result
}

fn check_length<'v, R: ?Sized>(
    value: &'v str,
    config: &ValidationConfig<R>,
) -> Validation<&'v str, Vec<String>> {
    let constraint = config.effective_length();
    let result = predicate::validate_with(value, constraint.bounds(), |value| {
        vec![constraint.message(char_len(value), config.messages())]
    });

    #[cfg(feature = "tracing")]
    tracing::trace!(
        value,
        length = char_len(value),
        constraint = ?constraint,
        valid = result.is_success(),
        "length checked"
    );

    result
}

/// A validator owning its configuration.
///
/// # Example
///
/// ```rust
/// use stillmail::{EmailValidator, ValidationConfig};
///
/// let validator = EmailValidator::new(
///     ValidationConfig::<()>::builder().maximum(8).build().unwrap(),
/// );
///
/// assert!(validator.is_valid("a@aa.com"));
/// assert_eq!(
///     validator.validate("a@aaa.com"),
///     vec!["is too long (maximum is 8 characters)".to_string()]
/// );
/// ```
pub struct EmailValidator<R: ?Sized = ()> {
    config: ValidationConfig<R>,
}

impl<R: ?Sized> Clone for EmailValidator<R> {
    fn clone(&self) -> Self {
        Self::new(self.config.clone())
    }
}

impl<R: ?Sized> fmt::Debug for EmailValidator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailValidator")
            .field("config", &self.config)
            .finish()
    }
}

impl<R: ?Sized> Default for EmailValidator<R> {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

impl<R: ?Sized> EmailValidator<R> {
    /// Create a validator from a configuration.
    pub fn new(config: ValidationConfig<R>) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &ValidationConfig<R> {
        &self.config
    }

    /// Validate the value of a record's field.
    pub fn check_record<'v>(&self, record: &R, value: &'v str) -> Validation<&'v str, Vec<String>> {
        check_record(record, value, &self.config)
    }

    /// Error messages for the value of a record's field.
    pub fn validate_record(&self, record: &R, value: &str) -> Vec<String> {
        validate_record(record, value, &self.config)
    }
}

impl EmailValidator<()> {
    /// Validate a bare value.
    pub fn check<'v>(&self, value: &'v str) -> Validation<&'v str, Vec<String>> {
        check_record(&(), value, &self.config)
    }

    /// Error messages for a bare value.
    pub fn validate(&self, value: &str) -> Vec<String> {
        validate(value, &self.config)
    }

    /// Whether a bare value passes.
    pub fn is_valid(&self, value: &str) -> bool {
        self.check(value).is_success()
    }
}
