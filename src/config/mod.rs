//! Validation configuration
//!
//! A [`ValidationConfig`] holds at most one length constraint, the format
//! mode, the four message templates, and the guard deciding whether the
//! validation runs at all. Configurations are built once and never change.
//!
//! # Example
//!
//! ```rust
//! use stillmail::{LengthConstraint, ValidationConfig};
//!
//! let config = ValidationConfig::<()>::builder()
//!     .within(8..=10)
//!     .strict(false)
//!     .too_long("custom")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.length(), Some(&LengthConstraint::Range(8..=10)));
//! assert!(!config.is_strict());
//! ```

mod error;
#[cfg(feature = "serde")]
mod serde_impl;

pub use error::ConfigError;

use std::fmt;
use std::ops::RangeInclusive;

use crate::condition::Condition;
use crate::messages::Messages;
use crate::predicate::{len_between, len_eq, len_max, len_min, LenBetween, Predicate};

/// Shortest address accepted when no length option is given.
pub const DEFAULT_MINIMUM: usize = 3;
/// Longest address accepted when no length option is given (RFC5321).
pub const DEFAULT_MAXIMUM: usize = 320;

/// A bound on the number of characters in an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LengthConstraint {
    /// At least this many characters; no upper bound.
    Minimum(usize),
    /// At most this many characters; no lower bound.
    Maximum(usize),
    /// Exactly this many characters.
    Exact(usize),
    /// Within the inclusive range.
    Range(RangeInclusive<usize>),
}

impl LengthConstraint {
    /// The constraint applied when none is configured.
    pub fn default_policy() -> Self {
        LengthConstraint::Range(DEFAULT_MINIMUM..=DEFAULT_MAXIMUM)
    }

    /// The constraint as a character-length predicate.
    pub fn bounds(&self) -> LenBetween {
        match self {
            LengthConstraint::Minimum(min) => len_min(*min),
            LengthConstraint::Maximum(max) => len_max(*max),
            LengthConstraint::Exact(len) => len_eq(*len),
            LengthConstraint::Range(range) => len_between(*range.start(), *range.end()),
        }
    }

    /// Whether `value` satisfies the constraint.
    pub fn allows(&self, value: &str) -> bool {
        self.bounds().check(value)
    }

    /// Message for a value of `len` characters that violates the constraint.
    ///
    /// A range reports the bound on the side that was crossed.
    pub fn message(&self, len: usize, messages: &Messages) -> String {
        match self {
            LengthConstraint::Minimum(min) => messages.too_short(*min),
            LengthConstraint::Maximum(max) => messages.too_long(*max),
            LengthConstraint::Exact(exact) => messages.wrong_length(*exact),
            LengthConstraint::Range(range) if len < *range.start() => {
                messages.too_short(*range.start())
            }
            LengthConstraint::Range(range) => messages.too_long(*range.end()),
        }
    }
}

/// Immutable configuration of an email address validation.
///
/// `R` is the record type the guard is evaluated against; configurations
/// for bare values use the default `()`.
pub struct ValidationConfig<R: ?Sized = ()> {
    length: Option<LengthConstraint>,
    strict: bool,
    messages: Messages,
    condition: Condition<R>,
}

impl<R: ?Sized> Clone for ValidationConfig<R> {
    fn clone(&self) -> Self {
        Self {
            length: self.length.clone(),
            strict: self.strict,
            messages: self.messages.clone(),
            condition: self.condition.clone(),
        }
    }
}

impl<R: ?Sized> fmt::Debug for ValidationConfig<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationConfig")
            .field("length", &self.length)
            .field("strict", &self.strict)
            .field("messages", &self.messages)
            .field("condition", &self.condition)
            .finish()
    }
}

impl<R: ?Sized> Default for ValidationConfig<R> {
    fn default() -> Self {
        Self {
            length: None,
            strict: true,
            messages: Messages::default(),
            condition: Condition::Always,
        }
    }
}

impl<R: ?Sized> ValidationConfig<R> {
    /// Start building a configuration.
    pub fn builder() -> ValidationConfigBuilder<R> {
        ValidationConfigBuilder::new()
    }

    /// The configured length constraint, if any.
    pub fn length(&self) -> Option<&LengthConstraint> {
        self.length.as_ref()
    }

    /// The length constraint actually enforced.
    pub fn effective_length(&self) -> LengthConstraint {
        self.length
            .clone()
            .unwrap_or_else(LengthConstraint::default_policy)
    }

    /// Whether the domain is held to RFC1035 rules.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// The message templates.
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// The guard evaluated before validating.
    pub fn condition(&self) -> &Condition<R> {
        &self.condition
    }
}

/// Plain option table a configuration is built from.
///
/// Every field is optional; unset fields fall back to the defaults. With the
/// `serde` feature this is also the serialized form of a configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct Options {
    /// Minimum length.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub minimum: Option<usize>,
    /// Maximum length.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub maximum: Option<usize>,
    /// Exact length.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "is", alias = "exact", skip_serializing_if = "Option::is_none")
    )]
    pub exact: Option<usize>,
    /// Inclusive length range as `[min, max]`.
    #[cfg_attr(
        feature = "serde",
        serde(alias = "in", alias = "range", skip_serializing_if = "Option::is_none")
    )]
    pub within: Option<(usize, usize)>,
    /// Format mode; strict when unset.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub strict: Option<bool>,
    /// Too-short message template.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub too_short: Option<String>,
    /// Too-long message template.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub too_long: Option<String>,
    /// Wrong-length message template.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub wrong_length: Option<String>,
    /// Wrong-format message template.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub wrong_format: Option<String>,
}

impl Options {
    /// The single length constraint these options describe.
    ///
    /// Fails when more than one length option is set, or when the range is
    /// empty.
    pub fn length(&self) -> Result<Option<LengthConstraint>, ConfigError> {
        let candidates = [
            ("minimum", self.minimum.map(LengthConstraint::Minimum)),
            ("maximum", self.maximum.map(LengthConstraint::Maximum)),
            ("is", self.exact.map(LengthConstraint::Exact)),
            (
                "within",
                self.within
                    .map(|(min, max)| LengthConstraint::Range(min..=max)),
            ),
        ];

        let mut set = candidates
            .into_iter()
            .filter_map(|(name, constraint)| constraint.map(|c| (name, c)));

        let Some((first, constraint)) = set.next() else {
            return Ok(None);
        };
        if let Some((second, _)) = set.next() {
            return Err(ConfigError::ConflictingLength { first, second });
        }
        if let LengthConstraint::Range(range) = &constraint {
            if range.start() > range.end() {
                return Err(ConfigError::EmptyRange {
                    min: *range.start(),
                    max: *range.end(),
                });
            }
        }
        Ok(Some(constraint))
    }

    fn messages(&self) -> Messages {
        let mut messages = Messages::default();
        if let Some(template) = &self.too_short {
            messages = messages.with_too_short(template.clone());
        }
        if let Some(template) = &self.too_long {
            messages = messages.with_too_long(template.clone());
        }
        if let Some(template) = &self.wrong_length {
            messages = messages.with_wrong_length(template.clone());
        }
        if let Some(template) = &self.wrong_format {
            messages = messages.with_wrong_format(template.clone());
        }
        messages
    }

    /// Build a configuration from these options and a guard.
    pub fn into_config<R: ?Sized>(
        self,
        condition: Condition<R>,
    ) -> Result<ValidationConfig<R>, ConfigError> {
        Ok(ValidationConfig {
            length: self.length()?,
            strict: self.strict.unwrap_or(true),
            messages: self.messages(),
            condition,
        })
    }
}

impl<R: ?Sized> From<&ValidationConfig<R>> for Options {
    fn from(config: &ValidationConfig<R>) -> Self {
        let mut options = Options {
            strict: Some(config.strict),
            too_short: Some(config.messages.too_short_template().to_string()),
            too_long: Some(config.messages.too_long_template().to_string()),
            wrong_length: Some(config.messages.wrong_length_template().to_string()),
            wrong_format: Some(config.messages.wrong_format_template().to_string()),
            ..Options::default()
        };
        match &config.length {
            Some(LengthConstraint::Minimum(min)) => options.minimum = Some(*min),
            Some(LengthConstraint::Maximum(max)) => options.maximum = Some(*max),
            Some(LengthConstraint::Exact(len)) => options.exact = Some(*len),
            Some(LengthConstraint::Range(range)) => {
                options.within = Some((*range.start(), *range.end()))
            }
            None => {}
        }
        options
    }
}

/// Builder for [`ValidationConfig`].
///
/// Length options are collected as given and checked in [`build`], so a
/// builder that sets both `minimum` and `maximum` fails there rather than
/// silently preferring one.
///
/// [`build`]: ValidationConfigBuilder::build
pub struct ValidationConfigBuilder<R: ?Sized = ()> {
    options: Options,
    condition: Condition<R>,
}

impl<R: ?Sized> fmt::Debug for ValidationConfigBuilder<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationConfigBuilder")
            .field("options", &self.options)
            .field("condition", &self.condition)
            .finish()
    }
}

impl<R: ?Sized> Default for ValidationConfigBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ?Sized> ValidationConfigBuilder<R> {
    /// A builder with every option unset.
    pub fn new() -> Self {
        Self {
            options: Options::default(),
            condition: Condition::Always,
        }
    }

    /// Start from an option table.
    pub fn from_options(options: Options) -> Self {
        Self {
            options,
            condition: Condition::Always,
        }
    }

    /// Require at least `min` characters. No maximum is enforced.
    pub fn minimum(mut self, min: usize) -> Self {
        self.options.minimum = Some(min);
        self
    }

    /// Allow at most `max` characters. No minimum is enforced.
    pub fn maximum(mut self, max: usize) -> Self {
        self.options.maximum = Some(max);
        self
    }

    /// Require exactly `len` characters.
    pub fn exact(mut self, len: usize) -> Self {
        self.options.exact = Some(len);
        self
    }

    /// Alias for [`exact`](Self::exact).
    pub fn is(self, len: usize) -> Self {
        self.exact(len)
    }

    /// Require a length within `range`, inclusive.
    pub fn within(mut self, range: RangeInclusive<usize>) -> Self {
        self.options.within = Some((*range.start(), *range.end()));
        self
    }

    /// Alias for [`within`](Self::within).
    pub fn range(self, range: RangeInclusive<usize>) -> Self {
        self.within(range)
    }

    /// Alias for [`within`](Self::within).
    pub fn in_range(self, range: RangeInclusive<usize>) -> Self {
        self.within(range)
    }

    /// Choose strict (RFC822 and RFC1035) or unrestricted (RFC822) format.
    pub fn strict(mut self, strict: bool) -> Self {
        self.options.strict = Some(strict);
        self
    }

    /// Message for a value below the minimum length.
    pub fn too_short(mut self, template: impl Into<String>) -> Self {
        self.options.too_short = Some(template.into());
        self
    }

    /// Message for a value above the maximum length.
    pub fn too_long(mut self, template: impl Into<String>) -> Self {
        self.options.too_long = Some(template.into());
        self
    }

    /// Message for a value not of the exact length.
    pub fn wrong_length(mut self, template: impl Into<String>) -> Self {
        self.options.wrong_length = Some(template.into());
        self
    }

    /// Message for a malformed address.
    pub fn wrong_format(mut self, template: impl Into<String>) -> Self {
        self.options.wrong_format = Some(template.into());
        self
    }

    /// Validate only when `predicate` holds for the record.
    pub fn when<P>(mut self, predicate: P) -> Self
    where
        P: Predicate<R> + 'static,
    {
        self.condition = Condition::when(predicate);
        self
    }

    /// Skip validation when `predicate` holds for the record.
    pub fn unless<P>(mut self, predicate: P) -> Self
    where
        P: Predicate<R> + 'static,
    {
        self.condition = Condition::unless(predicate);
        self
    }

    /// Set the guard directly.
    pub fn condition(mut self, condition: Condition<R>) -> Self {
        self.condition = condition;
        self
    }

    /// Check the options and build the configuration.
    pub fn build(self) -> Result<ValidationConfig<R>, ConfigError> {
        self.options.into_config(self.condition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ValidationConfig::<()>::default();
        assert!(config.is_strict());
        assert!(config.length().is_none());
        assert_eq!(config.effective_length(), LengthConstraint::Range(3..=320));
    }

    #[test]
    fn test_builder_without_options_matches_default() {
        let config = ValidationConfig::<()>::builder().build().unwrap();
        assert_eq!(config.length(), None);
        assert_eq!(config.messages(), &Messages::default());
    }

    #[test]
    fn test_each_length_option() {
        let cases = [
            (
                ValidationConfig::<()>::builder().minimum(8),
                LengthConstraint::Minimum(8),
            ),
            (
                ValidationConfig::<()>::builder().maximum(8),
                LengthConstraint::Maximum(8),
            ),
            (
                ValidationConfig::<()>::builder().is(8),
                LengthConstraint::Exact(8),
            ),
            (
                ValidationConfig::<()>::builder().in_range(8..=10),
                LengthConstraint::Range(8..=10),
            ),
        ];
        for (builder, expected) in cases {
            let config = builder.build().unwrap();
            assert_eq!(config.length(), Some(&expected));
        }
    }

    #[test]
    fn test_minimum_and_maximum_rejected() {
        let err = ValidationConfig::<()>::builder()
            .maximum(10)
            .minimum(3)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::ConflictingLength {
                first: "minimum",
                second: "maximum"
            }
        );
    }

    #[test]
    fn test_exact_and_range_rejected() {
        let err = ValidationConfig::<()>::builder()
            .exact(8)
            .within(8..=10)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::ConflictingLength {
                first: "is",
                second: "within"
            }
        );
    }

    #[test]
    fn test_empty_range_rejected() {
        #[allow(clippy::reversed_empty_ranges)]
        let err = ValidationConfig::<()>::builder()
            .range(10..=8)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::EmptyRange { min: 10, max: 8 });
    }

    #[test]
    fn test_single_point_range_allowed() {
        let config = ValidationConfig::<()>::builder()
            .within(8..=8)
            .build()
            .unwrap();
        assert!(config.effective_length().allows("a@aa.com"));
    }

    #[test]
    fn test_range_message_picks_crossed_bound() {
        let messages = Messages::default();
        let range = LengthConstraint::Range(8..=10);
        assert_eq!(
            range.message(7, &messages),
            "is too short (minimum is 8 characters)"
        );
        assert_eq!(
            range.message(11, &messages),
            "is too long (maximum is 10 characters)"
        );
    }

    #[test]
    fn test_options_round_trip_through_config() {
        let config = ValidationConfig::<()>::builder()
            .is(8)
            .strict(false)
            .wrong_length("custom")
            .build()
            .unwrap();
        let options = Options::from(&config);
        assert_eq!(options.exact, Some(8));
        assert_eq!(options.strict, Some(false));
        assert_eq!(options.wrong_length.as_deref(), Some("custom"));

        let rebuilt = options.into_config::<()>(Condition::Always).unwrap();
        assert_eq!(rebuilt.length(), config.length());
        assert_eq!(rebuilt.messages(), config.messages());
    }

    #[test]
    fn test_guard_is_kept() {
        let config = ValidationConfig::<i32>::builder()
            .when(|n: &i32| *n > 0)
            .build()
            .unwrap();
        assert!(config.condition().allows(&1));
        assert!(!config.condition().allows(&0));
    }
}
