//! Error types for building a validation configuration.

use std::fmt;

/// Error returned when a configuration cannot be built.
///
/// # Examples
///
/// ```rust
/// use stillmail::{ConfigError, ValidationConfig};
///
/// let err = ValidationConfig::<()>::builder()
///     .minimum(3)
///     .maximum(10)
///     .build()
///     .unwrap_err();
///
/// assert_eq!(
///     err,
///     ConfigError::ConflictingLength { first: "minimum", second: "maximum" }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// More than one length option was given.
    ConflictingLength {
        /// The first option set, in `minimum`, `maximum`, `is`, `within` order.
        first: &'static str,
        /// The next option set after `first`.
        second: &'static str,
    },
    /// A range whose lower bound exceeds its upper bound.
    EmptyRange {
        /// Lower bound given.
        min: usize,
        /// Upper bound given.
        max: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConflictingLength { first, second } => write!(
                f,
                "conflicting length options: `{}` and `{}` cannot be combined",
                first, second
            ),
            Self::EmptyRange { min, max } => {
                write!(f, "empty length range: {} is greater than {}", min, max)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflicting_length_display() {
        let err = ConfigError::ConflictingLength {
            first: "minimum",
            second: "is",
        };
        let display = err.to_string();
        assert!(display.contains("`minimum`"));
        assert!(display.contains("`is`"));
    }

    #[test]
    fn test_empty_range_display() {
        let err = ConfigError::EmptyRange { min: 10, max: 8 };
        assert_eq!(err.to_string(), "empty length range: 10 is greater than 8");
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ConfigError::EmptyRange { min: 2, max: 1 });
        assert!(err.source().is_none());
    }
}
