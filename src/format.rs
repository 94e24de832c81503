//! Email address format check
//!
//! Strict mode requires an RFC822 address whose domain is also an RFC1035
//! host name. Unrestricted mode requires the RFC822 address only, which lets
//! bracketed literals and loose labels through.

use crate::predicate::Predicate;
use crate::{rfc1035, rfc822};

/// Predicate that checks the format of an email address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmailFormat {
    strict: bool,
}

impl EmailFormat {
    /// Whether the domain is held to RFC1035 rules.
    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

impl Default for EmailFormat {
    fn default() -> Self {
        email_format(true)
    }
}

impl Predicate<str> for EmailFormat {
    fn check(&self, value: &str) -> bool {
        match rfc822::parse(value) {
            Some(parts) if self.strict => rfc1035::domain().check(parts.domain),
            Some(_) => true,
            None => false,
        }
    }
}

/// Create a predicate that checks the format of an email address.
///
/// # Example
///
/// ```rust
/// use stillmail::predicate::*;
///
/// assert!(email_format(true).check(r#""J. Smith"@example.com"#));
/// assert!(!email_format(true).check("test@domain_not_ending_with_alphanum-.com"));
/// assert!(email_format(false).check("test@domain_not_ending_with_alphanum-.com"));
/// assert!(!email_format(false).check("test@Monday 1:00"));
/// ```
pub fn email_format(strict: bool) -> EmailFormat {
    EmailFormat { strict }
}
