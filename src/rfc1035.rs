//! RFC1035 host-name grammar
//!
//! A domain is one or more dot-separated labels. Each label is at least two
//! characters of letters, digits and hyphens, and starts and ends with a
//! letter or digit. Bracketed literals and underscores never match.
//!
//! Single-character labels are rejected, so real hosts such as `x.com` or
//! `t.co` fail strict validation. Build the configuration with
//! `strict(false)` to accept addresses on such hosts.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::predicate::{matches, Predicate};

static DOMAIN: Lazy<Regex> = Lazy::new(|| {
    let let_dig = "[a-zA-Z0-9]";
    let ldh_str = r"[a-zA-Z0-9\-]*";
    let label = format!("{let_dig}{ldh_str}{let_dig}");

    Regex::new(&format!(r"\A(?:{label}\.)*{label}\z")).expect("RFC1035 domain pattern is valid")
});

/// Predicate that checks a string is an RFC1035 domain.
#[derive(Clone, Copy, Default, Debug)]
pub struct Domain;

impl Predicate<str> for Domain {
    #[inline]
    fn check(&self, value: &str) -> bool {
        matches(&DOMAIN).check(value)
    }
}

/// Create a predicate that checks a string is an RFC1035 domain.
///
/// # Example
///
/// ```rust
/// use stillmail::predicate::*;
///
/// assert!(rfc1035::domain().check("example.co.uk"));
/// assert!(!rfc1035::domain().check("-example.com"));
/// ```
pub fn domain() -> Domain {
    Domain
}
