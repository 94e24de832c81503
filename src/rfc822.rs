//! RFC822 address grammar
//!
//! Matches `local-part@domain` where the local part is a dot-atom, a quoted
//! string, or a dot-separated sequence of words, and the domain is a
//! dot-atom or a bracketed domain literal. The whole input must match.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::predicate::{matches, Predicate};

const ATEXT: &str = r"[a-zA-Z0-9!#$%&'*+/=?^_`{|}~\-]";
const QTEXT: &str = r"[^\x0D\x22\x5C\x{80}-\x{FF}]";
const TEXT: &str = r"[\x01-\x09\x0B\x0C\x0E-\x7F]";
const DTEXT: &str = r"[\x01-\x08\x0B\x0C\x0E-\x1F\x7F\x21-\x5A\x5E-\x7E]";

static ADDRESS: Lazy<Regex> = Lazy::new(|| {
    let quoted_pair = format!(r"(?:\x5C{TEXT})");
    let atom = format!("{ATEXT}+");
    let dot_atom = format!(r"{ATEXT}+(?:\.{ATEXT}*)*");
    let quoted_string = format!(r#""(?:{QTEXT}|{quoted_pair})+""#);
    let word = format!("(?:{atom}|{quoted_string})");
    let obs_local_part = format!(r"{word}(?:\.{word})*");
    let local_part = format!("(?:{dot_atom}|{quoted_string}|{obs_local_part})");
    let domain_literal = format!(r"\[(?:{DTEXT}|{quoted_pair})+\]");
    let domain = format!("(?:{dot_atom}|{domain_literal})");

    Regex::new(&format!(
        r"\A(?P<local>{local_part})@(?P<domain>{domain})\z"
    ))
    .expect("RFC822 address pattern is valid")
});

/// A parsed RFC822 address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parts<'a> {
    /// Everything before the separating `@`, quotes included.
    pub local: &'a str,
    /// Everything after the separating `@`, brackets included.
    pub domain: &'a str,
}

/// Split `value` into local part and domain if it is an RFC822 address.
///
/// # Example
///
/// ```rust
/// use stillmail::rfc822;
///
/// let parts = rfc822::parse(r#""a@b"@example.com"#).unwrap();
/// assert_eq!(parts.local, r#""a@b""#);
/// assert_eq!(parts.domain, "example.com");
///
/// assert!(rfc822::parse("test@Monday 1:00").is_none());
/// ```
pub fn parse(value: &str) -> Option<Parts<'_>> {
    let captures = ADDRESS.captures(value)?;
    Some(Parts {
        local: captures.name("local")?.as_str(),
        domain: captures.name("domain")?.as_str(),
    })
}

/// Predicate that checks a string is an RFC822 address.
#[derive(Clone, Copy, Default, Debug)]
pub struct Address;

impl Predicate<str> for Address {
    #[inline]
    fn check(&self, value: &str) -> bool {
        matches(&ADDRESS).check(value)
    }
}

/// Create a predicate that checks a string is an RFC822 address.
pub fn address() -> Address {
    Address
}
