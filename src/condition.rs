//! Guards deciding whether a validation runs for a record

use std::fmt;
use std::sync::Arc;

use crate::predicate::Predicate;

/// Guard evaluated against the record before any check.
///
/// # Example
///
/// ```rust
/// use stillmail::Condition;
///
/// struct User {
///     confirmed: bool,
/// }
///
/// let only_confirmed = Condition::when(|user: &User| user.confirmed);
/// assert!(only_confirmed.allows(&User { confirmed: true }));
/// assert!(!only_confirmed.allows(&User { confirmed: false }));
///
/// let unless_confirmed = Condition::unless(|user: &User| user.confirmed);
/// assert!(!unless_confirmed.allows(&User { confirmed: true }));
/// ```
pub enum Condition<R: ?Sized> {
    /// Always validate.
    Always,
    /// Validate only when the predicate holds.
    If(Arc<dyn Predicate<R>>),
    /// Validate only when the predicate does not hold.
    Unless(Arc<dyn Predicate<R>>),
}

impl<R: ?Sized> Condition<R> {
    /// Validate only when `predicate` holds for the record.
    pub fn when<P>(predicate: P) -> Self
    where
        P: Predicate<R> + 'static,
    {
        Condition::If(Arc::new(predicate))
    }

    /// Skip validation when `predicate` holds for the record.
    pub fn unless<P>(predicate: P) -> Self
    where
        P: Predicate<R> + 'static,
    {
        Condition::Unless(Arc::new(predicate))
    }

    /// Whether validation runs for `record`.
    pub fn allows(&self, record: &R) -> bool {
        match self {
            Condition::Always => true,
            Condition::If(predicate) => predicate.check(record),
            Condition::Unless(predicate) => !predicate.check(record),
        }
    }
}

impl<R: ?Sized> Default for Condition<R> {
    fn default() -> Self {
        Condition::Always
    }
}

impl<R: ?Sized> Clone for Condition<R> {
    fn clone(&self) -> Self {
        match self {
            Condition::Always => Condition::Always,
            Condition::If(predicate) => Condition::If(Arc::clone(predicate)),
            Condition::Unless(predicate) => Condition::Unless(Arc::clone(predicate)),
        }
    }
}

impl<R: ?Sized> fmt::Debug for Condition<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Always => f.write_str("Always"),
            Condition::If(_) => f.write_str("If(<predicate>)"),
            Condition::Unless(_) => f.write_str("Unless(<predicate>)"),
        }
    }
}
