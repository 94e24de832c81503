//! Per-record-type registry of email address validations
//!
//! A [`Registry`] maps field names of a record type to the validator that
//! checks them. It is an ordinary value: build one per record type (and one
//! per test) instead of sharing global state.
//!
//! # Example
//!
//! ```rust
//! use stillmail::{Registry, ValidationConfig};
//!
//! struct User {
//!     email: String,
//!     backup_email: String,
//! }
//!
//! let mut users = Registry::new();
//! users
//!     .validates_as_email_address("email", |u: &User| u.email.as_str(), ValidationConfig::default())
//!     .validates_as_email_address(
//!         "backup_email",
//!         |u: &User| u.backup_email.as_str(),
//!         ValidationConfig::builder().strict(false).build().unwrap(),
//!     );
//!
//! let user = User {
//!     email: "test@example.com".to_string(),
//!     backup_email: "a@".to_string(),
//! };
//!
//! let errors = users.errors(&user);
//! assert!(errors.on("email").is_empty());
//! assert_eq!(errors.on("backup_email").len(), 2);
//! ```

use std::fmt;

use crate::config::ValidationConfig;
use crate::validator::EmailValidator;
use crate::{Semigroup, Validation};

/// Error messages grouped by field name.
///
/// Fields keep the order in which their first message was recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Errors {
    entries: Vec<(String, Vec<String>)>,
}

impl Errors {
    /// No errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Errors for a single field.
    pub fn for_field(field: impl Into<String>, messages: Vec<String>) -> Self {
        let mut errors = Self::new();
        errors.add_all(field, messages);
        errors
    }

    /// Record one message for `field`.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.add_all(field, vec![message.into()]);
    }

    /// Record messages for `field`, after any it already has.
    pub fn add_all(&mut self, field: impl Into<String>, messages: Vec<String>) {
        if messages.is_empty() {
            return;
        }
        let field = field.into();
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some((_, existing)) => existing.extend(messages),
            None => self.entries.push((field, messages)),
        }
    }

    /// Messages for `field`; empty when it has none.
    pub fn on(&self, field: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, messages)| messages.as_slice())
            .unwrap_or(&[])
    }

    /// Whether no field has any message.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of messages across all fields.
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, messages)| messages.len()).sum()
    }

    /// Names of the fields that have messages.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Iterate `(field, messages)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, messages)| (name.as_str(), messages.as_slice()))
    }

    /// Every message prefixed with its field name, e.g. `email is invalid`.
    pub fn full_messages(&self) -> Vec<String> {
        self.iter()
            .flat_map(|(field, messages)| {
                messages
                    .iter()
                    .map(move |message| format!("{} {}", field, message))
            })
            .collect()
    }
}

impl Semigroup for Errors {
    fn combine(mut self, other: Self) -> Self {
        for (field, messages) in other.entries {
            self.add_all(field, messages);
        }
        self
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_messages().join(", "))
    }
}

type Accessor<R> = Box<dyn for<'r> Fn(&'r R) -> &'r str + Send + Sync>;

struct Rule<R: ?Sized> {
    field: String,
    accessor: Accessor<R>,
    validator: EmailValidator<R>,
}

impl<R: ?Sized> Rule<R> {
    fn check(&self, record: &R) -> Validation<(), Errors> {
        let value = (self.accessor)(record);
        self.validator
            .check_record(record, value)
            .map(|_| ())
            .map_err(|messages| Errors::for_field(self.field.as_str(), messages))
    }
}

/// Email address validations registered for a record type.
pub struct Registry<R: ?Sized> {
    rules: Vec<Rule<R>>,
}

impl<R: ?Sized> Default for Registry<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ?Sized> fmt::Debug for Registry<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field(
                "fields",
                &self.rules.iter().map(|r| r.field.as_str()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<R: ?Sized> Registry<R> {
    /// An empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Validate `field`, read from the record by `accessor`, with `config`.
    ///
    /// Rules run in the order they were registered. Registering the same
    /// field twice runs both rules and appends their messages.
    pub fn validates_as_email_address<F>(
        &mut self,
        field: impl Into<String>,
        accessor: F,
        config: ValidationConfig<R>,
    ) -> &mut Self
    where
        F: for<'r> Fn(&'r R) -> &'r str + Send + Sync + 'static,
    {
        let field = field.into();

        #[cfg(feature = "tracing")]
        tracing::debug!(field = %field, config = ?config, "registered email validation");

        self.rules.push(Rule {
            field,
            accessor: Box::new(accessor),
            validator: EmailValidator::new(config),
        });
        self
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rule is registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Validate every registered field of `record`.
    pub fn validate(&self, record: &R) -> Validation<(), Errors> {
        let checks = self.rules.iter().map(|rule| rule.check(record)).collect();
        let result = Validation::all_vec(checks).map(|_| ());

        #[cfg(feature = "tracing")]
        if let Validation::Failure(errors) = &result {
            tracing::debug!(
                fields = errors.fields().count(),
                errors = errors.len(),
                "record failed email validation"
            );
        }

        result
    }

    /// Errors for every registered field of `record`; empty when valid.
    pub fn errors(&self, record: &R) -> Errors {
        self.validate(record).into_result().err().unwrap_or_default()
    }

    /// Whether every registered field of `record` passes.
    pub fn is_valid(&self, record: &R) -> bool {
        self.validate(record).is_success()
    }
}
