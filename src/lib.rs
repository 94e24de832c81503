//! # Stillmail
//!
//! Email address validation for record fields: an RFC822 format check with
//! an optional RFC1035 host-name check, and a length check with minimum,
//! maximum, exact and range constraints. Both checks run on every value and
//! their messages accumulate, format first.
//!
//! ## Quick Example
//!
//! ```rust
//! use stillmail::{validate, ValidationConfig};
//!
//! let config = ValidationConfig::default();
//!
//! assert!(validate("test@example.co.uk", &config).is_empty());
//! assert!(validate(r#""J. Smith's House, a.k.a. Home!"@example.com"#, &config).is_empty());
//!
//! // Malformed and shorter than 3 characters
//! assert_eq!(validate("a@", &config).len(), 2);
//!
//! // Bracketed literals are only accepted in unrestricted mode
//! assert_eq!(validate("test@[127.0.0.1]", &config), vec!["is invalid".to_string()]);
//! let loose = ValidationConfig::builder().strict(false).build().unwrap();
//! assert!(validate("test@[127.0.0.1]", &loose).is_empty());
//! ```
//!
//! ## Records
//!
//! ```rust
//! use stillmail::{Registry, ValidationConfig};
//!
//! struct User {
//!     email: String,
//!     subscribed: bool,
//! }
//!
//! let mut users = Registry::new();
//! users.validates_as_email_address(
//!     "email",
//!     |user: &User| user.email.as_str(),
//!     ValidationConfig::builder()
//!         .maximum(64)
//!         .when(|user: &User| user.subscribed)
//!         .build()
//!         .unwrap(),
//! );
//!
//! let user = User { email: "a".to_string(), subscribed: true };
//! assert_eq!(users.errors(&user).on("email"), ["is invalid"]);
//!
//! let user = User { email: "a".to_string(), subscribed: false };
//! assert!(users.is_valid(&user));
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod condition;
pub mod config;
pub mod format;
pub mod messages;
pub mod predicate;
pub mod registry;
pub mod rfc1035;
pub mod rfc822;
pub mod semigroup;
pub mod testing;
pub mod validation;
pub mod validator;

// Re-exports
pub use condition::Condition;
pub use config::{
    ConfigError, LengthConstraint, Options, ValidationConfig, ValidationConfigBuilder,
    DEFAULT_MAXIMUM, DEFAULT_MINIMUM,
};
pub use messages::Messages;
pub use registry::{Errors, Registry};
pub use semigroup::Semigroup;
pub use validation::Validation;
pub use validator::{check_record, validate, validate_record, EmailValidator};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::condition::Condition;
    pub use crate::config::{ConfigError, LengthConstraint, ValidationConfig};
    pub use crate::predicate::{Predicate, PredicateExt};
    pub use crate::registry::{Errors, Registry};
    pub use crate::semigroup::Semigroup;
    pub use crate::validation::Validation;
    pub use crate::validator::{validate, validate_record, EmailValidator};
}
