//! Error message templates
//!
//! A template may contain `{count}`, which is replaced with the bound that
//! was violated. Templates without the placeholder are used verbatim.

/// Placeholder replaced with the violated bound.
pub const COUNT_PLACEHOLDER: &str = "{count}";

/// Default message for a value below the minimum length.
pub const DEFAULT_TOO_SHORT: &str = "is too short (minimum is {count} characters)";
/// Default message for a value above the maximum length.
pub const DEFAULT_TOO_LONG: &str = "is too long (maximum is {count} characters)";
/// Default message for a value not of the exact length.
pub const DEFAULT_WRONG_LENGTH: &str = "is the wrong length (should be {count} characters)";
/// Default message for a malformed address.
pub const DEFAULT_WRONG_FORMAT: &str = "is invalid";

/// The four message templates used by a validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    too_short: String,
    too_long: String,
    wrong_length: String,
    wrong_format: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            too_short: DEFAULT_TOO_SHORT.to_string(),
            too_long: DEFAULT_TOO_LONG.to_string(),
            wrong_length: DEFAULT_WRONG_LENGTH.to_string(),
            wrong_format: DEFAULT_WRONG_FORMAT.to_string(),
        }
    }
}

impl Messages {
    /// Replace the too-short template.
    pub fn with_too_short(mut self, template: impl Into<String>) -> Self {
        self.too_short = template.into();
        self
    }

    /// Replace the too-long template.
    pub fn with_too_long(mut self, template: impl Into<String>) -> Self {
        self.too_long = template.into();
        self
    }

    /// Replace the wrong-length template.
    pub fn with_wrong_length(mut self, template: impl Into<String>) -> Self {
        self.wrong_length = template.into();
        self
    }

    /// Replace the wrong-format template.
    pub fn with_wrong_format(mut self, template: impl Into<String>) -> Self {
        self.wrong_format = template.into();
        self
    }

    /// Raw too-short template.
    pub fn too_short_template(&self) -> &str {
        &self.too_short
    }

    /// Raw too-long template.
    pub fn too_long_template(&self) -> &str {
        &self.too_long
    }

    /// Raw wrong-length template.
    pub fn wrong_length_template(&self) -> &str {
        &self.wrong_length
    }

    /// Raw wrong-format template.
    pub fn wrong_format_template(&self) -> &str {
        &self.wrong_format
    }

    /// Too-short message for a minimum of `count`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use stillmail::Messages;
    ///
    /// let messages = Messages::default();
    /// assert_eq!(messages.too_short(3), "is too short (minimum is 3 characters)");
    ///
    /// let messages = messages.with_too_short("custom");
    /// assert_eq!(messages.too_short(3), "custom");
    /// ```
    pub fn too_short(&self, count: usize) -> String {
        render(&self.too_short, count)
    }

    /// Too-long message for a maximum of `count`.
    pub fn too_long(&self, count: usize) -> String {
        render(&self.too_long, count)
    }

    /// Wrong-length message for an exact length of `count`.
    pub fn wrong_length(&self, count: usize) -> String {
        render(&self.wrong_length, count)
    }

    /// Wrong-format message.
    pub fn wrong_format(&self) -> String {
        self.wrong_format.clone()
    }
}

fn render(template: &str, count: usize) -> String {
    if template.contains(COUNT_PLACEHOLDER) {
        template.replace(COUNT_PLACEHOLDER, &count.to_string())
    } else {
        template.to_string()
    }
}
