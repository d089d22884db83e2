//! Chain methods for the built-in rule library.
//!
//! Each method appends exactly one step (composites append a fixed sequence)
//! and returns the extended validator.

use crate::engine::Validator;
use crate::rules::{self, PasswordPolicy};

impl Validator {
    // ------------------------------------------------------------------------
    // Character classes
    // ------------------------------------------------------------------------

    /// The value must be a decimal number, e.g. `42`, `-3`, `2.50`.
    pub fn is_number(self) -> Self {
        self.rule(rules::is_number())
    }

    /// The value must consist of letters and digits only.
    pub fn is_alphanumeric(self) -> Self {
        self.rule(rules::is_alphanumeric())
    }

    /// The value must contain at least one letter.
    pub fn has_letter(self) -> Self {
        self.rule(rules::has_letter())
    }

    /// The value must contain at least one lowercase letter.
    pub fn has_lower(self) -> Self {
        self.rule(rules::has_lower())
    }

    /// The value must contain at least one uppercase letter.
    pub fn has_upper(self) -> Self {
        self.rule(rules::has_upper())
    }

    /// The value must contain at least one digit.
    pub fn has_number(self) -> Self {
        self.rule(rules::has_number())
    }

    /// The value must contain at least one symbol or punctuation character.
    pub fn has_symbol(self) -> Self {
        self.rule(rules::has_symbol())
    }

    // ------------------------------------------------------------------------
    // Content
    // ------------------------------------------------------------------------

    /// The value must contain `substring`.
    pub fn has_string(self, substring: impl Into<String>) -> Self {
        self.rule(rules::has_string(substring))
    }

    /// The value must start with `prefix`.
    pub fn has_prefix(self, prefix: impl Into<String>) -> Self {
        self.rule(rules::has_prefix(prefix))
    }

    /// The value must end with `suffix`.
    pub fn has_suffix(self, suffix: impl Into<String>) -> Self {
        self.rule(rules::has_suffix(suffix))
    }

    /// The value must be one of `allowed`.
    pub fn enum_string<S: AsRef<str>>(self, allowed: &[S]) -> Self {
        self.rule(rules::enum_string(allowed))
    }

    /// The value must look like an email address.
    pub fn is_mail(self) -> Self {
        self.rule(rules::is_mail())
    }

    /// The value must be an http(s) URL.
    pub fn is_url(self) -> Self {
        self.rule(rules::is_url())
    }

    /// The value must match `pattern`.
    ///
    /// Fails if `pattern` is not a valid regular expression.
    pub fn regex(self, pattern: &str) -> Result<Self, regex::Error> {
        Ok(self.rule(rules::regex(pattern)?))
    }

    // ------------------------------------------------------------------------
    // Length
    // ------------------------------------------------------------------------

    /// At least `min` characters.
    pub fn min_length(self, min: usize) -> Self {
        self.rule(rules::min_length(min))
    }

    /// At most `max` characters.
    pub fn max_length(self, max: usize) -> Self {
        self.rule(rules::max_length(max))
    }

    /// Between `min` and `max` characters, inclusive.
    pub fn length_range(self, min: usize, max: usize) -> Self {
        self.rule(rules::length_range(min, max))
    }

    // ------------------------------------------------------------------------
    // Numeric ranges
    // ------------------------------------------------------------------------

    /// The value must parse as an integer no smaller than `min`.
    pub fn min_int(self, min: i64) -> Self {
        self.rule(rules::min_int(min))
    }

    /// The value must parse as an integer no larger than `max`.
    pub fn max_int(self, max: i64) -> Self {
        self.rule(rules::max_int(max))
    }

    /// The value must parse as a number no smaller than `min`.
    pub fn min_float(self, min: f64) -> Self {
        self.rule(rules::min_float(min))
    }

    /// The value must parse as a number no larger than `max`.
    pub fn max_float(self, max: f64) -> Self {
        self.rule(rules::max_float(max))
    }

    // ------------------------------------------------------------------------
    // Transforms
    // ------------------------------------------------------------------------

    /// Strips leading and trailing whitespace.
    pub fn trim(self) -> Self {
        self.rule(rules::trim())
    }

    /// Lowercases the value.
    pub fn lowercase(self) -> Self {
        self.rule(rules::lowercase())
    }

    /// Uppercases the value.
    pub fn uppercase(self) -> Self {
        self.rule(rules::uppercase())
    }

    /// Substitutes `fallback` when the value is empty or an earlier step failed.
    pub fn default_value(self, fallback: impl Into<String>) -> Self {
        self.rule(rules::default_value(fallback))
    }

    // ------------------------------------------------------------------------
    // Passwords
    // ------------------------------------------------------------------------

    /// Appends the checks of [`PasswordPolicy::default`].
    pub fn password(self) -> Self {
        self.password_with(&PasswordPolicy::default())
    }

    /// Appends the checks of [`PasswordPolicy::strong`].
    pub fn strong_password(self) -> Self {
        self.password_with(&PasswordPolicy::strong())
    }

    /// Appends the checks of `policy`, in its fixed order.
    pub fn password_with(self, policy: &PasswordPolicy) -> Self {
        self.rules(policy.steps())
    }
}
