//! Error types for validation failures
//!
//! Four kinds of failure travel through a pipeline's single error channel:
//!
//! - [`Error::Unbound`]: a terminal accessor was called before any value was bound
//! - [`Error::Rule`]: a built-in or caller-supplied ordinary rule rejected the value
//! - [`Error::Custom`]: a `customize` step produced (or replaced) the error
//! - [`Error::Coercion`]: the final string could not be parsed into the requested type
//!
//! Rule and custom errors share the structured [`ValidationError`] payload.
//! All string fields use `Cow<'static, str>` so static codes and messages
//! never allocate.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// ERROR
// ============================================================================

/// The error channel shared by every step of a pipeline and by the typed accessors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// No value was ever bound via `verifi`.
    #[error("no validation value set")]
    Unbound,

    /// An ordinary rule step rejected the value.
    #[error(transparent)]
    Rule(ValidationError),

    /// A `customize` step produced this error.
    #[error(transparent)]
    Custom(ValidationError),

    /// The evaluated string could not be parsed into the requested scalar.
    #[error(transparent)]
    Coercion(#[from] CoercionError),
}

impl Error {
    /// Creates an opaque custom error, for use inside `customize` closures.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Custom(ValidationError::custom(message))
    }

    /// Returns true for the "no value set" sentinel.
    #[must_use]
    pub fn is_unbound(&self) -> bool {
        matches!(self, Self::Unbound)
    }

    /// Returns true if an ordinary rule produced this error.
    #[must_use]
    pub fn is_rule(&self) -> bool {
        matches!(self, Self::Rule(_))
    }

    /// Returns true if a `customize` step produced this error.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    /// Returns true if parsing the final value failed.
    #[must_use]
    pub fn is_coercion(&self) -> bool {
        matches!(self, Self::Coercion(_))
    }

    /// Machine-readable code for the error.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Unbound => "unbound",
            Self::Rule(e) | Self::Custom(e) => &e.code,
            Self::Coercion(_) => "coercion",
        }
    }

    /// The structured payload of a rule or custom error.
    #[must_use]
    pub fn as_validation_error(&self) -> Option<&ValidationError> {
        match self {
            Self::Rule(e) | Self::Custom(e) => Some(e),
            _ => None,
        }
    }

    /// Tags a rule error with the bound label unless it already names a field.
    pub(crate) fn label_rule(&mut self, label: &str) {
        if let Self::Rule(e) = self
            && e.field.is_none()
            && !label.is_empty()
        {
            e.field = Some(Cow::Owned(label.to_owned()));
        }
    }
}

impl From<ValidationError> for Error {
    fn from(error: ValidationError) -> Self {
        Self::Rule(error)
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation error.
///
/// # Examples
///
/// ```rust
/// use ruleline_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("max_length", "Must be at most 8 characters")
///     .with_field("username")
///     .with_param("max", "8");
/// assert_eq!(error.param("max"), Some("8"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling and i18n.
    ///
    /// Examples: "required", "has_upper", "max_int"
    pub code: Cow<'static, str>,

    /// Human-readable error message in English.
    pub message: Cow<'static, str>,

    /// The label the value was bound with, if any.
    pub field: Option<Cow<'static, str>>,

    /// Parameters for the error message template.
    ///
    /// Example: `[("max", "60"), ("actual", "64")]`
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,

    /// Optional help text or suggestion for fixing the error.
    pub help: Option<Cow<'static, str>>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
            help: None,
        }
    }

    /// Sets the field label for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Adds help text or a suggestion.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_help(mut self, help: impl Into<Cow<'static, str>>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Converts the error to a JSON structure for API responses.
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "code": self.code,
            "message": self.message,
            "field": self.field,
            "params": params,
            "help": self.help,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        if let Some(help) = &self.help {
            write!(f, "\n  Help: {help}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "required" error.
    pub fn required() -> Self {
        Self::new("required", "This field is required")
    }

    /// Creates a "min_length" error.
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new("min_length", format!("Must be at least {min} characters"))
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates a "max_length" error.
    pub fn max_length(max: usize, actual: usize) -> Self {
        Self::new("max_length", format!("Must be at most {max} characters"))
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string())
    }

    /// Creates an "invalid_format" error.
    pub fn invalid_format(expected: impl Into<Cow<'static, str>>) -> Self {
        Self::new("invalid_format", "Invalid format").with_param("expected", expected)
    }

    /// Creates a "custom" error with a message.
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new("custom", message)
    }
}

// ============================================================================
// COERCION ERROR
// ============================================================================

/// The scalar type a typed accessor tried to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Signed 64-bit integer.
    Int,
    /// 64-bit float.
    Float,
    /// Boolean.
    Bool,
    /// Any other `FromStr` target.
    Other(&'static str),
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => f.write_str("integer"),
            Self::Float => f.write_str("float"),
            Self::Bool => f.write_str("boolean"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

/// The evaluated value could not be parsed into the requested scalar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("cannot parse {value:?} as {target}: {reason}")]
pub struct CoercionError {
    /// The evaluated string that failed to parse.
    pub value: String,
    /// The requested type.
    pub target: ScalarKind,
    /// The parser's own description of the failure.
    pub reason: String,
}

impl CoercionError {
    /// Creates a coercion error.
    pub fn new(value: impl Into<String>, target: ScalarKind, reason: impl fmt::Display) -> Self {
        Self {
            value: value.into(),
            target,
            reason: reason.to_string(),
        }
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// A collection of errors gathered from several validators.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    errors: Vec<Error>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: Error) {
        self.errors.push(error);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<Error> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = Error>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================
