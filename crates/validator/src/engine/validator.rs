//! The fluent validator: a pipeline, an optional bound value and a cached outcome.

use std::str::FromStr;
use std::sync::OnceLock;

use crate::engine::coerce;
use crate::engine::evaluate::{Binding, Outcome, evaluate};
use crate::engine::Pipeline;
use crate::foundation::{Error, RuleStep};

/// A reusable rule pipeline, optionally bound to a value.
///
/// Chain methods consume the validator and return it with one more step
/// appended. To reuse a pipeline as a template, clone it before extending or
/// binding: [`Clone`] copies the steps and drops any bound value and cached
/// outcome, so every clone evaluates independently.
///
/// Evaluation is lazy. The first terminal accessor ([`result`](Self::result),
/// [`error`](Self::error), [`int`](Self::int), ...) walks the pipeline once and
/// caches the outcome; later accessors read the cache, so `customize` closures
/// with side effects run at most once per binding.
///
/// # Examples
///
/// ```rust
/// use ruleline_validator::Validator;
///
/// let username = Validator::new().required().is_alphanumeric().max_length(12);
///
/// let ok = username.clone().verifi("alice42", "username");
/// assert_eq!(ok.result().as_deref(), Ok("alice42"));
///
/// let bad = username.clone().verifi("", "username");
/// assert!(bad.error().is_some());
/// ```
#[derive(Debug, Default)]
pub struct Validator {
    pipeline: Pipeline,
    binding: Option<Binding>,
    outcome: OnceLock<Outcome>,
    required: bool,
}

impl Clone for Validator {
    /// Copies the pipeline into an unbound validator.
    ///
    /// The bound value and any cached outcome are not carried over.
    fn clone(&self) -> Self {
        Self {
            pipeline: self.pipeline.clone(),
            binding: None,
            outcome: OnceLock::new(),
            required: self.required,
        }
    }
}

impl Validator {
    /// Creates an empty, unbound validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator already bound to `value` with an empty label.
    #[must_use]
    pub fn from_text(value: impl Into<String>) -> Self {
        Self::new().verifi(value, "")
    }

    /// Creates a validator already bound to the decimal form of `value`.
    #[must_use]
    pub fn from_int(value: i64) -> Self {
        Self::from_text(value.to_string())
    }

    /// Creates a validator already bound to the textual form of `value`.
    #[must_use]
    pub fn from_float(value: f64) -> Self {
        Self::from_text(value.to_string())
    }

    // ------------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------------

    /// Appends an ordinary step.
    ///
    /// Steps built with [`RuleStep::check`] or [`RuleStep::transform`] stop
    /// doing work once an earlier step has failed.
    pub fn rule(mut self, step: RuleStep) -> Self {
        self.pipeline.push(step);
        self.outcome = OnceLock::new();
        self
    }

    /// Appends several steps in order.
    pub fn rules(mut self, steps: impl IntoIterator<Item = RuleStep>) -> Self {
        self.pipeline.extend(steps);
        self.outcome = OnceLock::new();
        self
    }

    /// Appends a caller-supplied step that always runs.
    ///
    /// The closure sees the current value and error, even when an earlier
    /// step failed, and whatever error it returns (including `None`) becomes
    /// the pipeline's error.
    ///
    /// ```rust
    /// use ruleline_validator::Validator;
    ///
    /// let port = Validator::new()
    ///     .required()
    ///     .customize(|value, error| match error {
    ///         Some(_) => ("8080".to_owned(), None),
    ///         None => (value, None),
    ///     })
    ///     .verifi("", "port");
    /// assert_eq!(port.int(), Ok(8080));
    /// ```
    pub fn customize<F>(self, func: F) -> Self
    where
        F: Fn(String, Option<Error>) -> (String, Option<Error>) + Send + Sync + 'static,
    {
        self.rule(RuleStep::custom("customize", func))
    }

    /// Marks the value as mandatory and appends the presence check.
    ///
    /// When the bound value is empty, ordinary steps chained before this one
    /// are skipped, so character-class and numeric rules never see it; the
    /// presence check then fails here. `customize` steps still run in order
    /// and may supply a replacement.
    pub fn required(mut self) -> Self {
        self.required = true;
        self.rule(crate::rules::required())
    }

    /// Binds a value and the label used in error messages.
    ///
    /// Steps may still be appended afterwards; any cached outcome is dropped.
    pub fn verifi(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.binding = Some(Binding {
            value: value.into(),
            label: label.into(),
        });
        self.outcome = OnceLock::new();
        self
    }

    // ------------------------------------------------------------------------
    // Introspection
    // ------------------------------------------------------------------------

    /// The accumulated steps.
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Returns true once `verifi` (or a pre-bound constructor) attached a value.
    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    /// Returns true if `required` was chained.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The bound label, if any.
    pub fn label(&self) -> Option<&str> {
        self.binding.as_ref().map(|b| b.label.as_str())
    }

    // ------------------------------------------------------------------------
    // Terminal accessors
    // ------------------------------------------------------------------------

    fn outcome(&self) -> Option<&Outcome> {
        let binding = self.binding.as_ref()?;
        Some(
            self.outcome
                .get_or_init(|| evaluate(&self.pipeline, binding, self.required)),
        )
    }

    /// Evaluates the pipeline and returns the final value or the first error.
    pub fn result(&self) -> Result<String, Error> {
        match self.outcome() {
            Some(outcome) => outcome.to_result(),
            None => Err(Error::Unbound),
        }
    }

    /// Alias of [`result`](Self::result).
    pub fn string(&self) -> Result<String, Error> {
        self.result()
    }

    /// The evaluation error, if any.
    pub fn error(&self) -> Option<Error> {
        match self.outcome() {
            Some(outcome) => outcome.error.clone(),
            None => Some(Error::Unbound),
        }
    }

    /// The evaluated value, even when evaluation failed.
    ///
    /// Unbound validators yield an empty string.
    pub fn value(&self) -> String {
        self.outcome()
            .map(|outcome| outcome.value.clone())
            .unwrap_or_default()
    }

    /// Evaluates and parses the result as an integer.
    pub fn int(&self) -> Result<i64, Error> {
        let value = self.result()?;
        Ok(coerce::to_int(&value)?)
    }

    /// Evaluates and parses the result as a float.
    pub fn float64(&self) -> Result<f64, Error> {
        let value = self.result()?;
        Ok(coerce::to_float(&value)?)
    }

    /// Evaluates and parses the result as a boolean.
    ///
    /// `1`, `t`, `T`, `true`, `TRUE`, `True` are true;
    /// `0`, `f`, `F`, `false`, `FALSE`, `False` are false.
    pub fn bool(&self) -> Result<bool, Error> {
        let value = self.result()?;
        Ok(coerce::to_bool(&value)?)
    }

    /// Evaluates and parses the result into any `FromStr` type.
    pub fn parse<T>(&self) -> Result<T, Error>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let value = self.result()?;
        Ok(coerce::to_any(&value)?)
    }

    /// Evaluates, parses and writes into `target`.
    ///
    /// `target` is left untouched on any error.
    pub fn assign_to<T>(&self, target: &mut T) -> Result<(), Error>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        *target = self.parse()?;
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
