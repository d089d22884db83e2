//! The single unit of work in a pipeline.
//!
//! Every step, built-in or caller-supplied, has the same shape:
//! `(value, error) -> (value, error)`. Whether a step honours short-circuiting
//! is decided by the constructor that built it, not by the evaluator:
//!
//! - [`RuleStep::check`] and [`RuleStep::transform`] wrap their body so that an
//!   incoming error is passed through untouched and the body never runs.
//! - [`RuleStep::custom`] hands the incoming pair to the caller's closure as-is,
//!   so it can observe a failure and cure it.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::foundation::{Error, ValidationError};

/// The function shape shared by every step.
pub type StepFn = dyn Fn(String, Option<Error>) -> (String, Option<Error>) + Send + Sync;

/// How a step was constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// Ordinary rule: stops doing work once an error is present.
    Rule,
    /// `customize` step: always runs and may replace the error.
    Custom,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rule => f.write_str("rule"),
            Self::Custom => f.write_str("custom"),
        }
    }
}

/// One step of a pipeline.
///
/// Cloning a step is cheap: the function body is immutable and shared.
#[derive(Clone)]
pub struct RuleStep {
    name: Cow<'static, str>,
    kind: StepKind,
    func: Arc<StepFn>,
}

impl RuleStep {
    /// Builds an ordinary step from a predicate over the current value.
    ///
    /// The value is left unchanged. The predicate is skipped entirely when an
    /// earlier step already failed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ruleline_validator::foundation::{RuleStep, ValidationError};
    ///
    /// let no_spaces = RuleStep::check("no_spaces", |input| {
    ///     if input.contains(' ') {
    ///         Err(ValidationError::new("no_spaces", "Must not contain spaces"))
    ///     } else {
    ///         Ok(())
    ///     }
    /// });
    /// assert_eq!(no_spaces.name(), "no_spaces");
    /// ```
    pub fn check<F>(name: impl Into<Cow<'static, str>>, predicate: F) -> Self
    where
        F: Fn(&str) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            kind: StepKind::Rule,
            func: Arc::new(move |value: String, error: Option<Error>| {
                if error.is_some() {
                    return (value, error);
                }
                match predicate(&value) {
                    Ok(()) => (value, None),
                    Err(e) => (value, Some(Error::Rule(e))),
                }
            }),
        }
    }

    /// Builds an ordinary step that rewrites the current value.
    ///
    /// Like [`RuleStep::check`], it does nothing once an error is present.
    pub fn transform<F>(name: impl Into<Cow<'static, str>>, map: F) -> Self
    where
        F: Fn(String) -> Result<String, ValidationError> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            kind: StepKind::Rule,
            func: Arc::new(move |value: String, error: Option<Error>| {
                if error.is_some() {
                    return (value, error);
                }
                let original = value.clone();
                match map(value) {
                    Ok(mapped) => (mapped, None),
                    Err(e) => (original, Some(Error::Rule(e))),
                }
            }),
        }
    }

    /// Wraps a caller-supplied function that always runs.
    ///
    /// The closure receives the current value and error and its returned error,
    /// `None` included, replaces the pipeline's error.
    pub fn custom<F>(name: impl Into<Cow<'static, str>>, func: F) -> Self
    where
        F: Fn(String, Option<Error>) -> (String, Option<Error>) + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            kind: StepKind::Custom,
            func: Arc::new(func),
        }
    }

    /// The step's name, used in logs and `Debug` output.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How the step was constructed.
    pub fn kind(&self) -> StepKind {
        self.kind
    }

    /// Runs the step.
    pub fn apply(&self, value: String, error: Option<Error>) -> (String, Option<Error>) {
        (self.func)(value, error)
    }
}

impl fmt::Debug for RuleStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleStep")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
