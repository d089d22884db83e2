//! Ordered walk of a pipeline against a bound value.
//!
//! The walk itself is uniform: every step is invoked with the current pair and
//! its result replaces the pair. Short-circuiting lives inside ordinary steps
//! (see [`RuleStep::check`](crate::foundation::RuleStep::check)), which is why
//! a `customize` step later in the pipeline still gets to run and can cure an
//! earlier failure.

use tracing::{debug, trace};

use crate::engine::Pipeline;
use crate::foundation::{Error, StepKind};
use crate::rules;

/// The value bound by `verifi`, with its label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Binding {
    pub(crate) value: String,
    pub(crate) label: String,
}

/// The terminal pair produced by a pipeline walk.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Outcome {
    pub(crate) value: String,
    pub(crate) error: Option<Error>,
}

impl Outcome {
    pub(crate) fn to_result(&self) -> Result<String, Error> {
        match &self.error {
            Some(error) => Err(error.clone()),
            None => Ok(self.value.clone()),
        }
    }
}

/// Runs every step of `pipeline` in order against `binding`.
///
/// A `required` validator bound to an empty value defers ordinary steps that
/// come before the `required` step: they leave the value alone and add no
/// error, so type rules never inspect the empty value. `customize` steps run
/// normally, and the `required` step reports at its own position.
pub(crate) fn evaluate(pipeline: &Pipeline, binding: &Binding, required: bool) -> Outcome {
    let mut value = binding.value.clone();
    let mut error: Option<Error> = None;
    let mut presence_checked = !required;

    for (index, step) in pipeline.iter().enumerate() {
        let failed_before = error.is_some();
        let is_presence = step.name() == rules::REQUIRED_STEP;
        let deferred = !presence_checked
            && !is_presence
            && step.kind() == StepKind::Rule
            && value.is_empty();

        if !deferred {
            (value, error) = step.apply(value, error);
        }
        if is_presence {
            presence_checked = true;
        }

        if let Some(e) = error.as_mut() {
            e.label_rule(&binding.label);
        }

        trace!(
            index,
            step = step.name(),
            kind = %step.kind(),
            deferred,
            failed_before,
            failed_after = error.is_some(),
            "Evaluated rule step"
        );
    }

    debug!(
        label = %binding.label,
        steps = pipeline.len(),
        error = error.as_ref().map(Error::code),
        "Pipeline evaluated"
    );

    Outcome { value, error }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{RuleStep, ValidationError};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    fn bind(value: &str) -> Binding {
        Binding {
            value: value.to_owned(),
            label: "field".to_owned(),
        }
    }

    fn always_fails() -> RuleStep {
        RuleStep::check("always_fails", |_| {
            Err(ValidationError::new("always_fails", "Always fails"))
        })
    }

    fn always_fails_on_empty() -> RuleStep {
        RuleStep::check("non_empty", |input| {
            if input.is_empty() {
                Err(ValidationError::new("non_empty", "Empty"))
            } else {
                Ok(())
            }
        })
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let outcome = evaluate(&Pipeline::new(), &bind("as-is"), false);
        assert_eq!(outcome.value, "as-is");
        assert!(outcome.error.is_none());
    }

    #[test]
    fn test_ordinary_step_after_failure_does_not_run() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&ran);

        let mut pipeline = Pipeline::new();
        pipeline.push(always_fails());
        pipeline.push(RuleStep::check("recorder", move |_| {
            flag.store(true, Ordering::SeqCst);
            Ok(())
        }));

        let outcome = evaluate(&pipeline, &bind("x"), false);
        assert_eq!(outcome.error.as_ref().map(Error::code), Some("always_fails"));
        assert!(!ran.load(Ordering::SeqCst));
    }

    #[test]
    fn test_custom_step_cures_failure() {
        let mut pipeline = Pipeline::new();
        pipeline.push(always_fails());
        pipeline.push(RuleStep::custom("cure", |_, _| ("cured".into(), None)));

        let outcome = evaluate(&pipeline, &bind("x"), false);
        assert_eq!(outcome.value, "cured");
        assert!(outcome.error.is_none());
    }

    #[test]
    fn test_rule_errors_carry_label() {
        let mut pipeline = Pipeline::new();
        pipeline.push(always_fails());

        let outcome = evaluate(&pipeline, &bind("x"), false);
        let field = outcome
            .error
            .as_ref()
            .and_then(Error::as_validation_error)
            .and_then(|e| e.field.as_deref());
        assert_eq!(field, Some("field"));
    }

    #[test]
    fn test_required_empty_defers_earlier_rules() {
        let ran = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&ran);

        let mut pipeline = Pipeline::new();
        pipeline.push(RuleStep::check("recorder", move |_| {
            flag.store(true, Ordering::SeqCst);
            Ok(())
        }));
        pipeline.push(rules::required());

        let outcome = evaluate(&pipeline, &bind(""), true);
        assert_eq!(outcome.error.as_ref().map(Error::code), Some("required"));
        assert!(!ran.load(Ordering::SeqCst));
    }

    #[test]
    fn test_custom_before_required_sees_no_error() {
        let mut pipeline = Pipeline::new();
        pipeline.push(RuleStep::custom("fill", |value, error| {
            assert!(error.is_none());
            if value.is_empty() {
                ("anon".into(), error)
            } else {
                (value, error)
            }
        }));
        pipeline.push(always_fails_on_empty());
        pipeline.push(rules::required());

        let outcome = evaluate(&pipeline, &bind(""), true);
        assert_eq!(outcome.value, "anon");
        assert!(outcome.error.is_none());
    }

    #[test]
    fn test_outcome_to_result() {
        let failed = Outcome {
            value: "kept".to_owned(),
            error: Some(Error::custom("bad")),
        };
        assert_eq!(failed.to_result(), Err(Error::custom("bad")));
    }
}
