//! Presence rule.

use crate::foundation::{RuleStep, ValidationError};

/// Name of the step appended by [`required`].
pub(crate) const REQUIRED_STEP: &str = "required";

/// The value must not be empty.
///
/// Leaves the value unchanged on failure so a later `customize` step can
/// still see and replace it.
#[must_use]
pub fn required() -> RuleStep {
    RuleStep::check(REQUIRED_STEP, |input| {
        if input.is_empty() {
            Err(ValidationError::required())
        } else {
            Ok(())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(required().apply("x".into(), None).1.is_none());

        let (value, error) = required().apply(String::new(), None);
        assert_eq!(value, "");
        assert_eq!(error.map(|e| e.code().to_owned()).as_deref(), Some("required"));
    }

    #[test]
    fn test_whitespace_is_present() {
        assert!(required().apply(" ".into(), None).1.is_none());
    }
}
