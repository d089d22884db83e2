//! Value-rewriting steps.

use crate::foundation::RuleStep;

/// Strips leading and trailing whitespace.
#[must_use]
pub fn trim() -> RuleStep {
    RuleStep::transform("trim", |value| Ok(value.trim().to_owned()))
}

/// Lowercases the value.
#[must_use]
pub fn lowercase() -> RuleStep {
    RuleStep::transform("lowercase", |value| Ok(value.to_lowercase()))
}

/// Uppercases the value.
#[must_use]
pub fn uppercase() -> RuleStep {
    RuleStep::transform("uppercase", |value| Ok(value.to_uppercase()))
}

/// Substitutes `fallback` for an empty value or a failed one.
///
/// Built on the `customize` path, so it runs after a failure and clears it.
pub fn default_value(fallback: impl Into<String>) -> RuleStep {
    let fallback = fallback.into();
    RuleStep::custom("default_value", move |value, error| {
        if error.is_some() || value.is_empty() {
            (fallback.clone(), None)
        } else {
            (value, None)
        }
    })
}
