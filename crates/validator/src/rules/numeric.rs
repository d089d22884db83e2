//! Numeric range rules
//!
//! These parse the current value, compare, and leave the value unchanged.
//! A value that does not parse fails the rule; the final `int()`/`float64()`
//! accessor parses again independently.

use std::fmt::Display;
use std::str::FromStr;

use crate::foundation::{RuleStep, ValidationError};

fn bound_rule<T>(
    code: &'static str,
    bound: T,
    kind: &'static str,
    within: fn(&T, &T) -> bool,
    message: String,
) -> RuleStep
where
    T: FromStr + Display + Send + Sync + 'static,
{
    RuleStep::check(code, move |input| match input.parse::<T>() {
        Ok(actual) if within(&actual, &bound) => Ok(()),
        Ok(actual) => Err(ValidationError::new(code, message.clone())
            .with_param("bound", bound.to_string())
            .with_param("actual", actual.to_string())),
        Err(_) => Err(ValidationError::new(code, format!("Must be a valid {kind}"))
            .with_param("expected", kind)),
    })
}

/// Integer no smaller than `min`.
#[must_use]
pub fn min_int(min: i64) -> RuleStep {
    bound_rule(
        "min_int",
        min,
        "integer",
        |actual, min| actual >= min,
        format!("Value must be at least {min}"),
    )
}

/// Integer no larger than `max`.
#[must_use]
pub fn max_int(max: i64) -> RuleStep {
    bound_rule(
        "max_int",
        max,
        "integer",
        |actual, max| actual <= max,
        format!("Value must be at most {max}"),
    )
}

/// Number no smaller than `min`.
#[must_use]
pub fn min_float(min: f64) -> RuleStep {
    bound_rule(
        "min_float",
        min,
        "number",
        |actual, min| actual >= min,
        format!("Value must be at least {min}"),
    )
}

/// Number no larger than `max`.
#[must_use]
pub fn max_float(max: f64) -> RuleStep {
    bound_rule(
        "max_float",
        max,
        "number",
        |actual, max| actual <= max,
        format!("Value must be at most {max}"),
    )
}
