//! Length rules
//!
//! Lengths are counted in Unicode scalar values, not bytes.

use crate::foundation::{RuleStep, ValidationError};

/// At least `min` characters.
#[must_use]
pub fn min_length(min: usize) -> RuleStep {
    RuleStep::check("min_length", move |input| {
        let actual = input.chars().count();
        if actual >= min {
            Ok(())
        } else {
            Err(ValidationError::min_length(min, actual))
        }
    })
}

/// At most `max` characters.
#[must_use]
pub fn max_length(max: usize) -> RuleStep {
    RuleStep::check("max_length", move |input| {
        let actual = input.chars().count();
        if actual <= max {
            Ok(())
        } else {
            Err(ValidationError::max_length(max, actual))
        }
    })
}

/// Between `min` and `max` characters, inclusive.
#[must_use]
pub fn length_range(min: usize, max: usize) -> RuleStep {
    RuleStep::check("length_range", move |input| {
        let actual = input.chars().count();
        if (min..=max).contains(&actual) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "length_range",
                format!("Must be between {min} and {max} characters"),
            )
            .with_param("min", min.to_string())
            .with_param("max", max.to_string())
            .with_param("actual", actual.to_string()))
        }
    })
}
