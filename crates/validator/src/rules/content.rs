//! Content and format rules
//!
//! Substring, prefix/suffix, membership and regex-backed format checks.

use std::sync::LazyLock;

use crate::foundation::{RuleStep, ValidationError};

static EMAIL_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap()
});

static URL_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap());

/// The value must contain `substring`.
pub fn has_string(substring: impl Into<String>) -> RuleStep {
    let substring = substring.into();
    RuleStep::check("has_string", move |input| {
        if input.contains(substring.as_str()) {
            Ok(())
        } else {
            Err(
                ValidationError::new("has_string", format!("Must contain '{substring}'"))
                    .with_param("substring", substring.clone()),
            )
        }
    })
}

/// The value must start with `prefix`.
pub fn has_prefix(prefix: impl Into<String>) -> RuleStep {
    let prefix = prefix.into();
    RuleStep::check("has_prefix", move |input| {
        if input.starts_with(prefix.as_str()) {
            Ok(())
        } else {
            Err(
                ValidationError::new("has_prefix", format!("Must start with '{prefix}'"))
                    .with_param("prefix", prefix.clone()),
            )
        }
    })
}

/// The value must end with `suffix`.
pub fn has_suffix(suffix: impl Into<String>) -> RuleStep {
    let suffix = suffix.into();
    RuleStep::check("has_suffix", move |input| {
        if input.ends_with(suffix.as_str()) {
            Ok(())
        } else {
            Err(
                ValidationError::new("has_suffix", format!("Must end with '{suffix}'"))
                    .with_param("suffix", suffix.clone()),
            )
        }
    })
}

/// The value must equal one of `allowed`.
pub fn enum_string<S: AsRef<str>>(allowed: &[S]) -> RuleStep {
    let allowed: Vec<String> = allowed.iter().map(|s| s.as_ref().to_owned()).collect();
    RuleStep::check("enum_string", move |input| {
        if allowed.iter().any(|candidate| candidate == input) {
            Ok(())
        } else {
            Err(
                ValidationError::new("enum_string", "Must be one of the allowed values")
                    .with_param("allowed", allowed.join(",")),
            )
        }
    })
}

/// Email address format.
#[must_use]
pub fn is_mail() -> RuleStep {
    RuleStep::check("is_mail", |input| {
        if EMAIL_REGEX.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::invalid_format("email")
                .with_help("Use the form name@example.com"))
        }
    })
}

/// http or https URL.
#[must_use]
pub fn is_url() -> RuleStep {
    RuleStep::check("is_url", |input| {
        if URL_REGEX.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::invalid_format("url")
                .with_help("Start the address with http:// or https://"))
        }
    })
}

/// The value must match `pattern`.
pub fn regex(pattern: &str) -> Result<RuleStep, regex::Error> {
    let compiled = regex::Regex::new(pattern)?;
    Ok(RuleStep::check("regex", move |input| {
        if compiled.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::invalid_format("regex")
                .with_param("pattern", compiled.as_str().to_owned()))
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passes(step: &RuleStep, input: &str) -> bool {
        step.apply(input.to_owned(), None).1.is_none()
    }

    #[test]
    fn test_has_string() {
        let step = has_string("lo w");
        assert!(passes(&step, "hello world"));
        assert!(!passes(&step, "hello"));
    }

    #[test]
    fn test_prefix_and_suffix() {
        assert!(passes(&has_prefix("img_"), "img_01.png"));
        assert!(!passes(&has_prefix("img_"), "01.png"));
        assert!(passes(&has_suffix(".png"), "img_01.png"));
        assert!(!passes(&has_suffix(".png"), "img_01.jpg"));
    }

    #[test]
    fn test_enum_string() {
        let step = enum_string(&["red", "green"]);
        assert!(passes(&step, "green"));
        assert!(!passes(&step, "blue"));
        let (_, error) = step.apply("blue".into(), None);
        let error = error.unwrap();
        assert_eq!(
            error.as_validation_error().and_then(|e| e.param("allowed")),
            Some("red,green")
        );
    }

    #[test]
    fn test_email() {
        assert!(passes(&is_mail(), "user@example.com"));
        assert!(!passes(&is_mail(), "invalid"));
        assert!(!passes(&is_mail(), "@example.com"));
        assert!(!passes(&is_mail(), "user@"));

        let (_, error) = is_mail().apply("invalid".into(), None);
        let help = error
            .as_ref()
            .and_then(|e| e.as_validation_error())
            .and_then(|e| e.help.as_deref());
        assert_eq!(help, Some("Use the form name@example.com"));
    }

    #[test]
    fn test_url() {
        assert!(passes(&is_url(), "http://example.com"));
        assert!(passes(&is_url(), "https://example.com/path"));
        assert!(!passes(&is_url(), "invalid"));
        assert!(!passes(&is_url(), "ftp://example.com"));
    }

    #[test]
    fn test_regex() {
        let step = regex(r"^\d{3}-\d{4}$").unwrap();
        assert!(passes(&step, "123-4567"));
        assert!(!passes(&step, "invalid"));
        assert!(regex("[").is_err());
    }
}
