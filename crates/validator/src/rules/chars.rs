//! Character-class rules

use std::sync::LazyLock;

use crate::foundation::{RuleStep, ValidationError};

static NUMBER_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[+-]?\d+(\.\d+)?$").unwrap());

/// Defines a factory returning a check step that needs one matching character.
macro_rules! presence_rule {
    (
        $(#[$meta:meta])*
        $factory:ident, $code:literal, $message:literal, $help:literal, $pred:expr
    ) => {
        $(#[$meta])*
        #[must_use]
        pub fn $factory() -> RuleStep {
            RuleStep::check($code, |input| {
                if input.chars().any($pred) {
                    Ok(())
                } else {
                    Err(ValidationError::new($code, $message).with_help($help))
                }
            })
        }
    };
}

presence_rule! {
    /// At least one letter.
    has_letter, "has_letter", "Must contain a letter",
    "Add at least one letter", char::is_alphabetic
}

presence_rule! {
    /// At least one lowercase letter.
    has_lower, "has_lower", "Must contain a lowercase letter",
    "Add a lowercase letter such as a-z", char::is_lowercase
}

presence_rule! {
    /// At least one uppercase letter.
    has_upper, "has_upper", "Must contain an uppercase letter",
    "Add an uppercase letter such as A-Z", char::is_uppercase
}

presence_rule! {
    /// At least one decimal digit.
    has_number, "has_number", "Must contain a digit",
    "Add a digit 0-9", |c: char| c.is_ascii_digit()
}

presence_rule! {
    /// At least one symbol: anything that is not a letter, digit, whitespace or control.
    has_symbol, "has_symbol", "Must contain a symbol",
    "Add a punctuation mark or symbol such as ! or #", is_symbol
}

fn is_symbol(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace() && !c.is_control()
}

/// Letters and digits only. The empty string passes.
#[must_use]
pub fn is_alphanumeric() -> RuleStep {
    RuleStep::check("is_alphanumeric", |input| {
        if input.chars().all(char::is_alphanumeric) {
            Ok(())
        } else {
            Err(ValidationError::new(
                "is_alphanumeric",
                "Must contain only letters and digits",
            ))
        }
    })
}

/// A decimal number with optional sign and fraction.
#[must_use]
pub fn is_number() -> RuleStep {
    RuleStep::check("is_number", |input| {
        if NUMBER_REGEX.is_match(input) {
            Ok(())
        } else {
            Err(ValidationError::new("is_number", "Must be a number"))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn passes(step: &RuleStep, input: &str) -> bool {
        step.apply(input.to_owned(), None).1.is_none()
    }

    #[rstest]
    #[case("abc", true)]
    #[case("测试", true)]
    #[case("123", false)]
    #[case("", false)]
    fn test_has_letter(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(passes(&has_letter(), input), expected);
    }

    #[test]
    fn test_case_classes() {
        assert!(passes(&has_lower(), "ABc"));
        assert!(!passes(&has_lower(), "ABC"));
        assert!(passes(&has_upper(), "abC"));
        assert!(!passes(&has_upper(), "abc"));
    }

    #[test]
    fn test_presence_rules_suggest_a_fix() {
        let (_, error) = has_symbol().apply("abc123".into(), None);
        let error = error.unwrap();
        let detail = error.as_validation_error().unwrap();
        assert!(detail.help.is_some());
        assert!(error.to_string().contains("Help: Add a punctuation mark"));
    }

    #[test]
    fn test_has_number() {
        assert!(passes(&has_number(), "a1"));
        assert!(!passes(&has_number(), "ab"));
    }

    #[rstest]
    #[case("a!b", true)]
    #[case("x_y", true)]
    #[case("a+b", true)]
    #[case("a b", false)]
    #[case("abc123", false)]
    fn test_has_symbol(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(passes(&has_symbol(), input), expected);
    }

    #[test]
    fn test_is_alphanumeric() {
        assert!(passes(&is_alphanumeric(), "abc123"));
        assert!(passes(&is_alphanumeric(), ""));
        assert!(!passes(&is_alphanumeric(), "abc 123"));
        assert!(!passes(&is_alphanumeric(), "abc-123"));
    }

    #[rstest]
    #[case("42", true)]
    #[case("-3", true)]
    #[case("+3", true)]
    #[case("2.50", true)]
    #[case("test3", false)]
    #[case("1.", false)]
    #[case(".5", false)]
    #[case("", false)]
    fn test_is_number(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(passes(&is_number(), input), expected);
    }

    #[test]
    fn test_error_code() {
        let (_, error) = has_upper().apply("abc".into(), None);
        assert_eq!(error.map(|e| e.code().to_owned()), Some("has_upper".to_owned()));
    }
}
