//! Password policies
//!
//! A [`PasswordPolicy`] expands into a fixed, ordered sequence of primitive
//! steps: length bounds first, then letter, lowercase, uppercase, digit and
//! symbol presence. Policies deserialize from configuration files.
//!
//! ```rust
//! use ruleline_validator::rules::PasswordPolicy;
//!
//! let policy: PasswordPolicy =
//!     serde_json::from_str(r#"{ "min_length": 10, "require_symbol": true }"#).unwrap();
//! assert_eq!(policy.min_length, 10);
//! assert!(policy.require_letter);
//! ```

use serde::{Deserialize, Serialize};

use crate::foundation::RuleStep;
use crate::rules::{has_letter, has_lower, has_number, has_symbol, has_upper, length_range};

/// Character-class and length requirements for a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    /// Minimum length in characters.
    pub min_length: usize,
    /// Maximum length in characters.
    pub max_length: usize,
    /// At least one letter of either case.
    pub require_letter: bool,
    /// At least one lowercase letter.
    pub require_lower: bool,
    /// At least one uppercase letter.
    pub require_upper: bool,
    /// At least one digit.
    pub require_number: bool,
    /// At least one symbol.
    pub require_symbol: bool,
}

impl Default for PasswordPolicy {
    /// 6 to 20 characters with at least one letter and one digit.
    fn default() -> Self {
        Self {
            min_length: 6,
            max_length: 20,
            require_letter: true,
            require_lower: false,
            require_upper: false,
            require_number: true,
            require_symbol: false,
        }
    }
}

impl PasswordPolicy {
    /// 8 to 64 characters with lowercase, uppercase, digit and symbol.
    #[must_use]
    pub fn strong() -> Self {
        Self {
            min_length: 8,
            max_length: 64,
            require_letter: false,
            require_lower: true,
            require_upper: true,
            require_number: true,
            require_symbol: true,
        }
    }

    /// The policy's steps in evaluation order.
    pub fn steps(&self) -> Vec<RuleStep> {
        let checks: [(bool, fn() -> RuleStep); 5] = [
            (self.require_letter, has_letter),
            (self.require_lower, has_lower),
            (self.require_upper, has_upper),
            (self.require_number, has_number),
            (self.require_symbol, has_symbol),
        ];

        std::iter::once(length_range(self.min_length, self.max_length))
            .chain(
                checks
                    .into_iter()
                    .filter(|(enabled, _)| *enabled)
                    .map(|(_, step)| step()),
            )
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(policy: &PasswordPolicy) -> Vec<String> {
        policy
            .steps()
            .iter()
            .map(|s| s.name().to_owned())
            .collect()
    }

    #[test]
    fn test_default_order() {
        assert_eq!(
            names(&PasswordPolicy::default()),
            vec!["length_range", "has_letter", "has_number"]
        );
    }

    #[test]
    fn test_strong_order() {
        assert_eq!(
            names(&PasswordPolicy::strong()),
            vec![
                "length_range",
                "has_lower",
                "has_upper",
                "has_number",
                "has_symbol"
            ]
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let policy: PasswordPolicy = serde_json::from_str(r#"{ "require_upper": true }"#).unwrap();
        assert_eq!(policy.min_length, 6);
        assert!(policy.require_upper);
        assert!(policy.require_number);
    }

    #[test]
    fn test_serialize_round_trip_fields() {
        let json = serde_json::to_value(PasswordPolicy::strong()).unwrap();
        assert_eq!(json["min_length"], 8);
        assert_eq!(json["require_symbol"], true);
    }
}
