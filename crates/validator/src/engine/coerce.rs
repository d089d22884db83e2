//! Terminal conversions from the evaluated string to typed scalars.

use std::str::FromStr;

use crate::foundation::{CoercionError, ScalarKind};

/// Parses a signed integer, accepting an optional leading sign.
pub(crate) fn to_int(value: &str) -> Result<i64, CoercionError> {
    value
        .parse::<i64>()
        .map_err(|e| CoercionError::new(value, ScalarKind::Int, e))
}

/// Parses a float.
pub(crate) fn to_float(value: &str) -> Result<f64, CoercionError> {
    value
        .parse::<f64>()
        .map_err(|e| CoercionError::new(value, ScalarKind::Float, e))
}

/// Parses a boolean token.
///
/// Truthy: `1`, `t`, `T`, `true`, `TRUE`, `True`.
/// Falsy: `0`, `f`, `F`, `false`, `FALSE`, `False`.
pub(crate) fn to_bool(value: &str) -> Result<bool, CoercionError> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(CoercionError::new(
            value,
            ScalarKind::Bool,
            "not a recognised boolean token",
        )),
    }
}

/// Parses any `FromStr` type.
pub(crate) fn to_any<T>(value: &str) -> Result<T, CoercionError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse::<T>()
        .map_err(|e| CoercionError::new(value, ScalarKind::Other(std::any::type_name::<T>()), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", true)]
    #[case("t", true)]
    #[case("True", true)]
    #[case("TRUE", true)]
    #[case("0", false)]
    #[case("F", false)]
    #[case("false", false)]
    fn test_bool_tokens(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(to_bool(input), Ok(expected));
    }

    #[rstest]
    #[case("yes")]
    #[case("")]
    #[case("tRuE")]
    #[case("2")]
    fn test_bool_rejects(#[case] input: &str) {
        let err = to_bool(input).unwrap_err();
        assert_eq!(err.target, ScalarKind::Bool);
        assert_eq!(err.value, input);
    }

    #[test]
    fn test_int() {
        assert_eq!(to_int("42"), Ok(42));
        assert_eq!(to_int("-7"), Ok(-7));
        assert_eq!(to_int("+7"), Ok(7));
        assert!(to_int("4.2").is_err());
        assert!(to_int("").is_err());
    }

    #[test]
    fn test_float() {
        assert_eq!(to_float("2.5"), Ok(2.5));
        assert_eq!(to_float("3"), Ok(3.0));
        assert!(to_float("abc").is_err());
    }

    #[test]
    fn test_any_names_target_type() {
        let err = to_any::<u8>("300").unwrap_err();
        assert_eq!(err.target, ScalarKind::Other("u8"));
        assert_eq!(to_any::<u8>("200"), Ok(200));
    }
}
