//! Field validation module
//!
//! Shared validation helpers used by every domain model. Each model field
//! goes through one of these checks on construction and on every setter
//! call, so a constructed model can never hold an invalid field.

use serde_json::Value;
use thiserror::Error;

/// Validation failure raised by model constructors and setters.
///
/// `Type` means the supplied raw value has the wrong data type for the
/// field; `Value` means the type was right but the value itself is
/// invalid (empty text, non-positive number).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("{field}: expected {expected}")]
    Type {
        field: &'static str,
        expected: &'static str,
    },
    #[error("{field}: {reason}")]
    Value {
        field: &'static str,
        reason: &'static str,
    },
}

/// Validate a text field: must be non-empty after trimming.
pub(crate) fn non_empty_text(field: &'static str, value: &str) -> Result<String, ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Value {
            field,
            reason: "must not be empty",
        });
    }
    Ok(value.to_string())
}

/// Validate an integer field: must be greater than zero.
pub(crate) fn positive_int(field: &'static str, value: i64) -> Result<i64, ModelError> {
    if value <= 0 {
        return Err(ModelError::Value {
            field,
            reason: "must be greater than zero",
        });
    }
    Ok(value)
}

/// Validate a rate field: must be greater than zero.
pub(crate) fn positive_rate(field: &'static str, value: f64) -> Result<f64, ModelError> {
    if value <= 0.0 {
        return Err(ModelError::Value {
            field,
            reason: "must be greater than zero",
        });
    }
    Ok(value)
}

/// Extract the object form of a raw payload.
pub(crate) fn object<'a>(
    field: &'static str,
    raw: &'a Value,
) -> Result<&'a serde_json::Map<String, Value>, ModelError> {
    raw.as_object().ok_or(ModelError::Type {
        field,
        expected: "object",
    })
}

/// Extract and validate a text field from a raw payload member.
///
/// A missing member or a non-string value is a type failure; an empty
/// string is a value failure.
pub(crate) fn text_field(field: &'static str, raw: Option<&Value>) -> Result<String, ModelError> {
    let Some(text) = raw.and_then(Value::as_str) else {
        return Err(ModelError::Type {
            field,
            expected: "string",
        });
    };
    non_empty_text(field, text)
}

/// Extract and validate an integer field from a raw payload member.
pub(crate) fn int_field(field: &'static str, raw: Option<&Value>) -> Result<i64, ModelError> {
    let Some(number) = raw.and_then(Value::as_i64) else {
        return Err(ModelError::Type {
            field,
            expected: "integer",
        });
    };
    positive_int(field, number)
}

/// Extract and validate a numeric rate field from a raw payload member.
///
/// Accepts both integer and floating-point numbers; the result is always
/// stored as `f64`.
pub(crate) fn rate_field(field: &'static str, raw: Option<&Value>) -> Result<f64, ModelError> {
    let Some(number) = raw.and_then(Value::as_f64) else {
        return Err(ModelError::Type {
            field,
            expected: "number",
        });
    };
    positive_rate(field, number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_empty_text() {
        assert_eq!(non_empty_text("name", "Ali").unwrap(), "Ali");
        assert!(matches!(
            non_empty_text("name", ""),
            Err(ModelError::Value { field: "name", .. })
        ));
        assert!(matches!(
            non_empty_text("name", "   "),
            Err(ModelError::Value { .. })
        ));
    }

    #[test]
    fn test_positive_int() {
        assert_eq!(positive_int("id", 5).unwrap(), 5);
        assert!(matches!(positive_int("id", 0), Err(ModelError::Value { .. })));
        assert!(matches!(positive_int("id", -1), Err(ModelError::Value { .. })));
    }

    #[test]
    fn test_positive_rate() {
        assert_eq!(positive_rate("value", 90.5).unwrap(), 90.5);
        assert!(matches!(
            positive_rate("value", 0.0),
            Err(ModelError::Value { .. })
        ));
    }

    #[test]
    fn test_text_field_type_mismatch() {
        let raw = json!(123);
        assert!(matches!(
            text_field("name", Some(&raw)),
            Err(ModelError::Type { field: "name", expected: "string" })
        ));
        assert!(matches!(
            text_field("name", None),
            Err(ModelError::Type { .. })
        ));
    }

    #[test]
    fn test_int_field_rejects_float_and_string() {
        let float = json!(1.5);
        assert!(matches!(
            int_field("id", Some(&float)),
            Err(ModelError::Type { .. })
        ));
        let text = json!("7");
        assert!(matches!(
            int_field("id", Some(&text)),
            Err(ModelError::Type { .. })
        ));
    }

    #[test]
    fn test_rate_field_accepts_integer_input() {
        let raw = json!(42);
        assert_eq!(rate_field("value", Some(&raw)).unwrap(), 42.0);
    }
}
