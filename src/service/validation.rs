//! Presence checks for request bodies and path ids.

use crate::error::AppError;
use serde_json::Value;

pub const INVALID_ID: &str = "ID inválido. Debe ser un número.";

/// A required field is present when it is truthy: not null, `false`, `0` or `""`.
/// Its JSON type is not checked; the database converts it to the column type.
pub fn required_field(value: &Option<Value>) -> Option<&Value> {
    value.as_ref().filter(|v| match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    })
}

/// A JSON field is present when it is set and not null. `0` and `""` count as present.
pub fn required_value(value: &Option<Value>) -> Option<&Value> {
    value.as_ref().filter(|v| !v.is_null())
}

/// Parse a path id. Text that is not a number is rejected; a number that cannot be an `INT`
/// key (fractional or out of range) yields `None` and is reported as not found.
pub fn parse_id(raw: &str) -> Result<Option<i64>, AppError> {
    let n: f64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::Validation(INVALID_ID.into()))?;
    if n.is_nan() {
        return Err(AppError::Validation(INVALID_ID.into()));
    }
    if n.fract() != 0.0 || n < f64::from(i32::MIN) || n > f64::from(i32::MAX) {
        return Ok(None);
    }
    Ok(Some(n as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn falsy_values_are_missing() {
        assert_eq!(required_field(&Some(json!("Admin"))), Some(&json!("Admin")));
        assert_eq!(required_field(&Some(json!(123))), Some(&json!(123)));
        assert_eq!(required_field(&Some(json!(""))), None);
        assert_eq!(required_field(&Some(json!(0))), None);
        assert_eq!(required_field(&Some(json!(false))), None);
        assert_eq!(required_field(&Some(Value::Null)), None);
        assert_eq!(required_field(&None), None);
    }

    #[test]
    fn zero_price_is_present() {
        assert!(required_value(&Some(json!(0))).is_some());
        assert!(required_value(&Some(json!(""))).is_some());
        assert!(required_value(&Some(Value::Null)).is_none());
        assert!(required_value(&None).is_none());
    }

    #[test]
    fn non_numeric_ids_are_invalid() {
        assert!(matches!(parse_id("abc"), Err(AppError::Validation(m)) if m == INVALID_ID));
        assert!(parse_id("").is_err());
        assert!(parse_id("1x").is_err());
        assert!(parse_id("NaN").is_err());
    }

    #[test]
    fn numeric_ids_that_cannot_exist_are_none() {
        assert_eq!(parse_id("42").unwrap(), Some(42));
        assert_eq!(parse_id(" 7 ").unwrap(), Some(7));
        assert_eq!(parse_id("1e3").unwrap(), Some(1000));
        assert_eq!(parse_id("1.5").unwrap(), None);
        assert_eq!(parse_id("99999999999999999999").unwrap(), None);
        assert_eq!(parse_id("inf").unwrap(), None);
    }
}
