//! # Request Payloads
//!
//! Request bodies arrive as `{ "data": { ... } }`. [`Payload`] is the `data` object, with
//! the lookups the validation steps need. The presence rules follow JSON truthiness: a
//! field counts as present unless it is missing, `null`, `false`, `0` or `""`. Arrays and
//! objects are always present, even when empty.

use serde::{de, Deserialize, Deserializer};
use serde_json::{Map, Value};
use std::fmt;

/// The `data` object of a request body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// Extracts `data` from a request body. Anything other than an object is treated as an
    /// empty payload.
    pub fn from_body(body: Value) -> Self {
        match body {
            Value::Object(mut body) => match body.remove("data") {
                Some(Value::Object(data)) => Self(data),
                _ => Self::default(),
            },
            _ => Self::default(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// True when `field` holds a truthy value.
    pub fn has(&self, field: &str) -> bool {
        self.get(field).is_some_and(is_truthy)
    }

    /// The value of `field` if it is a non-empty string.
    pub fn text(&self, field: &str) -> Option<&str> {
        match self.get(field) {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// The body's `id`, when one was supplied. Falsy ids count as absent.
    pub fn id(&self) -> Option<&Value> {
        self.get("id").filter(|value| is_truthy(value))
    }

    /// Deserializes the payload into a typed record.
    pub fn parse<T: for<'de> Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        T::deserialize(Value::Object(self.0.clone()))
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(data: Map<String, Value>) -> Self {
        Self(data)
    }
}

/// JSON truthiness.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The value as an integer strictly greater than zero.
///
/// Numbers without a fractional part count as integers, so `8.0` is accepted as `8`.
/// Strings are never integers.
pub fn positive_integer(value: &Value) -> Option<u64> {
    let Value::Number(n) = value else {
        return None;
    };
    if let Some(whole) = n.as_u64() {
        return (whole > 0).then_some(whole);
    }
    let float = n.as_f64()?;
    (float.fract() == 0.0 && float > 0.0 && float < u64::MAX as f64).then_some(float as u64)
}

/// Renders a JSON value the way it appears in error messages: strings without quotes.
pub struct Shown<'a>(pub &'a Value);

impl fmt::Display for Shown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

/// `deserialize_with` adapter for fields that must hold a positive integer.
pub fn deserialize_positive_integer<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    positive_integer(&value)
        .ok_or_else(|| de::Error::custom("expected an integer greater than 0"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_body_takes_data_object() {
        let payload = Payload::from_body(json!({ "data": { "name": "Taco" } }));
        assert_eq!(payload.text("name"), Some("Taco"));
    }

    #[test]
    fn test_from_body_without_data_is_empty() {
        assert_eq!(Payload::from_body(json!({})), Payload::default());
        assert_eq!(Payload::from_body(json!({ "data": 5 })), Payload::default());
        assert_eq!(Payload::from_body(json!(null)), Payload::default());
    }

    #[test]
    fn test_truthiness() {
        for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!is_truthy(&falsy), "{} should be falsy", falsy);
        }
        for truthy in [json!(true), json!(1), json!(-2.5), json!("x"), json!([]), json!({})] {
            assert!(is_truthy(&truthy), "{} should be truthy", truthy);
        }
    }

    #[test]
    fn test_has_and_text() {
        let payload = Payload::from_body(json!({
            "data": { "name": "", "dishes": [], "price": 3, "status": null }
        }));
        assert!(!payload.has("name"));
        assert!(payload.has("dishes"));
        assert!(payload.has("price"));
        assert!(!payload.has("status"));
        assert!(!payload.has("missing"));

        assert_eq!(payload.text("name"), None);
        assert_eq!(payload.text("price"), None);
    }

    #[test]
    fn test_id_ignores_falsy_values() {
        assert!(Payload::from_body(json!({ "data": { "id": "" } })).id().is_none());
        assert!(Payload::from_body(json!({ "data": { "id": null } })).id().is_none());
        assert_eq!(
            Payload::from_body(json!({ "data": { "id": "abc" } })).id(),
            Some(&json!("abc"))
        );
    }

    #[test]
    fn test_positive_integer() {
        assert_eq!(positive_integer(&json!(8)), Some(8));
        assert_eq!(positive_integer(&json!(8.0)), Some(8));
        assert_eq!(positive_integer(&json!(0)), None);
        assert_eq!(positive_integer(&json!(-3)), None);
        assert_eq!(positive_integer(&json!(2.5)), None);
        assert_eq!(positive_integer(&json!("8")), None);
        assert_eq!(positive_integer(&json!(null)), None);
    }

    #[test]
    fn test_positive_integer_rejects_values_beyond_u64() {
        assert_eq!(positive_integer(&json!(u64::MAX)), Some(u64::MAX));
        assert_eq!(
            positive_integer(&json!(9_007_199_254_740_992.0)),
            Some(9_007_199_254_740_992)
        );
        // 2^64 as a float, one past u64::MAX
        assert_eq!(positive_integer(&json!(18_446_744_073_709_551_616.0)), None);
        assert_eq!(positive_integer(&json!(1e20)), None);
    }

    #[test]
    fn test_shown_strips_quotes_from_strings() {
        assert_eq!(Shown(&json!("abc")).to_string(), "abc");
        assert_eq!(Shown(&json!(42)).to_string(), "42");
    }
}
