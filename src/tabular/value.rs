use serde::Deserialize;
use serde::Serialize;

/// A single scalar cell value.
///
/// Covers everything a CSV field or a JSON cell can hold in the OpenGIN
/// tabular format. Variant order matters: untagged deserialization tries
/// variants top to bottom, so integers must come before floats.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// JSON null / absent value
    Null,
    /// Boolean values (true/false)
    Bool(bool),
    /// 64-bit signed integers
    Int(i64),
    /// Double-precision floating point numbers
    Float(f64),
    /// Variable-length strings (every CSV field lands here)
    Text(String),
}

impl Value {
    /// The empty-string sentinel substituted for absent record keys.
    pub fn empty() -> Self {
        Value::Text(String::new())
    }

    /// Returns true if the value is null or an empty string.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Text(text) => text.is_empty(),
            _ => false,
        }
    }

    /// Extracts the string content, if this value is textual.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_round_trip() {
        let values = vec![
            Value::Null,
            Value::Bool(true),
            Value::Int(42),
            Value::Float(2.5),
            Value::Text("hello".to_owned()),
        ];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[null,true,42,2.5,"hello"]"#);
        let parsed: Vec<Value> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, values);
    }

    #[test]
    fn integral_float_stays_float() {
        let parsed: Value = serde_json::from_str("2.0").unwrap();
        assert_eq!(parsed, Value::Float(2.0));
    }

    #[test]
    fn non_scalar_is_rejected() {
        assert!(serde_json::from_str::<Value>(r#"{"a":1}"#).is_err());
        assert!(serde_json::from_str::<Value>("[1,2]").is_err());
    }

    #[test]
    fn empty_sentinel() {
        assert!(Value::empty().is_empty());
        assert!(Value::Null.is_empty());
        assert!(!Value::from("x").is_empty());
        assert_eq!(Value::empty().as_str(), Some(""));
    }
}
