use ahash::AHashMap;
use serde::{Serialize, Serializer};
use serde_json::{Map, Number, Value as JsonValue};
use std::fmt;

/// An unordered mapping of keys to normalized values, as held by object segments.
pub type ObjectValue = AHashMap<String, Value>;

/// Native value with the integer/float distinction made explicit.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Object(ObjectValue),
}

impl Value {
    /// Normalizes a raw JSON value.
    ///
    /// Integral literals become `Integer`, anything carrying a fractional
    /// representation becomes `Float`, and explicit nulls stay in place.
    /// Integral literals that do not fit in an `i64` fall back to `Float`.
    pub fn from_json(raw: &JsonValue) -> Self {
        match raw {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(*b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => Value::Integer(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            JsonValue::String(s) => Value::String(s.clone()),
            JsonValue::Array(items) => Value::Array(items.iter().map(Value::from_json).collect()),
            JsonValue::Object(map) => Value::Object(object_from_json(map)),
        }
    }

    pub fn to_json(&self) -> JsonValue {
        match self {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(*b),
            Value::Integer(i) => JsonValue::Number((*i).into()),
            Value::Float(f) => float_to_json(*f),
            Value::String(s) => JsonValue::String(s.clone()),
            Value::Array(items) => JsonValue::Array(items.iter().map(Value::to_json).collect()),
            Value::Object(map) => JsonValue::Object(object_to_json(map)),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the numeric value of either number subtype.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectValue> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }
}

pub(crate) fn object_from_json(map: &Map<String, JsonValue>) -> ObjectValue {
    map.iter()
        .map(|(k, v)| (k.clone(), Value::from_json(v)))
        .collect()
}

pub(crate) fn object_to_json(map: &ObjectValue) -> Map<String, JsonValue> {
    map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect()
}

// JSON has no representation for NaN or infinities.
pub(crate) fn float_to_json(f: f64) -> JsonValue {
    Number::from_f64(f)
        .map(JsonValue::Number)
        .unwrap_or(JsonValue::Null)
}

impl From<&JsonValue> for Value {
    fn from(raw: &JsonValue) -> Self {
        Value::from_json(raw)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(n) => write!(f, "{}", float_to_json(*n)),
            Value::String(s) => write!(f, "{}", s),
            // serde_json maps keep sorted keys, so nested output is deterministic
            other => write!(f, "{}", other.to_json()),
        }
    }
}
