use serde_json::Value as JsonValue;
use std::fmt;

/// Runtime shape of a raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeKind {
    Null,
    Bool,
    Integer,
    Float,
    String,
    Array,
    Object,
}

impl NativeKind {
    pub fn is_number(&self) -> bool {
        matches!(self, NativeKind::Integer | NativeKind::Float)
    }
}

impl fmt::Display for NativeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NativeKind::Null => "null",
            NativeKind::Bool => "boolean",
            NativeKind::Integer => "integer",
            NativeKind::Float => "float",
            NativeKind::String => "string",
            NativeKind::Array => "array",
            NativeKind::Object => "object",
        };
        f.write_str(name)
    }
}

/// Classifies a raw value by shape.
///
/// A number is `Integer` only when it was written as an integral literal;
/// `2.0` stays a `Float` even though its value is whole.
pub fn classify(raw: &JsonValue) -> NativeKind {
    match raw {
        JsonValue::Null => NativeKind::Null,
        JsonValue::Bool(_) => NativeKind::Bool,
        JsonValue::Number(n) if n.is_i64() || n.is_u64() => NativeKind::Integer,
        JsonValue::Number(_) => NativeKind::Float,
        JsonValue::String(_) => NativeKind::String,
        JsonValue::Array(_) => NativeKind::Array,
        JsonValue::Object(_) => NativeKind::Object,
    }
}
