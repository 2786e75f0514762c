use super::{NativeKind, build_array, build_number, build_object, build_text, classify};
use crate::error::VariableError;
use crate::segment::Segment;
use serde_json::Value as JsonValue;

/// Builds a segment from the raw shape alone.
///
/// Sequences take their element kind from the first element and must stay
/// homogeneous; an empty sequence becomes an `array[any]` segment.
pub fn resolve_inferred(raw: &JsonValue, field: &str) -> Result<Segment, VariableError> {
    match (classify(raw), raw) {
        (NativeKind::Null, _) => Ok(Segment::None),
        (kind @ NativeKind::String, _) => build_text(raw, kind, field).map(Segment::String),
        (kind @ (NativeKind::Integer | NativeKind::Float), _) => build_number(raw, kind, field),
        (kind @ NativeKind::Object, _) => build_object(raw, kind, field),
        (_, JsonValue::Array(items)) => build_array(None, items, field),
        (kind, _) => Err(VariableError::shape(
            field,
            "string, number, object, array or null",
            kind,
        )),
    }
}
