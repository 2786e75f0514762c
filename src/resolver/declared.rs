use super::{build_array, build_file, build_number, build_object, build_text, classify};
use crate::error::VariableError;
use crate::segment::{DeclaredType, Segment};
use serde_json::Value as JsonValue;

/// Builds the segment a declared `value_type` calls for.
///
/// Fails with `ShapeMismatch` when `raw` does not have the shape the tag
/// requires. For `number` the integer/float subtype is decided from `raw`.
pub fn resolve_declared(
    declared: DeclaredType,
    raw: &JsonValue,
    field: &str,
) -> Result<Segment, VariableError> {
    let kind = classify(raw);
    match declared {
        DeclaredType::String => build_text(raw, kind, field).map(Segment::String),
        DeclaredType::Number => build_number(raw, kind, field),
        DeclaredType::Secret => build_text(raw, kind, field).map(Segment::Secret),
        DeclaredType::Object => build_object(raw, kind, field),
        DeclaredType::File => build_file(raw, kind, field),
        DeclaredType::Array(element) => match raw {
            JsonValue::Array(items) => build_array(Some(element), items, field),
            _ => Err(VariableError::shape(
                field,
                format!("array of {}", element),
                kind,
            )),
        },
    }
}
