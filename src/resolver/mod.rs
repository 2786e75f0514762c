//! Maps raw values to concrete segment variants.
//!
//! Two modes exist. [`resolve_declared`] trusts an explicit `value_type` tag and
//! checks the raw shape against it; [`resolve_inferred`] picks the variant from
//! the raw shape alone. Both share the scalar and array builders below, so an
//! `array[number]` built either way has identical children.

mod declared;
mod inferred;
mod kind;

pub use declared::resolve_declared;
pub use inferred::resolve_inferred;
pub use kind::*;

use crate::error::VariableError;
use crate::file::FileDescriptor;
use crate::segment::value::object_from_json;
use crate::segment::{ArraySegment, ElementKind, Segment};
use serde_json::Value as JsonValue;

pub(crate) fn element_path(field: &str, index: usize) -> String {
    format!("{}[{}]", field, index)
}

// Builders take the `NativeKind` the caller already computed for `raw`, so
// every value is classified exactly once.

fn build_text(raw: &JsonValue, kind: NativeKind, field: &str) -> Result<String, VariableError> {
    match raw {
        JsonValue::String(s) => Ok(s.clone()),
        _ => Err(VariableError::shape(field, "string", kind)),
    }
}

fn build_number(raw: &JsonValue, kind: NativeKind, field: &str) -> Result<Segment, VariableError> {
    let JsonValue::Number(n) = raw else {
        return Err(VariableError::shape(field, "number", kind));
    };
    match kind {
        NativeKind::Integer => n.as_i64().map(Segment::Integer).ok_or_else(|| {
            VariableError::shape(
                field,
                "integer within the signed 64-bit range",
                NativeKind::Integer,
            )
        }),
        _ => n
            .as_f64()
            .map(Segment::Float)
            .ok_or_else(|| VariableError::shape(field, "number", NativeKind::Float)),
    }
}

fn build_object(raw: &JsonValue, kind: NativeKind, field: &str) -> Result<Segment, VariableError> {
    match raw {
        JsonValue::Object(map) => Ok(Segment::Object(object_from_json(map))),
        _ => Err(VariableError::shape(field, "object", kind)),
    }
}

fn build_file(raw: &JsonValue, kind: NativeKind, field: &str) -> Result<Segment, VariableError> {
    match raw {
        JsonValue::Object(map) => FileDescriptor::from_mapping(map, field).map(Segment::File),
        _ => Err(VariableError::shape(field, "file descriptor object", kind)),
    }
}

fn accepts(element: ElementKind, kind: NativeKind) -> bool {
    match element {
        ElementKind::String => kind == NativeKind::String,
        ElementKind::Number => kind.is_number(),
        ElementKind::Object | ElementKind::File => kind == NativeKind::Object,
    }
}

/// Element kind an inferred array takes from its first element.
fn infer_element(kind: NativeKind, field: &str) -> Result<ElementKind, VariableError> {
    match kind {
        NativeKind::String => Ok(ElementKind::String),
        NativeKind::Integer | NativeKind::Float => Ok(ElementKind::Number),
        NativeKind::Object => Ok(ElementKind::Object),
        other => Err(VariableError::shape(
            &element_path(field, 0),
            "string, number or object element",
            other,
        )),
    }
}

/// Builds a homogeneous array, rejecting the first element of another kind.
///
/// With no declared `element`, the kind of the first element decides it and an
/// empty sequence becomes an untyped `array[any]`.
fn build_array(
    element: Option<ElementKind>,
    items: &[JsonValue],
    field: &str,
) -> Result<Segment, VariableError> {
    let mut element = element;
    let mut segments = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let found = classify(item);
        let expected = match element {
            Some(expected) => expected,
            None => *element.insert(infer_element(found, field)?),
        };
        if !accepts(expected, found) {
            return Err(VariableError::HeterogeneousArray {
                field: field.to_string(),
                expected: expected.to_string(),
                index,
                found,
            });
        }
        let item_field = element_path(field, index);
        let segment = match expected {
            ElementKind::String => Segment::String(build_text(item, found, &item_field)?),
            ElementKind::Number => build_number(item, found, &item_field)?,
            ElementKind::Object => build_object(item, found, &item_field)?,
            ElementKind::File => build_file(item, found, &item_field)?,
        };
        segments.push(segment);
    }
    let array = match element {
        Some(element) => ArraySegment::new(element, segments),
        None => ArraySegment::untyped(),
    };
    Ok(Segment::Array(array))
}
