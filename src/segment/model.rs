use super::types::{ElementKind, SegmentType};
use super::value::{ObjectValue, Value, float_to_json, object_to_json};
use crate::file::FileDescriptor;
use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;

/// An immutable, typed value.
///
/// Instances are produced by the factory, which guarantees that the payload
/// agrees with the discriminant. Accessors therefore never re-validate.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    None,
    String(String),
    /// Text-shaped like `String`, tagged so consumers can redact it.
    Secret(String),
    Integer(i64),
    Float(f64),
    Object(ObjectValue),
    File(FileDescriptor),
    Array(ArraySegment),
}

/// An ordered, homogeneous sequence of child segments.
#[derive(Debug, Clone, PartialEq)]
pub struct ArraySegment {
    element: Option<ElementKind>,
    items: Vec<Segment>,
}

impl ArraySegment {
    /// Callers must only pass items whose element kind is `element`.
    pub(crate) fn new(element: ElementKind, items: Vec<Segment>) -> Self {
        Self {
            element: Some(element),
            items,
        }
    }

    /// An empty sequence with no element kind, produced by inference.
    pub(crate) fn untyped() -> Self {
        Self {
            element: None,
            items: Vec::new(),
        }
    }

    pub fn element_kind(&self) -> Option<ElementKind> {
        self.element
    }

    pub fn items(&self) -> &[Segment] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.items.iter()
    }

    pub fn value_type(&self) -> SegmentType {
        match self.element {
            Some(ElementKind::String) => SegmentType::ArrayString,
            Some(ElementKind::Number) => SegmentType::ArrayNumber,
            Some(ElementKind::Object) => SegmentType::ArrayObject,
            Some(ElementKind::File) => SegmentType::ArrayFile,
            None => SegmentType::ArrayAny,
        }
    }
}

impl<'a> IntoIterator for &'a ArraySegment {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Segment {
    pub fn value_type(&self) -> SegmentType {
        match self {
            Segment::None => SegmentType::None,
            Segment::String(_) => SegmentType::String,
            Segment::Secret(_) => SegmentType::Secret,
            Segment::Integer(_) => SegmentType::Integer,
            Segment::Float(_) => SegmentType::Float,
            Segment::Object(_) => SegmentType::Object,
            Segment::File(_) => SegmentType::File,
            Segment::Array(array) => array.value_type(),
        }
    }

    /// The underlying payload as a native value.
    ///
    /// File descriptors are rendered as objects in their raw sub-shape and
    /// arrays as the sequence of their children's values.
    pub fn value(&self) -> Value {
        match self {
            Segment::None => Value::Null,
            Segment::String(s) | Segment::Secret(s) => Value::String(s.clone()),
            Segment::Integer(i) => Value::Integer(*i),
            Segment::Float(f) => Value::Float(*f),
            Segment::Object(map) => Value::Object(map.clone()),
            Segment::File(file) => Value::from_json(&file.to_json()),
            Segment::Array(array) => Value::Array(array.iter().map(Segment::value).collect()),
        }
    }

    pub fn to_json(&self) -> JsonValue {
        match self {
            Segment::None => JsonValue::Null,
            Segment::String(s) | Segment::Secret(s) => JsonValue::String(s.clone()),
            Segment::Integer(i) => JsonValue::Number((*i).into()),
            Segment::Float(f) => float_to_json(*f),
            Segment::Object(map) => JsonValue::Object(object_to_json(map)),
            Segment::File(file) => file.to_json(),
            Segment::Array(array) => JsonValue::Array(array.iter().map(Segment::to_json).collect()),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Segment::None)
    }

    /// Text of a string or secret segment.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Segment::String(s) | Segment::Secret(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Segment::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Segment::Integer(i) => Some(*i as f64),
            Segment::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ObjectValue> {
        match self {
            Segment::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileDescriptor> {
        match self {
            Segment::File(file) => Some(file),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArraySegment> {
        match self {
            Segment::Array(array) => Some(array),
            _ => None,
        }
    }

    /// Plain text rendering. Secrets are returned verbatim.
    pub fn text(&self) -> String {
        match self {
            Segment::None => String::new(),
            Segment::String(s) | Segment::Secret(s) => s.clone(),
            Segment::File(file) => file.markdown(),
            Segment::Array(array) if array.element_kind() == Some(ElementKind::File) => {
                array.iter().map(Segment::text).collect::<Vec<_>>().join("\n")
            }
            other => other.value().to_string(),
        }
    }

    /// Text rendering safe for logs: secret values are obfuscated.
    pub fn log(&self) -> String {
        match self {
            Segment::Secret(s) => obfuscate(s),
            other => other.text(),
        }
    }

    pub fn markdown(&self) -> String {
        match self {
            Segment::Array(array) => array
                .iter()
                .map(|item| match item {
                    Segment::File(file) => file.markdown(),
                    other => format!("- {}", other.markdown()),
                })
                .collect::<Vec<_>>()
                .join("\n"),
            other => other.text(),
        }
    }
}

/// Keeps the first 6 and last 2 characters of long secrets; short ones are fully masked.
fn obfuscate(secret: &str) -> String {
    if secret.is_empty() {
        return String::new();
    }
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(20);
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}{}{}", head, "*".repeat(12), tail)
}

impl Serialize for Segment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
