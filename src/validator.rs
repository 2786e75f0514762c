use crate::error::VariableError;
use crate::resolver::{NativeKind, element_path};
use crate::segment::{ArraySegment, Segment};
use itertools::Itertools;

/// Ceiling for the UTF-8 byte length of string and secret scalars.
pub const DEFAULT_MAX_TEXT_SIZE: usize = 5 * 1024;

/// Enforces the invariants construction alone does not cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    max_text_size: usize,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TEXT_SIZE)
    }
}

impl Validator {
    pub fn new(max_text_size: usize) -> Self {
        Self { max_text_size }
    }

    pub fn max_text_size(&self) -> usize {
        self.max_text_size
    }

    /// Walks a segment, checking text sizes, array homogeneity and file descriptors.
    pub fn validate_segment(&self, segment: &Segment, field: &str) -> Result<(), VariableError> {
        match segment {
            Segment::String(text) | Segment::Secret(text) => self.validate_text(text, field),
            Segment::File(file) => file.validate(field),
            Segment::Array(array) => self.validate_array(array, field),
            Segment::None | Segment::Integer(_) | Segment::Float(_) | Segment::Object(_) => Ok(()),
        }
    }

    /// Text exactly at the ceiling passes; anything longer is rejected, never truncated.
    pub fn validate_text(&self, text: &str, field: &str) -> Result<(), VariableError> {
        if text.len() > self.max_text_size {
            return Err(VariableError::SizeLimitExceeded {
                field: field.to_string(),
                size: text.len(),
                limit: self.max_text_size,
            });
        }
        Ok(())
    }

    fn validate_array(&self, array: &ArraySegment, field: &str) -> Result<(), VariableError> {
        let expected = array.element_kind();
        if let Some((index, item)) = array
            .iter()
            .find_position(|item| item.value_type().element_kind() != expected)
        {
            return Err(VariableError::HeterogeneousArray {
                field: field.to_string(),
                expected: expected.map(|k| k.to_string()).unwrap_or_default(),
                index,
                found: native_kind_of(item),
            });
        }

        for (index, item) in array.iter().enumerate() {
            self.validate_segment(item, &element_path(field, index))?;
        }
        Ok(())
    }

    /// A variable name must contain at least one non-whitespace character.
    pub fn validate_name<'a>(&self, name: Option<&'a str>) -> Result<&'a str, VariableError> {
        match name {
            Some(name) if !name.trim().is_empty() => Ok(name),
            _ => Err(VariableError::missing("name")),
        }
    }
}

fn native_kind_of(segment: &Segment) -> NativeKind {
    match segment {
        Segment::None => NativeKind::Null,
        Segment::String(_) | Segment::Secret(_) => NativeKind::String,
        Segment::Integer(_) => NativeKind::Integer,
        Segment::Float(_) => NativeKind::Float,
        Segment::Object(_) | Segment::File(_) => NativeKind::Object,
        Segment::Array(_) => NativeKind::Array,
    }
}
