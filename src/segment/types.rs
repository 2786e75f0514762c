use crate::error::VariableError;
use std::fmt;
use std::str::FromStr;

/// Element kind of a homogeneous array segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    String,
    Number,
    Object,
    File,
}

impl ElementKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementKind::String => "string",
            ElementKind::Number => "number",
            ElementKind::Object => "object",
            ElementKind::File => "file",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `value_type` tag as declared in a raw variable mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclaredType {
    String,
    Number,
    Secret,
    Object,
    File,
    Array(ElementKind),
}

impl DeclaredType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclaredType::String => "string",
            DeclaredType::Number => "number",
            DeclaredType::Secret => "secret",
            DeclaredType::Object => "object",
            DeclaredType::File => "file",
            DeclaredType::Array(ElementKind::String) => "array[string]",
            DeclaredType::Array(ElementKind::Number) => "array[number]",
            DeclaredType::Array(ElementKind::Object) => "array[object]",
            DeclaredType::Array(ElementKind::File) => "array[file]",
        }
    }
}

impl FromStr for DeclaredType {
    type Err = VariableError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "string" => Ok(DeclaredType::String),
            "number" => Ok(DeclaredType::Number),
            "secret" => Ok(DeclaredType::Secret),
            "object" => Ok(DeclaredType::Object),
            "file" => Ok(DeclaredType::File),
            "array[string]" => Ok(DeclaredType::Array(ElementKind::String)),
            "array[number]" => Ok(DeclaredType::Array(ElementKind::Number)),
            "array[object]" => Ok(DeclaredType::Array(ElementKind::Object)),
            "array[file]" => Ok(DeclaredType::Array(ElementKind::File)),
            other => Err(VariableError::UnsupportedType {
                value_type: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discriminant of a constructed segment.
///
/// Unlike [`DeclaredType`], numbers are split into their integer and float
/// subtypes, and the tagless `None`/`ArrayAny` kinds produced by inference exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentType {
    None,
    String,
    Integer,
    Float,
    Secret,
    Object,
    File,
    ArrayString,
    ArrayNumber,
    ArrayObject,
    ArrayFile,
    ArrayAny,
}

impl SegmentType {
    /// The external `value_type` tag. Both number subtypes share `"number"`.
    pub fn tag(&self) -> &'static str {
        match self {
            SegmentType::None => "none",
            SegmentType::Integer | SegmentType::Float => "number",
            SegmentType::ArrayAny => "array[any]",
            other => match other.declared() {
                Some(declared) => declared.as_str(),
                None => "none",
            },
        }
    }

    /// The declared tag that rebuilds a segment of this type, if any.
    pub fn declared(&self) -> Option<DeclaredType> {
        match self {
            SegmentType::String => Some(DeclaredType::String),
            SegmentType::Integer | SegmentType::Float => Some(DeclaredType::Number),
            SegmentType::Secret => Some(DeclaredType::Secret),
            SegmentType::Object => Some(DeclaredType::Object),
            SegmentType::File => Some(DeclaredType::File),
            SegmentType::ArrayString => Some(DeclaredType::Array(ElementKind::String)),
            SegmentType::ArrayNumber => Some(DeclaredType::Array(ElementKind::Number)),
            SegmentType::ArrayObject => Some(DeclaredType::Array(ElementKind::Object)),
            SegmentType::ArrayFile => Some(DeclaredType::Array(ElementKind::File)),
            SegmentType::None | SegmentType::ArrayAny => None,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(
            self,
            SegmentType::ArrayString
                | SegmentType::ArrayNumber
                | SegmentType::ArrayObject
                | SegmentType::ArrayFile
                | SegmentType::ArrayAny
        )
    }

    /// Element kind a child segment of this type belongs to inside an array.
    pub fn element_kind(&self) -> Option<ElementKind> {
        match self {
            SegmentType::String => Some(ElementKind::String),
            SegmentType::Integer | SegmentType::Float => Some(ElementKind::Number),
            SegmentType::Object => Some(ElementKind::Object),
            SegmentType::File => Some(ElementKind::File),
            _ => None,
        }
    }
}

impl fmt::Display for SegmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
