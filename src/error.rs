use crate::resolver::NativeKind;
use thiserror::Error;

/// Errors that can occur while building a segment or variable from raw data.
///
/// Every variant carries the path of the offending field (`value`, `value[2]`,
/// `value.tenant_id`, ...) so callers can render an actionable message.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VariableError {
    #[error("Unsupported or unknown value_type: '{value_type}'")]
    UnsupportedType { value_type: String },

    #[error("Field '{field}' expected {expected}, but found {found}")]
    ShapeMismatch {
        field: String,
        expected: String,
        found: NativeKind,
    },

    #[error(
        "Array '{field}' must only contain {expected} elements, but element {index} is {found}"
    )]
    HeterogeneousArray {
        field: String,
        expected: String,
        index: usize,
        found: NativeKind,
    },

    #[error("Field '{field}' is {size} bytes, which exceeds the limit of {limit} bytes")]
    SizeLimitExceeded {
        field: String,
        size: usize,
        limit: usize,
    },

    #[error("Required field '{field}' is missing or empty")]
    MissingRequiredField { field: String },

    #[error("Malformed file descriptor at '{field}': {message}")]
    MalformedFileDescriptor { field: String, message: String },
}

impl VariableError {
    pub(crate) fn shape(field: &str, expected: impl Into<String>, found: NativeKind) -> Self {
        VariableError::ShapeMismatch {
            field: field.to_string(),
            expected: expected.into(),
            found,
        }
    }

    pub(crate) fn missing(field: impl Into<String>) -> Self {
        VariableError::MissingRequiredField {
            field: field.into(),
        }
    }

    pub(crate) fn malformed_file(field: impl Into<String>, message: impl Into<String>) -> Self {
        VariableError::MalformedFileDescriptor {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors raised while loading factory configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),
}
