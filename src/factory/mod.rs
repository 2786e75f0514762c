//! Entry points that turn raw, externally supplied data into segments and variables.
//!
//! ```rust
//! use segments::factory::{build_segment, build_variable_from_mapping};
//! use segments::segment::SegmentType;
//! use serde_json::json;
//!
//! let mapping = json!({"value_type": "number", "name": "ratio", "value": 3.14});
//! let variable = build_variable_from_mapping(mapping.as_object().unwrap()).unwrap();
//! assert_eq!(variable.value_type(), SegmentType::Float);
//!
//! let segment = build_segment(&json!({"key1": null})).unwrap();
//! assert_eq!(segment.value_type(), SegmentType::Object);
//! ```

mod config;
mod identity;

pub use config::FactoryConfig;
pub use identity::{IdGenerator, UuidGenerator};

use crate::error::VariableError;
use crate::resolver::{classify, resolve_declared, resolve_inferred};
use crate::segment::{DeclaredType, Segment, Variable};
use crate::validator::Validator;
use serde_json::{Map, Value as JsonValue};
use std::sync::LazyLock;
use tracing::{debug, trace};

static DEFAULT_FACTORY: LazyLock<SegmentFactory> = LazyLock::new(SegmentFactory::default);

/// Builds a segment from an untyped value using the default factory.
pub fn build_segment(raw: &JsonValue) -> Result<Segment, VariableError> {
    DEFAULT_FACTORY.build_segment(raw)
}

/// Builds a variable from a raw mapping using the default factory.
pub fn build_variable_from_mapping(
    mapping: &Map<String, JsonValue>,
) -> Result<Variable, VariableError> {
    DEFAULT_FACTORY.build_variable_from_mapping(mapping)
}

/// Constructs validated segments and variables.
///
/// A factory holds no mutable state and can be shared across threads.
pub struct SegmentFactory {
    validator: Validator,
    id_generator: Box<dyn IdGenerator>,
}

pub struct SegmentFactoryBuilder {
    config: FactoryConfig,
    id_generator: Box<dyn IdGenerator>,
}

impl Default for SegmentFactoryBuilder {
    fn default() -> Self {
        Self {
            config: FactoryConfig::default(),
            id_generator: Box::new(UuidGenerator),
        }
    }
}

impl SegmentFactoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_config(mut self, config: FactoryConfig) -> Self {
        self.config = config;
        self
    }
    pub fn with_max_text_size(mut self, max_text_size: usize) -> Self {
        self.config.max_text_size = max_text_size;
        self
    }
    pub fn with_id_generator(mut self, id_generator: impl IdGenerator + 'static) -> Self {
        self.id_generator = Box::new(id_generator);
        self
    }
    pub fn build(self) -> SegmentFactory {
        SegmentFactory {
            validator: Validator::new(self.config.max_text_size),
            id_generator: self.id_generator,
        }
    }
}

impl Default for SegmentFactory {
    fn default() -> Self {
        SegmentFactoryBuilder::default().build()
    }
}

impl SegmentFactory {
    pub fn builder() -> SegmentFactoryBuilder {
        SegmentFactoryBuilder::new()
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Infers the segment type from the shape of `raw`. Never assigns identity.
    pub fn build_segment(&self, raw: &JsonValue) -> Result<Segment, VariableError> {
        let segment = resolve_inferred(raw, "value")
            .and_then(|segment| {
                self.validator.validate_segment(&segment, "value")?;
                Ok(segment)
            })
            .inspect_err(|e| debug!(error = %e, "Rejected raw segment value"))?;
        debug!(value_type = %segment.value_type(), "Built segment");
        Ok(segment)
    }

    /// Builds a variable from a mapping carrying `value_type`, `name`, `value`,
    /// and optionally `id` and `description`.
    pub fn build_variable_from_mapping(
        &self,
        mapping: &Map<String, JsonValue>,
    ) -> Result<Variable, VariableError> {
        let variable = self
            .read_variable(mapping)
            .inspect_err(|e| debug!(error = %e, "Rejected variable mapping"))?;
        debug!(
            id = variable.id(),
            name = variable.name(),
            value_type = %variable.value_type(),
            "Built variable"
        );
        Ok(variable)
    }

    fn read_variable(&self, mapping: &Map<String, JsonValue>) -> Result<Variable, VariableError> {
        let declared: DeclaredType = read_str(mapping, "value_type")?
            .ok_or_else(|| VariableError::missing("value_type"))?
            .parse()?;
        let name = self.validator.validate_name(read_str(mapping, "name")?)?;
        let description = read_str(mapping, "description")?.map(str::to_string);

        let raw = mapping.get("value").unwrap_or(&JsonValue::Null);
        let segment = resolve_declared(declared, raw, "value")?;
        self.validator.validate_segment(&segment, "value")?;

        let id = match read_str(mapping, "id")? {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => {
                let id = self.id_generator.generate();
                trace!(id = %id, name, "Generated variable id");
                id
            }
        };

        Ok(Variable::new(id, name.to_string(), description, segment))
    }
}

/// Reads an optional string field. Null counts as absent; other shapes are rejected.
fn read_str<'a>(
    mapping: &'a Map<String, JsonValue>,
    key: &str,
) -> Result<Option<&'a str>, VariableError> {
    match mapping.get(key) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) => Ok(Some(s)),
        Some(other) => Err(VariableError::shape(key, "string", classify(other))),
    }
}
