use super::model::Segment;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value as JsonValue};
use std::ops::Deref;

/// A named, addressable segment.
///
/// Variables are never mutated in place; the owning scope replaces them with a
/// freshly built instance instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    id: String,
    name: String,
    description: Option<String>,
    segment: Segment,
}

impl Variable {
    pub(crate) fn new(
        id: String,
        name: String,
        description: Option<String>,
        segment: Segment,
    ) -> Self {
        Self {
            id,
            name,
            description,
            segment,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn segment(&self) -> &Segment {
        &self.segment
    }

    pub fn into_segment(self) -> Segment {
        self.segment
    }

    /// Renders the raw mapping this variable can be rebuilt from.
    ///
    /// Feeding the result back into `build_variable_from_mapping` yields an
    /// equal variable. Segments without a declarable tag (`none`, `array[any]`)
    /// never back a variable, so the tag is always one the factory accepts.
    pub fn to_mapping(&self) -> Map<String, JsonValue> {
        let mut mapping = Map::new();
        mapping.insert("id".to_string(), JsonValue::String(self.id.clone()));
        mapping.insert("name".to_string(), JsonValue::String(self.name.clone()));
        if let Some(description) = &self.description {
            mapping.insert(
                "description".to_string(),
                JsonValue::String(description.clone()),
            );
        }
        mapping.insert(
            "value_type".to_string(),
            JsonValue::String(self.segment.value_type().tag().to_string()),
        );
        mapping.insert("value".to_string(), self.segment.to_json());
        mapping
    }
}

impl Deref for Variable {
    type Target = Segment;

    fn deref(&self) -> &Segment {
        &self.segment
    }
}

impl AsRef<Segment> for Variable {
    fn as_ref(&self) -> &Segment {
        &self.segment
    }
}

impl Serialize for Variable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_mapping().serialize(serializer)
    }
}
