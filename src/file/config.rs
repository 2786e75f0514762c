use crate::error::VariableError;
use crate::resolver::classify;
use crate::segment::value::{ObjectValue, object_from_json, object_to_json};
use serde_json::{Map, Value as JsonValue};

/// Image-specific constraints carried in `extra_config.image_config`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub detail: Option<String>,
}

/// The free-form `extra_config` sub-structure of a file descriptor.
///
/// Only known sub-keys are type-checked; everything else is kept as-is in `other`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileExtraConfig {
    pub image_config: Option<ImageConfig>,
    pub other: ObjectValue,
}

impl FileExtraConfig {
    pub(crate) fn from_json(raw: &JsonValue, field: &str) -> Result<Self, VariableError> {
        let map = raw.as_object().ok_or_else(|| {
            VariableError::malformed_file(
                field,
                format!("extra_config must be an object, found {}", classify(raw)),
            )
        })?;

        let image_config = match map.get("image_config") {
            None | Some(JsonValue::Null) => None,
            Some(raw) => Some(parse_image_config(raw, &format!("{}.image_config", field))?),
        };

        let mut rest = map.clone();
        rest.remove("image_config");

        Ok(Self {
            image_config,
            other: object_from_json(&rest),
        })
    }

    pub fn to_json(&self) -> JsonValue {
        let mut map = object_to_json(&self.other);
        if let Some(image) = &self.image_config {
            let mut image_map = Map::new();
            if let Some(width) = image.width {
                image_map.insert("width".to_string(), width.into());
            }
            if let Some(height) = image.height {
                image_map.insert("height".to_string(), height.into());
            }
            if let Some(detail) = &image.detail {
                image_map.insert("detail".to_string(), JsonValue::String(detail.clone()));
            }
            map.insert("image_config".to_string(), JsonValue::Object(image_map));
        }
        JsonValue::Object(map)
    }
}

fn parse_image_config(raw: &JsonValue, field: &str) -> Result<ImageConfig, VariableError> {
    let map = raw.as_object().ok_or_else(|| {
        VariableError::malformed_file(
            field,
            format!("image_config must be an object, found {}", classify(raw)),
        )
    })?;

    Ok(ImageConfig {
        width: parse_dimension(map, "width", field)?,
        height: parse_dimension(map, "height", field)?,
        detail: match map.get("detail") {
            None | Some(JsonValue::Null) => None,
            Some(JsonValue::String(s)) => Some(s.clone()),
            Some(other) => {
                return Err(VariableError::malformed_file(
                    format!("{}.detail", field),
                    format!("expected a string, found {}", classify(other)),
                ));
            }
        },
    })
}

fn parse_dimension(
    map: &Map<String, JsonValue>,
    key: &str,
    field: &str,
) -> Result<Option<u32>, VariableError> {
    match map.get(key) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(raw) => raw
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .map(Some)
            .ok_or_else(|| {
                VariableError::malformed_file(
                    format!("{}.{}", field, key),
                    format!("expected a non-negative integer, found {}", raw),
                )
            }),
    }
}
