use crate::error::ConfigError;
use crate::validator::DEFAULT_MAX_TEXT_SIZE;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Tunables for a [`SegmentFactory`](super::SegmentFactory).
///
/// Missing keys fall back to their defaults, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    /// Maximum UTF-8 byte length of string and secret values.
    pub max_text_size: usize,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            max_text_size: DEFAULT_MAX_TEXT_SIZE,
        }
    }
}

impl FactoryConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }
}
