use super::config::FileExtraConfig;
use crate::error::VariableError;
use crate::resolver::classify;
use serde_json::{Map, Value as JsonValue};
use std::fmt;
use std::str::FromStr;

/// Media kind of a referenced file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    Image,
    Document,
    Audio,
    Video,
    Custom,
}

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Image => "image",
            FileType::Document => "document",
            FileType::Audio => "audio",
            FileType::Video => "video",
            FileType::Custom => "custom",
        }
    }
}

impl FromStr for FileType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(FileType::Image),
            "document" => Ok(FileType::Document),
            "audio" => Ok(FileType::Audio),
            "video" => Ok(FileType::Video),
            "custom" => Ok(FileType::Custom),
            other => Err(format!("unknown file type '{}'", other)),
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the file is reached. Decides whether `url` or `related_id` is authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransferMethod {
    RemoteUrl,
    LocalFile,
    ToolFile,
}

impl TransferMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferMethod::RemoteUrl => "remote_url",
            TransferMethod::LocalFile => "local_file",
            TransferMethod::ToolFile => "tool_file",
        }
    }

    /// Name of the descriptor field that locates the file for this method.
    pub fn authoritative_field(&self) -> &'static str {
        match self {
            TransferMethod::RemoteUrl => "url",
            TransferMethod::LocalFile | TransferMethod::ToolFile => "related_id",
        }
    }
}

impl FromStr for TransferMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "remote_url" => Ok(TransferMethod::RemoteUrl),
            "local_file" => Ok(TransferMethod::LocalFile),
            "tool_file" => Ok(TransferMethod::ToolFile),
            other => Err(format!("unknown transfer method '{}'", other)),
        }
    }
}

impl fmt::Display for TransferMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference to an external file. Never carries the file's bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct FileDescriptor {
    pub id: String,
    pub tenant_id: String,
    pub file_type: FileType,
    pub transfer_method: TransferMethod,
    pub url: Option<String>,
    pub related_id: Option<String>,
    pub filename: Option<String>,
    pub extension: Option<String>,
    pub mime_type: Option<String>,
    pub extra_config: Option<FileExtraConfig>,
}

impl FileDescriptor {
    /// Parses a raw descriptor mapping. `field` is the path used in error messages.
    pub fn from_mapping(map: &Map<String, JsonValue>, field: &str) -> Result<Self, VariableError> {
        let id = required_str(map, "id", field)?;
        let tenant_id = required_str(map, "tenant_id", field)?;
        let file_type = required_str(map, "type", field)?
            .parse::<FileType>()
            .map_err(|e: String| VariableError::malformed_file(format!("{}.type", field), e))?;
        let transfer_method = required_str(map, "transfer_method", field)?
            .parse::<TransferMethod>()
            .map_err(|e: String| {
                VariableError::malformed_file(format!("{}.transfer_method", field), e)
            })?;

        let extra_config = match map.get("extra_config") {
            None | Some(JsonValue::Null) => None,
            Some(raw) => Some(FileExtraConfig::from_json(
                raw,
                &format!("{}.extra_config", field),
            )?),
        };

        let descriptor = Self {
            id,
            tenant_id,
            file_type,
            transfer_method,
            url: optional_str(map, "url", field)?,
            related_id: optional_str(map, "related_id", field)?,
            filename: optional_str(map, "filename", field)?,
            extension: optional_str(map, "extension", field)?,
            mime_type: optional_str(map, "mime_type", field)?,
            extra_config,
        };
        descriptor.validate(field)?;
        Ok(descriptor)
    }

    /// Checks that the field the transfer method relies on is present.
    pub fn validate(&self, field: &str) -> Result<(), VariableError> {
        if self.id.is_empty() {
            return Err(VariableError::missing(format!("{}.id", field)));
        }
        if self.tenant_id.is_empty() {
            return Err(VariableError::missing(format!("{}.tenant_id", field)));
        }
        let locator = match self.transfer_method {
            TransferMethod::RemoteUrl => self.url.as_deref(),
            TransferMethod::LocalFile | TransferMethod::ToolFile => self.related_id.as_deref(),
        };
        match locator {
            Some(value) if !value.is_empty() => Ok(()),
            _ => Err(VariableError::malformed_file(
                field,
                format!(
                    "transfer_method '{}' requires a non-empty '{}'",
                    self.transfer_method,
                    self.transfer_method.authoritative_field()
                ),
            )),
        }
    }

    /// Renders the descriptor back into its raw sub-shape.
    pub fn to_json(&self) -> JsonValue {
        let mut map = Map::new();
        map.insert("id".to_string(), JsonValue::String(self.id.clone()));
        map.insert(
            "tenant_id".to_string(),
            JsonValue::String(self.tenant_id.clone()),
        );
        map.insert(
            "type".to_string(),
            JsonValue::String(self.file_type.as_str().to_string()),
        );
        map.insert(
            "transfer_method".to_string(),
            JsonValue::String(self.transfer_method.as_str().to_string()),
        );
        let optional = [
            ("url", &self.url),
            ("related_id", &self.related_id),
            ("filename", &self.filename),
            ("extension", &self.extension),
            ("mime_type", &self.mime_type),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                map.insert(key.to_string(), JsonValue::String(value.clone()));
            }
        }
        if let Some(extra) = &self.extra_config {
            map.insert("extra_config".to_string(), extra.to_json());
        }
        JsonValue::Object(map)
    }

    /// `![filename](url)` for images, `[filename or url](url)` for everything else.
    pub fn markdown(&self) -> String {
        let url = self.url.as_deref().unwrap_or_default();
        let filename = self.filename.as_deref().unwrap_or_default();
        match self.file_type {
            FileType::Image => format!("![{}]({})", filename, url),
            _ if filename.is_empty() => format!("[{}]({})", url, url),
            _ => format!("[{}]({})", filename, url),
        }
    }
}

fn required_str(
    map: &Map<String, JsonValue>,
    key: &str,
    field: &str,
) -> Result<String, VariableError> {
    match map.get(key) {
        None | Some(JsonValue::Null) => Err(VariableError::missing(format!("{}.{}", field, key))),
        Some(JsonValue::String(s)) if s.is_empty() => {
            Err(VariableError::missing(format!("{}.{}", field, key)))
        }
        Some(JsonValue::String(s)) => Ok(s.clone()),
        Some(other) => Err(VariableError::malformed_file(
            format!("{}.{}", field, key),
            format!("expected a string, found {}", classify(other)),
        )),
    }
}

fn optional_str(
    map: &Map<String, JsonValue>,
    key: &str,
    field: &str,
) -> Result<Option<String>, VariableError> {
    match map.get(key) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(VariableError::malformed_file(
            format!("{}.{}", field, key),
            format!("expected a string, found {}", classify(other)),
        )),
    }
}
