//! Tests for file descriptor parsing and validation.
mod common;
use common::*;
use segments::prelude::*;
use serde_json::json;

fn build_file(value: serde_json::Value) -> std::result::Result<Variable, VariableError> {
    build_variable_from_mapping(&mapping(json!({
        "value_type": "file",
        "name": "attachment",
        "value": value,
    })))
}

#[test]
fn test_descriptor_fields_are_parsed() {
    let variable = build_file(file_descriptor_json("file-1")).expect("Failed to build");
    let file = variable.as_file().unwrap();

    assert_eq!(file.tenant_id, "tenant_id");
    assert_eq!(file.url.as_deref(), Some("url"));
    assert_eq!(file.related_id.as_deref(), Some("related_id"));
    assert_eq!(file.filename.as_deref(), Some("filename"));
    assert_eq!(file.extension.as_deref(), Some("extension"));
    assert_eq!(file.mime_type.as_deref(), Some("mime_type"));

    let image = file
        .extra_config
        .as_ref()
        .and_then(|extra| extra.image_config.as_ref())
        .unwrap();
    assert_eq!(image.width, Some(100));
    assert_eq!(image.height, Some(100));
    assert_eq!(image.detail, None);
}

#[test]
fn test_missing_required_field() {
    for field in ["id", "tenant_id", "type", "transfer_method"] {
        let mut descriptor = file_descriptor_json("file-1");
        descriptor.as_object_mut().unwrap().remove(field);

        assert_eq!(
            build_file(descriptor).unwrap_err(),
            VariableError::MissingRequiredField {
                field: format!("value.{}", field)
            }
        );
    }
}

#[test]
fn test_transfer_method_decides_authoritative_field() {
    let remote = json!({
        "id": "file-1",
        "tenant_id": "tenant",
        "type": "document",
        "transfer_method": "remote_url",
        "url": "https://example.com/report.pdf",
    });
    assert!(build_file(remote).is_ok());

    let remote_without_url = json!({
        "id": "file-1",
        "tenant_id": "tenant",
        "type": "document",
        "transfer_method": "remote_url",
        "related_id": "upload-1",
    });
    assert!(matches!(
        build_file(remote_without_url),
        Err(VariableError::MalformedFileDescriptor { ref field, .. }) if field == "value"
    ));

    let local = json!({
        "id": "file-1",
        "tenant_id": "tenant",
        "type": "audio",
        "transfer_method": "tool_file",
        "related_id": "tool-file-1",
    });
    assert!(build_file(local).is_ok());

    let local_with_empty_related_id = json!({
        "id": "file-1",
        "tenant_id": "tenant",
        "type": "audio",
        "transfer_method": "local_file",
        "url": "https://example.com/a.mp3",
        "related_id": "",
    });
    assert!(matches!(
        build_file(local_with_empty_related_id),
        Err(VariableError::MalformedFileDescriptor { .. })
    ));
}

#[test]
fn test_unknown_enum_values_are_malformed() {
    let mut descriptor = file_descriptor_json("file-1");
    descriptor["type"] = json!("spreadsheet");
    assert!(matches!(
        build_file(descriptor),
        Err(VariableError::MalformedFileDescriptor { ref field, .. }) if field == "value.type"
    ));

    let mut descriptor = file_descriptor_json("file-1");
    descriptor["transfer_method"] = json!("carrier_pigeon");
    assert!(matches!(
        build_file(descriptor),
        Err(VariableError::MalformedFileDescriptor { ref field, .. })
            if field == "value.transfer_method"
    ));
}

#[test]
fn test_mistyped_fields_are_malformed() {
    let mut descriptor = file_descriptor_json("file-1");
    descriptor["filename"] = json!(12);
    assert!(matches!(
        build_file(descriptor),
        Err(VariableError::MalformedFileDescriptor { ref field, .. }) if field == "value.filename"
    ));

    let mut descriptor = file_descriptor_json("file-1");
    descriptor["extra_config"]["image_config"]["width"] = json!("wide");
    assert!(matches!(
        build_file(descriptor),
        Err(VariableError::MalformedFileDescriptor { ref field, .. })
            if field == "value.extra_config.image_config.width"
    ));

    let mut descriptor = file_descriptor_json("file-1");
    descriptor["extra_config"]["image_config"]["height"] = json!(-1);
    assert!(matches!(
        build_file(descriptor),
        Err(VariableError::MalformedFileDescriptor { .. })
    ));

    let mut descriptor = file_descriptor_json("file-1");
    descriptor["extra_config"] = json!([]);
    assert!(matches!(
        build_file(descriptor),
        Err(VariableError::MalformedFileDescriptor { ref field, .. })
            if field == "value.extra_config"
    ));
}

#[test]
fn test_unknown_extra_config_keys_are_preserved() {
    let mut descriptor = file_descriptor_json("file-1");
    descriptor["extra_config"]["document_config"] = json!({"pages": 3, "ocr": true});
    let variable = build_file(descriptor).expect("Failed to build");
    let extra = variable.as_file().unwrap().extra_config.as_ref().unwrap();

    let document = extra.other.get("document_config").and_then(Value::as_object).unwrap();
    assert_eq!(document.get("pages"), Some(&Value::Integer(3)));
    assert_eq!(document.get("ocr"), Some(&Value::Bool(true)));
}

#[test]
fn test_file_value_must_be_a_mapping() {
    assert!(matches!(
        build_file(json!("file-1")),
        Err(VariableError::ShapeMismatch { found: NativeKind::String, .. })
    ));
}

#[test]
fn test_array_file_errors_point_at_the_element() {
    let mut second = file_descriptor_json("file-2");
    second.as_object_mut().unwrap().remove("id");
    let raw = mapping(json!({
        "value_type": "array[file]",
        "name": "attachments",
        "value": [file_descriptor_json("file-1"), second],
    }));
    assert_eq!(
        build_variable_from_mapping(&raw).unwrap_err(),
        VariableError::MissingRequiredField {
            field: "value[1].id".to_string()
        }
    );

    let raw = mapping(json!({
        "value_type": "array[file]",
        "name": "attachments",
        "value": [file_descriptor_json("file-1"), "file-2"],
    }));
    assert!(matches!(
        build_variable_from_mapping(&raw),
        Err(VariableError::HeterogeneousArray { index: 1, found: NativeKind::String, .. })
    ));
}

#[test]
fn test_descriptor_round_trips_through_json() {
    let raw = file_descriptor_json("file-1");
    let parsed = FileDescriptor::from_mapping(raw.as_object().unwrap(), "value").unwrap();

    assert_eq!(parsed.to_json(), raw);
    let reparsed = FileDescriptor::from_mapping(parsed.to_json().as_object().unwrap(), "value");
    assert_eq!(reparsed.unwrap(), parsed);
}

#[test]
fn test_descriptor_markdown() {
    let raw = file_descriptor_json("file-1");
    let image = FileDescriptor::from_mapping(raw.as_object().unwrap(), "value").unwrap();
    assert_eq!(image.markdown(), "![filename](url)");

    let document = FileDescriptor {
        file_type: FileType::Document,
        filename: None,
        ..image
    };
    assert_eq!(document.markdown(), "[url](url)");
}
