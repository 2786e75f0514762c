//! Tests for segment accessors, rendering and serialization.
mod common;
use common::*;
use segments::prelude::*;
use serde_json::json;

fn secret(value: &str) -> Variable {
    build_variable_from_mapping(&mapping(json!({
        "value_type": "secret",
        "name": "token",
        "value": value,
    })))
    .expect("Failed to build")
}

#[test]
fn test_secret_log_is_obfuscated() {
    assert_eq!(secret("secret_value").log(), "secret************ue");
    assert_eq!(secret("short").log(), "*".repeat(20));
    assert_eq!(secret("").log(), "");
    assert_eq!(secret("secret_value").text(), "secret_value");
}

#[test]
fn test_text_rendering() {
    assert_eq!(build_segment(&json!(42)).unwrap().text(), "42");
    assert_eq!(build_segment(&json!(2.5)).unwrap().text(), "2.5");
    assert_eq!(build_segment(&json!(null)).unwrap().text(), "");
    assert_eq!(build_segment(&json!(["a", "b"])).unwrap().text(), r#"["a","b"]"#);
    assert_eq!(
        build_segment(&json!({"b": 1, "a": null})).unwrap().text(),
        r#"{"a":null,"b":1}"#
    );
}

#[test]
fn test_markdown_rendering() {
    let list = build_segment(&json!(["a", "b"])).unwrap();
    assert_eq!(list.markdown(), "- a\n- b");

    let files = build_variable_from_mapping(&mapping(json!({
        "value_type": "array[file]",
        "name": "images",
        "value": [file_descriptor_json("file-1"), file_descriptor_json("file-2")],
    })))
    .unwrap();
    assert_eq!(files.markdown(), "![filename](url)\n![filename](url)");
}

#[test]
fn test_value_accessor_matches_payload() {
    let object = build_segment(&json!({"key1": null, "key2": [1, 2.5]})).unwrap();
    let value = object.value();
    let map = value.as_object().unwrap();

    assert!(map.get("key1").unwrap().is_null());
    assert_eq!(
        map.get("key2").and_then(Value::as_array),
        Some(&[Value::Integer(1), Value::Float(2.5)][..])
    );

    let file = build_variable_from_mapping(&mapping(json!({
        "value_type": "file",
        "name": "f",
        "value": file_descriptor_json("file-1"),
    })))
    .unwrap();
    assert_eq!(file.value().to_json(), file_descriptor_json("file-1"));
}

#[test]
fn test_array_items_are_individually_addressable() {
    let array = build_segment(&json!([1, 2.5, 3])).unwrap();
    let items = array.as_array().unwrap();

    assert_eq!(items.element_kind(), Some(ElementKind::Number));
    assert_eq!(items.get(1).map(Segment::value_type), Some(SegmentType::Float));
    assert_eq!(items.get(3), None);
    let total: f64 = items.iter().filter_map(Segment::as_f64).sum();
    assert_eq!(total, 6.5);
}

#[test]
fn test_variable_serializes_as_mapping() {
    let factory = sequential_factory();
    let variable = factory
        .build_variable_from_mapping(&mapping(json!({
            "value_type": "number",
            "name": "count",
            "description": "How many",
            "value": 3,
        })))
        .unwrap();

    assert_eq!(
        serde_json::to_value(&variable).unwrap(),
        json!({
            "id": "var-0",
            "name": "count",
            "description": "How many",
            "value_type": "number",
            "value": 3,
        })
    );
    assert_eq!(serde_json::to_string(variable.segment()).unwrap(), "3");
}

#[test]
fn test_variable_dereferences_to_segment() {
    let variable = build_variable_from_mapping(&mapping(json!({
        "value_type": "string",
        "name": "greeting",
        "value": "hello",
    })))
    .unwrap();

    let segment: &Segment = &variable;
    assert_eq!(segment, variable.segment());
    assert_eq!(variable.clone().into_segment(), Segment::String("hello".to_string()));
}
