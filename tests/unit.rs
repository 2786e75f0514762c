//! Unit tests for the type model, shape classification and validation rules.
use segments::prelude::*;
use serde_json::json;

#[test]
fn test_value_display() {
    assert_eq!(format!("{}", Value::Integer(42)), "42");
    assert_eq!(format!("{}", Value::Float(2.0)), "2.0");
    assert_eq!(format!("{}", Value::Bool(true)), "true");
    assert_eq!(format!("{}", Value::Null), "null");
    assert_eq!(format!("{}", Value::from_json(&json!([1, "a"]))), r#"[1,"a"]"#);
}

#[test]
fn test_value_keeps_number_subtypes() {
    let value = Value::from_json(&json!({"int": 1, "float": 1.0, "nested": [{"x": 2}]}));
    let map = value.as_object().unwrap();

    assert_eq!(map.get("int"), Some(&Value::Integer(1)));
    assert_eq!(map.get("float"), Some(&Value::Float(1.0)));
    assert_eq!(value.to_json(), json!({"int": 1, "float": 1.0, "nested": [{"x": 2}]}));
}

#[test]
fn test_classify() {
    assert_eq!(classify(&json!(null)), NativeKind::Null);
    assert_eq!(classify(&json!(false)), NativeKind::Bool);
    assert_eq!(classify(&json!(42)), NativeKind::Integer);
    assert_eq!(classify(&json!(-42)), NativeKind::Integer);
    assert_eq!(classify(&json!(u64::MAX)), NativeKind::Integer);
    assert_eq!(classify(&json!(3.5)), NativeKind::Float);
    assert_eq!(classify(&json!(2.0)), NativeKind::Float);
    assert_eq!(classify(&json!("2")), NativeKind::String);
    assert_eq!(classify(&json!([])), NativeKind::Array);
    assert_eq!(classify(&json!({})), NativeKind::Object);
}

#[test]
fn test_integer_out_of_range_is_rejected() {
    let raw = json!({"value_type": "number", "name": "big", "value": u64::MAX});
    let err = build_variable_from_mapping(raw.as_object().unwrap()).unwrap_err();

    assert!(matches!(
        err,
        VariableError::ShapeMismatch { found: NativeKind::Integer, .. }
    ));
}

#[test]
fn test_declared_type_tags() {
    let tags = [
        "string",
        "number",
        "secret",
        "object",
        "file",
        "array[string]",
        "array[number]",
        "array[object]",
        "array[file]",
    ];
    for tag in tags {
        let declared: DeclaredType = tag.parse().unwrap();
        assert_eq!(declared.to_string(), tag);
    }

    assert!(matches!(
        "array[any]".parse::<DeclaredType>(),
        Err(VariableError::UnsupportedType { .. })
    ));
    assert!(matches!(
        "String".parse::<DeclaredType>(),
        Err(VariableError::UnsupportedType { .. })
    ));
}

#[test]
fn test_segment_type_tags() {
    assert_eq!(SegmentType::Integer.tag(), "number");
    assert_eq!(SegmentType::Float.tag(), "number");
    assert_eq!(SegmentType::ArrayFile.tag(), "array[file]");
    assert_eq!(SegmentType::None.tag(), "none");
    assert_eq!(SegmentType::ArrayAny.tag(), "array[any]");
    assert_eq!(SegmentType::ArrayAny.declared(), None);
    assert_eq!(SegmentType::Float.declared(), Some(DeclaredType::Number));
    assert!(SegmentType::ArrayObject.is_array());
    assert_eq!(SegmentType::Integer.element_kind(), Some(ElementKind::Number));
    assert_eq!(SegmentType::Secret.element_kind(), None);
}

#[test]
fn test_validator_text_limit_counts_bytes() {
    let validator = Validator::default();
    assert_eq!(validator.max_text_size(), 5120);

    assert!(validator.validate_text(&"a".repeat(5120), "value").is_ok());
    // two bytes per character
    let accented = "é".repeat(2561);
    assert_eq!(
        validator.validate_text(&accented, "value").unwrap_err(),
        VariableError::SizeLimitExceeded {
            field: "value".to_string(),
            size: 5122,
            limit: 5120,
        }
    );
}

#[test]
fn test_validator_name() {
    let validator = Validator::default();
    assert_eq!(validator.validate_name(Some("name")), Ok("name"));
    assert!(validator.validate_name(Some("")).is_err());
    assert!(validator.validate_name(None).is_err());
}

#[test]
fn test_validator_walks_segments() {
    let validator = Validator::new(3);
    let segment = build_segment(&json!(["abc", "abcd"])).unwrap();

    assert!(matches!(
        validator.validate_segment(&segment, "items"),
        Err(VariableError::SizeLimitExceeded { ref field, .. }) if field == "items[1]"
    ));
    assert!(validator.validate_segment(&Segment::Integer(123456), "n").is_ok());
    assert!(validator.validate_segment(&Segment::Object(ObjectValue::default()), "o").is_ok());
}

#[test]
fn test_error_display() {
    let err = VariableError::HeterogeneousArray {
        field: "value".to_string(),
        expected: "string".to_string(),
        index: 1,
        found: NativeKind::Integer,
    };
    assert!(err.to_string().contains("value"));
    assert!(err.to_string().contains("string"));
    assert!(err.to_string().contains("integer"));

    let err = VariableError::UnsupportedType {
        value_type: "unknown".to_string(),
    };
    assert!(err.to_string().contains("'unknown'"));

    let err = VariableError::MalformedFileDescriptor {
        field: "value.type".to_string(),
        message: "unknown file type 'x'".to_string(),
    };
    assert!(err.to_string().contains("value.type"));
}
