//! Common test utilities for building raw variable mappings and file descriptors.
use segments::prelude::*;
use serde_json::{Map, Value as JsonValue, json};
use std::sync::atomic::{AtomicUsize, Ordering};

/// A complete image descriptor that references a locally uploaded file.
#[allow(dead_code)]
pub fn file_descriptor_json(id: &str) -> JsonValue {
    json!({
        "id": id,
        "tenant_id": "tenant_id",
        "type": "image",
        "transfer_method": "local_file",
        "url": "url",
        "related_id": "related_id",
        "extra_config": {
            "image_config": {
                "width": 100,
                "height": 100,
            },
        },
        "filename": "filename",
        "extension": "extension",
        "mime_type": "mime_type",
    })
}

/// Unwraps a `json!` object literal into the mapping the factory consumes.
#[allow(dead_code)]
pub fn mapping(raw: JsonValue) -> Map<String, JsonValue> {
    raw.as_object().cloned().expect("test mapping must be a JSON object")
}

/// A factory that hands out `var-0`, `var-1`, ... as identifiers.
#[allow(dead_code)]
pub fn sequential_factory() -> SegmentFactory {
    let counter = AtomicUsize::new(0);
    SegmentFactory::builder()
        .with_id_generator(move || format!("var-{}", counter.fetch_add(1, Ordering::SeqCst)))
        .build()
}
