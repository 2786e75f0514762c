//! # Segments - Typed Values from Untyped Data
//!
//! **Segments** converts untyped key/value data, as received from configuration,
//! API payloads or workflow definitions, into a closed set of strongly-typed,
//! validated, immutable values. A *segment* is a value tagged with one
//! [`SegmentType`](segment::SegmentType); a *variable* is a segment with an
//! identifier, a name and an optional description.
//!
//! ## Core Workflow
//!
//! 1.  **Receive Raw Data**: Parse your payload into a `serde_json::Value`.
//! 2.  **Configure a Factory** (optional): Use `SegmentFactory::builder()` to set the
//!     text size ceiling or plug in your own identifier generator.
//! 3.  **Build**: Call `build_variable_from_mapping` for declared, named values or
//!     `build_segment` for ad-hoc values whose type is inferred from their shape.
//! 4.  **Consume**: Dispatch on `value_type()` and read the payload through the
//!     typed accessors. Use `log()` when rendering values that may hold secrets.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use segments::prelude::*;
//! use serde_json::json;
//!
//! fn main() -> Result<()> {
//!     let factory = SegmentFactory::builder()
//!         .with_max_text_size(5 * 1024)
//!         .with_id_generator(|| "var-0001".to_string())
//!         .build();
//!
//!     let raw = json!({
//!         "name": "api_key",
//!         "description": "Credentials for the upstream service",
//!         "value_type": "secret",
//!         "value": "sk-0123456789abcdef",
//!     });
//!     let mapping = raw.as_object().ok_or("expected a mapping")?;
//!     let variable = factory.build_variable_from_mapping(mapping)?;
//!
//!     assert_eq!(variable.id(), "var-0001");
//!     assert_eq!(variable.value_type(), SegmentType::Secret);
//!     println!("{} = {}", variable.name(), variable.log()); // sk-012************ef
//!
//!     let segment = factory.build_segment(&json!([1, 2.5, 3]))?;
//!     assert_eq!(segment.value_type(), SegmentType::ArrayNumber);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod factory;
pub mod file;
pub mod prelude;
pub mod resolver;
pub mod segment;
pub mod validator;
