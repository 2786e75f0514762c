//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! segments crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use segments::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string("variable.json")?)?;
//! let mapping = raw.as_object().ok_or("expected a mapping")?;
//!
//! let variable = build_variable_from_mapping(mapping)?;
//! println!("{} ({}): {}", variable.name(), variable.value_type(), variable.log());
//! # Ok(())
//! # }
//! ```

// Factory entry points
pub use crate::factory::{
    FactoryConfig, IdGenerator, SegmentFactory, SegmentFactoryBuilder, UuidGenerator,
    build_segment, build_variable_from_mapping,
};

// Type model
pub use crate::file::{FileDescriptor, FileExtraConfig, FileType, ImageConfig, TransferMethod};
pub use crate::segment::{
    ArraySegment, DeclaredType, ElementKind, ObjectValue, Segment, SegmentType, Value, Variable,
};

// Resolution and validation
pub use crate::resolver::{NativeKind, classify};
pub use crate::validator::{DEFAULT_MAX_TEXT_SIZE, Validator};

// Error types
pub use crate::error::{ConfigError, VariableError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
