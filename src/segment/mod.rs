pub mod model;
pub mod types;
pub mod value;
pub mod variable;

pub use model::*;
pub use types::*;
pub use value::{ObjectValue, Value};
pub use variable::*;
