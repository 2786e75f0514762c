pub mod config;
pub mod descriptor;

pub use config::*;
pub use descriptor::*;
