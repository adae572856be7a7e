//! Rendering a finished matrix hierarchy
//!
//! - `tree` - console tree with optional colors
//! - `json` - nested JSON

mod config;
mod json;
mod tree;
mod utils;

pub use config::OutputConfig;
pub use json::{print_json, to_json};
pub use tree::TreeFormatter;
pub use utils::describe;
