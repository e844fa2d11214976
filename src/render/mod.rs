//! Rendering module for dumping parsed resumes.

mod json;

pub use json::{to_json, JsonFormat};
