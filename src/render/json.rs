//! JSON rendering for parsed resumes.

use crate::error::{Error, Result};
use crate::model::Resume;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a resume to JSON.
pub fn to_json(resume: &Resume, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(resume),
        JsonFormat::Compact => serde_json::to_string(resume),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
