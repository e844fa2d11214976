//! Input format detection from file paths.

use crate::error::{Error, Result};
use std::path::Path;

/// Resume source formats recognized by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// `.md`, `.markdown`, `.mdown`, `.mkd`
    Markdown,
    /// `.yaml`, `.yml`
    Yaml,
    /// `.json`
    Json,
    /// `.toml`
    Toml,
}

impl InputFormat {
    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            InputFormat::Markdown => "markdown",
            InputFormat::Yaml => "yaml",
            InputFormat::Json => "json",
            InputFormat::Toml => "toml",
        }
    }

    /// Map a file extension (without the dot) to a format, ignoring case.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "md" | "markdown" | "mdown" | "mkd" => Some(InputFormat::Markdown),
            "yaml" | "yml" => Some(InputFormat::Yaml),
            "json" => Some(InputFormat::Json),
            "toml" => Some(InputFormat::Toml),
            _ => None,
        }
    }
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detect the input format from a file path's extension.
///
/// The file itself is not opened.
///
/// # Example
/// ```
/// use mdresume::detect::{detect_format_from_path, InputFormat};
///
/// let format = detect_format_from_path("resume.MD").unwrap();
/// assert_eq!(format, InputFormat::Markdown);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<InputFormat> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();

    InputFormat::from_extension(ext).ok_or_else(|| {
        if ext.is_empty() {
            Error::UnsupportedFormat(format!("{} has no file extension", path.display()))
        } else {
            Error::UnsupportedFormat(format!(".{}", ext))
        }
    })
}

/// Check if a path names a Markdown file.
pub fn is_markdown<P: AsRef<Path>>(path: P) -> bool {
    matches!(detect_format_from_path(path), Ok(InputFormat::Markdown))
}
