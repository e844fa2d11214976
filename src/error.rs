//! Error types for mdresume library.

use std::io;
use thiserror::Error;

/// Result type alias for mdresume operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading and parsing a resume.
///
/// Parsing itself has a single fatal condition ([`Error::MissingName`]).
/// Everything the parser cannot make sense of is skipped, not reported.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// No H1 heading was found, so there is no contact name.
    #[error("markdown parse error: no H1 heading found for contact name")]
    MissingName,

    /// The input is not a Markdown resume.
    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),

    /// Error during rendering (JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}
