//! # mdresume
//!
//! Markdown resume parsing library for Rust.
//!
//! This library reads a resume written as conventional Markdown (an H1 name,
//! a pipe-separated contact line, H2 sections, H3 entries, bullets) and turns
//! it into a typed [`Resume`] model that renderers can consume.
//!
//! ## Quick Start
//!
//! ```
//! use mdresume::parse_str;
//!
//! fn main() -> mdresume::Result<()> {
//!     let resume = parse_str(
//!         "# Jane Doe\n\
//!          [jane@email.com](mailto:jane@email.com) | Techville, Academia\n\
//!          \n\
//!          ### Experience\n\
//!          #### Software Developer\n\
//!          **Tech Innovations Inc.** | Jul 2021 – Present\n\
//!          - Built scalable cloud systems\n",
//!     )?;
//!
//!     assert_eq!(resume.name(), "Jane Doe");
//!     assert!(resume.experience.positions[0].dates.is_current());
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Permissive parsing**: unmatched lines are skipped; only a missing name fails
//! - **Typed model**: dates as `chrono` values, optional sections as `Option`
//! - **Batch parsing**: independent documents parsed in parallel with Rayon
//! - **JSON dump**: serde-based export of the parsed model

pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_format_from_path, is_markdown, InputFormat};
pub use error::{Error, Result};
pub use model::{
    format_month_year, Certification, CertificationSection, Contact, DateRange, Degree,
    Education, EducationSection, Experience, ExperienceSection, Gpa, Language, LanguageSection,
    Link, Location, Project, ProjectSection, Resume, SkillCategory, SkillSection, Thesis,
};
pub use parser::{parse_date, MarkdownParser, ParseOptions, SectionKind};
pub use render::JsonFormat;

use rayon::prelude::*;
use std::io::Read;
use std::path::Path;

/// Parse Markdown text into a resume.
///
/// # Example
///
/// ```
/// let resume = mdresume::parse_str("# Jane Doe\n").unwrap();
/// assert_eq!(resume.contact.name, "Jane Doe");
/// ```
pub fn parse_str(text: &str) -> Result<Resume> {
    MarkdownParser::new(text).parse()
}

/// Parse Markdown text with custom options.
pub fn parse_str_with_options(text: &str, options: ParseOptions) -> Result<Resume> {
    MarkdownParser::with_options(text, options).parse()
}

/// Parse a resume from bytes.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD rather than rejected.
///
/// # Example
///
/// ```no_run
/// use mdresume::parse_bytes;
///
/// let data = std::fs::read("resume.md").unwrap();
/// let resume = parse_bytes(&data).unwrap();
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<Resume> {
    MarkdownParser::from_bytes(data).parse()
}

/// Parse a resume from bytes with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Resume> {
    MarkdownParser::from_bytes_with_options(data, options).parse()
}

/// Parse a resume from a reader.
///
/// # Example
///
/// ```no_run
/// use mdresume::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("resume.md").unwrap();
/// let resume = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Resume> {
    MarkdownParser::from_reader(reader)?.parse()
}

/// Parse a resume from a reader with custom options.
pub fn parse_reader_with_options<R: Read>(reader: R, options: ParseOptions) -> Result<Resume> {
    MarkdownParser::from_reader_with_options(reader, options)?.parse()
}

/// Parse a Markdown resume file.
///
/// Paths without a Markdown extension are refused with
/// [`Error::UnsupportedFormat`].
///
/// # Example
///
/// ```no_run
/// use mdresume::parse_file;
///
/// let resume = parse_file("resume.md").unwrap();
/// println!("{} entries", resume.entry_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Resume> {
    MarkdownParser::open(path)?.parse()
}

/// Parse a Markdown resume file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Resume> {
    MarkdownParser::open_with_options(path, options)?.parse()
}

/// Parse many independent documents in parallel.
///
/// Results are returned in input order.
///
/// # Example
///
/// ```
/// let inputs = ["# Ann\n", "no heading", "# Bob\n"];
/// let results = mdresume::parse_batch(&inputs);
/// assert_eq!(results.len(), 3);
/// assert!(results[1].is_err());
/// ```
pub fn parse_batch<T>(inputs: &[T]) -> Vec<Result<Resume>>
where
    T: AsRef<[u8]> + Sync,
{
    parse_batch_with_options(inputs, ParseOptions::default())
}

/// Parse many independent documents in parallel with custom options.
pub fn parse_batch_with_options<T>(inputs: &[T], options: ParseOptions) -> Vec<Result<Resume>>
where
    T: AsRef<[u8]> + Sync,
{
    log::debug!("Parsing batch of {} documents", inputs.len());
    inputs
        .par_iter()
        .map(|input| parse_bytes_with_options(input.as_ref(), options))
        .collect()
}

/// Render a resume as JSON.
///
/// # Example
///
/// ```
/// use mdresume::{parse_str, to_json, JsonFormat};
///
/// let resume = parse_str("# Jane Doe\n").unwrap();
/// let json = to_json(&resume, JsonFormat::Compact).unwrap();
/// assert!(json.starts_with("{\"contact\""));
/// ```
pub fn to_json(resume: &Resume, format: JsonFormat) -> Result<String> {
    render::to_json(resume, format)
}
