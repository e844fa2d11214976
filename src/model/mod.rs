//! Document model types for resume content representation.
//!
//! This module defines the structured representation produced by the
//! Markdown parser and read by downstream renderers. The model is built once
//! per parse and treated as immutable afterwards.

mod credentials;
mod dates;
mod document;
mod education;
mod experience;
mod project;

pub use credentials::{Certification, CertificationSection, Language, LanguageSection};
pub use dates::{format_month_year, DateRange};
pub use document::{Contact, Link, Location, Resume, SkillCategory, SkillSection};
pub use education::{Degree, Education, EducationSection, Gpa, Thesis};
pub use experience::{Experience, ExperienceSection};
pub use project::{Project, ProjectSection};
