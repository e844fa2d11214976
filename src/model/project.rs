//! Project types.

use super::{DateRange, Link};
use serde::{Deserialize, Serialize};

/// The projects section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSection {
    /// Heading text as written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Projects in input order
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl ProjectSection {
    /// Heading to display, falling back to `"Projects"`.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Projects")
    }
}

/// A personal or professional project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Project name
    pub name: String,

    /// Repository or demo link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,

    /// What was built
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,

    /// Technologies used
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub technologies: Vec<String>,

    /// When, if stated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dates: Option<DateRange>,
}
