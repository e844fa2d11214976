//! Education types.

use super::{DateRange, Link, Location};
use serde::{Deserialize, Serialize};

/// The education section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationSection {
    /// Heading text as written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Institutions in input order
    #[serde(default)]
    pub institutions: Vec<Education>,
}

impl EducationSection {
    /// Heading to display, falling back to `"Education"`.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Education")
    }
}

/// One degree at one institution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    /// School name
    pub institution: String,

    /// Degree earned
    #[serde(default)]
    pub degree: Degree,

    /// Grade point average
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpa: Option<Gpa>,

    /// Where the school is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    /// Attendance period
    #[serde(default)]
    pub dates: DateRange,

    /// Thesis, if one was listed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thesis: Option<Thesis>,
}

/// Degree name plus free-text descriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Degree {
    /// e.g. "B.Sc. in Software Engineering"
    #[serde(default)]
    pub name: String,

    /// Honors, coursework and other bullets
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub descriptions: Vec<String>,
}

/// A GPA as written, e.g. `3.9 / 4.0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gpa {
    /// Achieved value
    pub value: String,

    /// Scale maximum
    pub max: String,
}

impl std::fmt::Display for Gpa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} / {}", self.value, self.max)
    }
}

/// A thesis title with an optional link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thesis {
    /// Thesis title
    pub title: String,

    /// Where to read it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,

    /// Not populated by the Markdown parser.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
}
