//! Work history types.

use super::{DateRange, Location};
use serde::{Deserialize, Serialize};

/// The experience section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceSection {
    /// Heading text as written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Positions in input order
    #[serde(default)]
    pub positions: Vec<Experience>,
}

impl ExperienceSection {
    /// Heading to display, falling back to `"Experience"`.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Experience")
    }

    /// Positions with no end date.
    pub fn current_positions(&self) -> impl Iterator<Item = &Experience> {
        self.positions.iter().filter(|p| p.dates.is_current())
    }
}

/// One position held at one company.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    /// Job title (the H3 text)
    pub title: String,

    /// Employer
    #[serde(default)]
    pub company: String,

    /// Accomplishment bullets
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,

    /// Technologies used
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub technologies: Vec<String>,

    /// Where the job was
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    /// Employment period
    #[serde(default)]
    pub dates: DateRange,
}

impl Experience {
    /// Create a position with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}
