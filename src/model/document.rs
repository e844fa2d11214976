//! Document-level types.

use super::{
    CertificationSection, EducationSection, ExperienceSection, LanguageSection, ProjectSection,
};
use serde::{Deserialize, Serialize};

/// A parsed resume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    /// Name and contact details from the H1 block
    pub contact: Contact,

    /// Free-text summary paragraph(s)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Skill categories
    #[serde(default)]
    pub skills: SkillSection,

    /// Work history
    #[serde(default)]
    pub experience: ExperienceSection,

    /// Schools and degrees
    #[serde(default)]
    pub education: EducationSection,

    /// Projects, present once a projects heading was seen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<ProjectSection>,

    /// Certifications, present once a certifications heading was seen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<CertificationSection>,

    /// Spoken languages, present once a languages heading was seen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<LanguageSection>,
}

impl Resume {
    /// Create a resume for the given contact name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            contact: Contact::new(name),
            ..Default::default()
        }
    }

    /// Contact name.
    pub fn name(&self) -> &str {
        &self.contact.name
    }

    /// Check if nothing beyond the contact block was recovered.
    pub fn is_empty(&self) -> bool {
        self.summary.is_none()
            && self.skills.categories.is_empty()
            && self.experience.positions.is_empty()
            && self.education.institutions.is_empty()
            && self.projects.is_none()
            && self.certifications.is_none()
            && self.languages.is_none()
    }

    /// Total number of entries across all list sections.
    pub fn entry_count(&self) -> usize {
        self.skills.categories.len()
            + self.experience.positions.len()
            + self.education.institutions.len()
            + self.projects.as_ref().map_or(0, |p| p.projects.len())
            + self.certifications.as_ref().map_or(0, |c| c.items.len())
            + self.languages.as_ref().map_or(0, |l| l.languages.len())
    }
}

/// Contact information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    /// Full name (never empty in a parsed resume)
    pub name: String,

    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Phone number, as written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Where the person is based
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    /// Profile links in input order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl Contact {
    /// Create contact info with only a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A hyperlink with an optional label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Target URI
    pub uri: String,

    /// Link text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Link {
    /// Create a link. An empty label is stored as `None`.
    pub fn new(uri: impl Into<String>, label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            uri: uri.into(),
            label: (!label.is_empty()).then_some(label),
        }
    }
}

/// A city / state / country triple.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// City
    pub city: String,

    /// State, province or region
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Country
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Location {
    /// Build a location from comma-separated parts.
    ///
    /// One part is a city, two are city and state, three or more are city,
    /// state and country; extra parts are ignored.
    pub fn from_parts<'a>(parts: impl IntoIterator<Item = &'a str>) -> Self {
        let mut parts = parts.into_iter().map(|p| p.trim().to_string());
        Self {
            city: parts.next().unwrap_or_default(),
            state: parts.next(),
            country: parts.next(),
        }
    }

    /// Comma-joined form, e.g. `"Techville, Academia, USA"`.
    pub fn display(&self) -> String {
        std::iter::once(self.city.as_str())
            .chain(self.state.as_deref())
            .chain(self.country.as_deref())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// The skills section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSection {
    /// Heading text as written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// One category per bullet line
    #[serde(default)]
    pub categories: Vec<SkillCategory>,
}

impl SkillSection {
    /// Heading to display, falling back to `"Skills"`.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Skills")
    }
}

/// A named group of skills.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    /// Category label
    pub name: String,

    /// Skill names in input order
    #[serde(default)]
    pub items: Vec<String>,
}
