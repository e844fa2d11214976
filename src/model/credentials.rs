//! Certification and language types.

use serde::{Deserialize, Serialize};

/// The certifications section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CertificationSection {
    /// Heading text as written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Certifications in input order
    #[serde(default)]
    pub items: Vec<Certification>,
}

impl CertificationSection {
    /// Heading to display, falling back to `"Certifications"`.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Certifications")
    }
}

/// A certification or license.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    /// Certification name
    pub name: String,

    /// Issuing body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,

    /// Parenthesized note, often a year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// The languages section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageSection {
    /// Heading text as written
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Languages in input order
    #[serde(default)]
    pub languages: Vec<Language>,
}

impl LanguageSection {
    /// Heading to display, falling back to `"Languages"`.
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("Languages")
    }
}

/// A spoken language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// Language name
    pub name: String,

    /// e.g. "Native", "Fluent"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proficiency: Option<String>,
}
