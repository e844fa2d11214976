//! Section routing: mapping H2 heading text to a section kind.

/// The kind of top-level section an H2 heading opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionKind {
    /// Heading matched no known section; its content is dropped
    #[default]
    Unclassified,
    /// Free-text summary
    Summary,
    /// Skill categories
    Skills,
    /// Work history
    Experience,
    /// Schools and degrees
    Education,
    /// Projects
    Projects,
    /// Certifications
    Certifications,
    /// Spoken languages
    Languages,
}

/// One routing rule. A heading matches when its lowercased text equals any
/// `exact` entry or contains any `contains` entry.
struct SectionRule {
    kind: SectionKind,
    exact: &'static [&'static str],
    contains: &'static [&'static str],
}

impl SectionRule {
    fn matches(&self, lower: &str) -> bool {
        self.exact.iter().any(|e| lower == *e) || self.contains.iter().any(|c| lower.contains(c))
    }
}

/// Checked top to bottom; the first matching rule wins.
const SECTION_RULES: &[SectionRule] = &[
    SectionRule {
        kind: SectionKind::Summary,
        exact: &["summary", "profile", "about"],
        contains: &[],
    },
    SectionRule {
        kind: SectionKind::Skills,
        exact: &["core skills", "technical skills"],
        contains: &["skill"],
    },
    SectionRule {
        kind: SectionKind::Experience,
        exact: &["work history", "employment"],
        contains: &["experience"],
    },
    SectionRule {
        kind: SectionKind::Education,
        exact: &[],
        contains: &["education"],
    },
    SectionRule {
        kind: SectionKind::Projects,
        exact: &[],
        contains: &["project"],
    },
    SectionRule {
        kind: SectionKind::Certifications,
        exact: &[],
        contains: &["certif"],
    },
    SectionRule {
        kind: SectionKind::Languages,
        exact: &[],
        contains: &["language"],
    },
];

impl SectionKind {
    /// Classify trimmed H2 heading text, case-insensitively.
    pub fn classify(heading: &str) -> Self {
        let lower = heading.trim().to_lowercase();
        SECTION_RULES
            .iter()
            .find(|rule| rule.matches(&lower))
            .map_or(SectionKind::Unclassified, |rule| rule.kind)
    }

    /// Whether H3 headings open entities in this section.
    pub fn has_entities(self) -> bool {
        matches!(
            self,
            SectionKind::Experience | SectionKind::Education | SectionKind::Projects
        )
    }

    /// Short lowercase name, used in log output.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Unclassified => "unclassified",
            SectionKind::Summary => "summary",
            SectionKind::Skills => "skills",
            SectionKind::Experience => "experience",
            SectionKind::Education => "education",
            SectionKind::Projects => "projects",
            SectionKind::Certifications => "certifications",
            SectionKind::Languages => "languages",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
