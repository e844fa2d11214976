//! Markdown resume parser.

use std::io::Read;
use std::path::Path;

use unicode_normalization::UnicodeNormalization;

use crate::detect::{detect_format_from_path, InputFormat};
use crate::error::{Error, Result};
use crate::model::{CertificationSection, LanguageSection, ProjectSection, Resume};

use super::entities::OpenEntity;
use super::fields::{
    parse_certification_line, parse_contact_line, parse_language_line, parse_skill_line,
};
use super::options::ParseOptions;
use super::patterns::{classify_line, LineKind};
use super::sections::SectionKind;

/// Markdown resume parser.
///
/// Holds the decoded source; [`MarkdownParser::parse`] walks it once and
/// builds a [`Resume`].
pub struct MarkdownParser {
    source: String,
    options: ParseOptions,
}

impl MarkdownParser {
    /// Create a parser over Markdown text.
    pub fn new(source: impl Into<String>) -> Self {
        Self::with_options(source, ParseOptions::default())
    }

    /// Create a parser over Markdown text with custom options.
    pub fn with_options(source: impl Into<String>, options: ParseOptions) -> Self {
        Self {
            source: source.into(),
            options,
        }
    }

    /// Open a Markdown file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a Markdown file with custom options.
    ///
    /// Files whose extension is not a Markdown one are refused with
    /// [`Error::UnsupportedFormat`].
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();

        match detect_format_from_path(path)? {
            InputFormat::Markdown => {}
            other => {
                return Err(Error::UnsupportedFormat(format!(
                    "{} input is not supported, expected markdown",
                    other
                )))
            }
        }

        let data = std::fs::read(path)?;
        log::debug!("Read {} bytes from {}", data.len(), path.display());
        Ok(Self::from_bytes_with_options(&data, options))
    }

    /// Create a parser from raw bytes. Invalid UTF-8 is replaced, not rejected.
    pub fn from_bytes(data: &[u8]) -> Self {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Create a parser from raw bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Self {
        Self::with_options(String::from_utf8_lossy(data), options)
    }

    /// Create a parser from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Create a parser from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(Self::from_bytes_with_options(&data, options))
    }

    /// The options this parser was built with.
    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Parse the source into a [`Resume`].
    ///
    /// Fails only when no H1 heading supplies a contact name.
    pub fn parse(&self) -> Result<Resume> {
        let source = self.prepare_source();
        let mut lines = source.lines().peekable();
        let mut state = ParseState::default();

        while let Some(raw) = lines.next() {
            let line = raw.trim();

            match classify_line(line) {
                LineKind::Rule => {}
                LineKind::Heading { level: 1, text } => {
                    if !state.resume.contact.name.is_empty() {
                        log::trace!("Ignoring extra H1 {:?}", text);
                        continue;
                    }
                    state.resume.contact.name = text.to_string();

                    // The first non-blank line after the name is the contact line
                    while let Some(&next) = lines.peek() {
                        let next = next.trim();
                        match classify_line(next) {
                            LineKind::Blank => {
                                lines.next();
                            }
                            LineKind::Rule | LineKind::Heading { .. } => break,
                            _ => {
                                log::debug!("Contact line: {:?}", next);
                                parse_contact_line(next, &mut state.resume.contact);
                                lines.next();
                                break;
                            }
                        }
                    }
                }
                LineKind::Heading { level: 2, text } => state.enter_section(text),
                LineKind::Heading { text, .. } => state.open_entity(text),
                LineKind::Blank => {
                    if state.section == SectionKind::Summary {
                        state.summary.push(String::new());
                    }
                }
                LineKind::Bullet(_) | LineKind::Text(_) => state.accept(line),
            }
        }

        state.finish()
    }

    /// Apply the configured normalizations and unify line endings.
    fn prepare_source(&self) -> String {
        let mut text = self.source.as_str();
        if self.options.strip_bom {
            text = text.strip_prefix('\u{feff}').unwrap_or(text);
        }

        let text = if self.options.normalize_unicode {
            text.nfc().collect::<String>()
        } else {
            text.to_string()
        };

        if text.contains('\r') {
            text.replace("\r\n", "\n").replace('\r', "\n")
        } else {
            text
        }
    }
}

/// Mutable state of a single parse.
#[derive(Default)]
struct ParseState {
    resume: Resume,
    section: SectionKind,
    summary: Vec<String>,
    open: Option<OpenEntity>,
}

impl ParseState {
    /// Handle an H2: close out the previous section and switch to the new one.
    fn enter_section(&mut self, heading: &str) {
        self.flush();
        self.commit_summary();

        let kind = SectionKind::classify(heading);
        let title = Some(heading.to_string());
        match kind {
            SectionKind::Skills => self.resume.skills.title = title,
            SectionKind::Experience => self.resume.experience.title = title,
            SectionKind::Education => self.resume.education.title = title,
            SectionKind::Projects => {
                self.resume
                    .projects
                    .get_or_insert_with(ProjectSection::default)
                    .title = title
            }
            SectionKind::Certifications => {
                self.resume
                    .certifications
                    .get_or_insert_with(CertificationSection::default)
                    .title = title
            }
            SectionKind::Languages => {
                self.resume
                    .languages
                    .get_or_insert_with(LanguageSection::default)
                    .title = title
            }
            SectionKind::Summary | SectionKind::Unclassified => {}
        }

        if kind == SectionKind::Unclassified {
            log::debug!("Unrecognized section {:?}, its content is dropped", heading);
        } else {
            log::debug!("Entering {} section ({:?})", kind, heading);
        }
        self.section = kind;
    }

    /// Handle an H3: start a new entity if the section has them.
    fn open_entity(&mut self, heading: &str) {
        if !self.section.has_entities() {
            log::trace!("Ignoring H3 {:?} in {} section", heading, self.section);
            return;
        }
        self.flush();
        self.open = Some(match self.section {
            SectionKind::Experience => OpenEntity::experience(heading),
            SectionKind::Education => OpenEntity::education(heading),
            _ => OpenEntity::project(heading),
        });
    }

    /// Route a non-blank, non-heading line to the current section.
    fn accept(&mut self, line: &str) {
        let bullet = match classify_line(line) {
            LineKind::Bullet(content) => Some(content),
            _ => None,
        };

        match (self.section, bullet) {
            (SectionKind::Summary, _) => self.summary.push(line.to_string()),
            (SectionKind::Skills, Some(content)) => match parse_skill_line(content) {
                Some(category) => self.resume.skills.categories.push(category),
                None => log::trace!("Skipping skill bullet {:?}", content),
            },
            (kind, _) if kind.has_entities() => {
                match self.open.as_mut() {
                    Some(entity) => entity.accept(line),
                    None => log::trace!("Skipping line outside any entry: {:?}", line),
                }
            }
            (SectionKind::Certifications, Some(content)) => {
                let certification = parse_certification_line(content);
                self.resume
                    .certifications
                    .get_or_insert_with(CertificationSection::default)
                    .items
                    .push(certification);
            }
            (SectionKind::Languages, Some(content)) => {
                let language = parse_language_line(content);
                self.resume
                    .languages
                    .get_or_insert_with(LanguageSection::default)
                    .languages
                    .push(language);
            }
            _ => log::trace!("Skipping line in {} section: {:?}", self.section, line),
        }
    }

    /// Move the open entity, if any, into its section.
    fn flush(&mut self) {
        let Some(entity) = self.open.take() else {
            return;
        };

        match entity {
            OpenEntity::Experience(experience) => {
                log::debug!("Flushing experience {:?}", experience.title);
                self.resume.experience.positions.push(experience);
            }
            OpenEntity::Education(education, _) => {
                log::debug!("Flushing education {:?}", education.institution);
                self.resume.education.institutions.push(education);
            }
            OpenEntity::Project(project) => {
                log::debug!("Flushing project {:?}", project.name);
                self.resume
                    .projects
                    .get_or_insert_with(ProjectSection::default)
                    .projects
                    .push(project);
            }
        }
    }

    /// Store accumulated summary lines when leaving a summary section.
    fn commit_summary(&mut self) {
        if self.section != SectionKind::Summary || self.summary.is_empty() {
            return;
        }
        let text = self.summary.join("\n");
        let text = text.trim();
        self.resume.summary = (!text.is_empty()).then(|| text.to_string());
        self.summary.clear();
    }

    fn finish(mut self) -> Result<Resume> {
        self.commit_summary();
        self.flush();

        if self.resume.contact.name.is_empty() {
            log::warn!("No H1 heading found, cannot recover a contact name");
            return Err(Error::MissingName);
        }
        Ok(self.resume)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Resume {
        MarkdownParser::new(text).parse().unwrap()
    }

    #[test]
    fn test_missing_name() {
        let result = MarkdownParser::new("## Summary\n\nNo name here.\n").parse();
        assert!(matches!(result, Err(Error::MissingName)));

        let result = MarkdownParser::new("").parse();
        assert!(matches!(result, Err(Error::MissingName)));
    }

    #[test]
    fn test_only_first_h1_counts() {
        let resume = parse("# Jane Doe\n\n# John Roe\n");
        assert_eq!(resume.contact.name, "Jane Doe");
    }

    #[test]
    fn test_contact_search_stops_at_rule() {
        let resume = parse("# Jane Doe\n\n---\n\nSeattle, WA\n");
        assert_eq!(resume.contact.name, "Jane Doe");
        assert!(resume.contact.location.is_none());
    }

    #[test]
    fn test_contact_search_does_not_eat_heading() {
        let resume = parse("# Jane Doe\n## Summary\nHello.\n");
        assert!(resume.contact.location.is_none());
        assert_eq!(resume.summary.as_deref(), Some("Hello."));
    }

    #[test]
    fn test_summary_keeps_paragraph_breaks() {
        let resume = parse("# X\n\n## Summary\n\n\nFirst.\n\nSecond\nline.\n\n## Skills\n");
        assert_eq!(resume.summary.as_deref(), Some("First.\n\nSecond\nline."));
    }

    #[test]
    fn test_blank_summary_is_none() {
        let resume = parse("# X\n\n## Profile\n\n\n## Skills\n");
        assert!(resume.summary.is_none());
    }

    #[test]
    fn test_section_titles_follow_headings() {
        let resume = parse("# X\n\n## Core Skills\n\n## Work History\n\n## Education\n");
        assert_eq!(resume.skills.title.as_deref(), Some("Core Skills"));
        assert_eq!(resume.experience.title.as_deref(), Some("Work History"));
        assert_eq!(resume.education.title.as_deref(), Some("Education"));
    }

    #[test]
    fn test_lazy_sections_persist_when_empty() {
        let resume = parse("# X\n\n## Projects\n\n## Certifications\n\n## Languages\n");
        assert_eq!(resume.projects.unwrap().title.as_deref(), Some("Projects"));
        assert!(resume.certifications.unwrap().items.is_empty());
        assert!(resume.languages.unwrap().languages.is_empty());
    }

    #[test]
    fn test_unclassified_section_is_dropped() {
        let resume = parse("# X\n\n## Hobbies\n\n- **Chess:** openings\n### Climbing\n- Did X\n");
        assert!(resume.skills.categories.is_empty());
        assert!(resume.experience.positions.is_empty());
        assert!(resume.summary.is_none());
    }

    #[test]
    fn test_h3_outside_entity_sections_is_ignored() {
        let resume = parse("# X\n\n## Skills\n### Backend\n- **Languages:** Go\n");
        assert_eq!(resume.skills.categories.len(), 1);
        assert!(resume.experience.positions.is_empty());
        assert!(resume.projects.is_none());
    }

    #[test]
    fn test_lines_before_first_entry_are_ignored() {
        let resume = parse("# X\n\n## Experience\n\n- Orphan bullet\n\n### Dev\n- Did X\n");
        assert_eq!(resume.experience.positions.len(), 1);
        assert_eq!(resume.experience.positions[0].highlights, vec!["Did X"]);
    }

    #[test]
    fn test_h2_flushes_open_entity() {
        let resume = parse("# X\n\n## Experience\n### Dev\n## Skills\n- Did X\n");
        let positions = &resume.experience.positions;
        assert_eq!(positions.len(), 1);
        assert!(positions[0].highlights.is_empty());
    }

    #[test]
    fn test_certifications_and_languages() {
        let resume = parse(
            "# X\n\n## Certifications\n- **CKA** — CNCF (2022)\nnot a bullet\n\n## Languages\n- **English** — Native\n- Spanish\n",
        );
        let certs = resume.certifications.unwrap();
        assert_eq!(certs.items.len(), 1);
        assert_eq!(certs.items[0].issuer.as_deref(), Some("CNCF"));

        let langs = resume.languages.unwrap();
        assert_eq!(langs.languages.len(), 2);
        assert_eq!(langs.languages[1].name, "Spanish");
    }

    #[test]
    fn test_bom_and_crlf() {
        let resume = parse("\u{feff}# Jane Doe\r\n\r\n## Summary\r\nHello.\rWorld.\r\n");
        assert_eq!(resume.contact.name, "Jane Doe");
        assert_eq!(resume.summary.as_deref(), Some("Hello.\nWorld."));
    }

    #[test]
    fn test_bom_kept_without_stripping() {
        let options = ParseOptions::new().with_bom_stripping(false);
        let result = MarkdownParser::with_options("\u{feff}# Jane Doe\n", options).parse();
        assert!(matches!(result, Err(Error::MissingName)));
    }

    #[test]
    fn test_unicode_normalization() {
        let resume = parse("# Jose\u{0301} Garci\u{0301}a\n");
        assert_eq!(resume.contact.name, "Jos\u{e9} Garc\u{ed}a");

        let options = ParseOptions::new().with_unicode_normalization(false);
        let resume = MarkdownParser::with_options("# Jose\u{0301}\n", options)
            .parse()
            .unwrap();
        assert_eq!(resume.contact.name, "Jose\u{0301}");
    }

    #[test]
    fn test_from_bytes_is_lossy() {
        let resume = MarkdownParser::from_bytes(b"# Jane \xFF Doe\n").parse().unwrap();
        assert_eq!(resume.contact.name, "Jane \u{FFFD} Doe");
    }

    #[test]
    fn test_open_rejects_other_formats() {
        let result = MarkdownParser::open("resume.yaml");
        assert!(matches!(result, Err(Error::UnsupportedFormat(_))));
    }
}
