//! Compiled patterns and the line classifier.
//!
//! Every regular expression the parser uses lives here so that precedence
//! between them can be read in one place.

use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) static H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#\s+(.+)$").unwrap());
pub(crate) static H2: Lazy<Regex> = Lazy::new(|| Regex::new(r"^##\s+(.+)$").unwrap());
pub(crate) static H3: Lazy<Regex> = Lazy::new(|| Regex::new(r"^###\s+(.+)$").unwrap());
pub(crate) static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-*]\s+(.+)$").unwrap());

/// `**text**` anywhere in a segment.
pub(crate) static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
/// `**text**` at the very start of a line.
pub(crate) static LEADING_BOLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*\*(.+?)\*\*").unwrap());
/// `**Label:** rest`, the colon may sit inside or after the bold span.
pub(crate) static BOLD_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*\*(.+?):?\*\*\s*:?\s*(.*)$").unwrap());
pub(crate) static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*(.+)\*$").unwrap());

pub(crate) static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]+)\)").unwrap());
pub(crate) static MAILTO_LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]*)\]\(mailto:([^)]+)\)").unwrap());

pub(crate) static GPA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)GPA:\s*([^\s/]+)\s*/\s*([^\s|]+)").unwrap());
pub(crate) static DATE_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Za-z]+\.?\s+\d{4})\s*[–—-]\s*([A-Za-z]+\.?\s+\d{4}|(?i:present))").unwrap()
});
pub(crate) static DATE_SINGLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z]+\.?\s+\d{4})$").unwrap());
pub(crate) static YEAR_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[^0-9])[0-9]{4}$").unwrap());
pub(crate) static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+]?[0-9().-]+$").unwrap());

/// Separator dash with whitespace on both sides: ` — `, ` – ` or ` - `.
pub(crate) static DASH_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+[—–-]\s+").unwrap());
pub(crate) static THESIS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\*\*Thesis:\*\*\s*(.+)$").unwrap());

/// Structural category of a single trimmed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `---`, `***` or `___`
    Rule,
    /// `#`, `##` or `###` heading with its trimmed text
    Heading { level: u8, text: &'a str },
    /// Empty after trimming
    Blank,
    /// `- text` or `* text`
    Bullet(&'a str),
    /// Anything else
    Text(&'a str),
}

/// Classify a trimmed line.
///
/// Rules are checked in order: horizontal rule, H1, H2, H3, blank, bullet,
/// plain text. The first match wins.
pub fn classify_line(line: &str) -> LineKind<'_> {
    if matches!(line, "---" | "***" | "___") {
        return LineKind::Rule;
    }

    for (level, pattern) in [(1, &H1), (2, &H2), (3, &H3)] {
        if let Some(caps) = pattern.captures(line) {
            let text = caps.get(1).map_or("", |m| m.as_str()).trim();
            return LineKind::Heading { level, text };
        }
    }

    if line.is_empty() {
        return LineKind::Blank;
    }

    if let Some(caps) = BULLET.captures(line) {
        return LineKind::Bullet(caps.get(1).map_or("", |m| m.as_str()).trim());
    }

    LineKind::Text(line)
}

/// Whether a line is an italic span (`*...*`) and not a bold one.
pub(crate) fn italic_text(line: &str) -> Option<&str> {
    if line.starts_with("**") {
        return None;
    }
    ITALIC
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Split on the first separator dash.
pub(crate) fn split_on_dash(text: &str) -> (&str, Option<&str>) {
    let mut parts = DASH_SPLIT.splitn(text, 2);
    let head = parts.next().unwrap_or("").trim();
    let tail = parts.next().map(str::trim);
    (head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules() {
        assert_eq!(classify_line("---"), LineKind::Rule);
        assert_eq!(classify_line("***"), LineKind::Rule);
        assert_eq!(classify_line("___"), LineKind::Rule);
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(
            classify_line("#   Jane Doe"),
            LineKind::Heading {
                level: 1,
                text: "Jane Doe"
            }
        );
        assert_eq!(
            classify_line("## Experience"),
            LineKind::Heading {
                level: 2,
                text: "Experience"
            }
        );
        assert_eq!(
            classify_line("### Developer"),
            LineKind::Heading {
                level: 3,
                text: "Developer"
            }
        );
        // Deeper headings are plain text
        assert_eq!(classify_line("#### Deep"), LineKind::Text("#### Deep"));
        assert_eq!(classify_line("#NoSpace"), LineKind::Text("#NoSpace"));
    }

    #[test]
    fn test_blank_and_bullets() {
        assert_eq!(classify_line(""), LineKind::Blank);
        assert_eq!(classify_line("- Did X"), LineKind::Bullet("Did X"));
        assert_eq!(classify_line("* Did Y"), LineKind::Bullet("Did Y"));
        assert_eq!(classify_line("-nospace"), LineKind::Text("-nospace"));
        assert_eq!(classify_line("**Acme**"), LineKind::Text("**Acme**"));
    }

    #[test]
    fn test_italic_text() {
        assert_eq!(italic_text("*Python, Go*"), Some("Python, Go"));
        assert_eq!(italic_text("**Acme**"), None);
        assert_eq!(italic_text("plain"), None);
    }

    #[test]
    fn test_split_on_dash() {
        assert_eq!(
            split_on_dash("Prestigious University — Ph.D. in CS"),
            ("Prestigious University", Some("Ph.D. in CS"))
        );
        assert_eq!(split_on_dash("A – B – C"), ("A", Some("B – C")));
        assert_eq!(split_on_dash("Self-Taught"), ("Self-Taught", None));
    }

    #[test]
    fn test_date_range_pattern() {
        let caps = DATE_RANGE.captures("Jan 2020 — Dec 2021").unwrap();
        assert_eq!(&caps[1], "Jan 2020");
        assert_eq!(&caps[2], "Dec 2021");

        let caps = DATE_RANGE.captures("Jul 2021 – present").unwrap();
        assert_eq!(&caps[2], "present");
    }

    #[test]
    fn test_gpa_pattern() {
        let caps = GPA.captures("gpa: 3.9 / 4.0").unwrap();
        assert_eq!(&caps[1], "3.9");
        assert_eq!(&caps[2], "4.0");
    }
}
