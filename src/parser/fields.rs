//! Stateless field extractors.
//!
//! Each extractor turns one raw line (or one pipe-separated segment of it)
//! into a typed value. None of them fail: an unmatched pattern simply yields
//! nothing.

use chrono::NaiveDate;

use super::patterns::{
    split_on_dash, BOLD_LABEL, DATE_RANGE, DATE_SINGLE, GPA, LEADING_BOLD, LINK, MAILTO_LINK,
    PHONE, YEAR_SUFFIX,
};
use crate::model::{
    Certification, Contact, DateRange, Gpa, Language, Link, Location, SkillCategory,
};

/// A segment extractor: returns `true` when it consumed the segment.
pub(crate) type Rule<T> = fn(&str, &mut T) -> bool;

/// Apply the first matching rule to `segment`.
pub(crate) fn apply_first<T>(segment: &str, target: &mut T, rules: &[Rule<T>]) -> bool {
    rules.iter().any(|rule| rule(segment, target))
}

/// Split a line on `|`, trimming segments and dropping empty ones.
pub(crate) fn pipe_segments(line: &str) -> impl Iterator<Item = &str> {
    line.split('|').map(str::trim).filter(|s| !s.is_empty())
}

/// Split a comma-separated list, trimming entries and dropping empty ones.
pub fn split_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Parse a comma-separated location (city; city, state; city, state, country).
pub fn parse_location(text: &str) -> Location {
    Location::from_parts(text.split(','))
}

/// Extract the first Markdown link `[label](url)`.
pub fn parse_link(text: &str) -> Option<Link> {
    LINK.captures(text)
        .map(|caps| Link::new(caps[2].trim(), caps[1].trim()))
}

/// Whether a segment looks like a phone number.
///
/// After removing spaces it may contain only digits and `()+-.`, with `+`
/// only in front, and must be at least seven characters long.
pub fn is_phone(text: &str) -> bool {
    let stripped: String = text.chars().filter(|c| *c != ' ').collect();
    PHONE.is_match(&stripped) && stripped.chars().count() >= 7
}

const CONTACT_RULES: &[Rule<Contact>] = &[
    contact_email,
    contact_link,
    contact_phone,
    contact_location,
];

fn contact_email(segment: &str, contact: &mut Contact) -> bool {
    match MAILTO_LINK.captures(segment) {
        Some(caps) => {
            contact.email = Some(caps[2].trim().to_string());
            true
        }
        None => false,
    }
}

fn contact_link(segment: &str, contact: &mut Contact) -> bool {
    match parse_link(segment) {
        Some(link) => {
            contact.links.push(link);
            true
        }
        None => false,
    }
}

fn contact_phone(segment: &str, contact: &mut Contact) -> bool {
    if is_phone(segment) {
        contact.phone = Some(segment.to_string());
        return true;
    }
    false
}

fn contact_location(segment: &str, contact: &mut Contact) -> bool {
    contact.location = Some(parse_location(segment));
    true
}

/// Parse the pipe-separated line following the name heading.
///
/// Each segment is consumed by the first of: mailto link (email), other
/// link, phone number, location.
pub fn parse_contact_line(line: &str, contact: &mut Contact) {
    for segment in pipe_segments(line) {
        apply_first(segment, contact, CONTACT_RULES);
    }
}

/// Parse a skill bullet of the form `**Label:** a, b, c`.
pub fn parse_skill_line(content: &str) -> Option<SkillCategory> {
    let caps = BOLD_LABEL.captures(content)?;
    Some(SkillCategory {
        name: caps[1].trim().to_string(),
        items: split_list(&caps[2]),
    })
}

/// Split a bullet into its leading bold span and the dash-stripped rest.
fn bold_head(content: &str) -> Option<(String, &str)> {
    let m = LEADING_BOLD.captures(content)?;
    let whole = m.get(0)?;
    let name = m[1].trim().to_string();
    let rest = content[whole.end()..]
        .trim()
        .trim_start_matches(&['—', '–', '-'][..])
        .trim();
    Some((name, rest))
}

fn non_empty(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Parse a certification bullet: `**Name** — Issuer (Notes)`.
pub fn parse_certification_line(content: &str) -> Certification {
    let Some((name, mut rest)) = bold_head(content) else {
        return Certification {
            name: content.trim().to_string(),
            ..Default::default()
        };
    };

    let mut notes = None;
    if rest.ends_with(')') {
        if let Some(open) = rest.rfind('(') {
            notes = non_empty(&rest[open + 1..rest.len() - 1]);
            rest = rest[..open].trim();
        }
    }

    Certification {
        name,
        issuer: non_empty(rest),
        notes,
    }
}

/// Parse a language bullet: `**Name** — Proficiency`.
pub fn parse_language_line(content: &str) -> Language {
    match bold_head(content) {
        Some((name, rest)) => Language {
            name,
            proficiency: non_empty(rest),
        },
        None => Language {
            name: content.trim().to_string(),
            proficiency: None,
        },
    }
}

/// Month/year layouts, tried in order after periods are removed.
const DATE_LAYOUTS: &[&str] = &["%B %Y", "%b %Y", "%m/%Y"];

/// Parse a month and year such as `January 2006`, `Jan. 2006` or `01/2006`.
///
/// Returns the first day of that month, or `None` if no layout matches.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let cleaned = text.trim().replace('.', "");
    if !YEAR_SUFFIX.is_match(&cleaned) {
        return None;
    }
    let dated = format!("1 {}", cleaned);
    DATE_LAYOUTS.iter().find_map(|layout| {
        NaiveDate::parse_from_str(&dated, &format!("%d {}", layout)).ok()
    })
}

/// Find a `Month YYYY – Month YYYY|Present` range in `text`.
///
/// Returns `None` when the pattern is absent. A matched range may still
/// carry `None` parts when a month name was not recognized.
pub fn parse_date_range(text: &str) -> Option<DateRange> {
    let caps = DATE_RANGE.captures(text)?;
    let start = parse_date(&caps[1]);
    let end = if caps[2].eq_ignore_ascii_case("present") {
        None
    } else {
        parse_date(&caps[2])
    };
    Some(DateRange { start, end })
}

/// Parse a segment consisting of exactly one `Month YYYY`.
pub fn parse_single_date(text: &str) -> Option<NaiveDate> {
    let caps = DATE_SINGLE.captures(text.trim())?;
    parse_date(&caps[1])
}

/// Parse `GPA: X / Y`, case-insensitively.
pub fn parse_gpa(text: &str) -> Option<Gpa> {
    let caps = GPA.captures(text)?;
    Some(Gpa {
        value: caps[1].trim().to_string(),
        max: caps[2].trim().to_string(),
    })
}

/// Parse `Title — [label](url)` into a title and optional link.
pub(crate) fn parse_titled_link(text: &str) -> (String, Option<Link>) {
    let (title, rest) = split_on_dash(text);
    (title.to_string(), rest.and_then(parse_link))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    #[test]
    fn test_contact_line() {
        let mut contact = Contact::new("Jane Doe");
        parse_contact_line(
            "[jane@email.com](mailto:jane@email.com) | +1-555-1234 | Techville, Academia, USA | [linkedin.com/in/janedoe](https://linkedin.com/in/janedoe)",
            &mut contact,
        );
        assert_eq!(contact.email.as_deref(), Some("jane@email.com"));
        assert_eq!(contact.phone.as_deref(), Some("+1-555-1234"));
        let loc = contact.location.unwrap();
        assert_eq!(loc.city, "Techville");
        assert_eq!(loc.state.as_deref(), Some("Academia"));
        assert_eq!(loc.country.as_deref(), Some("USA"));
        assert_eq!(contact.links.len(), 1);
        assert_eq!(contact.links[0].uri, "https://linkedin.com/in/janedoe");
        assert_eq!(
            contact.links[0].label.as_deref(),
            Some("linkedin.com/in/janedoe")
        );
    }

    #[test]
    fn test_contact_links_keep_order() {
        let mut contact = Contact::default();
        parse_contact_line("[GitHub](https://github.com/x) | [Blog](https://x.dev)", &mut contact);
        let uris: Vec<_> = contact.links.iter().map(|l| l.uri.as_str()).collect();
        assert_eq!(uris, vec!["https://github.com/x", "https://x.dev"]);
    }

    #[test]
    fn test_numeric_segment_is_phone() {
        // A ZIP-like fragment long enough is read as a phone number
        let mut contact = Contact::default();
        parse_contact_line("1234567 | Springfield", &mut contact);
        assert_eq!(contact.phone.as_deref(), Some("1234567"));
        assert_eq!(contact.location.unwrap().city, "Springfield");
    }

    #[test]
    fn test_is_phone() {
        assert!(is_phone("+1 (555) 123-4567"));
        assert!(is_phone("555.123.4567"));
        assert!(!is_phone("12345"));
        assert!(!is_phone("555 123"));
        assert!(is_phone("555 1234"));
        assert!(!is_phone("555-CALL-NOW"));
        assert!(!is_phone("1+5551234"));
    }

    #[test]
    fn test_skill_line() {
        let cat = parse_skill_line("**Languages:** Go, Rust,  ").unwrap();
        assert_eq!(cat.name, "Languages");
        assert_eq!(cat.items, vec!["Go", "Rust"]);

        let cat = parse_skill_line("**Tools**: Docker").unwrap();
        assert_eq!(cat.name, "Tools");
        assert_eq!(cat.items, vec!["Docker"]);

        assert!(parse_skill_line("Just text").is_none());
    }

    #[test]
    fn test_certification_line() {
        let cert = parse_certification_line("**AWS Solutions Architect** — Amazon Web Services (2023)");
        assert_eq!(cert.name, "AWS Solutions Architect");
        assert_eq!(cert.issuer.as_deref(), Some("Amazon Web Services"));
        assert_eq!(cert.notes.as_deref(), Some("2023"));

        let cert = parse_certification_line("**CKA** - CNCF");
        assert_eq!(cert.issuer.as_deref(), Some("CNCF"));
        assert_eq!(cert.notes, None);

        let cert = parse_certification_line("**PMP**");
        assert_eq!(cert.name, "PMP");
        assert_eq!(cert.issuer, None);

        let cert = parse_certification_line("  Scrum Master  ");
        assert_eq!(cert.name, "Scrum Master");
        assert_eq!(cert.issuer, None);
    }

    #[test]
    fn test_certification_notes_only() {
        let cert = parse_certification_line("**CKAD** — (expired)");
        assert_eq!(cert.issuer, None);
        assert_eq!(cert.notes.as_deref(), Some("expired"));
    }

    #[test]
    fn test_language_line() {
        let lang = parse_language_line("**English** — Native");
        assert_eq!(lang.name, "English");
        assert_eq!(lang.proficiency.as_deref(), Some("Native"));

        let lang = parse_language_line("**French**");
        assert_eq!(lang.proficiency, None);

        let lang = parse_language_line("German (basic)");
        assert_eq!(lang.name, "German (basic)");
        assert_eq!(lang.proficiency, None);
    }

    #[test]
    fn test_parse_date_layouts() {
        assert_eq!(parse_date("January 2024"), Some(ymd(2024, 1)));
        assert_eq!(parse_date("Jan 2024"), Some(ymd(2024, 1)));
        assert_eq!(parse_date("Jan. 2024"), Some(ymd(2024, 1)));
        assert_eq!(parse_date("Sep 2021"), Some(ymd(2021, 9)));
        assert_eq!(parse_date("September 2021"), Some(ymd(2021, 9)));
        assert_eq!(parse_date("1/2006"), Some(ymd(2006, 1)));
        assert_eq!(parse_date("01/2006"), Some(ymd(2006, 1)));
        assert_eq!(parse_date("12/2019"), Some(ymd(2019, 12)));
    }

    #[test]
    fn test_parse_date_failures() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("Present"), None);
        assert_eq!(parse_date("Foo 2020"), None);
        assert_eq!(parse_date("13/2020"), None);
        assert_eq!(parse_date("Jan 20"), None);
    }

    #[test]
    fn test_parse_date_range() {
        let range = parse_date_range("Jan 2020 — Dec 2021").unwrap();
        assert_eq!(range, DateRange::between(ymd(2020, 1), ymd(2021, 12)));

        let range = parse_date_range("Jul 2021 – Present").unwrap();
        assert_eq!(range, DateRange::starting(ymd(2021, 7)));

        let range = parse_date_range("Jul 2021 - PRESENT").unwrap();
        assert!(range.is_current());

        // Pattern matches but the month is unknown
        let range = parse_date_range("Foo 2020 - Dec 2021").unwrap();
        assert_eq!(range.start, None);
        assert_eq!(range.end, Some(ymd(2021, 12)));

        assert!(parse_date_range("Techville, Academia").is_none());
    }

    #[test]
    fn test_parse_single_date() {
        assert_eq!(parse_single_date(" May 2024 "), Some(ymd(2024, 5)));
        assert_eq!(parse_single_date("May 2024, Remote"), None);
    }

    #[test]
    fn test_parse_gpa() {
        let gpa = parse_gpa("GPA: 3.9 / 4.0").unwrap();
        assert_eq!(gpa.value, "3.9");
        assert_eq!(gpa.max, "4.0");

        let gpa = parse_gpa("gpa:3.5/5").unwrap();
        assert_eq!(gpa.value, "3.5");
        assert_eq!(gpa.max, "5");

        assert!(parse_gpa("GPA: excellent").is_none());
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list(" a, ,b ,"), vec!["a", "b"]);
        assert!(split_list("").is_empty());
    }

    #[test]
    fn test_parse_titled_link() {
        let (title, link) = parse_titled_link("Finance Tracker — [Link](https://github.com/x/ft)");
        assert_eq!(title, "Finance Tracker");
        let link = link.unwrap();
        assert_eq!(link.uri, "https://github.com/x/ft");
        assert_eq!(link.label.as_deref(), Some("Link"));

        let (title, link) = parse_titled_link("Eco Route Finder");
        assert_eq!(title, "Eco Route Finder");
        assert!(link.is_none());
    }
}
