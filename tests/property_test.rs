//! Property tests for the Markdown resume parser.

use chrono::{Datelike, NaiveDate};
use mdresume::{format_month_year, parse_date, parse_str, Error};
use proptest::prelude::*;

/// A word with no Markdown meaning of its own.
fn word() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,9}"
}

fn name() -> impl Strategy<Value = String> {
    (word(), word()).prop_map(|(first, last)| format!("{} {}", first, last))
}

fn resume_text(name: &str, titles: &[String], bullets: &[String]) -> String {
    let mut text = format!("# {}\n\n---\n\n## Experience\n\n", name);
    for title in titles {
        text.push_str(&format!("### {}\n\n", title));
        for bullet in bullets {
            text.push_str(&format!("- {}\n", bullet));
        }
        text.push('\n');
    }
    text
}

proptest! {
    #[test]
    fn prop_name_is_recovered(name in name(), body in "[a-z ]{0,40}") {
        let text = format!("# {}\n\n---\n\n{}\n", name, body);
        let resume = parse_str(&text).unwrap();
        prop_assert_eq!(resume.contact.name, name);
    }

    #[test]
    fn prop_no_h1_is_an_error(lines in prop::collection::vec("[a-z][a-z ]{0,20}", 0..10)) {
        let text = lines.join("\n");
        prop_assert!(matches!(parse_str(&text), Err(Error::MissingName)));
    }

    #[test]
    fn prop_parse_is_idempotent(
        name in name(),
        titles in prop::collection::vec(word(), 0..5),
        bullets in prop::collection::vec(word(), 0..4),
    ) {
        let text = resume_text(&name, &titles, &bullets);
        prop_assert_eq!(parse_str(&text).unwrap(), parse_str(&text).unwrap());
    }

    #[test]
    fn prop_entry_order_is_preserved(
        titles in prop::collection::vec(word(), 0..8),
        bullets in prop::collection::vec(word(), 0..4),
    ) {
        let resume = parse_str(&resume_text("X Y", &titles, &bullets)).unwrap();
        let parsed: Vec<_> = resume
            .experience
            .positions
            .iter()
            .map(|p| p.title.clone())
            .collect();
        prop_assert_eq!(&parsed, &titles);
        for position in &resume.experience.positions {
            prop_assert_eq!(&position.highlights, &bullets);
        }
    }

    #[test]
    fn prop_month_year_round_trip(year in 1000i32..9999, month in 1u32..=12, day in 1u32..=28) {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let parsed = parse_date(&format_month_year(date)).unwrap();
        prop_assert_eq!(parsed.year(), year);
        prop_assert_eq!(parsed.month(), month);
        prop_assert_eq!(parsed.day(), 1);
    }
}
