//! Month-granular date ranges.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A (start, optional end) pair at month granularity.
///
/// `start == None` means the start date could not be parsed; it never
/// compares equal to an explicit date. `end == None` means the range is
/// ongoing ("Present").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First month of the range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDate>,

    /// Last month of the range, `None` while ongoing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Create a range starting at `start` and still ongoing.
    pub fn starting(start: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// Create a closed range.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Whether a start date was recovered.
    pub fn has_start(&self) -> bool {
        self.start.is_some()
    }

    /// Whether the range is ongoing (no end date).
    pub fn is_current(&self) -> bool {
        self.end.is_none()
    }

    /// Human-readable form, e.g. `"Jan 2020 – Present"`.
    pub fn display(&self) -> String {
        let start = self
            .start
            .map(format_month_year)
            .unwrap_or_else(|| "?".to_string());
        let end = self
            .end
            .map(format_month_year)
            .unwrap_or_else(|| "Present".to_string());
        format!("{} – {}", start, end)
    }
}

/// Format a date as `"Jan 2006"`.
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}
