//! Date-range picker model.
//!
//! The form stores dates as free text (`"Jan 2022 - Present"`, `"2015 - 2019"`).
//! `DateRange` is the structured side of that string: parsing splits on `-`,
//! each side into at most a month token and a 4-digit year token, and the
//! literal `Present` on the end side sets `is_present`.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// How many years back the year selector offers.
const YEAR_SPAN: i32 = 50;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start_month: String,
    pub start_year: String,
    pub end_month: String,
    pub end_year: String,
    /// When set, the end month/year are disabled and formatted as "Present".
    pub is_present: bool,
}

impl DateRange {
    pub fn parse(value: &str) -> Self {
        let mut range = DateRange::default();
        if value.trim().is_empty() {
            return range;
        }

        let parts: Vec<&str> = value.split('-').map(str::trim).collect();

        if let Some(start) = parts.first().filter(|s| !s.is_empty()) {
            let (month, year) = parse_date(start);
            range.start_month = month;
            range.start_year = year;
        }

        if let Some(end) = parts.get(1).filter(|s| !s.is_empty()) {
            if end.eq_ignore_ascii_case("present") {
                range.set_present(true);
            } else {
                let (month, year) = parse_date(end);
                range.end_month = month;
                range.end_year = year;
            }
        }

        range
    }

    pub fn format(&self) -> String {
        let start = format_date(&self.start_month, &self.start_year);
        let end = if self.is_present {
            "Present".to_string()
        } else {
            format_date(&self.end_month, &self.end_year)
        };

        match (start.is_empty(), end.is_empty()) {
            (true, true) => String::new(),
            (true, false) => end,
            (false, true) => start,
            (false, false) => format!("{start} - {end}"),
        }
    }

    /// Ticks or clears the "Present" box; ticking clears the end fields.
    pub fn set_present(&mut self, present: bool) {
        self.is_present = present;
        if present {
            self.end_month.clear();
            self.end_year.clear();
        }
    }
}

pub fn format_date(month: &str, year: &str) -> String {
    match (month.is_empty(), year.is_empty()) {
        (true, true) => String::new(),
        (true, false) => year.to_string(),
        (false, true) => month.to_string(),
        (false, false) => format!("{month} {year}"),
    }
}

/// Splits one side of a range into `(month, year)`. Accepts "Year Month" order too.
fn parse_date(side: &str) -> (String, String) {
    let tokens: Vec<&str> = side.split_whitespace().collect();
    match tokens.as_slice() {
        [] => (String::new(), String::new()),
        [only] if is_year(only) => (String::new(), only.to_string()),
        [only] => (only.to_string(), String::new()),
        [first, second, ..] if is_year(first) => (second.to_string(), first.to_string()),
        [first, second, ..] => (first.to_string(), second.to_string()),
    }
}

fn is_year(token: &str) -> bool {
    token.len() == 4 && token.chars().all(|c| c.is_ascii_digit())
}

/// Year selector options, newest first: `current_year` down to 50 years earlier.
pub fn year_options(current_year: i32) -> Vec<i32> {
    (current_year - YEAR_SPAN..=current_year).rev().collect()
}

pub fn current_year_options() -> Vec<i32> {
    year_options(chrono::Local::now().year())
}
