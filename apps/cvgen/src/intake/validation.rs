use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::models::date_range::{current_year_options, MONTHS};
use crate::models::{DateRange, ResumeRecord};

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_TITLE_LEN: usize = 100;
pub const MAX_SUMMARY_LEN: usize = 2000;

static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
// ASCII digits only; `\d` would also accept other scripts.
static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9\s\-+()]{7,20}$").unwrap());

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value.trim())
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE.is_match(value.trim())
}

fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Length in characters, not bytes.
fn within(value: &str, max: usize) -> bool {
    value.trim().chars().count() <= max
}

/// Checks required fields, formats and date strings. The report is advisory:
/// generation proceeds regardless.
pub fn validate_record(record: &ResumeRecord) -> ValidationReport {
    let p = &record.personal;
    let checks = [
        (is_present(&p.name), "Name is required"),
        (is_present(&p.title), "Professional title is required"),
        (is_valid_email(&p.email), "Valid email is required"),
        (is_valid_phone(&p.phone), "Valid phone number is required"),
        (is_present(&p.location), "Location is required"),
        (within(&p.name, MAX_NAME_LEN), "Name must be 100 characters or less"),
        (within(&p.title, MAX_TITLE_LEN), "Title must be 100 characters or less"),
        (within(&p.summary, MAX_SUMMARY_LEN), "Summary must be 2000 characters or less"),
    ];

    let mut errors: Vec<String> = checks
        .into_iter()
        .filter(|(ok, _)| !ok)
        .map(|(_, message)| message.to_string())
        .collect();
    errors.extend(date_warnings(record, &current_year_options()));

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Date strings
// ────────────────────────────────────────────────────────────────────────────

/// True when the date picker can show `text`: every month is one of the
/// picker's names and every year is one of `years`.
fn fits_picker(text: &str, years: &[i32]) -> bool {
    let range = DateRange::parse(text);
    let month_ok = |m: &str| m.is_empty() || MONTHS.contains(&m);
    let year_ok = |y: &str| y.is_empty() || y.parse::<i32>().is_ok_and(|y| years.contains(&y));

    month_ok(&range.start_month)
        && month_ok(&range.end_month)
        && year_ok(&range.start_year)
        && year_ok(&range.end_year)
}

/// Job dates and education years that would be lost on a round trip through
/// the picker.
pub fn date_warnings(record: &ResumeRecord, years: &[i32]) -> Vec<String> {
    let jobs = record
        .jobs
        .iter()
        .enumerate()
        .map(|(i, job)| (format!("Job {}", i + 1), job.dates.as_str()));
    let education = record
        .education
        .iter()
        .enumerate()
        .map(|(i, entry)| (format!("Education {}", i + 1), entry.years.as_str()));

    jobs.chain(education)
        .filter(|(_, text)| !fits_picker(text, years))
        .map(|(label, text)| format!("{label}: dates \"{text}\" are not a recognised month/year range"))
        .collect()
}
