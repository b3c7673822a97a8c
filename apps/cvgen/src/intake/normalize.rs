//! Coerces arbitrary imported JSON into a [`PartialResumeRecord`].
//!
//! Every field is independently optional and leniently typed: lists may arrive
//! as arrays or delimited strings, scalars are stringified. Only a non-object
//! top level is rejected.

use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::models::{
    EducationEntry, JobEntry, PartialPersonalInfo, PartialResumeRecord, Reference, Skills,
};

/// String form of a scalar. Falsy values (null, "", false, 0) and containers
/// count as absent.
fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// String form of a list item. Every number and bool is kept; blank strings
/// are filtered later by the caller.
fn item(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn field(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(scalar)
}

/// Like [`field`] but absent becomes the empty string.
fn field_or_empty(object: Option<&Map<String, Value>>, key: &str) -> String {
    object.and_then(|o| field(o, key)).unwrap_or_default()
}

/// Trimmed, non-empty entries from an array or a `delimiter`-separated string.
fn string_list(value: &Value, delimiter: char) -> Option<Vec<String>> {
    let raw: Vec<String> = match value {
        Value::Array(items) => items.iter().filter_map(item).collect(),
        Value::String(s) => s.split(delimiter).map(str::to_string).collect(),
        _ => return None,
    };
    Some(
        raw.iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

fn normalize_personal(value: &Value) -> Option<PartialPersonalInfo> {
    let object = value.as_object()?;
    Some(PartialPersonalInfo {
        name: field(object, "name"),
        title: field(object, "title"),
        phone: field(object, "phone"),
        email: field(object, "email"),
        location: field(object, "location"),
        summary: field(object, "summary"),
    })
}

fn normalize_skills(value: &Value) -> Option<Skills> {
    let object = value.as_object()?;
    Some(
        object
            .iter()
            .filter_map(|(category, items)| {
                string_list(items, ',').map(|list| (category.clone(), list))
            })
            .collect(),
    )
}

fn normalize_job(value: &Value) -> JobEntry {
    let object = value.as_object();
    JobEntry {
        title: field_or_empty(object, "title"),
        dates: field_or_empty(object, "dates"),
        company: field_or_empty(object, "company"),
        location: field_or_empty(object, "location"),
        responsibilities: object
            .and_then(|o| o.get("responsibilities"))
            .and_then(|r| string_list(r, '\n'))
            .unwrap_or_default(),
    }
}

fn normalize_education(value: &Value) -> EducationEntry {
    let object = value.as_object();
    EducationEntry {
        degree: field_or_empty(object, "degree"),
        years: field_or_empty(object, "years"),
        institution: field_or_empty(object, "institution"),
    }
}

fn normalize_reference(value: &Value) -> Reference {
    let object = value.as_object();
    Reference {
        name: field_or_empty(object, "name"),
        title: field_or_empty(object, "title"),
        company: field_or_empty(object, "company"),
    }
}

/// Fewer than two references means the field is ignored; extras are dropped.
fn normalize_references(value: &Value) -> Option<[Reference; 2]> {
    match value.as_array()?.as_slice() {
        [first, second, ..] => Some([normalize_reference(first), normalize_reference(second)]),
        _ => None,
    }
}

pub fn normalize_imported_json(raw: &Value) -> Result<PartialResumeRecord, AppError> {
    let object = raw.as_object().ok_or(AppError::InvalidFormat)?;

    Ok(PartialResumeRecord {
        personal: object.get("personal").and_then(normalize_personal),
        skills: object.get("skills").and_then(normalize_skills),
        jobs: object
            .get("jobs")
            .and_then(Value::as_array)
            .map(|jobs| jobs.iter().map(normalize_job).collect()),
        education: object
            .get("education")
            .and_then(Value::as_array)
            .map(|entries| entries.iter().map(normalize_education).collect()),
        certifications: object
            .get("certifications")
            .filter(|v| v.is_array())
            .and_then(|v| string_list(v, '\n')),
        references: object.get("references").and_then(normalize_references),
        theme_color: object
            .get("themeColor")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
