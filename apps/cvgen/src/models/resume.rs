use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::layout::font_metrics::FontFamily;
use crate::styles::ThemeId;

/// Accent colour used when the form leaves the picker untouched.
pub const DEFAULT_THEME_COLOR: &str = "#667eea";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    pub phone: String,
    pub email: String,
    pub location: String,
    pub summary: String,
}

/// One named group of skills, rendered as a box of pills or a bulleted list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: String,
    pub items: Vec<String>,
}

/// Ordered mapping from category name to skills.
///
/// Serialized as a JSON object whose key order is the category order. Category
/// names are unique: inserting an existing name replaces its items in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Skills(Vec<SkillCategory>);

impl Skills {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn insert(&mut self, name: impl Into<String>, items: Vec<String>) {
        let name = name.into();
        match self.0.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.items = items,
            None => self.0.push(SkillCategory { name, items }),
        }
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.items.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SkillCategory> {
        self.0.iter()
    }

    /// Categories that have at least one skill. Empty ones are never rendered.
    pub fn non_empty(&self) -> impl Iterator<Item = &SkillCategory> {
        self.0.iter().filter(|c| !c.items.is_empty())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<N: Into<String>> FromIterator<(N, Vec<String>)> for Skills {
    fn from_iter<I: IntoIterator<Item = (N, Vec<String>)>>(iter: I) -> Self {
        let mut skills = Skills::new();
        for (name, items) in iter {
            skills.insert(name, items);
        }
        skills
    }
}

impl Serialize for Skills {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for category in &self.0 {
            map.serialize_entry(&category.name, &category.items)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Skills {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SkillsVisitor;

        impl<'de> Visitor<'de> for SkillsVisitor {
            type Value = Skills;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of skill category names to skill lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Skills, A::Error> {
                let mut skills = Skills::new();
                while let Some((name, items)) = access.next_entry::<String, Vec<String>>()? {
                    skills.insert(name, items);
                }
                Ok(skills)
            }
        }

        deserializer.deserialize_map(SkillsVisitor)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobEntry {
    pub title: String,
    /// Free-text range, e.g. "Jan 2022 - Present".
    pub dates: String,
    pub company: String,
    pub location: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    /// Free-text range, e.g. "2015 - 2019".
    pub years: String,
    pub institution: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reference {
    pub name: String,
    pub title: String,
    pub company: String,
}

impl Reference {
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty()
    }
}

/// The canonical, read-only input to rendering.
///
/// Built fresh from the form or an import on every generate request. The
/// renderer never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResumeRecord {
    pub personal: PersonalInfo,
    pub skills: Skills,
    pub jobs: Vec<JobEntry>,
    pub education: Vec<EducationEntry>,
    pub certifications: Vec<String>,
    /// Always two slots; a slot with an empty name is not rendered.
    pub references: [Reference; 2],
    #[serde(rename = "cvStyle")]
    pub style_id: ThemeId,
    /// Hex accent colour (`#rrggbb`). Parsed at generation time; an invalid
    /// value is the one hard rendering failure.
    pub theme_color: String,
    pub font_family: FontFamily,
}

impl Default for ResumeRecord {
    fn default() -> Self {
        Self {
            personal: PersonalInfo::default(),
            skills: Skills::default(),
            jobs: Vec::new(),
            education: Vec::new(),
            certifications: Vec::new(),
            references: Default::default(),
            style_id: ThemeId::default(),
            theme_color: DEFAULT_THEME_COLOR.to_string(),
            font_family: FontFamily::default(),
        }
    }
}

/// Partial personal info from an import. `None` leaves the current value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialPersonalInfo {
    pub name: Option<String>,
    pub title: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub location: Option<String>,
    pub summary: Option<String>,
}

/// The result of normalizing imported JSON: every field independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialResumeRecord {
    pub personal: Option<PartialPersonalInfo>,
    pub skills: Option<Skills>,
    pub jobs: Option<Vec<JobEntry>>,
    pub education: Option<Vec<EducationEntry>>,
    pub certifications: Option<Vec<String>>,
    pub references: Option<[Reference; 2]>,
    pub theme_color: Option<String>,
}

impl ResumeRecord {
    /// Overlays the fields present in `partial`, leaving absent ones untouched.
    pub fn apply(&mut self, partial: PartialResumeRecord) {
        if let Some(personal) = partial.personal {
            let target = &mut self.personal;
            let fields = [
                (&mut target.name, personal.name),
                (&mut target.title, personal.title),
                (&mut target.phone, personal.phone),
                (&mut target.email, personal.email),
                (&mut target.location, personal.location),
                (&mut target.summary, personal.summary),
            ];
            for (slot, value) in fields {
                if let Some(value) = value {
                    *slot = value;
                }
            }
        }
        if let Some(skills) = partial.skills {
            self.skills = skills;
        }
        if let Some(jobs) = partial.jobs {
            self.jobs = jobs;
        }
        if let Some(education) = partial.education {
            self.education = education;
        }
        if let Some(certifications) = partial.certifications {
            self.certifications = certifications;
        }
        if let Some(references) = partial.references {
            self.references = references;
        }
        if let Some(color) = partial.theme_color {
            self.theme_color = color;
        }
    }

    /// Renders the record in the import/export template schema.
    pub fn to_template_json(&self) -> serde_json::Value {
        serde_json::json!({
            "personal": self.personal,
            "skills": self.skills,
            "jobs": self.jobs,
            "education": self.education,
            "certifications": self.certifications,
            "references": self.references,
            "themeColor": self.theme_color,
        })
    }

    /// Suggested download name: whitespace runs and characters that are not
    /// legal in a single path component become `_`.
    pub fn pdf_filename(&self) -> String {
        pdf_filename_for(&self.personal.name)
    }
}

pub fn pdf_filename_for(name: &str) -> String {
    use once_cell::sync::Lazy;
    use regex::Regex;

    static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
    static UNSAFE_CHAR: Lazy<Regex> =
        Lazy::new(|| Regex::new(r#"[/\\:*?"<>|\x00-\x1f]"#).unwrap());

    let spaced = WHITESPACE_RUN.replace_all(name, "_");
    format!("{}_CV.pdf", UNSAFE_CHAR.replace_all(&spaced, "_"))
}
