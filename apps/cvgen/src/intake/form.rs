//! Headless form state and the collection seam the renderer depends on.

use crate::layout::FontFamily;
use crate::models::{
    DateRange, EducationEntry, JobEntry, PersonalInfo, Reference, ResumeRecord, Skills,
    resume::DEFAULT_THEME_COLOR,
};
use crate::styles::ThemeId;

/// Anything that can hand over a finished record for rendering.
pub trait FormSnapshotProvider {
    fn collect(&self) -> ResumeRecord;
}

/// A record supplied directly, for tests and non-interactive callers.
#[derive(Debug, Clone)]
pub struct StaticForm(pub ResumeRecord);

impl FormSnapshotProvider for StaticForm {
    fn collect(&self) -> ResumeRecord {
        self.0.clone()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Raw rows
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct SkillCategoryRow {
    pub name: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct JobRow {
    pub title: String,
    pub dates: DateRange,
    pub company: String,
    pub location: String,
    /// Textarea content, one responsibility per line.
    pub responsibilities: String,
}

#[derive(Debug, Clone, Default)]
pub struct EducationRow {
    pub degree: String,
    /// Years-only picker; month fields stay empty.
    pub years: DateRange,
    pub institution: String,
}

/// Field values exactly as typed. Nothing is cleaned until [`collect`].
///
/// [`collect`]: FormSnapshotProvider::collect
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub personal: PersonalInfo,
    pub skill_categories: Vec<SkillCategoryRow>,
    pub jobs: Vec<JobRow>,
    pub education: Vec<EducationRow>,
    pub certifications: Vec<String>,
    pub references: [Reference; 2],
    pub style_id: ThemeId,
    pub theme_color: String,
    pub font: String,
}

impl FormState {
    /// Fills every row from an existing record, the way an import populates
    /// the form.
    pub fn populate(record: &ResumeRecord) -> Self {
        Self {
            personal: record.personal.clone(),
            skill_categories: record
                .skills
                .iter()
                .map(|c| SkillCategoryRow {
                    name: c.name.clone(),
                    items: c.items.clone(),
                })
                .collect(),
            jobs: record
                .jobs
                .iter()
                .map(|j| JobRow {
                    title: j.title.clone(),
                    dates: DateRange::parse(&j.dates),
                    company: j.company.clone(),
                    location: j.location.clone(),
                    responsibilities: j.responsibilities.join("\n"),
                })
                .collect(),
            education: record
                .education
                .iter()
                .map(|e| EducationRow {
                    degree: e.degree.clone(),
                    years: DateRange::parse(&e.years),
                    institution: e.institution.clone(),
                })
                .collect(),
            certifications: record.certifications.clone(),
            references: record.references.clone(),
            style_id: record.style_id,
            theme_color: record.theme_color.clone(),
            font: record.font_family.as_str().to_string(),
        }
    }
}

fn trimmed(value: &str) -> String {
    value.trim().to_string()
}

/// Newline-separated textarea to a trimmed, non-empty list.
pub fn parse_responsibilities(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn collect_skills(rows: &[SkillCategoryRow]) -> Skills {
    rows.iter()
        .filter_map(|row| {
            let name = row.name.trim();
            let items: Vec<String> = row
                .items
                .iter()
                .map(|i| i.trim())
                .filter(|i| !i.is_empty())
                .map(str::to_string)
                .collect();
            (!name.is_empty() && !items.is_empty()).then(|| (name.to_string(), items))
        })
        .collect()
}

fn collect_reference(reference: &Reference) -> Reference {
    Reference {
        name: trimmed(&reference.name),
        title: trimmed(&reference.title),
        company: trimmed(&reference.company),
    }
}

impl FormSnapshotProvider for FormState {
    fn collect(&self) -> ResumeRecord {
        let p = &self.personal;
        let theme_color = match self.theme_color.trim() {
            "" => DEFAULT_THEME_COLOR.to_string(),
            color => color.to_string(),
        };

        ResumeRecord {
            personal: PersonalInfo {
                name: trimmed(&p.name),
                title: trimmed(&p.title),
                phone: trimmed(&p.phone),
                email: trimmed(&p.email),
                location: trimmed(&p.location),
                summary: trimmed(&p.summary),
            },
            skills: collect_skills(&self.skill_categories),
            jobs: self
                .jobs
                .iter()
                .filter(|j| !j.title.trim().is_empty())
                .map(|j| JobEntry {
                    title: trimmed(&j.title),
                    dates: j.dates.format(),
                    company: trimmed(&j.company),
                    location: trimmed(&j.location),
                    responsibilities: parse_responsibilities(&j.responsibilities),
                })
                .collect(),
            education: self
                .education
                .iter()
                .filter(|e| !e.degree.trim().is_empty())
                .map(|e| EducationEntry {
                    degree: trimmed(&e.degree),
                    years: e.years.format(),
                    institution: trimmed(&e.institution),
                })
                .collect(),
            certifications: self
                .certifications
                .iter()
                .map(|c| c.trim())
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect(),
            references: [
                collect_reference(&self.references[0]),
                collect_reference(&self.references[1]),
            ],
            style_id: self.style_id,
            theme_color,
            font_family: FontFamily::from_name(self.font.trim()),
        }
    }
}
