//! Human-facing catalog entries for the style picker.

use serde::Serialize;

use crate::styles::ThemeId;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleMetadata {
    pub id: ThemeId,
    pub display_name: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub recommended_for: &'static [&'static str],
}

static CATALOG: [StyleMetadata; 4] = [
    StyleMetadata {
        id: ThemeId::Modern,
        display_name: "Modern",
        description: "Clean and contemporary design with colorful header and rounded corners. \
                      Perfect for tech and creative roles.",
        tags: &["colorful", "rounded", "contemporary"],
        recommended_for: &["Software Engineer", "Designer", "Marketing Manager"],
    },
    StyleMetadata {
        id: ThemeId::Minimalist,
        display_name: "Minimalist Modern",
        description: "Sleek minimalist design with sharp lines and maximum white space. \
                      Ideal for design-conscious professionals.",
        tags: &["clean", "minimal", "sharp"],
        recommended_for: &["Product Manager", "Architect", "Consultant"],
    },
    StyleMetadata {
        id: ThemeId::Professional,
        display_name: "Professional",
        description: "Traditional corporate design with conservative styling and generous \
                      spacing. Best for finance, legal, and executive roles.",
        tags: &["formal", "traditional", "corporate"],
        recommended_for: &["Financial Analyst", "Attorney", "Healthcare Professional"],
    },
    StyleMetadata {
        id: ThemeId::Tech,
        display_name: "Tech/Startup",
        description: "Unique sidebar layout with contact and skills on the left, experience \
                      on the right. Modern design for tech roles.",
        tags: &["sidebar", "modern", "tech"],
        recommended_for: &["Software Developer", "Product Manager", "Data Scientist"],
    },
];

pub fn get_style_metadata(id: ThemeId) -> &'static StyleMetadata {
    CATALOG
        .iter()
        .find(|m| m.id == id)
        .unwrap_or(&CATALOG[0])
}

pub fn all_style_metadata() -> &'static [StyleMetadata] {
    &CATALOG
}
