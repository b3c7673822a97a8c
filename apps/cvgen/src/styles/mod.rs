//! Style configuration registry.
//!
//! Each theme is a closed, fully-populated `StyleConfig`. Only palette roles may
//! be absent (`None` = derive from the accent colour, see `color`). Lookup is
//! total: unknown ids resolve to the modern theme.

pub mod color;
pub mod metadata;
mod minimalist;
mod modern;
mod professional;
mod tech;

use serde::{Deserialize, Serialize};

pub use color::{derive_theme, DerivedPalette, Rgb};

// ────────────────────────────────────────────────────────────────────────────
// Theme identifiers
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ThemeId {
    #[default]
    Modern,
    Minimalist,
    Professional,
    Tech,
}

impl ThemeId {
    pub const ALL: [ThemeId; 4] = [
        ThemeId::Modern,
        ThemeId::Minimalist,
        ThemeId::Professional,
        ThemeId::Tech,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeId::Modern => "modern",
            ThemeId::Minimalist => "minimalist",
            ThemeId::Professional => "professional",
            ThemeId::Tech => "tech",
        }
    }

    /// Total parse: anything unrecognised is the default theme.
    pub fn from_id(id: &str) -> ThemeId {
        match id.trim().to_ascii_lowercase().as_str() {
            "minimalist" => ThemeId::Minimalist,
            "professional" => ThemeId::Professional,
            "tech" => ThemeId::Tech,
            _ => ThemeId::Modern,
        }
    }
}

impl From<String> for ThemeId {
    fn from(id: String) -> Self {
        ThemeId::from_id(&id)
    }
}

impl From<ThemeId> for String {
    fn from(id: ThemeId) -> Self {
        id.as_str().to_string()
    }
}

impl std::fmt::Display for ThemeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Configuration records
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeStyle {
    /// Dates as plain inline text; entries are not boxed.
    Filled,
    /// Dates inside a bordered pill, right-aligned in a boxed entry.
    Outlined,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub text_dark: Rgb,
    pub text_grey: Rgb,
    pub light_grey: Rgb,
    pub italic_grey: Rgb,
    pub header_background: Option<Rgb>,
    pub box_background: Option<Rgb>,
    pub box_border: Option<Rgb>,
    pub pill_background: Rgb,
    pub pill_border: Option<Rgb>,
}

/// Point sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct Typography {
    pub name_size: f32,
    pub header_title_size: f32,
    pub header_contact_size: f32,
    pub section_title_size: f32,
    pub job_title_size: f32,
    pub badge_size: f32,
    pub body_size: f32,
    pub responsibility_size: f32,
    pub small_size: f32,
    pub tiny_size: f32,
}

#[cfg(test)]
impl Typography {
    pub fn sizes(&self) -> [f32; 10] {
        [
            self.name_size,
            self.header_title_size,
            self.header_contact_size,
            self.section_title_size,
            self.job_title_size,
            self.badge_size,
            self.body_size,
            self.responsibility_size,
            self.small_size,
            self.tiny_size,
        ]
    }
}

/// Present only on sidebar-family themes.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarGeometry {
    pub width: f32,
    pub start_y: f32,
    pub main_content_x: f32,
}

/// Millimetres.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConstants {
    pub page_margins: f32,
    pub header_height: f32,
    pub section_spacing: f32,
    pub box_padding: f32,
    pub summary_top_margin: f32,
    pub skills_spacing: f32,
    pub work_experience_spacing: f32,
    pub education_page_threshold: f32,
    pub references_top_spacing: f32,
    pub box_spacing: f32,
    pub sidebar: Option<SidebarGeometry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Visual {
    pub border_radius: f32,
    pub badge_border_radius: f32,
    pub pill_border_radius: f32,
    pub thin_line_width: f32,
    pub thick_line_width: f32,
    pub use_colored_header: bool,
    pub badge_style: BadgeStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleConfig {
    pub id: ThemeId,
    pub colors: Palette,
    pub typography: Typography,
    pub layout: LayoutConstants,
    pub visual: Visual,
}

impl StyleConfig {
    /// Entries are drawn inside boxes only for outlined-badge themes.
    pub fn boxed_entries(&self) -> bool {
        self.visual.badge_style == BadgeStyle::Outlined
    }

    pub fn is_sidebar_layout(&self) -> bool {
        self.layout.sidebar.is_some()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Registry
// ────────────────────────────────────────────────────────────────────────────

pub fn get_style_config(id: ThemeId) -> &'static StyleConfig {
    match id {
        ThemeId::Modern => &modern::MODERN,
        ThemeId::Minimalist => &minimalist::MINIMALIST,
        ThemeId::Professional => &professional::PROFESSIONAL,
        ThemeId::Tech => &tech::TECH,
    }
}

/// Lookup by raw id string; unknown ids fall back to modern.
pub fn get_style_config_by_name(id: &str) -> &'static StyleConfig {
    get_style_config(ThemeId::from_id(id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_returns_matching_theme() {
        for id in ThemeId::ALL {
            assert_eq!(get_style_config(id).id, id);
        }
    }

    #[test]
    fn test_unknown_id_falls_back_to_modern() {
        assert_eq!(get_style_config_by_name("unknown").id, ThemeId::Modern);
        assert_eq!(get_style_config_by_name("").id, ThemeId::Modern);
        assert_eq!(get_style_config_by_name("TECH").id, ThemeId::Tech);
    }

    #[test]
    fn test_theme_id_serde_is_total() {
        let id: ThemeId = serde_json::from_str("\"professional\"").unwrap();
        assert_eq!(id, ThemeId::Professional);
        let fallback: ThemeId = serde_json::from_str("\"retro\"").unwrap();
        assert_eq!(fallback, ThemeId::Modern);
        assert_eq!(serde_json::to_string(&ThemeId::Tech).unwrap(), "\"tech\"");
    }

    #[test]
    fn test_only_tech_uses_sidebar_layout() {
        for id in ThemeId::ALL {
            assert_eq!(
                get_style_config(id).is_sidebar_layout(),
                id == ThemeId::Tech,
                "{id}"
            );
        }
    }

    #[test]
    fn test_only_professional_uses_filled_badges() {
        for id in ThemeId::ALL {
            let filled = get_style_config(id).visual.badge_style == BadgeStyle::Filled;
            assert_eq!(filled, id == ThemeId::Professional, "{id}");
        }
    }

    #[test]
    fn test_all_typography_sizes_positive() {
        for id in ThemeId::ALL {
            for size in get_style_config(id).typography.sizes() {
                assert!(size > 0.0, "{id} has a non-positive size");
            }
        }
    }

    #[test]
    fn test_layout_constants_fit_on_a4() {
        for id in ThemeId::ALL {
            let l = &get_style_config(id).layout;
            assert!(l.page_margins > 0.0 && l.page_margins < 30.0);
            assert!(l.header_height < l.summary_top_margin + 1.0);
            assert!(l.education_page_threshold < 297.0);
            assert!(l.box_spacing > 0.0);
        }
    }

    #[test]
    fn test_sidebar_geometry_is_consistent() {
        let tech = get_style_config(ThemeId::Tech);
        let sidebar = tech.layout.sidebar.as_ref().unwrap();
        assert!(sidebar.main_content_x > sidebar.width);
        assert!(sidebar.start_y >= tech.layout.header_height);
    }

    #[test]
    fn test_minimalist_has_sharp_corners_and_white_header() {
        let m = get_style_config(ThemeId::Minimalist);
        assert_eq!(m.visual.border_radius, 0.0);
        assert_eq!(m.visual.badge_border_radius, 0.0);
        assert_eq!(m.visual.pill_border_radius, 0.0);
        assert!(!m.visual.use_colored_header);
    }
}
