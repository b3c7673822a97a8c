//! Tech: accent header band over a tinted left sidebar (contact, skills) and a
//! right main column. Box, border and pill colours all derive from the accent.

use super::{
    BadgeStyle, LayoutConstants, Palette, Rgb, SidebarGeometry, StyleConfig, ThemeId, Typography,
    Visual,
};

pub(super) static TECH: StyleConfig = StyleConfig {
    id: ThemeId::Tech,
    colors: Palette {
        text_dark: Rgb(30, 41, 59),
        text_grey: Rgb(100, 116, 139),
        light_grey: Rgb(71, 85, 105),
        italic_grey: Rgb(148, 163, 184),
        header_background: None,
        box_background: None,
        box_border: None,
        pill_background: Rgb(255, 255, 255),
        pill_border: None,
    },
    typography: Typography {
        name_size: 26.0,
        header_title_size: 11.0,
        header_contact_size: 9.5,
        section_title_size: 13.0,
        job_title_size: 11.0,
        badge_size: 9.0,
        body_size: 9.5,
        responsibility_size: 9.0,
        small_size: 8.5,
        tiny_size: 8.0,
    },
    layout: LayoutConstants {
        page_margins: 12.0,
        header_height: 40.0,
        section_spacing: 7.0,
        box_padding: 4.0,
        summary_top_margin: 50.0,
        skills_spacing: 8.0,
        work_experience_spacing: 5.0,
        education_page_threshold: 200.0,
        references_top_spacing: 8.0,
        box_spacing: 5.0,
        sidebar: Some(SidebarGeometry {
            width: 60.0,
            start_y: 50.0,
            main_content_x: 80.0,
        }),
    },
    visual: Visual {
        border_radius: 2.0,
        badge_border_radius: 1.5,
        pill_border_radius: 2.0,
        thin_line_width: 0.5,
        thick_line_width: 0.8,
        use_colored_header: true,
        badge_style: BadgeStyle::Outlined,
    },
};
