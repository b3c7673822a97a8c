//! Professional: slate palette with a navy pill accent, no boxes, inline dates.

use super::{
    BadgeStyle, LayoutConstants, Palette, Rgb, StyleConfig, ThemeId, Typography, Visual,
};

pub(super) static PROFESSIONAL: StyleConfig = StyleConfig {
    id: ThemeId::Professional,
    colors: Palette {
        text_dark: Rgb(30, 41, 59),
        text_grey: Rgb(71, 85, 105),
        light_grey: Rgb(100, 116, 139),
        italic_grey: Rgb(148, 163, 184),
        header_background: None,
        box_background: Some(Rgb(248, 250, 252)),
        box_border: Some(Rgb(203, 213, 225)),
        pill_background: Rgb(255, 255, 255),
        pill_border: Some(Rgb(30, 58, 138)),
    },
    typography: Typography {
        name_size: 22.0,
        header_title_size: 10.5,
        header_contact_size: 9.0,
        section_title_size: 11.0,
        job_title_size: 10.5,
        badge_size: 8.5,
        body_size: 9.5,
        responsibility_size: 9.0,
        small_size: 8.5,
        tiny_size: 8.0,
    },
    layout: LayoutConstants {
        page_margins: 20.0,
        header_height: 45.0,
        section_spacing: 11.0,
        box_padding: 4.5,
        summary_top_margin: 50.0,
        skills_spacing: 8.0,
        work_experience_spacing: 6.0,
        education_page_threshold: 175.0,
        references_top_spacing: 12.0,
        box_spacing: 6.0,
        sidebar: None,
    },
    visual: Visual {
        border_radius: 0.0,
        badge_border_radius: 0.0,
        pill_border_radius: 0.0,
        thin_line_width: 0.4,
        thick_line_width: 0.8,
        use_colored_header: false,
        badge_style: BadgeStyle::Filled,
    },
};
