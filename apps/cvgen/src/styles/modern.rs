//! Modern: coloured header band, rounded boxes, outlined date badges.

use super::{
    BadgeStyle, LayoutConstants, Palette, Rgb, StyleConfig, ThemeId, Typography, Visual,
};

pub(super) static MODERN: StyleConfig = StyleConfig {
    id: ThemeId::Modern,
    colors: Palette {
        text_dark: Rgb(45, 55, 72),
        text_grey: Rgb(102, 102, 102),
        light_grey: Rgb(85, 85, 85),
        italic_grey: Rgb(136, 136, 136),
        header_background: None,
        box_background: Some(Rgb(249, 250, 251)),
        box_border: Some(Rgb(229, 231, 235)),
        pill_background: Rgb(255, 255, 255),
        pill_border: Some(Rgb(229, 231, 235)),
    },
    typography: Typography {
        name_size: 24.0,
        header_title_size: 10.0,
        header_contact_size: 9.0,
        section_title_size: 12.0,
        job_title_size: 10.5,
        badge_size: 9.0,
        body_size: 9.0,
        responsibility_size: 8.5,
        small_size: 8.0,
        tiny_size: 7.5,
    },
    layout: LayoutConstants {
        page_margins: 15.0,
        header_height: 42.0,
        section_spacing: 9.0,
        box_padding: 4.0,
        summary_top_margin: 52.0,
        skills_spacing: 10.0,
        work_experience_spacing: 5.0,
        education_page_threshold: 180.0,
        references_top_spacing: 10.0,
        box_spacing: 5.0,
        sidebar: None,
    },
    visual: Visual {
        border_radius: 2.0,
        badge_border_radius: 1.5,
        pill_border_radius: 1.0,
        thin_line_width: 0.3,
        thick_line_width: 0.5,
        use_colored_header: true,
        badge_style: BadgeStyle::Outlined,
    },
};
