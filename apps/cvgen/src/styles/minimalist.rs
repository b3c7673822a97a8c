//! Minimalist: white header, sharp corners, thin borders, wider margins.

use super::{
    BadgeStyle, LayoutConstants, Palette, Rgb, StyleConfig, ThemeId, Typography, Visual,
};

pub(super) static MINIMALIST: StyleConfig = StyleConfig {
    id: ThemeId::Minimalist,
    colors: Palette {
        text_dark: Rgb(45, 55, 72),
        text_grey: Rgb(102, 102, 102),
        light_grey: Rgb(85, 85, 85),
        italic_grey: Rgb(136, 136, 136),
        header_background: None,
        box_background: Some(Rgb(252, 252, 252)),
        box_border: Some(Rgb(200, 200, 200)),
        pill_background: Rgb(255, 255, 255),
        pill_border: Some(Rgb(200, 200, 200)),
    },
    typography: Typography {
        name_size: 22.0,
        header_title_size: 10.0,
        header_contact_size: 9.0,
        section_title_size: 11.0,
        job_title_size: 10.5,
        badge_size: 9.0,
        body_size: 9.0,
        responsibility_size: 8.5,
        small_size: 8.0,
        tiny_size: 7.5,
    },
    layout: LayoutConstants {
        page_margins: 18.0,
        header_height: 42.0,
        section_spacing: 10.0,
        box_padding: 3.0,
        summary_top_margin: 46.0,
        skills_spacing: 6.0,
        work_experience_spacing: 5.0,
        education_page_threshold: 180.0,
        references_top_spacing: 10.0,
        box_spacing: 5.0,
        sidebar: None,
    },
    visual: Visual {
        border_radius: 0.0,
        badge_border_radius: 0.0,
        pill_border_radius: 0.0,
        thin_line_width: 0.2,
        thick_line_width: 0.5,
        use_colored_header: false,
        badge_style: BadgeStyle::Outlined,
    },
};
