//! Top-of-page header: name, job title and contact line.

use crate::layout::{FontWeight, PaintMode, TextAlign, PAGE_WIDTH};
use crate::models::ResumeRecord;
use crate::render::{RenderContext, SectionKind};
use crate::styles::Rgb;

const CONTACT_SEPARATOR: &str = "  |  ";

/// Non-empty contact fields joined by a spaced pipe.
pub fn contact_line(record: &ResumeRecord) -> String {
    let p = &record.personal;
    [&p.phone, &p.email, &p.location]
        .into_iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(CONTACT_SEPARATOR)
}

/// Centred header for the stacked layouts.
///
/// Coloured-header themes draw a full-width accent band with white text;
/// the others use dark text on white with an accent rule underneath.
pub fn render_header(ctx: &mut RenderContext<'_>, record: &ResumeRecord) {
    let style = ctx.style;
    let height = style.layout.header_height;
    let center = PAGE_WIDTH / 2.0;

    let (name_color, title_color, contact_color) = if style.visual.use_colored_header {
        ctx.canvas.set_fill_color(ctx.palette.header_accent);
        ctx.canvas.rect(0.0, 0.0, PAGE_WIDTH, height, 0.0, PaintMode::Fill);
        (Rgb::WHITE, Rgb::WHITE, Rgb::WHITE)
    } else {
        (
            style.colors.text_dark,
            ctx.palette.header_accent,
            style.colors.text_grey,
        )
    };

    ctx.use_font(FontWeight::Bold, style.typography.name_size);
    ctx.text_color(name_color);
    ctx.canvas
        .text_line(&record.personal.name, center, 18.0, TextAlign::Center);

    ctx.use_font(FontWeight::Normal, style.typography.header_title_size);
    ctx.text_color(title_color);
    ctx.canvas.text_line(
        &record.personal.title.to_uppercase(),
        center,
        26.0,
        TextAlign::Center,
    );

    ctx.use_font(FontWeight::Normal, style.typography.header_contact_size);
    ctx.text_color(contact_color);
    ctx.canvas
        .text_line(&contact_line(record), center, 35.0, TextAlign::Center);

    if !style.visual.use_colored_header {
        let margin = style.layout.page_margins;
        ctx.canvas.set_draw_color(ctx.palette.header_accent);
        ctx.canvas.set_line_width(style.visual.thick_line_width);
        ctx.canvas
            .line(margin, height - 2.0, PAGE_WIDTH - margin, height - 2.0);
    }

    ctx.record(SectionKind::Header, 0, 0.0, 0.0, height);
}

/// Full-width accent band with left-aligned name and title. Contact details
/// live in the sidebar for this layout.
pub fn render_band_header(ctx: &mut RenderContext<'_>, record: &ResumeRecord) {
    let style = ctx.style;
    let height = style.layout.header_height;
    let x = style.layout.page_margins;

    ctx.canvas.set_fill_color(ctx.palette.header_accent);
    ctx.canvas.rect(0.0, 0.0, PAGE_WIDTH, height, 0.0, PaintMode::Fill);

    ctx.use_font(FontWeight::Bold, style.typography.name_size);
    ctx.text_color(Rgb::WHITE);
    ctx.canvas
        .text_line(&record.personal.name, x, 20.0, TextAlign::Left);

    ctx.use_font(FontWeight::Normal, style.typography.header_title_size);
    ctx.canvas.text_line(
        &record.personal.title.to_uppercase(),
        x,
        29.0,
        TextAlign::Left,
    );

    ctx.record(SectionKind::Header, 0, 0.0, 0.0, height);
}
