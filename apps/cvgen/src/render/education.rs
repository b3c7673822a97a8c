use tracing::debug;

use crate::layout::{FontWeight, TextAlign};
use crate::models::{EducationEntry, ResumeRecord};
use crate::render::{Region, RenderContext, SectionKind};

pub const EDUCATION_TITLE: &str = "Education";
pub const CERTIFICATIONS_TITLE: &str = "Certifications";

const DEGREE_LINE_STEP: f32 = 4.0;
const INSTITUTION_LINE_STEP: f32 = 3.5;
const CERT_LINE_STEP: f32 = 4.0;
const MIN_EDUCATION_HEIGHT: f32 = 14.0;
const ENTRY_GAP: f32 = 3.0;
const TEXT_INSET: f32 = 4.0;
const TRAILING_SPACE: f32 = 5.0;

/// Education on the left, certifications on the right, both starting at the
/// same cursor. Returns the lower of the two column cursors plus a gap.
pub fn render_education(ctx: &mut RenderContext<'_>, record: &ResumeRecord, region: Region, y: f32) -> f32 {
    let certifications: Vec<&str> = record
        .certifications
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty())
        .collect();
    if record.education.is_empty() && certifications.is_empty() {
        return y;
    }

    let y = ctx.break_if_past(y, ctx.style.layout.education_page_threshold);
    let (left, right) = region.columns();

    let mut left_y = y;
    if !record.education.is_empty() {
        left_y = ctx.section_title(EDUCATION_TITLE, left, left_y);
        for (index, entry) in record.education.iter().enumerate() {
            let height = education_entry(ctx, entry, left, left_y);
            ctx.record(SectionKind::Education, index, left.x, left_y, height);
            left_y += height + ENTRY_GAP;
        }
    }

    let mut right_y = y;
    if !certifications.is_empty() {
        right_y = ctx.section_title(CERTIFICATIONS_TITLE, right, right_y);
        for (index, cert) in certifications.iter().enumerate() {
            let height = certification_entry(ctx, cert, right, right_y);
            ctx.record(SectionKind::Certification, index, right.x, right_y, height);
            right_y += height + ENTRY_GAP;
        }
    }

    debug!(left_y, right_y, "education and certifications rendered");
    left_y.max(right_y) + TRAILING_SPACE
}

/// `max(14, 8 + degreeLines * 4 + institutionLines * 3.5 + 2.5)`.
fn education_entry(ctx: &mut RenderContext<'_>, entry: &EducationEntry, col: Region, y: f32) -> f32 {
    let style = ctx.style;
    let typography = &style.typography;

    ctx.use_font(FontWeight::Bold, typography.body_size);
    let degree_lines = ctx.canvas.split_text(&entry.degree, col.width - 30.0);
    let title_height = degree_lines.len().max(1) as f32 * DEGREE_LINE_STEP;

    ctx.use_font(FontWeight::Normal, typography.small_size);
    let institution_lines = ctx.canvas.split_text(&entry.institution, col.width - 10.0);

    let height = MIN_EDUCATION_HEIGHT.max(
        8.0 + title_height + institution_lines.len() as f32 * INSTITUTION_LINE_STEP + 2.5,
    );

    ctx.entry_box(col.x, y, col.width, height);

    ctx.use_font(FontWeight::Bold, typography.body_size);
    ctx.text_color(style.colors.text_dark);
    ctx.text_block(&degree_lines, col.x + TEXT_INSET, y + 5.0, DEGREE_LINE_STEP);

    let years = entry.years.trim();
    if !years.is_empty() {
        ctx.use_font(FontWeight::Normal, typography.small_size);
        if style.boxed_entries() {
            let w = ctx.canvas.text_width(years) + 4.0;
            let x = col.right() - w - 4.0;
            ctx.outlined_badge(years, x, y + 2.0, w, 5.0, y + 5.5, 2.0);
        } else {
            ctx.text_color(style.colors.light_grey);
            ctx.canvas
                .text_line(years, col.right(), y + 5.0, TextAlign::Right);
        }
    }

    ctx.use_font(FontWeight::Normal, typography.small_size);
    ctx.text_color(style.colors.text_grey);
    ctx.text_block(
        &institution_lines,
        col.x + TEXT_INSET,
        y + 5.0 + title_height + 1.0,
        INSTITUTION_LINE_STEP,
    );

    height
}

/// `4 + lines * 4`.
fn certification_entry(ctx: &mut RenderContext<'_>, cert: &str, col: Region, y: f32) -> f32 {
    let style = ctx.style;
    ctx.use_font(FontWeight::Normal, style.typography.small_size);
    let lines = ctx.canvas.split_text(cert, col.width - 10.0);
    let height = 4.0 + lines.len() as f32 * CERT_LINE_STEP;

    ctx.entry_box(col.x, y, col.width, height);
    ctx.text_color(style.colors.text_dark);
    ctx.text_block(&lines, col.x + TEXT_INSET, y + 4.0, CERT_LINE_STEP);
    height
}
