use tracing::debug;

use crate::layout::{FontWeight, TextAlign};
use crate::models::{Reference, ResumeRecord};
use crate::render::{Region, RenderContext, SectionKind, REFERENCES_BREAK_Y};

pub const REFERENCES_TITLE: &str = "References";
pub const CONTACT_NOTE: &str = "Contact details can be provided upon request";

pub const REFERENCE_BOX_HEIGHT: f32 = 16.0;
const TEXT_INSET: f32 = 5.0;

/// "title, company" with blank parts dropped.
pub fn reference_affiliation(reference: &Reference) -> String {
    [reference.title.trim(), reference.company.trim()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Two fixed side-by-side slots. A slot whose name is blank is skipped, so a
/// lone second reference still sits in the right-hand column.
pub fn render_references(ctx: &mut RenderContext<'_>, record: &ResumeRecord, region: Region, y: f32) -> f32 {
    if record.references.iter().all(Reference::is_blank) {
        return y;
    }

    let y = ctx.break_if_past(y, REFERENCES_BREAK_Y);
    let y = ctx.section_title(REFERENCES_TITLE, region, y);
    let (left, right) = region.columns();

    for (slot, (reference, col)) in record.references.iter().zip([left, right]).enumerate() {
        if reference.is_blank() {
            debug!(slot, "reference slot empty, skipped");
            continue;
        }
        draw_reference(ctx, reference, col, y);
        ctx.record(SectionKind::Reference, slot, col.x, y, REFERENCE_BOX_HEIGHT);
    }

    y + REFERENCE_BOX_HEIGHT + ctx.style.layout.box_spacing
}

fn draw_reference(ctx: &mut RenderContext<'_>, reference: &Reference, col: Region, y: f32) {
    let style = ctx.style;
    let typography = &style.typography;
    let x = col.x + TEXT_INSET;

    ctx.entry_box(col.x, y, col.width, REFERENCE_BOX_HEIGHT);

    ctx.use_font(FontWeight::Bold, typography.job_title_size);
    ctx.text_color(style.colors.text_dark);
    ctx.canvas
        .text_line(reference.name.trim(), x, y + 6.0, TextAlign::Left);

    let affiliation = reference_affiliation(reference);
    if !affiliation.is_empty() {
        ctx.use_font(FontWeight::Normal, typography.responsibility_size);
        ctx.text_color(style.colors.text_grey);
        ctx.canvas.text_line(&affiliation, x, y + 10.0, TextAlign::Left);
    }

    ctx.use_font(FontWeight::Italic, typography.tiny_size);
    ctx.text_color(style.colors.italic_grey);
    ctx.canvas.text_line(CONTACT_NOTE, x, y + 14.0, TextAlign::Left);
}
