use tracing::debug;

use crate::layout::FontWeight;
use crate::models::ResumeRecord;
use crate::render::{Region, RenderContext, SectionKind};

/// Baseline-to-baseline distance of summary text.
pub const SUMMARY_LINE_STEP: f32 = 4.0;

/// Wrapped summary inside a full-width box. Box height is `10 + lines * 4`.
/// An empty summary draws nothing and leaves the cursor where it was.
pub fn render_summary(ctx: &mut RenderContext<'_>, record: &ResumeRecord, region: Region, y: f32) -> f32 {
    let summary = record.personal.summary.trim();
    if summary.is_empty() {
        return y;
    }

    let style = ctx.style;
    let inset = style.layout.box_padding + 1.0;

    ctx.use_font(FontWeight::Normal, style.typography.body_size);
    let lines = ctx.canvas.split_text(summary, region.width - 2.0 * inset);
    let height = 10.0 + lines.len() as f32 * SUMMARY_LINE_STEP;

    ctx.entry_box(region.x, y, region.width, height);
    ctx.text_color(style.colors.text_dark);
    ctx.text_block(&lines, region.x + inset, y + 6.0, SUMMARY_LINE_STEP);

    ctx.record(SectionKind::Summary, 0, region.x, y, height);
    debug!(lines = lines.len(), height, "summary rendered");
    y + height + style.layout.box_spacing
}
