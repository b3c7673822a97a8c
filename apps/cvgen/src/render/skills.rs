//! Skills: a two-column grid of category boxes filled with wrapping pills, or a
//! plain bulleted list for themes without boxed entries.

use tracing::debug;

use crate::layout::{FontSpec, FontWeight, PaintMode, TextAlign};
use crate::models::{ResumeRecord, SkillCategory};
use crate::render::{Region, RenderContext, SectionKind};

pub const SKILLS_TITLE: &str = "Skills & Expertise";

pub const PILL_HEIGHT: f32 = 4.5;
/// Horizontal padding added to the label width on each side (2 mm + 2 mm).
pub const PILL_TEXT_PADDING: f32 = 4.0;
pub const PILL_GAP: f32 = 2.0;
pub const PILL_ROW_STEP: f32 = 6.0;
const PILL_LINE_WIDTH: f32 = 0.2;

const LIST_LINE_STEP: f32 = 4.0;

// ────────────────────────────────────────────────────────────────────────────
// Pill layout
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct PillPlacement {
    pub label: String,
    pub row: usize,
    /// Offset from the left edge of the pill area.
    pub x: f32,
    pub width: f32,
}

/// Row assignment for a run of pills. The box height and the draw pass both
/// read from the same value, so they cannot disagree.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PillLayout {
    pub rows: usize,
    pub pills: Vec<PillPlacement>,
}

/// Greedy row filling: a pill moves to a new row when the running width plus
/// its own width would exceed `inner_width` and the row already holds a pill.
/// A single pill wider than the area gets a row to itself.
pub fn layout_pills(items: &[String], font: &FontSpec, inner_width: f32) -> PillLayout {
    let mut layout = PillLayout::default();
    let mut row = 0;
    let mut running = 0.0_f32;
    let mut row_has_pill = false;

    for item in items {
        let width = font.text_width(item) + PILL_TEXT_PADDING;
        if row_has_pill && running + width > inner_width {
            row += 1;
            running = 0.0;
        }
        layout.pills.push(PillPlacement {
            label: item.clone(),
            row,
            x: running,
            width,
        });
        running += width + PILL_GAP;
        row_has_pill = true;
    }

    layout.rows = if layout.pills.is_empty() { 0 } else { row + 1 };
    layout
}

/// Draws a laid-out run of pills; `first_baseline` is the text baseline of row 0.
pub fn draw_pills(ctx: &mut RenderContext<'_>, layout: &PillLayout, x: f32, first_baseline: f32) {
    let style = ctx.style;
    ctx.use_font(FontWeight::Normal, style.typography.small_size);
    for pill in &layout.pills {
        let px = x + pill.x;
        let baseline = first_baseline + pill.row as f32 * PILL_ROW_STEP;
        ctx.canvas.set_fill_color(ctx.palette.pill_background);
        ctx.canvas.set_draw_color(ctx.palette.pill_border);
        ctx.canvas.set_line_width(PILL_LINE_WIDTH);
        ctx.canvas.rect(
            px,
            baseline - 3.5,
            pill.width,
            PILL_HEIGHT,
            style.visual.pill_border_radius,
            PaintMode::FillStroke,
        );
        ctx.text_color(style.colors.text_dark);
        ctx.canvas
            .text_line(&pill.label, px + PILL_TEXT_PADDING / 2.0, baseline, TextAlign::Left);
    }
}

pub fn pill_font(ctx: &RenderContext<'_>) -> FontSpec {
    FontSpec::new(ctx.font_family, FontWeight::Normal, ctx.style.typography.small_size)
}

// ────────────────────────────────────────────────────────────────────────────
// Section renderer
// ────────────────────────────────────────────────────────────────────────────

/// Renders every non-empty category into a two-column grid and returns the
/// lower of the two column cursors. No categories means no section at all.
pub fn render_skills(ctx: &mut RenderContext<'_>, record: &ResumeRecord, region: Region, y: f32) -> f32 {
    let categories: Vec<&SkillCategory> = record.skills.non_empty().collect();
    if categories.is_empty() {
        return y;
    }

    let y = ctx.section_title(SKILLS_TITLE, region, y);
    let (left, right) = region.columns();
    let columns = [left, right];
    let mut cursors = [y, y];

    for (index, category) in categories.iter().enumerate() {
        let column = index % 2;
        let col = columns[column];
        let top = cursors[column];
        let height = if ctx.style.boxed_entries() {
            boxed_category(ctx, category, col, top)
        } else {
            listed_category(ctx, category, col, top)
        };
        ctx.record(SectionKind::Skills, index, col.x, top, height);
        cursors[column] = top + height + ctx.style.layout.box_spacing;
    }

    debug!(categories = categories.len(), "skills rendered");
    cursors[0].max(cursors[1])
}

/// Box height is `12 + rows * 6`, with the row count taken from the pill layout.
fn boxed_category(ctx: &mut RenderContext<'_>, category: &SkillCategory, col: Region, top: f32) -> f32 {
    let style = ctx.style;
    let pad = style.layout.box_padding;
    let inner = col.width - 2.0 * pad;

    let layout = layout_pills(&category.items, &pill_font(ctx), inner);
    let height = 12.0 + layout.rows as f32 * PILL_ROW_STEP;

    ctx.entry_box(col.x, top, col.width, height);

    ctx.use_font(FontWeight::Bold, style.typography.job_title_size);
    ctx.text_color(style.colors.text_dark);
    ctx.canvas
        .text_line(&category.name, col.x + pad, top + 6.0, TextAlign::Left);
    ctx.canvas.set_draw_color(ctx.palette.header_accent);
    ctx.canvas.set_line_width(style.visual.thick_line_width);
    ctx.canvas
        .line(col.x + pad, top + 7.5, col.right() - pad, top + 7.5);

    draw_pills(ctx, &layout, col.x + pad, top + 13.0);
    height
}

/// Category name followed by one bullet per skill.
fn listed_category(ctx: &mut RenderContext<'_>, category: &SkillCategory, col: Region, top: f32) -> f32 {
    let style = ctx.style;

    ctx.use_font(FontWeight::Bold, style.typography.job_title_size);
    ctx.text_color(style.colors.text_dark);
    ctx.canvas
        .text_line(&category.name, col.x, top + 4.0, TextAlign::Left);

    ctx.use_font(FontWeight::Normal, style.typography.body_size);
    ctx.text_color(style.colors.text_grey);
    let mut lines = Vec::new();
    for item in &category.items {
        lines.extend(ctx.canvas.split_text(&format!("• {item}"), col.width - 2.0));
    }
    ctx.text_block(&lines, col.x + 2.0, top + 9.0, LIST_LINE_STEP);

    6.0 + lines.len() as f32 * LIST_LINE_STEP
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::canvas::DrawOp;
    use crate::layout::{Document, FontFamily};
    use crate::models::Skills;
    use crate::render::tests::john_doe;
    use crate::styles::{derive_theme, get_style_config, Rgb, ThemeId};
    use std::collections::BTreeSet;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn font() -> FontSpec {
        FontSpec::new(FontFamily::Helvetica, FontWeight::Normal, 8.0)
    }

    fn render(record: &crate::models::ResumeRecord) -> (Document, Vec<crate::render::TraceEntry>) {
        let style = get_style_config(record.style_id);
        let palette = derive_theme(style, Rgb(102, 126, 234));
        let mut doc = Document::new();
        let trace = {
            let mut ctx = RenderContext::new(&mut doc, style, palette, record.font_family);
            render_skills(&mut ctx, record, Region::new(15.0, 180.0), 80.0);
            ctx.trace
        };
        (doc, trace)
    }

    fn pill_rects(doc: &Document) -> Vec<(f32, f32)> {
        doc.ops()
            .filter_map(|(_, op)| match op {
                DrawOp::Rect { x, y, h, .. } if *h == PILL_HEIGHT => Some((*x, *y)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_layout_pills_empty() {
        let layout = layout_pills(&[], &font(), 79.0);
        assert_eq!(layout.rows, 0);
        assert!(layout.pills.is_empty());
    }

    #[test]
    fn test_layout_pills_single_row() {
        let layout = layout_pills(&strings(&["Rust", "Go"]), &font(), 79.0);
        assert_eq!(layout.rows, 1);
        assert_eq!(layout.pills[0].x, 0.0);
        let expected_second = layout.pills[0].width + PILL_GAP;
        assert!((layout.pills[1].x - expected_second).abs() < 1e-4);
    }

    #[test]
    fn test_layout_pills_never_exceeds_width_except_lone_pill() {
        let items = strings(&[
            "JavaScript", "TypeScript", "Python", "Java", "Kubernetes", "PostgreSQL",
            "Terraform", "GraphQL", "Elasticsearch", "Redis", "gRPC", "WebAssembly",
        ]);
        let inner = 40.0;
        let layout = layout_pills(&items, &font(), inner);
        assert!(layout.rows > 1);
        for pill in &layout.pills {
            let lone = layout.pills.iter().filter(|p| p.row == pill.row).count() == 1;
            assert!(pill.x + pill.width <= inner + 1e-4 || lone, "{pill:?}");
        }
    }

    #[test]
    fn test_oversized_pill_takes_its_own_row() {
        let wide = "W".repeat(60);
        let items = strings(&["x", wide.as_str(), "y"]);
        let layout = layout_pills(&items, &font(), 30.0);
        assert_eq!(layout.pills[1].row, 1);
        assert_eq!(layout.pills[1].x, 0.0);
        assert_eq!(layout.pills[2].row, 2);
        assert_eq!(layout.rows, 3);
    }

    #[test]
    fn test_simulated_rows_match_drawn_rows() {
        let items = strings(&[
            "JavaScript", "TypeScript", "Python", "Java", "React", "Vue.js", "HTML5",
            "CSS3", "Tailwind CSS", "Node.js", "Express", "Django", "REST APIs",
        ]);
        let mut record = john_doe(ThemeId::Modern);
        record.skills = vec![("Everything", items.clone())].into_iter().collect::<Skills>();
        let (doc, trace) = render(&record);

        let inner = 87.0 - 2.0 * 4.0;
        let simulated = layout_pills(&items, &font(), inner);
        let drawn_rows: BTreeSet<i64> = pill_rects(&doc)
            .into_iter()
            .map(|(_, y)| (y * 1000.0).round() as i64)
            .collect();

        assert!(simulated.rows > 1);
        assert_eq!(drawn_rows.len(), simulated.rows);
        assert_eq!(pill_rects(&doc).len(), items.len());
        assert_eq!(trace[0].height, 12.0 + simulated.rows as f32 * PILL_ROW_STEP);
    }

    #[test]
    fn test_professional_renders_bullets_not_pills() {
        let mut record = john_doe(ThemeId::Professional);
        record.skills = vec![("Languages", strings(&["TypeScript", "Python"]))]
            .into_iter()
            .collect::<Skills>();
        let (doc, _) = render(&record);
        assert!(pill_rects(&doc).is_empty());
        assert!(doc.contains_text("• TypeScript"));
        assert!(doc.contains_text("• Python"));

        record.style_id = ThemeId::Modern;
        let (doc, _) = render(&record);
        assert_eq!(pill_rects(&doc).len(), 2);
        assert!(!doc.contains_text("• TypeScript"));
    }

    #[test]
    fn test_categories_alternate_columns() {
        let mut record = john_doe(ThemeId::Modern);
        record.skills = vec![
            ("A", strings(&["a"])),
            ("B", strings(&["b"])),
            ("Empty", vec![]),
            ("C", strings(&["c"])),
        ]
        .into_iter()
        .collect::<Skills>();
        let (_, trace) = render(&record);
        let xs: Vec<f32> = trace.iter().map(|e| e.x).collect();
        assert_eq!(xs, vec![15.0, 108.0, 15.0]);
        assert!(trace[2].y >= trace[0].bottom() + 5.0);
    }

    #[test]
    fn test_no_categories_skips_section() {
        let mut record = john_doe(ThemeId::Modern);
        record.skills = vec![("Empty", vec![])].into_iter().collect::<Skills>();
        let (doc, trace) = render(&record);
        assert!(trace.is_empty());
        assert!(!doc.contains_text(SKILLS_TITLE));
    }
}
