//! Sidebar layout: accent band, a tinted left column holding contact details
//! and skills, and a main column with everything else. The two columns keep
//! their own cursors and page independently.

use tracing::debug;

use crate::layout::{FontWeight, PaintMode, TextAlign, PAGE_HEIGHT, PAGE_WIDTH};
use crate::models::ResumeRecord;
use crate::render::skills::{draw_pills, layout_pills, pill_font, PILL_ROW_STEP};
use crate::render::{
    education, experience, header, references, summary, Region, RenderContext, SectionKind,
    SIDEBAR_COLUMN_BREAK_Y,
};
use crate::styles::SidebarGeometry;

pub const CONTACT_TITLE: &str = "Contact";
pub const SIDEBAR_SKILLS_TITLE: &str = "Skills";

const CONTACT_LINE_STEP: f32 = 4.5;
const CATEGORY_GAP: f32 = 3.0;

/// The left column: starts at the page margin and stops short of the panel edge.
pub fn sidebar_region(ctx: &RenderContext<'_>, geometry: &SidebarGeometry) -> Region {
    let margin = ctx.style.layout.page_margins;
    Region::new(margin, geometry.width - 1.5 * margin)
}

/// The right column: from the main-content x to the right page margin.
pub fn main_region(ctx: &RenderContext<'_>, geometry: &SidebarGeometry) -> Region {
    let margin = ctx.style.layout.page_margins;
    Region::new(
        geometry.main_content_x,
        PAGE_WIDTH - geometry.main_content_x - margin,
    )
}

pub fn render_sidebar_layout(ctx: &mut RenderContext<'_>, record: &ResumeRecord) {
    let style = ctx.style;
    let Some(geometry) = style.layout.sidebar.as_ref() else {
        return;
    };
    let layout = &style.layout;
    let header_height = layout.header_height;

    // Panel first so everything else draws over it.
    ctx.canvas.set_fill_color(ctx.palette.sidebar_background);
    ctx.canvas.rect(
        0.0,
        header_height,
        geometry.width,
        PAGE_HEIGHT - header_height,
        0.0,
        PaintMode::Fill,
    );
    header::render_band_header(ctx, record);

    let side = sidebar_region(ctx, geometry);
    let mut side_y = render_contact(ctx, record, side, geometry.start_y);
    side_y = render_sidebar_skills(ctx, record, side, side_y);
    debug!(pages = ctx.canvas.page_count(), side_y, "sidebar column rendered");

    ctx.canvas.set_page(0);
    let main = main_region(ctx, geometry);
    let mut y = summary::render_summary(ctx, record, main, layout.summary_top_margin);
    y = experience::render_experience(ctx, record, main, y + layout.work_experience_spacing);
    y = education::render_education(ctx, record, main, y + layout.section_spacing);
    references::render_references(ctx, record, main, y + layout.references_top_spacing);
}

/// Phone, email and location, each wrapped to the column.
fn render_contact(ctx: &mut RenderContext<'_>, record: &ResumeRecord, region: Region, y: f32) -> f32 {
    let personal = &record.personal;
    let fields: Vec<&str> = [&personal.phone, &personal.email, &personal.location]
        .into_iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if fields.is_empty() {
        return y;
    }

    let style = ctx.style;
    let top = y;
    let mut y = ctx.section_title(CONTACT_TITLE, region, y);
    ctx.use_font(FontWeight::Normal, style.typography.small_size);
    ctx.text_color(style.colors.text_dark);
    for field in fields {
        let lines = ctx.canvas.split_text(field, region.width);
        ctx.text_block(&lines, region.x, y, CONTACT_LINE_STEP);
        y += lines.len() as f32 * CONTACT_LINE_STEP;
    }
    ctx.record(SectionKind::SidebarContact, 0, region.x, top, y - top);
    y + style.layout.section_spacing
}

/// Categories stacked vertically, each a bold name over wrapping pills.
fn render_sidebar_skills(ctx: &mut RenderContext<'_>, record: &ResumeRecord, region: Region, y: f32) -> f32 {
    let categories: Vec<_> = record.skills.non_empty().collect();
    if categories.is_empty() {
        return y;
    }

    let style = ctx.style;
    let mut y = ctx.section_title(SIDEBAR_SKILLS_TITLE, region, y);

    for (index, category) in categories.iter().enumerate() {
        y = ctx.break_if_past(y, SIDEBAR_COLUMN_BREAK_Y);

        ctx.use_font(FontWeight::Bold, style.typography.body_size);
        ctx.text_color(style.colors.text_dark);
        ctx.canvas
            .text_line(&category.name, region.x, y + 4.0, TextAlign::Left);

        let pills = layout_pills(&category.items, &pill_font(ctx), region.width);
        draw_pills(ctx, &pills, region.x, y + 10.0);

        let height = 8.0 + pills.rows as f32 * PILL_ROW_STEP;
        ctx.record(SectionKind::SidebarSkills, index, region.x, y, height);
        y += height + CATEGORY_GAP;
    }
    y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::canvas::DrawOp;
    use crate::layout::{Canvas, Document, FontFamily};
    use crate::render::tests::{job, john_doe};
    use crate::render::{
        render_document, TraceEntry, PAGE_TOP_Y, SECTION_TITLE_ADVANCE, SIDEBAR_JOB_BREAK_Y,
        STACKED_JOB_BREAK_Y,
    };
    use crate::styles::color::derive_sidebar_background;
    use crate::styles::{derive_theme, get_style_config, Rgb, ThemeId};

    /// Runs `f` against a fresh tech-theme context.
    fn render_tech(f: impl FnOnce(&mut RenderContext<'_>)) -> (Document, Vec<TraceEntry>) {
        let style = get_style_config(ThemeId::Tech);
        let palette = derive_theme(style, Rgb(102, 126, 234));
        let mut doc = Document::new();
        let trace = {
            let mut ctx = RenderContext::new(&mut doc, style, palette, FontFamily::Helvetica);
            f(&mut ctx);
            ctx.trace
        };
        (doc, trace)
    }

    fn main_column_jobs(first_job_y: f32) -> (Document, Vec<TraceEntry>) {
        let mut record = john_doe(ThemeId::Tech);
        record.jobs = vec![job("Engineer", &["Shipped"])];
        render_tech(|ctx| {
            let style = ctx.style;
            let geometry = style.layout.sidebar.as_ref().unwrap();
            let main = main_region(ctx, geometry);
            experience::render_experience(ctx, &record, main, first_job_y - SECTION_TITLE_ADVANCE);
        })
    }

    fn sidebar_categories(title_y: f32) -> (Document, Vec<TraceEntry>) {
        let mut record = john_doe(ThemeId::Tech);
        record.skills = vec![
            ("Languages", vec!["Rust".to_string()]),
            ("Cloud", vec!["AWS".to_string()]),
        ]
        .into_iter()
        .collect();
        render_tech(|ctx| {
            let style = ctx.style;
            let geometry = style.layout.sidebar.as_ref().unwrap();
            let side = sidebar_region(ctx, geometry);
            render_sidebar_skills(ctx, &record, side, title_y);
        })
    }

    #[test]
    fn test_columns_use_style_geometry() {
        let rendered = render_document(&john_doe(ThemeId::Tech)).unwrap();

        let contact = rendered.entries(SectionKind::SidebarContact).next().unwrap();
        assert_eq!(contact.x, 12.0);
        assert_eq!(contact.y, 50.0);

        let job = rendered.entries(SectionKind::Experience).next().unwrap();
        assert_eq!(job.x, 80.0);

        let summary = rendered.entries(SectionKind::Summary).next().unwrap();
        assert_eq!(summary.y, 50.0);
    }

    #[test]
    fn test_panel_is_tinted_accent() {
        let record = john_doe(ThemeId::Tech);
        let rendered = render_document(&record).unwrap();
        let expected = derive_sidebar_background(Rgb::from_hex(&record.theme_color).unwrap());
        let first = &rendered.document.pages()[0].ops[0];
        assert!(matches!(
            first,
            DrawOp::Rect { x, w, fill, .. } if *x == 0.0 && *w == 60.0 && *fill == expected
        ));
    }

    #[test]
    fn test_contact_lives_in_sidebar_not_header() {
        let rendered = render_document(&john_doe(ThemeId::Tech)).unwrap();
        let lines = rendered.document.text_lines();
        assert!(lines.contains(&"john@example.com"));
        assert!(!lines.iter().any(|l| l.contains("  |  ")));
    }

    #[test]
    fn test_sidebar_skills_stack_vertically() {
        let mut record = john_doe(ThemeId::Tech);
        record.skills = vec![
            ("Languages", vec!["Rust".to_string(), "Go".to_string()]),
            ("Cloud", vec!["AWS".to_string()]),
        ]
        .into_iter()
        .collect();
        let rendered = render_document(&record).unwrap();
        let entries: Vec<_> = rendered.entries(SectionKind::SidebarSkills).collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].x, entries[1].x);
        assert!(entries[1].y >= entries[0].bottom());
    }

    #[test]
    fn test_main_column_breaks_independently() {
        let mut record = john_doe(ThemeId::Tech);
        record.jobs = (0..10)
            .map(|i| job(&format!("Engineer {i}"), &["Shipped", "Scaled"]))
            .collect();
        let rendered = render_document(&record).unwrap();
        let jobs: Vec<_> = rendered.entries(SectionKind::Experience).collect();
        let moved = jobs.iter().find(|e| e.page == 1).expect("a job on page two");
        assert_eq!(moved.y, PAGE_TOP_Y);
        // The sidebar stayed on the first page.
        assert!(rendered.entries(SectionKind::SidebarSkills).all(|e| e.page == 0));
    }

    #[test]
    fn test_job_between_stacked_and_sidebar_lines_stays() {
        let y = 245.0;
        assert!(y > STACKED_JOB_BREAK_Y && y < SIDEBAR_JOB_BREAK_Y);
        let (doc, trace) = main_column_jobs(y);
        assert_eq!(trace[0].page, 0);
        assert_eq!(trace[0].y, y);
        assert_eq!(doc.page_count(), 1);
    }

    #[test]
    fn test_job_on_sidebar_line_stays() {
        let (_, trace) = main_column_jobs(SIDEBAR_JOB_BREAK_Y);
        assert_eq!(trace[0].page, 0);
        assert_eq!(trace[0].y, SIDEBAR_JOB_BREAK_Y);
    }

    #[test]
    fn test_job_past_sidebar_line_moves() {
        let (doc, trace) = main_column_jobs(SIDEBAR_JOB_BREAK_Y + 1.0);
        assert_eq!(trace[0].page, 1);
        assert_eq!(trace[0].y, PAGE_TOP_Y);
        assert_eq!(doc.page_count(), 2);
    }

    #[test]
    fn test_skill_category_on_column_line_stays() {
        // First category lands exactly on the line.
        let (doc, trace) = sidebar_categories(SIDEBAR_COLUMN_BREAK_Y - SECTION_TITLE_ADVANCE);
        assert_eq!(trace[0].page, 0);
        assert_eq!(trace[0].y, SIDEBAR_COLUMN_BREAK_Y);
        // The second starts below it and continues on a new page.
        assert_eq!(trace[1].page, 1);
        assert_eq!(trace[1].y, PAGE_TOP_Y);
        assert_eq!(doc.page_count(), 2);
    }

    #[test]
    fn test_skill_categories_above_column_line_share_page() {
        let (doc, trace) = sidebar_categories(200.0);
        assert!(trace.iter().all(|e| e.page == 0));
        assert!(trace[1].y <= SIDEBAR_COLUMN_BREAK_Y);
        assert_eq!(doc.page_count(), 1);
    }

    #[test]
    fn test_continuation_page_carries_sidebar_panel() {
        let (doc, _) = sidebar_categories(SIDEBAR_COLUMN_BREAK_Y);
        let panel = &doc.pages()[1].ops[0];
        assert!(matches!(
            panel,
            DrawOp::Rect { x, y, h, .. } if *x == 0.0 && *y == 0.0 && *h == PAGE_HEIGHT
        ));
    }
}
