use tracing::debug;

use crate::layout::{FontWeight, TextAlign};
use crate::models::{JobEntry, ResumeRecord};
use crate::render::{Region, RenderContext, SectionKind};

pub const EXPERIENCE_TITLE: &str = "Work Experience";

pub const TITLE_LINE_STEP: f32 = 4.5;
pub const RESPONSIBILITY_LINE_STEP: f32 = 3.8;
const BASE_HEIGHT: f32 = 18.0;
const TEXT_INSET: f32 = 5.0;
const BULLET_INSET: f32 = 7.0;

/// Wrapped text and the box height derived from it. Measured before anything
/// is drawn so the box always contains its content.
#[derive(Debug, Clone, PartialEq)]
pub struct JobMetrics {
    pub title_lines: Vec<String>,
    pub responsibility_lines: Vec<Vec<String>>,
    pub height: f32,
}

impl JobMetrics {
    /// Vertical offset added by title lines beyond the first.
    pub fn title_extra(&self) -> f32 {
        self.title_lines.len().saturating_sub(1) as f32 * TITLE_LINE_STEP
    }
}

/// `18 + (titleLines - 1) * 4.5 + sum(respLines) * 3.8`.
pub fn measure_job(ctx: &mut RenderContext<'_>, job: &JobEntry, width: f32) -> JobMetrics {
    let typography = &ctx.style.typography;
    let (title_size, resp_size) = (typography.job_title_size, typography.responsibility_size);

    ctx.use_font(FontWeight::Bold, title_size);
    let title_lines = ctx.canvas.split_text(&job.title, width - 45.0);

    ctx.use_font(FontWeight::Normal, resp_size);
    let responsibility_lines: Vec<Vec<String>> = job
        .responsibilities
        .iter()
        .map(|r| ctx.canvas.split_text(&format!("• {r}"), width - 25.0))
        .collect();

    let bullet_rows: usize = responsibility_lines.iter().map(Vec::len).sum();
    let mut metrics = JobMetrics {
        title_lines,
        responsibility_lines,
        height: 0.0,
    };
    metrics.height =
        BASE_HEIGHT + metrics.title_extra() + bullet_rows as f32 * RESPONSIBILITY_LINE_STEP;
    metrics
}

/// Renders every job in order, breaking the page before any job that would
/// start past the threshold. Entries are never split across pages.
pub fn render_experience(ctx: &mut RenderContext<'_>, record: &ResumeRecord, region: Region, y: f32) -> f32 {
    if record.jobs.is_empty() {
        return y;
    }

    let mut y = ctx.section_title(EXPERIENCE_TITLE, region, y);
    let threshold = ctx.job_break_y();

    for (index, job) in record.jobs.iter().enumerate() {
        y = ctx.break_if_past(y, threshold);
        let metrics = measure_job(ctx, job, region.width);
        draw_job(ctx, job, &metrics, region, y);
        ctx.record(SectionKind::Experience, index, region.x, y, metrics.height);
        debug!(index, y, height = metrics.height, "job rendered");
        y += metrics.height + ctx.style.layout.box_spacing;
    }
    y
}

fn draw_job(ctx: &mut RenderContext<'_>, job: &JobEntry, metrics: &JobMetrics, region: Region, y: f32) {
    let style = ctx.style;
    let typography = &style.typography;
    let colors = &style.colors;
    let extra = metrics.title_extra();

    ctx.entry_box(region.x, y, region.width, metrics.height);

    // Title, every wrapped line.
    ctx.use_font(FontWeight::Bold, typography.job_title_size);
    ctx.text_color(colors.text_dark);
    ctx.text_block(&metrics.title_lines, region.x + TEXT_INSET, y + 6.0, TITLE_LINE_STEP);

    // Dates: bordered badge for boxed themes, plain right-aligned text otherwise.
    let dates = job.dates.trim();
    if !dates.is_empty() {
        ctx.use_font(FontWeight::Normal, typography.badge_size);
        if style.boxed_entries() {
            let w = ctx.canvas.text_width(dates) + 6.0;
            let x = region.right() - 5.0 - w;
            ctx.outlined_badge(dates, x, y + 2.5, w, 5.5, y + 6.5, 3.0);
        } else {
            ctx.text_color(colors.light_grey);
            ctx.canvas
                .text_line(dates, region.right(), y + 6.0, TextAlign::Right);
        }
    }

    // Company | location, first wrapped line only.
    let company_line = [job.company.trim(), job.location.trim()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" | ");
    if !company_line.is_empty() {
        ctx.use_font(FontWeight::Normal, typography.body_size);
        ctx.text_color(colors.text_grey);
        let lines = ctx.canvas.split_text(&company_line, region.width - 25.0);
        if let Some(first) = lines.first() {
            ctx.canvas
                .text_line(first, region.x + TEXT_INSET, y + 11.0 + extra, TextAlign::Left);
        }
    }

    ctx.use_font(FontWeight::Normal, typography.responsibility_size);
    ctx.text_color(colors.text_dark);
    let mut resp_y = y + 16.0 + extra;
    for lines in &metrics.responsibility_lines {
        ctx.text_block(lines, region.x + BULLET_INSET, resp_y, RESPONSIBILITY_LINE_STEP);
        resp_y += lines.len() as f32 * RESPONSIBILITY_LINE_STEP;
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
