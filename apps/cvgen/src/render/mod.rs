// Layout orchestrator: resolves the theme, sequences the section renderers and
// threads the vertical cursor between them. The whole pass is synchronous and
// CPU-bound; async callers run it inside tokio::task::spawn_blocking.

pub mod education;
pub mod experience;
pub mod header;
pub mod references;
pub mod sidebar;
pub mod skills;
pub mod summary;

use bytes::Bytes;
use serde::Serialize;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::layout::{
    write_pdf, Canvas, Document, FontFamily, FontWeight, PaintMode, PdfMetadata, TextAlign,
    PAGE_HEIGHT, PAGE_WIDTH,
};
use crate::models::ResumeRecord;
use crate::styles::{derive_theme, get_style_config, DerivedPalette, Rgb, StyleConfig, ThemeId};

// ────────────────────────────────────────────────────────────────────────────
// Page-break policy
// ────────────────────────────────────────────────────────────────────────────

/// A job starting below this line moves to the next page (stacked layouts).
pub const STACKED_JOB_BREAK_Y: f32 = 235.0;
/// Same check for the main column of the sidebar layout.
pub const SIDEBAR_JOB_BREAK_Y: f32 = 250.0;
pub const REFERENCES_BREAK_Y: f32 = 240.0;
/// Sidebar skill categories starting below this line continue on the next page.
pub const SIDEBAR_COLUMN_BREAK_Y: f32 = 270.0;
/// Cursor position after any page break.
pub const PAGE_TOP_Y: f32 = 20.0;

/// Horizontal space between the two columns of a grid.
pub const COLUMN_GUTTER: f32 = 6.0;
/// Distance from a section title's baseline to the first content row.
pub const SECTION_TITLE_ADVANCE: f32 = 9.0;

// ────────────────────────────────────────────────────────────────────────────
// Geometry and trace
// ────────────────────────────────────────────────────────────────────────────

/// A vertical strip of the page that a renderer draws into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub x: f32,
    pub width: f32,
}

impl Region {
    pub fn new(x: f32, width: f32) -> Self {
        Self { x, width }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Splits into two equal columns separated by the gutter.
    pub fn columns(&self) -> (Region, Region) {
        let width = (self.width - COLUMN_GUTTER) / 2.0;
        (
            Region::new(self.x, width),
            Region::new(self.x + width + COLUMN_GUTTER, width),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Header,
    Summary,
    Skills,
    Experience,
    Education,
    Certification,
    Reference,
    SidebarContact,
    SidebarSkills,
}

/// Where one rendered block ended up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TraceEntry {
    pub section: SectionKind,
    pub index: usize,
    pub page: usize,
    pub x: f32,
    pub y: f32,
    pub height: f32,
}

impl TraceEntry {
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Render context
// ────────────────────────────────────────────────────────────────────────────

/// Per-render state: the drawing context, the resolved theme and the trace.
/// Never shared outside one render pass.
pub struct RenderContext<'a> {
    pub canvas: &'a mut dyn Canvas,
    pub style: &'static StyleConfig,
    pub palette: DerivedPalette,
    pub font_family: FontFamily,
    pub trace: Vec<TraceEntry>,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        canvas: &'a mut dyn Canvas,
        style: &'static StyleConfig,
        palette: DerivedPalette,
        font_family: FontFamily,
    ) -> Self {
        Self {
            canvas,
            style,
            palette,
            font_family,
            trace: Vec::new(),
        }
    }

    pub fn use_font(&mut self, weight: FontWeight, size_pt: f32) {
        self.canvas.set_font(self.font_family, weight);
        self.canvas.set_font_size(size_pt);
    }

    pub fn text_color(&mut self, color: Rgb) {
        self.canvas.set_text_color(color);
    }

    /// Places already-wrapped lines at a fixed baseline step.
    pub fn text_block(&mut self, lines: &[String], x: f32, y: f32, step: f32) {
        for (i, line) in lines.iter().enumerate() {
            self.canvas
                .text_line(line, x, y + i as f32 * step, TextAlign::Left);
        }
    }

    /// Bold title plus accent rule across `region`. Returns the first content row.
    pub fn section_title(&mut self, title: &str, region: Region, y: f32) -> f32 {
        self.use_font(FontWeight::Bold, self.style.typography.section_title_size);
        self.text_color(self.style.colors.text_dark);
        self.canvas.text_line(title, region.x, y, TextAlign::Left);
        self.canvas.set_draw_color(self.palette.header_accent);
        self.canvas.set_line_width(self.style.visual.thick_line_width);
        self.canvas.line(region.x, y + 1.5, region.right(), y + 1.5);
        y + SECTION_TITLE_ADVANCE
    }

    /// Background box for an entry; a no-op for themes without boxed entries.
    pub fn entry_box(&mut self, x: f32, y: f32, w: f32, h: f32) {
        if !self.style.boxed_entries() {
            return;
        }
        self.canvas.set_fill_color(self.palette.box_background);
        self.canvas.set_draw_color(self.palette.box_border);
        self.canvas.set_line_width(self.style.visual.thin_line_width);
        self.canvas
            .rect(x, y, w, h, self.style.visual.border_radius, PaintMode::FillStroke);
    }

    /// Outlined badge: white pill with an accent border and accent text.
    pub fn outlined_badge(&mut self, text: &str, x: f32, top: f32, w: f32, h: f32, baseline: f32, inset: f32) {
        self.canvas.set_fill_color(self.palette.pill_background);
        self.canvas.set_draw_color(self.palette.header_accent);
        self.canvas.set_line_width(self.style.visual.thin_line_width);
        self.canvas
            .rect(x, top, w, h, self.style.visual.badge_border_radius, PaintMode::FillStroke);
        self.text_color(self.palette.header_accent);
        self.canvas.text_line(text, x + inset, baseline, TextAlign::Left);
    }

    /// Moves to the next page, creating it if needed, and returns the reset cursor.
    ///
    /// The two sidebar-layout columns break independently, so the next page
    /// may already exist.
    pub fn next_page(&mut self) -> f32 {
        let next = self.canvas.current_page() + 1;
        if next < self.canvas.page_count() {
            self.canvas.set_page(next);
        } else {
            self.canvas.add_page();
            self.decorate_new_page();
        }
        debug!(page = next, "page break");
        PAGE_TOP_Y
    }

    /// Moves to the next page when `y` is past `threshold`.
    pub fn break_if_past(&mut self, y: f32, threshold: f32) -> f32 {
        if y > threshold {
            self.next_page()
        } else {
            y
        }
    }

    pub fn job_break_y(&self) -> f32 {
        if self.style.is_sidebar_layout() {
            SIDEBAR_JOB_BREAK_Y
        } else {
            STACKED_JOB_BREAK_Y
        }
    }

    fn decorate_new_page(&mut self) {
        if let Some(sidebar) = &self.style.layout.sidebar {
            self.canvas.set_fill_color(self.palette.sidebar_background);
            self.canvas
                .rect(0.0, 0.0, sidebar.width, PAGE_HEIGHT, 0.0, PaintMode::Fill);
        }
    }

    pub fn record(&mut self, section: SectionKind, index: usize, x: f32, y: f32, height: f32) {
        self.trace.push(TraceEntry {
            section,
            index,
            page: self.canvas.current_page(),
            x,
            y,
            height,
        });
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Orchestration
// ────────────────────────────────────────────────────────────────────────────

/// A finished render pass, before serialisation.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub document: Document,
    pub trace: Vec<TraceEntry>,
    pub style: ThemeId,
    pub filename: String,
}

impl RenderedDocument {
    #[cfg(test)]
    pub fn entries(&self, section: SectionKind) -> impl Iterator<Item = &TraceEntry> {
        self.trace.iter().filter(move |e| e.section == section)
    }
}

/// Serialised output of a generate request.
#[derive(Debug, Clone)]
pub struct GeneratedPdf {
    pub filename: String,
    pub bytes: Bytes,
    pub page_count: usize,
}

impl GeneratedPdf {
    pub fn status_message(&self) -> String {
        format!("✓ PDF downloaded as {}", self.filename)
    }
}

/// Lays the record out on a fresh A4 document.
///
/// The accent colour is the only input that can fail; every blank or
/// missing text field just draws less.
pub fn render_document(record: &ResumeRecord) -> Result<RenderedDocument, AppError> {
    let accent = Rgb::from_hex(&record.theme_color)?;
    let style = get_style_config(record.style_id);
    let palette = derive_theme(style, accent);

    let mut document = Document::new();
    let trace = {
        let mut ctx = RenderContext::new(&mut document, style, palette, record.font_family);
        if style.is_sidebar_layout() {
            debug!(style = %style.id, "rendering sidebar layout");
            sidebar::render_sidebar_layout(&mut ctx, record);
        } else {
            debug!(style = %style.id, "rendering stacked layout");
            render_stacked_layout(&mut ctx, record);
        }
        ctx.trace
    };

    info!(
        style = %style.id,
        pages = document.page_count(),
        entries = trace.len(),
        "document laid out"
    );

    Ok(RenderedDocument {
        document,
        trace,
        style: style.id,
        filename: record.pdf_filename(),
    })
}

/// Single-column order: header, summary, skills, work, education, references.
fn render_stacked_layout(ctx: &mut RenderContext<'_>, record: &ResumeRecord) {
    let layout = &ctx.style.layout;
    let content = Region::new(layout.page_margins, PAGE_WIDTH - 2.0 * layout.page_margins);
    let (summary_top, skills_gap, work_gap, section_gap, references_gap) = (
        layout.summary_top_margin,
        layout.skills_spacing,
        layout.work_experience_spacing,
        layout.section_spacing,
        layout.references_top_spacing,
    );

    header::render_header(ctx, record);
    let mut y = summary::render_summary(ctx, record, content, summary_top);
    y = skills::render_skills(ctx, record, content, y + skills_gap);
    y = experience::render_experience(ctx, record, content, y + work_gap);
    y = education::render_education(ctx, record, content, y + section_gap);
    references::render_references(ctx, record, content, y + references_gap);
}

/// Renders and serialises to PDF bytes.
pub fn generate_pdf(record: &ResumeRecord) -> Result<GeneratedPdf, AppError> {
    let rendered = render_document(record)?;
    let metadata = PdfMetadata {
        title: format!("{} CV", record.personal.name).trim().to_string(),
        author: record.personal.name.clone(),
    };
    for entry in &rendered.trace {
        debug!(
            section = ?entry.section,
            index = entry.index,
            page = entry.page,
            top = entry.y,
            bottom = entry.bottom(),
            "entry placed"
        );
    }
    let bytes = write_pdf(&rendered.document, &metadata)?;
    info!(
        style = %rendered.style,
        file = %rendered.filename,
        bytes = bytes.len(),
        "PDF serialised"
    );
    Ok(GeneratedPdf {
        filename: rendered.filename,
        page_count: rendered.document.page_count(),
        bytes,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::layout::canvas::DrawOp;
    use crate::models::defaults::default_record;
    use crate::models::{EducationEntry, JobEntry, PersonalInfo, Reference, Skills};

    pub(crate) fn job(title: &str, responsibilities: &[&str]) -> JobEntry {
        JobEntry {
            title: title.to_string(),
            dates: "2020 - Present".to_string(),
            company: "Tech Corp".to_string(),
            location: "San Francisco, CA".to_string(),
            responsibilities: responsibilities.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub(crate) fn john_doe(style: ThemeId) -> ResumeRecord {
        ResumeRecord {
            personal: PersonalInfo {
                name: "John Doe".into(),
                title: "Software Engineer".into(),
                phone: "+1 555 0100".into(),
                email: "john@example.com".into(),
                location: "San Francisco, CA".into(),
                summary: "Engineer with a decade of backend experience.".into(),
            },
            skills: vec![(
                "Languages",
                vec!["TypeScript".to_string(), "Python".to_string()],
            )]
            .into_iter()
            .collect::<Skills>(),
            jobs: vec![job(
                "Senior Software Engineer",
                &["Led the platform team", "Cut build times in half"],
            )],
            education: vec![EducationEntry {
                degree: "BSc Computer Science".into(),
                years: "2010 - 2014".into(),
                institution: "State University".into(),
            }],
            certifications: vec![
                "AWS Solutions Architect".into(),
                "Certified Kubernetes Administrator".into(),
                "Scrum Master".into(),
            ],
            references: [
                Reference {
                    name: "Alice Manager".into(),
                    title: "CTO".into(),
                    company: "Tech Corp".into(),
                },
                Reference {
                    name: "Bob Peer".into(),
                    title: "Staff Engineer".into(),
                    company: "Other Inc".into(),
                },
            ],
            style_id: style,
            ..ResumeRecord::default()
        }
    }

    #[test]
    fn test_generate_john_doe_modern() {
        let pdf = generate_pdf(&john_doe(ThemeId::Modern)).expect("generation succeeds");
        assert_eq!(pdf.filename, "John_Doe_CV.pdf");
        assert!(pdf.bytes.starts_with(b"%PDF"));
        assert_eq!(pdf.page_count, 1);
        assert_eq!(pdf.status_message(), "✓ PDF downloaded as John_Doe_CV.pdf");
    }

    #[test]
    fn test_empty_name_yields_bare_suffix() {
        let mut record = john_doe(ThemeId::Modern);
        record.personal.name = String::new();
        let pdf = generate_pdf(&record).expect("empty name must not fail");
        assert_eq!(pdf.filename, "_CV.pdf");
    }

    #[test]
    fn test_every_theme_renders_defaults() {
        for id in ThemeId::ALL {
            let mut record = default_record();
            record.style_id = id;
            let rendered = render_document(&record).unwrap();
            assert_eq!(rendered.style, id);
            assert_eq!(rendered.entries(SectionKind::Experience).count(), record.jobs.len());
        }
    }

    #[test]
    fn test_empty_record_renders_without_panicking() {
        for id in ThemeId::ALL {
            let record = ResumeRecord {
                style_id: id,
                ..ResumeRecord::default()
            };
            let rendered = render_document(&record).unwrap();
            assert_eq!(rendered.document.page_count(), 1);
        }
    }

    #[test]
    fn test_invalid_color_is_a_generation_failure() {
        let mut record = john_doe(ThemeId::Modern);
        record.theme_color = "not-a-color".into();
        let err = generate_pdf(&record).unwrap_err();
        assert!(matches!(err, AppError::InvalidColor(_)));
        assert_eq!(
            err.status_message(),
            crate::errors::GENERATION_FAILED_MESSAGE
        );
    }

    #[test]
    fn test_page_break_assignment_is_deterministic() {
        let mut record = john_doe(ThemeId::Modern);
        record.jobs = (0..12)
            .map(|i| {
                job(
                    &format!("Engineer {i}"),
                    &[
                        "Designed and shipped services handling millions of requests per day",
                        "Mentored engineers and ran design reviews",
                        "Owned on-call rotation and incident response",
                    ],
                )
            })
            .collect();

        let pages = |r: &RenderedDocument| -> Vec<usize> {
            r.entries(SectionKind::Experience).map(|e| e.page).collect()
        };
        let first = render_document(&record).unwrap();
        let second = render_document(&record).unwrap();
        assert_eq!(pages(&first), pages(&second));

        let assigned = pages(&first);
        assert!(assigned.windows(2).all(|w| w[0] <= w[1]), "{assigned:?}");
        assert!(*assigned.last().unwrap() > 0, "12 jobs must spill onto page 2");
        for entry in first.entries(SectionKind::Experience) {
            assert!(entry.y <= STACKED_JOB_BREAK_Y, "job began past the break line");
        }
    }

    #[test]
    fn test_sidebar_layout_new_pages_get_panel() {
        let mut record = john_doe(ThemeId::Tech);
        record.jobs = (0..12)
            .map(|i| job(&format!("Engineer {i}"), &["Built things", "Fixed things"]))
            .collect();
        let rendered = render_document(&record).unwrap();
        assert!(rendered.document.page_count() > 1);
        for page in &rendered.document.pages()[1..] {
            let panel = page.ops.iter().any(|op| {
                matches!(op, DrawOp::Rect { x, y, h, .. } if *x == 0.0 && *y == 0.0 && *h == PAGE_HEIGHT)
            });
            assert!(panel, "continuation page is missing the sidebar panel");
        }
    }

    #[test]
    fn test_region_columns_share_gutter() {
        let (left, right) = Region::new(15.0, 180.0).columns();
        assert_eq!(left.width, 87.0);
        assert_eq!(right.x, 108.0);
        assert_eq!(right.right(), 195.0);
    }
}
