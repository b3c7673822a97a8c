//! Serialises a recorded [`Document`] into PDF bytes with `lopdf`.
//!
//! Only the standard-14 fonts are used, so nothing is embedded. Text is
//! encoded as WinAnsi; characters outside that set become `?`.

use std::collections::BTreeMap;

use bytes::Bytes;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Object, ObjectId, Stream, StringFormat};

use crate::errors::AppError;
use crate::layout::canvas::{Document, DrawOp, PaintMode, TextAlign, PAGE_HEIGHT, PAGE_WIDTH};
use crate::layout::font_metrics::FontSpec;
use crate::styles::Rgb;

/// Points per millimetre.
const MM_TO_PT: f32 = 72.0 / 25.4;

/// Control-point distance for approximating a quarter circle with a cubic Bézier.
const KAPPA: f32 = 0.552_284_8;

/// Document-level metadata written to the Info dictionary.
#[derive(Debug, Clone, Default)]
pub struct PdfMetadata {
    pub title: String,
    pub author: String,
}

/// Converts the recorded pages into a PDF 1.5 file.
pub fn write_pdf(document: &Document, metadata: &PdfMetadata) -> Result<Bytes, AppError> {
    let mut pdf = lopdf::Document::with_version("1.5");
    let pages_id = pdf.new_object_id();

    // Font resources are named F1, F2, ... in order of first use.
    let mut fonts: BTreeMap<&'static str, String> = BTreeMap::new();
    for (_, op) in document.ops() {
        if let DrawOp::Text { font, .. } = op {
            let base = font.family.base_font(font.weight);
            let next = format!("F{}", fonts.len() + 1);
            fonts.entry(base).or_insert(next);
        }
    }

    let mut font_dictionary = Dictionary::new();
    for (base, resource_name) in &fonts {
        let font_id = pdf.add_object(Dictionary::from_iter(vec![
            ("Type", "Font".into()),
            ("Subtype", "Type1".into()),
            ("BaseFont", Object::Name(base.as_bytes().to_vec())),
            ("Encoding", "WinAnsiEncoding".into()),
        ]));
        font_dictionary.set(resource_name.as_bytes().to_vec(), Object::Reference(font_id));
    }
    let resources_id = pdf.add_object(Dictionary::from_iter(vec![(
        "Font",
        Object::Dictionary(font_dictionary),
    )]));

    let media_box: Vec<Object> = vec![
        0.into(),
        0.into(),
        Object::Real(PAGE_WIDTH * MM_TO_PT),
        Object::Real(PAGE_HEIGHT * MM_TO_PT),
    ];

    let mut page_ids: Vec<Object> = Vec::with_capacity(document.pages().len());
    for page in document.pages() {
        let mut operations = Vec::new();
        for op in &page.ops {
            emit_op(op, &fonts, &mut operations);
        }
        let content = Content { operations }
            .encode()
            .map_err(|e| AppError::Render(format!("failed to encode page content: {e}")))?;
        let content_id = pdf.add_object(Stream::new(Dictionary::new(), content));

        let page_id = pdf.add_object(Dictionary::from_iter(vec![
            ("Type", "Page".into()),
            ("Parent", Object::Reference(pages_id)),
            ("MediaBox", media_box.clone().into()),
            ("Resources", Object::Reference(resources_id)),
            ("Contents", Object::Reference(content_id)),
        ]));
        page_ids.push(Object::Reference(page_id));
    }

    let pages = Dictionary::from_iter(vec![
        ("Type", "Pages".into()),
        ("Count", Object::Integer(page_ids.len() as i64)),
        ("Kids", page_ids.into()),
    ]);
    pdf.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = pdf.add_object(Dictionary::from_iter(vec![
        ("Type", "Catalog".into()),
        ("Pages", Object::Reference(pages_id)),
    ]));
    let info_id = info_dictionary(&mut pdf, metadata);
    pdf.trailer.set("Root", Object::Reference(catalog_id));
    pdf.trailer.set("Info", Object::Reference(info_id));
    pdf.compress();

    let mut buffer = Vec::new();
    pdf.save_to(&mut buffer)
        .map_err(|e| AppError::Render(format!("failed to write PDF: {e}")))?;
    Ok(Bytes::from(buffer))
}

fn info_dictionary(pdf: &mut lopdf::Document, metadata: &PdfMetadata) -> ObjectId {
    let timestamp = chrono::Utc::now().format("D:%Y%m%d%H%M%SZ").to_string();
    let literal = |s: &str| Object::String(encode_win_ansi(s), StringFormat::Literal);
    pdf.add_object(Dictionary::from_iter(vec![
        ("Title", literal(&metadata.title)),
        ("Author", literal(&metadata.author)),
        ("Creator", literal("cvgen")),
        ("Producer", literal(concat!("cvgen ", env!("CARGO_PKG_VERSION")))),
        ("CreationDate", literal(&timestamp)),
    ]))
}

// ────────────────────────────────────────────────────────────────────────────
// Content stream emission
// ────────────────────────────────────────────────────────────────────────────

fn pt(mm: f32) -> Object {
    Object::Real(mm * MM_TO_PT)
}

/// Top-left millimetres to bottom-left points.
fn point(x: f32, y: f32) -> [Object; 2] {
    [pt(x), pt(PAGE_HEIGHT - y)]
}

fn color_operands(color: Rgb) -> Vec<Object> {
    color.unit().into_iter().map(Object::Real).collect()
}

fn emit_op(op: &DrawOp, fonts: &BTreeMap<&'static str, String>, out: &mut Vec<Operation>) {
    match op {
        DrawOp::Rect {
            x,
            y,
            w,
            h,
            radius,
            mode,
            fill,
            stroke,
            line_width,
        } => {
            out.push(Operation::new("q", vec![]));
            out.push(Operation::new("rg", color_operands(*fill)));
            out.push(Operation::new("RG", color_operands(*stroke)));
            out.push(Operation::new("w", vec![pt(*line_width)]));
            rect_path(*x, *y, *w, *h, *radius, out);
            let paint = match mode {
                PaintMode::Fill => "f",
                PaintMode::FillStroke => "B",
            };
            out.push(Operation::new(paint, vec![]));
            out.push(Operation::new("Q", vec![]));
        }
        DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            color,
            width,
        } => {
            out.push(Operation::new("q", vec![]));
            out.push(Operation::new("RG", color_operands(*color)));
            out.push(Operation::new("w", vec![pt(*width)]));
            out.push(Operation::new("m", point(*x1, *y1).to_vec()));
            out.push(Operation::new("l", point(*x2, *y2).to_vec()));
            out.push(Operation::new("S", vec![]));
            out.push(Operation::new("Q", vec![]));
        }
        DrawOp::Text {
            lines,
            x,
            y,
            align,
            font,
            color,
        } => {
            let Some(resource) = fonts.get(font.family.base_font(font.weight)) else {
                return;
            };
            emit_text(lines, *x, *y, *align, font, *color, resource, out);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn emit_text(
    lines: &[String],
    x: f32,
    y: f32,
    align: TextAlign,
    font: &FontSpec,
    color: Rgb,
    resource: &str,
    out: &mut Vec<Operation>,
) {
    let line_height = font.line_height();
    for (i, line) in lines.iter().enumerate() {
        let width = font.text_width(line);
        let line_x = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - width / 2.0,
            TextAlign::Right => x - width,
        };
        let line_y = y + i as f32 * line_height;

        out.push(Operation::new("BT", vec![]));
        out.push(Operation::new(
            "Tf",
            vec![
                Object::Name(resource.as_bytes().to_vec()),
                Object::Real(font.size_pt),
            ],
        ));
        out.push(Operation::new("rg", color_operands(color)));
        out.push(Operation::new("Td", point(line_x, line_y).to_vec()));
        out.push(Operation::new(
            "Tj",
            vec![Object::String(
                encode_win_ansi(line),
                StringFormat::Hexadecimal,
            )],
        ));
        out.push(Operation::new("ET", vec![]));
    }
}

fn rect_path(x: f32, y: f32, w: f32, h: f32, radius: f32, out: &mut Vec<Operation>) {
    let r = radius.clamp(0.0, w.min(h) / 2.0);
    if r <= f32::EPSILON {
        // `re` takes the lower-left corner.
        let [px, py] = point(x, y + h);
        out.push(Operation::new("re", vec![px, py, pt(w), pt(h)]));
        return;
    }

    let k = KAPPA * r;
    let (right, bottom) = (x + w, y + h);
    let curve = |c1: (f32, f32), c2: (f32, f32), end: (f32, f32)| {
        let mut operands = point(c1.0, c1.1).to_vec();
        operands.extend(point(c2.0, c2.1));
        operands.extend(point(end.0, end.1));
        Operation::new("c", operands)
    };

    out.push(Operation::new("m", point(x + r, y).to_vec()));
    out.push(Operation::new("l", point(right - r, y).to_vec()));
    out.push(curve((right - r + k, y), (right, y + r - k), (right, y + r)));
    out.push(Operation::new("l", point(right, bottom - r).to_vec()));
    out.push(curve(
        (right, bottom - r + k),
        (right - r + k, bottom),
        (right - r, bottom),
    ));
    out.push(Operation::new("l", point(x + r, bottom).to_vec()));
    out.push(curve((x + r - k, bottom), (x, bottom - r + k), (x, bottom - r)));
    out.push(Operation::new("l", point(x, y + r).to_vec()));
    out.push(curve((x, y + r - k), (x + r - k, y), (x + r, y)));
    out.push(Operation::new("h", vec![]));
}

/// Maps text to WinAnsi (CP1252) bytes.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20}'..='\u{7e}' => c as u8,
            '\u{a0}'..='\u{ff}' => c as u32 as u8,
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '™' => 0x99,
            _ => b'?',
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
