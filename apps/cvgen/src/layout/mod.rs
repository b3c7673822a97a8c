// Drawing backend: text measurement, the recording canvas, and PDF serialisation.
// Everything here is synchronous; callers on the async side wrap a full render
// pass in tokio::task::spawn_blocking.

pub mod canvas;
pub mod font_metrics;
pub mod pdf;

// Re-export the API the renderers consume.
pub use canvas::{Canvas, Document, PaintMode, TextAlign, PAGE_HEIGHT, PAGE_WIDTH};
pub use font_metrics::{FontFamily, FontSpec, FontWeight};
pub use pdf::{write_pdf, PdfMetadata};
