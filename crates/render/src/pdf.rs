//! Single-page PDF backend built on `pdf-writer`.
//!
//! Uses the standard Helvetica faces (no embedding) in WinAnsiEncoding.
//! Layout coordinates are millimetres from the top-left; PDF user space is
//! points from the bottom-left, so y is flipped on the way out.

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

use invoicer_layout::{DrawOp, FontWeight, PageLayout, Paint, TextStyle};

use crate::backend::RenderBackend;
use crate::error::RenderError;

const PT_PER_MM: f32 = 72.0 / 25.4;
/// Hairline used for rules and borders (0.2 mm).
const LINE_WIDTH_MM: f32 = 0.2;

const REGULAR: Name<'static> = Name(b"F1");
const BOLD: Name<'static> = Name(b"F2");

#[derive(Debug, Clone, Default)]
pub struct PdfBackend {
    title: Option<String>,
}

impl PdfBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Title stored in the document information dictionary.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }
}

impl RenderBackend for PdfBackend {
    fn media_type(&self) -> &'static str {
        "application/pdf"
    }

    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn render(&self, layout: &PageLayout) -> Result<Vec<u8>, RenderError> {
        if layout.ops.is_empty() {
            return Err(RenderError::EmptyLayout);
        }
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(layout.width) || !valid(layout.height) {
            return Err(RenderError::InvalidPage {
                width: layout.width,
                height: layout.height,
            });
        }

        let catalog_id = Ref::new(1);
        let page_tree_id = Ref::new(2);
        let page_id = Ref::new(3);
        let content_id = Ref::new(4);
        let regular_id = Ref::new(5);
        let bold_id = Ref::new(6);
        let info_id = Ref::new(7);

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(page_tree_id);
        pdf.pages(page_tree_id).kids([page_id]).count(1);

        let mut page = pdf.page(page_id);
        page.media_box(Rect::new(
            0.0,
            0.0,
            layout.width * PT_PER_MM,
            layout.height * PT_PER_MM,
        ));
        page.parent(page_tree_id);
        page.contents(content_id);
        page.resources()
            .fonts()
            .pair(REGULAR, regular_id)
            .pair(BOLD, bold_id);
        page.finish();

        pdf.type1_font(regular_id)
            .base_font(Name(b"Helvetica"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
        pdf.type1_font(bold_id)
            .base_font(Name(b"Helvetica-Bold"))
            .encoding_predefined(Name(b"WinAnsiEncoding"));

        let content = paint_page(layout);
        pdf.stream(content_id, &content.finish());

        let mut info = pdf.document_info(info_id);
        info.producer(TextStr("invoicer"));
        if let Some(title) = &self.title {
            info.title(TextStr(title.as_str()));
        }
        info.finish();

        let bytes = pdf.finish();
        tracing::debug!(
            ops = layout.ops.len(),
            bytes = bytes.len(),
            "rendered pdf page"
        );
        Ok(bytes)
    }
}

fn paint_page(layout: &PageLayout) -> Content {
    let flip = |y_mm: f32| (layout.height - y_mm) * PT_PER_MM;
    let mut content = Content::new();
    content.set_line_width(LINE_WIDTH_MM * PT_PER_MM);

    for op in &layout.ops {
        match op {
            DrawOp::Text {
                content: text,
                x,
                y,
                style,
            } => {
                let bytes = to_winansi(text);
                content.set_fill_gray(0.0);
                content
                    .begin_text()
                    .set_font(font_for(style), style.size_pt)
                    .next_line(x * PT_PER_MM, flip(*y))
                    .show(Str(&bytes))
                    .end_text();
            }
            DrawOp::Rect { x, y, w, h, paint } => {
                apply_paint(&mut content, paint);
                content.rect(x * PT_PER_MM, flip(y + h), w * PT_PER_MM, h * PT_PER_MM);
                match (paint.fill, paint.stroke_gray) {
                    (Some(_), Some(_)) => content.fill_nonzero_and_stroke(),
                    (Some(_), None) => content.fill_nonzero(),
                    (None, Some(_)) => content.stroke(),
                    (None, None) => content.end_path(),
                };
            }
            DrawOp::Line {
                x1,
                y1,
                x2,
                y2,
                stroke_gray,
            } => {
                content.set_stroke_gray(gray(*stroke_gray));
                content
                    .move_to(x1 * PT_PER_MM, flip(*y1))
                    .line_to(x2 * PT_PER_MM, flip(*y2))
                    .stroke();
            }
        }
    }

    content
}

fn font_for(style: &TextStyle) -> Name<'static> {
    match style.weight {
        FontWeight::Normal => REGULAR,
        FontWeight::Bold => BOLD,
    }
}

fn apply_paint(content: &mut Content, paint: &Paint) {
    if let Some(fill) = paint.fill {
        content.set_fill_rgb(gray(fill.0), gray(fill.1), gray(fill.2));
    }
    if let Some(stroke) = paint.stroke_gray {
        content.set_stroke_gray(gray(stroke));
    }
}

fn gray(level: u8) -> f32 {
    f32::from(level) / 255.0
}

/// Encode text for a WinAnsi simple font; unmappable characters become `?`.
fn to_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| match ch {
            '\u{20}'..='\u{7e}' | '\u{a0}'..='\u{ff}' => ch as u8,
            '€' => 0x80,
            '‚' => 0x82,
            '„' => 0x84,
            '…' => 0x85,
            '‰' => 0x89,
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
