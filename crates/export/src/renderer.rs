//! Document renderers.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument};

use crate::error::{ExportError, Result};
use crate::layout::{Page, PageLayout};
use crate::view::LineStyle;

/// Writes laid-out pages to a document format.
pub trait DocumentRenderer: Send + Sync {
    /// Returns the encoded document.
    fn render(&self, title: &str, layout: &PageLayout, pages: &[Page]) -> Result<Vec<u8>>;
}

/// PDF renderer using the builtin Helvetica faces.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfRenderer;

impl PdfRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn pdf_error(e: impl std::fmt::Display) -> ExportError {
    ExportError::Pdf(e.to_string())
}

impl DocumentRenderer for PdfRenderer {
    fn render(&self, title: &str, layout: &PageLayout, pages: &[Page]) -> Result<Vec<u8>> {
        if pages.is_empty() {
            return Err(ExportError::EmptyLayout("no pages to render".to_string()));
        }

        let width = Mm(layout.width_mm());
        let height = Mm(layout.height_mm());
        let (doc, first_page, first_layer) = PdfDocument::new(title, width, height, "Page 1");

        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_error)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_error)?;

        for (index, page) in pages.iter().enumerate() {
            let (page_index, layer_index) = if index == 0 {
                (first_page, first_layer)
            } else {
                doc.add_page(width, height, format!("Page {}", index + 1))
            };
            let layer = doc.get_page(page_index).get_layer(layer_index);

            for line in &page.lines {
                let font: &IndirectFontRef = match line.style {
                    LineStyle::Title | LineStyle::Heading => &bold,
                    LineStyle::Body | LineStyle::Gap => &regular,
                };
                // PDF y runs up from the bottom edge.
                layer.use_text(
                    line.text.clone(),
                    PageLayout::font_size(line.style),
                    Mm(line.x_mm),
                    Mm(layout.height_mm() - line.y_mm),
                    font,
                );
            }
        }

        doc.save_to_bytes().map_err(pdf_error)
    }
}
