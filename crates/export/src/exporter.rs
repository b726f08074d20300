//! Invoice export of the live view.

use crate::error::Result;
use crate::layout::PageLayout;
use crate::renderer::{DocumentRenderer, PdfRenderer};
use crate::view::PosView;

/// File name of the exported invoice.
pub const INVOICE_FILE_NAME: &str = "invoice.pdf";

const DOCUMENT_TITLE: &str = "Invoice";

/// A rendered document ready to download.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub file_name: &'static str,
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

/// Renders the point-of-sale view as a paginated invoice.
///
/// Export reads the view only; failures are logged and returned.
pub struct InvoiceExporter<R: DocumentRenderer = PdfRenderer> {
    renderer: R,
    layout: PageLayout,
}

impl InvoiceExporter<PdfRenderer> {
    /// Creates an A4 PDF exporter.
    pub fn new() -> Self {
        Self::with_renderer(PdfRenderer::new(), PageLayout::a4())
    }
}

impl Default for InvoiceExporter<PdfRenderer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: DocumentRenderer> InvoiceExporter<R> {
    pub fn with_renderer(renderer: R, layout: PageLayout) -> Self {
        Self { renderer, layout }
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Exports the view as `invoice.pdf`.
    ///
    /// # Errors
    ///
    /// Returns the renderer's error if the document cannot be produced.
    #[tracing::instrument(
        skip(self, view),
        fields(products = view.catalog.len(), cart_lines = view.cart.lines.len())
    )]
    pub fn export_current_view(&self, view: &PosView) -> Result<ExportedDocument> {
        let lines = view.render_lines();
        let pages = self.layout.paginate(&lines);
        let page_count = pages.len();

        match self.renderer.render(DOCUMENT_TITLE, &self.layout, &pages) {
            Ok(bytes) => {
                metrics::counter!("invoice_exports_total", "outcome" => "ok").increment(1);
                tracing::info!(page_count, size = bytes.len(), "invoice exported");
                Ok(ExportedDocument {
                    file_name: INVOICE_FILE_NAME,
                    bytes,
                    page_count,
                })
            }
            Err(e) => {
                metrics::counter!("invoice_exports_total", "outcome" => "failed").increment(1);
                tracing::error!(error = %e, "error exporting invoice");
                Err(e)
            }
        }
    }
}
