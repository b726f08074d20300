//! Invoice export for the kiosk POS.
//!
//! This crate turns what the cashier sees into a downloadable document:
//! - [`PosView`] captures the staff header, catalog, cart and total
//! - [`PageLayout`] lays the view's lines onto fixed-size pages
//! - [`DocumentRenderer`] writes pages out; [`PdfRenderer`] produces PDF
//! - [`InvoiceExporter`] ties them together and names the file

pub mod error;
pub mod exporter;
pub mod layout;
pub mod renderer;
pub mod view;

pub use error::{ExportError, Result};
pub use exporter::{ExportedDocument, INVOICE_FILE_NAME, InvoiceExporter};
pub use layout::{A4_HEIGHT_MM, A4_WIDTH_MM, Page, PageLayout, PlacedLine};
pub use renderer::{DocumentRenderer, PdfRenderer};
pub use view::{LineStyle, PosView, ViewLine};
