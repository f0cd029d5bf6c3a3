//! Invoice Layout - fixed single-page invoice composition
//!
//! This crate provides:
//! - The invoice request model and its normalization into a complete record
//! - Financial totals (sub-total, GST, grand total, amount due)
//! - A layout engine that turns a record into positioned drawing instructions
//! - Painting those instructions onto a [`pdf_core::PdfDocument`]
//!
//! # Example
//!
//! ```ignore
//! use invoice_layout::{AssetSet, Branding, InvoiceRequest, InvoiceRenderer};
//!
//! let request: InvoiceRequest = serde_json::from_str(body)?;
//! let record = request.normalize();
//! let assets = AssetSet::load_dir("assets");
//! let branding = Branding::default();
//! let pdf_bytes = InvoiceRenderer::new(&branding, &assets).render(&record)?;
//! ```

mod assets;
pub mod blocks;
mod branding;
pub mod format;
mod instruction;
mod normalize;
mod record;
mod region;
mod renderer;
mod styles;
mod totals;

pub use assets::{AssetKind, AssetSet, AssetState, ImageProvider};
pub use branding::Branding;
pub use instruction::DrawInstruction;
pub use normalize::{coerce_number, normalize, DEFAULT_GST_RATE};
pub use record::{InvoiceRecord, InvoiceRequest, ItemRequest, LineAmounts, LineItem};
pub use region::{Anchors, LayoutRegion, PageGeometry};
pub use renderer::{InvoiceLayout, InvoiceRenderer};
pub use styles::{palette, StyleRole, StyleSheet};
pub use totals::{compute_totals, Totals};

use thiserror::Error;

/// Errors that can occur while laying out or rendering an invoice
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("PDF error: {0}")]
    PdfError(#[from] pdf_core::PdfError),
}

/// Result type for layout operations
pub type Result<T> = std::result::Result<T, LayoutError>;

/// Render a record with the given branding and brand assets into PDF bytes
pub fn render_invoice(
    record: &InvoiceRecord,
    branding: &Branding,
    assets: &dyn ImageProvider,
) -> Result<Vec<u8>> {
    InvoiceRenderer::new(branding, assets).render(record)
}
