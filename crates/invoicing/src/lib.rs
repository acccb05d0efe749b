//! Invoice calculation, assembly and export.
//!
//! The calculator (`calculator`) is pure domain logic. `form` holds the
//! editable state a front end drives, `document` and `render` turn a valid
//! form into markup, and `export` packages that markup as a downloadable file.

pub mod calculator;
pub mod document;
pub mod error;
pub mod export;
pub mod form;
pub mod line_item;
pub mod render;
pub mod settings;

pub use calculator::{
    InvoiceSelection, InvoiceTotals, SelectedLine, TAX_LABEL, TAX_RATE, compute_line_total,
    compute_totals, line_total, select_invoice_lines,
};
pub use document::{DocumentHeader, DocumentLine, DocumentSummary, InvoiceDocument};
pub use error::{InvoiceError, ValidationFailure};
pub use export::{ExportedInvoice, export_file_name, export_invoice};
pub use form::{InvoiceForm, InvoiceMeta};
pub use line_item::{LineItemInput, LineItemResult};
pub use render::{render_fragment, render_standalone};
pub use settings::InvoiceSettings;
