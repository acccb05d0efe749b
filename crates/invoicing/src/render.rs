//! Markup rendering for [`InvoiceDocument`].
//!
//! Templates live in `templates/` and are compiled in by askama. All document
//! text is HTML-escaped on output.

use askama::Template;

use crate::document::InvoiceDocument;
use crate::error::InvoiceError;

/// MIME type of the exported document.
pub const CONTENT_TYPE: &str = "text/html";

#[derive(Template)]
#[template(path = "invoice.html")]
struct InvoiceFragment<'a> {
    doc: &'a InvoiceDocument,
}

#[derive(Template)]
#[template(path = "invoice_standalone.html")]
struct StandaloneInvoice<'a> {
    doc: &'a InvoiceDocument,
}

/// The invoice body, for embedding in a page.
pub fn render_fragment(doc: &InvoiceDocument) -> Result<String, InvoiceError> {
    Ok(InvoiceFragment { doc }.render()?)
}

/// A self-contained document with embedded styles, suitable for download.
pub fn render_standalone(doc: &InvoiceDocument) -> Result<String, InvoiceError> {
    Ok(StandaloneInvoice { doc }.render()?)
}
