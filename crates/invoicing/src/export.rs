//! Export of a finished invoice as a downloadable standalone document.

use chrono::{DateTime, Utc};

use crate::document::InvoiceDocument;
use crate::error::InvoiceError;
use crate::form::InvoiceForm;
use crate::render::{self, CONTENT_TYPE};
use crate::settings::InvoiceSettings;

/// A rendered invoice ready to be offered as a file.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedInvoice {
    pub file_name: String,
    pub content_type: &'static str,
    pub contents: String,
    pub document: InvoiceDocument,
}

/// `invoice-<number>-<unix millis>.html`
pub fn export_file_name(invoice_number: &str, at: DateTime<Utc>) -> String {
    format!("invoice-{invoice_number}-{}.html", at.timestamp_millis())
}

/// Build, validate and render the invoice for download.
///
/// Nothing is produced unless the form passes invoice validation.
pub fn export_invoice(
    form: &InvoiceForm,
    settings: &InvoiceSettings,
    at: DateTime<Utc>,
) -> Result<ExportedInvoice, InvoiceError> {
    let document = match InvoiceDocument::build(form, settings) {
        Ok(document) => document,
        Err(failure) => {
            tracing::warn!(reason = failure.code(), "invoice export rejected");
            return Err(failure.into());
        }
    };

    let contents = render::render_standalone(&document)?;
    let file_name = export_file_name(&document.header.invoice_number, at);

    tracing::info!(
        file_name = %file_name,
        lines = document.lines.len(),
        "invoice exported"
    );

    Ok(ExportedInvoice {
        file_name,
        content_type: CONTENT_TYPE,
        contents,
        document,
    })
}
