//! Typed invoice document, assembled from the form and ready to render.

use serde::{Deserialize, Serialize};

use billdesk_core::CurrencyAmount;

use crate::calculator::{InvoiceTotals, SelectedLine, TAX_LABEL};
use crate::error::ValidationFailure;
use crate::form::InvoiceForm;
use crate::settings::InvoiceSettings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentHeader {
    pub issuer_name: String,
    pub issuer_address: String,
    pub invoice_date: String,
    pub invoice_number: String,
}

/// One printed line. All values are already formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentLine {
    pub name: String,
    pub quantity: String,
    pub unit_price: String,
    pub discount: String,
    pub total: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub subtotal: String,
    pub tax_label: String,
    pub tax: String,
    pub grand_total: String,
}

/// A complete invoice: header, customer, included lines and totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDocument {
    pub header: DocumentHeader,
    pub customer_name: String,
    pub lines: Vec<DocumentLine>,
    pub summary: DocumentSummary,
    pub footer: String,
    /// Unformatted totals over the printed lines.
    pub totals: InvoiceTotals,
}

impl InvoiceDocument {
    /// Assemble the document, or report why no invoice may be produced.
    ///
    /// Only rows passing the inclusion predicate are printed, and the totals
    /// cover exactly those rows.
    pub fn build(form: &InvoiceForm, settings: &InvoiceSettings) -> Result<Self, ValidationFailure> {
        let selection = form.selection();
        let totals = selection.totals();
        let lines = selection.into_valid()?;

        let symbol = settings.currency_symbol.as_str();
        let meta = form.meta();

        Ok(Self {
            header: DocumentHeader {
                issuer_name: settings.issuer_name.clone(),
                issuer_address: settings.issuer_address.clone(),
                invoice_date: meta.invoice_date.clone(),
                invoice_number: meta.invoice_number.clone(),
            },
            customer_name: form.customer_name().trim().to_string(),
            lines: lines.iter().map(|line| document_line(line, symbol)).collect(),
            summary: DocumentSummary {
                subtotal: CurrencyAmount::new(totals.subtotal).format(symbol),
                tax_label: TAX_LABEL.to_string(),
                tax: CurrencyAmount::new(totals.tax_amount).format(symbol),
                grand_total: CurrencyAmount::new(totals.grand_total).format(symbol),
            },
            footer: settings.footer_note.clone(),
            totals,
        })
    }
}

fn document_line(line: &SelectedLine<'_>, symbol: &str) -> DocumentLine {
    let input = line.input;
    DocumentLine {
        name: input.trimmed_name().to_string(),
        quantity: input.quantity_value().to_string(),
        unit_price: CurrencyAmount::new(input.unit_price_value()).format(symbol),
        discount: format!("{}%", CurrencyAmount::new(input.discount_value()).plain()),
        total: CurrencyAmount::new(line.result.line_total).format(symbol),
    }
}
