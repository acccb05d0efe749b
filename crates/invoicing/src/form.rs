//! Application state behind the invoice form.
//!
//! The form owns the rows, the customer name, the invoice metadata and the
//! rendered preview. Presentation code mutates it through these methods and
//! reads totals back after every change.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use billdesk_core::{DomainError, DomainResult};

use crate::calculator::{InvoiceSelection, InvoiceTotals, compute_totals, select_invoice_lines};
use crate::document::InvoiceDocument;
use crate::error::InvoiceError;
use crate::line_item::{LineItemInput, LineItemResult};
use crate::render;
use crate::settings::InvoiceSettings;

/// Invoice number and date. Free text, printed verbatim, never validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceMeta {
    pub invoice_number: String,
    pub invoice_date: String,
}

impl InvoiceMeta {
    pub const DEFAULT_NUMBER: &'static str = "INV-BG-001";

    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            invoice_number: Self::DEFAULT_NUMBER.to_string(),
            invoice_date: date.format("%Y-%m-%d").to_string(),
        }
    }

    /// Default metadata dated today (local time).
    pub fn today() -> Self {
        Self::for_date(Local::now().date_naive())
    }
}

impl Default for InvoiceMeta {
    fn default() -> Self {
        Self::today()
    }
}

/// The whole editable state of one invoice.
///
/// Invariant: `rows` is never empty. Removing the last row puts a fresh default
/// row in its place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceForm {
    customer_name: String,
    rows: Vec<LineItemInput>,
    meta: InvoiceMeta,
    #[serde(skip)]
    preview: Option<String>,
}

impl Default for InvoiceForm {
    fn default() -> Self {
        Self::new(InvoiceMeta::default())
    }
}

impl InvoiceForm {
    /// Blank form with one default row and a hidden preview.
    pub fn new(meta: InvoiceMeta) -> Self {
        Self {
            customer_name: String::new(),
            rows: vec![LineItemInput::default()],
            meta,
            preview: None,
        }
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn set_customer_name(&mut self, name: impl Into<String>) {
        self.customer_name = name.into();
    }

    pub fn meta(&self) -> &InvoiceMeta {
        &self.meta
    }

    pub fn set_meta(&mut self, meta: InvoiceMeta) {
        self.meta = meta;
    }

    pub fn rows(&self) -> &[LineItemInput] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&LineItemInput> {
        self.rows.get(index)
    }

    /// Append a default row and return its index.
    pub fn add_row(&mut self) -> usize {
        self.rows.push(LineItemInput::default());
        tracing::debug!(rows = self.rows.len(), "line item added");
        self.rows.len() - 1
    }

    pub fn update_row(&mut self, index: usize, input: LineItemInput) -> DomainResult<()> {
        let row = self
            .rows
            .get_mut(index)
            .ok_or_else(|| row_not_found(index))?;
        *row = input;
        Ok(())
    }

    /// Remove a row. The last row is replaced by a fresh default row.
    pub fn remove_row(&mut self, index: usize) -> DomainResult<LineItemInput> {
        if index >= self.rows.len() {
            return Err(row_not_found(index));
        }
        let removed = self.rows.remove(index);
        if self.rows.is_empty() {
            self.rows.push(LineItemInput::default());
        }
        tracing::debug!(index, rows = self.rows.len(), "line item removed");
        Ok(removed)
    }

    /// Clear everything and start over with fresh metadata.
    pub fn reset(&mut self, meta: InvoiceMeta) {
        *self = Self::new(meta);
        tracing::debug!("invoice form reset");
    }

    /// Live totals over every row.
    pub fn totals(&self) -> InvoiceTotals {
        compute_totals(&self.rows)
    }

    /// Per-row totals and inclusion flags, in row order.
    pub fn line_results(&self) -> Vec<LineItemResult> {
        self.rows.iter().map(LineItemInput::result).collect()
    }

    pub fn selection(&self) -> InvoiceSelection<'_> {
        select_invoice_lines(&self.rows, &self.customer_name)
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn is_preview_visible(&self) -> bool {
        self.preview.is_some()
    }

    pub fn hide_preview(&mut self) {
        self.preview = None;
    }

    /// Build and render the invoice into the preview.
    ///
    /// On any failure the preview is hidden and nothing is rendered.
    pub fn generate_preview(&mut self, settings: &InvoiceSettings) -> Result<&str, InvoiceError> {
        let rendered = InvoiceDocument::build(self, settings)
            .map_err(InvoiceError::from)
            .and_then(|document| render::render_fragment(&document));

        match rendered {
            Ok(markup) => {
                tracing::info!(
                    invoice_number = %self.meta.invoice_number,
                    "invoice preview generated"
                );
                Ok(self.preview.insert(markup).as_str())
            }
            Err(err) => {
                self.preview = None;
                Err(err)
            }
        }
    }
}

fn row_not_found(index: usize) -> DomainError {
    DomainError::not_found(format!("line item row {index}"))
}
