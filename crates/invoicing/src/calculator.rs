//! Invoice calculator: line totals, tax and the inclusion gate.
//!
//! Everything here is a pure function of the rows handed in. Display refresh,
//! markup and downloads are done by callers with the values returned.

use serde::{Deserialize, Serialize};

use billdesk_core::parse_or_zero;

use crate::error::ValidationFailure;
use crate::line_item::{LineItemInput, LineItemResult};

/// Fixed goods-and-services tax rate applied to the subtotal.
pub const TAX_RATE: f64 = 0.18;

/// Label printed next to the tax amount.
pub const TAX_LABEL: &str = "GST (18%)";

/// `quantity × unit_price`, reduced by `discount_percent` when it is positive.
///
/// Discounts are not clamped: zero or negative is a no-op, above 100 turns the
/// total negative. The result is not rounded.
pub fn line_total(quantity: f64, unit_price: f64, discount_percent: f64) -> f64 {
    let mut total = quantity * unit_price;
    if discount_percent > 0.0 {
        total -= total * (discount_percent / 100.0);
    }
    total
}

/// Line total from raw field text. Unparseable fields count as 0.
pub fn compute_line_total(quantity: &str, unit_price: &str, discount_percent: &str) -> f64 {
    line_total(
        parse_or_zero(quantity),
        parse_or_zero(unit_price),
        parse_or_zero(discount_percent),
    )
}

/// Subtotal, tax and grand total.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    pub subtotal: f64,
    pub tax_amount: f64,
    pub grand_total: f64,
}

impl InvoiceTotals {
    pub fn from_subtotal(subtotal: f64) -> Self {
        let tax_amount = subtotal * TAX_RATE;
        Self {
            subtotal,
            tax_amount,
            grand_total: subtotal + tax_amount,
        }
    }

    pub fn from_line_totals(line_totals: impl IntoIterator<Item = f64>) -> Self {
        Self::from_subtotal(line_totals.into_iter().sum())
    }
}

/// Totals over every row, whether or not it would make it onto an invoice.
pub fn compute_totals(rows: &[LineItemInput]) -> InvoiceTotals {
    InvoiceTotals::from_line_totals(rows.iter().map(LineItemInput::line_total))
}

/// A row that passed the inclusion predicate.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedLine<'a> {
    /// Position of the row in the form.
    pub position: usize,
    pub input: &'a LineItemInput,
    pub result: LineItemResult,
}

/// Outcome of [`select_invoice_lines`].
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceSelection<'a> {
    pub lines: Vec<SelectedLine<'a>>,
    failure: Option<ValidationFailure>,
}

impl<'a> InvoiceSelection<'a> {
    /// Whether an invoice may be produced from this selection.
    pub fn is_valid(&self) -> bool {
        self.failure.is_none()
    }

    /// Why the selection cannot produce an invoice, if it cannot.
    ///
    /// A missing customer name is reported ahead of missing items.
    pub fn failure(&self) -> Option<ValidationFailure> {
        self.failure
    }

    /// Totals over the selected lines only.
    pub fn totals(&self) -> InvoiceTotals {
        InvoiceTotals::from_line_totals(self.lines.iter().map(|line| line.result.line_total))
    }

    pub fn into_valid(self) -> Result<Vec<SelectedLine<'a>>, ValidationFailure> {
        match self.failure {
            Some(failure) => Err(failure),
            None => Ok(self.lines),
        }
    }
}

/// Pick the rows that belong on the invoice, in their original order, and
/// decide whether an invoice may be produced at all.
pub fn select_invoice_lines<'a>(rows: &'a [LineItemInput], customer_name: &str) -> InvoiceSelection<'a> {
    let lines: Vec<SelectedLine<'a>> = rows
        .iter()
        .enumerate()
        .filter(|(_, row)| row.is_included())
        .map(|(position, input)| SelectedLine {
            position,
            input,
            result: input.result(),
        })
        .collect();

    let failure = if customer_name.trim().is_empty() {
        Some(ValidationFailure::MissingCustomerName)
    } else if lines.is_empty() {
        Some(ValidationFailure::NoValidItems)
    } else {
        None
    };

    InvoiceSelection { lines, failure }
}
