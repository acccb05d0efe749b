//! Line items as entered on the form, and what is derived from them.

use serde::{Deserialize, Serialize};

use billdesk_core::{parse_number, parse_or_zero};

use crate::calculator::line_total;

/// One user-entered row.
///
/// Numeric fields hold the text exactly as typed; nothing is validated at entry
/// time. Values are interpreted only when totals are computed or an invoice is
/// assembled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItemInput {
    pub name: String,
    pub quantity: String,
    pub unit_price: String,
    pub discount_percent: String,
}

impl Default for LineItemInput {
    /// A fresh, empty row: quantity 1, zero price, no discount.
    fn default() -> Self {
        Self {
            name: String::new(),
            quantity: "1".to_string(),
            unit_price: "0.00".to_string(),
            discount_percent: "0".to_string(),
        }
    }
}

impl LineItemInput {
    /// Row from already-numeric values.
    pub fn new(name: impl Into<String>, quantity: f64, unit_price: f64, discount_percent: f64) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.to_string(),
            unit_price: unit_price.to_string(),
            discount_percent: discount_percent.to_string(),
        }
    }

    /// Row from raw field text, as a form would hand it over.
    pub fn from_text(
        name: impl Into<String>,
        quantity: impl Into<String>,
        unit_price: impl Into<String>,
        discount_percent: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            unit_price: unit_price.into(),
            discount_percent: discount_percent.into(),
        }
    }

    pub fn trimmed_name(&self) -> &str {
        self.name.trim()
    }

    pub fn quantity_value(&self) -> f64 {
        parse_or_zero(&self.quantity)
    }

    pub fn unit_price_value(&self) -> f64 {
        parse_or_zero(&self.unit_price)
    }

    pub fn discount_value(&self) -> f64 {
        parse_or_zero(&self.discount_percent)
    }

    /// Line total with unparseable fields read as 0.
    pub fn line_total(&self) -> f64 {
        line_total(
            self.quantity_value(),
            self.unit_price_value(),
            self.discount_value(),
        )
    }

    /// Inclusion predicate: named, positive quantity, non-negative price.
    ///
    /// A quantity or price that does not parse at all never satisfies its
    /// comparison. Discount is not considered.
    pub fn is_included(&self) -> bool {
        !self.trimmed_name().is_empty()
            && parse_number(&self.quantity).is_some_and(|q| q > 0.0)
            && parse_number(&self.unit_price).is_some_and(|p| p >= 0.0)
    }

    pub fn result(&self) -> LineItemResult {
        LineItemResult {
            line_total: self.line_total(),
            included: self.is_included(),
        }
    }
}

/// Derived view of a row, recomputed on every change.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItemResult {
    /// Unrounded line total.
    pub line_total: f64,
    pub included: bool,
}
