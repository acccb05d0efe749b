//! Invoicing error model.

use thiserror::Error;

use billdesk_core::DomainError;

/// Why an invoice could not be produced.
///
/// Both variants are soft failures: the user fixes the form and tries again.
/// The display text is what the user is shown.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("Please enter Customer Name before generating invoice.")]
    MissingCustomerName,

    #[error(
        "Please add at least one valid item (with name, quantity > 0, and price >= 0) before generating invoice."
    )]
    NoValidItems,
}

impl ValidationFailure {
    /// Stable machine-readable code, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationFailure::MissingCustomerName => "missing_customer_name",
            ValidationFailure::NoValidItems => "no_valid_items",
        }
    }
}

/// Errors raised while building, rendering or exporting an invoice.
#[derive(Debug, Error)]
pub enum InvoiceError {
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("failed to render invoice: {0}")]
    Render(#[from] askama::Error),
}

impl InvoiceError {
    pub fn validation_failure(&self) -> Option<ValidationFailure> {
        match self {
            InvoiceError::Validation(failure) => Some(*failure),
            _ => None,
        }
    }
}
