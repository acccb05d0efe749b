//! Invoice settings: who issues the invoice and how amounts are printed.
//!
//! The tax rate is not a setting; it is fixed (see `calculator::TAX_RATE`).

use serde::{Deserialize, Serialize};

use billdesk_core::{DomainError, DomainResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InvoiceSettings {
    pub issuer_name: String,
    pub issuer_address: String,
    pub currency_symbol: String,
    pub footer_note: String,
}

impl Default for InvoiceSettings {
    fn default() -> Self {
        Self {
            issuer_name: "Bhagya Groups".to_string(),
            issuer_address: "Beeramguda, Telangana, India".to_string(),
            currency_symbol: "₹".to_string(),
            footer_note: "Thank you for your business!".to_string(),
        }
    }
}

impl InvoiceSettings {
    /// Load settings from JSON. Missing keys keep their defaults.
    pub fn from_json(raw: &str) -> DomainResult<Self> {
        let settings: Self = serde_json::from_str(raw)
            .map_err(|e| DomainError::invalid_config(format!("invoice settings: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.issuer_name.trim().is_empty() {
            return Err(DomainError::invalid_config("issuer_name must not be empty"));
        }
        if self.currency_symbol.trim().is_empty() {
            return Err(DomainError::invalid_config(
                "currency_symbol must not be empty",
            ));
        }
        Ok(())
    }
}
