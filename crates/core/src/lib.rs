//! `billdesk-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO): the lenient numeric
//! parsing policy, currency amount formatting and the shared error model.

pub mod error;
pub mod money;
pub mod numeric;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use money::CurrencyAmount;
pub use numeric::{parse_number, parse_or_zero};
pub use value_object::ValueObject;
