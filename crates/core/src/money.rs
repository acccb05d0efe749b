//! Currency amounts as they appear on screen and on the invoice.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// A monetary amount (unrounded) in the single invoice currency.
///
/// Arithmetic happens on the raw value; rounding to 2 decimal places happens
/// only when the amount is formatted.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyAmount(pub f64);

impl ValueObject for CurrencyAmount {}

impl CurrencyAmount {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Amount rounded to 2 decimals, without a currency symbol.
    ///
    /// A value exactly halfway between two cents rounds away from zero
    /// (`0.125` renders `0.13`). Values that round to zero never carry a sign
    /// (`-0.001` renders `0.00`).
    pub fn plain(&self) -> String {
        if let Some(tie) = half_cent_tie(self.0) {
            return tie;
        }
        let rounded = format!("{:.2}", self.0);
        match rounded.strip_prefix('-') {
            Some(unsigned) if unsigned == "0.00" => unsigned.to_string(),
            _ => rounded,
        }
    }

    /// Amount prefixed with `symbol` and a space, e.g. `₹ 118.00`.
    pub fn format(&self, symbol: &str) -> String {
        format!("{symbol} {}", self.plain())
    }
}

/// Round an exact half-cent value away from zero.
///
/// `100 * x` ends in exactly `.5` only when `8 * x` is an odd integer, since
/// binary fractions can only terminate in powers of two. Everything else is
/// not a tie, and `{:.2}` already rounds it to the nearest cent.
fn half_cent_tie(value: f64) -> Option<String> {
    let magnitude = value.abs();
    let eighths = magnitude * 8.0;
    if !eighths.is_finite() || eighths.fract() != 0.0 || eighths % 2.0 != 1.0 {
        return None;
    }
    // Odd eighths stay below 2^50, so the cent count is exact in a u64.
    let cents = (magnitude * 100.0 + 0.5) as u64;
    let sign = if value < 0.0 { "-" } else { "" };
    Some(format!("{sign}{}.{:02}", cents / 100, cents % 100))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_symbol_and_two_decimals() {
        assert_eq!(CurrencyAmount::new(118.0).format("₹"), "₹ 118.00");
        assert_eq!(CurrencyAmount::new(4.86).format("₹"), "₹ 4.86");
        assert_eq!(CurrencyAmount::new(0.0).format("$"), "$ 0.00");
    }

    #[test]
    fn rounds_accumulated_float_error() {
        // 30 - 30 * 0.1 is slightly below 27 in binary floating point.
        let total = 30.0 - 30.0 * (10.0 / 100.0);
        assert_eq!(CurrencyAmount::new(total).plain(), "27.00");
        assert_eq!(CurrencyAmount::new(total * 0.18).plain(), "4.86");
    }

    #[test]
    fn negative_amounts_keep_their_sign() {
        assert_eq!(CurrencyAmount::new(-15.5).plain(), "-15.50");
    }

    #[test]
    fn half_cent_ties_round_away_from_zero() {
        assert_eq!(CurrencyAmount::new(0.125).plain(), "0.13");
        assert_eq!(CurrencyAmount::new(10.125).plain(), "10.13");
        assert_eq!(CurrencyAmount::new(-0.125).plain(), "-0.13");
        assert_eq!(CurrencyAmount::new(2.375).format("₹"), "₹ 2.38");
        // Half-price quarter: 0.25 - 0.25 * 0.5 lands exactly on the tie.
        assert_eq!(CurrencyAmount::new(0.25 - 0.25 * 0.5).plain(), "0.13");
    }

    #[test]
    fn near_ties_round_to_nearest() {
        // 0.115 and 1.005 are stored slightly off the halfway point.
        assert_eq!(CurrencyAmount::new(0.115).plain(), "0.12");
        assert_eq!(CurrencyAmount::new(1.005).plain(), "1.00");
        assert_eq!(CurrencyAmount::new(0.5).plain(), "0.50");
        assert_eq!(CurrencyAmount::new(3.25).plain(), "3.25");
    }

    #[test]
    fn zero_never_renders_signed() {
        assert_eq!(CurrencyAmount::new(-0.0).plain(), "0.00");
        assert_eq!(CurrencyAmount::new(-0.001).plain(), "0.00");
    }
}
