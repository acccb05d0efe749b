//! Lenient numeric parsing for user-entered amounts.
//!
//! Form fields hold text exactly as typed. Numbers are read from the longest
//! numeric prefix of that text (`"12abc"` reads as `12`), and anything without
//! a leading number reads as nothing. `parse_or_zero` is the leniency policy
//! used by every calculation: a field that does not hold a number counts as 0
//! and is never reported as an error.

/// Parse the longest numeric prefix of `raw` (after leading whitespace).
///
/// Accepts an optional sign, digits with an optional fraction, and an optional
/// exponent. Returns `None` when no digit is present or the value is not finite.
pub fn parse_number(raw: &str) -> Option<f64> {
    let text = raw.trim_start();
    let bytes = text.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        // A dangling `e` is not part of the number.
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    text[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse `raw` as a number, treating anything unparseable as `0`.
pub fn parse_or_zero(raw: &str) -> f64 {
    parse_number(raw).unwrap_or(0.0)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(parse_number("2"), Some(2.0));
        assert_eq!(parse_number("50.00"), Some(50.0));
        assert_eq!(parse_number("-3.5"), Some(-3.5));
        assert_eq!(parse_number("+7"), Some(7.0));
        assert_eq!(parse_number("  12.25"), Some(12.25));
    }

    #[test]
    fn accepts_bare_fraction_and_trailing_dot() {
        assert_eq!(parse_number(".5"), Some(0.5));
        assert_eq!(parse_number("5."), Some(5.0));
        assert_eq!(parse_number("-.25"), Some(-0.25));
    }

    #[test]
    fn reads_longest_numeric_prefix() {
        assert_eq!(parse_number("12abc"), Some(12.0));
        assert_eq!(parse_number("1,000"), Some(1.0));
        assert_eq!(parse_number("3.5.1"), Some(3.5));
        assert_eq!(parse_number("4e"), Some(4.0));
        assert_eq!(parse_number("4e-"), Some(4.0));
        assert_eq!(parse_number("1.5e2kg"), Some(150.0));
    }

    #[test]
    fn rejects_text_without_a_leading_number() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("   "), None);
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("."), None);
        assert_eq!(parse_number("-"), None);
        assert_eq!(parse_number("e5"), None);
        assert_eq!(parse_number("NaN"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn rejects_overflowing_values() {
        assert_eq!(parse_number("1e400"), None);
    }

    #[test]
    fn parse_or_zero_falls_back_to_zero() {
        assert_eq!(parse_or_zero("abc"), 0.0);
        assert_eq!(parse_or_zero(""), 0.0);
        assert_eq!(parse_or_zero("8"), 8.0);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: any finite value written out by `Display` reads back exactly.
        #[test]
        fn displayed_values_read_back(value in -1.0e9f64..1.0e9f64) {
            prop_assert_eq!(parse_number(&value.to_string()), Some(value));
        }

        /// Property: parsing never panics and never yields a non-finite value.
        #[test]
        fn arbitrary_text_is_tolerated(text in ".*") {
            let parsed = parse_or_zero(&text);
            prop_assert!(parsed.is_finite());
        }
    }
}
