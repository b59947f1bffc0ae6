//! Number normalization for Vietnamese invoice amounts.
//!
//! Invoices print đồng amounts with `.` as the thousands separator and `,`
//! as the decimal separator ("47.272", "1.234.567,5"). The cleanup turns
//! commas into dots and then removes every dot, so a decimal fraction is
//! folded into the integer digits rather than kept: "1.234,5" becomes
//! 12345. Đồng invoices are integer-valued in practice.

use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::debug;

/// Parse an amount token, returning zero when it is not a number.
pub fn parse_amount(s: &str) -> Decimal {
    let cleaned = s.replace('\u{00a0}', "");
    let cleaned = cleaned.trim().replace(',', ".").replace('.', "");

    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return Decimal::ZERO;
    }

    match Decimal::from_str(&cleaned) {
        Ok(value) => value,
        Err(e) => {
            debug!("Amount {:?} is out of range ({}), using zero", s, e);
            Decimal::ZERO
        }
    }
}

/// Parse a captured VAT percentage ("10", "8", "0").
pub fn parse_rate(s: &str) -> u32 {
    s.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_thousands_separated() {
        assert_eq!(parse_amount("47.272"), Decimal::from(47_272));
        assert_eq!(parse_amount("1.234.567"), Decimal::from(1_234_567));
        assert_eq!(parse_amount("500"), Decimal::from(500));
    }

    #[test]
    fn test_parse_folds_decimal_comma() {
        assert_eq!(parse_amount("1.234,56"), Decimal::from(123_456));
        assert_eq!(parse_amount("4,5"), Decimal::from(45));
    }

    #[test]
    fn test_parse_strips_nbsp_and_whitespace() {
        assert_eq!(parse_amount(" 12.727\u{00a0}"), Decimal::from(12_727));
        assert_eq!(parse_amount("\u{00a0}1\u{00a0}000"), Decimal::from(1000));
    }

    #[test]
    fn test_parse_without_digits_is_zero() {
        assert_eq!(parse_amount(""), Decimal::ZERO);
        assert_eq!(parse_amount("."), Decimal::ZERO);
        assert_eq!(parse_amount(",.,"), Decimal::ZERO);
        assert_eq!(parse_amount("abc"), Decimal::ZERO);
    }

    #[test]
    fn test_parse_is_never_negative() {
        for token in ["0", "0.000", "9,99", "1.000.000,00", "-5", "12a"] {
            assert!(parse_amount(token) >= Decimal::ZERO, "token {token}");
        }
    }

    #[test]
    fn test_parse_out_of_range_is_zero() {
        assert_eq!(parse_amount("100.000.000.000.000.000.000.000.000.000"), Decimal::ZERO);
        assert_eq!(parse_amount("79.228.162.514.264.337.593.543.950.335"), Decimal::MAX);
    }

    #[test]
    fn test_parse_rate() {
        assert_eq!(parse_rate("10"), 10);
        assert_eq!(parse_rate("0"), 0);
        assert_eq!(parse_rate(""), 0);
    }
}
