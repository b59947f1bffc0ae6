//! Viettel post-paid invoice layout.

use tracing::debug;

use crate::models::invoice::{ChargeLine, Invoice};

use super::InvoiceParser;
use super::rules::patterns::{
    DATE_VIETNAMESE_WORDS, VIETTEL_DATE_SLASH, VIETTEL_LINE, VIETTEL_NUMBER, VIETTEL_SERIAL,
};
use super::rules::{capture_first, date_from_captures, dedup_lines, normalize_whitespace, parse_amount, parse_rate};

/// Parser for Viettel invoices.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViettelParser;

impl ViettelParser {
    fn extract_date(&self, text: &str) -> String {
        // A slash date that is not a real date is not retried in word form.
        if let Some(caps) = VIETTEL_DATE_SLASH.captures(text) {
            return date_from_captures(&caps);
        }

        debug!("Slash date not found, trying \"Ngày .. tháng .. năm ..\" form");
        DATE_VIETNAMESE_WORDS
            .captures(text)
            .map(|caps| date_from_captures(&caps))
            .unwrap_or_default()
    }

    fn extract_lines(&self, text: &str) -> Vec<ChargeLine> {
        let lines = VIETTEL_LINE.captures_iter(text).map(|caps| {
            ChargeLine::new(
                parse_amount(&caps[1]),
                parse_rate(&caps[2]),
                parse_amount(&caps[3]),
                parse_amount(&caps[4]),
            )
        });

        dedup_lines(lines)
    }
}

impl InvoiceParser for ViettelParser {
    fn parse(&self, text: &str) -> Invoice {
        let text = normalize_whitespace(text);

        Invoice {
            invoice_no: capture_first(&VIETTEL_NUMBER, &text),
            serial_no: capture_first(&VIETTEL_SERIAL, &text),
            invoice_date: self.extract_date(&text),
            lines: self.extract_lines(&text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    #[test]
    fn test_parse_header_fields() {
        let text = "Ký hiệu: 1K25DAB\nSố: 123456\nNgày lập: 05/12/2024";
        let invoice = ViettelParser.parse(text);

        assert_eq!(invoice.serial_no, "1K25DAB");
        assert_eq!(invoice.invoice_no, "123456");
        assert_eq!(invoice.invoice_date, "2024-12-05");
    }

    #[test]
    fn test_parse_service_lines_drops_total_row() {
        let text = r#"
            Ký hiệu: 1K25DAB Số: 123456
            Ngày 05/12/2024
            Dịch vụ Thành tiền Thuế suất Tiền thuế Tổng cộng
            Cước di động 127.273 10% 12.727 140.000
            Cước internet 90.909 10% 9.091 100.000
            CỘNG 127.273 10% 12.727 140.000
        "#;
        let invoice = ViettelParser.parse(text);

        assert_eq!(invoice.invoice_date, "2024-12-05");
        assert_eq!(
            invoice.lines,
            vec![
                ChargeLine::new(
                    Decimal::from(127_273),
                    10,
                    Decimal::from(12_727),
                    Decimal::from(140_000)
                ),
                ChargeLine::new(
                    Decimal::from(90_909),
                    10,
                    Decimal::from(9_091),
                    Decimal::from(100_000)
                ),
            ]
        );
    }

    #[test]
    fn test_parse_word_date_fallback() {
        let invoice = ViettelParser.parse("Ngày 7 tháng 3 năm 2025 Ký hiệu: 1K25DAB");
        assert_eq!(invoice.invoice_date, "2025-03-07");
    }

    #[test]
    fn test_invalid_slash_date_is_not_retried() {
        let text = "Ngày lập: 32/01/2024 Ngày 7 tháng 3 năm 2025";
        let invoice = ViettelParser.parse(text);
        assert_eq!(invoice.invoice_date, "");
    }

    #[test]
    fn test_parse_missing_fields() {
        let invoice = ViettelParser.parse("VIETTEL TELECOM");
        assert_eq!(invoice, Invoice::default());
    }
}
