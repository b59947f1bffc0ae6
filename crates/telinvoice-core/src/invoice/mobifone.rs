//! Mobifone post-paid invoice layout.
//!
//! The header box is often flattened value-first ("1K25DAA 0012345 Ký hiệu
//! Số"), so serial and number are read together when possible. Service
//! rows list total, VAT, rate and base before the service name, which
//! always starts with "Cước".

use tracing::debug;

use crate::models::invoice::{ChargeLine, Invoice};

use super::InvoiceParser;
use super::rules::patterns::{
    DATE_VIETNAMESE_WORDS, MOBIFONE_LINE, MOBIFONE_NUMBER, MOBIFONE_SERIAL,
    MOBIFONE_SERIAL_NUMBER,
};
use super::rules::{capture_first, date_from_captures, dedup_lines, normalize_whitespace, parse_amount, parse_rate};

/// Parser for Mobifone invoices.
#[derive(Debug, Clone, Copy, Default)]
pub struct MobifoneParser;

impl MobifoneParser {
    fn extract_serial_and_number(&self, text: &str) -> (String, String) {
        if let Some(caps) = MOBIFONE_SERIAL_NUMBER.captures(text) {
            return (caps[1].trim().to_string(), caps[2].trim().to_string());
        }

        debug!("Combined serial/number header not found, trying separate labels");
        (
            capture_first(&MOBIFONE_SERIAL, text),
            capture_first(&MOBIFONE_NUMBER, text),
        )
    }

    fn extract_date(&self, text: &str) -> String {
        match DATE_VIETNAMESE_WORDS.captures(text) {
            Some(caps) => date_from_captures(&caps),
            None => {
                debug!("Invoice date not found");
                String::new()
            }
        }
    }

    fn extract_lines(&self, text: &str) -> Vec<ChargeLine> {
        let lines = MOBIFONE_LINE.captures_iter(text).map(|caps| {
            ChargeLine::new(
                parse_amount(&caps[4]),
                parse_rate(&caps[3]),
                parse_amount(&caps[2]),
                parse_amount(&caps[1]),
            )
        });

        dedup_lines(lines)
    }
}

impl InvoiceParser for MobifoneParser {
    fn parse(&self, text: &str) -> Invoice {
        let text = normalize_whitespace(text);
        let (serial_no, invoice_no) = self.extract_serial_and_number(&text);

        Invoice {
            invoice_no,
            serial_no,
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

    const INVOICE: &str = r#"
        HÓA ĐƠN GIÁ TRỊ GIA TĂNG (VAT INVOICE)
        1K25DAA 0012345
        Ký hiệu Số
        Ngày 05 tháng 12 năm 2024
        STT Tên dịch vụ Thành tiền
        140.000 12.727 10% 127.273 Cước dịch vụ viễn thông
        50.000 4.545 10% 45.455 Cước thuê bao
        CỘNG
        140.000 12.727 10% 127.273 Cước dịch vụ viễn thông
    "#;

    #[test]
    fn test_parse_combined_header() {
        let invoice = MobifoneParser.parse(INVOICE);

        assert_eq!(invoice.serial_no, "1K25DAA");
        assert_eq!(invoice.invoice_no, "0012345");
        assert_eq!(invoice.invoice_date, "2024-12-05");
    }

    #[test]
    fn test_parse_lines_deduplicated_in_order() {
        let invoice = MobifoneParser.parse(INVOICE);

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
                    Decimal::from(45_455),
                    10,
                    Decimal::from(4_545),
                    Decimal::from(50_000)
                ),
            ]
        );
    }

    #[test]
    fn test_parse_separate_labels_fallback() {
        let text = "Ký hiệu (Serial): 1K24TBB\nSố (No.): 7654321\nNgày 1 tháng 2 năm 2025";
        let invoice = MobifoneParser.parse(text);

        assert_eq!(invoice.serial_no, "1K24TBB");
        assert_eq!(invoice.invoice_no, "7654321");
        assert_eq!(invoice.invoice_date, "2025-02-01");
        assert!(invoice.lines.is_empty());
    }

    #[test]
    fn test_parse_without_date() {
        let text = "Ký hiệu: 1K25DAA Số: 0012345 Kỳ cước 12/2024";
        let invoice = MobifoneParser.parse(text);

        assert_eq!(invoice.invoice_date, "");
        assert_eq!(invoice.serial_no, "1K25DAA");
    }

    #[test]
    fn test_parse_invalid_calendar_date_is_empty() {
        let invoice = MobifoneParser.parse("Ngày 31 tháng 02 năm 2024");
        assert_eq!(invoice.invoice_date, "");
    }

    #[test]
    fn test_parse_garbage_yields_empty_invoice() {
        assert_eq!(MobifoneParser.parse("%%% ??? 12"), Invoice::default());
        assert_eq!(MobifoneParser.parse(""), Invoice::default());
    }
}
