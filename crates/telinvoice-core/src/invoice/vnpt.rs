//! VNPT VAT invoice layout.
//!
//! VNPT bills carry no per-row tax columns. The figures come from the
//! summary block at the bottom of the page ("Cộng tiền hàng", "Thuế suất
//! thuế GTGT", "Tiền thuế GTGT", "Tổng cộng tiền thanh toán"), and the
//! invoice gets at most one charge line.
//!
//! Depending on the template the summary numbers sit either next to their
//! labels or in a separate column that the text layer emits as a run of
//! bare numbers around the VAT rate line. The block pattern handles the
//! second case; per-label patterns handle the first.

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::invoice::{ChargeLine, Invoice};

use super::InvoiceParser;
use super::rules::patterns::{
    VNPT_BASE_AMOUNT, VNPT_DATE, VNPT_NUMBER, VNPT_SERIAL, VNPT_SUMMARY_BLOCK,
    VNPT_TOTAL_AMOUNT, VNPT_VAT_AMOUNT, VNPT_VAT_RATE,
};
use super::rules::{capture_first, date_from_captures, normalize_whitespace, parse_amount, parse_rate};

/// Parser for VNPT invoices.
#[derive(Debug, Clone, Copy, Default)]
pub struct VnptParser;

impl VnptParser {
    fn extract_date(&self, text: &str) -> String {
        VNPT_DATE
            .captures(text)
            .map(|caps| date_from_captures(&caps))
            .unwrap_or_default()
    }

    /// Summary figures as a single charge line, before the all-zero check.
    fn extract_summary(&self, text: &str) -> ChargeLine {
        if let Some(caps) = VNPT_SUMMARY_BLOCK.captures(text) {
            return ChargeLine::new(
                parse_amount(&caps[1]),
                parse_rate(&caps[2]),
                parse_amount(&caps[3]),
                parse_amount(&caps[4]),
            );
        }

        debug!("Summary block not found, reading each summary label");
        ChargeLine::new(
            labeled_amount(&VNPT_BASE_AMOUNT, text),
            parse_rate(&capture_first(&VNPT_VAT_RATE, text)),
            labeled_amount(&VNPT_VAT_AMOUNT, text),
            labeled_amount(&VNPT_TOTAL_AMOUNT, text),
        )
    }
}

fn labeled_amount(pattern: &regex::Regex, text: &str) -> Decimal {
    parse_amount(&capture_first(pattern, text))
}

impl InvoiceParser for VnptParser {
    fn parse(&self, text: &str) -> Invoice {
        let text = normalize_whitespace(text);

        let summary = self.extract_summary(&text);
        let lines = if summary.is_empty() {
            debug!("No summary figures found");
            Vec::new()
        } else {
            vec![summary]
        };

        Invoice {
            invoice_no: capture_first(&VNPT_NUMBER, &text),
            serial_no: capture_first(&VNPT_SERIAL, &text),
            invoice_date: self.extract_date(&text),
            lines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_header_with_translations() {
        let text = r#"
            HÓA ĐƠN GIÁ TRỊ GIA TĂNG
            Ký hiệu (Serial): 1K25THA
            Số (No.): 3802879
            Ngày (Date) 05 Tháng (Month) 12 Năm (Year) 2024
        "#;
        let invoice = VnptParser.parse(text);

        assert_eq!(invoice.serial_no, "1K25THA");
        assert_eq!(invoice.invoice_no, "3802879");
        assert_eq!(invoice.invoice_date, "2024-12-05");
        assert!(invoice.lines.is_empty());
    }

    #[test]
    fn test_parse_summary_block() {
        let text = r#"
            Cộng tiền hàng (Total amount):
            47.272
            Thuế suất thuế GTGT (VAT rate): 10%
            Tiền thuế GTGT (VAT amount):
            Tổng cộng tiền thanh toán (Total payment):
            4.727
            51.999
        "#;
        let invoice = VnptParser.parse(text);

        assert_eq!(
            invoice.lines,
            vec![ChargeLine::new(
                Decimal::from(47_272),
                10,
                Decimal::from(4_727),
                Decimal::from(51_999)
            )]
        );
    }

    #[test]
    fn test_parse_labels_on_separate_lines() {
        let text = r#"
            Cộng tiền hàng: 47.272
            Thuế suất thuế GTGT: 10%
            Tiền thuế GTGT: 4.727
            Tổng cộng tiền thanh toán: 51.999
        "#;
        let invoice = VnptParser.parse(text);

        assert_eq!(invoice.lines.len(), 1);
        let line = invoice.lines[0];
        assert_eq!(line.base_amount, Decimal::from(47_272));
        assert_eq!(line.vat_rate, 10);
        assert_eq!(line.vat_amount, Decimal::from(4_727));
        assert_eq!(line.total_amount, Decimal::from(51_999));
    }

    #[test]
    fn test_parse_partial_labels() {
        let text = "Tổng cộng tiền thanh toán: 110.000";
        let invoice = VnptParser.parse(text);

        assert_eq!(
            invoice.lines,
            vec![ChargeLine::new(Decimal::ZERO, 0, Decimal::ZERO, Decimal::from(110_000))]
        );
    }

    #[test]
    fn test_all_zero_summary_has_no_lines() {
        let text = "Cộng tiền hàng: 0 Thuế suất thuế GTGT: 10% Tiền thuế GTGT: 0 Tổng cộng tiền thanh toán: 0";
        let invoice = VnptParser.parse(text);
        assert!(invoice.lines.is_empty());

        let invoice = VnptParser.parse("Ký hiệu: 1K25THA");
        assert!(invoice.lines.is_empty());
        assert_eq!(invoice.serial_no, "1K25THA");
    }
}
