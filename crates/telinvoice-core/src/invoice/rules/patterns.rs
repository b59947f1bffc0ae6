//! Regex patterns for Vietnamese telecom invoice layouts.
//!
//! Every pattern runs against whitespace-normalized text, so a label and
//! its value may have been on different lines in the PDF. Amount tokens
//! are captured loosely as `[0-9][0-9.,]*` and cleaned up by
//! [`parse_amount`](super::amounts::parse_amount). Digit classes are ASCII
//! only, matching what the number and date parsers accept.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();

    // Shared by Mobifone and the Viettel fallback: "Ngày 05 tháng 12 năm 2024"
    pub static ref DATE_VIETNAMESE_WORDS: Regex = Regex::new(
        r"(?i)Ngày\s+([0-9]{1,2})\s+tháng\s+([0-9]{1,2})\s+năm\s+([0-9]{4})"
    ).unwrap();

    // Mobifone prints "<serial> <number> Ký hiệu Số" when the header box is
    // flattened value-first.
    pub static ref MOBIFONE_SERIAL_NUMBER: Regex = Regex::new(
        r"(?i)\b([A-Z0-9]{4,})\s+([0-9]{4,})\s+Ký\s*hiệu\s*Số"
    ).unwrap();

    pub static ref MOBIFONE_SERIAL: Regex = Regex::new(
        r"(?i)Ký\s*hiệu[^:]*[:\s]\s*([A-Z0-9]{4,})"
    ).unwrap();

    pub static ref MOBIFONE_NUMBER: Regex = Regex::new(
        r"(?i)Số\s*(?:\(No\.\))?[^:]*[:\s]\s*([0-9]+)"
    ).unwrap();

    // total, VAT amount, rate%, base, then the service name
    pub static ref MOBIFONE_LINE: Regex = Regex::new(
        r"(?i)([0-9][0-9.,]*)\s+([0-9][0-9.,]*)\s+([0-9]{1,2})%\s+([0-9][0-9.,]*)\s+Cước"
    ).unwrap();

    pub static ref VIETTEL_SERIAL: Regex = Regex::new(
        r"(?i)Ký\s*hiệu\s*[:\s]\s*([A-Z0-9]+)"
    ).unwrap();

    pub static ref VIETTEL_NUMBER: Regex = Regex::new(
        r"(?i)Số\s*[:\s]\s*([0-9]+)"
    ).unwrap();

    // "Ngày lập: 05/12/2024" or "Ngày 05/12/2024"
    pub static ref VIETTEL_DATE_SLASH: Regex = Regex::new(
        r"(?i)Ngày\s*(?:lập)?\s*[:\s]*([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})"
    ).unwrap();

    // base, rate%, VAT amount, total
    pub static ref VIETTEL_LINE: Regex = Regex::new(
        r"([0-9][0-9.,]*)\s+([0-9]{1,2})%\s+([0-9][0-9.,]*)\s+([0-9][0-9.,]*)"
    ).unwrap();

    // "Ký hiệu (Serial): 1K25THA"
    pub static ref VNPT_SERIAL: Regex = Regex::new(
        r"(?i)Ký\s*hiệu\s*(?:\([^)]*\))?[^:\n]*[:\s]+([A-Z0-9]+)"
    ).unwrap();

    // "Số (No.): 3802879"
    pub static ref VNPT_NUMBER: Regex = Regex::new(
        r"(?i)Số\s*(?:\([^)]*\))?[^:\n]*[:\s]+([0-9]+)"
    ).unwrap();

    // "Ngày (Date) 05 Tháng (Month) 12 Năm (Year) 2024"
    pub static ref VNPT_DATE: Regex = Regex::new(
        r"(?i)Ngày[^0-9]*([0-9]{1,2})[^0-9]+([0-9]{1,2})[^0-9]+([0-9]{4})"
    ).unwrap();

    // base, "Thuế suất thuế GTGT" rate%, then VAT amount and grand total.
    // The span after the rate must stay lazy.
    pub static ref VNPT_SUMMARY_BLOCK: Regex = Regex::new(
        r"(?i)([0-9][0-9.,]*)\s+Thuế\s+suất\s+thuế\s+GTGT[^0-9]*([0-9]{1,2})%.*?([0-9][0-9.,]*)\s+([0-9][0-9.,]*)"
    ).unwrap();

    pub static ref VNPT_BASE_AMOUNT: Regex = Regex::new(
        r"(?i)Cộng\s+tiền\s+hàng[^:]*[:\s]*([0-9][0-9.,]*)"
    ).unwrap();

    pub static ref VNPT_VAT_RATE: Regex = Regex::new(
        r"(?i)Thuế\s+suất\s+thuế\s+GTGT[^:]*[:\s]*([0-9]{1,2})%?"
    ).unwrap();

    pub static ref VNPT_VAT_AMOUNT: Regex = Regex::new(
        r"(?i)Tiền\s+thuế\s+GTGT[^:]*[:\s]*([0-9][0-9.,]*)"
    ).unwrap();

    pub static ref VNPT_TOTAL_AMOUNT: Regex = Regex::new(
        r"(?i)Tổng\s+cộng\s+tiền\s+thanh\s+toán[^:]*[:\s]*([0-9][0-9.,]*)"
    ).unwrap();
}
