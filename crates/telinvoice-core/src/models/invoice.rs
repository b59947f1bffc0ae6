//! Intermediate invoice schema produced by every provider parser.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A parsed telecom invoice.
///
/// Text fields are never absent: a field the parser could not locate is
/// an empty string, so downstream consumers never deal with nulls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Sequential invoice number (Số).
    pub invoice_no: String,

    /// Series / serial code (Ký hiệu), e.g. "1K25DAB".
    pub serial_no: String,

    /// Issue date as `YYYY-MM-DD`, or empty when missing or not a
    /// calendar-valid date.
    pub invoice_date: String,

    /// Charge lines in order of appearance.
    pub lines: Vec<ChargeLine>,
}

/// One taxable charge on an invoice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChargeLine {
    /// Pre-tax charge.
    pub base_amount: Decimal,

    /// VAT percentage (0, 5, 8, 10, ...).
    pub vat_rate: u32,

    /// Tax charged.
    pub vat_amount: Decimal,

    /// Gross charge. Expected to be close to base + VAT; not enforced.
    pub total_amount: Decimal,
}

impl ChargeLine {
    pub fn new(base_amount: Decimal, vat_rate: u32, vat_amount: Decimal, total_amount: Decimal) -> Self {
        Self {
            base_amount,
            vat_rate,
            vat_amount,
            total_amount,
        }
    }

    /// True when base, VAT and total are all zero.
    pub fn is_empty(&self) -> bool {
        self.base_amount.is_zero() && self.vat_amount.is_zero() && self.total_amount.is_zero()
    }
}

impl Invoice {
    /// Sum of the gross amounts of all charge lines.
    ///
    /// Saturates at `Decimal::MAX` when the sum does not fit.
    pub fn total_amount(&self) -> Decimal {
        let mut total = Decimal::ZERO;
        for line in &self.lines {
            match total.checked_add(line.total_amount) {
                Some(sum) => total = sum,
                None => {
                    warn!("Total of invoice {:?} overflows, saturating", self.invoice_no);
                    return Decimal::MAX;
                }
            }
        }
        total
    }

    /// List fields that came out empty.
    ///
    /// These are notes for manual review, not errors: a partially
    /// recognized invoice is still a valid result.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.invoice_no.is_empty() {
            issues.push("Missing invoice number".to_string());
        }

        if self.serial_no.is_empty() {
            issues.push("Missing serial".to_string());
        }

        if self.invoice_date.is_empty() {
            issues.push("Missing or invalid invoice date".to_string());
        }

        if self.lines.is_empty() {
            issues.push("No charge lines recognized".to_string());
        }

        issues
    }
}
