//! Conversion of parsed invoices into SAP journal import rows.
//!
//! Each charge line debits the expense account and, when it carries VAT,
//! the input VAT account. One vendor credit row per invoice balances the
//! sum of line totals.

use chrono::Local;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::invoice::Provider;
use crate::models::config::LedgerConfig;
use crate::models::invoice::Invoice;

/// Columns of the SAP import template, in export order.
pub const LEDGER_COLUMNS: [&str; 43] = [
    "G/L Acct/BP Code",
    "G/L Acct/BP Name",
    "Control Acct",
    "Credit",
    "Debit (SC)",
    "Credit (SC)",
    "Remarks Template",
    "Document Date",
    "Project/Khế ước",
    "Tax Group",
    "Federal Tax ID",
    "Receipt Number",
    "Tax Amount",
    "Gross Value",
    "Base Amount",
    "Primary Form Item",
    "Distr. Rule",
    "Branch",
    "Seri HĐ",
    "Debit USD S1",
    "Credit USD S1",
    "InvType",
    "Tình trạng kê khai",
    "Kỳ kê khai",
    "CFWId",
    "Số HĐKM",
    "Seri HĐKM",
    "Diễn giải HĐKM",
    "Nhãn tính C.Nợ",
    "Invoice?",
    "Đảo?",
    "BD: Exp",
    "Mẫu số HĐ",
    "AdjTran",
    "Mã đối tác",
    "Tên đối tác",
    "Địa chỉ",
    "MST",
    "Diễn giải",
    "RemarksJE",
    "Bank Account",
    "BP Bank Account",
    "Share Holder No",
];

const EXPENSE_ACCOUNT_NAME: &str = "Chi phí dịch vụ mua ngoài";
const VAT_ACCOUNT_NAME: &str = "Thuế GTGT được khấu trừ của hàng hóa, dịch vụ";
const DECLARATION_STATUS: &str = "Kê khai";

/// One journal row. Columns the transform never fills are not stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerRow {
    pub account_code: String,
    pub account_name: String,
    pub control_account: String,
    pub credit: Option<Decimal>,
    pub debit: Option<Decimal>,
    pub remarks_template: String,
    pub document_date: String,
    pub project_code: String,
    pub tax_group: String,
    pub federal_tax_id: String,
    pub receipt_number: String,
    pub branch: String,
    pub serial: String,
    pub period: String,
    pub cfw_id: String,
    pub partner_code: String,
    pub partner_name: String,
    pub partner_address: String,
    pub partner_tax_code: String,
    pub description: String,
}

impl LedgerRow {
    /// Cells in [`LEDGER_COLUMNS`] order.
    pub fn record(&self) -> Vec<String> {
        let amount = |v: Option<Decimal>| v.map(|d| d.to_string()).unwrap_or_default();
        let empty = String::new;

        vec![
            self.account_code.clone(),
            self.account_name.clone(),
            self.control_account.clone(),
            amount(self.credit),
            amount(self.debit),
            empty(), // Credit (SC)
            self.remarks_template.clone(),
            self.document_date.clone(),
            self.project_code.clone(),
            self.tax_group.clone(),
            self.federal_tax_id.clone(),
            self.receipt_number.clone(),
            empty(), // Tax Amount
            empty(), // Gross Value
            empty(), // Base Amount
            empty(), // Primary Form Item
            empty(), // Distr. Rule
            self.branch.clone(),
            self.serial.clone(),
            empty(), // Debit USD S1
            empty(), // Credit USD S1
            empty(), // InvType
            DECLARATION_STATUS.to_string(),
            self.period.clone(),
            self.cfw_id.clone(),
            empty(), // Số HĐKM
            empty(), // Seri HĐKM
            empty(), // Diễn giải HĐKM
            empty(), // Nhãn tính C.Nợ
            "No".to_string(),
            "No".to_string(),
            empty(), // BD: Exp
            empty(), // Mẫu số HĐ
            empty(), // AdjTran
            self.partner_code.clone(),
            self.partner_name.clone(),
            self.partner_address.clone(),
            self.partner_tax_code.clone(),
            self.description.clone(),
            self.description.clone(),
            empty(), // Bank Account
            empty(), // BP Bank Account
            empty(), // Share Holder No
        ]
    }
}

/// Build journal rows for a set of invoices.
///
/// Rows are ordered invoice by invoice: per-line expense and VAT debits
/// followed by the vendor credit. The posting date falls back to
/// `document_date` and then to today.
pub fn invoices_to_ledger_rows<'a, I>(
    invoices: I,
    config: &LedgerConfig,
    provider: Provider,
    document_date: Option<&str>,
) -> Vec<LedgerRow>
where
    I: IntoIterator<Item = &'a Invoice>,
{
    let mut rows = Vec::new();

    for invoice in invoices {
        let invoice_no = invoice.invoice_no.trim();
        let serial = invoice.serial_no.trim();
        let posting_date = posting_date(&invoice.invoice_date, document_date);
        let description = config.describe(provider.as_str(), invoice_no);

        let base_row = |account_code: &str, account_name: &str, control_account: &str| LedgerRow {
            account_code: account_code.to_string(),
            account_name: account_name.to_string(),
            control_account: control_account.to_string(),
            credit: None,
            debit: None,
            remarks_template: config.remarks_template.clone(),
            document_date: posting_date.clone(),
            project_code: config.project_code.clone(),
            tax_group: String::new(),
            federal_tax_id: config.vendor_tax_code.clone(),
            receipt_number: invoice_no.to_string(),
            branch: String::new(),
            serial: serial.to_string(),
            period: config.period.clone(),
            cfw_id: config.cfw_id.clone(),
            partner_code: config.vendor_code.clone(),
            partner_name: config.vendor_name.clone(),
            partner_address: config.vendor_address.clone(),
            partner_tax_code: config.vendor_tax_code.clone(),
            description: description.clone(),
        };

        for line in &invoice.lines {
            let tax_group = config.tax_group(line.vat_rate).to_string();

            rows.push(LedgerRow {
                debit: Some(line.base_amount),
                tax_group: tax_group.clone(),
                branch: config.default_branch.clone(),
                ..base_row(&config.expense_account, EXPENSE_ACCOUNT_NAME, &config.expense_account)
            });

            if !line.vat_amount.is_zero() {
                rows.push(LedgerRow {
                    debit: Some(line.vat_amount),
                    tax_group,
                    branch: config.default_branch.clone(),
                    ..base_row(&config.vat_account, VAT_ACCOUNT_NAME, &config.vat_account)
                });
            }
        }

        let total = invoice.total_amount();
        if !total.is_zero() {
            rows.push(LedgerRow {
                credit: Some(total),
                ..base_row(&config.vendor_code, &config.vendor_name, &config.payable_account)
            });
        }

        debug!("Invoice {:?} produced {} ledger rows so far", invoice_no, rows.len());
    }

    rows
}

fn posting_date(invoice_date: &str, document_date: Option<&str>) -> String {
    if !invoice_date.is_empty() {
        return invoice_date.to_string();
    }
    match document_date {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => Local::now().date_naive().format("%Y-%m-%d").to_string(),
    }
}
