//! Configuration structures for extraction and ledger export.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Main configuration for telinvoice.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// PDF text extraction configuration.
    pub pdf: PdfConfig,

    /// Ledger transform configuration.
    pub ledger: LedgerConfig,

    /// Batch processing configuration.
    pub batch: BatchConfig,
}

/// PDF text extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Try an empty password on encrypted documents.
    pub decrypt_empty_password: bool,

    /// Separator inserted between page texts.
    pub page_separator: String,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            decrypt_empty_password: true,
            page_separator: "\n".to_string(),
        }
    }
}

/// Mapping of invoices to SAP journal rows.
///
/// Vendor identity and account codes are copied into the rows verbatim;
/// none of them affect extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Business partner code of the provider (Mã đối tác).
    pub vendor_code: String,

    /// Provider display name (Tên đối tác).
    pub vendor_name: String,

    /// Provider tax ID (Mã số thuế).
    pub vendor_tax_code: String,

    /// Provider address.
    pub vendor_address: String,

    /// G/L account debited with service charges.
    pub expense_account: String,

    /// G/L account debited with input VAT.
    pub vat_account: String,

    /// Accounts payable control account.
    pub payable_account: String,

    /// Value of the `Project/Khế ước` column.
    pub project_code: String,

    /// Branch written on debit rows.
    pub default_branch: String,

    /// VAT percentage to tax group code.
    pub tax_group_map: BTreeMap<u32, String>,

    /// Value of the `Remarks Template` column.
    pub remarks_template: String,

    /// Description pattern. Supports `{provider}`, `{period}` and
    /// `{invoice_no}` placeholders.
    pub description_template: String,

    /// Billing period, e.g. "T12.24".
    pub period: String,

    /// Value of the `CFWId` column.
    pub cfw_id: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        let mut tax_group_map = BTreeMap::new();
        tax_group_map.insert(10, "PVN1".to_string());
        tax_group_map.insert(0, "PVN3".to_string());

        Self {
            vendor_code: "V00000262".to_string(),
            vendor_name: "CÔNG TY DỊCH VỤ MOBIFONE KHU VỰC 2".to_string(),
            vendor_tax_code: "0100686209-002".to_string(),
            vendor_address: "MM18 Trương Sơn, Phường 14, Quận 10, Thành phố Hồ Chí Minh".to_string(),
            expense_account: "64271001".to_string(),
            vat_account: "13311001".to_string(),
            payable_account: "33111001".to_string(),
            project_code: "TTG".to_string(),
            default_branch: String::new(),
            tax_group_map,
            remarks_template: String::new(),
            description_template: "CP DIEN THOAI {provider} {period} - HD{invoice_no}".to_string(),
            period: String::new(),
            cfw_id: String::new(),
        }
    }
}

impl LedgerConfig {
    /// Tax group code for a VAT rate, empty when unmapped.
    pub fn tax_group(&self, vat_rate: u32) -> &str {
        self.tax_group_map
            .get(&vat_rate)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Render the description template for one invoice.
    pub fn describe(&self, provider: &str, invoice_no: &str) -> String {
        self.description_template
            .replace("{provider}", &provider.to_uppercase())
            .replace("{period}", &self.period)
            .replace("{invoice_no}", invoice_no)
    }
}

/// Batch processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Provider used when none is given on the command line.
    pub default_provider: Option<String>,

    /// Keep going after a document fails to parse.
    pub continue_on_error: bool,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            default_provider: None,
            continue_on_error: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}
