//! Provider name resolution.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TelinvoiceError};
use crate::models::invoice::Invoice;

use super::{InvoiceParser, MobifoneParser, ViettelParser, VnptParser};

/// Supported telecom providers. Each variant selects one invoice layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Mobifone,
    Viettel,
    Vnpt,
}

impl Provider {
    /// All supported providers.
    pub const ALL: [Provider; 3] = [Provider::Mobifone, Provider::Viettel, Provider::Vnpt];

    /// Registry identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Provider::Mobifone => "mobifone",
            Provider::Viettel => "viettel",
            Provider::Vnpt => "vnpt",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Provider {
    type Err = TelinvoiceError;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_lowercase();
        Provider::ALL
            .into_iter()
            .find(|p| p.as_str() == name)
            .ok_or(TelinvoiceError::UnsupportedProvider(name))
    }
}

impl InvoiceParser for Provider {
    fn parse(&self, text: &str) -> Invoice {
        match self {
            Provider::Mobifone => MobifoneParser.parse(text),
            Provider::Viettel => ViettelParser.parse(text),
            Provider::Vnpt => VnptParser.parse(text),
        }
    }
}

/// Resolve a provider name (case-insensitive, surrounding whitespace
/// ignored) to its parser.
pub fn parser_for(name: &str) -> Result<Provider> {
    name.parse()
}
