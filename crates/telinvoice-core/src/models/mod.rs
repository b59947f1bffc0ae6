//! Data models shared by the parsers, the pipeline and the ledger transform.

pub mod config;
pub mod invoice;
