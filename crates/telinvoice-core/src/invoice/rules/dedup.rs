//! Removal of repeated charge lines.
//!
//! Mobifone and Viettel tables end with a "CỘNG" (total) row that repeats
//! the figures of a single-service invoice, so the same tuple is captured
//! twice.

use std::collections::HashSet;

use crate::models::invoice::ChargeLine;

/// Drop lines that exactly repeat an earlier one. First occurrence wins and
/// the order of the survivors is preserved.
pub fn dedup_lines(lines: impl IntoIterator<Item = ChargeLine>) -> Vec<ChargeLine> {
    let mut seen = HashSet::new();
    lines.into_iter().filter(|line| seen.insert(*line)).collect()
}
