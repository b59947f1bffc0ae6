//! Rule-based field extraction shared by the provider parsers.

pub mod amounts;
pub mod dates;
pub mod dedup;
pub mod patterns;

pub use amounts::{parse_amount, parse_rate};
pub use dates::{calendar_date, date_from_captures};
pub use dedup::dedup_lines;

use regex::Regex;

use self::patterns::WHITESPACE;

/// Collapse every whitespace run, newlines included, into one space.
///
/// Labels and values that were split across lines by the PDF text layer
/// become adjacent, which is what the layout patterns expect.
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").into_owned()
}

/// First capture group of the first match, trimmed. Empty when the pattern
/// does not match.
pub fn capture_first(pattern: &Regex, text: &str) -> String {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}
