//! Locale-formatted numeric input normalization.
//!
//! Monetary and count fields arrive as user-typed text with Vietnamese
//! grouping separators (`2.000.000.000`). Normalization strips everything
//! that is not a digit and parses the remainder; text with no digits is
//! "unset" and the caller supplies the context default (0 for monetary
//! fields, 1 for page/copy counts).

/// Parses grouped numeric text into an integer.
///
/// All non-digit characters are stripped, so `2.000.000`, `2,000,000` and
/// `2000000` all parse to `2000000`. Returns `None` when no digits remain
/// (or the digits overflow a `u64`); the caller decides the default.
#[must_use]
pub fn parse_grouped_integer(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Normalizes a monetary text field: unset parses to 0.
#[must_use]
pub fn amount_or_zero(text: &str) -> u64 {
    parse_grouped_integer(text).unwrap_or(0)
}

/// Normalizes a page/copy count field: unset parses to 1.
///
/// An explicit `0` also normalizes to 1; a document always has at least one
/// page and one copy, and the forms treat a zero as a not-yet-filled field.
#[must_use]
pub fn count_or_one(text: &str) -> u32 {
    match parse_grouped_integer(text) {
        Some(n) if n > 0 => u32::try_from(n).unwrap_or(u32::MAX),
        _ => 1,
    }
}

/// Formats an integer with dot grouping separators, the way the input
/// fields echo it back (`2000000` becomes `2.000.000`).
#[must_use]
pub fn format_grouped(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
