use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Smallest count an entry may hold.
pub const MIN_COUNT: i64 = 0;
/// Largest count an entry may hold.
pub const MAX_COUNT: i64 = 99;

/// Validation errors for entry labels and counts.
///
/// The `Display` strings double as the user-facing notice messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter only letters")]
    InvalidLabel(String),
    #[error("Please enter some text before submitting.")]
    EmptyLabel,
    #[error("Please enter a number between 0 and 99")]
    InvalidCount(String),
}

static LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]*$").expect("valid hardcoded regex"));

/// Validates a label: ASCII letters only. The empty string is accepted.
pub fn validate_label(label: &str) -> Result<(), ValidationError> {
    if LABEL_RE.is_match(label) {
        Ok(())
    } else {
        Err(ValidationError::InvalidLabel(label.to_string()))
    }
}

/// Parses the leading integer of `raw`.
///
/// Leading whitespace and a single `+`/`-` sign are allowed; parsing stops at
/// the first non-digit, so `"7x"` yields `7`. Returns `None` when no digit
/// follows, or when the digits overflow `i64`.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = rest
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(rest.len(), |(i, _)| i);
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }
    let magnitude: i64 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Parses a raw count and checks it falls within `[MIN_COUNT, MAX_COUNT]`.
pub fn parse_count(raw: &str) -> Result<u8, ValidationError> {
    parse_leading_int(raw)
        .filter(|n| (MIN_COUNT..=MAX_COUNT).contains(n))
        .and_then(|n| u8::try_from(n).ok())
        .ok_or_else(|| ValidationError::InvalidCount(raw.to_string()))
}
