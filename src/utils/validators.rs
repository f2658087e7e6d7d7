//! Draft row field validators
//!
//! Pure predicates over the raw text typed into a draft row.

use super::url_validator::validate_url;

/// True iff `s` parses as an absolute URL.
pub fn is_valid_url(s: &str) -> bool {
    validate_url(s).is_ok()
}

/// True iff `s` is empty, or all ASCII digits with a value > 0.
pub fn is_valid_expiry(s: &str) -> bool {
    s.is_empty() || parse_expiry_minutes(s).is_some()
}

/// Parse an expiry field into whole minutes.
///
/// Returns `None` for the empty string, non-digit input and zero. Values too
/// large for `u64` saturate to `u64::MAX`.
pub fn parse_expiry_minutes(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if s.bytes().all(|b| b == b'0') {
        return None;
    }
    // 全是数字时 parse 只可能因溢出失败
    Some(s.parse::<u64>().unwrap_or(u64::MAX))
}

/// True iff `s` is empty or only contains `[A-Za-z0-9_-]`.
pub fn is_valid_custom(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'))
}
