//! Derived values: reading time and date normalization.

use crate::content::types::Locale;
use serde_json::Value;

// ============================================================================
// Reading Time
// ============================================================================

/// Characters per minute for Korean body text.
const KO_CHARS_PER_MINUTE: usize = 300;

/// Words per minute for everything else.
const WORDS_PER_MINUTE: usize = 200;

/// Estimate reading time in whole minutes, rounding up.
///
/// Korean counts characters (word boundaries are unreliable for CJK);
/// other locales count whitespace-separated words. An empty body yields
/// 0, deliberately not clamped to 1.
pub fn reading_time(body: &str, locale: Locale) -> u32 {
    let minutes = match locale {
        Locale::Ko => body.chars().count().div_ceil(KO_CHARS_PER_MINUTE),
        Locale::En => body.split_whitespace().count().div_ceil(WORDS_PER_MINUTE),
    };
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

// ============================================================================
// Date Normalization
// ============================================================================

/// Normalize a date-like metadata value to a `YYYY-MM-DD` string.
///
/// Datetime strings (`2024-01-15`, `2024-01-15T10:00:00Z`, ...) are
/// sliced to their date-only prefix. Anything else is coerced to its
/// literal string form, leniently, so a malformed date sorts and
/// displays as-is rather than failing the document.
pub fn normalize_date(value: &Value) -> String {
    match value {
        Value::String(s) => {
            if s.len() >= 10 && is_valid_date(&s.as_bytes()[..10]) {
                s[..10].to_owned()
            } else {
                s.clone()
            }
        }
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Check that 10 bytes form a calendar-valid `YYYY-MM-DD` prefix.
fn is_valid_date(bytes: &[u8]) -> bool {
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }
    let Some(year) = parse_u16(&bytes[0..4]) else {
        return false;
    };
    let Some(month) = parse_u8(&bytes[5..7]) else {
        return false;
    };
    let Some(day) = parse_u8(&bytes[8..10]) else {
        return false;
    };

    (1..=12).contains(&month) && day >= 1 && day <= days_in_month(year, month)
}

#[inline]
fn is_leap_year(year: u16) -> bool {
    year.is_multiple_of(4) && (!year.is_multiple_of(100) || year.is_multiple_of(400))
}

#[inline]
fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + d as u16;
    }
    Some(result)
}
