//! Shift classification.
//!
//! The exact-match table lives in one pure function so every caller (cell
//! parsing, statistics, tests) sees the same mapping.

use crate::models::{ShiftCode, TimeRange};

/// Classifies an exact (start, end) minute pair against the shift table.
///
/// Returns `None` for any pair without a table entry; the numeric ranges in
/// the table are mutually exclusive, so lookup order never matters.
///
/// # Example
///
/// ```
/// use roster_engine::conversion::classify_minutes;
/// use roster_engine::models::ShiftCode;
///
/// assert_eq!(classify_minutes(510, 1080), Some(ShiftCode::A));
/// assert_eq!(classify_minutes(540, 1110), Some(ShiftCode::Exp));
/// assert_eq!(classify_minutes(0, 120), None);
/// ```
pub fn classify_minutes(start: u32, end: u32) -> Option<ShiftCode> {
    match (start, end) {
        (510, 1080) => Some(ShiftCode::A),
        (510, 840) => Some(ShiftCode::AEarlyEnd),
        (810, 1380) => Some(ShiftCode::B),
        (1080, 1380) => Some(ShiftCode::BLateStart),
        (630, 1200) => Some(ShiftCode::C),
        (540, 1110) => Some(ShiftCode::Exp),
        _ => None,
    }
}

/// Classifies a parsed, rollover-normalized time range.
pub fn classify_range(range: &TimeRange) -> Option<ShiftCode> {
    classify_minutes(range.start_minutes(), range.end_minutes())
}

/// Classifies raw time-range text, tolerating parse failure.
///
/// A well-formed range without a table entry falls through to
/// [`ShiftCode::Range`] carrying the trimmed original text; text that does
/// not parse as a time range at all yields [`ShiftCode::Unclassified`].
/// Only the parser itself is strict about malformed input.
pub fn classify_text(text: &str) -> ShiftCode {
    match TimeRange::parse(text) {
        Ok(range) => {
            classify_range(&range).unwrap_or_else(|| ShiftCode::Range(text.trim().to_string()))
        }
        Err(_) => ShiftCode::Unclassified,
    }
}
