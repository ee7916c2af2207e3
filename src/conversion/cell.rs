//! Roster cell parsing.
//!
//! A raw cell is either a bare keyword ("OFF", leave markers) or a keyword
//! followed by a time range ("A 08:30-18:00"). The parser resolves both into
//! a shift code plus worked hours and never fails: malformed content degrades
//! to sentinel values.

use rust_decimal::Decimal;

use crate::conversion::classify::classify_text;
use crate::models::{ShiftCode, TimeRange};

/// The outcome of parsing one roster cell.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCell {
    /// The normalized shift code.
    pub code: ShiftCode,
    /// Worked hours for the cell, 0 for non-working and unparsable entries.
    pub hours: Decimal,
}

/// Parses one raw roster cell into a shift code and worked hours.
///
/// The trimmed cell splits on the first whitespace run into a keyword and an
/// optional remainder. Recognized non-working keywords short-circuit with 0
/// hours and no time parsing; otherwise the remainder (possibly empty) is
/// classified and its duration computed. The degenerate "00:00-00:02" range
/// is a data-entry artifact of the upstream roster tool and is normalized to
/// an empty display with 0 hours before classification.
///
/// # Example
///
/// ```
/// use roster_engine::conversion::parse_cell;
/// use roster_engine::models::ShiftCode;
/// use rust_decimal::Decimal;
///
/// let cell = parse_cell("A 08:30-18:00");
/// assert_eq!(cell.code, ShiftCode::A);
/// assert_eq!(cell.hours, Decimal::new(95, 1)); // 9.5
/// ```
pub fn parse_cell(raw: &str) -> ParsedCell {
    let trimmed = raw.trim();
    let (keyword, remainder) = match trimmed.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (trimmed, ""),
    };

    if let Some(code) = ShiftCode::from_keyword(keyword) {
        return ParsedCell {
            code,
            hours: Decimal::ZERO,
        };
    }

    if is_entry_artifact(remainder) {
        return ParsedCell {
            code: ShiftCode::Range(String::new()),
            hours: Decimal::ZERO,
        };
    }

    ParsedCell {
        code: classify_text(remainder),
        hours: worked_hours(remainder),
    }
}

/// Computes worked hours from raw time-range text.
///
/// Parse failure is absorbed silently and yields 0 hours.
pub fn worked_hours(text: &str) -> Decimal {
    TimeRange::parse(text)
        .map(|range| range.duration_hours())
        .unwrap_or(Decimal::ZERO)
}

/// The upstream roster tool emits "00:00-00:02" into cells it could not
/// clear; the range is display noise, not a two-minute shift.
fn is_entry_artifact(text: &str) -> bool {
    match text.split_once('-') {
        Some((start, end)) => start.trim() == "00:00" && end.trim() == "00:02",
        None => false,
    }
}
