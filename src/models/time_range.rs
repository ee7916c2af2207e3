//! Time range parsing and duration math.
//!
//! This module defines the [`TimeRange`] type for the "HH:MM-HH:MM" text
//! found in roster cells, including overnight rollover handling.

use chrono::{NaiveTime, Timelike};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{RosterError, RosterResult};

/// Minutes in one civil day, added to the end time on overnight rollover.
pub const MINUTES_PER_DAY: u32 = 1440;

/// A parsed shift time range in minutes since midnight.
///
/// The end is rollover-normalized on construction: a raw end earlier than the
/// start is interpreted as crossing midnight and advanced by 24 hours, so
/// `end_minutes() >= start_minutes()` always holds and the end may exceed
/// 1440. Times are naive civil times with no timezone semantics.
///
/// # Example
///
/// ```
/// use roster_engine::models::TimeRange;
///
/// let overnight = TimeRange::parse("22:00-06:00").unwrap();
/// assert_eq!(overnight.start_minutes(), 1320);
/// assert_eq!(overnight.end_minutes(), 1680);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    start: u32,
    end: u32,
}

impl TimeRange {
    /// Parses "HH:MM-HH:MM" text into a rollover-normalized range.
    ///
    /// The text must contain exactly one "-" separating two 24-hour "HH:MM"
    /// tokens after surrounding whitespace is trimmed. Anything else fails
    /// with [`RosterError::MalformedTimeRange`].
    pub fn parse(text: &str) -> RosterResult<Self> {
        let trimmed = text.trim();

        let mut tokens = trimmed.split('-');
        let (start_raw, end_raw) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(start), Some(end), None) => (start, end),
            _ => return Err(malformed(trimmed)),
        };

        let start = minutes_of_day(start_raw).ok_or_else(|| malformed(trimmed))?;
        let mut end = minutes_of_day(end_raw).ok_or_else(|| malformed(trimmed))?;

        // Raw end before start means the shift crosses midnight.
        if end < start {
            end += MINUTES_PER_DAY;
        }

        Ok(Self { start, end })
    }

    /// Returns the start as minutes since midnight.
    pub fn start_minutes(&self) -> u32 {
        self.start
    }

    /// Returns the rollover-normalized end as minutes since midnight.
    pub fn end_minutes(&self) -> u32 {
        self.end
    }

    /// Calculates the worked hours for this range, rounded to one decimal.
    ///
    /// Midpoints round away from zero, so a 27-minute range yields 0.5 hours.
    ///
    /// # Example
    ///
    /// ```
    /// use roster_engine::models::TimeRange;
    /// use rust_decimal::Decimal;
    ///
    /// let shift = TimeRange::parse("08:30-14:00").unwrap();
    /// assert_eq!(shift.duration_hours(), Decimal::new(55, 1)); // 5.5 hours
    /// ```
    pub fn duration_hours(&self) -> Decimal {
        let minutes = Decimal::from(self.end - self.start);
        (minutes / Decimal::from(60))
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
    }
}

/// Parses one "HH:MM" token into minutes since midnight.
fn minutes_of_day(token: &str) -> Option<u32> {
    let time = NaiveTime::parse_from_str(token.trim(), "%H:%M").ok()?;
    Some(time.hour() * 60 + time.minute())
}

fn malformed(text: &str) -> RosterError {
    RosterError::MalformedTimeRange {
        text: text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_plain_range() {
        let range = TimeRange::parse("09:00-18:00").unwrap();
        assert_eq!(range.start_minutes(), 540);
        assert_eq!(range.end_minutes(), 1080);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let range = TimeRange::parse("  08:30 - 14:00  ").unwrap();
        assert_eq!(range.start_minutes(), 510);
        assert_eq!(range.end_minutes(), 840);
    }

    #[test]
    fn test_overnight_end_advances_by_one_day() {
        let range = TimeRange::parse("22:00-06:00").unwrap();
        assert_eq!(range.start_minutes(), 1320);
        assert_eq!(range.end_minutes(), 1320 + 360);
        assert_eq!(range.duration_hours(), dec("8.0"));
    }

    #[test]
    fn test_duration_nine_hours() {
        let range = TimeRange::parse("09:00-18:00").unwrap();
        assert_eq!(range.duration_hours(), dec("9.0"));
    }

    #[test]
    fn test_duration_five_and_a_half_hours() {
        let range = TimeRange::parse("08:30-14:00").unwrap();
        assert_eq!(range.duration_hours(), dec("5.5"));
    }

    #[test]
    fn test_duration_midpoint_rounds_away_from_zero() {
        // 27 minutes = 0.45 hours, which must round up to 0.5.
        let range = TimeRange::parse("09:00-09:27").unwrap();
        assert_eq!(range.duration_hours(), dec("0.5"));
    }

    #[test]
    fn test_zero_length_range() {
        let range = TimeRange::parse("09:00-09:00").unwrap();
        assert_eq!(range.duration_hours(), Decimal::ZERO);
    }

    #[test]
    fn test_missing_separator_is_malformed() {
        assert!(TimeRange::parse("09:00").is_err());
    }

    #[test]
    fn test_double_separator_is_malformed() {
        assert!(TimeRange::parse("09:00-13:00-18:00").is_err());
    }

    #[test]
    fn test_bad_token_is_malformed() {
        assert!(TimeRange::parse("nine-18:00").is_err());
        assert!(TimeRange::parse("09:00-6pm").is_err());
        assert!(TimeRange::parse("24:00-06:00").is_err());
    }

    #[test]
    fn test_empty_text_is_malformed() {
        let error = TimeRange::parse("").unwrap_err();
        assert!(matches!(
            error,
            RosterError::MalformedTimeRange { text } if text.is_empty()
        ));
    }
}
