//! Normalized shift codes.
//!
//! This module defines the closed set of shift categories a roster cell can
//! resolve to, together with their display forms as written into the
//! converted sheet.

use std::fmt;

/// A normalized shift category derived from a roster cell.
///
/// Time-range cells resolve to one of the fixed categories via the
/// classification table; literal keyword cells map directly; everything else
/// falls through to [`ShiftCode::Range`] (the original text, preserved
/// verbatim for manual review) or [`ShiftCode::Unclassified`] when the text
/// is not a time range at all.
///
/// # Example
///
/// ```
/// use roster_engine::models::ShiftCode;
///
/// assert_eq!(ShiftCode::AEarlyEnd.to_string(), "A-1400");
/// assert_eq!(ShiftCode::Range("07:00-15:00".into()).to_string(), "07:00-15:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShiftCode {
    /// Morning shift, 08:30–18:00.
    A,
    /// Morning shift with early finish, 08:30–14:00.
    AEarlyEnd,
    /// Night shift, 13:30–23:00.
    B,
    /// Night shift with late start, 18:00–23:00.
    BLateStart,
    /// Midday shift, 10:30–20:00.
    C,
    /// Expo shift, 09:00–18:30.
    Exp,
    /// Rostered day off.
    Off,
    /// Annual leave ("年假").
    AnnualLeave,
    /// Hong Kong general holiday ("HK-PH").
    PublicHoliday,
    /// Hong Kong statutory holiday ("HK-SH").
    StatutoryHoliday,
    /// A well-formed time range with no table entry; carries the original
    /// trimmed text so unseen patterns survive into the output unchanged.
    Range(String),
    /// Cell text that is neither a known keyword nor a parsable time range.
    Unclassified,
}

impl ShiftCode {
    /// Maps a literal non-working keyword to its code.
    ///
    /// Matching is exact and case-sensitive, as the keywords appear in the
    /// source rosters. Returns `None` for anything else.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "OFF" => Some(Self::Off),
            "年假" => Some(Self::AnnualLeave),
            "HK-PH" => Some(Self::PublicHoliday),
            "HK-SH" => Some(Self::StatutoryHoliday),
            _ => None,
        }
    }
}

impl fmt::Display for ShiftCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => f.write_str("A"),
            Self::AEarlyEnd => f.write_str("A-1400"),
            Self::B => f.write_str("B"),
            Self::BLateStart => f.write_str("1800-B"),
            Self::C => f.write_str("C"),
            Self::Exp => f.write_str("EXP"),
            Self::Off => f.write_str("OFF"),
            Self::AnnualLeave => f.write_str("年假"),
            Self::PublicHoliday => f.write_str("HK-PH"),
            Self::StatutoryHoliday => f.write_str("HK-SH"),
            Self::Range(text) => f.write_str(text),
            Self::Unclassified => f.write_str("特定班"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_forms() {
        assert_eq!(ShiftCode::A.to_string(), "A");
        assert_eq!(ShiftCode::AEarlyEnd.to_string(), "A-1400");
        assert_eq!(ShiftCode::B.to_string(), "B");
        assert_eq!(ShiftCode::BLateStart.to_string(), "1800-B");
        assert_eq!(ShiftCode::C.to_string(), "C");
        assert_eq!(ShiftCode::Exp.to_string(), "EXP");
        assert_eq!(ShiftCode::Off.to_string(), "OFF");
        assert_eq!(ShiftCode::AnnualLeave.to_string(), "年假");
        assert_eq!(ShiftCode::PublicHoliday.to_string(), "HK-PH");
        assert_eq!(ShiftCode::StatutoryHoliday.to_string(), "HK-SH");
        assert_eq!(ShiftCode::Unclassified.to_string(), "特定班");
    }

    #[test]
    fn test_range_preserves_original_text() {
        let code = ShiftCode::Range("07:15-16:45".to_string());
        assert_eq!(code.to_string(), "07:15-16:45");
    }

    #[test]
    fn test_from_keyword_recognizes_non_working_literals() {
        assert_eq!(ShiftCode::from_keyword("OFF"), Some(ShiftCode::Off));
        assert_eq!(ShiftCode::from_keyword("年假"), Some(ShiftCode::AnnualLeave));
        assert_eq!(ShiftCode::from_keyword("HK-PH"), Some(ShiftCode::PublicHoliday));
        assert_eq!(ShiftCode::from_keyword("HK-SH"), Some(ShiftCode::StatutoryHoliday));
    }

    #[test]
    fn test_from_keyword_is_case_sensitive() {
        assert_eq!(ShiftCode::from_keyword("off"), None);
        assert_eq!(ShiftCode::from_keyword("Hk-Ph"), None);
        assert_eq!(ShiftCode::from_keyword("A"), None);
    }
}
