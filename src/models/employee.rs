//! Employee record model.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::ShiftCode;

/// A structured employee row from the source roster.
///
/// Built once per input row by the record builder and immutable afterwards.
/// `schedule_by_date` and `hours_by_date` are keyed by the canonical date
/// labels produced for the period.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeRecord {
    /// The employee name as written in the source roster.
    pub name: String,
    /// The canonical display name resolved through the nickname table.
    pub display_name: String,
    /// The role text from the source roster.
    pub role: String,
    /// Whether the role marks the employee as part-time.
    pub is_part_time: bool,
    /// Normalized shift code per date label.
    pub schedule_by_date: HashMap<String, ShiftCode>,
    /// Worked hours per date label.
    pub hours_by_date: HashMap<String, Decimal>,
}

impl EmployeeRecord {
    /// Returns the display text for the shift on the given date label.
    ///
    /// Dates outside the record's period render as an empty cell.
    pub fn shift_display(&self, date: &str) -> String {
        self.schedule_by_date
            .get(date)
            .map(ShiftCode::to_string)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> EmployeeRecord {
        let mut schedule_by_date = HashMap::new();
        schedule_by_date.insert("1\nMon".to_string(), ShiftCode::A);
        schedule_by_date.insert("2\nTue".to_string(), ShiftCode::Off);
        let mut hours_by_date = HashMap::new();
        hours_by_date.insert("1\nMon".to_string(), Decimal::new(95, 1));
        hours_by_date.insert("2\nTue".to_string(), Decimal::ZERO);

        EmployeeRecord {
            name: "Chan Tai Man".to_string(),
            display_name: "Ming".to_string(),
            role: "Sales Associate".to_string(),
            is_part_time: false,
            schedule_by_date,
            hours_by_date,
        }
    }

    #[test]
    fn test_shift_display_for_known_date() {
        let record = sample_record();
        assert_eq!(record.shift_display("1\nMon"), "A");
        assert_eq!(record.shift_display("2\nTue"), "OFF");
    }

    #[test]
    fn test_shift_display_for_unknown_date_is_empty() {
        let record = sample_record();
        assert_eq!(record.shift_display("3\nWed"), "");
    }
}
