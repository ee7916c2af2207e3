//! Spreadsheet collaborators and the conversion pipeline.
//!
//! The reader and writer isolate all workbook I/O from the conversion core;
//! [`convert_roster`] wires one uploaded workbook through the whole
//! pipeline.

pub mod dates;
pub mod reader;
pub mod writer;

use crate::config::NicknameTable;
use crate::conversion::{build_records, plan_roster};
use crate::error::{RosterError, RosterResult};
use crate::models::DailyStats;

pub use reader::SOURCE_SHEET;
pub use writer::OUTPUT_SHEET;

/// Converts one uploaded roster workbook into the reformatted workbook.
///
/// The statistics accumulator is created here and threaded through record
/// building, so every conversion run owns its own statistics and concurrent
/// requests cannot interfere.
pub fn convert_roster(input: &[u8], nicknames: &NicknameTable) -> RosterResult<Vec<u8>> {
    let rows = reader::read_roster_rows(input)?;

    let min_rows = reader::FIRST_EMPLOYEE_ROW + reader::TRAILING_SUMMARY_ROWS;
    if rows.len() < min_rows {
        return Err(RosterError::SheetLayout {
            message: format!("expected at least {min_rows} rows, found {}", rows.len()),
        });
    }

    let header = &rows[reader::DATE_HEADER_ROW];
    let header_end = header.len().min(reader::DATE_COL_END);
    let raw_labels = header
        .get(reader::DATE_COL_START..header_end)
        .unwrap_or(&[]);
    let dates = dates::parse_date_labels(raw_labels);
    if dates.is_empty() {
        return Err(RosterError::SheetLayout {
            message: "no date labels in header row".to_string(),
        });
    }

    let mut stats = DailyStats::new();
    let employee_rows = &rows[reader::FIRST_EMPLOYEE_ROW..rows.len() - reader::TRAILING_SUMMARY_ROWS];
    let (full_time, part_time) = build_records(employee_rows, &dates, nicknames, &mut stats);

    let layout = plan_roster(&full_time, &part_time, &dates, &stats);
    writer::write_roster(&layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    fn table() -> NicknameTable {
        NicknameTable::from_entries([("Chan Tai Man".to_string(), "Ming".to_string())])
    }

    fn workbook_from_rows(rows: &[(u32, Vec<&str>)]) -> Vec<u8> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.set_name(SOURCE_SHEET).unwrap();
        for (row, cells) in rows {
            for (col, value) in cells.iter().enumerate() {
                if !value.is_empty() {
                    sheet.write_string(*row, col as u16, *value).unwrap();
                }
            }
        }
        workbook.save_to_buffer().unwrap()
    }

    #[test]
    fn test_too_few_rows_is_a_layout_error() {
        let input = workbook_from_rows(&[(0, vec!["title"])]);
        let result = convert_roster(&input, &table());
        assert!(matches!(result, Err(RosterError::SheetLayout { .. })));
    }

    #[test]
    fn test_header_without_date_labels_is_a_layout_error() {
        let input = workbook_from_rows(&[
            (0, vec!["title"]),
            (8, vec!["Name", "Role"]),
            (9, vec!["Chan Tai Man", "Sales", "OFF"]),
            (10, vec!["summary"]),
            (11, vec!["summary"]),
        ]);
        let result = convert_roster(&input, &table());
        assert!(matches!(result, Err(RosterError::SheetLayout { .. })));
    }

    #[test]
    fn test_minimal_roster_converts() {
        let input = workbook_from_rows(&[
            (0, vec!["title"]),
            (8, vec!["", "", "1 Mon", "2 Tue"]),
            (9, vec!["Chan Tai Man", "Sales Associate", "A 08:30-18:00", "OFF"]),
            (10, vec!["summary"]),
            (11, vec!["summary"]),
        ]);
        let output = convert_roster(&input, &table()).unwrap();
        assert!(!output.is_empty());
    }
}
