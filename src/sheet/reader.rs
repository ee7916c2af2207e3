//! Source workbook reading.
//!
//! Extracts the fixed-name source worksheet into a rectangular table of
//! strings with absolute positions, so the rest of the pipeline can address
//! cells by their on-sheet row and column indices.

use std::io::Cursor;

use calamine::{Data, Range, Reader, Xlsx, open_workbook_from_rs};

use crate::error::{RosterError, RosterResult};

/// Name of the worksheet holding the source roster.
pub const SOURCE_SHEET: &str = "排班表";

/// Row index of the date-range header cells.
pub const DATE_HEADER_ROW: usize = 8;

/// First column of the date span within the header row.
pub const DATE_COL_START: usize = 2;

/// One past the last column of the date span.
pub const DATE_COL_END: usize = 28;

/// First employee data row.
pub const FIRST_EMPLOYEE_ROW: usize = 9;

/// Trailing summary rows at the bottom of the source sheet to ignore.
pub const TRAILING_SUMMARY_ROWS: usize = 2;

/// Reads the source roster worksheet into absolute-positioned string rows.
///
/// Leading empty rows and columns are padded so indices match the on-sheet
/// grid regardless of where the used range starts.
pub fn read_roster_rows(data: &[u8]) -> RosterResult<Vec<Vec<String>>> {
    let cursor = Cursor::new(data);
    let mut workbook: Xlsx<_> =
        open_workbook_from_rs(cursor).map_err(|e: calamine::XlsxError| {
            RosterError::SpreadsheetRead {
                message: e.to_string(),
            }
        })?;

    let range = workbook
        .worksheet_range(SOURCE_SHEET)
        .map_err(|_| RosterError::WorksheetNotFound {
            name: SOURCE_SHEET.to_string(),
        })?;

    Ok(range_to_rows(&range))
}

fn range_to_rows(range: &Range<Data>) -> Vec<Vec<String>> {
    let (row_offset, col_offset) = range
        .start()
        .map(|(row, col)| (row as usize, col as usize))
        .unwrap_or((0, 0));

    let mut rows: Vec<Vec<String>> = vec![Vec::new(); row_offset];
    for cells in range.rows() {
        let mut row = vec![String::new(); col_offset];
        row.extend(cells.iter().map(cell_to_string));
        rows.push(row);
    }
    rows
}

/// Converts a calamine cell to its string form.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            // Avoid trailing ".0" for whole numbers.
            if *f == (*f as i64) as f64 && f.abs() < i64::MAX as f64 {
                format!("{}", *f as i64)
            } else {
                format!("{}", f)
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{:?}", e),
    }
}
