//! Output workbook writing.
//!
//! Renders a planned [`RosterLayout`] into a styled workbook: fixed column
//! widths, the header/data cell styles of the store's roster template, and
//! the merged statistics title.

use rust_xlsxwriter::{Format, FormatAlign, Workbook, XlsxError};

use crate::conversion::{CellValue, RosterLayout, STATS_TITLE_SPAN};
use crate::error::{RosterError, RosterResult};

/// Name of the worksheet in the converted workbook.
pub const OUTPUT_SHEET: &str = "排班明細";

const NAME_COL_WIDTH: f64 = 20.0;
const DATE_COL_WIDTH: f64 = 18.0;
const FONT_NAME: &str = "Microsoft JhengHei";
const HEADER_FILL: u32 = 0x2F5496;
const HEADER_FONT_COLOR: u32 = 0xFFFFFF;

/// Writes the planned roster into workbook bytes.
///
/// The statistics title cell is merged across the first
/// [`STATS_TITLE_SPAN`] columns; counts are written as numbers, everything
/// else as strings. The workbook is produced entirely in memory.
pub fn write_roster(layout: &RosterLayout) -> RosterResult<Vec<u8>> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_font_name(FONT_NAME)
        .set_font_color(HEADER_FONT_COLOR)
        .set_background_color(HEADER_FILL)
        .set_text_wrap()
        .set_align(FormatAlign::VerticalCenter);

    let data_format = Format::new()
        .set_font_name(FONT_NAME)
        .set_text_wrap()
        .set_align(FormatAlign::VerticalCenter);

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(OUTPUT_SHEET).map_err(write_err)?;

    worksheet.set_column_width(0, NAME_COL_WIDTH).map_err(write_err)?;
    for index in 0..layout.date_count {
        worksheet
            .set_column_width((index + 1) as u16, DATE_COL_WIDTH)
            .map_err(write_err)?;
    }

    for cell in &layout.cells {
        // The statistics title spans a merged range instead of one cell.
        if cell.row == layout.sections.stats_start && cell.col == 0 {
            if let CellValue::Text(title) = &cell.value {
                worksheet
                    .merge_range(cell.row, 0, cell.row, STATS_TITLE_SPAN - 1, title, &data_format)
                    .map_err(write_err)?;
            }
            continue;
        }

        let format = if cell.row == 0 {
            &header_format
        } else {
            &data_format
        };
        match &cell.value {
            CellValue::Text(text) => {
                worksheet
                    .write_string_with_format(cell.row, cell.col, text.as_str(), format)
                    .map_err(write_err)?;
            }
            CellValue::Count(count) => {
                worksheet
                    .write_number_with_format(cell.row, cell.col, f64::from(*count), format)
                    .map_err(write_err)?;
            }
        }
    }

    workbook.save_to_buffer().map_err(write_err)
}

fn write_err(error: XlsxError) -> RosterError {
    RosterError::SpreadsheetWrite {
        message: error.to_string(),
    }
}
