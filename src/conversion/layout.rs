//! Roster layout planning.
//!
//! Partitions employees into priority/regular/part-time groups, orders each
//! group deterministically and computes every cell of the converted sheet as
//! (row, column, value) assignments, plus the section boundaries the sheet
//! writer needs for styling and the merged statistics title.

use crate::models::{DailyStats, DayStat, EmployeeRecord, TOTAL_KEY};

/// Header text above the name column.
pub const NAME_HEADER: &str = "姓名";

/// Title of the statistics block.
pub const STATS_TITLE: &str = "每日班次統計";

/// Number of columns the statistics title is merged across.
pub const STATS_TITLE_SPAN: u16 = 7;

/// Display name pinned to the front of its tier when priority roles tie.
/// A fixed named-individual rule, not an alphabetical one.
pub const TIER_TIE_BREAK_NAME: &str = "Wui";

const MORNING_LABEL: &str = "返早人數";
const MIDDAY_LABEL: &str = "返中人數";
const NIGHT_LABEL: &str = "返夜人數";
const HOURS_LABEL: &str = "實際工時";

/// A value destined for one output cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Written as a string cell.
    Text(String),
    /// Written as a numeric cell (statistics counts).
    Count(u32),
}

/// One cell of the planned output sheet, 0-based coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct CellAssignment {
    /// Output row index.
    pub row: u32,
    /// Output column index.
    pub col: u16,
    /// The value to write.
    pub value: CellValue,
}

/// Row indices where each section of the output sheet starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionBounds {
    /// First priority-group employee row.
    pub priority_start: u32,
    /// First regular-group employee row.
    pub regular_start: u32,
    /// First part-time employee row.
    pub part_time_start: u32,
    /// The statistics title row.
    pub stats_start: u32,
}

/// The fully planned output sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct RosterLayout {
    /// Every cell to write, in emission order.
    pub cells: Vec<CellAssignment>,
    /// Section boundaries for styling and merging.
    pub sections: SectionBounds,
    /// Number of date columns.
    pub date_count: usize,
}

/// Returns the priority rank for a leadership role, case-insensitively.
///
/// Roles outside the fixed three-tier set belong to the regular group.
pub fn priority_tier(role: &str) -> Option<u8> {
    match role.to_lowercase().as_str() {
        "store manager" => Some(0),
        "assistant store manager" => Some(1),
        "store supervisor" => Some(2),
        _ => None,
    }
}

/// Plans the converted roster sheet.
///
/// Full-time employees split into the priority group (sorted ascending by
/// tier; the sort is stable, so [`TIER_TIE_BREAK_NAME`] moves to the front
/// of a tied tier and everyone else keeps encounter order) and the regular
/// group, which stays in encounter order, as does the part-time group.
/// The row sequence is:
/// header, priority rows, one blank row, regular rows, two blank rows,
/// part-time rows, three blank rows, then the statistics block (title plus
/// one row per metric, each spanning the date columns and a trailing total
/// column resolved through the [`TOTAL_KEY`] sentinel).
pub fn plan_roster(
    full_time: &[EmployeeRecord],
    part_time: &[EmployeeRecord],
    dates: &[String],
    stats: &DailyStats,
) -> RosterLayout {
    let mut priority: Vec<&EmployeeRecord> = Vec::new();
    let mut regular: Vec<&EmployeeRecord> = Vec::new();
    for record in full_time {
        if priority_tier(&record.role).is_some() {
            priority.push(record);
        } else {
            regular.push(record);
        }
    }

    priority.sort_by_key(|record| {
        (
            priority_tier(&record.role).unwrap_or(u8::MAX),
            u8::from(record.display_name != TIER_TIE_BREAK_NAME),
        )
    });

    let mut cells = Vec::new();

    push_text(&mut cells, 0, 0, NAME_HEADER);
    for (index, date) in dates.iter().enumerate() {
        push_text(&mut cells, 0, date_col(index), date.clone());
    }

    let mut row = 1;
    let priority_start = row;
    for record in &priority {
        push_employee(&mut cells, row, record, dates);
        row += 1;
    }

    row += 1;
    let regular_start = row;
    for record in &regular {
        push_employee(&mut cells, row, record, dates);
        row += 1;
    }

    row += 2;
    let part_time_start = row;
    for record in part_time {
        push_employee(&mut cells, row, record, dates);
        row += 1;
    }

    let stats_start = row + 3;
    push_text(&mut cells, stats_start, 0, STATS_TITLE);
    push_stat_row(&mut cells, stats_start + 1, MORNING_LABEL, dates, stats, |stat| {
        CellValue::Count(stat.morning)
    });
    push_stat_row(&mut cells, stats_start + 2, MIDDAY_LABEL, dates, stats, |stat| {
        CellValue::Count(stat.midday)
    });
    push_stat_row(&mut cells, stats_start + 3, NIGHT_LABEL, dates, stats, |stat| {
        CellValue::Count(stat.night)
    });
    push_stat_row(&mut cells, stats_start + 4, HOURS_LABEL, dates, stats, |stat| {
        CellValue::Text(format!("{:.1}h", stat.total_hours))
    });

    RosterLayout {
        cells,
        sections: SectionBounds {
            priority_start,
            regular_start,
            part_time_start,
            stats_start,
        },
        date_count: dates.len(),
    }
}

/// Output column for a date position; column 0 holds the name.
fn date_col(index: usize) -> u16 {
    (index + 1) as u16
}

fn push_text(cells: &mut Vec<CellAssignment>, row: u32, col: u16, text: impl Into<String>) {
    cells.push(CellAssignment {
        row,
        col,
        value: CellValue::Text(text.into()),
    });
}

fn push_employee(cells: &mut Vec<CellAssignment>, row: u32, record: &EmployeeRecord, dates: &[String]) {
    push_text(cells, row, 0, record.display_name.clone());
    for (index, date) in dates.iter().enumerate() {
        push_text(cells, row, date_col(index), record.shift_display(date));
    }
}

/// One metric row: label, a value per date column, then the trailing total
/// column fetched through the same accessor keyed by [`TOTAL_KEY`].
fn push_stat_row(
    cells: &mut Vec<CellAssignment>,
    row: u32,
    label: &str,
    dates: &[String],
    stats: &DailyStats,
    value_for: impl Fn(&DayStat) -> CellValue,
) {
    push_text(cells, row, 0, label);
    for (index, date) in dates.iter().enumerate() {
        cells.push(CellAssignment {
            row,
            col: date_col(index),
            value: value_for(&stats.stat(date)),
        });
    }
    cells.push(CellAssignment {
        row,
        col: date_col(dates.len()),
        value: value_for(&stats.stat(TOTAL_KEY)),
    });
}
