//! Employee record building.
//!
//! Maps raw roster rows into [`EmployeeRecord`]s, applying the row-skip
//! policy and feeding every parsed cell into the per-run statistics
//! accumulator.

use std::collections::HashMap;

use crate::config::NicknameTable;
use crate::conversion::cell::parse_cell;
use crate::models::{DailyStats, EmployeeRecord};

/// First schedule column within a source row (0 = name, 1 = role).
pub const SCHEDULE_COL_START: usize = 2;

/// Builds employee records from the data rows of the source roster.
///
/// Returns the full-time and part-time record sets in row-encounter order.
/// Rows are skipped silently (policy, not error) when they have fewer than
/// `SCHEDULE_COL_START + dates.len()` cells, an empty name cell, or a name
/// with no nickname entry. Building a record feeds every parsed cell into
/// `stats`; the accumulator is an explicit parameter so each conversion run
/// owns its own statistics.
pub fn build_records(
    rows: &[Vec<String>],
    dates: &[String],
    nicknames: &NicknameTable,
    stats: &mut DailyStats,
) -> (Vec<EmployeeRecord>, Vec<EmployeeRecord>) {
    let mut full_time = Vec::new();
    let mut part_time = Vec::new();
    let min_cells = SCHEDULE_COL_START + dates.len();

    for row in rows {
        if row.len() < min_cells || row[0].is_empty() {
            continue;
        }
        let Some(display_name) = nicknames.display_name(&row[0]) else {
            continue;
        };

        let record = build_record(row, dates, display_name, stats);
        if record.is_part_time {
            part_time.push(record);
        } else {
            full_time.push(record);
        }
    }

    (full_time, part_time)
}

/// Builds one record from a row already past the skip checks.
fn build_record(
    row: &[String],
    dates: &[String],
    display_name: &str,
    stats: &mut DailyStats,
) -> EmployeeRecord {
    let role = row[1].trim().to_string();
    let is_part_time = role.to_uppercase().contains("PART TIME");

    let mut schedule_by_date = HashMap::new();
    let mut hours_by_date = HashMap::new();

    for (index, date) in dates.iter().enumerate() {
        let parsed = parse_cell(&row[SCHEDULE_COL_START + index]);
        stats.record(date, &parsed.code, parsed.hours);
        schedule_by_date.insert(date.clone(), parsed.code);
        hours_by_date.insert(date.clone(), parsed.hours);
    }

    EmployeeRecord {
        name: row[0].trim().to_string(),
        display_name: display_name.to_string(),
        role,
        is_part_time,
        schedule_by_date,
        hours_by_date,
    }
}
