//! Per-date staffing statistics.
//!
//! This module defines the [`DailyStats`] accumulator that tracks, for each
//! calendar date of the period, how many employees work the morning, midday
//! and night shifts plus the total worked hours across all employees.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::ShiftCode;

/// Sentinel key resolved by [`DailyStats::stat`] to the whole-period totals.
///
/// Not a real calendar date; the trailing "total" column of the statistics
/// block is fetched through the same accessor as the date columns using this
/// key.
pub const TOTAL_KEY: &str = "total";

/// Running staffing statistics for one calendar date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayStat {
    /// Employees on a morning shift (A, A-1400).
    pub morning: u32,
    /// Employees on a midday shift (C).
    pub midday: u32,
    /// Employees on a night shift (B, 1800-B).
    pub night: u32,
    /// Total worked hours across all employees.
    pub total_hours: Decimal,
}

/// The per-run statistics accumulator.
///
/// One instance is created per conversion and threaded through record
/// building, so concurrent conversions can never merge their statistics.
/// Entries are created lazily on first reference and only ever accumulate;
/// nothing is decremented or reset mid-run.
#[derive(Debug, Default)]
pub struct DailyStats {
    by_date: HashMap<String, DayStat>,
}

impl DailyStats {
    /// Creates an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one parsed cell against a date.
    ///
    /// Only the leading line of the code's display form participates in
    /// category counting (codes may carry a two-part display form), and at
    /// most one of the three counters is incremented. `total_hours`
    /// accumulates unconditionally, so 0-hour OFF/leave entries are no-op
    /// additions. The final totals are independent of recording order.
    pub fn record(&mut self, date: &str, code: &ShiftCode, hours: Decimal) {
        let stat = self.by_date.entry(date.to_string()).or_default();

        let display = code.to_string();
        let prefix = display.split('\n').next().unwrap_or_default();
        match prefix {
            "A" | "A-1400" => stat.morning += 1,
            "B" | "1800-B" => stat.night += 1,
            "C" => stat.midday += 1,
            _ => {}
        }

        stat.total_hours += hours;
    }

    /// Returns the statistics for a date label.
    ///
    /// Unrecorded dates resolve to the zero [`DayStat`]. The [`TOTAL_KEY`]
    /// sentinel resolves to the element-wise sum over all recorded dates.
    pub fn stat(&self, key: &str) -> DayStat {
        if key == TOTAL_KEY {
            return self.period_total();
        }
        self.by_date.get(key).cloned().unwrap_or_default()
    }

    /// Sums every recorded date into one whole-period stat.
    fn period_total(&self) -> DayStat {
        let mut total = DayStat::default();
        for stat in self.by_date.values() {
            total.morning += stat.morning;
            total.midday += stat.midday;
            total.night += stat.night;
            total.total_hours += stat.total_hours;
        }
        total
    }
}
