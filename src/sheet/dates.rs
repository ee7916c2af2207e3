//! Date-label parsing.
//!
//! The source header carries raw date-range cells like "1 Mon"; the rest of
//! the pipeline keys everything on canonical "day\nweekday" labels. A pure
//! text transform, no calendar math.

/// Parses raw header cells into canonical "day\nweekday" labels.
///
/// Each cell is split on whitespace; cells with fewer than two fields
/// (including empty cells) are skipped.
pub fn parse_date_labels(raw: &[String]) -> Vec<String> {
    raw.iter()
        .filter_map(|cell| {
            let mut fields = cell.split_whitespace();
            match (fields.next(), fields.next()) {
                (Some(day), Some(weekday)) => Some(format!("{day}\n{weekday}")),
                _ => None,
            }
        })
        .collect()
}
