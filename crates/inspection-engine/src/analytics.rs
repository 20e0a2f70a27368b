//! Per-category tally of rating outcomes over a date range.

use inspection_types::catalog::CATEGORIES;
use inspection_types::{CategoryStat, DailyReport};

/// Aggregate finalized reports within `[start, end]` (inclusive, `YYYY-MM-DD`
/// compared lexically) into one [`CategoryStat`] per catalog category, in
/// catalog order. Items with unknown categories and `Pending` ratings are
/// ignored; non-finalized reports contribute nothing.
pub fn aggregate_range(reports: &[DailyReport], start: &str, end: &str) -> Vec<CategoryStat> {
    let mut stats: Vec<CategoryStat> = CATEGORIES
        .iter()
        .map(|spec| CategoryStat::new(spec.name))
        .collect();

    let in_range = reports
        .iter()
        .filter(|r| r.finalized && r.date.as_str() >= start && r.date.as_str() <= end);

    for report in in_range {
        for item in &report.items {
            if let Some(pos) = CATEGORIES.iter().position(|s| s.name == item.category) {
                stats[pos].record(item.status);
            }
        }
    }

    stats
}
