use serde::{Deserialize, Serialize};

use crate::report::Status;

/// Per-category tally of rating outcomes over a date range. Raw counts
/// only; proportions are a presentation concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStat {
    pub category: String,
    pub perfect_count: u32,
    pub good_count: u32,
    pub not_good_count: u32,
    pub total_checked: u32,
}

impl CategoryStat {
    pub fn new(category: &str) -> Self {
        Self {
            category: category.to_string(),
            perfect_count: 0,
            good_count: 0,
            not_good_count: 0,
            total_checked: 0,
        }
    }

    /// Count one rated item. `Pending` items are not counted in any tally.
    pub fn record(&mut self, status: Status) {
        match status {
            Status::Perfect => self.perfect_count += 1,
            Status::Good => self.good_count += 1,
            Status::NotGood => self.not_good_count += 1,
            Status::Pending => return,
        }
        self.total_checked += 1;
    }

    /// Distribution shares (perfect, good, not good) summing to ~1.0.
    /// A category nobody checked yields all zeros rather than NaN.
    pub fn proportions(&self) -> (f64, f64, f64) {
        if self.total_checked == 0 {
            return (0.0, 0.0, 0.0);
        }
        let total = f64::from(self.total_checked);
        (
            f64::from(self.perfect_count) / total,
            f64::from(self.good_count) / total,
            f64::from(self.not_good_count) / total,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_is_never_tallied() {
        let mut stat = CategoryStat::new("Breakfast");
        stat.record(Status::Pending);
        assert_eq!(stat.total_checked, 0);
    }

    #[test]
    fn record_increments_matching_counter_and_total() {
        let mut stat = CategoryStat::new("Breakfast");
        stat.record(Status::Perfect);
        stat.record(Status::Good);
        stat.record(Status::Good);
        stat.record(Status::NotGood);

        assert_eq!(stat.perfect_count, 1);
        assert_eq!(stat.good_count, 2);
        assert_eq!(stat.not_good_count, 1);
        assert_eq!(stat.total_checked, 4);
    }

    #[test]
    fn empty_category_yields_zero_proportions_not_nan() {
        let stat = CategoryStat::new("Dessert");
        let (perfect, good, not_good) = stat.proportions();
        assert_eq!((perfect, good, not_good), (0.0, 0.0, 0.0));
    }

    #[test]
    fn proportions_sum_to_one_when_checked() {
        let mut stat = CategoryStat::new("Dessert");
        stat.record(Status::Perfect);
        stat.record(Status::NotGood);
        let (perfect, good, not_good) = stat.proportions();
        assert!((perfect + good + not_good - 1.0).abs() < 1e-9);
        assert_eq!(perfect, 0.5);
    }
}
