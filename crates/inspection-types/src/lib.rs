pub mod catalog;
pub mod report;
pub mod stats;

pub use catalog::{CategorySpec, CATEGORIES, CORRECTIVE_ACTIONS};
pub use report::{DailyReport, InspectionItem, Status};
pub use stats::CategoryStat;
