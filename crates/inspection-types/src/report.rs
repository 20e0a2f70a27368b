use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::catalog;

/// Rating outcome for one checklist row. `Pending` is the synthesized
/// default and the only value that blocks finalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Pending,
    Good,
    NotGood,
    Perfect,
}

impl Status {
    /// Wire/display name, matching the stored string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "PENDING",
            Status::Good => "GOOD",
            Status::NotGood => "NOT_GOOD",
            Status::Perfect => "PERFECT",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the checklist. Items are stored verbatim in a JSON column,
/// so the field names keep their original camelCase wire form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionItem {
    /// Stable within a report: `{date}-{ordinal}`.
    pub id: String,
    pub category: String,
    pub status: Status,
    /// Meaningful only when status is `NotGood`.
    #[serde(default)]
    pub remark: String,
    /// Required for finalization regardless of status.
    #[serde(default)]
    pub counter_incharge: String,
    /// Specific dish prepared at this counter, where the category takes one.
    #[serde(default)]
    pub sub_item: Option<String>,
    /// Denormalized from the report at finalize time.
    #[serde(default)]
    pub inspector_name: String,
    /// Creation time in epoch milliseconds, informational only.
    #[serde(default)]
    pub timestamp: i64,
}

/// The aggregate persisted per calendar date. `date` (YYYY-MM-DD) is the
/// primary key; saving the same date twice overwrites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    pub date: String,
    pub items: Vec<InspectionItem>,
    #[serde(default)]
    pub inspector_name: String,
    #[serde(default)]
    pub actions_taken: String,
    #[serde(default)]
    pub completion_time: String,
    pub finalized: bool,
}

impl DailyReport {
    /// Synthesize a blank report for a date with no store entry: one
    /// `Pending` item per catalog category, in catalog order.
    pub fn blank(date: &str, default_inspector: &str) -> Self {
        let now = Utc::now().timestamp_millis();
        let items = catalog::CATEGORIES
            .iter()
            .enumerate()
            .map(|(index, spec)| InspectionItem {
                id: format!("{}-{}", date, index),
                category: spec.name.to_string(),
                status: Status::Pending,
                remark: String::new(),
                counter_incharge: String::new(),
                sub_item: None,
                inspector_name: default_inspector.to_string(),
                timestamp: now,
            })
            .collect();

        Self {
            date: date.to_string(),
            items,
            inspector_name: default_inspector.to_string(),
            actions_taken: String::new(),
            completion_time: String::new(),
            finalized: false,
        }
    }

    pub fn count_with_status(&self, status: Status) -> usize {
        self.items.iter().filter(|i| i.status == status).count()
    }

    /// True when at least one item was rated `NotGood`.
    pub fn has_issues(&self) -> bool {
        self.items.iter().any(|i| i.status == Status::NotGood)
    }
}
