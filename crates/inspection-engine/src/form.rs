//! Editable state for one day's inspection checklist.

use chrono::{DateTime, Local};
use inspection_types::catalog;
use inspection_types::{DailyReport, InspectionItem, Status};

use crate::actions;
use crate::validate::ValidationError;

/// Holds a report while it is being filled in. All mutation happens through
/// discrete calls on a single logical thread; persistence is the caller's
/// job and only ever happens with the finalized output of [`Self::finalize`].
#[derive(Debug, Clone)]
pub struct ReportForm {
    date: String,
    items: Vec<InspectionItem>,
    inspector_name: String,
    selected_actions: Vec<String>,
    custom_action: String,
    saving: bool,
}

impl ReportForm {
    /// Start a fresh form for a date with no stored report.
    pub fn blank(date: &str, default_inspector: &str) -> Self {
        Self::load(&DailyReport::blank(date, default_inspector))
    }

    /// Populate the form from an existing report, re-deriving the
    /// checkbox/custom-text split from the stored composite string.
    pub fn load(report: &DailyReport) -> Self {
        let (selected_actions, custom_action) = actions::decompose(&report.actions_taken);
        Self {
            date: report.date.clone(),
            items: report.items.clone(),
            inspector_name: report.inspector_name.clone(),
            selected_actions,
            custom_action,
            saving: false,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn items(&self) -> &[InspectionItem] {
        &self.items
    }

    pub fn inspector_name(&self) -> &str {
        &self.inspector_name
    }

    pub fn selected_actions(&self) -> &[String] {
        &self.selected_actions
    }

    pub fn custom_action(&self) -> &str {
        &self.custom_action
    }

    pub fn set_inspector_name(&mut self, name: &str) {
        self.inspector_name = name.to_string();
    }

    /// Rate a category. Selecting the current rating again toggles the item
    /// back to `Pending`; any move away from `NotGood` clears the remark.
    pub fn set_status(&mut self, index: usize, status: Status) {
        let item = &mut self.items[index];
        let new_status = if item.status == status {
            Status::Pending
        } else {
            status
        };
        item.status = new_status;
        if new_status != Status::NotGood {
            item.remark.clear();
        }
    }

    pub fn set_remark(&mut self, index: usize, remark: &str) {
        self.items[index].remark = remark.to_string();
    }

    pub fn set_counter_incharge(&mut self, index: usize, name: &str) {
        self.items[index].counter_incharge = name.to_string();
    }

    pub fn set_sub_item(&mut self, index: usize, sub_item: Option<&str>) {
        self.items[index].sub_item = sub_item.map(str::to_string);
    }

    /// Toggle a predefined corrective-action phrase on or off.
    pub fn toggle_action(&mut self, phrase: &str) {
        if let Some(pos) = self.selected_actions.iter().position(|a| a == phrase) {
            self.selected_actions.remove(pos);
        } else {
            self.selected_actions.push(phrase.to_string());
        }
    }

    pub fn set_custom_action(&mut self, text: &str) {
        self.custom_action = text.to_string();
    }

    /// The composite actions string as it would be persisted.
    pub fn composed_actions(&self) -> String {
        actions::compose(&self.selected_actions, &self.custom_action)
    }

    /// True when at least one item is currently rated `NotGood`.
    pub fn has_issues(&self) -> bool {
        self.items.iter().any(|i| i.status == Status::NotGood)
    }

    /// Mark a save as in flight. Returns false if one already is, in which
    /// case the caller must not submit again: upsert-by-date would silently
    /// race two saves for the same date with last-write-wins.
    pub fn begin_save(&mut self) -> bool {
        if self.saving {
            return false;
        }
        self.saving = true;
        true
    }

    /// Clear the in-flight flag. Must run on every save exit path,
    /// success or failure.
    pub fn end_save(&mut self) {
        self.saving = false;
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// The ordered validation sequence; the first failing check wins.
    /// Reports must carry exactly one item per catalog category, in catalog
    /// order; anything else is client drift and never reaches the store.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mirrors_catalog = self.items.len() == catalog::CATEGORIES.len()
            && self
                .items
                .iter()
                .zip(catalog::CATEGORIES)
                .all(|(item, spec)| item.category == spec.name);
        if !mirrors_catalog {
            return Err(ValidationError::MalformedChecklist);
        }

        if self.inspector_name.trim().is_empty() {
            return Err(ValidationError::MissingInspectorName);
        }

        for item in &self.items {
            if item.status == Status::Pending {
                return Err(ValidationError::UnratedCategory(item.category.clone()));
            }
            if item.counter_incharge.trim().is_empty() {
                return Err(ValidationError::MissingCounterIncharge(
                    item.category.clone(),
                ));
            }
            if let Some(spec) = catalog::spec_for(&item.category) {
                if spec.needs_sub_item(item.sub_item.as_deref()) {
                    return Err(ValidationError::MissingSubItem(item.category.clone()));
                }
            }
        }

        if self.has_issues() && self.composed_actions().trim().is_empty() {
            return Err(ValidationError::MissingCorrectiveActions);
        }

        Ok(())
    }

    /// Validate and derive the finalized report: completion time stamped,
    /// inspector name copied onto every item, actions composed,
    /// `finalized` set. Nothing is persisted here.
    pub fn finalize(&self, completed_at: DateTime<Local>) -> Result<DailyReport, ValidationError> {
        self.validate()?;

        let items = self
            .items
            .iter()
            .cloned()
            .map(|mut item| {
                item.inspector_name = self.inspector_name.clone();
                item
            })
            .collect();

        Ok(DailyReport {
            date: self.date.clone(),
            items,
            inspector_name: self.inspector_name.clone(),
            actions_taken: self.composed_actions(),
            completion_time: completed_at.format("%I:%M %p").to_string(),
            finalized: true,
        })
    }
}
