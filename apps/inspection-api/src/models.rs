//! Request and response models for the Jalpan Inspection API

use inspection_types::{DailyReport, InspectionItem, CATEGORIES, CORRECTIVE_ACTIONS};
use serde::{Deserialize, Serialize};

/// A report as handed to clients, with a flag telling whether it was
/// loaded from storage or freshly synthesized for an uninspected date.
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub report: DailyReport,
    pub existing: bool,
}

/// Draft submitted for finalization. Items carry the per-category edits;
/// corrective actions arrive decomposed so the server owns composition.
#[derive(Debug, Deserialize)]
pub struct FinalizeRequest {
    pub date: String,
    pub inspector_name: String,
    pub items: Vec<InspectionItem>,
    #[serde(default)]
    pub selected_actions: Vec<String>,
    #[serde(default)]
    pub custom_action: String,
}

#[derive(Debug, Serialize)]
pub struct ExistsResponse {
    pub date: String,
    pub exists: bool,
}

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// One checklist category as seen by form clients. Field names follow the
/// camelCase item wire shape.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub name: &'static str,
    pub requires_sub_item: bool,
    pub sub_item_choices: Option<&'static [&'static str]>,
    pub sub_item_waiver: Option<&'static str>,
}

/// The fixed checklist configuration: clients render forms from this
/// instead of hardcoding categories and phrases.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub categories: Vec<CategoryInfo>,
    pub corrective_actions: &'static [&'static str],
}

impl CatalogResponse {
    pub fn current() -> Self {
        Self {
            categories: CATEGORIES
                .iter()
                .map(|spec| CategoryInfo {
                    name: spec.name,
                    requires_sub_item: spec.requires_sub_item,
                    sub_item_choices: spec.sub_item_choices,
                    sub_item_waiver: spec.sub_item_waiver,
                })
                .collect(),
            corrective_actions: CORRECTIVE_ACTIONS,
        }
    }
}

/// Calendar dates are plain `YYYY-MM-DD` strings everywhere in the API.
pub fn is_valid_date(date: &str) -> bool {
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accepts_calendar_dates() {
        assert!(is_valid_date("2025-01-31"));
        assert!(is_valid_date("2024-02-29"));
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(!is_valid_date("2025-13-01"));
        assert!(!is_valid_date("2025-02-30"));
        assert!(!is_valid_date("31-01-2025"));
        assert!(!is_valid_date("today"));
        assert!(!is_valid_date(""));
    }

    #[test]
    fn catalog_payload_mirrors_the_fixed_configuration() {
        let payload = serde_json::to_value(CatalogResponse::current()).unwrap();

        let categories = payload["categories"].as_array().unwrap();
        assert_eq!(categories.len(), CATEGORIES.len());
        assert_eq!(categories[0]["name"], "Breakfast");
        assert_eq!(categories[1]["subItemWaiver"], "Dal");
        assert_eq!(categories[2]["subItemChoices"][0], "Kadhi Chawal");
        assert_eq!(categories[4]["requiresSubItem"], true);

        assert_eq!(
            payload["correctiveActions"].as_array().unwrap().len(),
            CORRECTIVE_ACTIONS.len()
        );
    }

    #[test]
    fn finalize_request_defaults_optional_fields() {
        let req: FinalizeRequest = serde_json::from_str(
            r#"{"date":"2025-06-01","inspector_name":"Ravi","items":[]}"#,
        )
        .unwrap();
        assert_eq!(req.selected_actions, Vec::<String>::new());
        assert_eq!(req.custom_action, "");
    }
}
