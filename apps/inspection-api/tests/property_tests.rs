//! Property-based tests for inspection-api
//!
//! Exercises the date format the API accepts and the engine invariants
//! the handlers rely on, using proptest.

use inspection_engine::{actions, aggregate_range};
use inspection_types::{DailyReport, Status, CATEGORIES, CORRECTIVE_ACTIONS};
use proptest::prelude::*;

// ============================================================
// Date Validation
// ============================================================

/// Calendar dates the API accepts (day capped at 28 so every month works)
fn valid_date() -> impl Strategy<Value = String> {
    (2000u32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| format!("{:04}-{:02}-{:02}", y, m, d))
}

/// Strings that must never pass date validation
fn invalid_date() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{1,10}",                       // Words
        "[0-9]{1,7}",                        // Bare digits
        "[0-9]{2}-[0-9]{2}-[0-9]{4}",        // Day-first order
        Just("2025-13-01".to_string()),      // Month out of range
        Just("2025-02-30".to_string()),      // Day out of range
        Just("".to_string()),                // Empty
    ]
}

/// Free-form corrective text that does not collide with a stock phrase
fn custom_action() -> impl Strategy<Value = String> {
    "[A-Za-z ]{0,40}".prop_filter("must not embed a stock phrase", |s| {
        !CORRECTIVE_ACTIONS.iter().any(|phrase| s.contains(phrase))
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================================
    // Date Tests
    // ============================================================

    #[test]
    fn valid_dates_parse(date in valid_date()) {
        prop_assert!(chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_ok());
        prop_assert_eq!(date.len(), 10);
    }

    #[test]
    fn invalid_dates_are_rejected(date in invalid_date()) {
        prop_assert!(chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err());
    }

    // ============================================================
    // Corrective Actions Tests
    // ============================================================

    #[test]
    fn decompose_recovers_selected_phrases(
        picks in prop::collection::vec(0..CORRECTIVE_ACTIONS.len(), 0..6),
        custom in custom_action(),
    ) {
        let selected: Vec<String> = picks
            .iter()
            .map(|&i| CORRECTIVE_ACTIONS[i].to_string())
            .collect();

        let composed = actions::compose(&selected, &custom);
        let (recovered, custom_out) = actions::decompose(&composed);

        // Recovered selection is the picked set, deduplicated, in catalog order
        let expected: Vec<String> = CORRECTIVE_ACTIONS
            .iter()
            .filter(|phrase| selected.iter().any(|s| s == *phrase))
            .map(|phrase| phrase.to_string())
            .collect();
        prop_assert_eq!(recovered, expected);
        prop_assert_eq!(custom_out, custom.trim());
    }

    // ============================================================
    // Report Synthesis Tests
    // ============================================================

    #[test]
    fn blank_reports_cover_every_category(date in valid_date()) {
        let report = DailyReport::blank(&date, "");

        prop_assert_eq!(report.items.len(), CATEGORIES.len());
        prop_assert!(!report.finalized);
        for (index, item) in report.items.iter().enumerate() {
            prop_assert_eq!(item.status, Status::Pending);
            prop_assert_eq!(&item.id, &format!("{}-{}", date, index));
            prop_assert_eq!(&item.category, CATEGORIES[index].name);
        }
    }

    // ============================================================
    // Analytics Tests
    // ============================================================

    #[test]
    fn aggregation_never_exceeds_report_count(
        dates in prop::collection::hash_set(valid_date(), 0..8),
    ) {
        let reports: Vec<DailyReport> = dates
            .iter()
            .map(|date| {
                let mut report = DailyReport::blank(date, "Ravi");
                for item in &mut report.items {
                    item.status = Status::Good;
                }
                report.finalized = true;
                report
            })
            .collect();

        let stats = aggregate_range(&reports, "2000-01-01", "2099-12-28");
        for stat in &stats {
            prop_assert!(stat.total_checked as usize <= reports.len());
            prop_assert_eq!(stat.good_count, stat.total_checked);
        }
    }
}
