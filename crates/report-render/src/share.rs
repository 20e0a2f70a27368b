//! Plain-text share digest for messaging apps.

use inspection_types::{DailyReport, Status};

use crate::pdf::display_date;

fn status_glyph(status: Status) -> &'static str {
    match status {
        Status::Perfect => "\u{1F31F}",  // 🌟
        Status::Good => "\u{2705}",      // ✅
        Status::NotGood => "\u{274C}",   // ❌
        Status::Pending => "\u{2753}",   // ❓
    }
}

/// Line-oriented digest of a finalized report: header, one block per
/// category, optional actions-taken section. The caller hands the string
/// to an external share target; nothing here has side effects.
pub fn share_text(report: &DailyReport) -> String {
    let mut message = String::new();
    message.push_str("\u{1F680} *JALPAN SERVICES QUALITY REPORT*\n");
    message.push_str(&format!("\u{1F4C5} *Date:* {}\n", display_date(&report.date)));
    message.push_str(&format!(
        "\u{1F552} *Time:* {}\n",
        if report.completion_time.is_empty() {
            "Recorded"
        } else {
            report.completion_time.as_str()
        }
    ));
    message.push_str(&format!(
        "\u{1F468}\u{200D}\u{1F373} *Sewadar:* {}\n\n",
        report.inspector_name
    ));

    for item in &report.items {
        message.push_str(&format!(
            "{} *{}*{}\n",
            status_glyph(item.status),
            item.category,
            item.sub_item
                .as_deref()
                .map(|s| format!(" ({})", s))
                .unwrap_or_default()
        ));
        message.push_str(&format!(
            "   \u{1F464} _Incharge: {}_\n",
            if item.counter_incharge.is_empty() {
                "N/A"
            } else {
                item.counter_incharge.as_str()
            }
        ));
        if item.status == Status::NotGood && !item.remark.is_empty() {
            message.push_str(&format!("   \u{26A0}\u{FE0F} _Issue: {}_\n", item.remark));
        }
    }

    if !report.actions_taken.is_empty() {
        message.push_str(&format!(
            "\n\u{1F6E0}\u{FE0F} *ACTIONS TAKEN:*\n{}\n",
            report.actions_taken
        ));
    }

    message.push_str("\n_Digital inspection generated via Jalpan App_");
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> DailyReport {
        let mut report = DailyReport::blank("2025-03-01", "Ravi");
        for item in &mut report.items {
            item.status = Status::Good;
            item.counter_incharge = "Mohan".to_string();
        }
        report.items[4].status = Status::NotGood;
        report.items[4].remark = "Too sweet".to_string();
        report.items[4].sub_item = Some("Kheer".to_string());
        report.actions_taken = "Replaced with a fresh batch".to_string();
        report.completion_time = "11:20 AM".to_string();
        report.finalized = true;
        report
    }

    #[test]
    fn digest_carries_header_fields() {
        let text = share_text(&sample_report());
        assert!(text.contains("*Date:* 01-03-2025"));
        assert!(text.contains("*Time:* 11:20 AM"));
        assert!(text.contains("*Sewadar:* Ravi"));
    }

    #[test]
    fn one_line_per_category_with_glyph_and_sub_item() {
        let report = sample_report();
        let text = share_text(&report);
        for item in &report.items {
            assert!(text.contains(&format!("*{}*", item.category)));
        }
        assert!(text.contains("\u{274C} *Dessert* (Kheer)"));
    }

    #[test]
    fn issue_line_only_for_not_good_remarks() {
        let text = share_text(&sample_report());
        assert_eq!(text.matches("_Issue:").count(), 1);
        assert!(text.contains("_Issue: Too sweet_"));
    }

    #[test]
    fn actions_block_is_optional() {
        let mut report = sample_report();
        assert!(share_text(&report).contains("*ACTIONS TAKEN:*"));

        report.actions_taken.clear();
        assert!(!share_text(&report).contains("*ACTIONS TAKEN:*"));
    }

    #[test]
    fn missing_completion_time_falls_back() {
        let mut report = sample_report();
        report.completion_time.clear();
        assert!(share_text(&report).contains("*Time:* Recorded"));
    }
}
