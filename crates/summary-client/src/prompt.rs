//! Prompt assembly for the report summary.

use inspection_types::DailyReport;

/// Flatten a report into the plain-text block the model reviews.
pub fn format_report(report: &DailyReport) -> String {
    let mut text = format!("Date: {}\n", report.date);
    text.push_str(&format!(
        "Sewadar on Duty: {}\n\n",
        if report.inspector_name.is_empty() {
            "Unknown"
        } else {
            report.inspector_name.as_str()
        }
    ));

    for item in &report.items {
        let mut line = format!("- {}", item.category);
        if let Some(sub_item) = &item.sub_item {
            line.push_str(&format!(" ({})", sub_item));
        }
        line.push_str(&format!(
            ": {} ({})",
            item.status,
            if item.remark.is_empty() {
                "No remark"
            } else {
                item.remark.as_str()
            }
        ));
        text.push_str(&line);
        text.push('\n');
    }

    if !report.actions_taken.is_empty() {
        text.push_str(&format!("\nActions Taken: {}\n", report.actions_taken));
    }

    text
}

/// Full instruction prompt sent to the text-completion endpoint.
pub fn build_prompt(report: &DailyReport) -> String {
    format!(
        "You are the Quality Control Manager for the Jalpan Services canteen.\n\
         Review the following daily food quality check report.\n\n\
         The rating system is:\n\
         - PERFECT (Exceptional quality)\n\
         - GOOD (Standard acceptable quality)\n\
         - NOT_GOOD (Quality failure, requires action)\n\n\
         Generate a concise, professional summary for the kitchen staff.\n\
         1. Mention what specific items were cooked (e.g. which subzi, which snack) if listed.\n\
         2. Highlight any items marked NOT_GOOD.\n\
         3. Mention items marked PERFECT as \"Highlights\" to encourage the team.\n\
         4. Acknowledge the \"Actions Taken\" if any were recorded.\n\
         5. Give a 1-sentence action item if there are pending issues.\n\n\
         Keep it brief (max 120 words).\n\n\
         REPORT DATA:\n{}",
        format_report(report)
    )
}
