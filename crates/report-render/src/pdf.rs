//! PDF rendering: template inputs, compilation, filenames.

use serde_json::json;
use typst::diag::SourceDiagnostic;

use inspection_types::{CategoryStat, DailyReport, Status};

use crate::error::RenderError;
use crate::templates;
use crate::world::ReportWorld;

/// Format a stored `YYYY-MM-DD` date for display as `DD-MM-YYYY`.
pub fn display_date(date: &str) -> String {
    date.rsplit('-').collect::<Vec<_>>().join("-")
}

/// Download filename for a single report.
pub fn report_filename(date: &str) -> String {
    format!("Jalpan_Quality_Report_{}.pdf", display_date(date))
}

/// Download filename for a range summary.
pub fn summary_filename(start: &str, end: &str) -> String {
    format!("Jalpan_Summary_{}_to_{}.pdf", start, end)
}

/// Render a finalized report as a printable PDF.
pub fn render_report_pdf(report: &DailyReport) -> Result<Vec<u8>, RenderError> {
    let data = serde_json::to_string(&report_inputs(report))?;
    compile_pdf(templates::REPORT_TEMPLATE, data)
}

/// Render range analytics as a summary PDF.
pub fn render_summary_pdf(
    stats: &[CategoryStat],
    start: &str,
    end: &str,
) -> Result<Vec<u8>, RenderError> {
    let data = serde_json::to_string(&summary_inputs(stats, start, end))?;
    compile_pdf(templates::SUMMARY_TEMPLATE, data)
}

/// Async wrapper: compilation runs on a blocking thread under a timeout.
#[cfg(feature = "server")]
pub async fn render_report_pdf_async(
    report: DailyReport,
    timeout_ms: u64,
) -> Result<Vec<u8>, RenderError> {
    run_blocking(move || render_report_pdf(&report), timeout_ms).await
}

#[cfg(feature = "server")]
pub async fn render_summary_pdf_async(
    stats: Vec<CategoryStat>,
    start: String,
    end: String,
    timeout_ms: u64,
) -> Result<Vec<u8>, RenderError> {
    run_blocking(move || render_summary_pdf(&stats, &start, &end), timeout_ms).await
}

#[cfg(feature = "server")]
async fn run_blocking<F>(render: F, timeout_ms: u64) -> Result<Vec<u8>, RenderError>
where
    F: FnOnce() -> Result<Vec<u8>, RenderError> + Send + 'static,
{
    let result = tokio::time::timeout(
        std::time::Duration::from_millis(timeout_ms),
        tokio::task::spawn_blocking(render),
    )
    .await;

    match result {
        Ok(Ok(rendered)) => rendered,
        Ok(Err(join_error)) => Err(RenderError::Internal(join_error.to_string())),
        Err(_elapsed) => Err(RenderError::Timeout(timeout_ms)),
    }
}

/// Presentation-ready inputs for the report template. Placeholder text for
/// empty fields is decided here so the template stays layout-only.
fn report_inputs(report: &DailyReport) -> serde_json::Value {
    let items: Vec<serde_json::Value> = report
        .items
        .iter()
        .map(|item| {
            json!({
                "category": item.category,
                "subItem": item.sub_item.as_deref().unwrap_or("N/A"),
                "incharge": if item.counter_incharge.is_empty() {
                    "N/A"
                } else {
                    item.counter_incharge.as_str()
                },
                "status": item.status.as_str(),
                "remark": if item.remark.is_empty() {
                    "Satisfactory"
                } else {
                    item.remark.as_str()
                },
            })
        })
        .collect();

    // Pre-split so the template can emit explicit line breaks.
    let actions: Vec<&str> = if report.actions_taken.trim().is_empty() {
        vec![
            "No major incidents or corrective actions reported during this session. \
             Standard procedures followed.",
        ]
    } else {
        report.actions_taken.lines().collect()
    };

    json!({
        "date": display_date(&report.date),
        "inspector": report.inspector_name,
        "completionTime": if report.completion_time.is_empty() {
            "--:--"
        } else {
            report.completion_time.as_str()
        },
        "perfectCount": report.count_with_status(Status::Perfect),
        "goodCount": report.count_with_status(Status::Good),
        "notGoodCount": report.count_with_status(Status::NotGood),
        "items": items,
        "actions": actions,
    })
}

fn summary_inputs(stats: &[CategoryStat], start: &str, end: &str) -> serde_json::Value {
    let rows: Vec<serde_json::Value> = stats
        .iter()
        .map(|stat| {
            let (perfect_share, good_share, not_good_share) = stat.proportions();
            json!({
                "category": stat.category,
                "perfect": stat.perfect_count,
                "good": stat.good_count,
                "notGood": stat.not_good_count,
                "total": stat.total_checked,
                "perfectShare": perfect_share,
                "goodShare": good_share,
                "notGoodShare": not_good_share,
                // Grey remainder of the bar; a full track when nothing was checked.
                "restShare": 1.0 - perfect_share - good_share - not_good_share,
            })
        })
        .collect();

    json!({
        "start": display_date(start),
        "end": display_date(end),
        "stats": rows,
    })
}

fn compile_pdf(template: &str, data_json: String) -> Result<Vec<u8>, RenderError> {
    let world = ReportWorld::new(template, data_json);
    let compiled = typst::compile(&world);

    for warning in &compiled.warnings {
        tracing::warn!("Typst warning: {}", warning.message);
    }

    let document = compiled
        .output
        .map_err(|diagnostics| RenderError::Compile(join_messages(&diagnostics)))?;

    let pdf = typst_pdf::pdf(&document, &typst_pdf::PdfOptions::default())
        .map_err(|diagnostics| RenderError::Compile(join_messages(&diagnostics)))?;

    // One-shot compiles: drop the memoization cache instead of letting it
    // grow across requests.
    comemo::evict(0);

    Ok(pdf)
}

fn join_messages(diagnostics: &[SourceDiagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| d.message.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
