//! HTTP handlers for the Jalpan Inspection API

use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Local;
use inspection_engine::{aggregate_range, ReportForm};
use inspection_types::DailyReport;
use report_render::{
    render_report_pdf_async, render_summary_pdf_async, report_filename, share_text,
    summary_filename,
};
use std::sync::Arc;
use tracing::info;

use crate::error::ApiError;
use crate::models::*;
use crate::state::AppState;

/// Typst compilation is CPU-bound; a stuck render should not hold the
/// request open forever.
const RENDER_TIMEOUT_MS: u64 = 15_000;

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// The fixed checklist configuration for form clients.
pub async fn get_catalog() -> Json<CatalogResponse> {
    Json(CatalogResponse::current())
}

/// Load the report for a date, synthesizing a blank one when the date
/// has never been inspected.
pub async fn get_report(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> Result<Json<ReportResponse>, ApiError> {
    require_date(&date)?;

    match state.store.get(&date).await? {
        Some(report) => Ok(Json(ReportResponse {
            report,
            existing: true,
        })),
        None => Ok(Json(ReportResponse {
            report: DailyReport::blank(&date, &state.default_inspector),
            existing: false,
        })),
    }
}

/// Validate a submitted draft and persist it as the finalized report for
/// its date. Success is only reported after the store write lands.
pub async fn finalize_report(
    State(state): State<Arc<AppState>>,
    Json(req): Json<FinalizeRequest>,
) -> Result<Json<DailyReport>, ApiError> {
    require_date(&req.date)?;

    let draft = DailyReport {
        date: req.date,
        items: req.items,
        inspector_name: req.inspector_name,
        actions_taken: String::new(),
        completion_time: String::new(),
        finalized: false,
    };

    let mut form = ReportForm::load(&draft);
    for phrase in &req.selected_actions {
        form.toggle_action(phrase);
    }
    form.set_custom_action(&req.custom_action);

    let report = form.finalize(Local::now())?;
    state.store.upsert(&report).await?;

    info!("Finalized report for {}", report.date);
    Ok(Json(report))
}

/// All finalized reports, newest first. Storage trouble degrades to an
/// empty list rather than an error.
pub async fn list_reports(State(state): State<Arc<AppState>>) -> Json<Vec<DailyReport>> {
    Json(state.store.list_finalized().await)
}

pub async fn report_exists(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> Result<Json<ExistsResponse>, ApiError> {
    require_date(&date)?;

    let exists = state.store.exists_finalized(&date).await;
    Ok(Json(ExistsResponse { date, exists }))
}

/// Per-category rating tallies over an inclusive date range.
pub async fn range_analytics(
    State(state): State<Arc<AppState>>,
    Query(range): Query<RangeQuery>,
) -> Result<Json<Vec<inspection_types::CategoryStat>>, ApiError> {
    require_range(&range)?;

    let reports = state.store.list_finalized().await;
    Ok(Json(aggregate_range(&reports, &range.start, &range.end)))
}

/// Render the finalized report for a date as a downloadable PDF.
pub async fn report_pdf(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> Result<Response, ApiError> {
    let report = load_finalized(&state, &date).await?;

    let pdf = render_report_pdf_async(report, RENDER_TIMEOUT_MS).await?;
    info!("Rendered report PDF for {} ({} bytes)", date, pdf.len());

    Ok(pdf_response(report_filename(&date), pdf))
}

/// Plain-text digest of a finalized report, ready for a messaging app.
pub async fn share_report_text(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> Result<String, ApiError> {
    let report = load_finalized(&state, &date).await?;
    Ok(share_text(&report))
}

/// Render range analytics as a downloadable summary PDF.
pub async fn analytics_pdf(
    State(state): State<Arc<AppState>>,
    Query(range): Query<RangeQuery>,
) -> Result<Response, ApiError> {
    require_range(&range)?;

    let reports = state.store.list_finalized().await;
    let stats = aggregate_range(&reports, &range.start, &range.end);

    let filename = summary_filename(&range.start, &range.end);
    let pdf = render_summary_pdf_async(stats, range.start, range.end, RENDER_TIMEOUT_MS).await?;
    info!("Rendered summary PDF ({} bytes)", pdf.len());

    Ok(pdf_response(filename, pdf))
}

/// Ask the configured AI model for a short narrative summary of the
/// report. Always answers 200 with displayable text.
pub async fn summarize_report(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let report = load_finalized(&state, &date).await?;

    let summary = state.summary.summarize(&report).await;
    Ok(Json(SummaryResponse { summary }))
}

async fn load_finalized(state: &AppState, date: &str) -> Result<DailyReport, ApiError> {
    require_date(date)?;

    let report = state
        .store
        .get(date)
        .await?
        .ok_or_else(|| ApiError::ReportNotFound(date.to_string()))?;

    if !report.finalized {
        return Err(ApiError::InvalidRequest(format!(
            "Report for {} has not been finalized",
            date
        )));
    }
    Ok(report)
}

fn require_date(date: &str) -> Result<(), ApiError> {
    if is_valid_date(date) {
        Ok(())
    } else {
        Err(ApiError::InvalidRequest(format!(
            "Invalid date: {} (expected YYYY-MM-DD)",
            date
        )))
    }
}

fn require_range(range: &RangeQuery) -> Result<(), ApiError> {
    require_date(&range.start)?;
    require_date(&range.end)?;
    if range.start > range.end {
        return Err(ApiError::InvalidRequest(
            "Range start is after range end".to_string(),
        ));
    }
    Ok(())
}

fn pdf_response(filename: String, pdf: Vec<u8>) -> Response {
    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ),
    ];
    (headers, pdf).into_response()
}
