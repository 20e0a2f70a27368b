//! Jalpan Inspection API Server - Backend for daily food quality reports
//!
//! Provides REST endpoints for:
//! - Loading and finalizing daily inspection reports
//! - Range analytics over finalized reports
//! - PDF and share-text export
//! - AI-generated report summaries

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

mod error;
mod handlers;
mod models;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("inspection_api=info".parse()?)
                .add_directive("tower_http=debug".parse()?),
        )
        .init();

    // Initialize application state
    info!("Initializing Jalpan Inspection API...");
    let state = AppState::new().await?;
    let state = Arc::new(state);

    // CORS configuration for web clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Checklist configuration
        .route("/api/catalog", get(handlers::get_catalog))
        // Report endpoints
        .route("/api/report/:date", get(handlers::get_report))
        .route("/api/report/finalize", post(handlers::finalize_report))
        .route("/api/reports", get(handlers::list_reports))
        .route("/api/report/:date/exists", get(handlers::report_exists))
        // Analytics
        .route("/api/analytics", get(handlers::range_analytics))
        // Export
        .route("/api/report/:date/pdf", get(handlers::report_pdf))
        .route(
            "/api/report/:date/share-text",
            get(handlers::share_report_text),
        )
        .route("/api/analytics/pdf", get(handlers::analytics_pdf))
        // AI summary
        .route("/api/report/:date/summary", post(handlers::summarize_report))
        // Add middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    // Parse bind address
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3002);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting Jalpan Inspection API on http://{}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
