//! Application state for the Jalpan Inspection API

use anyhow::Result;
use report_store::ReportStore;
use std::path::PathBuf;
use summary_client::SummaryClient;

pub struct AppState {
    pub store: ReportStore,
    pub summary: SummaryClient,
    pub default_inspector: String,
}

impl AppState {
    pub async fn new() -> Result<Self> {
        // Get database path from env or use default
        let db_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
            let data_dir = default_data_dir();
            std::fs::create_dir_all(&data_dir).ok();
            format!("sqlite:{}/jalpan.db?mode=rwc", data_dir.display())
        });

        tracing::info!("Connecting to database: {}", db_url);
        let store = ReportStore::connect(&db_url).await?;

        let summary = SummaryClient::from_env(reqwest::Client::new());
        if !summary.is_configured() {
            tracing::warn!("GEMINI_API_KEY not set, AI summaries are disabled");
        }

        let default_inspector =
            std::env::var("JALPAN_DEFAULT_INSPECTOR").unwrap_or_default();

        Ok(Self {
            store,
            summary,
            default_inspector,
        })
    }
}

/// Where the sqlite file lives when DATABASE_URL is not set
fn default_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("JALPAN_DATA_DIR") {
        return PathBuf::from(dir);
    }
    std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|_| std::env::var("HOME").map(|h| PathBuf::from(h).join(".local/share")))
        .map(|base| base.join("jalpan-inspection"))
        .unwrap_or_else(|_| PathBuf::from("."))
}
