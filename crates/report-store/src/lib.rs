//! SQLite-backed report store: a durable mapping from date to report.
//!
//! The calendar date (`YYYY-MM-DD`) is the primary key; saving the same
//! date twice overwrites. Items are stored verbatim as a JSON column so the
//! stored shape survives catalog evolution.

pub mod error;

pub use error::StoreError;

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;

use inspection_types::{DailyReport, InspectionItem};

/// One `daily_reports` row.
#[derive(Debug, FromRow)]
struct ReportRow {
    date: String,
    inspector_name: String,
    completion_time: String,
    actions_taken: String,
    finalized: bool,
    items_json: String,
}

impl ReportRow {
    fn into_report(self) -> Result<DailyReport, StoreError> {
        let items: Vec<InspectionItem> = serde_json::from_str(&self.items_json)?;
        Ok(DailyReport {
            date: self.date,
            items,
            inspector_name: self.inspector_name,
            actions_taken: self.actions_taken,
            completion_time: self.completion_time,
            finalized: self.finalized,
        })
    }
}

pub struct ReportStore {
    pool: SqlitePool,
}

impl ReportStore {
    /// Connect and run the idempotent migration.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        Self::run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    /// An isolated in-memory store, for tests.
    pub async fn in_memory() -> Result<Self, StoreError> {
        // A single connection, otherwise every pooled connection would get
        // its own empty :memory: database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        Self::run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    async fn run_migrations(pool: &SqlitePool) -> Result<(), StoreError> {
        tracing::info!("Running report store migrations");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS daily_reports (
                date TEXT PRIMARY KEY,
                inspector_name TEXT NOT NULL DEFAULT '',
                completion_time TEXT NOT NULL DEFAULT '',
                actions_taken TEXT NOT NULL DEFAULT '',
                finalized INTEGER NOT NULL DEFAULT 0,
                items_json TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Exact-match lookup. Absence is not an error; an I/O failure is, and
    /// must stay visible to the caller so "no record" and "load failed"
    /// remain distinguishable.
    pub async fn get(&self, date: &str) -> Result<Option<DailyReport>, StoreError> {
        let row: Option<ReportRow> = sqlx::query_as(
            r#"
            SELECT date, inspector_name, completion_time, actions_taken, finalized, items_json
            FROM daily_reports
            WHERE date = ?
            "#,
        )
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;

        row.map(ReportRow::into_report).transpose()
    }

    /// Insert-or-replace keyed by date. Fails loudly; callers must not
    /// assume success.
    pub async fn upsert(&self, report: &DailyReport) -> Result<(), StoreError> {
        let items_json = serde_json::to_string(&report.items)?;

        sqlx::query(
            r#"
            INSERT INTO daily_reports (date, inspector_name, completion_time, actions_taken, finalized, items_json)
            VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT(date) DO UPDATE SET
                inspector_name = excluded.inspector_name,
                completion_time = excluded.completion_time,
                actions_taken = excluded.actions_taken,
                finalized = excluded.finalized,
                items_json = excluded.items_json
            "#,
        )
        .bind(&report.date)
        .bind(&report.inspector_name)
        .bind(&report.completion_time)
        .bind(&report.actions_taken)
        .bind(report.finalized)
        .bind(items_json)
        .execute(&self.pool)
        .await?;

        tracing::info!(date = %report.date, "Upserted daily report");
        Ok(())
    }

    /// Finalized reports, date descending. Degrades to an empty list on
    /// backend failure so the history view can still render; the failure is
    /// logged, not swallowed silently.
    pub async fn list_finalized(&self) -> Vec<DailyReport> {
        match self.try_list_finalized().await {
            Ok(reports) => reports,
            Err(e) => {
                tracing::error!("Failed to list finalized reports: {}", e);
                Vec::new()
            }
        }
    }

    async fn try_list_finalized(&self) -> Result<Vec<DailyReport>, StoreError> {
        let rows: Vec<ReportRow> = sqlx::query_as(
            r#"
            SELECT date, inspector_name, completion_time, actions_taken, finalized, items_json
            FROM daily_reports
            WHERE finalized = 1
            ORDER BY date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(ReportRow::into_report).collect()
    }

    /// Quick-search probe: any lookup error or absence reads as "not found".
    pub async fn exists_finalized(&self, date: &str) -> bool {
        let result: Result<Option<(bool,)>, sqlx::Error> =
            sqlx::query_as("SELECT finalized FROM daily_reports WHERE date = ?")
                .bind(date)
                .fetch_optional(&self.pool)
                .await;

        match result {
            Ok(Some((finalized,))) => finalized,
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(date, "Finalized lookup failed, treating as not found: {}", e);
                false
            }
        }
    }
}
