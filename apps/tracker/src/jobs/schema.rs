use anyhow::{Context, Result};
use sqlx::{Row, SqlitePool};
use tracing::{debug, info};

/// Base table as the ingestion process creates it. `AUTOINCREMENT` keeps ids
/// from ever being reused after a row disappears.
const CREATE_JOBS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS jobs (
        id              INTEGER PRIMARY KEY AUTOINCREMENT,
        title           TEXT    NOT NULL,
        company         TEXT    NOT NULL,
        date            TEXT    NOT NULL,
        job_description TEXT    NOT NULL,
        hidden          INTEGER NOT NULL DEFAULT 0,
        applied         INTEGER NOT NULL DEFAULT 0,
        interview       INTEGER NOT NULL DEFAULT 0,
        rejected        INTEGER NOT NULL DEFAULT 0
    )
"#;

/// Columns added lazily on top of the ingested table.
const DRAFT_COLUMNS: [&str; 2] = ["cover_letter", "resume"];

/// Brings the `jobs` table up to date. Safe to run on every startup: existing
/// rows are untouched and columns that are already there are skipped.
///
/// Returns the columns that were added by this call.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<Vec<&'static str>> {
    sqlx::query(CREATE_JOBS_TABLE)
        .execute(pool)
        .await
        .context("Failed to create jobs table")?;

    let existing = column_names(pool).await?;
    let mut added = Vec::new();

    for column in DRAFT_COLUMNS {
        if existing.iter().any(|c| c == column) {
            continue;
        }

        let statement = format!("ALTER TABLE jobs ADD COLUMN {column} TEXT");
        match sqlx::query(&statement).execute(pool).await {
            Ok(_) => {
                info!("Added {column} column to jobs table");
                added.push(column);
            }
            // Another process raced us to it.
            Err(sqlx::Error::Database(e)) if e.message().contains("duplicate column name") => {
                debug!("Column {column} already present: {}", e.message());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to add {column} column"));
            }
        }
    }

    Ok(added)
}

async fn column_names(pool: &SqlitePool) -> Result<Vec<String>> {
    let rows = sqlx::query("PRAGMA table_info(jobs)")
        .fetch_all(pool)
        .await
        .context("Failed to inspect jobs table")?;

    rows.iter()
        .map(|row| row.try_get::<String, _>("name").map_err(Into::into))
        .collect()
}
