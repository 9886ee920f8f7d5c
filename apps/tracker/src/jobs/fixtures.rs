//! Test helpers: a migrated in-memory database and a row inserter that stands
//! in for the ingestion process.

use sqlx::SqlitePool;

use crate::db::memory_pool;
use crate::jobs::schema::ensure_schema;

pub async fn migrated_pool() -> SqlitePool {
    let pool = memory_pool().await;
    ensure_schema(&pool).await.unwrap();
    pool
}

pub async fn insert_job(pool: &SqlitePool, title: &str, company: &str, date: &str) -> i64 {
    sqlx::query(
        "INSERT INTO jobs (title, company, date, job_description) VALUES (?, ?, ?, ?)",
    )
    .bind(title)
    .bind(company)
    .bind(date)
    .bind(format!("{title} at {company}. Rust, SQL and on-call."))
    .execute(pool)
    .await
    .unwrap()
    .last_insert_rowid()
}

pub async fn insert_job_with_id(pool: &SqlitePool, id: i64, title: &str, company: &str) {
    sqlx::query(
        "INSERT INTO jobs (id, title, company, date, job_description) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(title)
    .bind(company)
    .bind("2024-03-01 09:00:00")
    .bind(format!("{title} at {company}. Rust, SQL and on-call."))
    .execute(pool)
    .await
    .unwrap();
}
