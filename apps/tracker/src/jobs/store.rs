//! Read and status-mutation operations on the `jobs` table.
//!
//! Every mutation is a single-row, single-statement UPDATE, so no transaction
//! ever spans more than one statement. Rows are never inserted or deleted here.

use sqlx::SqlitePool;
use tracing::debug;

use crate::errors::AppError;
use crate::models::job::{DraftKind, JobPosting, StatusFlag, JOB_COLUMNS};

/// Jobs that are not hidden, newest first, ties broken by company name.
pub async fn list_visible(pool: &SqlitePool) -> Result<Vec<JobPosting>, AppError> {
    let sql = format!(
        "SELECT {JOB_COLUMNS} FROM jobs WHERE hidden = 0 ORDER BY date DESC, company ASC"
    );
    Ok(sqlx::query_as::<_, JobPosting>(&sql).fetch_all(pool).await?)
}

/// Every job, hidden or not, highest id first.
pub async fn list_all(pool: &SqlitePool) -> Result<Vec<JobPosting>, AppError> {
    let sql = format!("SELECT {JOB_COLUMNS} FROM jobs ORDER BY id DESC");
    Ok(sqlx::query_as::<_, JobPosting>(&sql).fetch_all(pool).await?)
}

pub async fn count(pool: &SqlitePool) -> Result<i64, AppError> {
    Ok(sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM jobs")
        .fetch_one(pool)
        .await?)
}

pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<JobPosting, AppError> {
    let sql = format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = ?");
    sqlx::query_as::<_, JobPosting>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(AppError::job_not_found)
}

/// Sets `flag` to true. Idempotent, and leaves the other three flags alone.
pub async fn set_flag(pool: &SqlitePool, id: i64, flag: StatusFlag) -> Result<(), AppError> {
    let sql = format!("UPDATE jobs SET {} = 1 WHERE id = ?", flag.column());
    debug!("Executing query: {sql} with job_id: {id}");

    // SQLite counts matched rows, so re-setting a flag still reports one row.
    let result = sqlx::query(&sql).bind(id).execute(pool).await?;
    if result.rows_affected() == 0 {
        return Err(AppError::job_not_found());
    }
    Ok(())
}

/// The stored cover letter. A job that exists but has never had one generated
/// is reported the same way as a missing job.
pub async fn get_cover_letter(pool: &SqlitePool, id: i64) -> Result<String, AppError> {
    sqlx::query_scalar::<_, Option<String>>("SELECT cover_letter FROM jobs WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .flatten()
        .ok_or_else(|| AppError::NotFound("Cover letter not found".to_string()))
}

pub async fn save_cover_letter(pool: &SqlitePool, id: i64, text: &str) -> Result<(), AppError> {
    save_draft(pool, id, DraftKind::CoverLetter, text).await
}

pub async fn save_resume(pool: &SqlitePool, id: i64, text: &str) -> Result<(), AppError> {
    save_draft(pool, id, DraftKind::Resume, text).await
}

/// Overwrites the stored draft of the given kind.
async fn save_draft(
    pool: &SqlitePool,
    id: i64,
    kind: DraftKind,
    text: &str,
) -> Result<(), AppError> {
    let sql = format!("UPDATE jobs SET {} = ? WHERE id = ?", kind.column());
    debug!("Saving {} ({} bytes) for job_id: {id}", kind.column(), text.len());

    let result = sqlx::query(&sql).bind(text).bind(id).execute(pool).await?;
    if result.rows_affected() == 0 {
        return Err(AppError::job_not_found());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::fixtures::{insert_job, insert_job_with_id, migrated_pool};

    #[tokio::test]
    async fn test_count_includes_hidden_jobs() {
        let pool = migrated_pool().await;
        assert_eq!(count(&pool).await.unwrap(), 0);

        let id = insert_job(&pool, "SRE", "Globex", "2024-01-01").await;
        insert_job(&pool, "QA", "Initech", "2024-01-02").await;
        set_flag(&pool, id, StatusFlag::Hidden).await.unwrap();

        assert_eq!(count(&pool).await.unwrap(), 2);
    }

    const MISSING_ID: i64 = 9_999;

    fn assert_not_found<T: std::fmt::Debug>(result: Result<T, AppError>) {
        assert!(
            matches!(result, Err(AppError::NotFound(_))),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found_everywhere() {
        let pool = migrated_pool().await;

        assert_not_found(get_by_id(&pool, MISSING_ID).await);
        for flag in [
            StatusFlag::Hidden,
            StatusFlag::Applied,
            StatusFlag::Interview,
            StatusFlag::Rejected,
        ] {
            assert_not_found(set_flag(&pool, MISSING_ID, flag).await);
        }
        assert_not_found(get_cover_letter(&pool, MISSING_ID).await);
        assert_not_found(save_cover_letter(&pool, MISSING_ID, "Dear team").await);
        assert_not_found(save_resume(&pool, MISSING_ID, "Resume").await);
    }

    #[tokio::test]
    async fn test_set_flag_leaves_other_flags_unchanged() {
        let pool = migrated_pool().await;
        let id = insert_job(&pool, "Backend Engineer", "Acme", "2024-01-01").await;
        set_flag(&pool, id, StatusFlag::Interview).await.unwrap();

        set_flag(&pool, id, StatusFlag::Applied).await.unwrap();

        let job = get_by_id(&pool, id).await.unwrap();
        assert!(job.applied);
        assert!(job.interview);
        assert!(!job.hidden);
        assert!(!job.rejected);
    }

    #[tokio::test]
    async fn test_set_flag_is_idempotent() {
        let pool = migrated_pool().await;
        let id = insert_job(&pool, "Backend Engineer", "Acme", "2024-01-01").await;

        set_flag(&pool, id, StatusFlag::Applied).await.unwrap();
        set_flag(&pool, id, StatusFlag::Applied).await.unwrap();

        assert!(get_by_id(&pool, id).await.unwrap().applied);
    }

    #[tokio::test]
    async fn test_rejected_does_not_clear_applied_or_interview() {
        let pool = migrated_pool().await;
        let id = insert_job(&pool, "SRE", "Globex", "2024-01-01").await;

        set_flag(&pool, id, StatusFlag::Applied).await.unwrap();
        set_flag(&pool, id, StatusFlag::Interview).await.unwrap();
        set_flag(&pool, id, StatusFlag::Rejected).await.unwrap();

        let job = get_by_id(&pool, id).await.unwrap();
        assert!(job.applied && job.interview && job.rejected);
    }

    #[tokio::test]
    async fn test_hidden_job_leaves_visible_list_but_stays_addressable() {
        let pool = migrated_pool().await;
        insert_job_with_id(&pool, 7, "Backend Engineer", "Acme").await;

        let visible = list_visible(&pool).await.unwrap();
        assert!(visible.iter().any(|j| j.id == 7));

        set_flag(&pool, 7, StatusFlag::Hidden).await.unwrap();

        let visible = list_visible(&pool).await.unwrap();
        assert!(visible.iter().all(|j| j.id != 7));
        assert!(visible.iter().all(|j| !j.hidden));

        let job = get_by_id(&pool, 7).await.unwrap();
        assert!(job.hidden);
        assert_eq!(job.title, "Backend Engineer");

        let all = list_all(&pool).await.unwrap();
        assert!(all.iter().any(|j| j.id == 7 && j.hidden));
    }

    #[tokio::test]
    async fn test_list_visible_orders_by_date_desc_then_company_asc() {
        let pool = migrated_pool().await;
        insert_job(&pool, "Old", "Zeta", "2024-01-01").await;
        insert_job(&pool, "New B", "B", "2024-03-01").await;
        insert_job(&pool, "New A", "A", "2024-03-01").await;

        let companies: Vec<_> = list_visible(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|j| j.company)
            .collect();

        assert_eq!(companies, vec!["A", "B", "Zeta"]);
    }

    #[tokio::test]
    async fn test_list_all_orders_by_id_desc() {
        let pool = migrated_pool().await;
        let first = insert_job(&pool, "One", "A", "2024-05-01").await;
        let second = insert_job(&pool, "Two", "B", "2024-01-01").await;
        set_flag(&pool, first, StatusFlag::Hidden).await.unwrap();

        let ids: Vec<_> = list_all(&pool).await.unwrap().into_iter().map(|j| j.id).collect();

        assert_eq!(ids, vec![second, first]);
    }

    #[tokio::test]
    async fn test_cover_letter_not_found_until_saved() {
        let pool = migrated_pool().await;
        let id = insert_job(&pool, "Backend Engineer", "Acme", "2024-01-01").await;

        assert_not_found(get_cover_letter(&pool, id).await);

        save_cover_letter(&pool, id, "Dear Acme,").await.unwrap();
        assert_eq!(get_cover_letter(&pool, id).await.unwrap(), "Dear Acme,");

        save_cover_letter(&pool, id, "Dear Acme team,").await.unwrap();
        assert_eq!(get_cover_letter(&pool, id).await.unwrap(), "Dear Acme team,");
    }

    #[tokio::test]
    async fn test_save_resume_does_not_touch_cover_letter() {
        let pool = migrated_pool().await;
        let id = insert_job(&pool, "Backend Engineer", "Acme", "2024-01-01").await;
        save_cover_letter(&pool, id, "Letter").await.unwrap();

        save_resume(&pool, id, "Tailored resume").await.unwrap();

        let job = get_by_id(&pool, id).await.unwrap();
        assert_eq!(job.resume.as_deref(), Some("Tailored resume"));
        assert_eq!(job.cover_letter.as_deref(), Some("Letter"));
    }
}
