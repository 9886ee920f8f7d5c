//! Axum route handlers for listing jobs and flipping their status flags.

use askama::Template;
use axum::{
    extract::State,
    response::Html,
    Json,
};
use serde::Serialize;

use crate::drafts::handlers::CoverLetterResponse;
use crate::errors::AppError;
use crate::extract::ApiPath;
use crate::jobs::store;
use crate::models::job::{JobPosting, StatusFlag};
use crate::state::AppState;
use crate::views::{JobDetailPage, JobListPage};

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: String,
}

/// GET /
pub async fn handle_home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let jobs = store::list_visible(&state.db).await?;
    tracing::debug!("Rendering {} visible jobs", jobs.len());
    Ok(Html(JobListPage { jobs }.render()?))
}

/// GET /job/:id
pub async fn handle_job_page(
    State(state): State<AppState>,
    ApiPath(job_id): ApiPath<i64>,
) -> Result<Html<String>, AppError> {
    let job = store::get_by_id(&state.db, job_id).await?;
    Ok(Html(JobDetailPage { job }.render()?))
}

/// GET /get_all_jobs
pub async fn handle_get_all_jobs(
    State(state): State<AppState>,
) -> Result<Json<Vec<JobPosting>>, AppError> {
    Ok(Json(store::list_all(&state.db).await?))
}

/// GET /job_details/:id
pub async fn handle_job_details(
    State(state): State<AppState>,
    ApiPath(job_id): ApiPath<i64>,
) -> Result<Json<JobPosting>, AppError> {
    Ok(Json(store::get_by_id(&state.db, job_id).await?))
}

/// GET /get_cover_letter/:id
pub async fn handle_get_cover_letter(
    State(state): State<AppState>,
    ApiPath(job_id): ApiPath<i64>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    let cover_letter = store::get_cover_letter(&state.db, job_id).await?;
    Ok(Json(CoverLetterResponse { cover_letter }))
}

/// POST /hide_job/:id
pub async fn handle_hide(
    state: State<AppState>,
    path: ApiPath<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    mark(state, path, StatusFlag::Hidden).await
}

/// POST /mark_applied/:id
pub async fn handle_mark_applied(
    state: State<AppState>,
    path: ApiPath<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    mark(state, path, StatusFlag::Applied).await
}

/// POST /mark_interview/:id
pub async fn handle_mark_interview(
    state: State<AppState>,
    path: ApiPath<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    mark(state, path, StatusFlag::Interview).await
}

/// POST /mark_rejected/:id
pub async fn handle_mark_rejected(
    state: State<AppState>,
    path: ApiPath<i64>,
) -> Result<Json<SuccessResponse>, AppError> {
    mark(state, path, StatusFlag::Rejected).await
}

async fn mark(
    State(state): State<AppState>,
    ApiPath(job_id): ApiPath<i64>,
    flag: StatusFlag,
) -> Result<Json<SuccessResponse>, AppError> {
    store::set_flag(&state.db, job_id, flag).await?;
    tracing::info!("Job {job_id} marked as {}", flag.column());

    Ok(Json(SuccessResponse {
        success: format!("Job marked as {}", flag.column()),
    }))
}
