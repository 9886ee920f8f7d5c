//! Axum route handlers for draft generation.

use axum::{
    extract::State,
    Json,
};
use serde::Serialize;

use crate::drafts::generator::generate;
use crate::errors::AppError;
use crate::extract::ApiPath;
use crate::models::job::DraftKind;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ResumeResponse {
    pub resume: String,
}

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub cover_letter: String,
}

/// POST /get_resume/:id
///
/// Generates a tailored resume for the job and stores it on the row.
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    ApiPath(job_id): ApiPath<i64>,
) -> Result<Json<ResumeResponse>, AppError> {
    let resume = generate(
        &state.db,
        state.llm.as_ref(),
        &state.config,
        job_id,
        DraftKind::Resume,
    )
    .await?;

    Ok(Json(ResumeResponse { resume }))
}

/// POST /get_CoverLetter/:id
///
/// Generates a cover letter for the job and stores it on the row.
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    ApiPath(job_id): ApiPath<i64>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    let cover_letter = generate(
        &state.db,
        state.llm.as_ref(),
        &state.config,
        job_id,
        DraftKind::CoverLetter,
    )
    .await?;

    Ok(Json(CoverLetterResponse { cover_letter }))
}
