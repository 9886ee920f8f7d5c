pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::drafts::handlers as drafts;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // HTML pages
        .route("/", get(jobs::handle_home))
        .route("/job/:id", get(jobs::handle_job_page))
        // Job Store
        .route("/get_all_jobs", get(jobs::handle_get_all_jobs))
        .route("/job_details/:id", get(jobs::handle_job_details))
        .route("/hide_job/:id", post(jobs::handle_hide))
        .route("/mark_applied/:id", post(jobs::handle_mark_applied))
        .route("/mark_interview/:id", post(jobs::handle_mark_interview))
        .route("/mark_rejected/:id", post(jobs::handle_mark_rejected))
        .route("/get_cover_letter/:id", get(jobs::handle_get_cover_letter))
        // Draft Generator
        .route("/get_resume/:id", post(drafts::handle_generate_resume))
        .route(
            "/get_CoverLetter/:id",
            post(drafts::handle_generate_cover_letter),
        )
        .with_state(state)
}
