use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::jobs::store;
use crate::state::AppState;

/// GET /health
/// Reports the service version and how many jobs are stored. A database that
/// can't be queried surfaces as the usual 500 error body.
pub async fn health_handler(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let jobs = store::count(&state.db).await?;

    Ok(Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "jobs": jobs,
    })))
}
