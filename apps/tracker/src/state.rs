use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::Config;
use crate::llm_client::ChatModel;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds nothing mutable: configuration is fixed at startup.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    /// Text-generation backend. Default: `OpenAiClient`.
    pub llm: Arc<dyn ChatModel>,
    pub config: Arc<Config>,
}
