mod config;
mod db;
mod drafts;
mod errors;
mod extract;
mod jobs;
mod llm_client;
mod models;
mod resume_text;
mod routes;
mod state;
mod views;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::jobs::schema::ensure_schema;
use crate::llm_client::OpenAiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing or unreadable config file is the only fatal startup error.
    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting job tracker v{}", env!("CARGO_PKG_VERSION"));

    let db = create_pool(&config.db_path).await?;
    let added = ensure_schema(&db).await.context("Schema migration failed")?;
    if !added.is_empty() {
        info!("Migrated jobs table: added {}", added.join(", "));
    }

    let llm = OpenAiClient::new(&config).context("Failed to build OpenAI client")?;
    info!(
        "LLM client initialized (model: {}, timeout: {}s, retries: {})",
        llm.model(),
        config.llm_timeout_secs,
        config.llm_max_retries
    );
    if config.api_key().is_none() {
        warn!("No OpenAI API key configured; draft generation will be rejected");
    }
    if config.resume_path.is_none() {
        warn!("No resume_path configured; draft generation will be rejected");
    }

    let port = config.port;
    let state = AppState {
        db,
        llm: Arc::new(llm),
        config: Arc::new(config),
    };

    // The browser front end may be served from another origin.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // No authentication, so only listen on loopback.
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
