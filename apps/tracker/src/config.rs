use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Config file read when `TRACKER_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";
/// Model used when `OpenAI_Model` is absent or blank.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// Application configuration, read once at startup from a JSON file and passed
/// to every component through `AppState`.
///
/// The file keeps the key names of the tracker's existing `config.json`
/// (`db_path`, `resume_path`, `OpenAI_API_KEY`, `OpenAI_Model`); the remaining
/// keys are optional hardening knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub db_path: PathBuf,
    #[serde(default)]
    pub resume_path: Option<PathBuf>,
    #[serde(rename = "OpenAI_API_KEY", default)]
    pub openai_api_key: Option<String>,
    #[serde(rename = "OpenAI_Model", default = "default_model")]
    pub openai_model: String,
    /// Alternate Chat Completions base URL (proxy or compatible server).
    #[serde(rename = "OpenAI_API_Base", default)]
    pub openai_api_base: Option<String>,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_llm_timeout_secs")]
    pub llm_timeout_secs: u64,
    #[serde(default = "default_llm_max_retries")]
    pub llm_max_retries: u32,
    #[serde(default = "default_rust_log")]
    pub rust_log: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_port() -> u16 {
    5001
}

fn default_llm_timeout_secs() -> u64 {
    120
}

fn default_llm_max_retries() -> u32 {
    1
}

fn default_rust_log() -> String {
    "info".to_string()
}

impl Config {
    /// Loads `.env` (if any), then the JSON config file named by `TRACKER_CONFIG`
    /// (default `config.json`). `PORT` and `RUST_LOG` override the file.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let path = std::env::var("TRACKER_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut config = Self::from_file(&path)?;

        if let Ok(port) = std::env::var("PORT") {
            config.port = port
                .parse::<u16>()
                .context("PORT must be a valid port number")?;
        }
        if let Ok(level) = std::env::var("RUST_LOG") {
            config.rust_log = level;
        }

        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("Invalid config file '{}'", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let mut config: Config = serde_json::from_str(raw)?;

        // Blank strings in the file mean "not configured".
        if config
            .resume_path
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            config.resume_path = None;
        }
        if config.openai_model.trim().is_empty() {
            config.openai_model = default_model();
        }

        Ok(config)
    }

    /// The API key, if one is configured and non-blank.
    pub fn api_key(&self) -> Option<&str> {
        self.openai_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }

    pub fn llm_timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_secs)
    }
}
