use anyhow::{Context, Result};

use crate::llm_client::{
    LlmSettings, DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
};

/// Application configuration loaded from environment variables.
///
/// Everything has a default: the service must come up with no environment
/// at all. A missing LLM key is not an error — the insight layer runs in
/// static-fallback mode until an admin configures a provider.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub llm_endpoint: String,
    pub llm_model: String,
    pub llm_api_key: Option<String>,
    /// "llm" (default) or "static" to skip provider traffic entirely.
    pub insights_backend: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            llm_endpoint: std::env::var("LLM_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            llm_model: std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            llm_api_key: std::env::var("LLM_API_KEY").ok().filter(|k| !k.is_empty()),
            insights_backend: std::env::var("INSIGHTS_BACKEND")
                .unwrap_or_else(|_| "llm".to_string()),
        })
    }

    /// Initial runtime LLM settings, before any admin reconfiguration.
    pub fn initial_llm_settings(&self) -> LlmSettings {
        LlmSettings {
            endpoint: self.llm_endpoint.clone(),
            model: self.llm_model.clone(),
            api_key: self.llm_api_key.clone(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}
