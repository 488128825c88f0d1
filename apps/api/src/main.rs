mod admin;
mod assessment;
mod config;
mod data;
mod errors;
mod insights;
mod llm_client;
mod matching;
mod models;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::{Arc, RwLock};

use crate::config::Config;
use crate::insights::{InsightGenerator, LlmInsightGenerator, StaticInsightGenerator};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; everything has a default
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let target = env!("CARGO_PKG_NAME").replace('-', "_");
            EnvFilter::new(format!("{target}={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pathfinder API v{}", env!("CARGO_PKG_VERSION"));

    // Runtime LLM settings, shared with the admin surface
    let llm_settings = Arc::new(RwLock::new(config.initial_llm_settings()));
    let llm = LlmClient::new(llm_settings.clone());
    if config.llm_api_key.is_none() {
        info!("No LLM API key configured; insights will serve the static banks");
    }

    // Insight generator (LlmInsightGenerator by default; swap via INSIGHTS_BACKEND)
    let insights: Arc<dyn InsightGenerator> = match config.insights_backend.as_str() {
        "static" => Arc::new(StaticInsightGenerator),
        _ => Arc::new(LlmInsightGenerator::new(llm)),
    };
    info!("Insight backend: {}", insights.backend());

    // Build app state
    let state = AppState {
        config: config.clone(),
        sessions: assessment::SessionStore::new(),
        datasets: admin::DatasetStore::new(),
        llm_settings,
        insights,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
