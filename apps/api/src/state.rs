use std::sync::{Arc, RwLock};

use crate::admin::DatasetStore;
use crate::assessment::SessionStore;
use crate::config::Config;
use crate::insights::InsightGenerator;
use crate::llm_client::LlmSettings;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: SessionStore,
    pub datasets: DatasetStore,
    /// Runtime LLM provider settings, shared with the client so admin
    /// edits take effect on the next call.
    pub llm_settings: Arc<RwLock<LlmSettings>>,
    /// Pluggable insight generator. Default: LlmInsightGenerator. Swap via INSIGHTS_BACKEND env.
    pub insights: Arc<dyn InsightGenerator>,
}
