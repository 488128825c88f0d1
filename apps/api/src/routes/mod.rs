pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::admin::handlers as admin;
use crate::assessment::handlers as assessment;
use crate::insights::handlers as insights;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Question banks
        .route(
            "/api/v1/questions/riasec",
            get(assessment::handle_riasec_questions),
        )
        .route(
            "/api/v1/questions/skills",
            get(assessment::handle_skill_options),
        )
        .route(
            "/api/v1/questions/values",
            get(assessment::handle_value_options),
        )
        // Assessment wizard
        .route("/api/v1/sessions", post(assessment::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(assessment::handle_get_session),
        )
        .route(
            "/api/v1/sessions/:id/riasec",
            post(assessment::handle_submit_riasec),
        )
        .route(
            "/api/v1/sessions/:id/skills",
            post(assessment::handle_submit_skills),
        )
        .route(
            "/api/v1/sessions/:id/values",
            post(assessment::handle_submit_values),
        )
        .route(
            "/api/v1/sessions/:id/matches",
            get(assessment::handle_get_matches),
        )
        // Insights
        .route(
            "/api/v1/sessions/:id/insights/coaching",
            get(insights::handle_coaching_questions),
        )
        .route(
            "/api/v1/sessions/:id/insights/reflection",
            get(insights::handle_reflection_questions),
        )
        .route(
            "/api/v1/sessions/:id/insights/recommendations",
            get(insights::handle_career_recommendations),
        )
        .route(
            "/api/v1/sessions/:id/insights/development-plan",
            get(insights::handle_development_plan),
        )
        // Admin
        .route(
            "/api/v1/admin/llm-config",
            get(admin::handle_get_llm_config).put(admin::handle_update_llm_config),
        )
        .route(
            "/api/v1/admin/datasets",
            post(admin::handle_upload_dataset).get(admin::handle_list_datasets),
        )
        .with_state(state)
}
