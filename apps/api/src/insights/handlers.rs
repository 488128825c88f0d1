use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::assessment::handlers::require_complete;
use crate::errors::AppError;
use crate::insights::{
    CareerRecommendation, CoachingQuestion, DevelopmentPlan, ReflectionQuestion,
};
use crate::state::AppState;

/// Insight payload plus which backend produced it.
#[derive(Debug, Serialize)]
pub struct InsightResponse<T> {
    pub backend: &'static str,
    pub insights: T,
}

/// GET /api/v1/sessions/:id/insights/coaching
pub async fn handle_coaching_questions(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InsightResponse<Vec<CoachingQuestion>>>, AppError> {
    let session = state.sessions.get(id)?;
    let profile = require_complete(&session)?;
    Ok(Json(InsightResponse {
        backend: state.insights.backend(),
        insights: state.insights.coaching_questions(profile).await,
    }))
}

/// GET /api/v1/sessions/:id/insights/reflection
pub async fn handle_reflection_questions(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InsightResponse<Vec<ReflectionQuestion>>>, AppError> {
    let session = state.sessions.get(id)?;
    let profile = require_complete(&session)?;
    Ok(Json(InsightResponse {
        backend: state.insights.backend(),
        insights: state.insights.reflection_questions(profile).await,
    }))
}

/// GET /api/v1/sessions/:id/insights/recommendations
pub async fn handle_career_recommendations(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InsightResponse<Vec<CareerRecommendation>>>, AppError> {
    let session = state.sessions.get(id)?;
    let profile = require_complete(&session)?;
    Ok(Json(InsightResponse {
        backend: state.insights.backend(),
        insights: state.insights.career_recommendations(profile).await,
    }))
}

/// GET /api/v1/sessions/:id/insights/development-plan
pub async fn handle_development_plan(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<InsightResponse<DevelopmentPlan>>, AppError> {
    let session = state.sessions.get(id)?;
    let profile = require_complete(&session)?;
    Ok(Json(InsightResponse {
        backend: state.insights.backend(),
        insights: state.insights.development_plan(profile).await,
    }))
}
