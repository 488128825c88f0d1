use std::collections::{BTreeMap, HashMap};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::assessment::builder;
use crate::assessment::session::Session;
use crate::data::career_catalog;
use crate::data::questions::{RiasecQuestion, RIASEC_QUESTIONS, SKILLS, WORK_VALUES};
use crate::errors::AppError;
use crate::matching::rank_careers;
use crate::models::career::ScoredCareer;
use crate::models::profile::{PersonaType, Stage, UserProfile};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub name: String,
    pub persona: PersonaType,
}

/// A session plus its derived progress percentage.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    #[serde(flatten)]
    pub session: Session,
    pub progress: u8,
}

impl SessionResponse {
    fn new(session: Session) -> Self {
        let progress = progress(&session.profile);
        Self { session, progress }
    }
}

/// Progress through the wizard: 20% for starting, 20% per submitted
/// stage, 100% once all three are in.
fn progress(profile: &UserProfile) -> u8 {
    if profile.assessment_complete() {
        100
    } else {
        20 + 20 * profile.completed_stages.len() as u8
    }
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
    Json(payload): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Name must not be empty".to_string()));
    }

    let session = state.sessions.create(name.to_string(), payload.persona);
    info!(session_id = %session.id, persona = ?session.persona, "session created");
    Ok((StatusCode::CREATED, Json(SessionResponse::new(session))))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionResponse>, AppError> {
    let session = state.sessions.get(id)?;
    Ok(Json(SessionResponse::new(session)))
}

/// GET /api/v1/questions/riasec
pub async fn handle_riasec_questions() -> Json<&'static [RiasecQuestion]> {
    Json(&RIASEC_QUESTIONS)
}

/// GET /api/v1/questions/skills
pub async fn handle_skill_options() -> Json<&'static [&'static str]> {
    Json(&SKILLS)
}

/// GET /api/v1/questions/values
pub async fn handle_value_options() -> Json<&'static [&'static str]> {
    Json(&WORK_VALUES)
}

#[derive(Debug, Deserialize)]
pub struct RiasecSubmission {
    /// Question id → rating 1-5, one entry per question in the bank.
    pub answers: HashMap<String, u8>,
}

/// POST /api/v1/sessions/:id/riasec
pub async fn handle_submit_riasec(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RiasecSubmission>,
) -> Result<Json<SessionResponse>, AppError> {
    let scores = builder::score_riasec(&payload.answers)?;
    let session = state
        .sessions
        .update_profile(id, |profile| profile.with_riasec(scores))?;
    info!(session_id = %id, "riasec step submitted");
    Ok(Json(SessionResponse::new(session)))
}

#[derive(Debug, Deserialize)]
pub struct SkillsSubmission {
    /// Skill label → confidence 1-5.
    pub confidence: BTreeMap<String, u8>,
}

/// POST /api/v1/sessions/:id/skills
pub async fn handle_submit_skills(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SkillsSubmission>,
) -> Result<Json<SessionResponse>, AppError> {
    require_stage(&state.sessions.get(id)?, Stage::Riasec)?;
    builder::validate_confidence(&payload.confidence)?;

    let session = state
        .sessions
        .update_profile(id, |profile| profile.with_skills(payload.confidence))?;
    info!(session_id = %id, "skills step submitted");
    Ok(Json(SessionResponse::new(session)))
}

#[derive(Debug, Deserialize)]
pub struct ValuesSubmission {
    pub values: Vec<String>,
}

/// POST /api/v1/sessions/:id/values
pub async fn handle_submit_values(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ValuesSubmission>,
) -> Result<Json<SessionResponse>, AppError> {
    require_stage(&state.sessions.get(id)?, Stage::Skills)?;
    builder::validate_values(&payload.values)?;

    let session = state
        .sessions
        .update_profile(id, |profile| profile.with_values(payload.values))?;
    info!(session_id = %id, "values step submitted");
    Ok(Json(SessionResponse::new(session)))
}

#[derive(Debug, Serialize)]
pub struct MatchesResponse {
    pub matches: Vec<ScoredCareer>,
}

/// GET /api/v1/sessions/:id/matches
pub async fn handle_get_matches(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MatchesResponse>, AppError> {
    let session = state.sessions.get(id)?;
    let profile = require_complete(&session)?;
    let matches = rank_careers(profile, career_catalog());
    Ok(Json(MatchesResponse { matches }))
}

/// Steps must arrive in order: riasec, then skills, then values.
fn require_stage(session: &Session, stage: Stage) -> Result<(), AppError> {
    if session.profile.stage_complete(stage) {
        Ok(())
    } else {
        Err(AppError::UnprocessableEntity(format!(
            "Complete the {stage:?} step first"
        )))
    }
}

/// Results and insights need the full assessment.
pub fn require_complete(session: &Session) -> Result<&UserProfile, AppError> {
    if session.profile.assessment_complete() {
        Ok(&session.profile)
    } else {
        Err(AppError::UnprocessableEntity(
            "Assessment is not complete yet".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::RiasecScores;

    #[test]
    fn test_progress_steps_through_the_wizard() {
        let profile = UserProfile::new("Ada".to_string());
        assert_eq!(progress(&profile), 20);

        let profile = profile.with_riasec(RiasecScores::default());
        assert_eq!(progress(&profile), 40);

        let profile = profile.with_skills(BTreeMap::from([("Teamwork".to_string(), 3)]));
        assert_eq!(progress(&profile), 60);

        let profile = profile.with_values(vec![
            "Autonomy".to_string(),
            "Variety".to_string(),
            "Recognition".to_string(),
        ]);
        assert_eq!(progress(&profile), 100);
    }

    #[test]
    fn test_out_of_order_stage_is_unprocessable() {
        let store = crate::assessment::session::SessionStore::new();
        let session = store.create("Ada".to_string(), PersonaType::Individual);

        let err = require_stage(&session, Stage::Riasec).unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));

        let err = require_complete(&session).unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }
}
