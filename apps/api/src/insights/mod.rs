//! Insight generation — pluggable, trait-based producers for the coach,
//! manager, and individual dashboards.
//!
//! Default: `LlmInsightGenerator` (provider-backed, degrades to the static
//! banks on any failure). Alternative: `StaticInsightGenerator` (no LLM
//! traffic at all), swapped at startup via `INSIGHTS_BACKEND=static`.
//!
//! `AppState` holds an `Arc<dyn InsightGenerator>`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::profile::UserProfile;

pub mod fallback;
pub mod generator;
pub mod handlers;
pub mod parser;
pub mod prompts;

pub use generator::{LlmInsightGenerator, StaticInsightGenerator};

/// A coaching question for the coach dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachingQuestion {
    pub question: String,
    pub category: String,
    pub purpose: String,
    pub follow_up: Vec<String>,
}

/// A reflection question a manager can bring to a 1:1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReflectionQuestion {
    pub question: String,
    pub context: String,
    pub manager_guidance: String,
}

/// An LLM-suggested career path, distinct from the catalog-based ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerRecommendation {
    pub title: String,
    /// The model's own 0–100 fit estimate — not a scorer output.
    #[serde(rename = "match")]
    pub match_estimate: u8,
    pub description: String,
    pub key_activities: Vec<String>,
    pub development_areas: Vec<String>,
    pub next_steps: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanGoal {
    pub goal: String,
    pub actions: Vec<String>,
    pub timeline: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentPlan {
    pub short_term: Vec<PlanGoal>,
    pub long_term: Vec<PlanGoal>,
    pub skill_gaps: Vec<String>,
    pub resources: Vec<String>,
}

/// The insight generator seam. Every method is total: a backend that
/// cannot produce content returns static bank content instead of an
/// error, so callers always get something to show.
#[async_trait]
pub trait InsightGenerator: Send + Sync {
    async fn coaching_questions(&self, profile: &UserProfile) -> Vec<CoachingQuestion>;
    async fn reflection_questions(&self, profile: &UserProfile) -> Vec<ReflectionQuestion>;
    async fn career_recommendations(&self, profile: &UserProfile) -> Vec<CareerRecommendation>;
    async fn development_plan(&self, profile: &UserProfile) -> DevelopmentPlan;

    /// "llm" | "static" — surfaced in responses for transparency.
    fn backend(&self) -> &'static str;
}
