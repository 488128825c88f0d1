use serde::{Deserialize, Serialize};

use crate::models::profile::RiasecType;

/// One entry in the static career catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub primary_type: RiasecType,
    pub secondary_type: Option<RiasecType>,
    pub required_skills: Vec<String>,
    pub work_environment: Vec<String>,
    pub salary_range: String,
    pub growth_outlook: String,
    pub education: String,
}

/// A catalog entry plus its match score against one profile. Valid only
/// for the scoring call that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCareer {
    #[serde(flatten)]
    pub career: CareerRecord,
    pub match_score: u8,
}
