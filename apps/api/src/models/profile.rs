use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The six RIASEC vocational-interest dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiasecType {
    Realistic,
    Investigative,
    Artistic,
    Social,
    Enterprising,
    Conventional,
}

impl RiasecType {
    pub const ALL: [RiasecType; 6] = [
        RiasecType::Realistic,
        RiasecType::Investigative,
        RiasecType::Artistic,
        RiasecType::Social,
        RiasecType::Enterprising,
        RiasecType::Conventional,
    ];

    /// Capitalized label for prompt text and display.
    pub fn label(&self) -> &'static str {
        match self {
            RiasecType::Realistic => "Realistic",
            RiasecType::Investigative => "Investigative",
            RiasecType::Artistic => "Artistic",
            RiasecType::Social => "Social",
            RiasecType::Enterprising => "Enterprising",
            RiasecType::Conventional => "Conventional",
        }
    }
}

/// Per-dimension interest scores, each normalized to 0–100.
/// Produced once from the RIASEC question responses; immutable afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiasecScores {
    pub realistic: u8,
    pub investigative: u8,
    pub artistic: u8,
    pub social: u8,
    pub enterprising: u8,
    pub conventional: u8,
}

impl RiasecScores {
    pub fn get(&self, riasec_type: RiasecType) -> u8 {
        match riasec_type {
            RiasecType::Realistic => self.realistic,
            RiasecType::Investigative => self.investigative,
            RiasecType::Artistic => self.artistic,
            RiasecType::Social => self.social,
            RiasecType::Enterprising => self.enterprising,
            RiasecType::Conventional => self.conventional,
        }
    }

    pub fn set(&mut self, riasec_type: RiasecType, score: u8) {
        match riasec_type {
            RiasecType::Realistic => self.realistic = score,
            RiasecType::Investigative => self.investigative = score,
            RiasecType::Artistic => self.artistic = score,
            RiasecType::Social => self.social = score,
            RiasecType::Enterprising => self.enterprising = score,
            RiasecType::Conventional => self.conventional = score,
        }
    }

    /// All six dimensions sorted by score descending. Stable, so equal
    /// scores keep the canonical R-I-A-S-E-C order.
    pub fn ranked(&self) -> Vec<(RiasecType, u8)> {
        let mut entries: Vec<(RiasecType, u8)> =
            RiasecType::ALL.iter().map(|&t| (t, self.get(t))).collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

/// Assessment stages in the order the wizard completes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Riasec,
    Skills,
    Values,
}

/// Which dashboard the session is driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonaType {
    Individual,
    Coach,
    Manager,
}

/// A respondent's accumulated assessment data.
///
/// Built step by step: each `with_*` method consumes the profile and
/// returns a new value with that stage's data replaced and the stage
/// marked complete. No shared mutable wizard state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub riasec_scores: RiasecScores,
    /// Skill label → confidence 1–5. BTreeMap so content, not insertion
    /// order, determines iteration.
    pub skills_confidence: BTreeMap<String, u8>,
    pub work_values: Vec<String>,
    pub completed_stages: Vec<Stage>,
}

impl UserProfile {
    pub fn new(name: String) -> Self {
        Self {
            name,
            ..Self::default()
        }
    }

    pub fn with_riasec(self, scores: RiasecScores) -> Self {
        let mut profile = Self {
            riasec_scores: scores,
            ..self
        };
        profile.mark_complete(Stage::Riasec);
        profile
    }

    pub fn with_skills(self, confidence: BTreeMap<String, u8>) -> Self {
        let mut profile = Self {
            skills_confidence: confidence,
            ..self
        };
        profile.mark_complete(Stage::Skills);
        profile
    }

    pub fn with_values(self, values: Vec<String>) -> Self {
        let mut profile = Self {
            work_values: values,
            ..self
        };
        profile.mark_complete(Stage::Values);
        profile
    }

    pub fn stage_complete(&self, stage: Stage) -> bool {
        self.completed_stages.contains(&stage)
    }

    /// True once riasec, skills, and values have all been submitted.
    pub fn assessment_complete(&self) -> bool {
        self.stage_complete(Stage::Riasec)
            && self.stage_complete(Stage::Skills)
            && self.stage_complete(Stage::Values)
    }

    fn mark_complete(&mut self, stage: Stage) {
        if !self.completed_stages.contains(&stage) {
            self.completed_stages.push(stage);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranked_sorts_descending() {
        let scores = RiasecScores {
            realistic: 10,
            investigative: 90,
            artistic: 50,
            social: 70,
            enterprising: 30,
            conventional: 60,
        };
        let ranked = scores.ranked();
        assert_eq!(ranked[0], (RiasecType::Investigative, 90));
        assert_eq!(ranked[5], (RiasecType::Realistic, 10));
        for pair in ranked.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn test_ranked_ties_keep_canonical_order() {
        let scores = RiasecScores {
            realistic: 50,
            investigative: 50,
            artistic: 50,
            social: 50,
            enterprising: 50,
            conventional: 50,
        };
        let order: Vec<RiasecType> = scores.ranked().into_iter().map(|(t, _)| t).collect();
        assert_eq!(order, RiasecType::ALL.to_vec());
    }

    #[test]
    fn test_stages_accumulate_without_duplicates() {
        let profile = UserProfile::new("Ada".to_string())
            .with_riasec(RiasecScores::default())
            .with_skills(BTreeMap::from([("Communication".to_string(), 4)]))
            .with_riasec(RiasecScores::default());

        assert_eq!(profile.completed_stages, vec![Stage::Riasec, Stage::Skills]);
        assert!(!profile.assessment_complete());

        let profile = profile.with_values(vec![
            "Autonomy".to_string(),
            "Variety".to_string(),
            "Recognition".to_string(),
        ]);
        assert!(profile.assessment_complete());
    }

    #[test]
    fn test_resubmitting_a_stage_replaces_its_data() {
        let profile = UserProfile::new("Ada".to_string())
            .with_skills(BTreeMap::from([("Leadership".to_string(), 2)]))
            .with_skills(BTreeMap::from([("Creativity".to_string(), 5)]));

        assert_eq!(profile.skills_confidence.len(), 1);
        assert_eq!(profile.skills_confidence.get("Creativity"), Some(&5));
    }
}
