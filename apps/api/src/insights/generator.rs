use async_trait::async_trait;
use tracing::warn;

use crate::data::question_banks;
use crate::insights::{
    fallback, parser, prompts, CareerRecommendation, CoachingQuestion, DevelopmentPlan,
    InsightGenerator, ReflectionQuestion,
};
use crate::llm_client::LlmClient;
use crate::models::profile::{RiasecType, UserProfile};

/// How many of the profile's top dimensions drive bank selection.
const FOCUS_TYPES: usize = 3;

fn top_types(profile: &UserProfile) -> Vec<RiasecType> {
    profile
        .riasec_scores
        .ranked()
        .into_iter()
        .take(FOCUS_TYPES)
        .map(|(t, _)| t)
        .collect()
}

/// Coaching questions for the profile's top dimensions, from the static
/// bank.
fn bank_coaching(profile: &UserProfile) -> Vec<CoachingQuestion> {
    question_banks::coaching_for(&top_types(profile))
        .into_iter()
        .map(|entry| CoachingQuestion {
            question: entry.question.to_string(),
            category: entry.category.to_string(),
            purpose: entry.purpose.to_string(),
            follow_up: entry.follow_up.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}

fn bank_reflection(profile: &UserProfile) -> Vec<ReflectionQuestion> {
    question_banks::reflection_for(&top_types(profile))
        .into_iter()
        .map(|entry| ReflectionQuestion {
            question: entry.question.to_string(),
            context: entry.context.to_string(),
            manager_guidance: entry.manager_guidance.to_string(),
        })
        .collect()
}

/// Serves the static banks directly, selected by the profile's top RIASEC
/// dimensions. Selected via `INSIGHTS_BACKEND=static` or used implicitly
/// as the LLM generator's degradation target.
pub struct StaticInsightGenerator;

#[async_trait]
impl InsightGenerator for StaticInsightGenerator {
    async fn coaching_questions(&self, profile: &UserProfile) -> Vec<CoachingQuestion> {
        bank_coaching(profile)
    }

    async fn reflection_questions(&self, profile: &UserProfile) -> Vec<ReflectionQuestion> {
        bank_reflection(profile)
    }

    async fn career_recommendations(&self, _profile: &UserProfile) -> Vec<CareerRecommendation> {
        parser::parse_career_recommendations(fallback::RECOMMENDATIONS_TEXT)
    }

    async fn development_plan(&self, _profile: &UserProfile) -> DevelopmentPlan {
        parser::parse_development_plan(fallback::DEVELOPMENT_PLAN_TEXT)
    }

    fn backend(&self) -> &'static str {
        "static"
    }
}

/// Provider-backed generator. Any failure — unconfigured key, transport
/// error after retries, output the parser cannot use — degrades to the
/// static banks (or the canned text where no bank exists) rather than
/// surfacing an error.
pub struct LlmInsightGenerator {
    llm: LlmClient,
}

impl LlmInsightGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    /// One LLM round-trip: prompt, parse, and fall back if the parsed
    /// output is empty by the caller's measure.
    async fn generate_or<T>(
        &self,
        what: &str,
        system: &str,
        prompt: &str,
        parse: impl Fn(&str) -> T,
        is_empty: impl Fn(&T) -> bool,
        fallback: impl FnOnce() -> T,
    ) -> T {
        match self.llm.chat(system, prompt).await {
            Ok(text) => {
                let parsed = parse(&text);
                if is_empty(&parsed) {
                    warn!("LLM returned unparseable {what}; serving static bank");
                    fallback()
                } else {
                    parsed
                }
            }
            Err(e) => {
                warn!("LLM {what} generation failed ({e}); serving static bank");
                fallback()
            }
        }
    }
}

#[async_trait]
impl InsightGenerator for LlmInsightGenerator {
    async fn coaching_questions(&self, profile: &UserProfile) -> Vec<CoachingQuestion> {
        self.generate_or(
            "coaching questions",
            prompts::COACHING_SYSTEM,
            &prompts::coaching_prompt(profile),
            |text| parser::parse_coaching_questions(text),
            |parsed| parsed.is_empty(),
            || bank_coaching(profile),
        )
        .await
    }

    async fn reflection_questions(&self, profile: &UserProfile) -> Vec<ReflectionQuestion> {
        self.generate_or(
            "reflection questions",
            prompts::REFLECTION_SYSTEM,
            &prompts::reflection_prompt(profile),
            |text| parser::parse_reflection_questions(text),
            |parsed| parsed.is_empty(),
            || bank_reflection(profile),
        )
        .await
    }

    async fn career_recommendations(&self, profile: &UserProfile) -> Vec<CareerRecommendation> {
        self.generate_or(
            "career recommendations",
            prompts::RECOMMENDATIONS_SYSTEM,
            &prompts::recommendations_prompt(profile),
            |text| parser::parse_career_recommendations(text),
            |parsed| parsed.is_empty(),
            || parser::parse_career_recommendations(fallback::RECOMMENDATIONS_TEXT),
        )
        .await
    }

    async fn development_plan(&self, profile: &UserProfile) -> DevelopmentPlan {
        self.generate_or(
            "development plan",
            prompts::DEVELOPMENT_PLAN_SYSTEM,
            &prompts::development_plan_prompt(profile),
            |text| parser::parse_development_plan(text),
            |plan| plan.short_term.is_empty() && plan.long_term.is_empty(),
            || parser::parse_development_plan(fallback::DEVELOPMENT_PLAN_TEXT),
        )
        .await
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, RwLock};

    use crate::llm_client::{
        LlmSettings, DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
    };
    use crate::models::profile::RiasecScores;

    fn unconfigured_llm() -> LlmClient {
        LlmClient::new(Arc::new(RwLock::new(LlmSettings {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        })))
    }

    fn social_leaning_profile() -> UserProfile {
        UserProfile {
            riasec_scores: RiasecScores {
                social: 95,
                enterprising: 80,
                artistic: 60,
                realistic: 10,
                investigative: 20,
                conventional: 30,
            },
            ..UserProfile::default()
        }
    }

    #[tokio::test]
    async fn test_static_generator_always_has_content() {
        let generator = StaticInsightGenerator;
        let profile = UserProfile::default();

        assert!(!generator.coaching_questions(&profile).await.is_empty());
        assert!(!generator.reflection_questions(&profile).await.is_empty());
        assert!(!generator.career_recommendations(&profile).await.is_empty());
        let plan = generator.development_plan(&profile).await;
        assert!(!plan.short_term.is_empty());
    }

    #[tokio::test]
    async fn test_static_coaching_selects_by_top_types() {
        let generator = StaticInsightGenerator;
        let questions = generator
            .coaching_questions(&social_leaning_profile())
            .await;

        // Top three dimensions (social, enterprising, artistic) at three
        // bank questions each.
        assert_eq!(questions.len(), 9);
        assert!(questions[0]
            .question
            .contains("helping or working with others"));
        assert!(questions
            .iter()
            .all(|q| !q.question.contains("research challenges")));
    }

    #[tokio::test]
    async fn test_static_reflection_covers_all_manager_contexts() {
        let generator = StaticInsightGenerator;
        let questions = generator
            .reflection_questions(&social_leaning_profile())
            .await;

        assert_eq!(questions.len(), 12);
        for context in ["development", "performance", "career_planning"] {
            assert!(
                questions.iter().any(|q| q.context == context),
                "missing {context}"
            );
        }
    }

    #[tokio::test]
    async fn test_llm_generator_degrades_to_static_bank_without_key() {
        let generator = LlmInsightGenerator::new(unconfigured_llm());
        let profile = social_leaning_profile();

        let llm_backed = generator.coaching_questions(&profile).await;
        let bank = StaticInsightGenerator.coaching_questions(&profile).await;
        assert_eq!(llm_backed, bank);
    }

    #[test]
    fn test_backend_labels() {
        assert_eq!(StaticInsightGenerator.backend(), "static");
        assert_eq!(LlmInsightGenerator::new(unconfigured_llm()).backend(), "llm");
    }
}
