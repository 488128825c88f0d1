//! The career match scorer: ranks the catalog against one profile.
//!
//! Pure and total — no validation, no side effects. Missing RIASEC data
//! scores as zero, a career with no required skills gets a zero skills
//! component (guarded division), and every component is bounded to
//! [0, 100] before weighting, so the composite never leaves [0, 100].

use std::collections::BTreeMap;

use crate::matching::values::value_keywords;
use crate::matching::weights::{
    MATCH_WEIGHTS, POINTS_PER_MATCHED_VALUE, PRIMARY_TYPE_WEIGHT, SECONDARY_TYPE_WEIGHT,
    TOP_MATCHES, VALUES_CAP,
};
use crate::models::career::{CareerRecord, ScoredCareer};
use crate::models::profile::{RiasecScores, UserProfile};

/// Scores every catalog entry against the profile and returns the top
/// `min(6, catalog.len())`, descending by match score. The sort is stable,
/// so ties keep catalog order.
pub fn rank_careers(profile: &UserProfile, catalog: &[CareerRecord]) -> Vec<ScoredCareer> {
    let mut scored: Vec<ScoredCareer> = catalog
        .iter()
        .map(|career| ScoredCareer {
            match_score: match_score(profile, career),
            career: career.clone(),
        })
        .collect();

    scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    scored.truncate(TOP_MATCHES);
    scored
}

/// Composite 0–100 match score for one career.
pub fn match_score(profile: &UserProfile, career: &CareerRecord) -> u8 {
    let interest = interest_component(&profile.riasec_scores, career);
    let skills = skills_component(&profile.skills_confidence, &career.required_skills);
    let values = values_component(&profile.work_values, career);

    let total = interest * MATCH_WEIGHTS.interest
        + skills * MATCH_WEIGHTS.skills
        + values * MATCH_WEIGHTS.values;

    total.round() as u8
}

/// Interest component: 70/30 blend of the profile's scores for the
/// career's primary and secondary RIASEC types. No secondary type means
/// the secondary share is zero.
fn interest_component(scores: &RiasecScores, career: &CareerRecord) -> f64 {
    let primary = scores.get(career.primary_type) as f64;
    let secondary = career
        .secondary_type
        .map(|t| scores.get(t) as f64)
        .unwrap_or(0.0);

    primary * PRIMARY_TYPE_WEIGHT + secondary * SECONDARY_TYPE_WEIGHT
}

/// Skills component: fraction of required skills covered by the profile,
/// scaled to 0–100. A required skill is covered when any user skill label
/// contains it or it contains the user label, case-insensitively.
fn skills_component(confidence: &BTreeMap<String, u8>, required_skills: &[String]) -> f64 {
    if required_skills.is_empty() {
        return 0.0;
    }

    let user_skills: Vec<String> = confidence.keys().map(|s| s.to_lowercase()).collect();

    let matched = required_skills
        .iter()
        .filter(|required| {
            let required = required.to_lowercase();
            user_skills
                .iter()
                .any(|user| user.contains(&required) || required.contains(user))
        })
        .count();

    matched as f64 / required_skills.len() as f64 * 100.0
}

/// Values component: 20 points per selected value with a keyword hit in
/// the career's description + work-environment text, capped at 100.
/// Labels without a keyword mapping contribute nothing.
fn values_component(work_values: &[String], career: &CareerRecord) -> f64 {
    let career_text = format!(
        "{} {}",
        career.description,
        career.work_environment.join(" ")
    )
    .to_lowercase();

    let mut points = 0.0;
    for value in work_values {
        let hit = value_keywords(value)
            .iter()
            .any(|keyword| career_text.contains(keyword));
        if hit {
            points += POINTS_PER_MATCHED_VALUE;
        }
    }

    points.min(VALUES_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::career_catalog;
    use crate::models::profile::RiasecType;

    fn career_fixture() -> CareerRecord {
        CareerRecord {
            id: "test-career".to_string(),
            title: "Test Career".to_string(),
            description: "A role with no keyword bait in its description".to_string(),
            primary_type: RiasecType::Investigative,
            secondary_type: None,
            required_skills: vec!["Programming".to_string(), "Mathematics".to_string()],
            work_environment: vec!["Office".to_string()],
            salary_range: String::new(),
            growth_outlook: String::new(),
            education: String::new(),
        }
    }

    fn profile_fixture(scores: RiasecScores) -> UserProfile {
        UserProfile {
            name: "Test".to_string(),
            riasec_scores: scores,
            ..UserProfile::default()
        }
    }

    #[test]
    fn test_worked_example_scores_63() {
        // 100 on the primary type, 0 elsewhere, all required skills
        // present verbatim, no recognized values:
        // round(100*0.7*0.40 + 100*0.35 + 0*0.25) = 63.
        let mut profile = profile_fixture(RiasecScores {
            investigative: 100,
            ..RiasecScores::default()
        });
        profile.skills_confidence =
            BTreeMap::from([("Programming".to_string(), 5), ("Mathematics".to_string(), 3)]);

        assert_eq!(match_score(&profile, &career_fixture()), 63);
    }

    #[test]
    fn test_empty_profile_scores_zero_everywhere() {
        let profile = profile_fixture(RiasecScores::default());
        for career in career_catalog() {
            assert_eq!(match_score(&profile, career), 0);
        }
    }

    #[test]
    fn test_zero_required_skills_is_guarded() {
        let mut career = career_fixture();
        career.required_skills.clear();
        let profile = profile_fixture(RiasecScores::default());

        // Would be 0/0 without the guard; must be 0, not NaN.
        assert_eq!(match_score(&profile, &career), 0);
    }

    #[test]
    fn test_skill_match_is_bidirectional_substring_and_case_insensitive() {
        let career = career_fixture();

        // 1/2 * 100 * 0.35 is nominally 17.5, but f64(0.35) sits just
        // below 0.35, so the product lands under 17.5 and rounds to 17.
        let mut profile = profile_fixture(RiasecScores::default());
        profile.skills_confidence = BTreeMap::from([("python programming".to_string(), 4)]);
        assert_eq!(match_score(&profile, &career), 17);

        // Required label contains the user label.
        profile.skills_confidence = BTreeMap::from([("MATH".to_string(), 2)]);
        assert_eq!(match_score(&profile, &career), 17);
    }

    #[test]
    fn test_values_add_20_per_match_and_cap_at_100() {
        let mut career = career_fixture();
        career.description =
            "Creative, flexible, independent, analytical work driving diverse team growth"
                .to_string();
        career.required_skills.clear();

        let mut profile = profile_fixture(RiasecScores::default());
        profile.work_values = vec![
            "Creative Freedom".to_string(),       // "creative"
            "Work-Life Balance".to_string(),      // "flexible"
            "Autonomy".to_string(),               // "independent"
            "Intellectual Challenge".to_string(), // "analytical"
            "Variety".to_string(),                // "diverse"
            "Advancement Opportunities".to_string(), // "growth" — 6th match, over the cap
        ];

        // Six matches would be 120 points; the cap holds it at 100.
        // 100 * 0.25 = 25.
        assert_eq!(match_score(&profile, &career), 25);
    }

    #[test]
    fn test_unmapped_values_contribute_nothing() {
        let mut career = career_fixture();
        career.description = "flexible schedule, making a difference every day".to_string();
        career.required_skills.clear();

        let mut profile = profile_fixture(RiasecScores::default());
        profile.work_values = vec![
            "Flexible Schedule".to_string(),
            "Making a Difference".to_string(),
        ];

        assert_eq!(match_score(&profile, &career), 0);
    }

    #[test]
    fn test_all_scores_bounded_and_length_capped() {
        let mut profile = profile_fixture(RiasecScores {
            realistic: 100,
            investigative: 100,
            artistic: 100,
            social: 100,
            enterprising: 100,
            conventional: 100,
        });
        profile.skills_confidence = career_catalog()
            .iter()
            .flat_map(|c| c.required_skills.iter())
            .map(|s| (s.clone(), 5))
            .collect();
        profile.work_values = crate::data::questions::WORK_VALUES
            .iter()
            .map(|v| v.to_string())
            .collect();

        let ranked = rank_careers(&profile, career_catalog());
        assert_eq!(ranked.len(), TOP_MATCHES);
        assert!(ranked.iter().all(|s| s.match_score <= 100));
    }

    #[test]
    fn test_output_never_exceeds_catalog_size() {
        let profile = profile_fixture(RiasecScores::default());
        let small_catalog = vec![career_fixture(), career_fixture()];
        let ranked = rank_careers(&profile, &small_catalog);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        // All-zero profile scores every career 0; stability then requires
        // the output to preserve catalog order exactly.
        let profile = profile_fixture(RiasecScores::default());
        let ranked = rank_careers(&profile, career_catalog());

        for pair in ranked.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
        let expected: Vec<&str> = career_catalog()
            .iter()
            .take(TOP_MATCHES)
            .map(|c| c.id.as_str())
            .collect();
        let actual: Vec<&str> = ranked.iter().map(|s| s.career.id.as_str()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_skill_map_insertion_order_is_irrelevant() {
        let career = career_fixture();
        let mut profile_a = profile_fixture(RiasecScores::default());
        let mut profile_b = profile_fixture(RiasecScores::default());

        for (k, v) in [("Programming", 5), ("Mathematics", 1), ("Empathy", 3)] {
            profile_a.skills_confidence.insert(k.to_string(), v);
        }
        for (k, v) in [("Empathy", 3), ("Mathematics", 1), ("Programming", 5)] {
            profile_b.skills_confidence.insert(k.to_string(), v);
        }

        assert_eq!(
            match_score(&profile_a, &career),
            match_score(&profile_b, &career)
        );
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let mut profile = profile_fixture(RiasecScores {
            realistic: 40,
            investigative: 85,
            artistic: 15,
            social: 60,
            enterprising: 70,
            conventional: 55,
        });
        profile.skills_confidence = BTreeMap::from([
            ("Communication".to_string(), 4),
            ("Leadership".to_string(), 3),
            ("Programming".to_string(), 5),
        ]);
        profile.work_values = vec!["Helping Others".to_string(), "Recognition".to_string()];

        let first = rank_careers(&profile, career_catalog());
        let second = rank_careers(&profile, career_catalog());

        let ids_and_scores = |r: &[ScoredCareer]| -> Vec<(String, u8)> {
            r.iter()
                .map(|s| (s.career.id.clone(), s.match_score))
                .collect()
        };
        assert_eq!(ids_and_scores(&first), ids_and_scores(&second));
    }

    #[test]
    fn test_secondary_type_contributes_30_percent() {
        let mut career = career_fixture();
        career.secondary_type = Some(RiasecType::Artistic);
        career.required_skills.clear();

        let profile = profile_fixture(RiasecScores {
            artistic: 100,
            ..RiasecScores::default()
        });

        // interest = 0*0.7 + 100*0.3 = 30; 30 * 0.40 = 12.
        assert_eq!(match_score(&profile, &career), 12);
    }
}
