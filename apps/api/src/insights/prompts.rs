//! Prompt text for the insight generators. The structured output formats
//! here are load-bearing: `parser.rs` reads them back by line prefix.

use std::fmt::Write;

use crate::models::profile::UserProfile;

pub const COACHING_SYSTEM: &str = "You are an expert career coach specializing in RIASEC \
    personality assessments. Generate thoughtful, personalized coaching questions that help \
    individuals explore their career paths based on their RIASEC profile, skills, and work values.";

pub const REFLECTION_SYSTEM: &str = "You are an expert in organizational psychology and team \
    management. Generate meaningful reflection questions that managers can use to support their \
    team members' development based on RIASEC personality profiles.";

pub const RECOMMENDATIONS_SYSTEM: &str = "You are a career counselor with expertise in RIASEC \
    theory and career development. Provide detailed, personalized career recommendations based on \
    the individual's RIASEC profile, skills, and work values.";

pub const DEVELOPMENT_PLAN_SYSTEM: &str = "You are a career development specialist. Create \
    comprehensive, actionable development plans that help individuals grow their careers based on \
    their RIASEC profile and current skill levels.";

pub fn coaching_prompt(profile: &UserProfile) -> String {
    format!(
        "Generate 8-10 personalized coaching questions for an individual with the following profile:\n\
        \n\
        RIASEC Scores:\n{riasec}\n\
        \n\
        Top Skills (confidence level 1-5):\n{skills}\n\
        \n\
        Work Values:\n{values}\n\
        \n\
        Please generate questions in the following categories:\n\
        1. Career Exploration (2-3 questions)\n\
        2. Skill Development (2-3 questions)\n\
        3. Goal Setting (2-3 questions)\n\
        4. Self Reflection (2-3 questions)\n\
        \n\
        Format each question as:\n\
        QUESTION: [The coaching question]\n\
        CATEGORY: [exploration/development/goal-setting/reflection]\n\
        PURPOSE: [Why this question is valuable for this person]\n\
        FOLLOW-UP: [2-3 follow-up questions separated by |]\n\
        \n\
        Focus on their dominant RIASEC types and work values. Make questions specific and actionable.",
        riasec = top_types_block(profile),
        skills = top_skills_block(profile, 5),
        values = values_block(profile, 5),
    )
}

pub fn reflection_prompt(profile: &UserProfile) -> String {
    format!(
        "Generate 8-10 reflection questions that a manager can use with a team member who has this profile:\n\
        \n\
        RIASEC Scores:\n{riasec}\n\
        \n\
        Top Skills:\n{skills}\n\
        \n\
        Work Values:\n{values}\n\
        \n\
        Generate questions for these contexts:\n\
        1. Development Conversations (3-4 questions)\n\
        2. Performance Reviews (3-4 questions)\n\
        3. Career Planning (2-3 questions)\n\
        \n\
        Format each question as:\n\
        QUESTION: [The reflection question]\n\
        CONTEXT: [development/performance/career_planning]\n\
        GUIDANCE: [Specific guidance for the manager on how to use this question effectively]\n\
        \n\
        Focus on helping the manager understand how to leverage this person's RIASEC strengths.",
        riasec = top_types_block(profile),
        skills = top_skills_block(profile, 5),
        values = values_block(profile, 5),
    )
}

pub fn recommendations_prompt(profile: &UserProfile) -> String {
    format!(
        "Recommend 5-6 specific career paths for someone with this profile:\n\
        \n\
        RIASEC Scores:\n{riasec}\n\
        \n\
        Skills & Confidence:\n{skills}\n\
        \n\
        Work Values:\n{values}\n\
        \n\
        For each career recommendation, provide:\n\
        TITLE: [Specific job title/career path]\n\
        MATCH: [Match percentage 1-100]\n\
        DESCRIPTION: [2-3 sentence description of the role]\n\
        ACTIVITIES: [3-4 key daily activities separated by |]\n\
        DEVELOPMENT: [2-3 areas for skill development separated by |]\n\
        NEXT_STEPS: [3-4 concrete next steps separated by |]\n\
        \n\
        Focus on careers that align with their dominant RIASEC types and work values.",
        riasec = top_types_block(profile),
        skills = top_skills_block(profile, usize::MAX),
        values = values_block(profile, usize::MAX),
    )
}

pub fn development_plan_prompt(profile: &UserProfile) -> String {
    format!(
        "Create a comprehensive development plan for someone with this profile:\n\
        \n\
        RIASEC Profile:\n{riasec}\n\
        \n\
        Current Skills:\n{skills}\n\
        \n\
        Work Values:\n{values}\n\
        \n\
        Provide:\n\
        \n\
        SHORT_TERM_GOALS (3-6 months):\n\
        [Format: GOAL: [goal] | ACTIONS: [action1|action2|action3] | TIMELINE: [timeline]]\n\
        \n\
        LONG_TERM_GOALS (1-2 years):\n\
        [Format: GOAL: [goal] | ACTIONS: [action1|action2|action3] | TIMELINE: [timeline]]\n\
        \n\
        SKILL_GAPS:\n\
        [List 4-5 key skill gaps to address, separated by |]\n\
        \n\
        RESOURCES:\n\
        [List 5-6 specific resources (courses, books, certifications) separated by |]\n\
        \n\
        Focus on leveraging their RIASEC strengths while addressing development areas.",
        riasec = top_types_block(profile),
        skills = top_skills_block(profile, usize::MAX),
        values = values_block(profile, usize::MAX),
    )
}

/// Top three RIASEC dimensions as "- Label: N%" lines.
fn top_types_block(profile: &UserProfile) -> String {
    let mut out = String::new();
    for (riasec_type, score) in profile.riasec_scores.ranked().into_iter().take(3) {
        let _ = writeln!(out, "- {}: {}%", riasec_type.label(), score);
    }
    out.trim_end().to_string()
}

/// Skills as "- Skill: N/5" lines, highest confidence first.
fn top_skills_block(profile: &UserProfile, limit: usize) -> String {
    let mut skills: Vec<(&String, &u8)> = profile.skills_confidence.iter().collect();
    skills.sort_by(|a, b| b.1.cmp(a.1));

    let mut out = String::new();
    for (skill, confidence) in skills.into_iter().take(limit) {
        let _ = writeln!(out, "- {skill}: {confidence}/5");
    }
    out.trim_end().to_string()
}

fn values_block(profile: &UserProfile, limit: usize) -> String {
    let mut out = String::new();
    for value in profile.work_values.iter().take(limit) {
        let _ = writeln!(out, "- {value}");
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::RiasecScores;
    use std::collections::BTreeMap;

    fn profile_fixture() -> UserProfile {
        UserProfile {
            name: "Ada".to_string(),
            riasec_scores: RiasecScores {
                realistic: 20,
                investigative: 95,
                artistic: 40,
                social: 60,
                enterprising: 30,
                conventional: 80,
            },
            skills_confidence: BTreeMap::from([
                ("Communication".to_string(), 3),
                ("Problem Solving".to_string(), 5),
            ]),
            work_values: vec!["Autonomy".to_string(), "Variety".to_string()],
            completed_stages: vec![],
        }
    }

    #[test]
    fn test_coaching_prompt_lists_top_three_types() {
        let prompt = coaching_prompt(&profile_fixture());
        assert!(prompt.contains("- Investigative: 95%"));
        assert!(prompt.contains("- Conventional: 80%"));
        assert!(prompt.contains("- Social: 60%"));
        assert!(!prompt.contains("Realistic"));
    }

    #[test]
    fn test_skills_are_sorted_by_confidence() {
        let prompt = coaching_prompt(&profile_fixture());
        let problem_solving = prompt.find("Problem Solving: 5/5").unwrap();
        let communication = prompt.find("Communication: 3/5").unwrap();
        assert!(problem_solving < communication);
    }

    #[test]
    fn test_prompt_spells_out_output_format() {
        let prompt = recommendations_prompt(&profile_fixture());
        for prefix in ["TITLE:", "MATCH:", "DESCRIPTION:", "ACTIVITIES:", "NEXT_STEPS:"] {
            assert!(prompt.contains(prefix), "missing {prefix}");
        }
    }
}
