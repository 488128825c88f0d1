//! Line-prefix parsers for the structured text the insight prompts ask
//! for. Lenient by design: malformed blocks are skipped, never fatal —
//! the generator falls back to static content when nothing survives.

use crate::insights::{
    CareerRecommendation, CoachingQuestion, DevelopmentPlan, PlanGoal, ReflectionQuestion,
};

pub fn parse_coaching_questions(text: &str) -> Vec<CoachingQuestion> {
    let mut questions = Vec::new();

    for section in sections(text, "QUESTION:") {
        let question = first_line(section);
        let category = field(section, "CATEGORY:");
        let purpose = field(section, "PURPOSE:");

        if let (Some(question), Some(category), Some(purpose)) = (question, category, purpose) {
            questions.push(CoachingQuestion {
                question,
                category,
                purpose,
                follow_up: field(section, "FOLLOW-UP:")
                    .map(|s| split_pipe(&s))
                    .unwrap_or_default(),
            });
        }
    }

    questions
}

pub fn parse_reflection_questions(text: &str) -> Vec<ReflectionQuestion> {
    let mut questions = Vec::new();

    for section in sections(text, "QUESTION:") {
        let question = first_line(section);
        let context = field(section, "CONTEXT:");
        let guidance = field(section, "GUIDANCE:");

        if let (Some(question), Some(context), Some(manager_guidance)) =
            (question, context, guidance)
        {
            questions.push(ReflectionQuestion {
                question,
                context,
                manager_guidance,
            });
        }
    }

    questions
}

pub fn parse_career_recommendations(text: &str) -> Vec<CareerRecommendation> {
    let mut recommendations = Vec::new();

    for section in sections(text, "TITLE:") {
        let title = first_line(section);
        let match_estimate = field(section, "MATCH:").and_then(|s| leading_number(&s));
        let description = field(section, "DESCRIPTION:");

        if let (Some(title), Some(match_estimate), Some(description)) =
            (title, match_estimate, description)
        {
            recommendations.push(CareerRecommendation {
                title,
                match_estimate: match_estimate.min(100),
                description,
                key_activities: field(section, "ACTIVITIES:")
                    .map(|s| split_pipe(&s))
                    .unwrap_or_default(),
                development_areas: field(section, "DEVELOPMENT:")
                    .map(|s| split_pipe(&s))
                    .unwrap_or_default(),
                next_steps: field(section, "NEXT_STEPS:")
                    .map(|s| split_pipe(&s))
                    .unwrap_or_default(),
            });
        }
    }

    recommendations
}

pub fn parse_development_plan(text: &str) -> DevelopmentPlan {
    let short_term = section_between(
        text,
        "SHORT_TERM_GOALS",
        &["LONG_TERM_GOALS", "SKILL_GAPS", "RESOURCES"],
    )
    .map(parse_goals)
    .unwrap_or_default();

    let long_term = section_between(text, "LONG_TERM_GOALS", &["SKILL_GAPS", "RESOURCES"])
        .map(parse_goals)
        .unwrap_or_default();

    let skill_gaps = section_between(text, "SKILL_GAPS:", &["RESOURCES"])
        .map(|s| split_pipe(s.trim()))
        .unwrap_or_default();

    let resources = section_between(text, "RESOURCES:", &[])
        .map(|s| split_pipe(s.trim()))
        .unwrap_or_default();

    DevelopmentPlan {
        short_term,
        long_term,
        skill_gaps,
        resources,
    }
}

/// Parses `GOAL: g | ACTIONS: a1|a2 | TIMELINE: t` lines. Pipe-separated
/// segments without their own prefix belong to the ACTIONS list.
fn parse_goals(section: &str) -> Vec<PlanGoal> {
    let mut goals = Vec::new();

    for line in section.lines() {
        let line = line.trim();
        if !line.starts_with("GOAL:") {
            continue;
        }

        let mut goal = PlanGoal::default();
        let mut in_actions = false;

        for segment in line.split('|') {
            let segment = segment.trim();
            if let Some(rest) = segment.strip_prefix("GOAL:") {
                goal.goal = rest.trim().to_string();
                in_actions = false;
            } else if let Some(rest) = segment.strip_prefix("ACTIONS:") {
                goal.actions.push(rest.trim().to_string());
                in_actions = true;
            } else if let Some(rest) = segment.strip_prefix("TIMELINE:") {
                goal.timeline = rest.trim().to_string();
                in_actions = false;
            } else if in_actions && !segment.is_empty() {
                goal.actions.push(segment.to_string());
            }
        }

        if !goal.goal.is_empty() {
            goals.push(goal);
        }
    }

    goals
}

/// Splits the text on a repeating marker and returns the non-empty chunks
/// after each occurrence.
fn sections<'a>(text: &'a str, marker: &str) -> Vec<&'a str> {
    text.split(marker)
        .skip(1)
        .filter(|s| !s.trim().is_empty())
        .collect()
}

/// The slice between `start` and the earliest of `enders` (or the end).
fn section_between<'a>(text: &'a str, start: &str, enders: &[&str]) -> Option<&'a str> {
    let begin = text.find(start)? + start.len();
    let rest = &text[begin..];
    let end = enders
        .iter()
        .filter_map(|e| rest.find(e))
        .min()
        .unwrap_or(rest.len());
    Some(&rest[..end])
}

fn first_line(section: &str) -> Option<String> {
    let line = section.trim().lines().next()?.trim();
    (!line.is_empty()).then(|| line.to_string())
}

/// Value of the first line starting with `prefix`, trimmed.
fn field(section: &str, prefix: &str) -> Option<String> {
    section
        .lines()
        .find_map(|line| line.trim().strip_prefix(prefix))
        .map(|rest| rest.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn split_pipe(s: &str) -> Vec<String> {
    s.split('|')
        .map(|part| part.trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

fn leading_number(s: &str) -> Option<u8> {
    let digits: String = s.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}
