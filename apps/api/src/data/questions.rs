//! The RIASEC question bank, skill labels, and work-value labels served
//! to clients during the assessment steps.

use serde::Serialize;

use crate::models::profile::RiasecType;

/// Questions per dimension. With 1–5 ratings the raw per-dimension sum
/// tops out at `QUESTIONS_PER_TYPE * 5`.
pub const QUESTIONS_PER_TYPE: usize = 4;
pub const MAX_RAW_SUM: u32 = (QUESTIONS_PER_TYPE as u32) * 5;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RiasecQuestion {
    pub id: &'static str,
    pub text: &'static str,
    #[serde(rename = "type")]
    pub riasec_type: RiasecType,
}

pub const RIASEC_QUESTIONS: [RiasecQuestion; 24] = [
    q("r1", "I enjoy working with tools and machinery", RiasecType::Realistic),
    q("r2", "I like to build things with my hands", RiasecType::Realistic),
    q("r3", "I prefer practical, hands-on activities", RiasecType::Realistic),
    q("r4", "I enjoy outdoor work and physical activities", RiasecType::Realistic),
    q("i1", "I enjoy solving complex problems and puzzles", RiasecType::Investigative),
    q("i2", "I like to analyze data and conduct research", RiasecType::Investigative),
    q("i3", "I am curious about how things work", RiasecType::Investigative),
    q("i4", "I enjoy learning about science and technology", RiasecType::Investigative),
    q("a1", "I enjoy creative activities like drawing or writing", RiasecType::Artistic),
    q("a2", "I like to express myself through art or music", RiasecType::Artistic),
    q("a3", "I prefer unstructured, flexible work environments", RiasecType::Artistic),
    q("a4", "I enjoy designing and creating new things", RiasecType::Artistic),
    q("s1", "I enjoy helping and teaching others", RiasecType::Social),
    q("s2", "I like working in teams and collaborating", RiasecType::Social),
    q("s3", "I am good at understanding people's feelings", RiasecType::Social),
    q("s4", "I enjoy volunteering and community service", RiasecType::Social),
    q("e1", "I enjoy leading and managing others", RiasecType::Enterprising),
    q("e2", "I like to persuade and influence people", RiasecType::Enterprising),
    q("e3", "I am comfortable taking risks for potential rewards", RiasecType::Enterprising),
    q("e4", "I enjoy competitive environments", RiasecType::Enterprising),
    q("c1", "I prefer organized, structured work environments", RiasecType::Conventional),
    q("c2", "I enjoy working with numbers and data", RiasecType::Conventional),
    q("c3", "I like following established procedures and rules", RiasecType::Conventional),
    q("c4", "I am detail-oriented and accurate in my work", RiasecType::Conventional),
];

const fn q(id: &'static str, text: &'static str, riasec_type: RiasecType) -> RiasecQuestion {
    RiasecQuestion {
        id,
        text,
        riasec_type,
    }
}

pub const SKILLS: [&str; 12] = [
    "Communication",
    "Leadership",
    "Problem Solving",
    "Creativity",
    "Technical Skills",
    "Analytical Thinking",
    "Teamwork",
    "Time Management",
    "Adaptability",
    "Critical Thinking",
    "Project Management",
    "Public Speaking",
];

pub const WORK_VALUES: [&str; 12] = [
    "Work-Life Balance",
    "High Salary",
    "Job Security",
    "Creative Freedom",
    "Helping Others",
    "Recognition",
    "Autonomy",
    "Intellectual Challenge",
    "Variety",
    "Advancement Opportunities",
    "Flexible Schedule",
    "Making a Difference",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_four_questions_per_dimension() {
        let mut counts: HashMap<RiasecType, usize> = HashMap::new();
        for question in &RIASEC_QUESTIONS {
            *counts.entry(question.riasec_type).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        assert!(counts.values().all(|&n| n == QUESTIONS_PER_TYPE));
    }

    #[test]
    fn test_question_ids_are_unique() {
        let mut ids: Vec<&str> = RIASEC_QUESTIONS.iter().map(|q| q.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), RIASEC_QUESTIONS.len());
    }
}
