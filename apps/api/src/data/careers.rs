//! The compiled-in career catalog. The admin upload flow can stage a
//! replacement dataset, but the scorer always reads this catalog.

use std::sync::LazyLock;

use crate::models::career::CareerRecord;
use crate::models::profile::RiasecType;

static CATALOG: LazyLock<Vec<CareerRecord>> = LazyLock::new(build_catalog);

pub fn career_catalog() -> &'static [CareerRecord] {
    &CATALOG
}

fn build_catalog() -> Vec<CareerRecord> {
    vec![
        career(
            "software-engineer",
            "Software Engineer",
            "Design, develop, and maintain software applications and systems",
            RiasecType::Investigative,
            Some(RiasecType::Realistic),
            &["Programming", "Problem Solving", "Logic", "Mathematics"],
            &["Office", "Remote Work", "Collaborative Teams"],
            "$70,000 - $150,000",
            "Much faster than average (22%)",
            "Bachelor's degree in Computer Science or related field",
        ),
        career(
            "mechanical-engineer",
            "Mechanical Engineer",
            "Design, develop, and test mechanical devices and systems",
            RiasecType::Realistic,
            Some(RiasecType::Investigative),
            &["Engineering Design", "Mathematics", "Physics", "CAD Software"],
            &["Office", "Manufacturing Plants", "Laboratories"],
            "$60,000 - $120,000",
            "As fast as average (7%)",
            "Bachelor's degree in Mechanical Engineering",
        ),
        career(
            "data-scientist",
            "Data Scientist",
            "Analyze complex data to help organizations make informed decisions",
            RiasecType::Investigative,
            Some(RiasecType::Conventional),
            &["Statistics", "Programming", "Machine Learning", "Data Visualization"],
            &["Office", "Remote Work", "Research Labs"],
            "$80,000 - $160,000",
            "Much faster than average (35%)",
            "Bachelor's or Master's degree in Data Science, Statistics, or related field",
        ),
        career(
            "ux-designer",
            "UX/UI Designer",
            "Create intuitive and engaging user experiences for digital products",
            RiasecType::Artistic,
            Some(RiasecType::Investigative),
            &["Design Thinking", "Prototyping", "User Research", "Visual Design"],
            &["Office", "Remote Work", "Creative Studios"],
            "$55,000 - $120,000",
            "Faster than average (13%)",
            "Bachelor's degree in Design, HCI, or related field",
        ),
        career(
            "marketing-creative",
            "Creative Director",
            "Lead creative teams to develop compelling marketing campaigns and brand experiences",
            RiasecType::Artistic,
            Some(RiasecType::Enterprising),
            &["Creative Strategy", "Team Leadership", "Brand Development", "Visual Communication"],
            &["Advertising Agencies", "Corporate Offices", "Creative Studios"],
            "$70,000 - $150,000",
            "As fast as average (10%)",
            "Bachelor's degree in Marketing, Advertising, or Fine Arts",
        ),
        career(
            "counselor",
            "Mental Health Counselor",
            "Help individuals and groups overcome mental health challenges and improve wellbeing",
            RiasecType::Social,
            Some(RiasecType::Investigative),
            &["Active Listening", "Empathy", "Communication", "Psychology"],
            &["Clinics", "Hospitals", "Private Practice", "Community Centers"],
            "$45,000 - $80,000",
            "Much faster than average (25%)",
            "Master's degree in Counseling or Psychology",
        ),
        career(
            "teacher",
            "High School Teacher",
            "Educate and inspire students in academic subjects and life skills",
            RiasecType::Social,
            Some(RiasecType::Artistic),
            &["Communication", "Patience", "Subject Expertise", "Classroom Management"],
            &["Schools", "Classrooms", "Educational Institutions"],
            "$40,000 - $70,000",
            "As fast as average (8%)",
            "Bachelor's degree in Education or subject area plus teaching certification",
        ),
        career(
            "product-manager",
            "Product Manager",
            "Guide product development from conception to launch and beyond",
            RiasecType::Enterprising,
            Some(RiasecType::Investigative),
            &["Strategic Thinking", "Leadership", "Market Analysis", "Project Management"],
            &["Office", "Remote Work", "Cross-functional Teams"],
            "$80,000 - $160,000",
            "Faster than average (19%)",
            "Bachelor's degree in Business, Engineering, or related field",
        ),
        career(
            "sales-manager",
            "Sales Manager",
            "Lead sales teams to achieve revenue goals and build client relationships",
            RiasecType::Enterprising,
            Some(RiasecType::Social),
            &["Leadership", "Negotiation", "Communication", "Strategic Planning"],
            &["Office", "Client Sites", "Travel"],
            "$60,000 - $130,000",
            "As fast as average (7%)",
            "Bachelor's degree in Business, Marketing, or related field",
        ),
        career(
            "financial-analyst",
            "Financial Analyst",
            "Analyze financial data to guide investment and business decisions",
            RiasecType::Conventional,
            Some(RiasecType::Investigative),
            &["Financial Modeling", "Data Analysis", "Attention to Detail", "Excel"],
            &["Office", "Financial Institutions", "Corporate Headquarters"],
            "$55,000 - $100,000",
            "Faster than average (11%)",
            "Bachelor's degree in Finance, Economics, or related field",
        ),
        career(
            "project-coordinator",
            "Project Coordinator",
            "Organize and coordinate project activities to ensure successful completion",
            RiasecType::Conventional,
            Some(RiasecType::Social),
            &["Organization", "Communication", "Time Management", "Documentation"],
            &["Office", "Various Industries", "Team Environments"],
            "$45,000 - $75,000",
            "Faster than average (11%)",
            "Bachelor's degree in Business Administration or related field",
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn career(
    id: &str,
    title: &str,
    description: &str,
    primary_type: RiasecType,
    secondary_type: Option<RiasecType>,
    required_skills: &[&str],
    work_environment: &[&str],
    salary_range: &str,
    growth_outlook: &str,
    education: &str,
) -> CareerRecord {
    CareerRecord {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        primary_type,
        secondary_type,
        required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
        work_environment: work_environment.iter().map(|s| s.to_string()).collect(),
        salary_range: salary_range.to_string(),
        growth_outlook: growth_outlook.to_string(),
        education: education.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<&str> = career_catalog().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), career_catalog().len());
    }

    #[test]
    fn test_every_career_has_required_skills() {
        for career in career_catalog() {
            assert!(
                !career.required_skills.is_empty(),
                "{} has no required skills",
                career.id
            );
        }
    }

    #[test]
    fn test_catalog_size() {
        assert_eq!(career_catalog().len(), 11);
    }
}
