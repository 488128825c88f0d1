//! Static coaching and reflection question banks, keyed by RIASEC focus.
//! These drive the coach and manager dashboards when no LLM is in play:
//! selection picks the entries for a profile's top dimensions.

use crate::models::profile::RiasecType;

#[derive(Debug, Clone, Copy)]
pub struct CoachingBankEntry {
    pub id: &'static str,
    pub category: &'static str,
    pub question: &'static str,
    pub focus: RiasecType,
    pub purpose: &'static str,
    pub follow_up: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct ReflectionBankEntry {
    pub id: &'static str,
    pub category: &'static str,
    pub question: &'static str,
    pub focus: RiasecType,
    pub context: &'static str,
    pub manager_guidance: &'static str,
}

/// Bank entries whose focus is one of the given types, in the order the
/// types are given (bank order within a type).
pub fn coaching_for(types: &[RiasecType]) -> Vec<&'static CoachingBankEntry> {
    types
        .iter()
        .flat_map(|&t| COACHING_BANK.iter().filter(move |e| e.focus == t))
        .collect()
}

pub fn reflection_for(types: &[RiasecType]) -> Vec<&'static ReflectionBankEntry> {
    types
        .iter()
        .flat_map(|&t| REFLECTION_BANK.iter().filter(move |e| e.focus == t))
        .collect()
}

pub const COACHING_BANK: [CoachingBankEntry; 18] = [
    CoachingBankEntry {
        id: "r1",
        category: "exploration",
        question: "What hands-on activities or practical tasks energize you most in your current role?",
        focus: RiasecType::Realistic,
        purpose: "Identify practical strengths and preferences for realistic types",
        follow_up: &[
            "How could you incorporate more of these activities into your work?",
            "What tools or equipment do you most enjoy working with?",
        ],
    },
    CoachingBankEntry {
        id: "r2",
        category: "development",
        question: "What technical skills would you like to develop to become more effective in practical problem-solving?",
        focus: RiasecType::Realistic,
        purpose: "Focus on skill development for hands-on learners",
        follow_up: &[
            "What resources or training would help you develop these skills?",
            "How would these skills impact your daily work?",
        ],
    },
    CoachingBankEntry {
        id: "r3",
        category: "goal-setting",
        question: "What concrete, measurable outcomes would you like to achieve in the next 6 months?",
        focus: RiasecType::Realistic,
        purpose: "Help realistic types set tangible, achievable goals",
        follow_up: &[
            "What specific steps will you take to reach these outcomes?",
            "How will you measure your progress?",
        ],
    },
    CoachingBankEntry {
        id: "i1",
        category: "exploration",
        question: "What complex problems or research challenges excite you most?",
        focus: RiasecType::Investigative,
        purpose: "Identify analytical interests and intellectual curiosity",
        follow_up: &[
            "What methods do you use to approach these challenges?",
            "How do you stay current with developments in your field?",
        ],
    },
    CoachingBankEntry {
        id: "i2",
        category: "development",
        question: "What areas of knowledge or expertise would you like to deepen through independent study?",
        focus: RiasecType::Investigative,
        purpose: "Support continuous learning and specialization",
        follow_up: &[
            "What learning resources would be most valuable to you?",
            "How would this deeper knowledge benefit your work?",
        ],
    },
    CoachingBankEntry {
        id: "i3",
        category: "reflection",
        question: "How do you prefer to analyze information and make decisions?",
        focus: RiasecType::Investigative,
        purpose: "Understand analytical thinking processes",
        follow_up: &[
            "What data or evidence do you find most compelling?",
            "How do you handle uncertainty in your analysis?",
        ],
    },
    CoachingBankEntry {
        id: "a1",
        category: "exploration",
        question: "When do you feel most creative and innovative in your work?",
        focus: RiasecType::Artistic,
        purpose: "Identify creative strengths and optimal conditions",
        follow_up: &[
            "What environments or situations spark your creativity?",
            "How do you capture and develop your creative ideas?",
        ],
    },
    CoachingBankEntry {
        id: "a2",
        category: "development",
        question: "What creative skills or artistic abilities would you like to develop further?",
        focus: RiasecType::Artistic,
        purpose: "Support creative growth and expression",
        follow_up: &[
            "How could these skills enhance your professional work?",
            "What creative projects would you like to pursue?",
        ],
    },
    CoachingBankEntry {
        id: "a3",
        category: "goal-setting",
        question: "How can you bring more creativity and innovation to your current role?",
        focus: RiasecType::Artistic,
        purpose: "Integrate creativity into professional goals",
        follow_up: &[
            "What barriers might prevent creative expression?",
            "How can you advocate for more creative opportunities?",
        ],
    },
    CoachingBankEntry {
        id: "s1",
        category: "exploration",
        question: "What aspects of helping or working with others bring you the most satisfaction?",
        focus: RiasecType::Social,
        purpose: "Identify interpersonal strengths and motivations",
        follow_up: &[
            "How do you prefer to support and help others?",
            "What impact do you want to have on people?",
        ],
    },
    CoachingBankEntry {
        id: "s2",
        category: "development",
        question: "What interpersonal or communication skills would you like to strengthen?",
        focus: RiasecType::Social,
        purpose: "Develop people-focused capabilities",
        follow_up: &[
            "How would these skills improve your relationships?",
            "What opportunities do you have to practice these skills?",
        ],
    },
    CoachingBankEntry {
        id: "s3",
        category: "reflection",
        question: "How do you build trust and rapport with different types of people?",
        focus: RiasecType::Social,
        purpose: "Explore relationship-building strategies",
        follow_up: &[
            "What challenges do you face in building relationships?",
            "How do you adapt your communication style?",
        ],
    },
    CoachingBankEntry {
        id: "e1",
        category: "exploration",
        question: "What leadership opportunities or challenges energize you most?",
        focus: RiasecType::Enterprising,
        purpose: "Identify leadership interests and strengths",
        follow_up: &[
            "What leadership style feels most natural to you?",
            "How do you motivate and influence others?",
        ],
    },
    CoachingBankEntry {
        id: "e2",
        category: "goal-setting",
        question: "What ambitious goals would you like to pursue in your career?",
        focus: RiasecType::Enterprising,
        purpose: "Support goal-oriented and achievement-focused planning",
        follow_up: &[
            "What resources or support do you need to achieve these goals?",
            "How will you measure success?",
        ],
    },
    CoachingBankEntry {
        id: "e3",
        category: "development",
        question: "What business or entrepreneurial skills would enhance your effectiveness?",
        focus: RiasecType::Enterprising,
        purpose: "Develop business acumen and leadership capabilities",
        follow_up: &[
            "How could you gain experience in these areas?",
            "What mentors or role models inspire you?",
        ],
    },
    CoachingBankEntry {
        id: "c1",
        category: "exploration",
        question: "What organized, systematic work gives you the greatest sense of accomplishment?",
        focus: RiasecType::Conventional,
        purpose: "Identify preferences for structure and organization",
        follow_up: &[
            "What systems or processes do you find most effective?",
            "How do you maintain quality and accuracy in your work?",
        ],
    },
    CoachingBankEntry {
        id: "c2",
        category: "development",
        question: "What organizational or administrative skills would you like to improve?",
        focus: RiasecType::Conventional,
        purpose: "Support systematic skill development",
        follow_up: &[
            "What training or resources would help you develop these skills?",
            "How would these improvements benefit your work?",
        ],
    },
    CoachingBankEntry {
        id: "c3",
        category: "reflection",
        question: "How do you prefer to plan and organize your work for maximum efficiency?",
        focus: RiasecType::Conventional,
        purpose: "Explore organizational preferences and methods",
        follow_up: &[
            "What tools or systems support your organization?",
            "How do you handle competing priorities?",
        ],
    },
];

pub const REFLECTION_BANK: [ReflectionBankEntry; 24] = [
    ReflectionBankEntry {
        id: "rd1",
        category: "skill-building",
        question: "What hands-on experiences or practical projects have contributed most to your professional growth?",
        focus: RiasecType::Realistic,
        context: "development",
        manager_guidance: "Listen for specific examples of practical learning. Discuss how to provide more hands-on development opportunities and skill-building experiences.",
    },
    ReflectionBankEntry {
        id: "rd2",
        category: "learning-style",
        question: "How do you prefer to learn new technical skills or procedures?",
        focus: RiasecType::Realistic,
        context: "development",
        manager_guidance: "Realistic types often prefer learning by doing. Consider providing mentoring, job shadowing, or practical training opportunities rather than theoretical workshops.",
    },
    ReflectionBankEntry {
        id: "id1",
        category: "knowledge-growth",
        question: "What areas of expertise would you like to develop deeper knowledge in?",
        focus: RiasecType::Investigative,
        context: "development",
        manager_guidance: "Support their desire for specialization. Provide access to research resources, conferences, or advanced training. Allow time for deep learning and analysis.",
    },
    ReflectionBankEntry {
        id: "id2",
        category: "problem-solving",
        question: "What complex challenges would you like to take on to stretch your analytical abilities?",
        focus: RiasecType::Investigative,
        context: "development",
        manager_guidance: "Investigative types thrive on intellectual challenges. Assign complex projects that require research and analysis. Encourage independent problem-solving.",
    },
    ReflectionBankEntry {
        id: "ad1",
        category: "creativity",
        question: "How can we create more opportunities for you to express creativity in your role?",
        focus: RiasecType::Artistic,
        context: "development",
        manager_guidance: "Artistic types need creative outlets. Discuss flexible approaches to tasks, innovation projects, or cross-functional creative collaborations.",
    },
    ReflectionBankEntry {
        id: "ad2",
        category: "innovation",
        question: "What new ideas or approaches would you like to explore in your work?",
        focus: RiasecType::Artistic,
        context: "development",
        manager_guidance: "Encourage experimentation and new approaches. Provide safe spaces for creative risk-taking and support innovative thinking.",
    },
    ReflectionBankEntry {
        id: "sd1",
        category: "interpersonal-skills",
        question: "What interpersonal skills would you like to develop to better support your colleagues?",
        focus: RiasecType::Social,
        context: "development",
        manager_guidance: "Social types value relationship-building. Provide opportunities for mentoring, team leadership, or communication skills training.",
    },
    ReflectionBankEntry {
        id: "sd2",
        category: "team-contribution",
        question: "How would you like to contribute more to team dynamics and collaboration?",
        focus: RiasecType::Social,
        context: "development",
        manager_guidance: "Leverage their people skills. Consider roles in team facilitation, conflict resolution, or cross-team collaboration projects.",
    },
    ReflectionBankEntry {
        id: "ed1",
        category: "leadership",
        question: "What leadership opportunities would help you grow and develop?",
        focus: RiasecType::Enterprising,
        context: "development",
        manager_guidance: "Enterprising types seek leadership roles. Provide project leadership opportunities, delegation experiences, or business development challenges.",
    },
    ReflectionBankEntry {
        id: "ed2",
        category: "influence",
        question: "How would you like to expand your influence and impact within the organization?",
        focus: RiasecType::Enterprising,
        context: "development",
        manager_guidance: "Support their ambition with stretch assignments, cross-functional projects, or opportunities to present to senior leadership.",
    },
    ReflectionBankEntry {
        id: "cd1",
        category: "systems-improvement",
        question: "What processes or systems would you like to help improve or optimize?",
        focus: RiasecType::Conventional,
        context: "development",
        manager_guidance: "Conventional types excel at organization and efficiency. Involve them in process improvement initiatives and systematic problem-solving.",
    },
    ReflectionBankEntry {
        id: "cd2",
        category: "expertise",
        question: "What specialized knowledge or certifications would enhance your effectiveness?",
        focus: RiasecType::Conventional,
        context: "development",
        manager_guidance: "Support their desire for expertise and credentials. Provide training opportunities and recognize their attention to detail and accuracy.",
    },
    ReflectionBankEntry {
        id: "rp1",
        category: "achievement",
        question: "What practical accomplishments are you most proud of this period?",
        focus: RiasecType::Realistic,
        context: "performance",
        manager_guidance: "Focus on tangible results and concrete achievements. Recognize their practical contributions and problem-solving abilities.",
    },
    ReflectionBankEntry {
        id: "ip1",
        category: "analysis",
        question: "What complex problems have you successfully analyzed and solved?",
        focus: RiasecType::Investigative,
        context: "performance",
        manager_guidance: "Acknowledge their analytical thinking and research capabilities. Discuss the depth and quality of their problem-solving approach.",
    },
    ReflectionBankEntry {
        id: "ap1",
        category: "innovation",
        question: "What creative solutions or innovative approaches have you contributed?",
        focus: RiasecType::Artistic,
        context: "performance",
        manager_guidance: "Celebrate their creativity and unique perspectives. Recognize innovative thinking and original contributions to projects.",
    },
    ReflectionBankEntry {
        id: "sp1",
        category: "collaboration",
        question: "How have you supported and helped your colleagues succeed?",
        focus: RiasecType::Social,
        context: "performance",
        manager_guidance: "Recognize their interpersonal contributions and team support. Acknowledge their role in building positive team dynamics.",
    },
    ReflectionBankEntry {
        id: "ep1",
        category: "leadership",
        question: "What initiatives have you led or significantly influenced?",
        focus: RiasecType::Enterprising,
        context: "performance",
        manager_guidance: "Acknowledge their leadership and initiative-taking. Discuss their impact on results and their ability to drive change.",
    },
    ReflectionBankEntry {
        id: "cp1",
        category: "quality",
        question: "How have you maintained high standards and quality in your work?",
        focus: RiasecType::Conventional,
        context: "performance",
        manager_guidance: "Recognize their attention to detail and systematic approach. Acknowledge their reliability and consistent quality output.",
    },
    ReflectionBankEntry {
        id: "rcp1",
        category: "career-path",
        question: "What hands-on roles or technical specializations interest you for your career future?",
        focus: RiasecType::Realistic,
        context: "career_planning",
        manager_guidance: "Discuss practical career paths and technical advancement opportunities. Consider roles that involve hands-on work and tangible outcomes.",
    },
    ReflectionBankEntry {
        id: "icp1",
        category: "expertise",
        question: "What areas of specialization or research would you like to pursue long-term?",
        focus: RiasecType::Investigative,
        context: "career_planning",
        manager_guidance: "Support their desire for deep expertise. Discuss paths to becoming a subject matter expert or research-focused roles.",
    },
    ReflectionBankEntry {
        id: "acp1",
        category: "creative-growth",
        question: "How do you envision incorporating more creativity into your career progression?",
        focus: RiasecType::Artistic,
        context: "career_planning",
        manager_guidance: "Explore creative career paths and roles that allow for innovation and artistic expression. Consider design, strategy, or creative leadership roles.",
    },
    ReflectionBankEntry {
        id: "scp1",
        category: "people-impact",
        question: "What roles would allow you to have greater impact on people and teams?",
        focus: RiasecType::Social,
        context: "career_planning",
        manager_guidance: "Discuss people-focused career paths such as management, training, HR, or roles with significant interpersonal interaction.",
    },
    ReflectionBankEntry {
        id: "ecp1",
        category: "leadership-growth",
        question: "What leadership positions or business opportunities align with your career aspirations?",
        focus: RiasecType::Enterprising,
        context: "career_planning",
        manager_guidance: "Support their leadership ambitions. Discuss management tracks, business development roles, or entrepreneurial opportunities.",
    },
    ReflectionBankEntry {
        id: "ccp1",
        category: "systematic-growth",
        question: "What specialized or administrative roles would utilize your organizational strengths?",
        focus: RiasecType::Conventional,
        context: "career_planning",
        manager_guidance: "Explore roles that leverage their organizational skills such as operations, project management, or specialized administrative positions.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_dimension_has_three_coaching_questions() {
        for focus in RiasecType::ALL {
            let count = COACHING_BANK.iter().filter(|e| e.focus == focus).count();
            assert_eq!(count, 3, "{focus:?}");
        }
    }

    #[test]
    fn test_every_dimension_covers_all_reflection_contexts() {
        for focus in RiasecType::ALL {
            let contexts: Vec<&str> = REFLECTION_BANK
                .iter()
                .filter(|e| e.focus == focus)
                .map(|e| e.context)
                .collect();
            assert_eq!(
                contexts.iter().filter(|c| **c == "development").count(),
                2,
                "{focus:?}"
            );
            assert_eq!(
                contexts.iter().filter(|c| **c == "performance").count(),
                1,
                "{focus:?}"
            );
            assert_eq!(
                contexts.iter().filter(|c| **c == "career_planning").count(),
                1,
                "{focus:?}"
            );
        }
    }

    #[test]
    fn test_bank_ids_are_unique() {
        let coaching: HashSet<&str> = COACHING_BANK.iter().map(|e| e.id).collect();
        assert_eq!(coaching.len(), COACHING_BANK.len());
        let reflection: HashSet<&str> = REFLECTION_BANK.iter().map(|e| e.id).collect();
        assert_eq!(reflection.len(), REFLECTION_BANK.len());
    }

    #[test]
    fn test_selection_follows_requested_type_order() {
        let picked = coaching_for(&[RiasecType::Social, RiasecType::Realistic]);
        assert_eq!(picked.len(), 6);
        assert!(picked[..3].iter().all(|e| e.focus == RiasecType::Social));
        assert!(picked[3..].iter().all(|e| e.focus == RiasecType::Realistic));

        let picked = reflection_for(&[RiasecType::Conventional]);
        assert_eq!(picked.len(), 4);
        assert_eq!(picked[0].id, "cd1");
    }
}
