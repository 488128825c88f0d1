//! Canned recommendation and development-plan content, in the same
//! structured-text format the prompts request. Served through `parser.rs`
//! when the LLM path is unavailable or returns something unusable.
//! Coaching and reflection fallbacks do not live here: those come from
//! the static banks in `data::question_banks`.

pub const RECOMMENDATIONS_TEXT: &str = "\
TITLE: Data Analyst
MATCH: 85
DESCRIPTION: Analyze complex datasets to help organizations make data-driven decisions. Combines investigative thinking with practical problem-solving.
ACTIVITIES: Analyzing data patterns | Creating visualizations | Writing reports | Presenting findings
DEVELOPMENT: Statistical analysis | Data visualization tools | Business acumen
NEXT_STEPS: Learn SQL and Python | Take statistics course | Build portfolio projects | Network with data professionals

TITLE: UX Researcher
MATCH: 80
DESCRIPTION: Study user behavior and preferences to improve product design. Blends investigative research with creative problem-solving.
ACTIVITIES: Conducting user interviews | Analyzing usage data | Creating personas | Testing prototypes
DEVELOPMENT: Research methodologies | Data analysis | Communication skills
NEXT_STEPS: Learn UX research methods | Practice user interviews | Study human-computer interaction | Join UX communities

TITLE: Technical Writer
MATCH: 75
DESCRIPTION: Create clear documentation and guides for technical products. Combines analytical thinking with communication skills.
ACTIVITIES: Writing documentation | Researching technical topics | Collaborating with developers | Editing content
DEVELOPMENT: Technical knowledge | Writing skills | Documentation tools
NEXT_STEPS: Improve technical writing | Learn documentation tools | Build writing portfolio | Connect with tech writers";

pub const DEVELOPMENT_PLAN_TEXT: &str = "\
SHORT_TERM_GOALS (3-6 months):
GOAL: Build foundational skills in your top RIASEC area | ACTIONS: Take online course|Practice daily|Join relevant community | TIMELINE: 3 months
GOAL: Expand professional network in target field | ACTIONS: Attend 2 events monthly|Connect on LinkedIn|Schedule informational interviews | TIMELINE: Ongoing
GOAL: Create portfolio showcasing relevant skills | ACTIONS: Complete 3 projects|Document process|Gather feedback | TIMELINE: 4 months

LONG_TERM_GOALS (1-2 years):
GOAL: Transition to role aligned with RIASEC profile | ACTIONS: Update resume|Apply strategically|Leverage network | TIMELINE: 12-18 months
GOAL: Become recognized expert in chosen area | ACTIONS: Share knowledge|Speak at events|Publish articles | TIMELINE: 18-24 months

SKILL_GAPS:
Technical skills in primary interest area | Leadership and communication | Industry-specific knowledge | Project management | Data analysis

RESOURCES:
Coursera or edX courses | Professional associations | Industry publications | Mentorship programs | LinkedIn Learning | Relevant certifications";
