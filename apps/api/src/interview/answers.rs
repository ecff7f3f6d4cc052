//! Interview answer analysis — routes each answer by category, extracts skills
//! from technical answers and matches them against the interview catalog.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::matching::catalog::JobPosting;
use crate::matching::normalizer::{SkillExtractor, SkillSet};
use crate::matching::policy::ScoringPolicy;
use crate::matching::scorer::{MatchResult, MatchScorer};
use crate::models::lenient;

pub const TECHNICAL_SKILLS: &str = "Technical Skills";
pub const EXPERIENCE: &str = "Experience";
pub const WORK_CULTURE: &str = "Work Culture";
pub const CAREER_GOALS: &str = "Career Goals";
pub const EXPECTATIONS: &str = "Expectations";

const CAREER_SUGGESTIONS: &[&str] = &[
    "Consider pursuing cloud certifications to enhance your cloud computing expertise.",
    "Learning containerization and orchestration tools can open up DevOps opportunities.",
    "Developing expertise in AI/ML technologies can lead to specialized roles.",
    "Full-stack development skills are highly valued in startups and tech companies.",
];

/// Missing or non-string fields read as empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterviewAnswer {
    #[serde(default, deserialize_with = "lenient::string")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient::string")]
    pub answer: String,
}

/// Question id → answer, as received. Keys are only used for ordering; see
/// [`in_question_order`].
pub type InterviewAnswers = IndexMap<String, InterviewAnswer>;

/// Canonical array-index keys ("0", "2", "10") first in ascending numeric
/// order, then every other key in arrival order.
pub fn in_question_order(answers: &InterviewAnswers) -> Vec<&InterviewAnswer> {
    let (mut indexed, named): (Vec<_>, Vec<_>) =
        answers.iter().partition(|(id, _)| array_index(id).is_some());
    indexed.sort_by_key(|(id, _)| array_index(id));
    indexed.into_iter().chain(named).map(|(_, qa)| qa).collect()
}

fn array_index(key: &str) -> Option<u32> {
    let n: u32 = key.parse().ok()?;
    (n != u32::MAX && n.to_string() == key).then_some(n)
}

/// A catalog posting annotated with the candidate's score.
#[derive(Debug, Clone, Serialize)]
pub struct MatchedJob {
    #[serde(flatten)]
    pub job: JobPosting,
    pub match_score: u32,
}

impl From<MatchResult> for MatchedJob {
    fn from(result: MatchResult) -> Self {
        Self {
            job: result.job,
            match_score: result.match_score,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnswerFeedback {
    pub skills_feedback: String,
    pub identified_skills: Vec<String>,
    pub work_style: Option<String>,
    pub career_trajectory: Option<String>,
    pub career_suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InterviewAnalysis {
    pub jobs: Vec<MatchedJob>,
    pub analysis: AnswerFeedback,
}

/// Narrative answers grouped by category, in answer order.
#[derive(Debug, Default)]
struct Narratives {
    experience: Vec<String>,
    work_style: Vec<String>,
    career_goals: Vec<String>,
    expectations: Option<String>,
}

pub fn analyze_answers(
    answers: &InterviewAnswers,
    extractor: &SkillExtractor,
    scorer: &MatchScorer,
) -> InterviewAnalysis {
    let mut skills: Vec<String> = Vec::new();
    let mut narratives = Narratives::default();

    for qa in in_question_order(answers) {
        match qa.category.as_str() {
            TECHNICAL_SKILLS => skills.extend(extractor.extract(&qa.answer).to_vec()),
            EXPERIENCE => narratives.experience.push(qa.answer.clone()),
            WORK_CULTURE => narratives.work_style.push(qa.answer.clone()),
            CAREER_GOALS => narratives.career_goals.push(qa.answer.clone()),
            // last answer wins
            EXPECTATIONS => narratives.expectations = Some(qa.answer.clone()),
            _ => {}
        }
    }

    let skills: SkillSet = skills.into_iter().collect();
    tracing::debug!(
        identified = skills.len(),
        salary_expectations = narratives.expectations.is_some(),
        "Analyzed interview answers"
    );

    let jobs = scorer
        .rank(&skills, &ScoringPolicy::INTERVIEW_MATCHES)
        .into_iter()
        .map(MatchedJob::from)
        .collect();

    InterviewAnalysis {
        jobs,
        analysis: AnswerFeedback {
            skills_feedback: build_skills_feedback(&skills, !narratives.experience.is_empty()),
            identified_skills: skills.to_vec(),
            work_style: narratives.work_style.into_iter().next(),
            career_trajectory: narratives.career_goals.into_iter().next(),
            career_suggestions: CAREER_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        },
    }
}

fn build_skills_feedback(skills: &SkillSet, has_experience: bool) -> String {
    let mut feedback = if skills.is_empty() {
        "Consider highlighting more specific technical skills in your responses. ".to_string()
    } else {
        format!(
            "Based on your responses, you have demonstrated skills in {}. ",
            skills.iter().collect::<Vec<_>>().join(", ")
        )
    };

    feedback.push_str(if has_experience {
        "Your project experience shows practical application of these skills. "
    } else {
        "Try to provide more specific examples of projects where you've applied your skills. "
    });

    feedback
}
