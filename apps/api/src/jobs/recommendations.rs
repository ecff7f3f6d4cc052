use serde::Serialize;

use crate::matching::policy::ScoringPolicy;
use crate::matching::scorer::{MatchResult, MatchScorer};
use crate::models::resume_analysis::ResumeAnalysis;

/// A recommendation as returned to clients of the jobs API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecommendation {
    pub title: String,
    pub company: String,
    pub match_score: u32,
    pub required_skills: Vec<String>,
    pub location: String,
    pub salary: String,
    pub missing_skills: Vec<String>,
}

impl From<MatchResult> for JobRecommendation {
    fn from(result: MatchResult) -> Self {
        Self {
            title: result.job.title,
            company: result.job.company,
            match_score: result.match_score,
            required_skills: result.job.required_skills,
            location: result.job.location,
            salary: result.job.salary_range,
            missing_skills: result.missing_skills,
        }
    }
}

/// Ranks the catalog for a resume analysis. No analysis means no recommendations.
pub fn recommend_for_analysis(
    analysis: Option<&ResumeAnalysis>,
    scorer: &MatchScorer,
) -> Vec<JobRecommendation> {
    let Some(analysis) = analysis else {
        return Vec::new();
    };
    let candidate = analysis.candidate_skills();
    scorer
        .rank(&candidate, &ScoringPolicy::RESUME_RECOMMENDATIONS)
        .into_iter()
        .map(JobRecommendation::from)
        .collect()
}
