//! Match Scorer — scores a candidate skill set against every job in a catalog
//! under a `ScoringPolicy`, then filters and ranks.
//!
//! Algorithm, per job:
//! 1. A required skill counts as matched when any candidate token matches it
//!    under the policy's comparison mode.
//! 2. score = round_half_up(matched / required × 100), capped at `cap_percent`.
//! 3. Jobs with no required skills score 0 and are never returned.
//! 4. Keep `score > inclusion_threshold`, stable sort descending, truncate.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::matching::catalog::{JobCatalog, JobPosting};
use crate::matching::normalizer::{normalize_token, SkillSet};
use crate::matching::policy::ScoringPolicy;

/// A job paired with its score for one candidate. Ephemeral, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub job: JobPosting,
    pub match_score: u32,
    /// Required skills the candidate lacks, in catalog order.
    pub missing_skills: Vec<String>,
}

pub struct MatchScorer {
    catalog: Arc<JobCatalog>,
}

impl MatchScorer {
    pub fn new(catalog: Arc<JobCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &JobCatalog {
        &self.catalog
    }

    pub fn score(&self, candidate: &SkillSet, job: &JobPosting, policy: &ScoringPolicy) -> u32 {
        let total = job.required_skills.len();
        if total == 0 {
            return 0;
        }
        let matched = job
            .required_skills
            .iter()
            .filter(|r| is_covered(candidate, r, policy))
            .count();
        percent_half_up(matched, total).min(policy.cap_percent)
    }

    pub fn missing_skills(
        &self,
        candidate: &SkillSet,
        job: &JobPosting,
        policy: &ScoringPolicy,
    ) -> Vec<String> {
        job.required_skills
            .iter()
            .filter(|r| !is_covered(candidate, r, policy))
            .cloned()
            .collect()
    }

    /// Scores, filters and ranks the whole catalog. An empty result is a valid outcome.
    pub fn rank(&self, candidate: &SkillSet, policy: &ScoringPolicy) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = self
            .catalog
            .jobs
            .iter()
            .filter(|job| !job.required_skills.is_empty())
            .filter_map(|job| {
                let match_score = self.score(candidate, job, policy);
                policy.includes(match_score).then(|| MatchResult {
                    job: job.clone(),
                    match_score,
                    missing_skills: self.missing_skills(candidate, job, policy),
                })
            })
            .collect();

        // sort_by is stable: ties keep catalog order
        results.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        if let Some(limit) = policy.max_results {
            results.truncate(limit);
        }

        debug!(
            policy = policy.name,
            catalog = %self.catalog.version,
            candidate_skills = candidate.len(),
            matched_jobs = results.len(),
            "Ranked job catalog"
        );

        results
    }
}

fn is_covered(candidate: &SkillSet, required: &str, policy: &ScoringPolicy) -> bool {
    let required = normalize_token(required);
    candidate
        .iter()
        .any(|c| policy.comparison.matches(c, &required))
}

/// `round(part / whole × 100)` with halves rounded up, in integer arithmetic.
fn percent_half_up(part: usize, whole: usize) -> u32 {
    ((200 * part + whole) / (2 * whole)) as u32
}
