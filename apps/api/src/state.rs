use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::matching::normalizer::SkillExtractor;
use crate::matching::scorer::MatchScorer;
use crate::resume::analyzer::ResumeAnalyzer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Pluggable resume analyzer. Default: CommandResumeAnalyzer.
    pub analyzer: Arc<dyn ResumeAnalyzer>,
    /// Scorer over the recommendation catalog (resume-based flow).
    pub recommendation_scorer: Arc<MatchScorer>,
    /// Scorer over the interview catalog (answer-based flow).
    pub interview_scorer: Arc<MatchScorer>,
    pub skill_extractor: Arc<SkillExtractor>,
}
