mod config;
mod db;
mod errors;
mod interview;
mod jobs;
mod matching;
mod models;
mod resume;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::matching::catalog::JobCatalog;
use crate::matching::normalizer::{ExtractionMode, SkillExtractor, SkillVocabulary};
use crate::matching::scorer::MatchScorer;
use crate::resume::analyzer::CommandResumeAnalyzer;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Mentor API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Load job catalogs (embedded defaults unless overridden)
    let recommendation_catalog =
        JobCatalog::recommendations(config.recommendation_catalog_path.as_deref()).await?;
    let interview_catalog = JobCatalog::interview(config.interview_catalog_path.as_deref()).await?;
    info!(
        "Job catalogs ready: '{}' ({} jobs), '{}' ({} jobs)",
        recommendation_catalog.version,
        recommendation_catalog.len(),
        interview_catalog.version,
        interview_catalog.len()
    );

    // Initialize skill extraction
    let vocabulary = match &config.skill_vocabulary_path {
        Some(path) => SkillVocabulary::load(path).await?,
        None => SkillVocabulary::default(),
    };
    let mode = if config.skill_phrase_matching {
        ExtractionMode::PhraseAware
    } else {
        ExtractionMode::WordTokens
    };
    let skill_extractor = SkillExtractor::new(vocabulary, mode);
    info!(
        "Skill extractor initialized: {} terms, {:?}",
        skill_extractor.vocabulary().len(),
        skill_extractor.mode()
    );

    // Initialize resume analyzer
    let analyzer = CommandResumeAnalyzer::new(
        config.analyzer_program.clone(),
        config.analyzer_args.clone(),
        Duration::from_secs(config.analyzer_timeout_secs),
    );
    info!("Resume analyzer: {}", config.analyzer_program);

    // Build app state
    let state = AppState {
        db,
        config: config.clone(),
        analyzer: Arc::new(analyzer),
        recommendation_scorer: Arc::new(MatchScorer::new(Arc::new(recommendation_catalog))),
        interview_scorer: Arc::new(MatchScorer::new(Arc::new(interview_catalog))),
        skill_extractor: Arc::new(skill_extractor),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client's deploy URL is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
