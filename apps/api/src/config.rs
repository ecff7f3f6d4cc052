use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub rust_log: String,
    pub analyzer_program: String,
    pub analyzer_args: Vec<String>,
    pub analyzer_timeout_secs: u64,
    /// Overrides the embedded recommendation catalog when set.
    pub recommendation_catalog_path: Option<PathBuf>,
    /// Overrides the embedded interview catalog when set.
    pub interview_catalog_path: Option<PathBuf>,
    pub skill_vocabulary_path: Option<PathBuf>,
    pub skill_phrase_matching: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            analyzer_program: std::env::var("ANALYZER_PROGRAM")
                .unwrap_or_else(|_| "python".to_string()),
            analyzer_args: split_args(
                &std::env::var("ANALYZER_ARGS").unwrap_or_else(|_| "ai_analyzer.py".to_string()),
            ),
            analyzer_timeout_secs: std::env::var("ANALYZER_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse::<u64>()
                .context("ANALYZER_TIMEOUT_SECS must be a whole number of seconds")?,
            recommendation_catalog_path: optional_path("RECOMMENDATION_CATALOG_PATH"),
            interview_catalog_path: optional_path("INTERVIEW_CATALOG_PATH"),
            skill_vocabulary_path: optional_path("SKILL_VOCABULARY_PATH"),
            skill_phrase_matching: parse_flag(
                &std::env::var("SKILL_PHRASE_MATCHING").unwrap_or_default(),
            ),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_path(key: &str) -> Option<PathBuf> {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
}

fn split_args(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(str::to_string).collect()
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
