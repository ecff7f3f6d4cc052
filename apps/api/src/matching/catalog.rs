//! Job catalog — the read-only set of postings candidates are matched against.
//!
//! Loaded once at startup (embedded default or a JSON file) and shared via `Arc`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

const RECOMMENDATION_CATALOG_JSON: &str = include_str!("../../data/recommendation_catalog.json");
const INTERVIEW_CATALOG_JSON: &str = include_str!("../../data/interview_catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A static job posting. Order of `required_skills` carries no meaning for matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub required_skills: Vec<String>,
    pub salary_range: String,
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default)]
    pub growth_potential: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobCatalog {
    pub version: String,
    pub jobs: Vec<JobPosting>,
}

impl JobCatalog {
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let catalog: JobCatalog = serde_json::from_str(raw)?;
        catalog.warn_on_unscorable();
        Ok(catalog)
    }

    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.display().to_string(),
                source,
            })?;
        let catalog = Self::from_json_str(&raw)?;
        info!(
            "Loaded job catalog '{}' ({} jobs) from {}",
            catalog.version,
            catalog.jobs.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Catalog behind resume-based recommendations.
    pub async fn recommendations(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(p) => Self::load(p).await,
            None => Self::builtin_recommendations(),
        }
    }

    /// Catalog behind interview-answer matching.
    pub async fn interview(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(p) => Self::load(p).await,
            None => Self::builtin_interview(),
        }
    }

    pub fn builtin_recommendations() -> Result<Self, CatalogError> {
        Self::from_json_str(RECOMMENDATION_CATALOG_JSON)
    }

    pub fn builtin_interview() -> Result<Self, CatalogError> {
        Self::from_json_str(INTERVIEW_CATALOG_JSON)
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    fn warn_on_unscorable(&self) {
        for job in self.jobs.iter().filter(|j| j.required_skills.is_empty()) {
            warn!(
                "Catalog '{}': job '{}' at {} has no required skills and will never match",
                self.version, job.title, job.company
            );
        }
    }
}
