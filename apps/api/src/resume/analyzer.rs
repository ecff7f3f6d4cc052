//! Resume analyzer — the boundary to the external analysis process.
//!
//! The external program receives the resume text as its final argument and
//! prints one JSON document on stdout: either a `ResumeAnalysis` or
//! `{"error": "..."}`. Its internals are not this service's concern.
//!
//! `AppState` holds an `Arc<dyn ResumeAnalyzer>`, so tests and alternative
//! backends can be swapped in without touching handlers.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::models::resume_analysis::ResumeAnalysis;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("failed to start analyzer '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("analyzer exited with status {status}: {stderr}")]
    ExitStatus { status: String, stderr: String },

    #[error("analyzer timed out after {0:?}")]
    Timeout(Duration),

    #[error("analyzer produced no output")]
    EmptyOutput,

    #[error("analyzer output is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("analyzer reported an error: {0}")]
    Reported(String),
}

#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(&self, resume_text: &str) -> Result<ResumeAnalysis, AnalyzerError>;
}

/// Runs a configured external program per resume.
#[derive(Debug, Clone)]
pub struct CommandResumeAnalyzer {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandResumeAnalyzer {
    pub fn new(program: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args,
            timeout,
        }
    }
}

#[async_trait]
impl ResumeAnalyzer for CommandResumeAnalyzer {
    async fn analyze(&self, resume_text: &str) -> Result<ResumeAnalysis, AnalyzerError> {
        info!("Starting resume analysis via '{}'", self.program);

        let mut command = Command::new(&self.program);
        command.args(&self.args).arg(resume_text).kill_on_drop(true);

        let output = tokio::time::timeout(self.timeout, command.output())
            .await
            .map_err(|_| AnalyzerError::Timeout(self.timeout))?
            .map_err(|source| AnalyzerError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !output.status.success() {
            return Err(AnalyzerError::ExitStatus {
                status: output.status.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }
        if !stderr.trim().is_empty() {
            warn!("Analyzer stderr: {}", stderr.trim());
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        debug!("Analyzer produced {} bytes", stdout.len());
        let analysis = parse_analyzer_output(&stdout)?;
        info!("Resume analysis completed");
        Ok(analysis)
    }
}

/// Parses the analyzer's stdout, surfacing `{"error": ...}` documents as errors.
pub fn parse_analyzer_output(stdout: &str) -> Result<ResumeAnalysis, AnalyzerError> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Err(AnalyzerError::EmptyOutput);
    }

    let value: Value = serde_json::from_str(trimmed)?;
    if let Some(err) = value.get("error").filter(|e| !e.is_null()) {
        let message = err
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| err.to_string());
        return Err(AnalyzerError::Reported(message));
    }

    Ok(serde_json::from_value(value)?)
}
