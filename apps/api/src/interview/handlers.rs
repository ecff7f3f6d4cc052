//! Axum route handlers for the Interview API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::interview::answers::{analyze_answers, InterviewAnalysis, InterviewAnswers};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeAnswersRequest {
    #[serde(default)]
    pub answers: Option<InterviewAnswers>,
}

/// POST /api/v1/interview/analyze
///
/// Extracts skills from technical answers and returns up to three matching jobs
/// plus narrative feedback.
pub async fn handle_analyze_answers(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeAnswersRequest>,
) -> Result<Json<InterviewAnalysis>, AppError> {
    let answers = request
        .answers
        .filter(|a| !a.is_empty())
        .ok_or_else(|| AppError::Validation("No answers provided".to_string()))?;

    let result = analyze_answers(&answers, &state.skill_extractor, &state.interview_scorer);
    info!(
        "Analyzed {} interview answers: {} skills, {} matching jobs",
        answers.len(),
        result.analysis.identified_skills.len(),
        result.jobs.len()
    );

    Ok(Json(result))
}
