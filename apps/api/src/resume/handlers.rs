//! Axum route handlers for the Resume API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume_analysis::ResumeAnalysis;
use crate::resume::store::{load_analysis, upsert_analysis};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeResumeRequest {
    pub user_id: Uuid,
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResumeResponse {
    pub message: String,
    pub analysis: ResumeAnalysis,
}

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

/// POST /api/v1/resume/analyze
///
/// Runs the external analyzer over extracted resume text and stores the result
/// as the user's current analysis.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeResumeRequest>,
) -> Result<Json<AnalyzeResumeResponse>, AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "No text could be extracted from the resume".to_string(),
        ));
    }

    let analysis = state.analyzer.analyze(&request.resume_text).await?;
    upsert_analysis(&state.db, request.user_id, &analysis).await?;
    info!("Stored resume analysis for user {}", request.user_id);

    Ok(Json(AnalyzeResumeResponse {
        message: "Resume analyzed successfully".to_string(),
        analysis,
    }))
}

/// GET /api/v1/resume/analysis?user_id=
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ResumeAnalysis>, AppError> {
    load_analysis(&state.db, params.user_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No resume analysis found".to_string()))
}
