//! Axum route handlers for the Jobs API.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::recommendations::{recommend_for_analysis, JobRecommendation};
use crate::models::lenient;
use crate::models::resume_analysis::ResumeAnalysis;
use crate::resume::store::load_analysis;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub resume_analysis: Option<ResumeAnalysis>,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<JobRecommendation>,
}

/// GET /api/v1/jobs/recommendations?user_id=
///
/// Ranks the recommendation catalog against the user's stored resume analysis.
/// Users without an analysis get an empty list.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let analysis = load_analysis(&state.db, params.user_id).await?;
    let recommendations =
        recommend_for_analysis(analysis.as_ref(), &state.recommendation_scorer);
    Ok(Json(RecommendationsResponse { recommendations }))
}

/// POST /api/v1/jobs/match
///
/// Same ranking over an analysis supplied in the request body.
pub async fn handle_match(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Json<RecommendationsResponse> {
    let recommendations = recommend_for_analysis(
        request.resume_analysis.as_ref(),
        &state.recommendation_scorer,
    );
    Json(RecommendationsResponse { recommendations })
}
