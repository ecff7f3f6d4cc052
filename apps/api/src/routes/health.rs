use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version and the loaded catalog versions.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "mentor-api",
        "catalogs": {
            "recommendations": state.recommendation_scorer.catalog().version,
            "interview": state.interview_scorer.catalog().version,
        },
        "skill_phrase_matching": state.config.skill_phrase_matching
    }))
}
