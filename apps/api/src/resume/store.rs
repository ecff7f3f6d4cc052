use anyhow::Context;
use sqlx::PgPool;
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume_analysis::{ResumeAnalysis, ResumeAnalysisRow};

/// Inserts or replaces the user's current resume analysis.
pub async fn upsert_analysis(
    pool: &PgPool,
    user_id: Uuid,
    analysis: &ResumeAnalysis,
) -> Result<ResumeAnalysisRow, AppError> {
    let document = serde_json::to_value(analysis).context("serializing resume analysis")?;

    let row = sqlx::query_as::<_, ResumeAnalysisRow>(
        r#"
        INSERT INTO resume_analyses (user_id, analysis)
        VALUES ($1, $2)
        ON CONFLICT (user_id)
        DO UPDATE SET analysis = EXCLUDED.analysis, updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(document)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

pub async fn get_analysis_row(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<ResumeAnalysisRow>, AppError> {
    let row = sqlx::query_as::<_, ResumeAnalysisRow>(
        "SELECT * FROM resume_analyses WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Loads and decodes the user's analysis. A stored document that no longer
/// decodes is treated as absent.
pub async fn load_analysis(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Option<ResumeAnalysis>, AppError> {
    let Some(row) = get_analysis_row(pool, user_id).await? else {
        return Ok(None);
    };
    Ok(decode_row(row))
}

fn decode_row(row: ResumeAnalysisRow) -> Option<ResumeAnalysis> {
    match serde_json::from_value::<ResumeAnalysis>(row.analysis) {
        Ok(analysis) => Some(analysis),
        Err(e) => {
            warn!("Stored resume analysis for user {} is malformed: {e}", row.user_id);
            None
        }
    }
}
