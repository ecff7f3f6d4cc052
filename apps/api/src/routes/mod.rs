pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers as interview;
use crate::jobs::handlers as jobs;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Resume API
        .route("/api/v1/resume/analyze", post(resume::handle_analyze_resume))
        .route("/api/v1/resume/analysis", get(resume::handle_get_analysis))
        // Jobs API
        .route(
            "/api/v1/jobs/recommendations",
            get(jobs::handle_recommendations),
        )
        .route("/api/v1/jobs/match", post(jobs::handle_match))
        // Interview API
        .route(
            "/api/v1/interview/analyze",
            post(interview::handle_analyze_answers),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::matching::catalog::JobCatalog;
    use crate::matching::normalizer::SkillExtractor;
    use crate::matching::scorer::MatchScorer;
    use crate::models::resume_analysis::ResumeAnalysis;
    use crate::resume::analyzer::{AnalyzerError, ResumeAnalyzer};

    struct UnreachableAnalyzer;

    #[async_trait]
    impl ResumeAnalyzer for UnreachableAnalyzer {
        async fn analyze(&self, _resume_text: &str) -> Result<ResumeAnalysis, AnalyzerError> {
            Err(AnalyzerError::EmptyOutput)
        }
    }

    fn test_config() -> Config {
        Config {
            database_url: "postgres://postgres@localhost/mentor_test".to_string(),
            port: 0,
            rust_log: "debug".to_string(),
            analyzer_program: "true".to_string(),
            analyzer_args: vec![],
            analyzer_timeout_secs: 1,
            recommendation_catalog_path: None,
            interview_catalog_path: None,
            skill_vocabulary_path: None,
            skill_phrase_matching: false,
        }
    }

    /// Router over a lazily-connected pool; only DB-free routes are exercised.
    fn test_app() -> Router {
        let config = test_config();
        let db = PgPoolOptions::new()
            .connect_lazy(&config.database_url)
            .unwrap();
        let state = AppState {
            db,
            config,
            analyzer: Arc::new(UnreachableAnalyzer),
            recommendation_scorer: Arc::new(MatchScorer::new(Arc::new(
                JobCatalog::builtin_recommendations().unwrap(),
            ))),
            interview_scorer: Arc::new(MatchScorer::new(Arc::new(
                JobCatalog::builtin_interview().unwrap(),
            ))),
            skill_extractor: Arc::new(SkillExtractor::default()),
        };
        build_router(state)
    }

    async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    #[tokio::test]
    async fn test_health_reports_catalog_versions() {
        let (status, body) = send(test_app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["catalogs"]["interview"], "interview-2024.1");
    }

    #[tokio::test]
    async fn test_match_without_analysis_is_empty() {
        let (status, body) =
            send(test_app(), Method::POST, "/api/v1/jobs/match", Some(json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "recommendations": [] }));
    }

    #[tokio::test]
    async fn test_match_ranks_recommendations() {
        let request = json!({
            "resume_analysis": {
                "skills": {"technical": ["JavaScript", "React", "Node.js", "MongoDB"], "soft": []},
                "experience": {"years": 3}
            }
        });
        let (status, body) =
            send(test_app(), Method::POST, "/api/v1/jobs/match", Some(request)).await;
        assert_eq!(status, StatusCode::OK);

        let recs = body["recommendations"].as_array().unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0]["title"], "Senior Software Engineer");
        assert_eq!(recs[0]["matchScore"], 100);
    }

    #[tokio::test]
    async fn test_interview_analyze_requires_answers() {
        let (status, body) = send(
            test_app(),
            Method::POST,
            "/api/v1/interview/analyze",
            Some(json!({ "answers": {} })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_interview_analyze_returns_feedback() {
        let request = json!({
            "answers": {
                "q1": {"category": "Technical Skills", "answer": "Go, Kubernetes and Docker"},
                "q2": {"category": "Career Goals", "answer": "Platform lead"}
            }
        });
        let (status, body) =
            send(test_app(), Method::POST, "/api/v1/interview/analyze", Some(request)).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["jobs"].as_array().unwrap().is_empty());
        assert_eq!(
            body["analysis"]["identified_skills"],
            json!(["kubernetes", "docker"])
        );
        assert_eq!(body["analysis"]["career_trajectory"], "Platform lead");
        assert_eq!(body["analysis"]["work_style"], Value::Null);
    }

    #[tokio::test]
    async fn test_match_tolerates_null_skill_list() {
        let request = json!({
            "resume_analysis": {"skills": {"technical": null, "soft": ["React"]}}
        });
        let (status, body) =
            send(test_app(), Method::POST, "/api/v1/jobs/match", Some(request)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "recommendations": [] }));
    }

    #[tokio::test]
    async fn test_match_tolerates_malformed_analysis() {
        let request = json!({ "resume_analysis": "not an analysis" });
        let (status, body) =
            send(test_app(), Method::POST, "/api/v1/jobs/match", Some(request)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "recommendations": [] }));
    }

    #[tokio::test]
    async fn test_interview_analyze_tolerates_missing_answer_text() {
        let request = json!({ "answers": {"1": {"category": "Work Culture"}} });
        let (status, body) =
            send(test_app(), Method::POST, "/api/v1/interview/analyze", Some(request)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["analysis"]["identified_skills"], json!([]));
        assert_eq!(body["analysis"]["work_style"], "");
    }

    #[tokio::test]
    async fn test_interview_analyze_orders_numeric_question_ids() {
        let request = json!({
            "answers": {
                "2": {"category": "Work Culture", "answer": "from q2"},
                "10": {"category": "Work Culture", "answer": "from q10"},
                "1": {"category": "Technical Skills", "answer": "react and aws"}
            }
        });
        let (status, body) =
            send(test_app(), Method::POST, "/api/v1/interview/analyze", Some(request)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["analysis"]["work_style"], "from q2");
        assert_eq!(body["analysis"]["identified_skills"], json!(["react", "aws"]));
    }

    #[tokio::test]
    async fn test_resume_analyze_rejects_blank_text() {
        let request = json!({
            "user_id": "0b6a0c2e-1f2d-4c3b-9a8e-7d6c5b4a3f21",
            "resume_text": "   "
        });
        let (status, _) =
            send(test_app(), Method::POST, "/api/v1/resume/analyze", Some(request)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
