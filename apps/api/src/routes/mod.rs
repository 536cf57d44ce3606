pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assessment::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Assessment API
        .route(
            "/api/v1/assessments/evaluate",
            post(handlers::handle_evaluate),
        )
        // Career catalog
        .route("/api/v1/careers", get(handlers::handle_list_careers))
        .route(
            "/api/v1/careers/:title/roadmap",
            get(handlers::handle_career_roadmap),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::assessment::catalog::CareerCatalog;
    use crate::config::Config;

    fn test_router() -> Router {
        build_router(AppState {
            catalog: Arc::new(CareerCatalog::default()),
            config: Config {
                port: 0,
                rust_log: "debug".to_string(),
            },
        })
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = test_router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(get_request("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "compass-api");
    }

    #[tokio::test]
    async fn test_evaluate_empty_answers() {
        let (status, body) = send(post_json(
            "/api/v1/assessments/evaluate",
            json!({ "answers": {} }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile"]["field_interest"], "Technology & Software");
        assert_eq!(body["matches"].as_array().unwrap().len(), 5);
        assert_eq!(body["matches"][0]["title"], "Software Engineer");
        assert_eq!(body["roadmap"]["title"], "Software Engineer Learning Path");
        assert_eq!(body["roadmap"]["milestones"][0]["status"], "IN_PROGRESS");
        assert!(body["assessment_id"].is_string());
    }

    #[tokio::test]
    async fn test_evaluate_mixed_answer_types() {
        let (status, body) = send(post_json(
            "/api/v1/assessments/evaluate",
            json!({
                "answers": {
                    "1": "Postgraduate",
                    "3": 5,
                    "7": "5",
                    "4": 2,
                    "9": 2,
                    "11": 5
                }
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile"]["education_level"], "Postgraduate");
        assert_eq!(body["profile"]["analytical_skill"], 5);
        assert_eq!(body["matches"][0]["title"], "Software Engineer");
        assert_eq!(body["matches"][0]["match_score"], 109);
        assert_eq!(body["matches"][0]["match_percent"], 100);
    }

    #[tokio::test]
    async fn test_evaluate_tolerates_null_and_float_answers() {
        let (status, body) = send(post_json(
            "/api/v1/assessments/evaluate",
            json!({
                "answers": {
                    "1": null,
                    "3": 4.0,
                    "4": 4.5,
                    "7": "4.0",
                    "9": null,
                    "11": true
                }
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["profile"]["education_level"], "Undergraduate");
        assert_eq!(body["profile"]["technical_skill"], 4);
        assert_eq!(body["profile"]["communication_skill"], 3);
        assert_eq!(body["profile"]["analytical_skill"], 4);
        assert_eq!(body["profile"]["creativity_skill"], 3);
        assert_eq!(
            body["profile"]["domain_interest_scores"]["Technology & Software"],
            3
        );
        assert_eq!(body["matches"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_evaluate_rejects_unknown_question_ids() {
        let (status, body) = send(post_json(
            "/api/v1/assessments/evaluate",
            json!({ "answers": { "42": 3 } }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["message"].as_str().unwrap().contains("42"));
    }

    #[tokio::test]
    async fn test_list_careers() {
        let (status, body) = send(get_request("/api/v1/careers")).await;
        assert_eq!(status, StatusCode::OK);
        let careers = body.as_array().unwrap();
        assert_eq!(careers.len(), 10);
        assert_eq!(careers[0]["title"], "Software Engineer");
    }

    #[tokio::test]
    async fn test_career_roadmap() {
        let (status, body) = send(get_request("/api/v1/careers/Data%20Scientist/roadmap")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["title"], "Data Scientist Learning Path");
        assert_eq!(body["milestones"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_unknown_career_roadmap_is_404() {
        let (status, body) = send(get_request("/api/v1/careers/Astronaut/roadmap")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
