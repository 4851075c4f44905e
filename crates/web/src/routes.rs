use axum::Router;

use crate::features;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api/assessments", features::assessments::routes::routes())
        .nest("/api/stats", features::stats::routes::routes())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD;
    use storage::AssessmentStore;
    use storage::dto::assessment::NewAssessment;
    use tower::ServiceExt;
    use vision::analysis::{IndicatorScore, OverallStatus, RiskLevel, SafetyCriteria};
    use vision::{SafetyAnalysis, SafetyAnalyzer, VisionError};

    use super::*;

    const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46];
    const BOUNDARY: &str = "test-boundary";

    struct StubAnalyzer(SafetyAnalysis);

    #[async_trait::async_trait]
    impl SafetyAnalyzer for StubAnalyzer {
        async fn analyze(&self, _image: &[u8]) -> vision::error::Result<SafetyAnalysis> {
            Ok(self.0.clone())
        }
    }

    struct FailingAnalyzer;

    #[async_trait::async_trait]
    impl SafetyAnalyzer for FailingAnalyzer {
        async fn analyze(&self, _image: &[u8]) -> vision::error::Result<SafetyAnalysis> {
            Err(VisionError::Configuration(
                "Gemini API key is not set".to_string(),
            ))
        }
    }

    fn flagged_analysis() -> SafetyAnalysis {
        SafetyAnalysis {
            overall_status: OverallStatus::Flagged,
            confidence: 72.5,
            criteria: SafetyCriteria {
                eye_movement: IndicatorScore {
                    score: 40.0,
                    status: "abnormal".to_string(),
                },
                facial_expression: IndicatorScore {
                    score: 85.0,
                    status: "normal".to_string(),
                },
                head_position: IndicatorScore {
                    score: 70.0,
                    status: "stable".to_string(),
                },
                skin_color: IndicatorScore {
                    score: 60.0,
                    status: "normal".to_string(),
                },
            },
            detected_issues: vec!["bloodshot eyes".to_string()],
            risk_level: RiskLevel::Medium,
            recommendations: vec!["escalate to supervisor".to_string()],
        }
    }

    fn test_app(analyzer: Arc<dyn SafetyAnalyzer>) -> (Router, AssessmentStore) {
        let store = AssessmentStore::new();
        let state = AppState {
            store: store.clone(),
            analyzer,
        };
        (router(state), store)
    }

    fn seed(store: &AssessmentStore, worker_id: &str, status: &str, confidence: f64) -> uuid::Uuid {
        store
            .create(NewAssessment {
                worker_id: worker_id.to_string(),
                worker_name: format!("Worker {worker_id}"),
                shift: "morning".to_string(),
                image_data: "aGVsbG8=".to_string(),
                status: status.to_string(),
                confidence,
                ai_analysis: None,
                criteria: None,
            })
            .id
    }

    fn multipart_body(fields: &[(&str, &str)], image: Option<&[u8]>) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some(image) = image {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"selfie.jpg\"\r\nContent-Type: image/jpeg\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(image);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn create_request(fields: &[(&str, &str)], image: Option<&[u8]>) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/assessments")
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(multipart_body(fields, image)))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn create_persists_the_judgement_and_returns_the_record() {
        let (app, store) = test_app(Arc::new(StubAnalyzer(flagged_analysis())));

        let fields = [("workerId", "W-42"), ("workerName", "Dana"), ("shift", "night")];
        let response = app.oneshot(create_request(&fields, Some(JPEG))).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["workerId"], "W-42");
        assert_eq!(body["workerName"], "Dana");
        assert_eq!(body["shift"], "night");
        assert_eq!(body["status"], "flagged");
        assert_eq!(body["confidence"], 72.5);
        assert_eq!(body["criteria"]["eyeMovement"]["status"], "abnormal");
        assert_eq!(body["aiAnalysis"]["riskLevel"], "medium");
        assert!(body["reviewedBy"].is_null());

        assert_eq!(store.len(), 1);
        let id: uuid::Uuid = body["id"].as_str().unwrap().parse().unwrap();
        let stored = store.get(id).unwrap();
        assert_eq!(stored.image_data, STANDARD.encode(JPEG));
    }

    #[tokio::test]
    async fn create_without_image_is_rejected() {
        let (app, store) = test_app(Arc::new(StubAnalyzer(flagged_analysis())));

        let fields = [("workerId", "W-42"), ("workerName", "Dana"), ("shift", "night")];
        let response = app.oneshot(create_request(&fields, None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Image file is required");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn create_without_worker_fields_is_rejected() {
        let (app, store) = test_app(Arc::new(StubAnalyzer(flagged_analysis())));

        let response = app
            .oneshot(create_request(&[("workerId", "W-42")], Some(JPEG)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn create_with_non_image_bytes_is_rejected() {
        let (app, store) = test_app(Arc::new(StubAnalyzer(flagged_analysis())));

        let fields = [("workerId", "W-42"), ("workerName", "Dana"), ("shift", "night")];
        let response = app
            .oneshot(create_request(&fields, Some(b"not an image")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn failed_analysis_creates_no_record() {
        let (app, store) = test_app(Arc::new(FailingAnalyzer));

        let fields = [("workerId", "W-42"), ("workerName", "Dana"), ("shift", "night")];
        let response = app.oneshot(create_request(&fields, Some(JPEG))).await.unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(
            body["error"],
            "AI analysis failed. Please check your API configuration."
        );
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn list_returns_all_records_newest_first() {
        let (app, store) = test_app(Arc::new(FailingAnalyzer));
        let a = seed(&store, "W-1", "passed", 90.0);
        let b = seed(&store, "W-2", "flagged", 40.0);
        let c = seed(&store, "W-3", "rejected", 10.0);

        let request = Request::builder()
            .uri("/api/assessments")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let records = body.as_array().unwrap();
        assert_eq!(records.len(), 3);

        let ids: std::collections::HashSet<String> = records
            .iter()
            .map(|r| r["id"].as_str().unwrap().to_string())
            .collect();
        let expected: std::collections::HashSet<String> =
            [a, b, c].iter().map(|id| id.to_string()).collect();
        assert_eq!(ids, expected);

        // ISO-8601 strings compare in timestamp order.
        let timestamps: Vec<&str> = records
            .iter()
            .map(|r| r["createdAt"].as_str().unwrap())
            .collect();
        assert!(timestamps.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[tokio::test]
    async fn get_unknown_id_is_404() {
        let (app, _store) = test_app(Arc::new(FailingAnalyzer));

        let request = Request::builder()
            .uri(format!("/api/assessments/{}", uuid::Uuid::new_v4()))
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Assessment not found");
    }

    #[tokio::test]
    async fn get_with_malformed_id_is_400() {
        let (app, _store) = test_app(Arc::new(FailingAnalyzer));

        let request = Request::builder()
            .uri("/api/assessments/not-a-uuid")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn patch_applies_the_reviewer_decision() {
        let (app, store) = test_app(Arc::new(FailingAnalyzer));
        let id = seed(&store, "W-7", "flagged", 45.0);
        let before = store.get(id).unwrap();

        let request = Request::builder()
            .method("PATCH")
            .uri(format!("/api/assessments/{id}"))
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"status":"passed","reviewedBy":"supervisor-7","reviewedAt":"2026-08-26T08:00:00"}"#,
            ))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "passed");
        assert_eq!(body["reviewedBy"], "supervisor-7");
        assert_eq!(body["reviewedAt"], "2026-08-26T08:00:00");

        let after = store.get(id).unwrap();
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.worker_id, before.worker_id);
        assert_eq!(after.confidence, before.confidence);
    }

    #[tokio::test]
    async fn patch_unknown_id_is_404() {
        let (app, store) = test_app(Arc::new(FailingAnalyzer));
        seed(&store, "W-7", "flagged", 45.0);

        let request = Request::builder()
            .method("PATCH")
            .uri(format!("/api/assessments/{}", uuid::Uuid::new_v4()))
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"status":"rejected"}"#))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn flagged_route_returns_only_flagged_records() {
        let (app, store) = test_app(Arc::new(FailingAnalyzer));
        seed(&store, "W-1", "passed", 90.0);
        let flagged = seed(&store, "W-2", "flagged", 40.0);

        let request = Request::builder()
            .uri("/api/assessments/status/flagged")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let records = body.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["id"], flagged.to_string());
    }

    #[tokio::test]
    async fn status_route_matches_arbitrary_values() {
        let (app, store) = test_app(Arc::new(FailingAnalyzer));
        seed(&store, "W-1", "passed", 90.0);
        let odd = seed(&store, "W-2", "under-review", 60.0);

        let request = Request::builder()
            .uri("/api/assessments/status/under-review")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let records = body.as_array().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["id"], odd.to_string());
    }

    #[tokio::test]
    async fn today_stats_aggregates_the_day() {
        let (app, store) = test_app(Arc::new(FailingAnalyzer));
        seed(&store, "W-1", "passed", 90.0);
        seed(&store, "W-2", "flagged", 40.0);
        seed(&store, "W-3", "flagged", 50.0);

        let request = Request::builder()
            .uri("/api/stats/today")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["total"], 3);
        assert_eq!(body["passed"], 1);
        assert_eq!(body["flagged"], 2);
        assert_eq!(body["rejected"], 0);
        assert!((body["avgConfidence"].as_f64().unwrap() - 60.0).abs() < 1e-9);
        assert!((body["successRate"].as_f64().unwrap() - 100.0 / 3.0).abs() < 1e-9);
    }
}
