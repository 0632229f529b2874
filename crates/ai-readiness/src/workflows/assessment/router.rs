use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use super::catalog::QuestionCatalog;
use super::domain::{AnswerStore, Question};
use super::lead::LeadCapture;
use super::report::{Report, ReportRequester, ReportSource};
use super::scoring::{ReadinessLevel, ScoringEngine};

/// Router exposing the quiz catalog, scoring, and report generation.
///
/// Each request carries its full answer set; no session state is kept between calls.
pub fn assessment_router(requester: Arc<ReportRequester>) -> Router {
    Router::new()
        .route("/api/v1/assessment/questions", get(questions_handler))
        .route("/api/v1/assessment/score", post(score_handler))
        .route("/api/v1/assessment/report", post(report_handler))
        .route("/api/v1/assessment/lead", post(lead_handler))
        .with_state(requester)
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnswersPayload {
    #[serde(default)]
    pub answers: AnswerStore,
}

#[derive(Debug, Serialize)]
struct CatalogView<'a> {
    total: usize,
    questions: &'a [Question],
}

#[derive(Debug, Serialize)]
pub struct ReportView {
    pub score: u8,
    pub level: ReadinessLevel,
    pub level_label: &'static str,
    pub source: ReportSource,
    pub generated_at: DateTime<Utc>,
    pub report: Report,
}

pub(crate) async fn questions_handler() -> Response {
    let catalog = QuestionCatalog::standard();
    let view = CatalogView {
        total: catalog.len(),
        questions: catalog.questions(),
    };
    (StatusCode::OK, Json(view)).into_response()
}

pub(crate) async fn score_handler(Json(payload): Json<AnswersPayload>) -> Response {
    let breakdown = ScoringEngine::new().evaluate(&payload.answers);
    (StatusCode::OK, Json(breakdown)).into_response()
}

pub(crate) async fn report_handler(
    State(requester): State<Arc<ReportRequester>>,
    Json(payload): Json<AnswersPayload>,
) -> Response {
    let breakdown = ScoringEngine::new().evaluate(&payload.answers);
    let generated = requester
        .generate(&payload.answers, breakdown.score, breakdown.level)
        .await;

    let view = ReportView {
        score: breakdown.score,
        level: breakdown.level,
        level_label: breakdown.level.label(),
        source: generated.source,
        generated_at: generated.generated_at,
        report: generated.report,
    };
    (StatusCode::OK, Json(view)).into_response()
}

pub(crate) async fn lead_handler(Json(lead): Json<LeadCapture>) -> Response {
    match lead.validate() {
        Ok(()) => {
            info!("lead captured");
            let payload = json!({ "status": "accepted" });
            (StatusCode::ACCEPTED, Json(payload)).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use serde_json::Value;
    use tower::ServiceExt;

    fn router() -> Router {
        assessment_router(Arc::new(ReportRequester::offline()))
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request builds")
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn questions_route_lists_catalog() {
        let response = router()
            .oneshot(
                Request::get("/api/v1/assessment/questions")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["total"], json!(10));
        assert_eq!(body["questions"][2]["id"], json!("ai-usage"));
        assert_eq!(body["questions"][7]["range"]["max"], json!(10));
    }

    #[tokio::test]
    async fn score_route_returns_breakdown() {
        let response = router()
            .oneshot(post_json(
                "/api/v1/assessment/score",
                json!({
                    "answers": {
                        "ai-usage": "daily",
                        "ai-skills": 5,
                        "ai-perspective": ["excited", "curious"],
                        "challenges": ["time", "stuck"]
                    }
                }),
            ))
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["score"], json!(84));
        assert_eq!(body["level"], json!("power_user"));
        assert_eq!(body["components"].as_array().map(Vec::len), Some(4));
    }

    #[tokio::test]
    async fn score_route_treats_malformed_answers_as_unanswered() {
        let response = router()
            .oneshot(post_json(
                "/api/v1/assessment/score",
                json!({
                    "answers": {
                        "ai-usage": "daily",
                        "ai-skills": null,
                        "ai-perspective": true,
                        "challenges": ["time", 3]
                    }
                }),
            ))
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        // daily 45 + perspective base 10; skill and challenges contribute nothing
        assert_eq!(body["score"], json!(55));
        assert_eq!(body["components"][1]["factor"], json!("skill"));
        assert_eq!(body["components"][1]["points"], json!(0.0));
        assert_eq!(body["components"][3]["points"], json!(0.0));
    }

    #[tokio::test]
    async fn report_route_serves_fallback_offline() {
        let response = router()
            .oneshot(post_json("/api/v1/assessment/report", json!({ "answers": {} })))
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["score"], json!(10));
        assert_eq!(body["level_label"], json!("AI Beginner"));
        assert_eq!(body["source"], json!("fallback"));
        assert!(body["report"]["launchPadCurriculum"].is_array());
    }

    #[tokio::test]
    async fn lead_route_validates_contact_details() {
        let accepted = router()
            .oneshot(post_json(
                "/api/v1/assessment/lead",
                json!({ "name": "Ada", "email": "ada@example.com", "phone": "5551234567" }),
            ))
            .await
            .expect("router responds");
        assert_eq!(accepted.status(), StatusCode::ACCEPTED);

        let rejected = router()
            .oneshot(post_json(
                "/api/v1/assessment/lead",
                json!({ "name": "Ada", "email": "ada.example.com", "phone": "5551234567" }),
            ))
            .await
            .expect("router responds");
        assert_eq!(rejected.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(rejected).await;
        assert_eq!(body["error"], json!("Invalid email address"));
    }
}
