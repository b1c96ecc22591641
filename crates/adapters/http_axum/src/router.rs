//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Merges API routes under `/api` and dashboard routes at `/`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .merge(crate::dashboard::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use aircon_app::services::climate_service::ClimateService;
    use aircon_domain::catalog::RuleCatalog;
    use aircon_domain::engine::RuleEngine;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        let engine = RuleEngine::new(Arc::new(RuleCatalog::standard()));
        AppState::new(ClimateService::new(engine))
    }

    async fn send(request: Request<Body>) -> (StatusCode, String) {
        let response = build(test_state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn post_form(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn should_return_ok_when_health_check_called() {
        let (status, body) = send(get("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn should_evaluate_hot_and_humid_snapshot() {
        let (status, body) = send(post_json(
            "/api/evaluate",
            serde_json::json!({
                "temperature": 31,
                "humidity": 75,
                "occupancy": "OCCUPIED",
                "time_of_day": "AFTERNOON",
                "windows_open": false
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["outcome"], "matched");
        assert_eq!(json["rule"], "Hot & humid (occupied) -> cool strong");
        assert_eq!(json["action"]["mode"], "COOL");
        assert_eq!(json["action"]["fan_speed"], "HIGH");
        assert_eq!(json["action"]["setpoint"], "23°C");
    }

    #[tokio::test]
    async fn should_report_no_match_as_success() {
        let (status, body) = send(post_json(
            "/api/evaluate",
            serde_json::json!({
                "temperature": 23,
                "humidity": 40,
                "occupancy": "OCCUPIED",
                "time_of_day": "MORNING",
                "windows_open": false
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json, serde_json::json!({"outcome": "no_match"}));
    }

    #[tokio::test]
    async fn should_reject_unknown_category_with_422() {
        let (status, body) = send(post_json(
            "/api/evaluate",
            serde_json::json!({
                "temperature": 31,
                "humidity": 75,
                "occupancy": "OCCUPIED",
                "time_of_day": "LUNCH",
                "windows_open": false
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert!(json["error"].as_str().unwrap().contains("LUNCH"));
    }

    #[tokio::test]
    async fn should_reject_missing_field_with_422() {
        let (status, body) = send(post_json(
            "/api/evaluate",
            serde_json::json!({"temperature": 31}),
        ))
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains("humidity"));
    }

    #[tokio::test]
    async fn should_list_standard_rules() {
        let (status, body) = send(get("/api/rules")).await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        let rules = json.as_array().unwrap();
        assert_eq!(rules.len(), 7);
        assert_eq!(rules[2]["name"], "No one home -> eco mode");
        assert_eq!(rules[2]["priority"], 90);
    }

    #[tokio::test]
    async fn should_render_form_with_defaults() {
        let (status, body) = send(get("/")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Smart Home Air Conditioner Controller"));
        assert!(body.contains(r#"value="22""#));
        assert!(body.contains(r#"value="46""#));
        assert!(!body.contains("<script"));
    }

    #[tokio::test]
    async fn should_render_decision_for_submitted_form() {
        let (status, body) = send(post_form(
            "temperature=27&humidity=50&occupancy=OCCUPIED&time_of_day=NIGHT",
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Rule Applied: Night (occupied) -&gt; sleep mode"));
        assert!(body.contains("<strong>AC Mode:</strong> SLEEP"));
        assert!(body.contains("<strong>Setpoint:</strong> 26°C"));
    }

    #[tokio::test]
    async fn should_turn_off_when_windows_checkbox_ticked() {
        let (status, body) = send(post_form(
            "temperature=35&humidity=80&occupancy=OCCUPIED&time_of_day=AFTERNOON&windows_open=on",
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Rule Applied: Windows open -&gt; turn AC off"));
        assert!(body.contains("<strong>Setpoint:</strong> -"));
    }

    #[tokio::test]
    async fn should_show_no_match_message_for_form() {
        let (status, body) = send(post_form(
            "temperature=23&humidity=40&occupancy=OCCUPIED&time_of_day=MORNING",
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("No matching rule found."));
    }

    #[tokio::test]
    async fn should_rerender_form_with_error_for_bad_reading() {
        let (status, body) = send(post_form(
            "temperature=hot&humidity=40&occupancy=OCCUPIED&time_of_day=MORNING",
        ))
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains("Invalid input: temperature is not a number"));
        assert!(body.contains(r#"value="hot""#));
    }
}
