pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation;
use crate::persistence::handlers as persistence;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation API
        .route(
            "/api/v1/proposals/generate",
            post(generation::handle_generate),
        )
        .route("/api/v1/proposals/extract", post(generation::handle_extract))
        // Saved proposals
        .route(
            "/api/v1/saved",
            get(persistence::handle_list_saved).post(persistence::handle_save_proposal),
        )
        .route(
            "/api/v1/saved/:id",
            get(persistence::handle_get_saved).delete(persistence::handle_delete_saved),
        )
        // Settings and credential
        .route(
            "/api/v1/settings",
            get(persistence::handle_get_settings).put(persistence::handle_put_settings),
        )
        .route(
            "/api/v1/credential",
            get(persistence::handle_credential_status)
                .put(persistence::handle_store_credential)
                .delete(persistence::handle_remove_credential),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::{CompletionConfig, Config};
    use crate::llm_client::{CompletionClient, CompletionRequest, LlmError};
    use crate::persistence::store::MemoryStore;

    /// Always fails, so remote mode exercises the fallback path.
    struct UnreachableCompletion;

    #[async_trait]
    impl CompletionClient for UnreachableCompletion {
        async fn complete(
            &self,
            _api_key: &str,
            _request: &CompletionRequest,
        ) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    fn test_router() -> Router {
        build_router(AppState {
            store: Arc::new(MemoryStore::new()),
            completion: Arc::new(UnreachableCompletion),
            config: Config {
                redis_url: None,
                completion: CompletionConfig::default(),
                port: 0,
                rust_log: "debug".to_string(),
            },
        })
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(value) => {
                builder = builder.header("content-type", "application/json");
                Body::from(value.to_string())
            }
            None => Body::empty(),
        };
        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    fn scenario_a() -> Value {
        json!({
            "jobTitle": "WordPress Developer Needed",
            "jobDescription": "Need a responsive WordPress site with SEO",
            "tone": "professional",
            "experienceCategory": "cms",
            "targetWordCount": 150
        })
    }

    #[tokio::test]
    async fn test_health() {
        let app = test_router();
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "pitchcraft");
    }

    #[tokio::test]
    async fn test_generate_template_mode() {
        let app = test_router();
        let (status, body) =
            send(&app, Method::POST, "/api/v1/proposals/generate", Some(scenario_a())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "template");
        let words = body["wordCount"].as_u64().unwrap();
        assert!((100..=150).contains(&words), "got {words} words");
        assert!(body["content"].as_str().unwrap().ends_with("Best regards,\nSazz"));
    }

    #[tokio::test]
    async fn test_generate_unknown_tone_is_400() {
        let app = test_router();
        let mut form = scenario_a();
        form["tone"] = json!("sarcastic");
        let (status, body) =
            send(&app, Method::POST, "/api/v1/proposals/generate", Some(form)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_generate_remote_without_credential_is_400() {
        let app = test_router();
        let mut form = scenario_a();
        form["mode"] = json!("remote");
        let (status, body) =
            send(&app, Method::POST, "/api/v1/proposals/generate", Some(form)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "MISSING_CREDENTIAL");
    }

    #[tokio::test]
    async fn test_generate_remote_failure_falls_back() {
        let app = test_router();
        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/v1/credential",
            Some(json!({"apiKey": "gsk_test_key_123"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let mut form = scenario_a();
        form["mode"] = json!("remote");
        let (status, body) =
            send(&app, Method::POST, "/api/v1/proposals/generate", Some(form)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "template");
        assert!(body["notice"].is_string());
    }

    #[tokio::test]
    async fn test_extract_preview() {
        let app = test_router();
        let (status, body) =
            send(&app, Method::POST, "/api/v1/proposals/extract", Some(scenario_a())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["matchedSkills"], json!(["responsive", "WordPress"]));
        assert_eq!(body["inferredBenefits"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_saved_proposal_lifecycle() {
        let app = test_router();
        let (status, saved) = send(
            &app,
            Method::POST,
            "/api/v1/saved",
            Some(json!({"content": "Hello,\n\nA proposal worth keeping."})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        let id = saved["id"].as_str().unwrap().to_string();

        let (status, list) = send(&app, Method::GET, "/api/v1/saved", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(list.as_array().unwrap().len(), 1);

        let uri = format!("/api/v1/saved/{id}");
        let (status, one) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(one["content"], "Hello,\n\nA proposal worth keeping.");

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, body) = send(&app, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_settings_shape_generation() {
        let app = test_router();
        let (status, _) = send(
            &app,
            Method::PUT,
            "/api/v1/settings",
            Some(json!({"displayName": "Rin Tanaka", "avoidBulletedLists": false})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, settings) = send(&app, Method::GET, "/api/v1/settings", None).await;
        assert_eq!(settings["displayName"], "Rin Tanaka");
        assert_eq!(settings["preferConciseOutput"], true);

        let (_, body) =
            send(&app, Method::POST, "/api/v1/proposals/generate", Some(scenario_a())).await;
        assert!(body["content"].as_str().unwrap().ends_with("Best regards,\nRin Tanaka"));
    }

    #[tokio::test]
    async fn test_credential_status_never_returns_key() {
        let app = test_router();
        let (status, body) = send(
            &app,
            Method::PUT,
            "/api/v1/credential",
            Some(json!({"apiKey": "short"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["message"], "The provided API key seems too short");

        send(
            &app,
            Method::PUT,
            "/api/v1/credential",
            Some(json!({"apiKey": "gsk_test_key_123"})),
        )
        .await;
        let (_, body) = send(&app, Method::GET, "/api/v1/credential", None).await;
        assert_eq!(body, json!({"configured": true}));

        let (status, _) = send(&app, Method::DELETE, "/api/v1/credential", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (_, body) = send(&app, Method::GET, "/api/v1/credential", None).await;
        assert_eq!(body, json!({"configured": false}));
    }
}
