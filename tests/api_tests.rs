use portfolio_chat::config::Config;
use portfolio_chat::message::{ChatResponse, HistoryResponse, Role};
use portfolio_chat::routes::create_router;
use portfolio_chat::services::knowledge::RESPONSE_CATEGORIES;
use portfolio_chat::state::AppState;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use std::sync::Arc;
use tower::util::ServiceExt;

fn app() -> Router {
    let state = Arc::new(AppState::new());
    create_router(&Config::default()).with_state(state)
}

fn post_chat(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

#[tokio::test]
async fn test_chat_endpoint() {
    let response = app()
        .oneshot(post_chat(r#"{"message": "Hello"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let chat_resp: ChatResponse = body_json(response).await;
    let greetings = RESPONSE_CATEGORIES
        .iter()
        .find(|c| c.name == "greeting")
        .unwrap()
        .responses;

    assert!(!chat_resp.conversation_id.is_empty());
    assert_eq!(chat_resp.message.role, Role::Assistant);
    assert!(greetings.contains(&chat_resp.message.content.as_str()));
}

#[tokio::test]
async fn test_response_uses_camel_case_fields() {
    let response = app()
        .oneshot(post_chat(r#"{"message": "Hello"}"#))
        .await
        .unwrap();

    let value: serde_json::Value = body_json(response).await;
    assert!(value["conversationId"].is_string());
    assert_eq!(value["message"]["role"], "assistant");
    assert!(value["message"]["content"].is_string());
}

#[tokio::test]
async fn test_conversation_id_generated_per_call() {
    let app = app();

    let first: ChatResponse = body_json(
        app.clone()
            .oneshot(post_chat(r#"{"message": "Hello"}"#))
            .await
            .unwrap(),
    )
    .await;
    let second: ChatResponse = body_json(
        app.oneshot(post_chat(r#"{"message": "Hello", "conversationId": null}"#))
            .await
            .unwrap(),
    )
    .await;

    assert!(!first.conversation_id.is_empty());
    assert!(!second.conversation_id.is_empty());
    assert_ne!(first.conversation_id, second.conversation_id);
}

#[tokio::test]
async fn test_conversation_id_is_echoed() {
    let response = app()
        .oneshot(post_chat(
            r#"{"message": "What services do you offer?", "conversationId": "conv-42"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let chat_resp: ChatResponse = body_json(response).await;
    assert_eq!(chat_resp.conversation_id, "conv-42");
    assert!(chat_resp.message.content.contains("software development"));
}

#[tokio::test]
async fn test_malformed_requests_are_rejected() {
    let bodies = [
        r#"not json"#,
        r#"{"conversationId": "abc"}"#,
        r#"{"message": 42}"#,
        r#"{"message": "   "}"#,
    ];

    for body in bodies {
        let response = app().oneshot(post_chat(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body: {body}");

        let value: serde_json::Value = body_json(response).await;
        assert!(value["error"].is_string(), "body: {body}");
    }
}

#[tokio::test]
async fn test_missing_content_type_is_rejected() {
    let req = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .body(Body::from(r#"{"message": "Hello"}"#))
        .unwrap();

    let response = app().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_history_is_always_empty() {
    let app = app();

    for uri in ["/api/chat?conversationId=conv-42", "/api/chat"] {
        let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
        let response = app.clone().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let history: HistoryResponse = body_json(response).await;
        assert!(history.messages.is_empty());
    }
}

#[tokio::test]
async fn test_history_not_recorded_after_chat() {
    let app = app();

    app.clone()
        .oneshot(post_chat(r#"{"message": "Hello", "conversationId": "conv-7"}"#))
        .await
        .unwrap();

    let req = Request::builder()
        .uri("/api/chat?conversationId=conv-7")
        .body(Body::empty())
        .unwrap();
    let value: serde_json::Value = body_json(app.oneshot(req).await.unwrap()).await;
    assert_eq!(value, serde_json::json!({ "messages": [] }));
}

#[tokio::test]
async fn test_metrics_track_match_source() {
    let app = app();

    for msg in ["hello", "xyzzy plugh quux"] {
        app.clone()
            .oneshot(post_chat(format!(r#"{{"message": "{msg}"}}"#)))
            .await
            .unwrap();
    }

    let req = Request::builder().uri("/metrics").body(Body::empty()).unwrap();
    let value: serde_json::Value = body_json(app.oneshot(req).await.unwrap()).await;

    assert_eq!(value["source_usage"]["category"], 1);
    assert_eq!(value["source_usage"]["fallback"], 1);
    assert_eq!(value["category_usage"]["greeting"], 1);
}

#[tokio::test]
async fn test_health() {
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = app().oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
