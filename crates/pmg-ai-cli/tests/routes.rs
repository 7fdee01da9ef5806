//! REST route tests

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use metrics_exporter_prometheus::PrometheusBuilder;
use pmg_ai_cli::server::routes::SELF_TEST_PROMPT;
use pmg_ai_cli::server::{build_app, AppState};
use pmg_ai_core::{GenerationOptions, ProviderKind, ProviderSelector};
use pmg_ai_providers::{LocalProvider, ProviderChain};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    let chain = ProviderChain::new(LocalProvider::new().unwrap());
    let metrics = PrometheusBuilder::new().build_recorder().handle();
    build_app(AppState::new(
        chain,
        ProviderSelector::Only(ProviderKind::Local),
        GenerationOptions::default(),
        metrics,
    ))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn generate_returns_local_answer() {
    let (status, body) = send(post_json(
        "/ai/generate",
        json!({
            "prompt": "Cliente: Pizzaria Napoli\nAtividade: pizzaria\nCidade: Campinas\nCrie um script de vendas",
            "provider": "local"
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["provider"], "local_ai");
    assert!(body["response"].as_str().unwrap().contains("Pizzaria Napoli"));
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn generate_uses_default_provider_and_options() {
    let (status, body) = send(post_json(
        "/ai/generate",
        json!({ "prompt": "Detectar segmento: burger com bacon e batata", "options": { "max_tokens": 10 } }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["provider"], "local_ai");
    assert!(body["response"].as_str().unwrap().contains("Hamburgueria"));
}

#[tokio::test]
async fn generate_rejects_unknown_provider() {
    let (status, body) = send(post_json(
        "/ai/generate",
        json!({ "prompt": "oi", "provider": "gemini" }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("gemini"));
}

#[tokio::test]
async fn status_reports_every_provider() {
    let (status, body) = send(get("/ai/status")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["server"], "PMG AI Server");
    assert_eq!(body["providers"]["local"], true);
    assert_eq!(body["providers"]["openai"], false);
    assert_eq!(body["providers"]["transformers"], false);
    assert_eq!(body["providers"]["api"], false);
    assert!(body["uptime_secs"].is_u64());
}

#[tokio::test]
async fn self_test_generates_locally() {
    let (status, body) = send(get("/ai/test")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["test"], "success");
    assert_eq!(body["prompt"], SELF_TEST_PROMPT);
    assert_eq!(body["provider"], "local_ai");
    assert!(!body["response"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = send(get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn metrics_is_plain_text() {
    let response = app().oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let request = Request::builder()
        .method("OPTIONS")
        .uri("/ai/generate")
        .header("origin", "http://example.com")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}
