use crate::output::{timestamp, VERSION};
use crate::server::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use pmg_ai_core::{GenerationOptions, ProviderSelector};
use serde::Deserialize;
use serde_json::json;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Prompt answered by `GET /ai/test`
pub const SELF_TEST_PROMPT: &str = "Crie uma saudação comercial para a PMG Atacadista";

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub options: Option<GenerationOptions>,
}

pub async fn generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> impl IntoResponse {
    let selector = match req.provider.as_deref() {
        None => state.default_provider,
        Some(raw) => match raw.parse::<ProviderSelector>() {
            Ok(selector) => selector,
            Err(e) => {
                warn!(provider = raw, "Rejected generate request");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "success": false,
                        "error": e.to_string(),
                        "timestamp": timestamp(),
                    })),
                );
            }
        },
    };

    let preview: String = req.prompt.chars().take(50).collect();
    info!(provider = %selector, "Processing prompt: {:?}", preview);

    let options = req.options.unwrap_or(state.generation);
    let response = state.chain.process(&req.prompt, selector, &options).await;

    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "response": response.text,
            "provider": response.provider,
            "timestamp": timestamp(),
        })),
    )
}

pub async fn status(State(state): State<AppState>) -> impl IntoResponse {
    let providers: BTreeMap<&str, bool> = state
        .chain
        .availability()
        .into_iter()
        .map(|(kind, available)| (kind.as_str(), available))
        .collect();

    Json(json!({
        "server": "PMG AI Server",
        "version": VERSION,
        "providers": providers,
        "uptime_secs": state.started.elapsed().as_secs(),
        "timestamp": timestamp(),
    }))
}

pub async fn self_test(State(state): State<AppState>) -> impl IntoResponse {
    let response = state.chain.local().respond(SELF_TEST_PROMPT);

    Json(json!({
        "test": "success",
        "prompt": SELF_TEST_PROMPT,
        "response": response.text,
        "provider": response.provider,
    }))
}
