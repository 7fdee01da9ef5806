//! HTTP provider tests against in-process fake servers

use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use pmg_ai_core::{GenerationOptions, ProviderKind, ProviderSelector, ResponseType};
use pmg_ai_providers::openai::LANGUAGE_INSTRUCTION;
use pmg_ai_providers::{
    EndpointConfig, FreeApiConfig, FreeApiProvider, InferenceConfig, InferenceProvider,
    OpenAiConfig, OpenAiProvider, ProviderChain, ProviderError, ProvidersConfig, TextProvider,
};
use serde_json::{json, Value};
use std::io::Write;
use std::time::Duration;

/// Serve `router` on an ephemeral port and return its base URL
async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn failing_route() -> Router {
    Router::new().route(
        "/generate",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    )
}

fn generations_route(text: &'static str) -> Router {
    Router::new().route(
        "/generate",
        post(move |Json(body): Json<Value>| async move {
            Json(json!({
                "generations": [{ "text": format!("{text} ({})", body["model"].as_str().unwrap_or("")) }]
            }))
        }),
    )
}

fn endpoint(base: &str, model: &str) -> EndpointConfig {
    EndpointConfig {
        url: format!("{base}/generate"),
        model: model.to_string(),
        bearer_token: None,
    }
}

fn free_api(endpoints: Vec<EndpointConfig>) -> FreeApiConfig {
    FreeApiConfig {
        enabled: true,
        timeout_secs: 1,
        endpoints,
    }
}

#[tokio::test]
async fn inference_provider_sends_model_and_limits() {
    let base = spawn(Router::new().route(
        "/api/generate",
        post(|Json(body): Json<Value>| async move {
            Json(json!({
                "response": format!(
                    "{}|{}|{}",
                    body["model"].as_str().unwrap_or(""),
                    body["options"]["num_predict"],
                    body["stream"]
                )
            }))
        }),
    ))
    .await;

    let provider = InferenceProvider::new(InferenceConfig {
        enabled: true,
        base_url: base,
        model: "gpt2".to_string(),
        timeout_secs: 5,
    })
    .unwrap();

    let options = GenerationOptions {
        max_tokens: 64,
        temperature: 0.2,
    };
    let response = provider.generate("olá", &options).await.unwrap();

    assert_eq!(response.text, "gpt2|64|false");
    assert_eq!(response.provider, "transformers");
    assert_eq!(response.model.as_deref(), Some("gpt2"));
    assert!(response.response_type.is_none());
}

#[tokio::test]
async fn inference_provider_disabled_is_unavailable() {
    let provider = InferenceProvider::new(InferenceConfig::default()).unwrap();

    assert!(!provider.is_available());
    let err = provider
        .generate("olá", &GenerationOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Unavailable("transformers")));
}

#[tokio::test]
async fn openai_provider_authenticates_and_appends_instruction() {
    let base = spawn(Router::new().route(
        "/v1/chat/completions",
        post(|headers: HeaderMap, Json(body): Json<Value>| async move {
            let auth = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("")
                .to_string();
            if auth != "Bearer sk-test" {
                return (StatusCode::UNAUTHORIZED, Json(json!({ "error": "bad key" })));
            }
            let content = body["messages"][0]["content"].as_str().unwrap_or("").to_string();
            (
                StatusCode::OK,
                Json(json!({ "choices": [{ "message": { "role": "assistant", "content": content } }] })),
            )
        }),
    ))
    .await;

    let provider = OpenAiProvider::new(OpenAiConfig {
        enabled: true,
        base_url: format!("{base}/v1"),
        model: "gpt-3.5-turbo".to_string(),
        api_key: Some("sk-test".to_string()),
        timeout_secs: 5,
    })
    .unwrap();

    assert!(provider.is_available());
    let response = provider
        .generate("Crie uma saudação", &GenerationOptions::default())
        .await
        .unwrap();

    assert_eq!(response.text, format!("Crie uma saudação{LANGUAGE_INSTRUCTION}"));
    assert_eq!(response.provider, "openai");
    assert_eq!(response.model.as_deref(), Some("gpt-3.5-turbo"));
}

#[tokio::test]
async fn openai_provider_without_key() {
    let provider = OpenAiProvider::new(OpenAiConfig {
        api_key: Some("   ".to_string()),
        ..Default::default()
    })
    .unwrap();

    assert!(!provider.is_available());
    let err = provider
        .generate("olá", &GenerationOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::MissingCredentials("openai")));
}

#[tokio::test]
async fn free_api_falls_through_to_next_endpoint() {
    let broken = spawn(failing_route()).await;
    let working = spawn(generations_route("texto livre")).await;

    let provider = FreeApiProvider::new(free_api(vec![
        endpoint(&broken, "medium"),
        endpoint(&working, "llama"),
    ]))
    .unwrap();

    let response = provider
        .generate("olá", &GenerationOptions::default())
        .await
        .unwrap();

    assert_eq!(response.text, "texto livre (llama)");
    assert_eq!(response.provider, "api");
    assert_eq!(response.url.as_deref(), Some(format!("{working}/generate").as_str()));
}

#[tokio::test]
async fn free_api_exhausted_when_all_fail() {
    let broken = spawn(failing_route()).await;
    let empty = spawn(Router::new().route(
        "/generate",
        post(|| async { Json(json!({ "text": "" })) }),
    ))
    .await;

    let provider =
        FreeApiProvider::new(free_api(vec![endpoint(&broken, "a"), endpoint(&empty, "b")])).unwrap();

    let err = provider
        .generate("olá", &GenerationOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Exhausted(2)));
}

#[tokio::test]
async fn chain_degrades_to_local_on_remote_failure() {
    let broken = spawn(failing_route()).await;

    let config = ProvidersConfig {
        auto_order: vec![ProviderKind::FreeApi],
        free_api: free_api(vec![endpoint(&broken, "medium")]),
        ..Default::default()
    };
    let chain = ProviderChain::from_config(&config).unwrap();

    let response = chain
        .process(
            "Cliente: Padaria Sol\nAtividade: panificação\nCidade: Recife\nscript de vendas",
            ProviderSelector::Auto,
            &GenerationOptions::default(),
        )
        .await;

    assert_eq!(response.provider, "local_ai");
    assert_eq!(response.response_type, Some(ResponseType::SalesScript));
    assert!(response.text.contains("Padaria Sol"));
}

#[tokio::test]
async fn chain_uses_remote_when_it_answers() {
    let working = spawn(generations_route("remoto")).await;

    let config = ProvidersConfig {
        auto_order: vec![ProviderKind::FreeApi],
        free_api: free_api(vec![endpoint(&working, "medium")]),
        ..Default::default()
    };
    let chain = ProviderChain::from_config(&config).unwrap();

    let response = chain
        .process("olá", ProviderSelector::Only(ProviderKind::FreeApi), &GenerationOptions::default())
        .await;
    assert_eq!(response.provider, "api");
    assert_eq!(response.text, "remoto (medium)");

    let local = chain
        .process("olá", ProviderSelector::Only(ProviderKind::Local), &GenerationOptions::default())
        .await;
    assert!(local.is_local());
}

#[tokio::test]
async fn chain_treats_timeouts_as_failures() {
    let slow = spawn(Router::new().route(
        "/generate",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(json!({ "text": "tarde demais" }))
        }),
    ))
    .await;

    let config = ProvidersConfig {
        auto_order: vec![ProviderKind::FreeApi],
        free_api: free_api(vec![endpoint(&slow, "medium")]),
        ..Default::default()
    };
    let chain = ProviderChain::from_config(&config).unwrap();

    let response = chain
        .process("bom dia", ProviderSelector::Auto, &GenerationOptions::default())
        .await;
    assert!(response.is_local());
}

#[test]
fn providers_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "auto_order: [transformers]\ninference:\n  enabled: true\n  base_url: http://10.0.0.2:11434\n"
    )
    .unwrap();

    let config = ProvidersConfig::from_file(file.path()).unwrap();
    assert_eq!(config.auto_order, vec![ProviderKind::Inference]);
    assert!(config.inference.enabled);
    assert_eq!(config.inference.base_url, "http://10.0.0.2:11434");
}
