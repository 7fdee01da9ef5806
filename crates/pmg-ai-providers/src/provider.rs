//! Provider trait and shared HTTP plumbing

use crate::error::{ProviderError, ProviderResult};
use async_trait::async_trait;
use pmg_ai_core::{GeneratedResponse, GenerationOptions, ProviderKind};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Trait for all text-generation providers
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Which selector this provider answers to
    fn kind(&self) -> ProviderKind;

    /// Whether the provider is configured and worth trying
    fn is_available(&self) -> bool;

    /// Generate text for the prompt
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> ProviderResult<GeneratedResponse>;
}

/// Build an HTTP client with a per-request timeout
pub(crate) fn http_client(timeout_secs: u64) -> ProviderResult<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()?)
}

/// POST a JSON body and decode a JSON reply; anything but 200 is a failure
pub(crate) async fn post_json<B, R>(
    client: &reqwest::Client,
    url: &str,
    bearer: Option<&str>,
    body: &B,
) -> ProviderResult<R>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let mut request = client.post(url).json(body);
    if let Some(token) = bearer {
        request = request.bearer_auth(token);
    }

    let response = request.send().await?;
    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return Err(ProviderError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    Ok(response.json::<R>().await?)
}

/// Reject blank generations
pub(crate) fn non_empty(text: Option<String>, source: &str) -> ProviderResult<String> {
    match text {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(ProviderError::EmptyPayload(source.to_string())),
    }
}

/// Join a base URL and a path without doubling slashes
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://x/v1/", "/chat/completions"), "http://x/v1/chat/completions");
        assert_eq!(join_url("http://x", "api/generate"), "http://x/api/generate");
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some("ok".into()), "x").unwrap(), "ok");
        assert!(matches!(non_empty(Some("  ".into()), "x"), Err(ProviderError::EmptyPayload(_))));
        assert!(non_empty(None, "x").is_err());
    }
}
