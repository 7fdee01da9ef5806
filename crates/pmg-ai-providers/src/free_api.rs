//! Free-tier inference endpoints
//!
//! Endpoints are tried in order; the first one that answers 200 with
//! non-empty text wins. Replies are read from either `text` or
//! `generations[0].text`.

use crate::config::{EndpointConfig, FreeApiConfig};
use crate::error::{ProviderError, ProviderResult};
use crate::provider::{http_client, non_empty, post_json, TextProvider};
use async_trait::async_trait;
use pmg_ai_core::{GeneratedResponse, GenerationOptions, ProviderKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub struct FreeApiProvider {
    client: reqwest::Client,
    config: FreeApiConfig,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateReply {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    generations: Vec<Generation>,
}

#[derive(Deserialize)]
struct Generation {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateReply {
    fn into_text(self) -> Option<String> {
        self.text
            .filter(|text| !text.trim().is_empty())
            .or_else(|| self.generations.into_iter().next().and_then(|g| g.text))
    }
}

impl FreeApiProvider {
    pub fn new(config: FreeApiConfig) -> ProviderResult<Self> {
        Ok(Self {
            client: http_client(config.timeout_secs)?,
            config,
        })
    }

    async fn call_endpoint(
        &self,
        endpoint: &EndpointConfig,
        prompt: &str,
        options: &GenerationOptions,
    ) -> ProviderResult<String> {
        let body = GenerateRequest {
            model: &endpoint.model,
            prompt,
            max_tokens: options.max_tokens,
        };

        let reply: GenerateReply = post_json(
            &self.client,
            &endpoint.url,
            endpoint.bearer_token.as_deref(),
            &body,
        )
        .await?;

        non_empty(reply.into_text(), &endpoint.url)
    }
}

#[async_trait]
impl TextProvider for FreeApiProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::FreeApi
    }

    fn is_available(&self) -> bool {
        self.config.enabled && !self.config.endpoints.is_empty()
    }

    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> ProviderResult<GeneratedResponse> {
        if !self.is_available() {
            return Err(ProviderError::Unavailable(self.kind().as_str()));
        }

        for endpoint in &self.config.endpoints {
            match self.call_endpoint(endpoint, prompt, options).await {
                Ok(text) => {
                    debug!(url = %endpoint.url, "Free API endpoint answered");
                    return Ok(GeneratedResponse::remote(text, self.kind())
                        .with_model(&endpoint.model)
                        .with_url(&endpoint.url));
                }
                Err(e) => {
                    warn!(url = %endpoint.url, error = %e, "Free API endpoint failed");
                }
            }
        }

        Err(ProviderError::Exhausted(self.config.endpoints.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_prefers_text() {
        let reply: GenerateReply =
            serde_json::from_str(r#"{"text":"direto","generations":[{"text":"outro"}]}"#).unwrap();
        assert_eq!(reply.into_text().as_deref(), Some("direto"));
    }

    #[test]
    fn test_reply_reads_generations() {
        let reply: GenerateReply =
            serde_json::from_str(r#"{"generations":[{"text":"gerado"}]}"#).unwrap();
        assert_eq!(reply.into_text().as_deref(), Some("gerado"));
    }

    #[test]
    fn test_reply_without_text() {
        let reply: GenerateReply = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
        assert!(reply.into_text().is_none());
    }
}
