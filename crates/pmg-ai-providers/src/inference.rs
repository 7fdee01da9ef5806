//! Local inference server provider
//!
//! Talks to an Ollama-compatible server:
//! ```text
//! POST /api/generate {"model":"llama2","prompt":"...","stream":false,"options":{...}}
//! -> {"response":"..."}
//! ```

use crate::config::InferenceConfig;
use crate::error::{ProviderError, ProviderResult};
use crate::provider::{http_client, join_url, non_empty, post_json, TextProvider};
use async_trait::async_trait;
use pmg_ai_core::{GeneratedResponse, GenerationOptions, ProviderKind};
use serde::{Deserialize, Serialize};

pub struct InferenceProvider {
    client: reqwest::Client,
    config: InferenceConfig,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: SamplingOptions,
}

#[derive(Serialize)]
struct SamplingOptions {
    num_predict: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct GenerateReply {
    #[serde(default)]
    response: Option<String>,
}

impl InferenceProvider {
    pub fn new(config: InferenceConfig) -> ProviderResult<Self> {
        Ok(Self {
            client: http_client(config.timeout_secs)?,
            config,
        })
    }
}

#[async_trait]
impl TextProvider for InferenceProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Inference
    }

    fn is_available(&self) -> bool {
        self.config.enabled
    }

    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> ProviderResult<GeneratedResponse> {
        if !self.is_available() {
            return Err(ProviderError::Unavailable(self.kind().as_str()));
        }

        let url = join_url(&self.config.base_url, "api/generate");
        let body = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
            options: SamplingOptions {
                num_predict: options.max_tokens,
                temperature: options.temperature,
            },
        };

        let reply: GenerateReply = post_json(&self.client, &url, None, &body).await?;
        let text = non_empty(reply.response, &url)?;

        Ok(GeneratedResponse::remote(text, self.kind()).with_model(&self.config.model))
    }
}
