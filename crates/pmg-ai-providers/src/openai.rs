//! OpenAI chat-completion provider

use crate::config::OpenAiConfig;
use crate::error::{ProviderError, ProviderResult};
use crate::provider::{http_client, join_url, non_empty, post_json, TextProvider};
use async_trait::async_trait;
use pmg_ai_core::{ChatMessage, GeneratedResponse, GenerationOptions, ProviderKind};
use serde::{Deserialize, Serialize};

/// Appended to every prompt so replies come back in commercial Portuguese
pub const LANGUAGE_INSTRUCTION: &str = "\n\nResponda em português brasileiro de forma comercial.";

pub struct OpenAiProvider {
    client: reqwest::Client,
    config: OpenAiConfig,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiProvider {
    pub fn new(config: OpenAiConfig) -> ProviderResult<Self> {
        Ok(Self {
            client: http_client(config.timeout_secs)?,
            config,
        })
    }

    fn api_key(&self) -> Option<&str> {
        self.config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

#[async_trait]
impl TextProvider for OpenAiProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    fn is_available(&self) -> bool {
        self.config.enabled && self.api_key().is_some()
    }

    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> ProviderResult<GeneratedResponse> {
        if !self.config.enabled {
            return Err(ProviderError::Unavailable(self.kind().as_str()));
        }
        let api_key = self
            .api_key()
            .ok_or(ProviderError::MissingCredentials(self.kind().as_str()))?;

        let url = join_url(&self.config.base_url, "chat/completions");
        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage::user(format!("{prompt}{LANGUAGE_INSTRUCTION}"))],
            max_tokens: options.max_tokens,
            temperature: options.temperature,
        };

        let reply: ChatResponse = post_json(&self.client, &url, Some(api_key), &body).await?;
        let content = reply.choices.into_iter().next().and_then(|c| c.message.content);
        let text = non_empty(content, &url)?;

        Ok(GeneratedResponse::remote(text, self.kind()).with_model(&self.config.model))
    }
}
