//! Core types for PMG AI

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Provider label attached to every response produced by the rule-based generator
pub const LOCAL_PROVIDER_LABEL: &str = "local_ai";

/// Kind of response the local generator produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    SalesScript,
    SegmentDetection,
    ContentOptimization,
    PersonalizedApproach,
    Generic,
}

impl ResponseType {
    /// Wire label, as serialized
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SalesScript => "sales_script",
            Self::SegmentDetection => "segment_detection",
            Self::ContentOptimization => "content_optimization",
            Self::PersonalizedApproach => "personalized_approach",
            Self::Generic => "generic",
        }
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text-generation backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderKind {
    /// Local inference engine (selected as `transformers`)
    #[serde(rename = "transformers")]
    Inference,
    /// Commercial chat-completion API
    #[serde(rename = "openai")]
    OpenAi,
    /// Free-tier HTTP inference endpoints
    #[serde(rename = "api")]
    FreeApi,
    /// Rule-based local generator
    #[serde(rename = "local")]
    Local,
}

impl ProviderKind {
    /// All provider kinds, in reporting order
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::Inference,
        ProviderKind::OpenAi,
        ProviderKind::FreeApi,
        ProviderKind::Local,
    ];

    /// Selector name accepted on the command line and in config
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inference => "transformers",
            Self::OpenAi => "openai",
            Self::FreeApi => "api",
            Self::Local => "local",
        }
    }

    /// Provider label reported in responses
    pub fn label(&self) -> &'static str {
        match self {
            Self::Local => LOCAL_PROVIDER_LABEL,
            other => other.as_str(),
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "transformers" => Ok(Self::Inference),
            "openai" => Ok(Self::OpenAi),
            "api" => Ok(Self::FreeApi),
            "local" => Ok(Self::Local),
            _ => Err(Error::InvalidSelector(s.to_string())),
        }
    }
}

/// Which provider(s) a request should try
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderSelector {
    /// Walk the configured automatic order, ending with the local generator
    #[default]
    Auto,
    /// Try one provider, then the local generator
    Only(ProviderKind),
}

impl fmt::Display for ProviderSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Only(kind) => kind.fmt(f),
        }
    }
}

impl FromStr for ProviderSelector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        s.parse().map(Self::Only)
    }
}

impl Serialize for ProviderSelector {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ProviderSelector {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Sampling options forwarded to remote providers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Upper bound on generated tokens
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

fn default_max_tokens() -> u32 {
    200
}

fn default_temperature() -> f32 {
    0.7
}

/// Terminal output of a generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedResponse {
    /// Generated text, never empty
    pub text: String,

    /// Label of the provider that produced the text
    pub provider: String,

    /// Intent the local generator answered
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub response_type: Option<ResponseType>,

    /// Remote model name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Remote endpoint that answered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl GeneratedResponse {
    /// Create a response from the rule-based generator
    pub fn local(text: impl Into<String>, response_type: ResponseType) -> Self {
        Self {
            text: text.into(),
            provider: LOCAL_PROVIDER_LABEL.to_string(),
            response_type: Some(response_type),
            model: None,
            url: None,
        }
    }

    /// Create a response from a remote provider
    pub fn remote(text: impl Into<String>, provider: ProviderKind) -> Self {
        Self {
            text: text.into(),
            provider: provider.label().to_string(),
            response_type: None,
            model: None,
            url: None,
        }
    }

    /// Attach the model name
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Attach the endpoint URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Whether this response came from the rule-based generator
    pub fn is_local(&self) -> bool {
        self.provider == LOCAL_PROVIDER_LABEL
    }
}

/// A chat message sent to chat-completion providers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender (system, user, assistant)
    pub role: String,

    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a new chat message
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_parsing() {
        assert_eq!("auto".parse::<ProviderSelector>().unwrap(), ProviderSelector::Auto);
        assert_eq!(
            "OpenAI".parse::<ProviderSelector>().unwrap(),
            ProviderSelector::Only(ProviderKind::OpenAi)
        );
        assert_eq!(
            "transformers".parse::<ProviderSelector>().unwrap(),
            ProviderSelector::Only(ProviderKind::Inference)
        );
        assert!(matches!(
            "ollama".parse::<ProviderSelector>(),
            Err(Error::InvalidSelector(_))
        ));
    }

    #[test]
    fn test_local_label() {
        assert_eq!(ProviderKind::Local.label(), "local_ai");
        assert_eq!(ProviderKind::Local.as_str(), "local");
        assert_eq!(ProviderKind::FreeApi.label(), "api");
    }

    #[test]
    fn test_response_serialization_skips_absent_metadata() {
        let response = GeneratedResponse::local("olá", ResponseType::Generic);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["provider"], "local_ai");
        assert_eq!(json["type"], "generic");
        assert!(json.get("model").is_none());
        assert!(json.get("url").is_none());

        let remote = GeneratedResponse::remote("hi", ProviderKind::OpenAi).with_model("gpt-3.5-turbo");
        let json = serde_json::to_value(&remote).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert!(json.get("type").is_none());
    }

    #[test]
    fn test_options_defaults() {
        let options: GenerationOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options.max_tokens, 200);
        assert!((options.temperature - 0.7).abs() < f32::EPSILON);
    }
}
