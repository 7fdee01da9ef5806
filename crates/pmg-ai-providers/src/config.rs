//! Provider configuration

use pmg_ai_core::{Error, ProviderKind, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for every remote provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// Providers tried by `auto`, before the local generator
    #[serde(default = "default_auto_order")]
    pub auto_order: Vec<ProviderKind>,

    #[serde(default)]
    pub inference: InferenceConfig,

    #[serde(default)]
    pub openai: OpenAiConfig,

    #[serde(default)]
    pub free_api: FreeApiConfig,
}

impl ProvidersConfig {
    /// Load from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no provider can work with
    pub fn validate(&self) -> Result<()> {
        if self.inference.timeout_secs == 0
            || self.openai.timeout_secs == 0
            || self.free_api.timeout_secs == 0
        {
            return Err(Error::config("provider timeouts must be at least one second"));
        }

        if let Some(endpoint) = self.free_api.endpoints.iter().find(|e| e.url.trim().is_empty()) {
            return Err(Error::config(format!(
                "free API endpoint for model '{}' has an empty url",
                endpoint.model
            )));
        }

        Ok(())
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            auto_order: default_auto_order(),
            inference: InferenceConfig::default(),
            openai: OpenAiConfig::default(),
            free_api: FreeApiConfig::default(),
        }
    }
}

/// Local inference server (Ollama-compatible `/api/generate`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default = "default_inference_url")]
    pub base_url: String,

    #[serde(default = "default_inference_model")]
    pub model: String,

    #[serde(default = "default_inference_timeout")]
    pub timeout_secs: u64,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_url: default_inference_url(),
            model: default_inference_model(),
            timeout_secs: default_inference_timeout(),
        }
    }
}

/// OpenAI chat completions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_openai_url")]
    pub base_url: String,

    #[serde(default = "default_openai_model")]
    pub model: String,

    /// Usually supplied through `OPENAI_API_KEY`
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    #[serde(default = "default_openai_timeout")]
    pub timeout_secs: u64,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: default_openai_url(),
            model: default_openai_model(),
            api_key: None,
            timeout_secs: default_openai_timeout(),
        }
    }
}

/// Free-tier inference endpoints, tried in order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreeApiConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_free_api_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_endpoints")]
    pub endpoints: Vec<EndpointConfig>,
}

impl Default for FreeApiConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_secs: default_free_api_timeout(),
            endpoints: default_endpoints(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub url: String,
    pub model: String,

    #[serde(default)]
    pub bearer_token: Option<String>,
}

fn default_auto_order() -> Vec<ProviderKind> {
    vec![ProviderKind::Inference, ProviderKind::FreeApi]
}

fn default_inference_url() -> String {
    "http://127.0.0.1:11434".to_string()
}

fn default_inference_model() -> String {
    "llama2".to_string()
}

fn default_inference_timeout() -> u64 {
    60
}

fn default_openai_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_openai_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_openai_timeout() -> u64 {
    30
}

fn default_free_api_timeout() -> u64 {
    10
}

fn default_endpoints() -> Vec<EndpointConfig> {
    vec![
        EndpointConfig {
            url: "https://api.cohere.ai/v1/generate".to_string(),
            model: "medium".to_string(),
            bearer_token: Some("demo".to_string()),
        },
        EndpointConfig {
            url: "https://api.together.xyz/inference".to_string(),
            model: "togethercomputer/llama-2-7b-chat".to_string(),
            bearer_token: None,
        },
    ]
}

fn default_true() -> bool {
    true
}
