//! PMG AI Providers
//!
//! Text-generation backends and the fallback chain that ties them together.
//!
//! Providers:
//! - `transformers`: a local inference server (Ollama-compatible HTTP API)
//! - `openai`: OpenAI chat completions
//! - `api`: a list of free-tier inference endpoints
//! - `local`: the rule-based generator from `pmg-ai-local`
//!
//! Every remote failure degrades to the next provider in the plan and,
//! finally, to the local generator.

pub mod chain;
pub mod config;
pub mod error;
pub mod free_api;
pub mod inference;
pub mod local;
pub mod openai;
pub mod provider;

pub use chain::ProviderChain;
pub use config::{EndpointConfig, FreeApiConfig, InferenceConfig, OpenAiConfig, ProvidersConfig};
pub use error::{ProviderError, ProviderResult};
pub use free_api::FreeApiProvider;
pub use inference::InferenceProvider;
pub use local::LocalProvider;
pub use openai::OpenAiProvider;
pub use provider::TextProvider;
