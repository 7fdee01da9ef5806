//! PMG AI command-line front end
//!
//! One-shot generation, the interactive prompt, provider status and the
//! REST server all share one `ProviderChain` built from `pmg-ai.yaml`.

pub mod cli;
pub mod config;
pub mod interactive;
pub mod output;
pub mod server;

pub use cli::{Cli, Commands};
pub use config::{AppConfig, ServerConfig};
