//! Application configuration

use crate::cli::{Cli, Commands};
use pmg_ai_core::{Error, GenerationOptions, ProviderSelector, Result};
use pmg_ai_providers::ProvidersConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// Top-level `pmg-ai.yaml` contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Selector used when a request does not name one
    #[serde(default)]
    pub default_provider: ProviderSelector,

    #[serde(default)]
    pub generation: GenerationOptions,

    #[serde(default)]
    pub providers: ProvidersConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load configuration from file and CLI overrides
    pub fn load(config_path: &str, cli: &Cli) -> Result<Self> {
        let mut config = Self::from_path(config_path)?;
        config.apply_overrides(cli);
        config.validate()?;
        Ok(config)
    }

    /// Read `path` if it exists, otherwise use defaults
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(key) = &cli.openai_api_key {
            self.providers.openai.api_key = Some(key.clone());
        }

        match &cli.command {
            Some(Commands::Generate {
                provider,
                max_tokens,
                temperature,
                ..
            }) => {
                if let Some(provider) = provider {
                    self.default_provider = *provider;
                }
                if let Some(max_tokens) = max_tokens {
                    self.generation.max_tokens = *max_tokens;
                }
                if let Some(temperature) = temperature {
                    self.generation.temperature = *temperature;
                }
            }
            Some(Commands::Interactive {
                provider: Some(provider),
            }) => {
                self.default_provider = *provider;
            }
            Some(Commands::Serve { address, port }) => {
                if let Some(address) = address {
                    self.server.address = address.clone();
                }
                if let Some(port) = port {
                    self.server.port = *port;
                }
            }
            _ => {}
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.generation.max_tokens == 0 {
            return Err(Error::config("generation.max_tokens must be positive"));
        }
        if !(0.0..=2.0).contains(&self.generation.temperature) {
            return Err(Error::config(format!(
                "generation.temperature must be between 0 and 2, got {}",
                self.generation.temperature
            )));
        }
        self.providers.validate()?;
        self.server.socket_addr()?;
        Ok(())
    }
}

/// REST server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.address, self.port)
            .parse()
            .map_err(|e| Error::config(format!("invalid listen address '{}': {}", self.address, e)))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
        }
    }
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3333
}
