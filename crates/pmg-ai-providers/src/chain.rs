//! Provider fallback chain
//!
//! A request is served by walking an ordered plan of providers. Each step
//! runs in isolation: a failure is logged, counted, and the next provider is
//! tried. The rule-based local provider closes every plan, so `process`
//! always returns a response.

use crate::config::ProvidersConfig;
use crate::free_api::FreeApiProvider;
use crate::inference::InferenceProvider;
use crate::local::LocalProvider;
use crate::openai::OpenAiProvider;
use crate::provider::TextProvider;
use pmg_ai_core::{
    GeneratedResponse, GenerationOptions, ProviderKind, ProviderSelector, Result,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

#[derive(Clone)]
pub struct ProviderChain {
    remotes: Vec<Arc<dyn TextProvider>>,
    auto_order: Vec<ProviderKind>,
    local: LocalProvider,
}

impl ProviderChain {
    /// A chain with only the local provider
    pub fn new(local: LocalProvider) -> Self {
        Self {
            remotes: Vec::new(),
            auto_order: Vec::new(),
            local,
        }
    }

    /// Register a remote provider; a later provider of the same kind replaces the earlier one
    pub fn with_provider(mut self, provider: Arc<dyn TextProvider>) -> Self {
        let kind = provider.kind();
        self.remotes.retain(|p| p.kind() != kind);
        self.remotes.push(provider);
        self
    }

    /// Providers tried by `auto`, in order; the local provider is implied last
    pub fn with_auto_order(mut self, order: Vec<ProviderKind>) -> Self {
        let mut deduped = Vec::with_capacity(order.len());
        for kind in order {
            if kind != ProviderKind::Local && !deduped.contains(&kind) {
                deduped.push(kind);
            }
        }
        self.auto_order = deduped;
        self
    }

    /// Build every provider from configuration
    pub fn from_config(config: &ProvidersConfig) -> Result<Self> {
        config.validate()?;

        let chain = Self::new(LocalProvider::new()?)
            .with_provider(Arc::new(InferenceProvider::new(config.inference.clone())?))
            .with_provider(Arc::new(OpenAiProvider::new(config.openai.clone())?))
            .with_provider(Arc::new(FreeApiProvider::new(config.free_api.clone())?))
            .with_auto_order(config.auto_order.clone());

        for (kind, available) in chain.availability() {
            if available {
                info!("Provider {} available", kind);
            } else {
                info!("Provider {} not available", kind);
            }
        }

        Ok(chain)
    }

    fn remote(&self, kind: ProviderKind) -> Option<&Arc<dyn TextProvider>> {
        self.remotes.iter().find(|p| p.kind() == kind)
    }

    fn is_available(&self, kind: ProviderKind) -> bool {
        match kind {
            ProviderKind::Local => true,
            other => self.remote(other).is_some_and(|p| p.is_available()),
        }
    }

    /// Every provider kind and whether it can currently be tried
    pub fn availability(&self) -> Vec<(ProviderKind, bool)> {
        ProviderKind::ALL
            .iter()
            .map(|kind| (*kind, self.is_available(*kind)))
            .collect()
    }

    /// Ordered providers a request with `selector` will try; always ends with `Local`
    pub fn plan(&self, selector: ProviderSelector) -> Vec<ProviderKind> {
        let candidates: Vec<ProviderKind> = match selector {
            ProviderSelector::Auto => self.auto_order.clone(),
            ProviderSelector::Only(ProviderKind::Local) => Vec::new(),
            ProviderSelector::Only(kind) => vec![kind],
        };

        let mut plan: Vec<ProviderKind> = candidates
            .into_iter()
            .filter(|kind| self.is_available(*kind))
            .collect();
        plan.push(ProviderKind::Local);
        plan
    }

    /// Serve a prompt, degrading to the local generator on any failure
    pub async fn process(
        &self,
        prompt: &str,
        selector: ProviderSelector,
        options: &GenerationOptions,
    ) -> GeneratedResponse {
        let start = Instant::now();
        let plan = self.plan(selector);
        debug!(%selector, ?plan, "Processing prompt");

        for kind in plan.iter().filter(|kind| **kind != ProviderKind::Local) {
            let Some(provider) = self.remote(*kind) else {
                continue;
            };

            match provider.generate(prompt, options).await {
                Ok(response) => {
                    record(&response);
                    debug!(
                        provider = kind.as_str(),
                        elapsed_ms = start.elapsed().as_millis() as u64,
                        "Provider answered"
                    );
                    return response;
                }
                Err(e) => {
                    warn!(provider = kind.as_str(), error = %e, "Provider failed, falling back");
                    metrics::counter!(
                        "pmg_ai_provider_failures_total",
                        "provider" => kind.as_str(),
                        "reason" => e.kind()
                    )
                    .increment(1);
                }
            }
        }

        let response = self.local.respond(prompt);
        record(&response);
        debug!(
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Local generator answered"
        );
        response
    }

    pub fn local(&self) -> &LocalProvider {
        &self.local
    }
}

fn record(response: &GeneratedResponse) {
    let response_type = response
        .response_type
        .map(|t| t.as_str())
        .unwrap_or("remote");
    metrics::counter!(
        "pmg_ai_generations_total",
        "provider" => response.provider.clone(),
        "type" => response_type
    )
    .increment(1);
}
