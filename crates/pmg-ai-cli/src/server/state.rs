use metrics_exporter_prometheus::PrometheusHandle;
use pmg_ai_core::{GenerationOptions, ProviderSelector};
use pmg_ai_providers::ProviderChain;
use std::sync::Arc;
use std::time::Instant;

/// Shared state for every request handler
#[derive(Clone)]
pub struct AppState {
    pub chain: Arc<ProviderChain>,
    pub default_provider: ProviderSelector,
    pub generation: GenerationOptions,
    pub metrics: PrometheusHandle,
    pub started: Instant,
}

impl AppState {
    pub fn new(
        chain: ProviderChain,
        default_provider: ProviderSelector,
        generation: GenerationOptions,
        metrics: PrometheusHandle,
    ) -> Self {
        Self {
            chain: Arc::new(chain),
            default_provider,
            generation,
            metrics,
            started: Instant::now(),
        }
    }
}
