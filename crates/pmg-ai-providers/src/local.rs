//! Rule-based provider, always available and never failing

use crate::error::ProviderResult;
use crate::provider::TextProvider;
use async_trait::async_trait;
use pmg_ai_core::{GeneratedResponse, GenerationOptions, ProviderKind, Result};
use pmg_ai_local::IntentRouter;

#[derive(Debug, Clone)]
pub struct LocalProvider {
    router: IntentRouter,
}

impl LocalProvider {
    pub fn new() -> Result<Self> {
        Ok(Self {
            router: IntentRouter::new()?,
        })
    }

    pub fn with_router(router: IntentRouter) -> Self {
        Self { router }
    }

    /// Answer synchronously; sampling options do not apply to templates
    pub fn respond(&self, prompt: &str) -> GeneratedResponse {
        self.router.generate(prompt)
    }
}

#[async_trait]
impl TextProvider for LocalProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Local
    }

    fn is_available(&self) -> bool {
        true
    }

    async fn generate(
        &self,
        prompt: &str,
        _options: &GenerationOptions,
    ) -> ProviderResult<GeneratedResponse> {
        Ok(self.respond(prompt))
    }
}
