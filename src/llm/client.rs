use anyhow::Result;
use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::gemini::GeminiClient;

/// Text generation request payload: the instruction prepended to the
/// transcript forms the single model input.
pub struct GenerationRequest<'a> {
    pub instruction: &'a str,
    pub transcript: &'a str,
}

#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// One synchronous model call. No retry, no streaming; failures carry the
    /// upstream message.
    async fn generate(&self, request: GenerationRequest<'_>) -> Result<String>;
}

/// Build a text generator from runtime settings.
pub fn build_generator(settings: &Settings) -> Result<Box<dyn TextGenerator>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "gemini" => Ok(Box::new(GeminiClient::from_settings(settings)?)),
        other => anyhow::bail!(
            "Unsupported llm.provider '{}'. Supported providers: gemini",
            other
        ),
    }
}
