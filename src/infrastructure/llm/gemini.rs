use async_trait::async_trait;
use rig::client::{CompletionClient, ProviderClient};
use rig::extractor::ExtractionError;
use rig::providers::gemini;

use crate::domain::{ports::LlmService, DomainError, PlaceInsights};
use crate::infrastructure::config::{LlmConfig, GEMINI_API_KEY_ENV};

pub struct GeminiLlm {
    client: Option<gemini::Client>,
    model: String,
}

impl GeminiLlm {
    /// The rig client reads its key from the environment, so it is only
    /// built when the key was present at startup.
    pub fn from_config(config: &LlmConfig) -> Self {
        Self {
            client: config.api_key_present.then(|| gemini::Client::from_env()),
            model: config.model.clone(),
        }
    }

    fn client(&self) -> Result<&gemini::Client, DomainError> {
        self.client
            .as_ref()
            .ok_or_else(|| DomainError::configuration(format!("{GEMINI_API_KEY_ENV} not configured")))
    }
}

fn extraction_error(e: ExtractionError) -> DomainError {
    match e {
        ExtractionError::NoData => DomainError::external("No valid response from AI"),
        ExtractionError::DeserializationError(e) => {
            DomainError::external(format!("Malformed AI response: {e}"))
        }
        other => DomainError::external(format!("AI Gateway error: {other}")),
    }
}

#[async_trait]
impl LlmService for GeminiLlm {
    /// Uses rig's extractor, which forces a tool call shaped by the
    /// `PlaceInsights` schema instead of parsing free text.
    async fn extract_place_insights(
        &self,
        system: &str,
        prompt: &str,
    ) -> Result<PlaceInsights, DomainError> {
        let extractor = self
            .client()?
            .extractor::<PlaceInsights>(self.model.as_str())
            .preamble(system)
            .build();

        extractor.extract(prompt).await.map_err(extraction_error)
    }
}
