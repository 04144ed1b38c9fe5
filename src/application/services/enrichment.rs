use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};

use crate::domain::{ports::LlmService, DomainError, PlaceInsights};
use crate::infrastructure::config::PlaceDetailsPrompt;

/// Asks the LLM for visitor information about a place.
pub struct PlaceEnrichmentService {
    llm: Arc<dyn LlmService>,
    prompt: PlaceDetailsPrompt,
    timeout: Duration,
}

impl PlaceEnrichmentService {
    pub fn new(llm: Arc<dyn LlmService>, prompt: PlaceDetailsPrompt, timeout: Duration) -> Self {
        Self {
            llm,
            prompt,
            timeout,
        }
    }

    #[instrument(skip(self))]
    pub async fn enrich(
        &self,
        place_name: &str,
        location: &str,
    ) -> Result<PlaceInsights, DomainError> {
        let place_name = place_name.trim();
        if place_name.is_empty() {
            return Err(DomainError::validation("placeName is required"));
        }

        let user = self.prompt.render_user(place_name, location.trim());
        let insights = tokio::time::timeout(
            self.timeout,
            self.llm.extract_place_insights(&self.prompt.system, &user),
        )
        .await
        .map_err(|_| DomainError::timeout("Place details generation timed out"))??;

        debug!(highlights = insights.highlights.len(), "insights extracted");
        Ok(insights)
    }
}
