use crate::domain::{errors::DomainError, PlaceInsights};
use async_trait::async_trait;

/// Language model backend that fills in visitor information for a place.
/// Implementations must return every field or fail.
#[async_trait]
pub trait LlmService: Send + Sync {
    async fn extract_place_insights(
        &self,
        system: &str,
        prompt: &str,
    ) -> Result<PlaceInsights, DomainError>;
}
