use std::sync::Arc;
use tracing::instrument;

use crate::domain::{ports::DirectionsProvider, strip_html_tags, DomainError, Route};

pub struct DirectionsService {
    provider: Arc<dyn DirectionsProvider>,
}

impl DirectionsService {
    pub fn new(provider: Arc<dyn DirectionsProvider>) -> Self {
        Self { provider }
    }

    /// Driving routes with plain-text step instructions.
    #[instrument(skip(self))]
    pub async fn directions(
        &self,
        origin: &str,
        destination: &str,
    ) -> Result<Vec<Route>, DomainError> {
        let (origin, destination) = (origin.trim(), destination.trim());
        if origin.is_empty() || destination.is_empty() {
            return Err(DomainError::validation(
                "origin and destination are required",
            ));
        }

        let mut routes = self.provider.routes(origin, destination).await?;
        for route in &mut routes {
            for step in &mut route.steps {
                step.instruction = strip_html_tags(&step.instruction);
            }
        }

        Ok(routes)
    }
}
