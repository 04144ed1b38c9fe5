use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::domain::{ports::PlacesDirectory, Attraction, DomainError, PlaceSummary};
use crate::infrastructure::config::SearchConfig;

/// Free-text attraction search enriched with per-place details.
pub struct PlaceSearchService {
    directory: Arc<dyn PlacesDirectory>,
    config: SearchConfig,
}

impl PlaceSearchService {
    pub fn new(directory: Arc<dyn PlacesDirectory>, config: SearchConfig) -> Self {
        Self { directory, config }
    }

    #[instrument(skip(self))]
    pub async fn search(
        &self,
        query: &str,
        location: Option<&str>,
    ) -> Result<Vec<Attraction>, DomainError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(DomainError::validation("query must not be empty"));
        }

        let full_query = self.build_query(query);
        let hits = self.directory.text_search(&full_query).await?;
        debug!(hits = hits.len(), "text search returned");

        let lookups = hits
            .into_iter()
            .take(self.config.max_results)
            .map(|hit| self.with_details(hit));

        Ok(join_all(lookups).await)
    }

    fn build_query(&self, query: &str) -> String {
        if self.config.query_suffix.is_empty() {
            query.to_string()
        } else {
            format!("{query} {}", self.config.query_suffix)
        }
    }

    async fn with_details(&self, hit: PlaceSummary) -> Attraction {
        let details = match self.directory.place_details(&hit.place_id).await {
            Ok(details) => details,
            Err(e) => {
                warn!(place_id = %hit.place_id, error = %e, "details lookup failed");
                None
            }
        };
        let photo_url = hit
            .photo_reference
            .as_deref()
            .and_then(|r| self.directory.photo_url(r, self.config.photo_max_width));

        Attraction::merge(hit, details, photo_url)
    }
}
