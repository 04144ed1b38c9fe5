use async_trait::async_trait;

use crate::domain::{
    errors::DomainError, Coordinates, PlaceDetailsRecord, PlaceSummary, ServiceCategory,
    ServiceLocation,
};

#[async_trait]
pub trait PlacesDirectory: Send + Sync {
    /// Places of one category within `radius_meters`, in provider relevance order.
    async fn nearby_search(
        &self,
        origin: Coordinates,
        category: ServiceCategory,
        radius_meters: u32,
    ) -> Result<Vec<ServiceLocation>, DomainError>;
    async fn text_search(&self, query: &str) -> Result<Vec<PlaceSummary>, DomainError>;
    async fn place_details(&self, place_id: &str)
        -> Result<Option<PlaceDetailsRecord>, DomainError>;
    fn photo_url(&self, photo_reference: &str, max_width: u32) -> Option<String>;
}
