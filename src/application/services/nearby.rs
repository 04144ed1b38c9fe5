use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::domain::{
    ports::PlacesDirectory, Coordinates, DomainError, RankedService, ServiceCategory,
    ServiceLocation,
};
use crate::infrastructure::config::NearbyConfig;

/// Finds the closest emergency services of a category around a point.
pub struct ProximityService {
    directory: Arc<dyn PlacesDirectory>,
    radius_meters: u32,
    max_results: usize,
}

impl ProximityService {
    pub fn new(directory: Arc<dyn PlacesDirectory>) -> Self {
        Self::from_config(directory, &NearbyConfig::default())
    }

    pub fn from_config(directory: Arc<dyn PlacesDirectory>, config: &NearbyConfig) -> Self {
        Self {
            directory,
            radius_meters: config.radius_meters,
            max_results: config.max_results,
        }
    }

    /// Validates the raw request, then searches. Both checks happen before
    /// the directory is contacted.
    #[instrument(skip(self))]
    pub async fn find_nearby(
        &self,
        lat: f64,
        lng: f64,
        category: &str,
    ) -> Result<Vec<RankedService>, DomainError> {
        let category: ServiceCategory = category.parse()?;
        let origin = Coordinates::new(lat, lng)?;
        self.find_nearby_category(origin, category).await
    }

    #[instrument(skip(self), fields(radius = self.radius_meters))]
    pub async fn find_nearby_category(
        &self,
        origin: Coordinates,
        category: ServiceCategory,
    ) -> Result<Vec<RankedService>, DomainError> {
        let services = self
            .directory
            .nearby_search(origin, category, self.radius_meters)
            .await?;

        if services.is_empty() {
            debug!(%category, "no services in range");
            return Ok(Vec::new());
        }

        let ranked = rank_services(&origin, services, self.max_results);
        debug!(%category, count = ranked.len(), "services ranked");
        Ok(ranked)
    }

    /// Queries every category concurrently. Each category succeeds or fails
    /// on its own.
    #[instrument(skip(self))]
    pub async fn find_all(
        &self,
        origin: Coordinates,
    ) -> Vec<(ServiceCategory, Result<Vec<RankedService>, DomainError>)> {
        let lookups = ServiceCategory::ALL
            .into_iter()
            .map(|category| async move { (category, self.find_nearby_category(origin, category).await) });

        join_all(lookups).await
    }
}

/// Keeps the provider's order, truncates to `limit` and attaches distances.
pub fn rank_services(
    origin: &Coordinates,
    services: Vec<ServiceLocation>,
    limit: usize,
) -> Vec<RankedService> {
    services
        .into_iter()
        .take(limit)
        .map(|service| RankedService::new(origin, service))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use crate::domain::{PlaceDetailsRecord, PlaceSummary};

    enum Reply {
        Services(Vec<ServiceLocation>),
        Fail(&'static str),
    }

    struct FakeDirectory {
        reply: Reply,
        calls: AtomicUsize,
        seen: Mutex<Vec<(ServiceCategory, u32)>>,
    }

    impl FakeDirectory {
        fn returning(services: Vec<ServiceLocation>) -> Self {
            Self {
                reply: Reply::Services(services),
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing(msg: &'static str) -> Self {
            Self {
                reply: Reply::Fail(msg),
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PlacesDirectory for FakeDirectory {
        async fn nearby_search(
            &self,
            _origin: Coordinates,
            category: ServiceCategory,
            radius_meters: u32,
        ) -> Result<Vec<ServiceLocation>, DomainError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push((category, radius_meters));
            match &self.reply {
                Reply::Services(s) => Ok(s
                    .iter()
                    .cloned()
                    .map(|mut s| {
                        s.category = category;
                        s
                    })
                    .collect()),
                Reply::Fail(msg) => Err(DomainError::external(*msg)),
            }
        }

        async fn text_search(&self, _query: &str) -> Result<Vec<PlaceSummary>, DomainError> {
            unreachable!()
        }

        async fn place_details(
            &self,
            _place_id: &str,
        ) -> Result<Option<PlaceDetailsRecord>, DomainError> {
            unreachable!()
        }

        fn photo_url(&self, _photo_reference: &str, _max_width: u32) -> Option<String> {
            None
        }
    }

    fn station(id: usize, lat: f64, lng: f64) -> ServiceLocation {
        ServiceLocation {
            id: format!("place-{id}"),
            name: format!("Station {id}"),
            address: "Mumbai".into(),
            location: Coordinates { lat, lng },
            phone: None,
            category: ServiceCategory::Police,
        }
    }

    #[tokio::test]
    async fn test_truncates_to_five_preserving_order() {
        let services: Vec<_> = (0..8)
            .map(|i| station(i, 19.08 + i as f64 * 0.01, 72.88))
            .collect();
        let directory = Arc::new(FakeDirectory::returning(services));
        let service = ProximityService::new(directory.clone());

        let ranked = service.find_nearby(19.0760, 72.8777, "police").await.unwrap();

        assert_eq!(ranked.len(), 5);
        let ids: Vec<_> = ranked.iter().map(|r| r.service.id.as_str()).collect();
        assert_eq!(ids, vec!["place-0", "place-1", "place-2", "place-3", "place-4"]);
        assert!(ranked.iter().all(|r| r.distance.km() >= 0.0));
        assert_eq!(
            directory.seen.lock().unwrap().as_slice(),
            &[(ServiceCategory::Police, 5_000)]
        );
    }

    #[tokio::test]
    async fn test_does_not_rerank_by_distance() {
        let far = station(1, 19.12, 72.90);
        let near = station(2, 19.0761, 72.8778);
        let service = ProximityService::new(Arc::new(FakeDirectory::returning(vec![far, near])));

        let ranked = service.find_nearby(19.0760, 72.8777, "hospital").await.unwrap();

        assert_eq!(ranked[0].service.id, "place-1");
        assert!(ranked[0].distance.to_string().ends_with(" km"));
        assert!(ranked[1].distance.to_string().ends_with(" m"));
    }

    #[tokio::test]
    async fn test_mumbai_example_renders_meters() {
        let service = ProximityService::new(Arc::new(FakeDirectory::returning(vec![station(
            0, 19.0825, 72.8800,
        )])));

        let ranked = service.find_nearby(19.0760, 72.8777, "fire").await.unwrap();

        assert_eq!(ranked.len(), 1);
        assert!(ranked[0].distance.km() < 1.0);
        assert!(ranked[0].distance.to_string().ends_with(" m"));
        assert_eq!(ranked[0].service.category, ServiceCategory::Fire);
    }

    #[tokio::test]
    async fn test_unknown_category_skips_network() {
        let directory = Arc::new(FakeDirectory::returning(vec![station(0, 19.0, 72.0)]));
        let service = ProximityService::new(directory.clone());

        let err = service.find_nearby(19.0760, 72.8777, "volcano").await.unwrap_err();

        assert!(matches!(err, DomainError::InvalidCategory(_)));
        assert_eq!(directory.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_invalid_coordinates_skip_network() {
        let directory = Arc::new(FakeDirectory::returning(vec![]));
        let service = ProximityService::new(directory.clone());

        let err = service.find_nearby(91.0, 72.0, "police").await.unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(directory.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_zero_matches_is_empty_success() {
        let service = ProximityService::new(Arc::new(FakeDirectory::returning(vec![])));
        let ranked = service.find_nearby(0.0, 0.0, "police").await.unwrap();
        assert!(ranked.is_empty());
    }

    #[tokio::test]
    async fn test_provider_failure_fails_whole_request() {
        let service = ProximityService::new(Arc::new(FakeDirectory::failing(
            "Places API error: REQUEST_DENIED",
        )));

        let err = service.find_nearby(0.0, 0.0, "police").await.unwrap_err();
        assert!(matches!(err, DomainError::ExternalService(_)));
        assert_eq!(err.to_string(), "Places API error: REQUEST_DENIED");
    }

    #[tokio::test]
    async fn test_find_all_queries_each_category_once() {
        let directory = Arc::new(FakeDirectory::returning(vec![station(0, 19.08, 72.88)]));
        let service = ProximityService::new(directory.clone());

        let results = service
            .find_all(Coordinates::new(19.0760, 72.8777).unwrap())
            .await;

        assert_eq!(results.len(), 3);
        for (category, result) in &results {
            let ranked = result.as_ref().unwrap();
            assert_eq!(ranked[0].service.category, *category);
        }
        assert_eq!(directory.calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_rank_services_respects_custom_limit() {
        let origin = Coordinates::new(0.0, 0.0).unwrap();
        let services = (0..4).map(|i| station(i, 0.0, i as f64 * 0.001)).collect();
        let ranked = rank_services(&origin, services, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].distance.to_string(), "0 m");
    }
}
