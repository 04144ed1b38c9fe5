mod directions;
mod enrichment;
mod incidents;
mod nearby;
mod search;
mod weather;

pub use directions::DirectionsService;
pub use enrichment::PlaceEnrichmentService;
pub use incidents::IncidentService;
pub use nearby::{rank_services, ProximityService};
pub use search::PlaceSearchService;
pub use weather::WeatherService;
