//! Application layer - Use cases and orchestration.
//!
//! Services validate caller input, call the provider ports in `domain::ports`
//! and shape the results. They never see HTTP or provider wire formats.

pub mod services;

pub use services::{
    DirectionsService, IncidentService, PlaceEnrichmentService, PlaceSearchService,
    ProximityService, WeatherService,
};
