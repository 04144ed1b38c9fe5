use std::sync::Arc;
use std::time::Duration;

use crate::application::{
    DirectionsService, IncidentService, PlaceEnrichmentService, PlaceSearchService,
    ProximityService, WeatherService,
};
use crate::domain::ports::{DirectionsProvider, LlmService, PlacesDirectory, WeatherProvider};
use crate::domain::DomainError;
use crate::infrastructure::{
    build_http_client, AppConfig, GeminiLlm, GoogleDirectionsClient, GooglePlacesClient,
    OpenWeatherClient,
};

/// The outbound adapters the services are wired to.
#[derive(Clone)]
pub struct Providers {
    pub places: Arc<dyn PlacesDirectory>,
    pub weather: Arc<dyn WeatherProvider>,
    pub directions: Arc<dyn DirectionsProvider>,
    pub llm: Arc<dyn LlmService>,
}

impl Providers {
    /// Real adapters sharing one HTTP client. Missing keys are reported per
    /// request, so this succeeds without credentials.
    pub fn from_config(config: &AppConfig) -> Result<Self, DomainError> {
        let http = build_http_client(&config.config.http)?;
        let maps = &config.config.google_maps;

        Ok(Self {
            places: Arc::new(GooglePlacesClient::new(http.clone(), maps)),
            weather: Arc::new(OpenWeatherClient::new(http.clone(), &config.config.openweather)),
            directions: Arc::new(GoogleDirectionsClient::new(http, maps)),
            llm: Arc::new(GeminiLlm::from_config(&config.config.llm)),
        })
    }
}

#[derive(Clone)]
pub struct AppState {
    pub proximity: Arc<ProximityService>,
    pub weather: Arc<WeatherService>,
    pub search: Arc<PlaceSearchService>,
    pub directions: Arc<DirectionsService>,
    pub incidents: Arc<IncidentService>,
    pub enrichment: Arc<PlaceEnrichmentService>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig, providers: Providers) -> Self {
        let settings = &config.config;

        let proximity = ProximityService::from_config(providers.places.clone(), &settings.nearby);
        let weather = WeatherService::new(providers.weather, settings.weather.forecast_days);
        let search = PlaceSearchService::new(providers.places, settings.search.clone());
        let directions = DirectionsService::new(providers.directions);
        let enrichment = PlaceEnrichmentService::new(
            providers.llm,
            config.prompts.place_details.clone(),
            Duration::from_secs(settings.llm.timeout_seconds),
        );

        Self {
            proximity: Arc::new(proximity),
            weather: Arc::new(weather),
            search: Arc::new(search),
            directions: Arc::new(directions),
            incidents: Arc::new(IncidentService::new()),
            enrichment: Arc::new(enrichment),
            config: Arc::new(config),
        }
    }

    pub fn from_config(config: AppConfig) -> Result<Self, DomainError> {
        let providers = Providers::from_config(&config)?;
        Ok(Self::new(config, providers))
    }
}
