use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use super::{check_status, GoogleApi, Geometry};
use crate::domain::{
    ports::PlacesDirectory, Coordinates, DomainError, PlaceDetailsRecord, PlaceSummary,
    ServiceCategory, ServiceLocation,
};
use crate::infrastructure::config::GoogleMapsConfig;

const API: &str = "Places API";
const DETAIL_FIELDS: &str =
    "name,formatted_address,rating,opening_hours,formatted_phone_number,website,photos,geometry,types";

/// Places directory backed by the Google Places web service.
pub struct GooglePlacesClient {
    api: GoogleApi,
}

impl GooglePlacesClient {
    pub fn new(http: reqwest::Client, config: &GoogleMapsConfig) -> Self {
        Self {
            api: GoogleApi::new(http, config),
        }
    }
}

#[derive(Debug, Deserialize)]
struct NearbySearchResponse {
    status: String,
    #[serde(default)]
    results: Vec<NearbyResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NearbyResult {
    place_id: String,
    name: String,
    vicinity: Option<String>,
    geometry: Option<Geometry>,
    formatted_phone_number: Option<String>,
}

impl NearbySearchResponse {
    fn into_services(self, category: ServiceCategory) -> Result<Vec<ServiceLocation>, DomainError> {
        check_status(API, &self.status, self.error_message.as_deref(), true)?;

        Ok(self
            .results
            .into_iter()
            .filter_map(|place| {
                let Some(location) = place.geometry.as_ref().and_then(Geometry::coordinates) else {
                    debug!(place_id = %place.place_id, "skipping result without geometry");
                    return None;
                };
                Some(ServiceLocation {
                    id: place.place_id,
                    name: place.name,
                    address: place.vicinity.unwrap_or_default(),
                    location,
                    phone: place.formatted_phone_number,
                    category,
                })
            })
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct TextSearchResponse {
    status: String,
    #[serde(default)]
    results: Vec<TextSearchResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TextSearchResult {
    place_id: String,
    name: String,
    formatted_address: Option<String>,
    rating: Option<f64>,
    #[serde(default)]
    types: Vec<String>,
    geometry: Option<Geometry>,
    #[serde(default)]
    photos: Vec<Photo>,
}

#[derive(Debug, Deserialize)]
struct Photo {
    photo_reference: String,
}

impl TextSearchResponse {
    fn into_summaries(self) -> Result<Vec<PlaceSummary>, DomainError> {
        check_status(API, &self.status, self.error_message.as_deref(), true)?;

        Ok(self
            .results
            .into_iter()
            .map(|place| PlaceSummary {
                location: place.geometry.as_ref().and_then(Geometry::coordinates),
                photo_reference: place.photos.into_iter().next().map(|p| p.photo_reference),
                place_id: place.place_id,
                name: place.name,
                address: place.formatted_address,
                rating: place.rating,
                types: place.types,
            })
            .collect())
    }
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    status: String,
    result: Option<DetailsResult>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetailsResult {
    name: Option<String>,
    formatted_address: Option<String>,
    rating: Option<f64>,
    formatted_phone_number: Option<String>,
    website: Option<String>,
    geometry: Option<Geometry>,
    opening_hours: Option<OpeningHours>,
}

#[derive(Debug, Deserialize)]
struct OpeningHours {
    open_now: Option<bool>,
    #[serde(default)]
    weekday_text: Vec<String>,
}

impl DetailsResponse {
    fn into_record(self) -> Result<Option<PlaceDetailsRecord>, DomainError> {
        if matches!(self.status.as_str(), "NOT_FOUND" | "ZERO_RESULTS") {
            return Ok(None);
        }
        check_status(API, &self.status, self.error_message.as_deref(), false)?;

        Ok(self.result.map(|d| {
            let (opening_hours, open_now) = d
                .opening_hours
                .map(|h| (h.weekday_text, h.open_now))
                .unwrap_or_default();
            PlaceDetailsRecord {
                location: d.geometry.as_ref().and_then(Geometry::coordinates),
                name: d.name,
                address: d.formatted_address,
                rating: d.rating,
                phone: d.formatted_phone_number,
                website: d.website,
                opening_hours,
                open_now,
            }
        }))
    }
}

#[async_trait]
impl PlacesDirectory for GooglePlacesClient {
    #[instrument(skip(self), fields(provider_type = category.provider_type()))]
    async fn nearby_search(
        &self,
        origin: Coordinates,
        category: ServiceCategory,
        radius_meters: u32,
    ) -> Result<Vec<ServiceLocation>, DomainError> {
        let response: NearbySearchResponse = self
            .api
            .get_json(
                API,
                "place/nearbysearch/json",
                &[
                    ("location", origin.to_string()),
                    ("radius", radius_meters.to_string()),
                    ("type", category.provider_type().to_string()),
                ],
            )
            .await?;

        response.into_services(category)
    }

    #[instrument(skip(self))]
    async fn text_search(&self, query: &str) -> Result<Vec<PlaceSummary>, DomainError> {
        let response: TextSearchResponse = self
            .api
            .get_json(API, "place/textsearch/json", &[("query", query.to_string())])
            .await?;

        response.into_summaries()
    }

    #[instrument(skip(self))]
    async fn place_details(
        &self,
        place_id: &str,
    ) -> Result<Option<PlaceDetailsRecord>, DomainError> {
        let response: DetailsResponse = self
            .api
            .get_json(
                API,
                "place/details/json",
                &[
                    ("place_id", place_id.to_string()),
                    ("fields", DETAIL_FIELDS.to_string()),
                ],
            )
            .await?;

        response.into_record()
    }

    fn photo_url(&self, photo_reference: &str, max_width: u32) -> Option<String> {
        let key = self.api.api_key().ok()?;
        reqwest::Url::parse_with_params(
            &self.api.endpoint("place/photo"),
            &[
                ("maxwidth", max_width.to_string().as_str()),
                ("photo_reference", photo_reference),
                ("key", key),
            ],
        )
        .ok()
        .map(|url| url.to_string())
    }
}
