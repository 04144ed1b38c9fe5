//! Google Maps Platform adapters (Places and Directions web services).

mod directions;
mod places;

pub use directions::GoogleDirectionsClient;
pub use places::GooglePlacesClient;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::warn;

use crate::domain::{Coordinates, DomainError};
use crate::infrastructure::config::GoogleMapsConfig;
use crate::infrastructure::http::transport_error;

/// Shared plumbing for the Maps web services: base URL, key and the
/// `status` envelope every endpoint returns.
#[derive(Clone)]
pub(crate) struct GoogleApi {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GoogleApi {
    pub(crate) fn new(http: reqwest::Client, config: &GoogleMapsConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    pub(crate) fn api_key(&self) -> Result<&str, DomainError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| DomainError::configuration("Google Maps API key not configured"))
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        api: &str,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, DomainError> {
        let key = self.api_key()?;

        self.http
            .get(self.endpoint(path))
            .query(params)
            .query(&[("key", key)])
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| transport_error(api, e))?
            .json::<T>()
            .await
            .map_err(|e| transport_error(api, e))
    }
}

/// Maps returns HTTP 200 with a `status` field; only `OK` (and optionally
/// `ZERO_RESULTS`) mean success.
pub(crate) fn check_status(
    api: &str,
    status: &str,
    error_message: Option<&str>,
    allow_zero_results: bool,
) -> Result<(), DomainError> {
    match status {
        "OK" => Ok(()),
        "ZERO_RESULTS" if allow_zero_results => Ok(()),
        other => {
            warn!(api, status = other, detail = error_message.unwrap_or(""), "upstream rejected request");
            Err(DomainError::external(format!("{api} error: {other}")))
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Geometry {
    pub location: LatLng,
}

impl Geometry {
    pub(crate) fn coordinates(&self) -> Option<Coordinates> {
        Coordinates::new(self.location.lat, self.location.lng).ok()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TextValue {
    pub text: String,
}
