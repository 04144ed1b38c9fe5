use std::collections::BTreeMap;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::domain::{Coordinates, RankedService, ServiceCategory};

#[derive(Debug, Deserialize)]
pub struct NearbyRequest {
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "type")]
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct NearbyResponse {
    pub services: Vec<RankedService>,
}

pub async fn nearby_services(
    State(state): State<AppState>,
    payload: Result<Json<NearbyRequest>, JsonRejection>,
) -> Result<Json<NearbyResponse>, ApiError> {
    let Json(request) = payload?;

    let services = state
        .proximity
        .find_nearby(request.lat, request.lng, &request.category)
        .await?;

    Ok(Json(NearbyResponse { services }))
}

#[derive(Debug, Deserialize)]
pub struct AllNearbyRequest {
    pub lat: f64,
    pub lng: f64,
}

/// One list per category. A failed category is reported under `errors`
/// and leaves its list empty.
#[derive(Debug, Default, Serialize)]
pub struct AllNearbyResponse {
    pub police: Vec<RankedService>,
    pub hospital: Vec<RankedService>,
    pub fire: Vec<RankedService>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, String>,
}

pub async fn all_nearby_services(
    State(state): State<AppState>,
    payload: Result<Json<AllNearbyRequest>, JsonRejection>,
) -> Result<Json<AllNearbyResponse>, ApiError> {
    let Json(request) = payload?;
    let origin = Coordinates::new(request.lat, request.lng)?;

    let mut response = AllNearbyResponse::default();
    for (category, result) in state.proximity.find_all(origin).await {
        let services = match result {
            Ok(services) => services,
            Err(e) => {
                tracing::warn!(%category, error = %e, "category lookup failed");
                response.errors.insert(category.to_string(), e.to_string());
                continue;
            }
        };
        match category {
            ServiceCategory::Police => response.police = services,
            ServiceCategory::Hospital => response.hospital = services,
            ServiceCategory::Fire => response.fire = services,
        }
    }

    Ok(Json(response))
}
