use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::domain::{WeatherQuery, WeatherReport};

#[derive(Debug, Default, Deserialize)]
pub struct WeatherRequest {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub city: Option<String>,
}

pub async fn weather(
    State(state): State<AppState>,
    payload: Result<Json<WeatherRequest>, JsonRejection>,
) -> Result<Json<WeatherReport>, ApiError> {
    let Json(request) = payload?;
    let query = WeatherQuery::from_parts(request.lat, request.lng, request.city.as_deref())?;

    let report = state.weather.report(&query).await?;
    Ok(Json(report))
}
