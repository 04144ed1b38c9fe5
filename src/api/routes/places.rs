use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::domain::{Attraction, DomainError, PlaceInsights};

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub places: Vec<Attraction>,
}

pub async fn location_search(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Json(request) = payload?;

    let places = state
        .search
        .search(&request.query, request.location.as_deref())
        .await?;

    Ok(Json(SearchResponse { places }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDetailsRequest {
    pub place_name: String,
    #[serde(default)]
    pub location: String,
}

/// Failure body for place details: the error plus generic visitor info the
/// client can still render.
#[derive(Debug, Serialize)]
struct InsightsFailure {
    error: String,
    #[serde(flatten)]
    fallback: PlaceInsights,
}

pub async fn place_details(
    State(state): State<AppState>,
    payload: Result<Json<PlaceDetailsRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(request) = payload?;

    match state
        .enrichment
        .enrich(&request.place_name, &request.location)
        .await
    {
        Ok(insights) => Ok(Json(insights).into_response()),
        Err(e @ DomainError::Validation(_)) => Err(e.into()),
        Err(e) => {
            tracing::error!(place = %request.place_name, error = %e, "place details failed");
            let body = InsightsFailure {
                error: e.to_string(),
                fallback: PlaceInsights::fallback(),
            };
            Ok((StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response())
        }
    }
}
