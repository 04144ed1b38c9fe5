use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::domain::Route;

#[derive(Debug, Deserialize)]
pub struct DirectionsRequest {
    pub origin: String,
    pub destination: String,
}

#[derive(Debug, Serialize)]
pub struct DirectionsResponse {
    pub routes: Vec<Route>,
}

pub async fn directions(
    State(state): State<AppState>,
    payload: Result<Json<DirectionsRequest>, JsonRejection>,
) -> Result<Json<DirectionsResponse>, ApiError> {
    let Json(request) = payload?;

    let routes = state
        .directions
        .directions(&request.origin, &request.destination)
        .await?;

    Ok(Json(DirectionsResponse { routes }))
}
