use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::state::AppState;
use crate::domain::Incident;

#[derive(Debug, Deserialize)]
pub struct IncidentsRequest {
    pub location: String,
}

#[derive(Debug, Serialize)]
pub struct IncidentsResponse {
    pub incidents: Vec<Incident>,
}

pub async fn incidents(
    State(state): State<AppState>,
    payload: Result<Json<IncidentsRequest>, JsonRejection>,
) -> Result<Json<IncidentsResponse>, ApiError> {
    let Json(request) = payload?;
    let incidents = state.incidents.incidents(&request.location)?;
    Ok(Json(IncidentsResponse { incidents }))
}
