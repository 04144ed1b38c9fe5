use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::api::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub google_maps: String,
    pub openweather: String,
    pub llm: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

fn credential_status(present: bool) -> &'static str {
    if present {
        "configured"
    } else {
        "missing"
    }
}

/// Ready once every upstream credential is present. Emergency lookups only
/// need Google Maps, so that key alone decides the status code.
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    let config = &state.config.config;
    let maps = config.google_maps.api_key.is_some();
    let weather = config.openweather.api_key.is_some();
    let llm = config.llm.api_key_present;

    let status = match (maps, weather && llm) {
        (true, true) => "ready",
        (true, false) => "degraded",
        (false, _) => "not_ready",
    };

    let response = ReadinessResponse {
        status: status.into(),
        google_maps: credential_status(maps).into(),
        openweather: credential_status(weather).into(),
        llm: credential_status(llm).into(),
    };

    let code = if maps {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(response))
}
