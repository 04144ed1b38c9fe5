use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use super::{check_status, GoogleApi, TextValue};
use crate::domain::{ports::DirectionsProvider, DomainError, Route, RouteStep};
use crate::infrastructure::config::GoogleMapsConfig;

const API: &str = "Directions API";

pub struct GoogleDirectionsClient {
    api: GoogleApi,
}

impl GoogleDirectionsClient {
    pub fn new(http: reqwest::Client, config: &GoogleMapsConfig) -> Self {
        Self {
            api: GoogleApi::new(http, config),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    routes: Vec<WireRoute>,
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireRoute {
    #[serde(default)]
    summary: String,
    #[serde(default)]
    legs: Vec<Leg>,
    overview_polyline: Polyline,
}

#[derive(Debug, Deserialize)]
struct Leg {
    distance: TextValue,
    duration: TextValue,
    #[serde(default)]
    steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
struct Step {
    html_instructions: String,
    distance: TextValue,
    duration: TextValue,
}

#[derive(Debug, Deserialize)]
struct Polyline {
    points: String,
}

impl DirectionsResponse {
    /// Only the first leg is reported; requests never carry waypoints.
    fn into_routes(self) -> Result<Vec<Route>, DomainError> {
        check_status(API, &self.status, self.error_message.as_deref(), false)?;

        Ok(self
            .routes
            .into_iter()
            .enumerate()
            .filter_map(|(route_index, route)| {
                let leg = route.legs.into_iter().next()?;
                Some(Route {
                    route_index,
                    summary: route.summary,
                    distance: leg.distance.text,
                    duration: leg.duration.text,
                    steps: leg
                        .steps
                        .into_iter()
                        .map(|step| RouteStep {
                            instruction: step.html_instructions,
                            distance: step.distance.text,
                            duration: step.duration.text,
                        })
                        .collect(),
                    polyline: route.overview_polyline.points,
                })
            })
            .collect())
    }
}

#[async_trait]
impl DirectionsProvider for GoogleDirectionsClient {
    #[instrument(skip(self))]
    async fn routes(&self, origin: &str, destination: &str) -> Result<Vec<Route>, DomainError> {
        let response: DirectionsResponse = self
            .api
            .get_json(
                API,
                "directions/json",
                &[
                    ("origin", origin.to_string()),
                    ("destination", destination.to_string()),
                    ("mode", "driving".to_string()),
                    ("alternatives", "true".to_string()),
                ],
            )
            .await?;

        response.into_routes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routes_from_first_leg() {
        let response: DirectionsResponse = serde_json::from_value(serde_json::json!({
            "status": "OK",
            "routes": [
                {
                    "summary": "Marine Dr",
                    "legs": [{
                        "distance": { "text": "14.2 km", "value": 14200 },
                        "duration": { "text": "38 mins", "value": 2280 },
                        "steps": [{
                            "html_instructions": "Head <b>north</b>",
                            "distance": { "text": "0.2 km" },
                            "duration": { "text": "1 min" }
                        }]
                    }],
                    "overview_polyline": { "points": "a~l~Fjk~uOwHJy@P" }
                },
                {
                    "summary": "Legless",
                    "legs": [],
                    "overview_polyline": { "points": "" }
                },
                {
                    "summary": "Sea Link",
                    "legs": [{
                        "distance": { "text": "12.0 km" },
                        "duration": { "text": "30 mins" }
                    }],
                    "overview_polyline": { "points": "xyz" }
                }
            ]
        }))
        .unwrap();

        let routes = response.into_routes().unwrap();
        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].route_index, 0);
        assert_eq!(routes[0].distance, "14.2 km");
        assert_eq!(routes[0].steps[0].instruction, "Head <b>north</b>");
        assert_eq!(routes[1].route_index, 2);
        assert_eq!(routes[1].summary, "Sea Link");
        assert!(routes[1].steps.is_empty());
    }

    #[test]
    fn test_zero_results_is_error() {
        let response: DirectionsResponse =
            serde_json::from_value(serde_json::json!({ "status": "ZERO_RESULTS" })).unwrap();
        let err = response.into_routes().unwrap_err();
        assert_eq!(err.to_string(), "Directions API error: ZERO_RESULTS");
    }
}
