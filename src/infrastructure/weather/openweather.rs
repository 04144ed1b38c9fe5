use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::instrument;

use crate::domain::{
    ports::WeatherProvider, Coordinates, CurrentConditions, DomainError, ForecastSample,
    WeatherQuery,
};
use crate::infrastructure::config::OpenWeatherConfig;
use crate::infrastructure::http::transport_error;

const API: &str = "Weather API";

/// OpenWeatherMap 2.5 current-weather and 5-day forecast endpoints.
pub struct OpenWeatherClient {
    http: reqwest::Client,
    base_url: String,
    country_code: String,
    api_key: Option<String>,
}

impl OpenWeatherClient {
    pub fn new(http: reqwest::Client, config: &OpenWeatherConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            country_code: config.country_code.clone(),
            api_key: config.api_key.clone(),
        }
    }

    fn location_params(&self, query: &WeatherQuery) -> Vec<(&'static str, String)> {
        match query {
            WeatherQuery::Coordinates(c) => {
                vec![("lat", c.lat.to_string()), ("lon", c.lng.to_string())]
            }
            WeatherQuery::City(city) if self.country_code.is_empty() => vec![("q", city.clone())],
            WeatherQuery::City(city) => vec![("q", format!("{city},{}", self.country_code))],
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &WeatherQuery,
    ) -> Result<T, DomainError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| DomainError::configuration("OpenWeather API key not configured"))?;

        let response = self
            .http
            .get(format!("{}/{}", self.base_url, path))
            .query(&self.location_params(query))
            .query(&[("units", "metric"), ("appid", key)])
            .send()
            .await
            .map_err(|e| transport_error(API, e))?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| status.to_string());
            return Err(DomainError::external(format!("{API} error: {message}")));
        }

        response.json::<T>().await.map_err(|e| transport_error(API, e))
    }
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CurrentResponse {
    name: String,
    main: MainBlock,
    #[serde(default)]
    weather: Vec<Condition>,
    wind: Wind,
    coord: Coord,
}

#[derive(Debug, Deserialize)]
struct MainBlock {
    temp: f64,
    #[serde(default)]
    humidity: u32,
}

#[derive(Debug, Deserialize)]
struct Condition {
    main: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct Coord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    #[serde(default)]
    list: Vec<ForecastItem>,
}

#[derive(Debug, Deserialize)]
struct ForecastItem {
    dt: i64,
    main: MainBlock,
    #[serde(default)]
    weather: Vec<Condition>,
}

impl CurrentResponse {
    fn into_conditions(self) -> Result<CurrentConditions, DomainError> {
        let condition = self.weather.into_iter().next().ok_or_else(|| {
            DomainError::external(format!("{API} error: response has no conditions"))
        })?;
        let coordinates = Coordinates::new(self.coord.lat, self.coord.lon)
            .map_err(|e| DomainError::external(format!("{API} error: {e}")))?;

        Ok(CurrentConditions {
            location_name: self.name,
            temperature_c: self.main.temp,
            condition: condition.main,
            description: condition.description,
            humidity: self.main.humidity,
            wind_speed_ms: self.wind.speed,
            coordinates,
        })
    }
}

impl ForecastResponse {
    fn into_samples(self) -> Vec<ForecastSample> {
        self.list
            .into_iter()
            .filter_map(|item| {
                let timestamp = DateTime::<Utc>::from_timestamp(item.dt, 0)?;
                let condition = item.weather.into_iter().next()?;
                Some(ForecastSample {
                    timestamp,
                    temperature_c: item.main.temp,
                    condition: condition.main,
                })
            })
            .collect()
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    #[instrument(skip(self))]
    async fn current(&self, query: &WeatherQuery) -> Result<CurrentConditions, DomainError> {
        let response: CurrentResponse = self.get_json("weather", query).await?;
        response.into_conditions()
    }

    #[instrument(skip(self))]
    async fn forecast(&self, query: &WeatherQuery) -> Result<Vec<ForecastSample>, DomainError> {
        let response: ForecastResponse = self.get_json("forecast", query).await?;
        Ok(response.into_samples())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(country_code: &str, api_key: Option<&str>) -> OpenWeatherClient {
        OpenWeatherClient::new(
            reqwest::Client::new(),
            &OpenWeatherConfig {
                country_code: country_code.into(),
                api_key: api_key.map(String::from),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_city_query_scoped_by_country() {
        let params = client("IN", None).location_params(&WeatherQuery::City("Pune".into()));
        assert_eq!(params, vec![("q", "Pune,IN".to_string())]);

        let params = client("", None).location_params(&WeatherQuery::City("Pune".into()));
        assert_eq!(params, vec![("q", "Pune".to_string())]);
    }

    #[test]
    fn test_coordinate_query_uses_lon() {
        let q = WeatherQuery::Coordinates(Coordinates::new(18.5, 73.85).unwrap());
        let params = client("IN", None).location_params(&q);
        assert_eq!(params, vec![("lat", "18.5".to_string()), ("lon", "73.85".to_string())]);
    }

    #[tokio::test]
    async fn test_missing_key_is_configuration_error() {
        let err = client("IN", None)
            .current(&WeatherQuery::City("Pune".into()))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "OpenWeather API key not configured");
    }

    #[test]
    fn test_current_response_mapping() {
        let response: CurrentResponse = serde_json::from_value(serde_json::json!({
            "cod": 200,
            "name": "Pune",
            "main": { "temp": 27.3, "humidity": 61, "pressure": 1012 },
            "weather": [{ "main": "Clouds", "description": "scattered clouds" }],
            "wind": { "speed": 3.1 },
            "coord": { "lat": 18.52, "lon": 73.86 }
        }))
        .unwrap();

        let current = response.into_conditions().unwrap();
        assert_eq!(current.location_name, "Pune");
        assert_eq!(current.condition, "Clouds");
        assert_eq!(current.coordinates.lng, 73.86);
    }

    #[test]
    fn test_forecast_response_mapping_skips_incomplete_items() {
        let response: ForecastResponse = serde_json::from_value(serde_json::json!({
            "list": [
                { "dt": 1704067200, "main": { "temp": 21.0 }, "weather": [{ "main": "Clear" }] },
                { "dt": 1704078000, "main": { "temp": 22.0 }, "weather": [] }
            ]
        }))
        .unwrap();

        let samples = response.into_samples();
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].timestamp.timestamp(), 1_704_067_200);
    }
}
