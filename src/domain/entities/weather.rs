use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::geo::Coordinates;
use crate::domain::errors::DomainError;

/// What the caller wants weather for.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherQuery {
    Coordinates(Coordinates),
    City(String),
}

impl WeatherQuery {
    /// Coordinates win when both are supplied; a blank city counts as absent.
    pub fn from_parts(
        lat: Option<f64>,
        lng: Option<f64>,
        city: Option<&str>,
    ) -> Result<Self, DomainError> {
        if let (Some(lat), Some(lng)) = (lat, lng) {
            return Ok(Self::Coordinates(Coordinates::new(lat, lng)?));
        }

        match city.map(str::trim).filter(|c| !c.is_empty()) {
            Some(city) => Ok(Self::City(city.to_string())),
            None => Err(DomainError::validation(
                "Either coordinates or city name required",
            )),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Coordinates(c) => c.to_string(),
            Self::City(city) => city.clone(),
        }
    }
}

/// Current conditions as reported by the provider, metric units.
#[derive(Debug, Clone)]
pub struct CurrentConditions {
    pub location_name: String,
    pub temperature_c: f64,
    pub condition: String,
    pub description: String,
    pub humidity: u32,
    pub wind_speed_ms: f64,
    pub coordinates: Coordinates,
}

/// One forecast sample (the provider reports every few hours).
#[derive(Debug, Clone)]
pub struct ForecastSample {
    pub timestamp: DateTime<Utc>,
    pub temperature_c: f64,
    pub condition: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    pub day: String,
    pub temp: i64,
    pub condition: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherReport {
    pub location: String,
    pub temperature: i64,
    pub condition: String,
    pub description: String,
    pub humidity: u32,
    pub wind_speed: i64,
    pub forecast: Vec<DailyForecast>,
    pub coordinates: Coordinates,
}

impl WeatherReport {
    pub fn new(current: CurrentConditions, forecast: Vec<DailyForecast>) -> Self {
        Self {
            location: current.location_name,
            temperature: current.temperature_c.round() as i64,
            condition: current.condition,
            description: current.description,
            humidity: current.humidity,
            wind_speed: (current.wind_speed_ms * 3.6).round() as i64,
            forecast,
            coordinates: current.coordinates,
        }
    }
}

/// Keeps the first sample of each weekday, in provider order, up to `max_days`.
pub fn daily_forecast(samples: &[ForecastSample], max_days: usize) -> Vec<DailyForecast> {
    let mut seen = HashSet::new();
    let mut days = Vec::new();

    for sample in samples {
        if days.len() >= max_days {
            break;
        }
        let day = sample.timestamp.format("%a").to_string();
        if seen.insert(day.clone()) {
            days.push(DailyForecast {
                day,
                temp: sample.temperature_c.round() as i64,
                condition: sample.condition.clone(),
            });
        }
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(ts: i64, temp: f64, condition: &str) -> ForecastSample {
        ForecastSample {
            timestamp: Utc.timestamp_opt(ts, 0).unwrap(),
            temperature_c: temp,
            condition: condition.to_string(),
        }
    }

    #[test]
    fn test_query_prefers_coordinates() {
        let q = WeatherQuery::from_parts(Some(19.07), Some(72.87), Some("Mumbai")).unwrap();
        assert!(matches!(q, WeatherQuery::Coordinates(_)));
    }

    #[test]
    fn test_query_falls_back_to_city() {
        let q = WeatherQuery::from_parts(Some(19.07), None, Some(" Jaipur ")).unwrap();
        assert_eq!(q, WeatherQuery::City("Jaipur".into()));
    }

    #[test]
    fn test_query_requires_something() {
        let err = WeatherQuery::from_parts(None, None, Some("  ")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_daily_forecast_one_per_weekday() {
        // 2024-01-01 is a Monday.
        let monday = 1_704_067_200;
        let hour = 3_600;
        let samples = vec![
            sample(monday, 20.4, "Clear"),
            sample(monday + 3 * hour, 25.0, "Clouds"),
            sample(monday + 24 * hour, 21.6, "Rain"),
            sample(monday + 27 * hour, 22.0, "Rain"),
            sample(monday + 48 * hour, 19.5, "Clear"),
        ];

        let days = daily_forecast(&samples, 7);
        assert_eq!(days.len(), 3);
        assert_eq!(days[0], DailyForecast { day: "Mon".into(), temp: 20, condition: "Clear".into() });
        assert_eq!(days[1].day, "Tue");
        assert_eq!(days[1].temp, 22);
        assert_eq!(days[2].day, "Wed");
        assert_eq!(days[2].temp, 20);
    }

    #[test]
    fn test_daily_forecast_caps_days() {
        let day = 86_400;
        let samples: Vec<_> = (0..10).map(|i| sample(1_704_067_200 + i * day, 10.0, "Clear")).collect();
        assert_eq!(daily_forecast(&samples, 7).len(), 7);
    }

    #[test]
    fn test_report_converts_wind_to_kmh() {
        let report = WeatherReport::new(
            CurrentConditions {
                location_name: "Mumbai".into(),
                temperature_c: 29.6,
                condition: "Haze".into(),
                description: "haze".into(),
                humidity: 70,
                wind_speed_ms: 4.12,
                coordinates: Coordinates::new(19.07, 72.88).unwrap(),
            },
            vec![],
        );
        assert_eq!(report.temperature, 30);
        assert_eq!(report.wind_speed, 15);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["windSpeed"], 15);
    }
}
