use async_trait::async_trait;

use crate::domain::{errors::DomainError, CurrentConditions, ForecastSample, WeatherQuery};

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, query: &WeatherQuery) -> Result<CurrentConditions, DomainError>;
    async fn forecast(&self, query: &WeatherQuery) -> Result<Vec<ForecastSample>, DomainError>;
}
