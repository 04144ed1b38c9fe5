use std::sync::Arc;
use tracing::{instrument, warn};

use crate::domain::{
    daily_forecast, ports::WeatherProvider, DomainError, WeatherQuery, WeatherReport,
};

pub struct WeatherService {
    provider: Arc<dyn WeatherProvider>,
    forecast_days: usize,
}

impl WeatherService {
    pub fn new(provider: Arc<dyn WeatherProvider>, forecast_days: usize) -> Self {
        Self {
            provider,
            forecast_days,
        }
    }

    /// Current conditions are required; a failed forecast only empties the
    /// `forecast` list.
    #[instrument(skip(self), fields(query = %query.describe()))]
    pub async fn report(&self, query: &WeatherQuery) -> Result<WeatherReport, DomainError> {
        let (current, forecast) =
            tokio::join!(self.provider.current(query), self.provider.forecast(query));
        let current = current?;

        let forecast = match forecast {
            Ok(samples) => daily_forecast(&samples, self.forecast_days),
            Err(DomainError::Configuration(msg)) => return Err(DomainError::Configuration(msg)),
            Err(e) => {
                warn!(error = %e, "forecast unavailable");
                Vec::new()
            }
        };

        Ok(WeatherReport::new(current, forecast))
    }
}
