mod geo;
mod incident;
mod place;
mod route;
mod service;
mod weather;

pub use geo::{haversine_km, Coordinates, Distance, EARTH_RADIUS_KM};
pub use incident::{humanize_age, Incident, IncidentKind, Severity};
pub use place::{Attraction, PlaceDetailsRecord, PlaceInsights, PlaceSummary};
pub use route::{strip_html_tags, Route, RouteStep};
pub use service::{RankedService, ServiceCategory, ServiceLocation};
pub use weather::{
    daily_forecast, CurrentConditions, DailyForecast, ForecastSample, WeatherQuery, WeatherReport,
};
