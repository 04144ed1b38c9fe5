pub mod config;
pub mod google;
pub mod http;
pub mod llm;
pub mod weather;

pub use config::{AppConfig, Config, PromptsConfig};
pub use google::{GoogleDirectionsClient, GooglePlacesClient};
pub use http::build_http_client;
pub use llm::GeminiLlm;
pub use weather::OpenWeatherClient;
