mod directions;
mod llm;
mod places_directory;
mod weather;

pub use directions::DirectionsProvider;
pub use llm::LlmService;
pub use places_directory::PlacesDirectory;
pub use weather::WeatherProvider;
