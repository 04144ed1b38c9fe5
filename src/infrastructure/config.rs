use serde::Deserialize;
use std::path::Path;

use crate::domain::DomainError;

pub const GOOGLE_MAPS_API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";
pub const OPENWEATHER_API_KEY_ENV: &str = "OPENWEATHER_API_KEY";
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Everything the service needs, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub config: Config,
    pub prompts: PromptsConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub http: HttpConfig,
    pub google_maps: GoogleMapsConfig,
    pub openweather: OpenWeatherConfig,
    pub llm: LlmConfig,
    pub nearby: NearbyConfig,
    pub search: SearchConfig,
    pub weather: WeatherConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            user_agent: concat!("tourist-safety/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GoogleMapsConfig {
    pub base_url: String,
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for GoogleMapsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://maps.googleapis.com/maps/api".to_string(),
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OpenWeatherConfig {
    pub base_url: String,
    pub country_code: String,
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for OpenWeatherConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openweathermap.org/data/2.5".to_string(),
            country_code: "IN".to_string(),
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub model: String,
    pub timeout_seconds: u64,
    #[serde(skip)]
    pub api_key_present: bool,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            timeout_seconds: 60,
            api_key_present: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NearbyConfig {
    pub radius_meters: u32,
    pub max_results: usize,
}

impl Default for NearbyConfig {
    fn default() -> Self {
        Self {
            radius_meters: 5_000,
            max_results: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub max_results: usize,
    pub query_suffix: String,
    pub photo_max_width: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: 8,
            query_suffix: "tourist attraction India".to_string(),
            photo_max_width: 400,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub forecast_days: usize,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self { forecast_days: 7 }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PromptsConfig {
    pub place_details: PlaceDetailsPrompt,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaceDetailsPrompt {
    pub system: String,
    pub user: String,
}

impl Default for PlaceDetailsPrompt {
    fn default() -> Self {
        Self {
            system: DEFAULT_PLACE_DETAILS_SYSTEM.to_string(),
            user: DEFAULT_PLACE_DETAILS_USER.to_string(),
        }
    }
}

impl PlaceDetailsPrompt {
    pub fn render_user(&self, place: &str, location: &str) -> String {
        self.user
            .replace("{place}", place)
            .replace("{location}", location)
    }
}

const DEFAULT_PLACE_DETAILS_SYSTEM: &str = "You are a travel information expert. Provide detailed, accurate information about tourist places in India. Fill in every field: a 2-3 sentence engaging description, the estimated entry fee in INR (0 if free), typical opening hours, the best season to visit, three highlights and two practical tips.";

const DEFAULT_PLACE_DETAILS_USER: &str = "Provide detailed information about {place} in {location}. Include estimated entry fees, typical timings, best season to visit, highlights, and travel tips.";

impl AppConfig {
    /// Reads `config.yaml` and `prompts.yaml` from `CONFIG_DIR` (default
    /// `config`), then applies environment overrides.
    pub fn load() -> Result<Self, DomainError> {
        let dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".into());
        let mut app = Self::from_dir(Path::new(&dir))?;
        app.apply_env(|key| std::env::var(key).ok());
        Ok(app)
    }

    /// Missing files fall back to defaults; malformed files are an error.
    pub fn from_dir(dir: &Path) -> Result<Self, DomainError> {
        Ok(Self {
            config: read_yaml(&dir.join("config.yaml"))?.unwrap_or_default(),
            prompts: read_yaml(&dir.join("prompts.yaml"))?.unwrap_or_default(),
        })
    }

    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| var(key).filter(|v| !v.trim().is_empty());

        if let Some(host) = non_empty("SERVER_HOST") {
            self.config.server.host = host;
        }
        if let Some(port) = non_empty("SERVER_PORT").and_then(|p| p.parse().ok()) {
            self.config.server.port = port;
        }
        if let Some(origins) = non_empty("CORS_ALLOWED_ORIGINS") {
            self.config.cors.allowed_origins = origins
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect();
        }
        self.config.google_maps.api_key = non_empty(GOOGLE_MAPS_API_KEY_ENV);
        self.config.openweather.api_key = non_empty(OPENWEATHER_API_KEY_ENV);
        self.config.llm.api_key_present = non_empty(GEMINI_API_KEY_ENV).is_some();
    }
}

fn read_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Option<T>, DomainError> {
    match std::fs::read_to_string(path) {
        Ok(raw) => serde_yaml::from_str(&raw)
            .map(Some)
            .map_err(|e| DomainError::configuration(format!("{}: {e}", path.display()))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(DomainError::configuration(format!(
            "{}: {e}",
            path.display()
        ))),
    }
}
