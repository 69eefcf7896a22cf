//! Configuration management for the trip planner

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the built client bundle, served when set
    pub static_dir: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GeonamesConfig {
    pub base_url: String,
    pub username: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WeatherbitConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PixabayConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub image_type: String,
    /// Second query tried when the city itself yields no image
    pub fallback_query: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ProvidersConfig {
    pub timeout_seconds: u64,
    pub geonames: GeonamesConfig,
    pub weatherbit: WeatherbitConfig,
    pub pixabay: PixabayConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub providers: ProvidersConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load `{dir}/default` and `{dir}/{RUN_MODE}` (both optional), then the environment
    pub fn load_from(dir: &str) -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            .add_source(File::with_name(&format!("{}/default", dir)).required(false))
            .add_source(File::with_name(&format!("{}/{}", dir, run_mode)).required(false))
            // TRIP_PLANNER_PROVIDERS__PIXABAY__API_KEY=... style variables
            .add_source(
                Environment::with_prefix("TRIP_PLANNER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            // Plain variable names accepted from .env
            .set_override_option(
                "providers.geonames.username",
                env::var("GEONAMES_USERNAME").ok(),
            )?
            .set_override_option(
                "providers.weatherbit.api_key",
                env::var("WEATHERBIT_API_KEY").ok(),
            )?
            .set_override_option(
                "providers.pixabay.api_key",
                env::var("PIXABAY_API_KEY").ok(),
            )?
            .set_override_option(
                "server.port",
                env::var("PORT").ok().and_then(|p| p.parse::<i64>().ok()),
            )?
            .build()?;

        config.try_deserialize()
    }
}

impl ProvidersConfig {
    /// Names of the environment variables whose credential is not configured
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(&self.geonames.username) {
            missing.push("GEONAMES_USERNAME");
        }
        if is_blank(&self.weatherbit.api_key) {
            missing.push("WEATHERBIT_API_KEY");
        }
        if is_blank(&self.pixabay.api_key) {
            missing.push("PIXABAY_API_KEY");
        }
        missing
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            static_dir: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Default for GeonamesConfig {
    fn default() -> Self {
        Self {
            base_url: "http://api.geonames.org".to_string(),
            username: None,
        }
    }
}

impl Default for WeatherbitConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.weatherbit.io/v2.0".to_string(),
            api_key: None,
        }
    }
}

impl Default for PixabayConfig {
    fn default() -> Self {
        Self {
            base_url: "https://pixabay.com/api".to_string(),
            api_key: None,
            image_type: "photo".to_string(),
            fallback_query: None,
        }
    }
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 10,
            geonames: GeonamesConfig::default(),
            weatherbit: WeatherbitConfig::default(),
            pixabay: PixabayConfig::default(),
        }
    }
}
