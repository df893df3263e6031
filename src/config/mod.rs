pub mod defaults;
pub mod places_config;
pub mod security_config;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

pub use places_config::{ConfigError, PlacesConfig, MAX_RESULT_LIMIT};
pub use security_config::SecurityConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "defaults::default_host")]
    pub host: String,
    #[serde(default = "defaults::default_port")]
    pub port: u16,
    #[serde(default = "defaults::default_environment")]
    pub environment: String,
    #[serde(default)]
    pub places: PlacesConfig,
    #[serde(default)]
    pub security: SecurityConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "defaults::default_logging_level")]
    pub level: String,
    #[serde(default = "defaults::default_logging_json_format")]
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::default_logging_level(),
            json_format: defaults::default_logging_json_format(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Box<figment::Error>> {
        let mut config: Self = Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Toml::file("config/development.toml").nested())
            .merge(Env::prefixed("APP_").split("__"))
            .merge(
                Env::raw()
                    .only(&[
                        "PLACES_BASE_URL",
                        "PLACES_USER_AGENT",
                        "PLACES_ENABLED",
                        "PLACES_TIMEOUT_SECONDS",
                        "METRICS_ADMIN_TOKEN",
                        "LOG_LEVEL",
                    ])
                    .map(|key| match key.as_str() {
                        "PLACES_BASE_URL" => "places.base_url".into(),
                        "PLACES_USER_AGENT" => "places.user_agent".into(),
                        "PLACES_ENABLED" => "places.enabled".into(),
                        "PLACES_TIMEOUT_SECONDS" => "places.timeout_seconds".into(),
                        "METRICS_ADMIN_TOKEN" => "security.metrics_admin_token".into(),
                        "LOG_LEVEL" => "logging.level".into(),
                        _ => key.into(),
                    }),
            )
            .extract()
            .map_err(Box::new)?;

        config.security.metrics_admin_token =
            defaults::normalize_optional_string(config.security.metrics_admin_token);
        config.places.base_url = config.places.base_url.trim().to_string();

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.places.validate()?;
        self.security.validate()
    }
}
