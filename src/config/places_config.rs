use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Places configuration is invalid: {0}")]
    PlacesConfig(String),

    #[error("Security configuration is invalid: {0}")]
    SecurityConfig(String),
}

/// Outbound place-search provider settings.
#[derive(Debug, Deserialize, Clone)]
pub struct PlacesConfig {
    #[serde(default = "crate::config::defaults::default_places_enabled")]
    pub enabled: bool,
    #[serde(default = "crate::config::defaults::default_places_base_url")]
    pub base_url: String,
    #[serde(default = "crate::config::defaults::default_places_user_agent")]
    pub user_agent: String,
    #[serde(default = "crate::config::defaults::default_places_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "crate::config::defaults::default_places_limit")]
    pub default_limit: u32,
    #[serde(default = "crate::config::defaults::default_places_radius_meters")]
    pub default_radius_meters: u32,
    /// Categories searched when a caller asks for `all`.
    #[serde(default = "crate::config::defaults::default_all_categories")]
    pub all_categories: Vec<String>,
    #[serde(default = "crate::config::defaults::default_category_separator")]
    pub category_separator: String,
}

impl Default for PlacesConfig {
    fn default() -> Self {
        Self {
            enabled: crate::config::defaults::default_places_enabled(),
            base_url: crate::config::defaults::default_places_base_url(),
            user_agent: crate::config::defaults::default_places_user_agent(),
            timeout_seconds: crate::config::defaults::default_places_timeout_seconds(),
            default_limit: crate::config::defaults::default_places_limit(),
            default_radius_meters: crate::config::defaults::default_places_radius_meters(),
            all_categories: crate::config::defaults::default_all_categories(),
            category_separator: crate::config::defaults::default_category_separator(),
        }
    }
}

pub const MAX_RESULT_LIMIT: u32 = 50;

impl PlacesConfig {
    pub fn is_enabled(&self) -> bool {
        self.enabled && !self.base_url.trim().is_empty()
    }

    /// Provider search expression used for the `all` category.
    pub fn all_categories_expression(&self) -> String {
        self.all_categories
            .iter()
            .map(|category| category.trim())
            .filter(|category| !category.is_empty())
            .collect::<Vec<_>>()
            .join(&self.category_separator)
    }

    pub fn search_url(&self) -> String {
        format!("{}/search", self.base_url.trim().trim_end_matches('/'))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.all_categories_expression().is_empty() {
            return Err(ConfigError::PlacesConfig(
                "all_categories must contain at least one category".to_string(),
            ));
        }

        if self.default_limit == 0 || self.default_limit > MAX_RESULT_LIMIT {
            return Err(ConfigError::PlacesConfig(format!(
                "default_limit must be between 1 and {MAX_RESULT_LIMIT}, got {}",
                self.default_limit
            )));
        }

        if !self.enabled {
            return Ok(());
        }

        if self.base_url.trim().is_empty() {
            return Err(ConfigError::PlacesConfig(
                "PLACES_BASE_URL is required when the places provider is enabled".to_string(),
            ));
        }

        if self.user_agent.trim().is_empty() {
            return Err(ConfigError::PlacesConfig(
                "PLACES_USER_AGENT is required when the places provider is enabled".to_string(),
            ));
        }

        if self.timeout_seconds == 0 {
            return Err(ConfigError::PlacesConfig(
                "timeout_seconds must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
