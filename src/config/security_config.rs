use serde::Deserialize;

use super::ConfigError;

#[derive(Deserialize, Clone)]
pub struct SecurityConfig {
    #[serde(default = "crate::config::defaults::default_cors_allowed_origins")]
    pub cors_allowed_origins: Vec<String>,
    #[serde(default = "crate::config::defaults::default_metrics_allow_private_only")]
    pub metrics_allow_private_only: bool,
    #[serde(default)]
    pub metrics_admin_token: Option<String>,
    #[serde(default = "crate::config::defaults::default_global_rate_limit_per_minute")]
    pub global_rate_limit_per_minute: u32,
    #[serde(default = "crate::config::defaults::default_global_rate_limit_burst_size")]
    pub global_rate_limit_burst_size: u32,
}

impl std::fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field(
                "metrics_allow_private_only",
                &self.metrics_allow_private_only,
            )
            .field(
                "metrics_admin_token",
                &self.metrics_admin_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field(
                "global_rate_limit_per_minute",
                &self.global_rate_limit_per_minute,
            )
            .field(
                "global_rate_limit_burst_size",
                &self.global_rate_limit_burst_size,
            )
            .finish()
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            cors_allowed_origins: crate::config::defaults::default_cors_allowed_origins(),
            metrics_allow_private_only:
                crate::config::defaults::default_metrics_allow_private_only(),
            metrics_admin_token: None,
            global_rate_limit_per_minute:
                crate::config::defaults::default_global_rate_limit_per_minute(),
            global_rate_limit_burst_size:
                crate::config::defaults::default_global_rate_limit_burst_size(),
        }
    }
}

impl SecurityConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.global_rate_limit_per_minute == 0 {
            return Err(ConfigError::SecurityConfig(
                "global_rate_limit_per_minute must be greater than 0".to_string(),
            ));
        }

        if self.global_rate_limit_per_minute > 60_000 {
            return Err(ConfigError::SecurityConfig(format!(
                "global_rate_limit_per_minute must not exceed 60000, got {}",
                self.global_rate_limit_per_minute
            )));
        }

        if self.global_rate_limit_burst_size == 0 {
            return Err(ConfigError::SecurityConfig(
                "global_rate_limit_burst_size must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
