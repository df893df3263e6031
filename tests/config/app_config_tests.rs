//! Tests for AppConfig loading from `config/default.toml` and the environment.

use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;
use swasthya_backend::config::AppConfig;

static SERIALIZE: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

fn cleanup_env_vars() {
    env::remove_var("PLACES_BASE_URL");
    env::remove_var("PLACES_USER_AGENT");
    env::remove_var("PLACES_ENABLED");
    env::remove_var("PLACES_TIMEOUT_SECONDS");
    env::remove_var("METRICS_ADMIN_TOKEN");
    env::remove_var("LOG_LEVEL");
    env::remove_var("APP_PORT");
    env::remove_var("APP_ENVIRONMENT");
    env::remove_var("APP_PLACES__DEFAULT_LIMIT");
    env::remove_var("APP_SECURITY__GLOBAL_RATE_LIMIT_PER_MINUTE");
}

#[test]
fn test_app_config_defaults_from_toml() {
    let _lock = SERIALIZE.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let config = AppConfig::from_env().expect("Failed to load config");

    assert_eq!(config.port, 8080);
    assert!(config.places.is_enabled());
    assert_eq!(config.places.timeout_seconds, 5);
    assert_eq!(config.places.default_limit, 10);
    assert_eq!(config.places.default_radius_meters, 5000);
    assert_eq!(
        config.places.all_categories_expression(),
        "hospital|clinic|emergency"
    );
    assert!(config.validate().is_ok());
}

#[test]
fn test_app_config_places_env_overrides() {
    let _lock = SERIALIZE.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    env::set_var("PLACES_BASE_URL", "  https://geo.internal.example/  ");
    env::set_var("PLACES_USER_AGENT", "swasthya-test/1.0");
    env::set_var("PLACES_TIMEOUT_SECONDS", "2");

    let config = AppConfig::from_env().expect("Failed to load config");

    cleanup_env_vars();

    assert_eq!(config.places.base_url, "https://geo.internal.example/");
    assert_eq!(
        config.places.search_url(),
        "https://geo.internal.example/search"
    );
    assert_eq!(config.places.user_agent, "swasthya-test/1.0");
    assert_eq!(config.places.timeout_seconds, 2);
}

#[test]
fn test_app_config_from_env_with_app_prefix() {
    let _lock = SERIALIZE.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    env::set_var("APP_PORT", "9090");
    env::set_var("APP_PLACES__DEFAULT_LIMIT", "20");
    env::set_var("APP_SECURITY__GLOBAL_RATE_LIMIT_PER_MINUTE", "500");

    let config = AppConfig::from_env().expect("Failed to load config");

    cleanup_env_vars();

    assert_eq!(config.port, 9090);
    assert_eq!(config.places.default_limit, 20);
    assert_eq!(config.security.global_rate_limit_per_minute, 500);
}

#[test]
fn test_app_config_disabled_provider() {
    let _lock = SERIALIZE.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    env::set_var("PLACES_ENABLED", "false");

    let config = AppConfig::from_env().expect("Failed to load config");

    cleanup_env_vars();

    assert!(!config.places.is_enabled());
    assert!(config.validate().is_ok());
}

#[test]
fn test_app_config_blank_metrics_token_is_none() {
    let _lock = SERIALIZE.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    env::set_var("METRICS_ADMIN_TOKEN", "   ");

    let config = AppConfig::from_env().expect("Failed to load config");

    cleanup_env_vars();

    assert_eq!(config.security.metrics_admin_token, None);
}

#[test]
fn test_app_config_validate_rejects_bad_limit() {
    let _lock = SERIALIZE.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    env::set_var("APP_PLACES__DEFAULT_LIMIT", "0");

    let config = AppConfig::from_env().expect("Failed to load config");

    cleanup_env_vars();

    let err = config.validate().expect_err("zero limit must be rejected");
    assert!(err.to_string().contains("default_limit"));
}
