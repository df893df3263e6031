#![allow(dead_code)]

use std::sync::Arc;

use swasthya_backend::api::routes::AppState;
use swasthya_backend::application::NearbyService;
use swasthya_backend::config::{PlacesConfig, SecurityConfig};
use swasthya_backend::infrastructure::PlaceProvider;
use swasthya_backend::observability::AppMetrics;

pub mod fixtures;

pub fn test_places_config() -> PlacesConfig {
    PlacesConfig {
        enabled: true,
        base_url: "http://places.test".to_string(),
        ..PlacesConfig::default()
    }
}

pub fn test_security_config() -> SecurityConfig {
    SecurityConfig {
        cors_allowed_origins: vec!["http://localhost:3000".to_string()],
        metrics_allow_private_only: true,
        metrics_admin_token: Some("metrics-admin".to_string()),
        ..SecurityConfig::default()
    }
}

pub fn nearby_service(provider: Arc<dyn PlaceProvider>) -> NearbyService {
    NearbyService::new(provider, test_places_config())
}

pub fn app_state(provider: Arc<dyn PlaceProvider>) -> AppState {
    let metrics = Arc::new(AppMetrics::default());
    AppState {
        nearby_service: Arc::new(nearby_service(provider).with_metrics(metrics.clone())),
        security: test_security_config(),
        metrics,
    }
}
