use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header::ACCEPT, Client};
use tracing::{debug, error};

use crate::config::PlacesConfig;
use crate::domain::{Coordinate, DomainError, RawProviderRecord};
use crate::error::{AppError, AppResult};

use super::traits::PlaceProvider;

/// Nominatim-compatible search client.
pub struct HttpPlaceProvider {
    config: PlacesConfig,
    client: Client,
}

impl HttpPlaceProvider {
    /// Builds a client with the configured timeout and `User-Agent`.
    ///
    /// Fails when the provider is disabled or has no base URL.
    pub fn new(config: PlacesConfig) -> AppResult<Self> {
        if !config.is_enabled() {
            return Err(AppError::InternalError(anyhow::anyhow!(
                "places provider base URL not configured"
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                AppError::InternalError(anyhow::anyhow!("Failed to build places client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    pub(crate) fn search_url(&self) -> String {
        self.config.search_url()
    }

    pub(crate) fn query_params(
        origin: Coordinate,
        category_expr: &str,
        limit: u32,
        radius_meters: u32,
    ) -> Vec<(&'static str, String)> {
        vec![
            ("q", category_expr.to_string()),
            ("lat", origin.latitude().to_string()),
            ("lon", origin.longitude().to_string()),
            ("format", "json".to_string()),
            ("addressdetails", "1".to_string()),
            ("limit", limit.to_string()),
            ("radius", radius_meters.to_string()),
        ]
    }
}

#[async_trait]
impl PlaceProvider for HttpPlaceProvider {
    async fn search(
        &self,
        origin: Coordinate,
        category_expr: &str,
        limit: u32,
        radius_meters: u32,
    ) -> Result<Vec<RawProviderRecord>, DomainError> {
        let url = self.search_url();
        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .query(&Self::query_params(origin, category_expr, limit, radius_meters))
            .send()
            .await
            .map_err(|e| {
                error!(
                    error = %e,
                    url = %url,
                    timed_out = e.is_timeout(),
                    "Failed to send search request to places provider"
                );
                if e.is_timeout() {
                    DomainError::provider_unavailable("request timed out")
                } else {
                    DomainError::provider_unavailable(format!("request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = %status, url = %url, "Places provider rejected search request");
            return Err(DomainError::provider_unavailable(format!(
                "provider responded with status {status}"
            )));
        }

        let records = response
            .json::<Vec<RawProviderRecord>>()
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to parse places provider response");
                DomainError::provider_unavailable(format!("unparseable payload: {e}"))
            })?;

        debug!(count = records.len(), "places provider returned records");
        Ok(records)
    }
}

/// Provider used when no place search backend is configured.
pub struct DisabledPlaceProvider;

#[async_trait]
impl PlaceProvider for DisabledPlaceProvider {
    async fn search(
        &self,
        _origin: Coordinate,
        _category_expr: &str,
        _limit: u32,
        _radius_meters: u32,
    ) -> Result<Vec<RawProviderRecord>, DomainError> {
        Err(DomainError::provider_unavailable(
            "places provider is not configured",
        ))
    }

    fn is_available(&self) -> bool {
        false
    }
}
