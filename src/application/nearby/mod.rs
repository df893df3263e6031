use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::config::{PlacesConfig, MAX_RESULT_LIMIT};
use crate::domain::{DomainError, NearbyQuery, Place};
use crate::infrastructure::PlaceProvider;
use crate::observability::AppMetrics;

pub mod normalizer;
pub mod ranking;

/// Resolves nearby health facilities for a user position.
///
/// One provider call per lookup; no retries and no caching. Malformed
/// provider records are dropped, provider failures are propagated.
#[derive(Clone)]
pub struct NearbyService {
    provider: Arc<dyn PlaceProvider>,
    config: PlacesConfig,
    metrics: Option<Arc<AppMetrics>>,
}

impl NearbyService {
    pub fn new(provider: Arc<dyn PlaceProvider>, config: PlacesConfig) -> Self {
        Self {
            provider,
            config,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<AppMetrics>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn is_ready(&self) -> bool {
        self.provider.is_available()
    }

    /// Expression sent to the provider for a category filter.
    /// `all` and blank filters expand to the configured category list.
    pub fn category_expression(&self, query: &NearbyQuery) -> String {
        if query.wants_all_categories() || query.category.trim().is_empty() {
            self.config.all_categories_expression()
        } else {
            query.category.clone()
        }
    }

    pub async fn resolve(&self, query: NearbyQuery) -> Result<Vec<Place>, DomainError> {
        let origin = query.origin().map_err(|err| {
            warn!(error = %err, category = %query.category, "rejected nearby lookup");
            err
        })?;

        let category_expr = self.category_expression(&query);
        let limit = query
            .limit
            .unwrap_or(self.config.default_limit)
            .clamp(1, MAX_RESULT_LIMIT);
        let radius_meters = query
            .radius_meters
            .unwrap_or(self.config.default_radius_meters);

        if let Some(metrics) = &self.metrics {
            metrics.record_nearby_lookup();
        }

        let raw = self
            .provider
            .search(origin, &category_expr, limit, radius_meters)
            .await
            .map_err(|err| {
                error!(
                    error = %err,
                    category_expr = %category_expr,
                    "nearby lookup failed at places provider"
                );
                if let Some(metrics) = &self.metrics {
                    metrics.record_provider_failure();
                }
                err
            })?;

        let received = raw.len();
        let places = normalizer::normalize(raw);
        let dropped = received - places.len();
        if dropped > 0 {
            debug!(dropped, received, "dropped provider records without usable coordinates");
            if let Some(metrics) = &self.metrics {
                metrics.record_dropped_records(dropped as u64);
            }
        }

        let ranked = ranking::rank(origin, places);
        info!(
            category_expr = %category_expr,
            limit,
            radius_meters,
            results = ranked.len(),
            "nearby lookup completed"
        );
        Ok(ranked)
    }
}
