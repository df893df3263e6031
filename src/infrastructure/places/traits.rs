use async_trait::async_trait;

use crate::domain::{Coordinate, DomainError, RawProviderRecord};

/// Outbound place search against an external geocoding provider.
#[async_trait]
pub trait PlaceProvider: Send + Sync {
    /// Search for places matching `category_expr` around `origin`.
    ///
    /// Any transport, status or payload failure is reported as
    /// [`DomainError::ProviderUnavailable`].
    async fn search(
        &self,
        origin: Coordinate,
        category_expr: &str,
        limit: u32,
        radius_meters: u32,
    ) -> Result<Vec<RawProviderRecord>, DomainError>;

    /// Whether the provider can serve requests at all. Used by readiness checks.
    fn is_available(&self) -> bool {
        true
    }
}
