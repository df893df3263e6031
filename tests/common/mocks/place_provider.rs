#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use swasthya_backend::domain::{Coordinate, DomainError, RawProviderRecord};
use swasthya_backend::infrastructure::PlaceProvider;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchCall {
    pub origin: [f64; 2],
    pub category_expr: String,
    pub limit: u32,
    pub radius_meters: u32,
}

/// In-memory provider returning canned records or a canned failure,
/// recording every search it receives.
pub struct MockPlaceProvider {
    response: Result<Vec<RawProviderRecord>, DomainError>,
    available: bool,
    pub calls: Mutex<Vec<SearchCall>>,
}

impl MockPlaceProvider {
    pub fn returning(records: Vec<RawProviderRecord>) -> Self {
        Self {
            response: Ok(records),
            available: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(detail: &str) -> Self {
        Self {
            response: Err(DomainError::provider_unavailable(detail)),
            available: true,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::failing("places provider is not configured")
        }
    }

    pub fn calls(&self) -> Vec<SearchCall> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("calls mutex poisoned").len()
    }
}

#[async_trait]
impl PlaceProvider for MockPlaceProvider {
    async fn search(
        &self,
        origin: Coordinate,
        category_expr: &str,
        limit: u32,
        radius_meters: u32,
    ) -> Result<Vec<RawProviderRecord>, DomainError> {
        self.calls
            .lock()
            .expect("calls mutex poisoned")
            .push(SearchCall {
                origin: origin.as_pair(),
                category_expr: category_expr.to_string(),
                limit,
                radius_meters,
            });
        self.response.clone()
    }

    fn is_available(&self) -> bool {
        self.available
    }
}
