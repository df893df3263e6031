//! Per-request logging, request ids and request metrics.
use std::sync::Arc;
use std::time::Instant;

use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header::{self, HeaderName, HeaderValue};
use actix_web::{Error, HttpRequest};
use tracing::{info, Span};
use uuid::Uuid;

use crate::observability::error_tracking::{capture_unexpected_5xx, FailedRequest};
use crate::observability::AppMetrics;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

const MAX_REQUEST_ID_LEN: usize = 128;

/// Reuses a caller-supplied `x-request-id` when it is short and printable,
/// otherwise mints a new one.
pub fn resolve_request_id(req: &ServiceRequest) -> String {
    req.headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| {
            !value.is_empty()
                && value.len() <= MAX_REQUEST_ID_LEN
                && value
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        })
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// Get client IP address from request.
///
/// Uses realip_remote_addr(), which only honours Forwarded/X-Forwarded-For
/// when actix-web is configured to trust a proxy.
pub fn get_client_ip(req: &ServiceRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

pub fn get_user_agent(req: &ServiceRequest) -> String {
    req.headers()
        .get(header::USER_AGENT)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}

pub fn create_request_span(
    request_id: &str,
    method: &str,
    path: &str,
    client_ip: &str,
    user_agent: &str,
) -> Span {
    tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
        client_ip = %client_ip,
        user_agent = %user_agent
    )
}

/// HTTP status class for grouping (2xx, 3xx, 4xx, 5xx)
pub fn get_status_class(status: u16) -> &'static str {
    match status {
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "unknown",
    }
}

/// Context captured when a request enters the outermost wrapper and consumed
/// when its response, or error, comes back.
///
/// Errors from inner middleware (rate limiter, CORS) are rendered here so they
/// are counted and tagged with a request id like any other response.
pub struct RequestTracker {
    request_id: String,
    method: String,
    path: String,
    request: HttpRequest,
    span: Span,
    metrics: Arc<AppMetrics>,
    started: Instant,
}

impl RequestTracker {
    pub fn start(req: &ServiceRequest, metrics: Arc<AppMetrics>) -> Self {
        let request_id = resolve_request_id(req);
        let method = req.method().to_string();
        let path = req.path().to_string();
        let span = create_request_span(
            &request_id,
            &method,
            &path,
            &get_client_ip(req),
            &get_user_agent(req),
        );

        Self {
            request_id,
            method,
            path,
            request: req.request().clone(),
            span,
            metrics,
            started: Instant::now(),
        }
    }

    pub fn span(&self) -> Span {
        self.span.clone()
    }

    pub fn finish<B>(self, result: Result<ServiceResponse<B>, Error>) -> ServiceResponse<BoxBody>
    where
        B: MessageBody + 'static,
    {
        let mut response = match result {
            Ok(response) => response.map_into_boxed_body(),
            Err(error) => ServiceResponse::from_err(error, self.request),
        };
        response.headers_mut().insert(
            REQUEST_ID_HEADER,
            HeaderValue::from_str(&self.request_id)
                .unwrap_or_else(|_| HeaderValue::from_static("invalid-request-id")),
        );

        let status = response.status().as_u16();
        let latency_ms = self.started.elapsed().as_millis() as u64;
        self.metrics.record_request(status, latency_ms);

        info!(
            status = status,
            status_class = get_status_class(status),
            latency_ms = latency_ms,
            "request completed"
        );

        capture_unexpected_5xx(FailedRequest {
            request_id: &self.request_id,
            method: &self.method,
            path: &self.path,
            status,
        });
        response
    }
}
