use tracing::error;
use uuid::Uuid;

/// Request context attached to a tracked server error.
#[derive(Debug, Clone, Copy)]
pub struct FailedRequest<'a> {
    pub request_id: &'a str,
    pub method: &'a str,
    pub path: &'a str,
    pub status: u16,
}

/// Emits an error-tracking event for a 5xx response and returns its id.
/// Statuses below 500 are not tracked.
pub fn capture_unexpected_5xx(request: FailedRequest<'_>) -> Option<Uuid> {
    if request.status < 500 {
        return None;
    }

    let event_id = Uuid::new_v4();
    error!(
        tracking_backend = "log",
        event_id = %event_id,
        request_id = %request.request_id,
        method = %request.method,
        path = %request.path,
        status = request.status,
        "error-tracking capture for unexpected 5xx"
    );
    Some(event_id)
}
