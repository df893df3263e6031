mod cors;
mod headers;
mod rate_limit;

pub use cors::cors_middleware;
pub use headers::security_headers;
pub use rate_limit::{global_rate_limiting, GlobalRateLimit};
