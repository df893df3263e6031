use actix_governor::{
    governor::middleware::NoOpMiddleware, GovernorConfig, GovernorConfigBuilder,
    PeerIpKeyExtractor,
};

use crate::config::{ConfigError, SecurityConfig};

const HIGH_BURST_WARNING: u32 = 1000;

pub type GlobalRateLimit = GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>;

/// Per-peer-IP limiter state shared by every route and every worker.
///
/// Build it once before `HttpServer::new` and wrap each worker's app with
/// `Governor::new(&config)`; each call to this function starts a fresh set of
/// buckets.
pub fn global_rate_limiting(
    security_config: &SecurityConfig,
) -> Result<GlobalRateLimit, ConfigError> {
    security_config.validate()?;

    let burst_size = security_config.global_rate_limit_burst_size;
    if burst_size > HIGH_BURST_WARNING {
        tracing::warn!(
            burst_size,
            "global_rate_limit_burst_size is unusually high; consider reducing to avoid abuse"
        );
    }

    let replenish_every_ms = u64::from(60_000 / security_config.global_rate_limit_per_minute);
    GovernorConfigBuilder::default()
        .per_millisecond(replenish_every_ms)
        .burst_size(burst_size)
        .finish()
        .ok_or_else(|| {
            ConfigError::SecurityConfig("invalid global rate limit configuration".to_string())
        })
}
