use std::sync::Arc;

use actix_governor::Governor;
use actix_web::dev::Service as _;
use actix_web::{middleware::Logger, web, App, HttpServer};
use swasthya_backend::api::openapi::configure_swagger_ui;
use swasthya_backend::api::routes::{self, AppState};
use swasthya_backend::application::NearbyService;
use swasthya_backend::config::AppConfig;
use swasthya_backend::infrastructure::{DisabledPlaceProvider, HttpPlaceProvider, PlaceProvider};
use swasthya_backend::middleware::request_logging::RequestTracker;
use swasthya_backend::observability::AppMetrics;
use swasthya_backend::security::{cors_middleware, global_rate_limiting, security_headers};
use tracing::{info, warn, Instrument};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().expect("failed to load application configuration");
    config
        .validate()
        .expect("invalid application configuration");

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    if config.logging.json_format {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().pretty())
            .init();
    }

    let metrics = Arc::new(AppMetrics::default());
    let provider: Arc<dyn PlaceProvider> = if config.places.is_enabled() {
        Arc::new(
            HttpPlaceProvider::new(config.places.clone())
                .expect("failed to build places provider client"),
        )
    } else {
        warn!("places provider is disabled; nearby lookups will fail until PLACES_BASE_URL is set");
        Arc::new(DisabledPlaceProvider)
    };

    let state = AppState {
        nearby_service: Arc::new(
            NearbyService::new(provider, config.places.clone()).with_metrics(metrics.clone()),
        ),
        security: config.security.clone(),
        metrics: metrics.clone(),
    };

    let bind_host = config.host.clone();
    let bind_port = config.port;
    let security_config = config.security.clone();

    info!(
        host = %bind_host,
        port = bind_port,
        environment = %config.environment,
        places_enabled = config.places.is_enabled(),
        "starting swasthya backend"
    );

    let rate_limit =
        global_rate_limiting(&security_config).expect("invalid global rate limit configuration");

    HttpServer::new(move || {
        let metrics = metrics.clone();
        // The last `wrap` is the outermost layer.
        App::new()
            .wrap(Governor::new(&rate_limit))
            .wrap(cors_middleware(&security_config))
            .wrap(Logger::default())
            .wrap_fn(move |req, srv| {
                let tracker = RequestTracker::start(&req, metrics.clone());
                let span = tracker.span();
                let fut = srv.call(req);
                async move { Ok::<_, actix_web::Error>(tracker.finish(fut.await)) }
                    .instrument(span)
            })
            .wrap(security_headers())
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure)
            .configure(configure_swagger_ui)
    })
    .bind((bind_host, bind_port))?
    .run()
    .await
}
