//! CORS allows GETs from configured origins only.

use actix_web::http::{header, Method};
use actix_web::{test as actix_test, web, App, HttpResponse};
use swasthya_backend::config::SecurityConfig;
use swasthya_backend::security::cors_middleware;

fn security_config() -> SecurityConfig {
    SecurityConfig {
        cors_allowed_origins: vec!["https://app.swasthyacare.example".to_string()],
        ..SecurityConfig::default()
    }
}

#[actix_rt::test]
async fn test_cors_allows_configured_origin() {
    let app = actix_test::init_service(
        App::new()
            .wrap(cors_middleware(&security_config()))
            .route("/", web::get().to(HttpResponse::Ok)),
    )
    .await;

    let req = actix_test::TestRequest::get()
        .uri("/")
        .insert_header((header::ORIGIN, "https://app.swasthyacare.example"))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .map(|v| v.as_bytes()),
        Some(&b"https://app.swasthyacare.example"[..])
    );
}

#[actix_rt::test]
async fn test_cors_rejects_unknown_origin() {
    let app = actix_test::init_service(
        App::new()
            .wrap(cors_middleware(&security_config()))
            .route("/", web::get().to(HttpResponse::Ok)),
    )
    .await;

    let req = actix_test::TestRequest::get()
        .uri("/")
        .insert_header((header::ORIGIN, "https://evil.example"))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert!(resp
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[actix_rt::test]
async fn test_cors_preflight_rejects_write_methods() {
    let app = actix_test::init_service(
        App::new()
            .wrap(cors_middleware(&security_config()))
            .route("/", web::get().to(HttpResponse::Ok)),
    )
    .await;

    let req = actix_test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/")
        .insert_header((header::ORIGIN, "https://app.swasthyacare.example"))
        .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE"))
        .to_request();
    let resp = actix_test::try_call_service(&app, req).await;

    match resp {
        Ok(resp) => assert!(!resp.status().is_success()),
        Err(err) => assert!(!err.as_response_error().status_code().is_success()),
    }
}
