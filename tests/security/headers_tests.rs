//! Security headers are applied to API responses, including errors.

use actix_web::{test as actix_test, web, App, HttpResponse};
use swasthya_backend::security::security_headers;

#[actix_rt::test]
async fn test_security_headers_are_present() {
    let app = actix_test::init_service(
        App::new()
            .wrap(security_headers())
            .route("/", web::get().to(HttpResponse::Ok)),
    )
    .await;

    let req = actix_test::TestRequest::get().uri("/").to_request();
    let resp = actix_test::call_service(&app, req).await;
    let headers = resp.headers();

    assert_eq!(
        headers.get("Strict-Transport-Security").map(|v| v.as_bytes()),
        Some(&b"max-age=31536000; includeSubDomains"[..])
    );
    assert_eq!(
        headers.get("X-Content-Type-Options").map(|v| v.as_bytes()),
        Some(&b"nosniff"[..])
    );
    assert_eq!(
        headers.get("X-Frame-Options").map(|v| v.as_bytes()),
        Some(&b"DENY"[..])
    );
    assert_eq!(
        headers.get("Referrer-Policy").map(|v| v.as_bytes()),
        Some(&b"no-referrer"[..])
    );
    assert!(headers.get("Content-Security-Policy").is_some());
    assert!(headers.get("Permissions-Policy").is_some());
}

#[actix_rt::test]
async fn test_security_headers_on_error_responses() {
    let app = actix_test::init_service(
        App::new()
            .wrap(security_headers())
            .route("/", web::get().to(HttpResponse::InternalServerError)),
    )
    .await;

    let req = actix_test::TestRequest::get().uri("/").to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert_eq!(resp.status(), 500);
    assert!(resp.headers().get("X-Content-Type-Options").is_some());
}
