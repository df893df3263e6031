use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Places endpoints
        crate::api::routes::places::nearby_places,
        // Health checks
        crate::api::routes::health,
        crate::api::routes::ready,
    ),
    components(
        schemas(
            crate::api::dtos::place_dto::PlaceResponse,
            crate::api::dtos::place_dto::ErrorResponse,
        )
    ),
    tags(
        (name = "places", description = "Nearby health facility lookup"),
        (name = "health", description = "Health check endpoints"),
    ),
    info(
        title = "SwasthyaCare API",
        version = "0.1.0",
        description = "Nearby hospitals, clinics and emergency services for SwasthyaCare"
    )
)]
pub struct ApiDoc;

pub fn configure_swagger_ui(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}
