use actix_web::{web, HttpResponse};
use tracing::warn;
use validator::Validate;

use crate::api::dtos::{NearbyQueryParams, PlaceResponse};
use crate::api::routes::AppState;
use crate::error::AppResult;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/places").route("/nearby", web::get().to(nearby_places)));
}

#[utoipa::path(
    get,
    path = "/api/v1/places/nearby",
    params(NearbyQueryParams),
    responses(
        (status = 200, description = "Places sorted by distance, nearest first", body = [PlaceResponse]),
        (status = 400, description = "Missing or invalid coordinates", body = crate::api::dtos::ErrorResponse),
        (status = 500, description = "Place provider failure", body = crate::api::dtos::ErrorResponse),
    ),
    tag = "places"
)]
pub async fn nearby_places(
    state: web::Data<AppState>,
    query: web::Query<NearbyQueryParams>,
) -> AppResult<HttpResponse> {
    let params = query.into_inner();
    params.validate()?;
    let nearby_query = params.into_query().map_err(|err| {
        warn!(error = %err, "rejected nearby places request");
        err
    })?;

    let places = state.nearby_service.resolve(nearby_query).await?;
    let body = places
        .into_iter()
        .map(PlaceResponse::from)
        .collect::<Vec<_>>();
    Ok(HttpResponse::Ok().json(body))
}
