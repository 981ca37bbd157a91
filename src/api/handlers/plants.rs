use actix_web::{get, HttpResponse, Responder};

use crate::models::{request::PlantInfo, tile::PlantType};

/// GET /plants
/// Returns every plant type with its daily water need and display colour.
#[utoipa::path(
    get,
    path = "/plants",
    tag = "plants",
    responses((status = 200, description = "Plant catalogue", body = [PlantInfo]))
)]
#[get("/plants")]
pub async fn list_plants() -> impl Responder {
    let plants: Vec<PlantInfo> = PlantType::ALL.into_iter().map(PlantInfo::from).collect();
    HttpResponse::Ok().json(plants)
}
