use actix_web::{web, HttpResponse};

use crate::api::handlers::{
    get_gamestate, list_plants, mow_lawn, move_player, next_day, plant, reset_game, water_lawn,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_gamestate)
        .service(reset_game)
        .service(water_lawn)
        .service(plant)
        .service(move_player)
        .service(mow_lawn)
        .service(next_day)
        .service(list_plants);
}

/// Malformed bodies (bad JSON, unknown direction, negative tile index) answer
/// 400 with the same `{"error": ...}` shape as rejected actions.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = format!("JSON deserialization error: {err}");
        actix_web::error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(serde_json::json!({ "error": message })),
        )
        .into()
    })
}
