use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};

use crate::{
    logic::{Action, Rejected},
    models::request::{ErrorResponse, MoveRequest, PlantRequest},
    store::{Dispatched, GameStore, DEFAULT_SESSION},
};

pub const SESSION_HEADER: &str = "X-Session-Id";

fn session_id(req: &HttpRequest) -> String {
    req.headers()
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_SESSION)
        .to_string()
}

/// Actions after game over still answer with the (unchanged) state;
/// invalid input answers 400.
fn respond(out: Dispatched) -> HttpResponse {
    match out.result {
        Ok(()) | Err(Rejected::GameOver) => HttpResponse::Ok().json(out.state),
        Err(e) => HttpResponse::BadRequest().json(ErrorResponse {
            error: e.to_string(),
        }),
    }
}

async fn dispatch(req: &HttpRequest, store: &dyn GameStore, action: Action) -> HttpResponse {
    respond(store.dispatch(&session_id(req), action).await)
}

/// GET /gamestate
/// Returns the current state of the game.
#[utoipa::path(
    get,
    path = "/gamestate",
    tag = "game",
    params(("X-Session-Id" = Option<String>, Header, description = "Game session, defaults to 'default'")),
    responses((status = 200, description = "Current game state", body = crate::models::game::GameState))
)]
#[get("/gamestate")]
pub async fn get_gamestate(req: HttpRequest, store: web::Data<dyn GameStore>) -> impl Responder {
    HttpResponse::Ok().json(store.snapshot(&session_id(&req)).await)
}

/// POST /reset
/// Throws the current game away and starts a new one.
#[utoipa::path(
    post,
    path = "/reset",
    tag = "game",
    params(("X-Session-Id" = Option<String>, Header, description = "Game session, defaults to 'default'")),
    responses((status = 200, description = "Fresh game state", body = crate::models::game::GameState))
)]
#[post("/reset")]
pub async fn reset_game(req: HttpRequest, store: web::Data<dyn GameStore>) -> impl Responder {
    dispatch(&req, store.get_ref(), Action::Reset).await
}

/// POST /water
/// Waters the lawn, consuming aquifer water.
#[utoipa::path(
    post,
    path = "/water",
    tag = "game",
    params(("X-Session-Id" = Option<String>, Header, description = "Game session, defaults to 'default'")),
    responses((status = 200, description = "State after watering", body = crate::models::game::GameState))
)]
#[post("/water")]
pub async fn water_lawn(req: HttpRequest, store: web::Data<dyn GameStore>) -> impl Responder {
    dispatch(&req, store.get_ref(), Action::Water).await
}

/// POST /plant
/// Replaces one tile with a fresh plant (garden mode).
#[utoipa::path(
    post,
    path = "/plant",
    tag = "game",
    request_body = PlantRequest,
    params(("X-Session-Id" = Option<String>, Header, description = "Game session, defaults to 'default'")),
    responses(
        (status = 200, description = "State after planting", body = crate::models::game::GameState),
        (status = 400, description = "Unknown plant, tile out of range or wrong mode", body = ErrorResponse),
    )
)]
#[post("/plant")]
pub async fn plant(
    req: HttpRequest,
    store: web::Data<dyn GameStore>,
    body: web::Json<PlantRequest>,
) -> impl Responder {
    let PlantRequest {
        tile_index,
        plant_name,
    } = body.into_inner();
    dispatch(
        &req,
        store.get_ref(),
        Action::Plant {
            tile_index,
            plant_name,
        },
    )
    .await
}

/// POST /move
/// Moves the player one tile (lawn mode).
#[utoipa::path(
    post,
    path = "/move",
    tag = "game",
    request_body = MoveRequest,
    params(("X-Session-Id" = Option<String>, Header, description = "Game session, defaults to 'default'")),
    responses(
        (status = 200, description = "State after moving", body = crate::models::game::GameState),
        (status = 400, description = "Unknown direction or wrong mode", body = ErrorResponse),
    )
)]
#[post("/move")]
pub async fn move_player(
    req: HttpRequest,
    store: web::Data<dyn GameStore>,
    body: web::Json<MoveRequest>,
) -> impl Responder {
    dispatch(&req, store.get_ref(), Action::Move(body.direction)).await
}

/// POST /mow
/// Mows the grass under the player (lawn mode).
#[utoipa::path(
    post,
    path = "/mow",
    tag = "game",
    params(("X-Session-Id" = Option<String>, Header, description = "Game session, defaults to 'default'")),
    responses(
        (status = 200, description = "State after mowing", body = crate::models::game::GameState),
        (status = 400, description = "Wrong mode", body = ErrorResponse),
    )
)]
#[post("/mow")]
pub async fn mow_lawn(req: HttpRequest, store: web::Data<dyn GameStore>) -> impl Responder {
    dispatch(&req, store.get_ref(), Action::Mow).await
}

/// POST /nextday
/// Advances the game by one day.
#[utoipa::path(
    post,
    path = "/nextday",
    tag = "game",
    params(("X-Session-Id" = Option<String>, Header, description = "Game session, defaults to 'default'")),
    responses((status = 200, description = "State after the day passed", body = crate::models::game::GameState))
)]
#[post("/nextday")]
pub async fn next_day(req: HttpRequest, store: web::Data<dyn GameStore>) -> impl Responder {
    dispatch(&req, store.get_ref(), Action::NextDay).await
}
