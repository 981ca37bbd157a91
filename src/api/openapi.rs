use utoipa::OpenApi;

use crate::models::{
    game::{GameMode, GameState, Weather},
    request::{Direction, ErrorResponse, MoveRequest, PlantInfo, PlantRequest},
    tile::{LawnTile, LawnTileType, PlantTile, PlantType, Tile},
    Position,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "RootDown API",
        description = "Turn-based lawn care: spend a finite aquifer to keep your lawn alive while the days dry it out.",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    paths(
        crate::api::handlers::game::get_gamestate,
        crate::api::handlers::game::reset_game,
        crate::api::handlers::game::water_lawn,
        crate::api::handlers::game::plant,
        crate::api::handlers::game::move_player,
        crate::api::handlers::game::mow_lawn,
        crate::api::handlers::game::next_day,
        crate::api::handlers::plants::list_plants,
    ),
    components(
        schemas(
            // Enums
            GameMode, Weather, PlantType, LawnTileType, Direction,
            // State
            GameState, Tile, PlantTile, LawnTile, Position,
            // Requests
            PlantRequest, MoveRequest,
            // Shared
            PlantInfo, ErrorResponse,
        )
    ),
    tags(
        (name = "game",   description = "Game actions: water, plant, move, mow, advance the day"),
        (name = "plants", description = "Plant catalogue"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_action() {
        let doc = ApiDoc::openapi();
        for path in [
            "/gamestate", "/reset", "/water", "/plant", "/move", "/mow", "/nextday", "/plants",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
