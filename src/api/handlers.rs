pub mod game;
pub mod plants;

pub use game::{get_gamestate, mow_lawn, move_player, next_day, plant, reset_game, water_lawn};
pub use plants::list_plants;
