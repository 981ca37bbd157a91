use log::debug;
use rand::Rng;
use thiserror::Error;

use crate::{
    config::GameConfig,
    models::{game::GameMode, game::GameState, request::Direction},
};

pub mod actions;
pub mod day;
pub mod game_over;

pub use actions::{move_player, mow, plant, water};
pub use day::advance_day;
pub use game_over::check_game_over;

/// Why an action left the state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejected {
    #[error("The game is over. Reset to start a new one.")]
    GameOver,
    #[error("Tile index {index} is out of range (the lawn has {len} tiles).")]
    TileOutOfRange { index: usize, len: usize },
    #[error("Unknown plant '{0}'.")]
    UnknownPlant(String),
    #[error("'{action}' is not available in {mode} mode.")]
    Unsupported { action: &'static str, mode: GameMode },
}

/// A player action, applied atomically to one game.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Reset,
    Water,
    Plant { tile_index: usize, plant_name: String },
    Move(Direction),
    Mow,
    NextDay,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Reset => "reset",
            Action::Water => "water",
            Action::Plant { .. } => "plant",
            Action::Move(_) => "move",
            Action::Mow => "mow",
            Action::NextDay => "nextday",
        }
    }
}

/// Runs `action` against `state`. `rng` is only drawn from on a day advance.
pub fn apply<R: Rng>(
    state: &mut GameState,
    action: &Action,
    config: &GameConfig,
    rng: &mut R,
) -> Result<(), Rejected> {
    debug!("applying '{}' on day {}", action.name(), state.day);
    match action {
        Action::Reset => {
            *state = GameState::new(config);
            Ok(())
        }
        Action::Water => water(state),
        Action::Plant {
            tile_index,
            plant_name,
        } => plant(state, *tile_index, plant_name),
        Action::Move(direction) => move_player(state, *direction),
        Action::Mow => mow(state),
        Action::NextDay => advance_day(state, rng),
    }
}
