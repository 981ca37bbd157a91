use std::fmt;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

use crate::{
    config::GameConfig,
    models::{
        tile::{PlantType, Tile},
        Position, MAX_LEVEL,
    },
};

pub const WELCOME_MESSAGE: &str =
    "Welcome to RootDown! Keep your lawn alive without draining the aquifer.";

/// Moisture of a freshly seeded garden tile.
pub const PLANT_MOISTURE: u32 = 50;

/// Which ruleset a game is played with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Plant species with fixed daily water needs, replanting, no weather.
    Garden,
    /// A mowable grass lawn walked by the player, with daily weather.
    Lawn,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameMode::Garden => f.write_str("garden"),
            GameMode::Lawn => f.write_str("lawn"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Weather {
    Sunny,
    ExtremelySunny,
    Rainy,
}

impl Weather {
    /// Draws the day's weather from a uniform sample in `[0, 1)`.
    pub fn from_sample(r: f64) -> Self {
        if r < 0.15 {
            Weather::Rainy
        } else if r < 0.35 {
            Weather::ExtremelySunny
        } else {
            Weather::Sunny
        }
    }

    pub fn dry_multiplier(self) -> u32 {
        match self {
            Weather::Rainy => 0,
            Weather::Sunny => 1,
            Weather::ExtremelySunny => 2,
        }
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Weather::Sunny => f.write_str("sunny"),
            Weather::ExtremelySunny => f.write_str("extremely sunny"),
            Weather::Rainy => f.write_str("rainy"),
        }
    }
}

/// The authoritative snapshot of one game, sent whole to clients after every action.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub mode: GameMode,
    pub day: u32,
    pub aquifer_level: u32,
    pub weather: Option<Weather>,
    pub grid_width: usize,
    pub grid_height: usize,
    /// Row-major: index = y * grid_width + x.
    pub lawn_grid: Vec<Tile>,
    pub player_pos: Option<Position>,
    pub game_over: bool,
    pub message: String,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        let (width, height) = (config.grid_width, config.grid_height);
        let (tile, player_pos, weather) = match config.mode {
            GameMode::Garden => (Tile::plant(PlantType::StAugustine, PLANT_MOISTURE), None, None),
            GameMode::Lawn => (
                Tile::grass(MAX_LEVEL),
                Some(Position {
                    x: width / 2,
                    y: height / 2,
                }),
                Some(Weather::Sunny),
            ),
        };
        Self {
            mode: config.mode,
            day: 1,
            aquifer_level: MAX_LEVEL,
            weather,
            grid_width: width,
            grid_height: height,
            lawn_grid: vec![tile; width * height],
            player_pos,
            game_over: false,
            message: WELCOME_MESSAGE.to_string(),
        }
    }

    /// Index of the tile under `pos` in `lawn_grid`.
    pub fn index_of(&self, pos: Position) -> usize {
        pos.y * self.grid_width + pos.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garden_initial_state() {
        let state = GameState::new(&GameConfig::garden());
        assert_eq!(state.day, 1);
        assert_eq!(state.aquifer_level, 100);
        assert_eq!(state.lawn_grid.len(), 9);
        assert!(state
            .lawn_grid
            .iter()
            .all(|t| *t == Tile::plant(PlantType::StAugustine, 50)));
        assert_eq!(state.player_pos, None);
        assert_eq!(state.weather, None);
        assert!(!state.game_over);
        assert_eq!(state.message, WELCOME_MESSAGE);
    }

    #[test]
    fn test_lawn_initial_state_centres_player() {
        let state = GameState::new(&GameConfig::lawn());
        assert_eq!(state.lawn_grid.len(), 25);
        assert_eq!(state.player_pos, Some(Position { x: 2, y: 2 }));
        assert!(state.lawn_grid.iter().all(|t| *t == Tile::grass(100)));
    }

    #[test]
    fn test_garden_state_omits_lawn_only_fields() {
        let json = serde_json::to_value(GameState::new(&GameConfig::garden())).unwrap();
        assert!(json.get("playerPos").is_none());
        assert!(json.get("weather").is_none());
        assert_eq!(json["aquiferLevel"], 100);
        assert_eq!(json["gameOver"], false);
    }

    #[test]
    fn test_weather_thresholds() {
        assert_eq!(Weather::from_sample(0.0), Weather::Rainy);
        assert_eq!(Weather::from_sample(0.149), Weather::Rainy);
        assert_eq!(Weather::from_sample(0.15), Weather::ExtremelySunny);
        assert_eq!(Weather::from_sample(0.349), Weather::ExtremelySunny);
        assert_eq!(Weather::from_sample(0.35), Weather::Sunny);
        assert_eq!(Weather::from_sample(0.999), Weather::Sunny);
    }
}
