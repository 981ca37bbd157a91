use log::info;

use crate::models::{
    game::{GameMode, GameState},
    tile::{PlantType, Tile},
};

fn lawn_is_dead(state: &GameState) -> bool {
    match state.mode {
        GameMode::Garden => state
            .lawn_grid
            .iter()
            .all(|t| matches!(t, Tile::Plant(p) if p.plant_type == PlantType::Dead)),
        GameMode::Lawn => !state
            .lawn_grid
            .iter()
            .any(|t| t.is_living() && t.moisture() > 0),
    }
}

/// Ends the game when the aquifer is dry or nothing is left alive.
/// The aquifer is checked first; both messages carry the day as the score.
pub fn check_game_over(state: &mut GameState) {
    if state.game_over {
        return;
    }

    let day = state.day;
    if state.aquifer_level == 0 {
        state.game_over = true;
        state.message = format!("Game Over: The aquifer has run dry! Your score is {day} days.");
    } else if lawn_is_dead(state) {
        state.game_over = true;
        state.message = match state.mode {
            GameMode::Garden => {
                format!("Game Over: All your plants have died! Your score is {day} days.")
            }
            GameMode::Lawn => format!("Game Over: Your lawn has died! Your score is {day} days."),
        };
    }

    if state.game_over {
        info!("game over on day {day}: {}", state.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_running_game_stays_running() {
        let mut state = GameState::new(&GameConfig::garden());
        check_game_over(&mut state);
        assert!(!state.game_over);
    }

    #[test]
    fn test_dry_aquifer_ends_game() {
        let mut state = GameState::new(&GameConfig::garden());
        state.aquifer_level = 0;
        state.day = 4;
        check_game_over(&mut state);
        assert!(state.game_over);
        assert_eq!(
            state.message,
            "Game Over: The aquifer has run dry! Your score is 4 days."
        );
    }

    #[test]
    fn test_dry_aquifer_takes_priority_over_dead_lawn() {
        let mut state = GameState::new(&GameConfig::garden());
        state.aquifer_level = 0;
        for tile in state.lawn_grid.iter_mut() {
            tile.wither();
        }
        check_game_over(&mut state);
        assert!(state.message.contains("run dry"));
    }

    #[test]
    fn test_all_dead_plants_end_game() {
        let mut state = GameState::new(&GameConfig::garden());
        for tile in state.lawn_grid.iter_mut() {
            tile.wither();
        }
        check_game_over(&mut state);
        assert!(state.game_over);
        assert_eq!(
            state.message,
            "Game Over: All your plants have died! Your score is 1 days."
        );
    }

    #[test]
    fn test_dirt_keeps_garden_alive() {
        let mut state = GameState::new(&GameConfig::garden());
        for tile in state.lawn_grid.iter_mut() {
            tile.wither();
        }
        state.lawn_grid[0] = Tile::plant(PlantType::Dirt, 0);
        check_game_over(&mut state);
        assert!(!state.game_over);
    }

    #[test]
    fn test_lawn_without_grass_ends_game() {
        let mut state = GameState::new(&GameConfig::lawn());
        for tile in state.lawn_grid.iter_mut() {
            tile.wither();
        }
        check_game_over(&mut state);
        assert!(state.game_over);
        assert!(state.message.contains("lawn has died"));
    }

    #[test]
    fn test_game_over_is_sticky() {
        let mut state = GameState::new(&GameConfig::garden());
        state.aquifer_level = 0;
        check_game_over(&mut state);
        let message = state.message.clone();
        state.aquifer_level = 50;
        check_game_over(&mut state);
        assert!(state.game_over);
        assert_eq!(state.message, message);
    }
}
