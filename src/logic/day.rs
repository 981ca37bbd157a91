use log::info;
use rand::Rng;

use crate::{
    logic::{check_game_over, Rejected},
    models::{
        game::{GameMode, GameState, Weather},
        tile::Tile,
    },
};

/// Moisture a sunny day takes from unmowed grass.
pub const BASE_DRYNESS: u32 = 10;
/// Mowed grass dries this many times faster.
pub const MOWED_MULTIPLIER: u32 = 2;

fn daily_decay(tile: &Tile, weather: Option<Weather>) -> u32 {
    match tile {
        Tile::Plant(t) => t.plant_type.water_need(),
        Tile::Lawn(t) => {
            let dry = weather.map_or(1, Weather::dry_multiplier);
            let mow = if t.is_mowed { MOWED_MULTIPLIER } else { 1 };
            BASE_DRYNESS * dry * mow
        }
    }
}

/// Advances one day: rolls the weather (lawn mode), dries every living
/// tile, withers the ones that hit zero, then evaluates game over.
///
/// Exactly one sample is drawn from `rng` per lawn day; garden days never
/// touch it.
pub fn advance_day<R: Rng>(state: &mut GameState, rng: &mut R) -> Result<(), Rejected> {
    if state.game_over {
        return Err(Rejected::GameOver);
    }

    state.day += 1;

    if state.mode == GameMode::Lawn {
        state.weather = Some(Weather::from_sample(rng.gen::<f64>()));
    }

    let weather = state.weather;
    let mut withered = 0;
    for tile in state.lawn_grid.iter_mut().filter(|t| t.is_living()) {
        let decay = daily_decay(tile, weather);
        let moisture = tile.moisture_mut();
        *moisture = moisture.saturating_sub(decay);
        if *moisture == 0 {
            tile.wither();
            withered += 1;
        }
    }

    state.message = match weather {
        Some(w) => format!(
            "A new day has dawned. It is day {}. The weather is {w}.",
            state.day
        ),
        None => format!("A new day has dawned. It is day {}.", state.day),
    };
    info!(
        "day {} ({:?}): {withered} tile(s) withered, aquifer at {}",
        state.day, weather, state.aquifer_level
    );

    check_game_over(state);
    Ok(())
}

#[cfg(test)]
mod tests {
    use rand::{rngs::mock::StepRng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::{
        config::GameConfig,
        models::tile::{LawnTile, LawnTileType, PlantType},
    };

    /// `gen::<f64>()` keeps the top 53 bits, so a constant stream of `x << 11`
    /// yields roughly `x / 2^53`.
    fn fixed_sample(r: f64) -> StepRng {
        let bits = (r * (1u64 << 53) as f64) as u64;
        StepRng::new(bits << 11, 0)
    }

    #[test]
    fn test_fixed_sample_helper_hits_each_band() {
        assert_eq!(Weather::from_sample(fixed_sample(0.1).gen()), Weather::Rainy);
        assert_eq!(Weather::from_sample(fixed_sample(0.2).gen()), Weather::ExtremelySunny);
        assert_eq!(Weather::from_sample(fixed_sample(0.9).gen()), Weather::Sunny);
    }

    #[test]
    fn test_garden_decay_uses_water_need() {
        let mut state = GameState::new(&GameConfig::garden());
        state.lawn_grid[0] = Tile::plant(PlantType::Wildflowers, 50);
        state.lawn_grid[1] = Tile::plant(PlantType::Zoysia, 50);
        state.lawn_grid[2] = Tile::plant(PlantType::Dirt, 40);
        advance_day(&mut state, &mut ChaCha8Rng::seed_from_u64(0)).unwrap();
        assert_eq!(state.day, 2);
        assert_eq!(state.lawn_grid[0].moisture(), 45);
        assert_eq!(state.lawn_grid[1].moisture(), 40);
        assert_eq!(state.lawn_grid[2].moisture(), 40);
        assert_eq!(state.lawn_grid[3].moisture(), 35);
        assert_eq!(state.message, "A new day has dawned. It is day 2.");
        assert_eq!(state.weather, None);
    }

    #[test]
    fn test_tile_dies_when_moisture_hits_zero() {
        let mut state = GameState::new(&GameConfig::garden());
        state.lawn_grid[0] = Tile::plant(PlantType::Zoysia, 5);
        advance_day(&mut state, &mut ChaCha8Rng::seed_from_u64(0)).unwrap();
        assert_eq!(state.lawn_grid[0], Tile::plant(PlantType::Dead, 0));
        assert!(!state.game_over);
    }

    #[test]
    fn test_dead_tiles_stay_dead() {
        let mut state = GameState::new(&GameConfig::garden());
        state.lawn_grid[0] = Tile::plant(PlantType::Dead, 0);
        advance_day(&mut state, &mut ChaCha8Rng::seed_from_u64(0)).unwrap();
        assert_eq!(state.lawn_grid[0], Tile::plant(PlantType::Dead, 0));
    }

    #[test]
    fn test_lawn_sunny_day() {
        let mut state = GameState::new(&GameConfig::lawn());
        advance_day(&mut state, &mut fixed_sample(0.9)).unwrap();
        assert_eq!(state.weather, Some(Weather::Sunny));
        assert!(state.lawn_grid.iter().all(|t| t.moisture() == 90));
        assert_eq!(
            state.message,
            "A new day has dawned. It is day 2. The weather is sunny."
        );
    }

    #[test]
    fn test_lawn_rain_keeps_moisture() {
        let mut state = GameState::new(&GameConfig::lawn());
        advance_day(&mut state, &mut fixed_sample(0.05)).unwrap();
        assert_eq!(state.weather, Some(Weather::Rainy));
        assert!(state.lawn_grid.iter().all(|t| t.moisture() == 100));
    }

    #[test]
    fn test_lawn_mowed_grass_dries_faster_in_heat() {
        let mut state = GameState::new(&GameConfig::lawn());
        state.lawn_grid[0] = Tile::Lawn(LawnTile {
            tile_type: LawnTileType::Grass,
            moisture: 100,
            is_mowed: true,
        });
        advance_day(&mut state, &mut fixed_sample(0.25)).unwrap();
        assert_eq!(state.weather, Some(Weather::ExtremelySunny));
        assert_eq!(state.lawn_grid[0].moisture(), 60);
        assert_eq!(state.lawn_grid[1].moisture(), 80);
    }

    #[test]
    fn test_lawn_grass_turns_to_dirt() {
        let mut state = GameState::new(&GameConfig::lawn());
        *state.lawn_grid[0].moisture_mut() = 5;
        advance_day(&mut state, &mut fixed_sample(0.9)).unwrap();
        assert!(!state.lawn_grid[0].is_living());
        assert_eq!(state.lawn_grid[0].moisture(), 0);
    }

    #[test]
    fn test_advance_day_after_game_over_is_noop() {
        let mut state = GameState::new(&GameConfig::lawn());
        state.game_over = true;
        let before = state.clone();
        assert_eq!(
            advance_day(&mut state, &mut ChaCha8Rng::seed_from_u64(3)),
            Err(Rejected::GameOver)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_seeded_weather_is_reproducible() {
        let run = |seed| {
            let mut state = GameState::new(&GameConfig::lawn());
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut days = Vec::new();
            for _ in 0..5 {
                if advance_day(&mut state, &mut rng).is_err() {
                    break;
                }
                days.push(state.weather);
            }
            (days, state)
        };
        assert_eq!(run(42), run(42));
    }
}
