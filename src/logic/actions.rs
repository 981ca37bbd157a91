use log::{debug, info};

use crate::{
    logic::{check_game_over, Rejected},
    models::{
        game::{GameMode, GameState, PLANT_MOISTURE},
        request::Direction,
        tile::{LawnTileType, PlantType, Tile},
        MAX_LEVEL,
    },
};

/// Aquifer water spent per watering.
pub const WATER_COST: u32 = 10;
/// Moisture added to each living tile per watering.
pub const WATER_REPLENISH: u32 = 30;

fn ensure_running(state: &GameState) -> Result<(), Rejected> {
    if state.game_over {
        Err(Rejected::GameOver)
    } else {
        Ok(())
    }
}

fn ensure_mode(state: &GameState, mode: GameMode, action: &'static str) -> Result<(), Rejected> {
    if state.mode == mode {
        Ok(())
    } else {
        Err(Rejected::Unsupported {
            action,
            mode: state.mode,
        })
    }
}

/// Spends `WATER_COST` from the aquifer to moisten every living tile.
/// A dry aquifer only changes the message.
pub fn water(state: &mut GameState) -> Result<(), Rejected> {
    ensure_running(state)?;

    if state.aquifer_level >= WATER_COST {
        state.aquifer_level -= WATER_COST;
        for tile in state.lawn_grid.iter_mut().filter(|t| t.is_living()) {
            let moisture = tile.moisture_mut();
            *moisture = (*moisture + WATER_REPLENISH).min(MAX_LEVEL);
        }
        state.message = "You watered the lawn.".into();
        debug!("watered, aquifer at {}", state.aquifer_level);
    } else {
        state.message = "Not enough water in the aquifer!".into();
    }

    check_game_over(state);
    Ok(())
}

/// Replaces the tile at `tile_index` with a fresh `plant_name` plant.
/// This is the only way back from a dead tile.
pub fn plant(state: &mut GameState, tile_index: usize, plant_name: &str) -> Result<(), Rejected> {
    ensure_running(state)?;
    ensure_mode(state, GameMode::Garden, "plant")?;

    let len = state.lawn_grid.len();
    if tile_index >= len {
        return Err(Rejected::TileOutOfRange {
            index: tile_index,
            len,
        });
    }
    let plant_type: PlantType = plant_name.parse()?;

    state.lawn_grid[tile_index] = Tile::plant(plant_type, PLANT_MOISTURE);
    state.message = format!("You planted {plant_type}.");
    info!("planted {plant_type} on tile {tile_index}");
    Ok(())
}

/// Steps the player one tile, clamped to the grid edges.
pub fn move_player(state: &mut GameState, direction: Direction) -> Result<(), Rejected> {
    ensure_running(state)?;
    ensure_mode(state, GameMode::Lawn, "move")?;

    let (max_x, max_y) = (
        state.grid_width.saturating_sub(1),
        state.grid_height.saturating_sub(1),
    );
    if let Some(pos) = state.player_pos.as_mut() {
        match direction {
            Direction::Up => pos.y = pos.y.saturating_sub(1),
            Direction::Down => pos.y = (pos.y + 1).min(max_y),
            Direction::Left => pos.x = pos.x.saturating_sub(1),
            Direction::Right => pos.x = (pos.x + 1).min(max_x),
        }
    }
    Ok(())
}

/// Mows the grass under the player. Anything but grass is left alone.
pub fn mow(state: &mut GameState) -> Result<(), Rejected> {
    ensure_running(state)?;
    ensure_mode(state, GameMode::Lawn, "mow")?;

    let Some(pos) = state.player_pos else {
        return Ok(());
    };
    let index = state.index_of(pos);
    if let Some(Tile::Lawn(tile)) = state.lawn_grid.get_mut(index) {
        if tile.tile_type == LawnTileType::Grass {
            tile.is_mowed = true;
            state.message = "You mowed the grass.".into();
        }
    }
    Ok(())
}
