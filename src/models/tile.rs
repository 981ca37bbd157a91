use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::logic::Rejected;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PlantType {
    Dirt,
    #[serde(rename = "St. Augustine")]
    StAugustine,
    Wildflowers,
    Zoysia,
    Dead,
}

impl PlantType {
    pub const ALL: [PlantType; 5] = [
        PlantType::Dirt,
        PlantType::StAugustine,
        PlantType::Wildflowers,
        PlantType::Zoysia,
        PlantType::Dead,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PlantType::Dirt => "Dirt",
            PlantType::StAugustine => "St. Augustine",
            PlantType::Wildflowers => "Wildflowers",
            PlantType::Zoysia => "Zoysia",
            PlantType::Dead => "Dead",
        }
    }

    /// Moisture lost per day.
    pub fn water_need(self) -> u32 {
        match self {
            PlantType::Dirt | PlantType::Dead => 0,
            PlantType::StAugustine => 15,
            PlantType::Wildflowers => 5,
            PlantType::Zoysia => 10,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            PlantType::Dirt => "#a1887f",
            PlantType::StAugustine => "#4caf50",
            PlantType::Wildflowers => "#ffeb3b",
            PlantType::Zoysia => "#8bc34a",
            PlantType::Dead => "#5d4037",
        }
    }

    /// Dirt and Dead neither drink water nor die.
    pub fn is_inert(self) -> bool {
        matches!(self, PlantType::Dirt | PlantType::Dead)
    }
}

impl fmt::Display for PlantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PlantType {
    type Err = Rejected;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlantType::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| Rejected::UnknownPlant(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum LawnTileType {
    Grass,
    Dirt,
}

/// A garden cell holding a plant species.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantTile {
    pub plant_type: PlantType,
    pub moisture: u32,
}

/// A lawn cell that can be mowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LawnTile {
    pub tile_type: LawnTileType,
    pub moisture: u32,
    pub is_mowed: bool,
}

/// One cell of the lawn grid.
/// - `{"plantType": "Zoysia", "moisture": 50}` JSON → `Plant`
/// - `{"tileType": "Grass", "moisture": 100, "isMowed": false}` JSON → `Lawn`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum Tile {
    Plant(PlantTile),
    Lawn(LawnTile),
}

impl Tile {
    pub fn plant(plant_type: PlantType, moisture: u32) -> Self {
        Tile::Plant(PlantTile {
            plant_type,
            moisture,
        })
    }

    pub fn grass(moisture: u32) -> Self {
        Tile::Lawn(LawnTile {
            tile_type: LawnTileType::Grass,
            moisture,
            is_mowed: false,
        })
    }

    pub fn moisture(&self) -> u32 {
        match self {
            Tile::Plant(t) => t.moisture,
            Tile::Lawn(t) => t.moisture,
        }
    }

    pub fn moisture_mut(&mut self) -> &mut u32 {
        match self {
            Tile::Plant(t) => &mut t.moisture,
            Tile::Lawn(t) => &mut t.moisture,
        }
    }

    /// True for tiles that consume water and can still die.
    pub fn is_living(&self) -> bool {
        match self {
            Tile::Plant(t) => !t.plant_type.is_inert(),
            Tile::Lawn(t) => t.tile_type == LawnTileType::Grass,
        }
    }

    /// Turns a living tile into the inert type of its kind.
    pub fn wither(&mut self) {
        match self {
            Tile::Plant(t) => t.plant_type = PlantType::Dead,
            Tile::Lawn(t) => {
                t.tile_type = LawnTileType::Dirt;
                t.is_mowed = false;
            }
        }
    }
}
