use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::tile::PlantType;

/// Body of `POST /plant`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantRequest {
    #[serde(alias = "tile_index")]
    pub tile_index: usize,
    /// Display name of the species, e.g. `"St. Augustine"`.
    #[serde(alias = "plant_name")]
    pub plant_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Body of `POST /move`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MoveRequest {
    pub direction: Direction,
}

/// Catalogue entry returned by `GET /plants`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantInfo {
    pub name: String,
    pub water_need: u32,
    pub color: String,
}

impl From<PlantType> for PlantInfo {
    fn from(plant: PlantType) -> Self {
        Self {
            name: plant.name().to_string(),
            water_need: plant.water_need(),
            color: plant.color().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
