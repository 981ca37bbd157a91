use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod game;
pub mod request;
pub mod tile;

/// A zero-based (x, y) position within the lawn grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

/// Upper bound shared by the aquifer level and every tile's moisture.
pub const MAX_LEVEL: u32 = 100;
