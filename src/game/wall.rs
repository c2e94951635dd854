//! Walls
//!
//! Static obstacles, one cell each. Destructible walls are removed by an
//! overlapping blast; the rest are permanent.

use serde::{Serialize, Deserialize};

use crate::core::rect::Rect;
use crate::core::rng::DeterministicRng;
use crate::core::vec2::IVec2;
use crate::game::config::GameConfig;

/// Unique wall identifier (monotonic per world).
pub type WallId = u32;

/// State of a single wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wall {
    /// Wall ID
    pub id: WallId,
    /// Top-left corner, cell aligned
    pub position: IVec2,
    /// Can a blast remove this wall?
    pub destructible: bool,
}

impl Wall {
    /// Create a new wall.
    pub const fn new(id: WallId, position: IVec2, destructible: bool) -> Self {
        Self {
            id,
            position,
            destructible,
        }
    }

    /// Collision box.
    #[inline]
    pub fn rect(&self, cell_size: i32) -> Rect {
        Rect::square(self.position, cell_size)
    }
}

/// Generate `config.wall_count` walls on random cells.
///
/// Cells are drawn independently, so two walls may share a cell and a wall may
/// land on the player's spawn.
pub fn generate_walls(config: &GameConfig, rng: &mut DeterministicRng) -> Vec<Wall> {
    let arena = config.arena();
    (0..config.wall_count)
        .map(|id| {
            let col = rng.next_int(arena.columns() as u32) as i32;
            let row = rng.next_int(arena.rows() as u32) as i32;
            let destructible = rng.next_bool(config.destructible_chance);
            Wall::new(id, IVec2::from_cell(col, row, config.cell_size), destructible)
        })
        .collect()
}
