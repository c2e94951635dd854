//! Player
//!
//! Movement with wall collision and per-axis clamping, plus bomb placement
//! under a simultaneous-bomb limit. Both report success as a `bool`; a refused
//! action is a no-op, not an error.

use serde::{Serialize, Deserialize};

use crate::core::vec2::IVec2;
use crate::game::bomb::Bomb;
use crate::game::collision::collides_with_walls;
use crate::game::config::{Arena, GameConfig};
use crate::game::input::Direction;
use crate::game::wall::Wall;

/// State of the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner of the player's box
    pub position: IVec2,
    /// Life counter
    pub lives: u32,
    /// Units moved per step
    pub speed: i32,
    /// Maximum simultaneous live bombs
    pub bombs_count: usize,
}

impl Player {
    /// Create a player with default lives (3) and bomb limit (1).
    pub fn new(position: IVec2, speed: i32) -> Self {
        Self {
            position,
            lives: 3,
            speed,
            bombs_count: 1,
        }
    }

    /// Create the player described by a world config.
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            position: config.player_spawn,
            lives: config.player_lives,
            speed: config.player_speed,
            bombs_count: config.max_bombs,
        }
    }

    /// Try to step one `speed` in `direction`.
    ///
    /// The whole step is refused when the candidate box overlaps any wall.
    /// Otherwise each axis takes its candidate value only if that value keeps
    /// the box inside the arena, independently of the other axis.
    ///
    /// Returns whether the position changed.
    pub fn move_in(&mut self, direction: Direction, walls: &[Wall], arena: &Arena) -> bool {
        let candidate = self.position + direction.unit().scale(self.speed);

        if collides_with_walls(candidate, walls, arena.cell_size) {
            return false;
        }

        let before = self.position;
        if arena.contains_x(candidate.x) {
            self.position.x = candidate.x;
        }
        if arena.contains_y(candidate.y) {
            self.position.y = candidate.y;
        }
        self.position != before
    }

    /// Move by direction name. Unknown names do nothing.
    pub fn move_named(&mut self, direction: &str, walls: &[Wall], arena: &Arena) -> bool {
        match Direction::from_name(direction) {
            Some(direction) => self.move_in(direction, walls, arena),
            None => false,
        }
    }

    /// Is another bomb allowed with `live_bombs` already on the board?
    #[inline]
    pub fn can_place_bomb(&self, live_bombs: usize) -> bool {
        live_bombs < self.bombs_count
    }

    /// Drop a bomb at the current position if under the limit.
    ///
    /// Returns whether a bomb was placed.
    pub fn place_bomb(&self, bombs: &mut Vec<Bomb>, fuse_secs: f64) -> bool {
        if !self.can_place_bomb(bombs.len()) {
            return false;
        }
        bombs.push(Bomb::new(self.position, fuse_secs));
        true
    }
}
