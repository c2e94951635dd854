//! Game Logic Module
//!
//! All game simulation code. Deterministic given a seed and an input stream.
//!
//! ## Module Structure
//!
//! - `config`: Gameplay constants, JSON loading, validation
//! - `input`: Per-tick input bits
//! - `wall`: Walls and seeded wall generation
//! - `collision`: Rectangle overlap queries
//! - `player`: Movement and bomb placement
//! - `bomb`: Fuse and detonation
//! - `explosion`: Blast lifetime and covered cells
//! - `world`: The aggregate the loop owns
//! - `tick`: One simulation step
//! - `events`: Game events for logs and replay

pub mod config;
pub mod input;
pub mod wall;
pub mod collision;
pub mod player;
pub mod bomb;
pub mod explosion;
pub mod world;
pub mod tick;
pub mod events;

// Re-export key types
pub use config::{Arena, ConfigError, GameConfig};
pub use input::{Direction, InputFrame};
pub use wall::{Wall, WallId};
pub use player::Player;
pub use bomb::{Bomb, BombPhase};
pub use explosion::Explosion;
pub use world::World;
pub use tick::{tick, replay, TickResult};
pub use events::{GameEvent, GameEventData};
