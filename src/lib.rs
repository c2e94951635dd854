//! # Bomb Blast
//!
//! Real-time grid arcade simulation: a player walks between walls, drops timed
//! bombs, and the blasts clear destructible walls.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        BOMB BLAST                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Deterministic primitives                  │
//! │  ├── vec2.rs     - Integer 2D vector                         │
//! │  ├── rect.rs     - Axis-aligned boxes, strict overlap        │
//! │  ├── rng.rs      - Deterministic Xorshift128+ PRNG           │
//! │  └── hash.rs     - State hashing for verification            │
//! │                                                              │
//! │  game/           - Game logic (deterministic)                │
//! │  ├── config.rs   - Gameplay tuning and validation            │
//! │  ├── input.rs    - Per-tick input bits                       │
//! │  ├── player.rs   - Movement and bomb placement               │
//! │  ├── bomb.rs     - Fuse and detonation                       │
//! │  ├── explosion.rs- Blast lifetime                            │
//! │  ├── wall.rs     - Walls and seeded layout                   │
//! │  ├── world.rs    - World aggregate                           │
//! │  └── tick.rs     - One simulation step                       │
//! │                                                              │
//! │  render/         - Draw calls against a backend              │
//! │  runtime/        - Pacing, quit, input scripts (async)       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism
//!
//! Given the same config, seed and input frames, `game::tick` produces the
//! same world on every run:
//! - No wall-clock time inside a tick; timers advance by `1 / tick_rate`
//! - All randomness from seeded Xorshift128+, used only at setup
//! - Collections are ordered `Vec`s, processed in insertion order

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod game;
pub mod render;
pub mod runtime;

// Re-export commonly used types
pub use core::rng::DeterministicRng;
pub use core::vec2::IVec2;
pub use game::config::GameConfig;
pub use game::input::{Direction, InputFrame};
pub use game::world::World;
pub use runtime::session::{GameSession, QuitSignal};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Simulation tick rate (Hz)
pub const TICK_RATE: u32 = 60;

/// World width in units
pub const WORLD_WIDTH: i32 = 800;

/// World height in units
pub const WORLD_HEIGHT: i32 = 600;

/// Grid cell size in units
pub const CELL_SIZE: i32 = 50;
