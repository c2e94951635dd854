//! Core deterministic primitives.
//!
//! Integer geometry, the seeded RNG and state hashing. Nothing in here knows
//! about bombs or walls.

pub mod vec2;
pub mod rect;
pub mod rng;
pub mod hash;

// Re-export core types
pub use vec2::IVec2;
pub use rect::Rect;
pub use rng::DeterministicRng;
pub use hash::{compute_state_hash, StateHash};
