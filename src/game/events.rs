//! Game Events
//!
//! Events generated during simulation, in the order they happened.

use serde::{Serialize, Deserialize};
use crate::core::vec2::IVec2;
use crate::game::wall::WallId;

/// Game event data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEventData {
    /// Player dropped a bomb
    BombPlaced {
        /// Where it was dropped
        position: IVec2,
    },

    /// A bomb's timer ran out
    BombDetonated {
        /// Blast center
        position: IVec2,
    },

    /// A blast removed a wall
    WallDestroyed {
        /// Removed wall
        wall_id: WallId,
        /// Its cell
        position: IVec2,
    },

    /// An explosion expired and was removed
    ExplosionFinished {
        /// Blast center
        position: IVec2,
    },
}

/// A game event with timing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Tick when event occurred
    pub tick: u32,

    /// Event data
    pub data: GameEventData,
}

impl GameEvent {
    /// Create a new event.
    pub fn new(tick: u32, data: GameEventData) -> Self {
        Self { tick, data }
    }

    /// Create bomb placed event.
    pub fn bomb_placed(tick: u32, position: IVec2) -> Self {
        Self::new(tick, GameEventData::BombPlaced { position })
    }

    /// Create bomb detonated event.
    pub fn bomb_detonated(tick: u32, position: IVec2) -> Self {
        Self::new(tick, GameEventData::BombDetonated { position })
    }

    /// Create wall destroyed event.
    pub fn wall_destroyed(tick: u32, wall_id: WallId, position: IVec2) -> Self {
        Self::new(tick, GameEventData::WallDestroyed { wall_id, position })
    }

    /// Create explosion finished event.
    pub fn explosion_finished(tick: u32, position: IVec2) -> Self {
        Self::new(tick, GameEventData::ExplosionFinished { position })
    }

    /// Position the event refers to.
    pub fn position(&self) -> IVec2 {
        match &self.data {
            GameEventData::BombPlaced { position }
            | GameEventData::BombDetonated { position }
            | GameEventData::WallDestroyed { position, .. }
            | GameEventData::ExplosionFinished { position } => *position,
        }
    }
}
