//! World State
//!
//! The single aggregate the game loop owns: player, walls, bombs and
//! explosions, plus the tick counter and the seed the layout came from.

use serde::{Serialize, Deserialize};

use crate::core::hash::{StateHash, compute_state_hash};
use crate::core::rng::DeterministicRng;
use crate::game::bomb::{BlastSpec, Bomb};
use crate::game::config::{ConfigError, GameConfig};
use crate::game::events::GameEvent;
use crate::game::explosion::Explosion;
use crate::game::player::Player;
use crate::game::wall::{Wall, WallId, generate_walls};

/// Complete state of a running game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct World {
    /// Ticks simulated so far
    pub tick: u32,

    /// RNG seed (for verification)
    pub rng_seed: u64,

    /// Gameplay configuration
    pub config: GameConfig,

    /// The player
    pub player: Player,

    /// Standing walls, in creation order
    pub walls: Vec<Wall>,

    /// Live bombs, in placement order
    pub bombs: Vec<Bomb>,

    /// Live explosions, in detonation order
    pub explosions: Vec<Explosion>,

    /// Events generated this tick (cleared each tick)
    #[serde(skip)]
    pub pending_events: Vec<GameEvent>,
}

impl World {
    /// Build a world: player at the spawn point, walls from the seeded RNG.
    pub fn new(config: GameConfig, rng_seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = DeterministicRng::new(rng_seed);
        let walls = generate_walls(&config, &mut rng);
        Ok(Self::with_walls(config, rng_seed, walls))
    }

    /// Build a world with a hand-placed wall layout.
    pub fn with_layout(config: GameConfig, walls: Vec<Wall>) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_walls(config, 0, walls))
    }

    fn with_walls(config: GameConfig, rng_seed: u64, walls: Vec<Wall>) -> Self {
        Self {
            tick: 0,
            rng_seed,
            player: Player::from_config(&config),
            config,
            walls,
            bombs: Vec::new(),
            explosions: Vec::new(),
            pending_events: Vec::new(),
        }
    }

    /// Blast parameters for this world.
    #[inline]
    pub fn blast(&self) -> BlastSpec {
        BlastSpec::from_config(&self.config)
    }

    /// Look up a standing wall.
    pub fn wall(&self, id: WallId) -> Option<&Wall> {
        self.walls.iter().find(|w| w.id == id)
    }

    /// Is this wall still standing?
    pub fn has_wall(&self, id: WallId) -> bool {
        self.wall(id).is_some()
    }

    /// Number of destructible walls still standing.
    pub fn destructible_wall_count(&self) -> usize {
        self.walls.iter().filter(|w| w.destructible).count()
    }

    /// Compute hash of current state for verification.
    pub fn compute_hash(&self) -> StateHash {
        compute_state_hash(self.tick, self.rng_seed, |hasher| {
            hasher.update_vec2(self.player.position);
            hasher.update_u32(self.player.lives);
            hasher.update_u32(self.player.bombs_count as u32);

            hasher.update_u32(self.walls.len() as u32);
            for wall in &self.walls {
                hasher.update_u32(wall.id);
                hasher.update_vec2(wall.position);
                hasher.update_bool(wall.destructible);
            }

            hasher.update_u32(self.bombs.len() as u32);
            for bomb in &self.bombs {
                hasher.update_vec2(bomb.position);
                hasher.update_f64(bomb.timer);
            }

            hasher.update_u32(self.explosions.len() as u32);
            for explosion in &self.explosions {
                hasher.update_vec2(explosion.position);
                hasher.update_i32(explosion.radius);
                hasher.update_f64(explosion.timer);
            }
        })
    }

    /// Take pending events (consumes them).
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Push a game event.
    pub fn push_event(&mut self, event: GameEvent) {
        self.pending_events.push(event);
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vec2::IVec2;

    #[test]
    fn test_world_setup() {
        let world = World::new(GameConfig::default(), 12345).unwrap();

        assert_eq!(world.tick, 0);
        assert_eq!(world.player.position, IVec2::new(50, 50));
        assert_eq!(world.player.lives, 3);
        assert_eq!(world.player.speed, 5);
        assert_eq!(world.player.bombs_count, 1);
        assert_eq!(world.walls.len(), 10);
        assert!(world.bombs.is_empty());
        assert!(world.explosions.is_empty());
    }

    #[test]
    fn test_world_determinism() {
        let world1 = World::new(GameConfig::default(), 777).unwrap();
        let world2 = World::new(GameConfig::default(), 777).unwrap();

        assert_eq!(world1.walls, world2.walls);
        assert_eq!(world1.compute_hash(), world2.compute_hash());

        let world3 = World::new(GameConfig::default(), 778).unwrap();
        assert_ne!(world1.compute_hash(), world3.compute_hash());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig { cell_size: 0, ..GameConfig::default() };
        assert!(World::new(config, 1).is_err());
    }

    #[test]
    fn test_wall_lookup() {
        let walls = vec![
            Wall::new(7, IVec2::new(100, 100), true),
            Wall::new(9, IVec2::new(200, 100), false),
        ];
        let world = World::with_layout(GameConfig::default(), walls).unwrap();

        assert!(world.has_wall(7));
        assert!(!world.has_wall(8));
        assert_eq!(world.wall(9).map(|w| w.position), Some(IVec2::new(200, 100)));
        assert_eq!(world.destructible_wall_count(), 1);
    }

    #[test]
    fn test_hash_tracks_timers() {
        let mut world = World::with_layout(GameConfig::default(), Vec::new()).unwrap();
        world.bombs.push(Bomb::new(IVec2::new(50, 50), 3.0));
        let before = world.compute_hash();

        world.bombs[0].update(world.config.tick_duration());
        assert_ne!(before, world.compute_hash());
    }

    #[test]
    fn test_events_drain() {
        let mut world = World::with_layout(GameConfig::default(), Vec::new()).unwrap();
        world.push_event(GameEvent::bomb_placed(0, IVec2::new(50, 50)));

        assert_eq!(world.take_events().len(), 1);
        assert!(world.take_events().is_empty());
    }
}
