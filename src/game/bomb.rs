//! Bombs
//!
//! A bomb is armed while its timer is positive. The tick its timer reaches
//! zero it detonates: `explode` consumes the bomb, so a bomb can only go off
//! once.

use serde::{Serialize, Deserialize};

use crate::core::vec2::IVec2;
use crate::game::collision::{blast_area, wall_hit_by_blast};
use crate::game::config::GameConfig;
use crate::game::explosion::Explosion;
use crate::game::wall::Wall;

/// Side of the drawn bomb square.
pub const BOMB_DRAW_SIZE: i32 = 30;

/// Lifecycle phase of a bomb.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BombPhase {
    /// Timer still running
    Armed,
    /// Timer ran out; detonates this tick
    Detonating,
}

/// Parameters of a detonation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlastSpec {
    /// Grid cell size
    pub cell_size: i32,
    /// Explosion arm length in cells
    pub radius: i32,
    /// Units covered beyond the bomb's own cell
    pub reach: i32,
    /// Explosion lifetime in seconds
    pub duration: f64,
}

impl BlastSpec {
    /// Blast parameters for a world config.
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            cell_size: config.cell_size,
            radius: config.explosion_radius,
            reach: config.blast_reach(),
            duration: config.explosion_duration_secs,
        }
    }
}

/// What a detonation did.
#[derive(Clone, Debug, PartialEq)]
pub struct Detonation {
    /// Where the bomb went off
    pub position: IVec2,
    /// Walls removed, in their original order
    pub destroyed: Vec<Wall>,
}

/// State of a placed bomb.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bomb {
    /// Position (the placing player's position)
    pub position: IVec2,
    /// Seconds until detonation
    pub timer: f64,
}

impl Bomb {
    /// Create an armed bomb.
    pub fn new(position: IVec2, fuse_secs: f64) -> Self {
        Self {
            position,
            timer: fuse_secs,
        }
    }

    /// Age by one tick of `dt` seconds. A spent timer stays put.
    #[inline]
    pub fn update(&mut self, dt: f64) {
        if self.timer > 0.0 {
            self.timer -= dt;
        }
    }

    /// Current phase.
    #[inline]
    pub fn phase(&self) -> BombPhase {
        if self.timer > 0.0 {
            BombPhase::Armed
        } else {
            BombPhase::Detonating
        }
    }

    /// Should this bomb go off now?
    #[inline]
    pub fn is_detonating(&self) -> bool {
        self.phase() == BombPhase::Detonating
    }

    /// Countdown label: whole seconds remaining, truncated. `None` once spent.
    pub fn label(&self) -> Option<String> {
        match self.phase() {
            BombPhase::Armed => Some((self.timer as i64).to_string()),
            BombPhase::Detonating => None,
        }
    }

    /// Detonate: spawn an explosion here and remove every destructible wall
    /// the blast area overlaps. Permanent walls are untouched.
    pub fn explode(
        self,
        walls: &mut Vec<Wall>,
        explosions: &mut Vec<Explosion>,
        blast: &BlastSpec,
    ) -> Detonation {
        explosions.push(Explosion::new(self.position, blast.radius, blast.duration));

        let area = blast_area(self.position, blast.cell_size, blast.reach);
        let mut destroyed = Vec::new();
        walls.retain(|wall| {
            if wall_hit_by_blast(wall, &area, blast.cell_size) {
                destroyed.push(*wall);
                false
            } else {
                true
            }
        });

        Detonation {
            position: self.position,
            destroyed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f64 = 1.0 / 60.0;

    fn blast() -> BlastSpec {
        BlastSpec::from_config(&GameConfig::default())
    }

    #[test]
    fn test_detonates_after_three_seconds() {
        let mut bomb = Bomb::new(IVec2::new(50, 50), 3.0);
        let mut first_detonating_tick = None;

        for tick in 1..=200u32 {
            bomb.update(DT);
            if bomb.is_detonating() {
                first_detonating_tick = Some(tick);
                break;
            }
        }

        let tick = first_detonating_tick.expect("bomb never detonated");
        assert!((179..=181).contains(&tick), "detonated at tick {}", tick);
    }

    #[test]
    fn test_timer_stops_once_spent() {
        let mut bomb = Bomb::new(IVec2::ZERO, DT / 2.0);
        bomb.update(DT);
        let spent = bomb.timer;
        assert!(spent <= 0.0);

        bomb.update(DT);
        bomb.update(DT);
        assert_eq!(bomb.timer, spent);
    }

    #[test]
    fn test_label_truncates() {
        assert_eq!(Bomb::new(IVec2::ZERO, 3.0).label().as_deref(), Some("3"));
        assert_eq!(Bomb::new(IVec2::ZERO, 2.99).label().as_deref(), Some("2"));
        assert_eq!(Bomb::new(IVec2::ZERO, 0.5).label().as_deref(), Some("0"));
        assert_eq!(Bomb::new(IVec2::ZERO, 0.0).label(), None);
    }

    #[test]
    fn test_explode_destroys_only_destructible_in_range() {
        let origin = IVec2::new(200, 200);
        let mut walls = vec![
            Wall::new(0, origin, true),
            Wall::new(1, origin, false),
            Wall::new(2, IVec2::new(300, 200), true),
            Wall::new(3, IVec2::new(250, 200), true),
        ];
        let mut explosions = Vec::new();

        let detonation = Bomb::new(origin, 0.0).explode(&mut walls, &mut explosions, &blast());

        let destroyed: Vec<_> = detonation.destroyed.iter().map(|w| w.id).collect();
        assert_eq!(destroyed, vec![0, 3]);

        let remaining: Vec<_> = walls.iter().map(|w| w.id).collect();
        assert_eq!(remaining, vec![1, 2]);

        assert_eq!(explosions.len(), 1);
        assert_eq!(explosions[0].position, origin);
        assert_eq!(explosions[0].radius, 1);
        assert_eq!(explosions[0].timer, 1.0);
    }

    #[test]
    fn test_explode_with_no_walls() {
        let mut walls = Vec::new();
        let mut explosions = Vec::new();
        let detonation = Bomb::new(IVec2::new(0, 0), 0.0).explode(&mut walls, &mut explosions, &blast());

        assert!(detonation.destroyed.is_empty());
        assert_eq!(explosions.len(), 1);
    }
}
