//! Explosions
//!
//! The visible mark a detonation leaves behind. Walls are destroyed once, at
//! detonation; an explosion only ages and gets drawn.

use serde::{Serialize, Deserialize};

use crate::core::vec2::IVec2;

/// State of a live explosion.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Explosion {
    /// Center cell position
    pub position: IVec2,
    /// Arm length in cells
    pub radius: i32,
    /// Initial lifetime in seconds
    pub duration: f64,
    /// Remaining lifetime in seconds
    pub timer: f64,
}

impl Explosion {
    /// Create a new explosion with a full timer.
    pub fn new(position: IVec2, radius: i32, duration: f64) -> Self {
        Self {
            position,
            radius,
            duration,
            timer: duration,
        }
    }

    /// Age by one tick of `dt` seconds.
    #[inline]
    pub fn update(&mut self, dt: f64) {
        self.timer -= dt;
    }

    /// Has the explosion run its course?
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.timer <= 0.0
    }

    /// Cells covered by the plus shape: the center, then each arm outward.
    ///
    /// Yields `4 * radius + 1` positions with no duplicates.
    pub fn cells(&self, cell_size: i32) -> impl Iterator<Item = IVec2> + '_ {
        let center = self.position;
        std::iter::once(center).chain((1..=self.radius).flat_map(move |i| {
            let d = i * cell_size;
            [
                center.offset(-d, 0),
                center.offset(d, 0),
                center.offset(0, -d),
                center.offset(0, d),
            ]
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f64 = 1.0 / 60.0;

    #[test]
    fn test_lifecycle_one_second() {
        let mut explosion = Explosion::new(IVec2::new(100, 100), 1, 1.0);

        for tick in 1..60 {
            explosion.update(DT);
            assert!(!explosion.is_finished(), "finished early at tick {}", tick);
        }

        explosion.update(DT);
        assert!(explosion.is_finished());

        // Never reactivates
        explosion.update(DT);
        assert!(explosion.is_finished());
    }

    #[test]
    fn test_timer_monotonic() {
        let mut explosion = Explosion::new(IVec2::ZERO, 1, 0.5);
        let mut last = explosion.timer;
        for _ in 0..100 {
            explosion.update(DT);
            assert!(explosion.timer < last);
            last = explosion.timer;
        }
    }

    #[test]
    fn test_plus_shape_radius_one() {
        let explosion = Explosion::new(IVec2::new(100, 100), 1, 1.0);
        let cells: Vec<_> = explosion.cells(50).collect();

        assert_eq!(
            cells,
            vec![
                IVec2::new(100, 100),
                IVec2::new(50, 100),
                IVec2::new(150, 100),
                IVec2::new(100, 50),
                IVec2::new(100, 150),
            ]
        );
    }

    #[test]
    fn test_plus_shape_sizes() {
        assert_eq!(Explosion::new(IVec2::ZERO, 0, 1.0).cells(50).count(), 1);
        assert_eq!(Explosion::new(IVec2::ZERO, 2, 1.0).cells(50).count(), 9);
    }
}
