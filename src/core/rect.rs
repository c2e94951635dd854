//! Axis-Aligned Rectangles
//!
//! Collision boxes for grid entities. Overlap is strict: two boxes that only
//! share an edge do not collide, so an entity can sit flush against a wall and
//! a blast one cell wide does not reach the cell after next.

use serde::{Serialize, Deserialize};

use super::vec2::IVec2;

/// Axis-aligned rectangle with a top-left origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width (expected non-negative)
    pub w: i32,
    /// Height (expected non-negative)
    pub h: i32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size.
    #[inline]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Square of side `size` anchored at `origin`.
    #[inline]
    pub const fn square(origin: IVec2, size: i32) -> Self {
        Self::new(origin.x, origin.y, size, size)
    }

    /// Square of side `size` grown by `margin` on every side.
    #[inline]
    pub const fn around(origin: IVec2, size: i32, margin: i32) -> Self {
        Self::new(
            origin.x - margin,
            origin.y - margin,
            size + 2 * margin,
            size + 2 * margin,
        )
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Check if two rectangles overlap.
    ///
    /// Empty rectangles never overlap anything.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.w <= 0 || self.h <= 0 || other.w <= 0 || other.h <= 0 {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Rect::square(IVec2::new(55, 50), 50);
        let b = Rect::square(IVec2::new(100, 50), 50);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = Rect::square(IVec2::new(50, 50), 50);
        let right = Rect::square(IVec2::new(100, 50), 50);
        let below = Rect::square(IVec2::new(50, 100), 50);
        let corner = Rect::square(IVec2::new(100, 100), 50);

        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
        assert!(!a.intersects(&corner));
    }

    #[test]
    fn test_identical_rects_overlap() {
        let a = Rect::square(IVec2::new(200, 200), 50);
        assert!(a.intersects(&a));
    }

    #[test]
    fn test_empty_rect_never_overlaps() {
        let empty = Rect::new(60, 60, 0, 10);
        let a = Rect::square(IVec2::new(50, 50), 50);
        assert!(!empty.intersects(&a));
        assert!(!a.intersects(&empty));
    }

    #[test]
    fn test_around() {
        let blast = Rect::around(IVec2::new(100, 100), 50, 50);
        assert_eq!(blast, Rect::new(50, 50, 150, 150));
        assert_eq!(blast.right(), 200);
        assert_eq!(blast.bottom(), 200);
    }
}
