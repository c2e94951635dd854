//! Integer 2D Vector
//!
//! Positions and offsets in world units. Entities sit on a grid of
//! fixed-size cells but move in sub-cell steps, so world units stay integral.

use std::fmt;
use std::ops::{Add, Sub, Neg};
use serde::{Serialize, Deserialize};

/// 2D vector with integer components.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IVec2 {
    /// X component (world units, grows right)
    pub x: i32,
    /// Y component (world units, grows down)
    pub y: i32,
}

impl IVec2 {
    /// Zero vector
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Unit vector pointing right (+X)
    pub const RIGHT: Self = Self { x: 1, y: 0 };

    /// Unit vector pointing left (-X)
    pub const LEFT: Self = Self { x: -1, y: 0 };

    /// Unit vector pointing up (-Y, screen coordinates)
    pub const UP: Self = Self { x: 0, y: -1 };

    /// Unit vector pointing down (+Y, screen coordinates)
    pub const DOWN: Self = Self { x: 0, y: 1 };

    /// Create a new vector.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position of the top-left corner of grid cell `(col, row)`.
    #[inline]
    pub const fn from_cell(col: i32, row: i32, cell_size: i32) -> Self {
        Self {
            x: col * cell_size,
            y: row * cell_size,
        }
    }

    /// Scale by an integer scalar.
    #[inline]
    pub const fn scale(self, scalar: i32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }

    /// Offset by `dx`, `dy`.
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl Add for IVec2 {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for IVec2 {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for IVec2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl fmt::Debug for IVec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IVec2({}, {})", self.x, self.y)
    }
}

impl fmt::Display for IVec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
