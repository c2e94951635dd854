//! Collision Detection
//!
//! Box overlap tests between cell-sized entities, and the blast area test used
//! at detonation. All boxes use strict overlap (see `Rect::intersects`).

use crate::core::rect::Rect;
use crate::core::vec2::IVec2;
use crate::game::wall::Wall;

/// Check if two cell-sized boxes overlap.
#[inline]
pub fn cells_overlap(a: IVec2, b: IVec2, cell_size: i32) -> bool {
    Rect::square(a, cell_size).intersects(&Rect::square(b, cell_size))
}

/// Check if a cell-sized box at `position` overlaps any wall.
pub fn collides_with_walls(position: IVec2, walls: &[Wall], cell_size: i32) -> bool {
    walls
        .iter()
        .any(|wall| cells_overlap(position, wall.position, cell_size))
}

/// Area hit by a blast centered on the cell at `origin`.
///
/// Spans `2 * reach + cell_size` on each axis.
#[inline]
pub fn blast_area(origin: IVec2, cell_size: i32, reach: i32) -> Rect {
    Rect::around(origin, cell_size, reach)
}

/// Check if a wall would be removed by a blast covering `area`.
#[inline]
pub fn wall_hit_by_blast(wall: &Wall, area: &Rect, cell_size: i32) -> bool {
    wall.destructible && area.intersects(&wall.rect(cell_size))
}
