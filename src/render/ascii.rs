//! Terminal renderer: one glyph per grid cell.
//!
//! ```text
//! P  player          #  permanent wall
//! +  destructible    o  bomb (digit while armed)
//! *  explosion       .  empty
//! ```

use super::{Color, Renderer};
use crate::core::vec2::IVec2;
use crate::game::config::Arena;

const EMPTY: char = '.';
const OVERLAY: char = '*';

/// Renderer that rasterizes each frame onto the cell grid.
#[derive(Clone, Debug)]
pub struct AsciiRenderer {
    cell_size: i32,
    columns: usize,
    rows: usize,
    grid: Vec<Vec<char>>,
    last_frame: Option<String>,
    presented: u64,
}

impl AsciiRenderer {
    /// Renderer sized to an arena's grid.
    pub fn new(arena: &Arena) -> Self {
        let columns = arena.columns().max(0) as usize;
        let rows = arena.rows().max(0) as usize;
        Self {
            cell_size: arena.cell_size,
            columns,
            rows,
            grid: vec![vec![EMPTY; columns]; rows],
            last_frame: None,
            presented: 0,
        }
    }

    /// Text of the most recently presented frame, one line per row.
    pub fn last_frame(&self) -> Option<&str> {
        self.last_frame.as_deref()
    }

    /// Frames presented so far.
    pub fn presented(&self) -> u64 {
        self.presented
    }

    /// Glyph at a grid cell of the frame being drawn.
    pub fn glyph(&self, col: usize, row: usize) -> Option<char> {
        self.grid.get(row).and_then(|r| r.get(col)).copied()
    }

    fn glyph_for(color: Color) -> char {
        match color {
            Color::PLAYER => 'P',
            Color::DESTRUCTIBLE_WALL => '+',
            Color::PERMANENT_WALL => '#',
            Color::BOMB => 'o',
            _ => '?',
        }
    }

    /// Grid cell holding a world point, if on the board.
    fn cell_of(&self, point: IVec2) -> Option<(usize, usize)> {
        let col = point.x.div_euclid(self.cell_size);
        let row = point.y.div_euclid(self.cell_size);
        if col < 0 || row < 0 || col as usize >= self.columns || row as usize >= self.rows {
            return None;
        }
        Some((col as usize, row as usize))
    }

    /// Paint every cell a rectangle touches, clipped to the board.
    fn fill(&mut self, position: IVec2, size: IVec2, glyph: char) {
        if size.x <= 0 || size.y <= 0 || self.columns == 0 || self.rows == 0 {
            return;
        }

        let first_col = position.x.div_euclid(self.cell_size).max(0);
        let first_row = position.y.div_euclid(self.cell_size).max(0);
        let last_col = (position.x + size.x - 1)
            .div_euclid(self.cell_size)
            .min(self.columns as i32 - 1);
        let last_row = (position.y + size.y - 1)
            .div_euclid(self.cell_size)
            .min(self.rows as i32 - 1);

        for row in first_row..=last_row {
            for col in first_col..=last_col {
                self.grid[row as usize][col as usize] = glyph;
            }
        }
    }
}

impl Renderer for AsciiRenderer {
    fn clear(&mut self, _color: Color) {
        for row in &mut self.grid {
            row.fill(EMPTY);
        }
    }

    fn draw_rect(&mut self, position: IVec2, size: IVec2, color: Color) {
        self.fill(position, size, Self::glyph_for(color));
    }

    fn draw_translucent_overlay(&mut self, position: IVec2, size: IVec2, _rgba: Color) {
        self.fill(position, size, OVERLAY);
    }

    fn draw_text(&mut self, text: &str, center: IVec2, _color: Color) {
        let Some(first) = text.chars().next() else {
            return;
        };
        if let Some((col, row)) = self.cell_of(center) {
            self.grid[row][col] = first;
        }
    }

    fn present(&mut self) {
        let mut frame = String::with_capacity(self.rows * (self.columns + 1));
        for row in &self.grid {
            frame.extend(row.iter());
            frame.push('\n');
        }
        self.last_frame = Some(frame);
        self.presented += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::bomb::Bomb;
    use crate::game::config::GameConfig;
    use crate::game::explosion::Explosion;
    use crate::game::wall::Wall;
    use crate::game::world::World;
    use crate::render::render_world;

    #[test]
    fn test_frame_dimensions() {
        let mut renderer = AsciiRenderer::new(&GameConfig::default().arena());
        renderer.clear(Color::BLACK);
        renderer.present();

        let frame = renderer.last_frame().unwrap();
        let lines: Vec<_> = frame.lines().collect();
        assert_eq!(lines.len(), 12);
        assert!(lines.iter().all(|l| l.chars().count() == 16));
    }

    #[test]
    fn test_world_snapshot() {
        let walls = vec![
            Wall::new(0, IVec2::new(150, 50), true),
            Wall::new(1, IVec2::new(200, 50), false),
        ];
        let mut world = World::with_layout(GameConfig::default(), walls).unwrap();
        world.bombs.push(Bomb::new(IVec2::new(50, 50), 2.5));
        world.explosions.push(Explosion::new(IVec2::new(400, 400), 1, 1.0));

        let mut renderer = AsciiRenderer::new(&world.config.arena());
        render_world(&world, &mut renderer);
        renderer.present();

        assert_eq!(renderer.glyph(1, 1), Some('2'));
        assert_eq!(renderer.glyph(3, 1), Some('+'));
        assert_eq!(renderer.glyph(4, 1), Some('#'));
        for (col, row) in [(8, 8), (7, 8), (9, 8), (8, 7), (8, 9)] {
            assert_eq!(renderer.glyph(col, row), Some('*'));
        }
        assert_eq!(renderer.glyph(0, 0), Some('.'));

        let frame = renderer.last_frame().unwrap();
        assert_eq!(frame.lines().nth(1), Some(".2.+#..........."));
    }

    #[test]
    fn test_off_board_draws_are_clipped() {
        let mut renderer = AsciiRenderer::new(&GameConfig::default().arena());
        renderer.clear(Color::BLACK);
        renderer.draw_rect(IVec2::new(-50, -50), IVec2::new(50, 50), Color::PLAYER);
        renderer.draw_rect(IVec2::new(780, 580), IVec2::new(50, 50), Color::PLAYER);
        renderer.draw_text("9", IVec2::new(-10, 10), Color::WHITE);

        assert_eq!(renderer.glyph(0, 0), Some('.'));
        assert_eq!(renderer.glyph(15, 11), Some('P'));
    }
}
