//! Rendering
//!
//! The simulation never draws. After each tick the session hands the world to
//! [`render_world`], which issues draw calls against a [`Renderer`]:
//!
//! 1. clear to black
//! 2. player
//! 3. walls
//! 4. bombs, each with its countdown label while armed
//! 5. explosion overlays on every covered cell
//!
//! Only which entities get drawn, and where, is meaningful. Pixel output is up
//! to the backend.

pub mod ascii;
pub mod recorder;

pub use ascii::AsciiRenderer;
pub use recorder::{DrawCommand, FrameRecorder};

use crate::core::vec2::IVec2;
use crate::game::bomb::BOMB_DRAW_SIZE;
use crate::game::wall::Wall;
use crate::game::world::World;

/// RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha (255 = opaque)
    pub a: u8,
}

impl Color {
    /// Background
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Countdown labels
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Player box
    pub const PLAYER: Self = Self::rgb(0, 0, 255);
    /// Wall a blast can remove
    pub const DESTRUCTIBLE_WALL: Self = Self::rgb(101, 67, 33);
    /// Wall nothing can remove
    pub const PERMANENT_WALL: Self = Self::rgb(139, 69, 19);
    /// Armed bomb
    pub const BOMB: Self = Self::rgb(255, 0, 0);
    /// Half-transparent blast overlay
    pub const EXPLOSION: Self = Self::rgba(255, 165, 0, 128);

    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color with alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Is this color fully opaque?
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.a == u8::MAX
    }

    /// Fill color for a wall.
    pub fn for_wall(wall: &Wall) -> Self {
        if wall.destructible {
            Self::DESTRUCTIBLE_WALL
        } else {
            Self::PERMANENT_WALL
        }
    }
}

/// Drawing backend the game renders through.
pub trait Renderer {
    /// Fill the whole frame.
    fn clear(&mut self, color: Color);

    /// Fill an opaque rectangle with its top-left corner at `position`.
    fn draw_rect(&mut self, position: IVec2, size: IVec2, color: Color);

    /// Blend a translucent rectangle over what is already drawn.
    fn draw_translucent_overlay(&mut self, position: IVec2, size: IVec2, rgba: Color);

    /// Draw `text` centered on `center`.
    fn draw_text(&mut self, text: &str, center: IVec2, color: Color);

    /// Finish the frame.
    fn present(&mut self);
}

/// Issue the draw calls for one frame of `world`. Does not present.
pub fn render_world<R: Renderer + ?Sized>(world: &World, renderer: &mut R) {
    let cell = world.config.cell_size;
    let cell_box = IVec2::new(cell, cell);
    let bomb_box = IVec2::new(BOMB_DRAW_SIZE, BOMB_DRAW_SIZE);

    renderer.clear(Color::BLACK);

    renderer.draw_rect(world.player.position, cell_box, Color::PLAYER);

    for wall in &world.walls {
        renderer.draw_rect(wall.position, cell_box, Color::for_wall(wall));
    }

    for bomb in &world.bombs {
        renderer.draw_rect(bomb.position, bomb_box, Color::BOMB);
        if let Some(label) = bomb.label() {
            let center = bomb.position.offset(BOMB_DRAW_SIZE / 2, BOMB_DRAW_SIZE / 2);
            renderer.draw_text(&label, center, Color::WHITE);
        }
    }

    for explosion in &world.explosions {
        for cell_pos in explosion.cells(cell) {
            renderer.draw_translucent_overlay(cell_pos, cell_box, Color::EXPLOSION);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::bomb::Bomb;
    use crate::game::config::GameConfig;
    use crate::game::explosion::Explosion;

    fn world_with_everything() -> World {
        let walls = vec![
            Wall::new(0, IVec2::new(200, 200), true),
            Wall::new(1, IVec2::new(300, 200), false),
        ];
        let mut world = World::with_layout(GameConfig::default(), walls).unwrap();
        world.bombs.push(Bomb::new(IVec2::new(50, 50), 2.5));
        world.explosions.push(Explosion::new(IVec2::new(400, 400), 1, 1.0));
        world
    }

    #[test]
    fn test_draw_order() {
        let world = world_with_everything();
        let mut recorder = FrameRecorder::new();
        render_world(&world, &mut recorder);

        let commands = recorder.pending();
        assert_eq!(commands[0], DrawCommand::Clear(Color::BLACK));
        assert_eq!(
            commands[1],
            DrawCommand::Rect {
                position: IVec2::new(50, 50),
                size: IVec2::new(50, 50),
                color: Color::PLAYER,
            }
        );
        assert_eq!(
            commands[2],
            DrawCommand::Rect {
                position: IVec2::new(200, 200),
                size: IVec2::new(50, 50),
                color: Color::DESTRUCTIBLE_WALL,
            }
        );
        assert_eq!(
            commands[3],
            DrawCommand::Rect {
                position: IVec2::new(300, 200),
                size: IVec2::new(50, 50),
                color: Color::PERMANENT_WALL,
            }
        );
        assert_eq!(
            commands[4],
            DrawCommand::Rect {
                position: IVec2::new(50, 50),
                size: IVec2::new(30, 30),
                color: Color::BOMB,
            }
        );
        assert_eq!(
            commands[5],
            DrawCommand::Text {
                text: "2".to_string(),
                center: IVec2::new(65, 65),
                color: Color::WHITE,
            }
        );

        let overlays: Vec<_> = commands[6..]
            .iter()
            .map(|c| match c {
                DrawCommand::Overlay { position, .. } => *position,
                other => panic!("unexpected command {:?}", other),
            })
            .collect();
        assert_eq!(
            overlays,
            vec![
                IVec2::new(400, 400),
                IVec2::new(350, 400),
                IVec2::new(450, 400),
                IVec2::new(400, 350),
                IVec2::new(400, 450),
            ]
        );
    }

    #[test]
    fn test_empty_world_draws_player_only() {
        let world = World::with_layout(GameConfig::default(), Vec::new()).unwrap();
        let mut recorder = FrameRecorder::new();
        render_world(&world, &mut recorder);

        assert_eq!(recorder.pending().len(), 2);
    }

    #[test]
    fn test_explosion_color_is_translucent() {
        assert!(!Color::EXPLOSION.is_opaque());
        assert!(Color::BOMB.is_opaque());
    }
}
