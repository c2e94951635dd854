//! Input Capture
//!
//! A per-tick snapshot of the player's intents, packed into one byte.
//! Unknown bits and unknown direction names are ignored, never rejected.

use std::fmt;
use serde::{Serialize, Deserialize};

use crate::core::vec2::IVec2;

// =============================================================================
// DIRECTION
// =============================================================================

/// Movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// -X
    Left,
    /// +X
    Right,
    /// -Y
    Up,
    /// +Y
    Down,
}

impl Direction {
    /// Order in which held keys are resolved each tick.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit step for this direction (screen coordinates, y grows down).
    #[inline]
    pub fn unit(self) -> IVec2 {
        match self {
            Direction::Left => IVec2::LEFT,
            Direction::Right => IVec2::RIGHT,
            Direction::Up => IVec2::UP,
            Direction::Down => IVec2::DOWN,
        }
    }

    /// Parse a direction name. Anything unrecognised is `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Input flag bit for this direction.
    #[inline]
    fn flag(self) -> u8 {
        match self {
            Direction::Left => InputFrame::FLAG_LEFT,
            Direction::Right => InputFrame::FLAG_RIGHT,
            Direction::Up => InputFrame::FLAG_UP,
            Direction::Down => InputFrame::FLAG_DOWN,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        f.write_str(name)
    }
}

// =============================================================================
// INPUT FRAME
// =============================================================================

/// Raw input state for a single tick.
///
/// Flags (packed bits):
/// - Bit 0: move left held
/// - Bit 1: move right held
/// - Bit 2: move up held
/// - Bit 3: move down held
/// - Bit 4: place bomb held
/// - Bit 5-7: Reserved
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
pub struct InputFrame {
    /// Action flags
    pub flags: u8,
}

impl InputFrame {
    /// Left flag bit
    pub const FLAG_LEFT: u8 = 0x01;
    /// Right flag bit
    pub const FLAG_RIGHT: u8 = 0x02;
    /// Up flag bit
    pub const FLAG_UP: u8 = 0x04;
    /// Down flag bit
    pub const FLAG_DOWN: u8 = 0x08;
    /// Bomb flag bit
    pub const FLAG_BOMB: u8 = 0x10;

    const KNOWN_FLAGS: u8 = 0x1F;

    /// Create an idle input frame.
    pub const fn new() -> Self {
        Self { flags: 0 }
    }

    /// Build from raw bits, dropping reserved ones.
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            flags: bits & Self::KNOWN_FLAGS,
        }
    }

    /// Frame holding a single direction.
    pub fn moving(direction: Direction) -> Self {
        let mut frame = Self::new();
        frame.set_direction(direction, true);
        frame
    }

    /// Frame holding only the bomb key.
    pub const fn bomb() -> Self {
        Self {
            flags: Self::FLAG_BOMB,
        }
    }

    /// Builder: also hold `direction`.
    pub fn with(mut self, direction: Direction) -> Self {
        self.set_direction(direction, true);
        self
    }

    /// Builder: also hold the bomb key.
    pub fn with_bomb(mut self) -> Self {
        self.set_bomb(true);
        self
    }

    /// Is `direction` held this tick?
    #[inline]
    pub fn is_held(&self, direction: Direction) -> bool {
        self.flags & direction.flag() != 0
    }

    /// Held directions in resolution order (left, right, up, down).
    pub fn directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(move |d| self.is_held(*d))
    }

    /// Check if bomb placement was requested this tick.
    #[inline]
    pub fn bomb_pressed(&self) -> bool {
        self.flags & Self::FLAG_BOMB != 0
    }

    /// Check if this is an idle frame (no input).
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.flags == 0
    }

    /// Set or clear a direction.
    #[inline]
    pub fn set_direction(&mut self, direction: Direction, held: bool) {
        if held {
            self.flags |= direction.flag();
        } else {
            self.flags &= !direction.flag();
        }
    }

    /// Set bomb flag.
    #[inline]
    pub fn set_bomb(&mut self, pressed: bool) {
        if pressed {
            self.flags |= Self::FLAG_BOMB;
        } else {
            self.flags &= !Self::FLAG_BOMB;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_frame() {
        let frame = InputFrame::new();
        assert!(frame.is_idle());
        assert!(!frame.bomb_pressed());
        assert_eq!(frame.directions().count(), 0);
    }

    #[test]
    fn test_directions_in_resolution_order() {
        let frame = InputFrame::moving(Direction::Down)
            .with(Direction::Left)
            .with(Direction::Up);

        let held: Vec<_> = frame.directions().collect();
        assert_eq!(held, vec![Direction::Left, Direction::Up, Direction::Down]);
    }

    #[test]
    fn test_flag_toggles() {
        let mut frame = InputFrame::new();
        frame.set_bomb(true);
        frame.set_direction(Direction::Right, true);
        assert!(frame.bomb_pressed());
        assert!(frame.is_held(Direction::Right));

        frame.set_bomb(false);
        frame.set_direction(Direction::Right, false);
        assert!(frame.is_idle());
    }

    #[test]
    fn test_reserved_bits_dropped() {
        let frame = InputFrame::from_bits(0xE0 | InputFrame::FLAG_UP);
        assert_eq!(frame.flags, InputFrame::FLAG_UP);
        assert!(InputFrame::from_bits(0xE0).is_idle());
    }

    #[test]
    fn test_direction_names() {
        assert_eq!(Direction::from_name("left"), Some(Direction::Left));
        assert_eq!(Direction::from_name(" DOWN "), Some(Direction::Down));
        assert_eq!(Direction::from_name("diagonal"), None);
        assert_eq!(Direction::from_name(""), None);
        assert_eq!(Direction::Up.to_string(), "up");
    }

    #[test]
    fn test_units() {
        assert_eq!(Direction::Left.unit(), IVec2::new(-1, 0));
        assert_eq!(Direction::Up.unit(), IVec2::new(0, -1));
    }
}
