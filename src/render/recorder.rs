//! Recording renderer: keeps draw calls instead of drawing them.

use std::collections::VecDeque;

use super::{Color, Renderer};
use crate::core::vec2::IVec2;

/// A single recorded draw call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawCommand {
    /// Frame cleared
    Clear(Color),
    /// Opaque rectangle
    Rect {
        /// Top-left corner
        position: IVec2,
        /// Width and height
        size: IVec2,
        /// Fill
        color: Color,
    },
    /// Translucent rectangle
    Overlay {
        /// Top-left corner
        position: IVec2,
        /// Width and height
        size: IVec2,
        /// Fill, with alpha
        color: Color,
    },
    /// Text label
    Text {
        /// Label contents
        text: String,
        /// Center point
        center: IVec2,
        /// Text color
        color: Color,
    },
}

/// Renderer that records every frame as a list of [`DrawCommand`]s.
#[derive(Debug, Default)]
pub struct FrameRecorder {
    pending: Vec<DrawCommand>,
    frames: VecDeque<Vec<DrawCommand>>,
    history: Option<usize>,
    presented: u64,
}

impl FrameRecorder {
    /// Recorder that keeps every presented frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorder that keeps only the last `frames` presented frames.
    pub fn with_history(frames: usize) -> Self {
        Self {
            history: Some(frames),
            ..Self::default()
        }
    }

    /// Draw calls issued since the last `present`.
    pub fn pending(&self) -> &[DrawCommand] {
        &self.pending
    }

    /// Retained frames, oldest first.
    pub fn frames(&self) -> impl Iterator<Item = &[DrawCommand]> {
        self.frames.iter().map(Vec::as_slice)
    }

    /// Most recently presented frame.
    pub fn last_frame(&self) -> Option<&[DrawCommand]> {
        self.frames.back().map(Vec::as_slice)
    }

    /// Total frames presented, retained or not.
    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl Renderer for FrameRecorder {
    fn clear(&mut self, color: Color) {
        self.pending.push(DrawCommand::Clear(color));
    }

    fn draw_rect(&mut self, position: IVec2, size: IVec2, color: Color) {
        self.pending.push(DrawCommand::Rect { position, size, color });
    }

    fn draw_translucent_overlay(&mut self, position: IVec2, size: IVec2, rgba: Color) {
        self.pending.push(DrawCommand::Overlay {
            position,
            size,
            color: rgba,
        });
    }

    fn draw_text(&mut self, text: &str, center: IVec2, color: Color) {
        self.pending.push(DrawCommand::Text {
            text: text.to_string(),
            center,
            color,
        });
    }

    fn present(&mut self) {
        let frame = std::mem::take(&mut self.pending);
        self.frames.push_back(frame);
        if let Some(limit) = self.history {
            while self.frames.len() > limit {
                self.frames.pop_front();
            }
        }
        self.presented += 1;
    }
}
