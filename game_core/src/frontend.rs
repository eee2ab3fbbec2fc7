//! Contract for the host drawing surface and keyboard

use std::error::Error as StdError;

use glam::Vec2;

use crate::{Key, Score, Side};

/// What the frontend needs to create the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSpec {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub background: String,
    pub foreground: String,
}

/// Result of flushing a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    /// The host wants the loop to stop (window closed, process shutting down)
    Closed,
}

/// A host graphics/windowing facility.
///
/// Coordinates are arena-centered, +Y up. The core never sleeps between
/// frames, so whatever pacing the host applies in `flush` sets game speed.
pub trait Frontend {
    type Error: StdError + Send + Sync + 'static;

    /// Create the fixed-size canvas
    fn open(&mut self, window: &WindowSpec) -> Result<(), Self::Error>;

    /// `size` is (width, height) of the paddle rectangle
    fn draw_paddle(&mut self, side: Side, center: Vec2, size: Vec2) -> Result<(), Self::Error>;

    fn draw_ball(&mut self, center: Vec2, diameter: f32) -> Result<(), Self::Error>;

    fn draw_score(&mut self, score: &Score) -> Result<(), Self::Error>;

    /// Key presses since the previous call, oldest first
    fn poll_keys(&mut self) -> Vec<Key>;

    fn flush(&mut self) -> Result<FrameStatus, Self::Error>;
}
