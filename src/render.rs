use crate::layout::{Rect, Vec2};

/// RGBA color with 0-255 components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);
    pub const RED: Self = Self::rgba(255, 0, 0, 255);
    pub const AMBER: Self = Self::rgba(255, 191, 0, 255);
    /// Translucent panel backdrop, black at half opacity.
    pub const BACKDROP: Self = Self::rgba(0, 0, 0, 128);
}

/// Which of the two overlay fonts a run of text uses. Bold is reserved for
/// the "LOGS" label and the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontKind {
    Regular,
    Bold,
}

/// Drawing capability supplied by the host. The overlay issues only these
/// two commands, in a deterministic order, during a draw pass.
pub trait Renderer {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn draw_text(&mut self, text: &str, position: Vec2, color: Color, font: FontKind);
}
