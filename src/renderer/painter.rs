//! Drawing primitives

use glam::Vec2;

/// CSS color string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub &'static str);

impl Color {
    pub const BACKGROUND: Color = Color("#208");
    pub const FLOOR: Color = Color("#280");
    pub const RESTING: Color = Color("#0ff");
    pub const TOUCHING: Color = Color("#f00");
    pub const AIRBORNE: Color = Color("#f0f");
    pub const WHITE: Color = Color("white");
    pub const BLACK: Color = Color("black");

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// How a shape is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawMode {
    Fill,
    Outline,
    /// Outline, then fill
    Both,
}

impl DrawMode {
    pub fn strokes(&self) -> bool {
        matches!(self, DrawMode::Outline | DrawMode::Both)
    }

    pub fn fills(&self) -> bool {
        matches!(self, DrawMode::Fill | DrawMode::Both)
    }
}

/// Pixel-space drawing surface
pub trait Painter {
    /// Fill the whole surface
    fn clear(&mut self, color: Color);

    /// Axis-aligned rectangle from its top-left corner
    fn rect(&mut self, origin: Vec2, size: Vec2, mode: DrawMode, color: Color);

    fn circle(&mut self, center: Vec2, radius: f32, mode: DrawMode, color: Color);

    /// Single line of text, horizontally centered on `baseline_center`
    fn text(&mut self, text: &str, baseline_center: Vec2, color: Color);
}
