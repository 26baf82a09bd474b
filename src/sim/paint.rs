//! Drawing surface seen by the simulation
//!
//! Entities draw through [`Painter`] so the core never touches a GPU or the
//! DOM. Coordinates are playfield units with the origin top-left.

use glam::Vec2;

/// sRGB-encoded RGBA color (as in CSS), each channel in 0..=1
pub type Color = [f32; 4];

/// Horizontal anchoring for text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Primitive 2D drawing operations against a fixed-size surface
pub trait Painter {
    /// Wipe the whole surface
    fn clear(&mut self);
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Draw text with its baseline anchored at `pos`
    fn fill_text(&mut self, text: &str, pos: Vec2, px: f32, align: TextAlign, color: Color);
}

/// Palette used by the entities
pub mod palette {
    use super::Color;

    pub const PLAYER: Color = [0.0, 1.0, 0.0, 1.0];
    pub const TURRET: Color = [0.0, 0.667, 0.0, 1.0];
    pub const BULLET: Color = [1.0, 1.0, 0.0, 1.0];
    pub const ENEMY: Color = [1.0, 0.0, 0.0, 1.0];
    pub const ENEMY_HATCH: Color = [0.667, 0.0, 0.0, 1.0];
    pub const TEXT: Color = [1.0, 1.0, 1.0, 1.0];
}

/// One recorded painter call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    Rect { pos: Vec2, size: Vec2, color: Color },
    Circle { center: Vec2, radius: f32, color: Color },
    Text { text: String, pos: Vec2, px: f32, align: TextAlign },
}

/// Painter that only records what it was asked to draw (headless runs, tests)
#[derive(Debug, Clone, Default)]
pub struct RecordingPainter {
    pub calls: Vec<DrawCall>,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn count_rects(&self, color: Color) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Rect { color: drawn, .. } if *drawn == color))
            .count()
    }

    pub fn count_circles(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::Circle { .. }))
            .count()
    }

    pub fn cleared(&self) -> bool {
        self.calls.contains(&DrawCall::Clear)
    }
}

impl Painter for RecordingPainter {
    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.calls.push(DrawCall::Rect { pos, size, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
        });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, px: f32, align: TextAlign, _color: Color) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            pos,
            px,
            align,
        });
    }
}

/// Convert HSL (hue in degrees, saturation/lightness 0..=1) to RGBA
pub fn hsl_to_rgba(hue: f32, saturation: f32, lightness: f32) -> Color {
    let h = hue.rem_euclid(360.0) / 60.0;
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    [r + m, g + m, b + m, 1.0]
}
