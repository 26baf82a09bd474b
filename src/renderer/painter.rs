//! Painter that batches primitives into a triangle list
//!
//! Shapes become vertices in playfield coordinates. Text is kept as labels
//! for the host to place (the GPU path has no glyphs).

use glam::Vec2;

use super::shapes::{self, CIRCLE_SEGMENTS};
use super::vertex::Vertex;
use crate::sim::{Color, Painter, TextAlign};

/// A piece of text requested this frame
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub pos: Vec2,
    pub px: f32,
    pub align: TextAlign,
    pub color: Color,
}

/// Accumulates one frame's geometry. Vertices are dropped only by `clear`, so
/// a frame that does not clear draws on top of the previous one. Labels last
/// a single frame: the host takes them with [`VertexPainter::take_labels`].
#[derive(Debug, Default)]
pub struct VertexPainter {
    vertices: Vec<Vertex>,
    labels: Vec<TextLabel>,
}

impl VertexPainter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn labels(&self) -> &[TextLabel] {
        &self.labels
    }

    /// Hand over this frame's text, leaving the geometry in place
    pub fn take_labels(&mut self) -> Vec<TextLabel> {
        std::mem::take(&mut self.labels)
    }
}

impl Painter for VertexPainter {
    fn clear(&mut self) {
        self.vertices.clear();
        self.labels.clear();
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.vertices.extend_from_slice(&shapes::rect(pos, size, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.vertices
            .extend(shapes::circle(center, radius, color, CIRCLE_SEGMENTS));
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, px: f32, align: TextAlign, color: Color) {
        self.labels.push(TextLabel {
            text: text.to_string(),
            pos,
            px,
            align,
            color,
        });
    }
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn css_color(color: Color) -> String {
    let [r, g, b, a] = color.map(|c| c.clamp(0.0, 1.0));
    format!(
        "rgba({}, {}, {}, {})",
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
        a
    )
}

/// Absolutely positioned spans for the labels, as percentages of the
/// playfield so the overlay tracks the canvas at any CSS size
pub fn overlay_html(labels: &[TextLabel], playfield: Vec2) -> String {
    labels
        .iter()
        .map(|label| {
            let shift = match label.align {
                TextAlign::Left => "0%",
                TextAlign::Center => "-50%",
                TextAlign::Right => "-100%",
            };
            format!(
                "<span style=\"position:absolute;left:{:.3}%;top:{:.3}%;\
                 transform:translate({},-100%);font:{}px Arial;color:{};\
                 white-space:nowrap\">{}</span>",
                label.pos.x / playfield.x * 100.0,
                label.pos.y / playfield.y * 100.0,
                shift,
                label.px,
                css_color(label.color),
                escape_html(&label.text)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_html() {
        let labels = [TextLabel {
            text: "Press <Space>".to_string(),
            pos: Vec2::new(400.0, 300.0),
            px: 20.0,
            align: TextAlign::Center,
            color: [1.0; 4],
        }];
        let html = overlay_html(&labels, Vec2::new(800.0, 600.0));
        assert!(html.contains("left:50.000%"));
        assert!(html.contains("top:50.000%"));
        assert!(html.contains("translate(-50%,-100%)"));
        assert!(html.contains("font:20px Arial"));
        assert!(html.contains("rgba(255, 255, 255, 1)"));
        assert!(html.contains("Press &lt;Space&gt;"));

        assert!(overlay_html(&[], Vec2::new(800.0, 600.0)).is_empty());
    }

    #[test]
    fn test_take_labels_keeps_geometry() {
        let mut painter = VertexPainter::new();
        painter.fill_rect(Vec2::ZERO, Vec2::ONE, [1.0; 4]);
        painter.fill_text("Score", Vec2::ZERO, 20.0, TextAlign::Left, [1.0; 4]);

        assert_eq!(painter.take_labels().len(), 1);
        assert!(painter.labels().is_empty());
        assert_eq!(painter.vertices().len(), 6);
    }

    #[test]
    fn test_game_over_overlay_does_not_accumulate() {
        use crate::game::Game;
        use crate::sim::Enemy;
        use crate::tuning::Tuning;

        let mut game = Game::new(3, Tuning::default(), ());
        game.state
            .enemies
            .push(Enemy::new(Vec2::new(380.0, 500.0), 40.0, 1.0));
        let mut painter = VertexPainter::new();
        game.frame(&mut painter);
        painter.take_labels();
        assert!(game.state.is_game_over());
        let frozen = painter.vertices().len();

        for _ in 0..600 {
            game.frame(&mut painter);
            let labels = painter.take_labels();
            assert_eq!(labels.len(), 2);
            assert_eq!(labels[0].text, "GAME OVER");
        }
        assert!(painter.labels().is_empty());
        // The last running frame stays on screen untouched
        assert_eq!(painter.vertices().len(), frozen);
    }

    #[test]
    fn test_batches_until_clear() {
        let mut painter = VertexPainter::new();
        painter.fill_rect(Vec2::ZERO, Vec2::ONE, [1.0; 4]);
        painter.fill_circle(Vec2::ZERO, 2.0, [1.0; 4]);
        assert_eq!(painter.vertices().len(), 6 + (CIRCLE_SEGMENTS * 3) as usize);

        // Overlay text lands on top of what is already there
        painter.fill_text("GAME OVER", Vec2::new(400.0, 300.0), 40.0, TextAlign::Center, [1.0; 4]);
        assert_eq!(painter.labels().len(), 1);
        assert!(!painter.vertices().is_empty());

        painter.clear();
        assert!(painter.vertices().is_empty());
        assert!(painter.labels().is_empty());
    }
}
