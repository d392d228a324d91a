use log_overlay::{Color, FontKind, FontMetrics, Rect, Renderer, Vec2};

pub const FONT: FontMetrics = FontMetrics {
    line_height: 20.0,
    char_width: 10.0,
};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    Text {
        text: String,
        position: Vec2,
        color: Color,
        font: FontKind,
    },
}

/// Renderer that records the command stream instead of drawing.
#[derive(Default)]
pub struct RecordingRenderer {
    pub commands: Vec<DrawCommand>,
}

impl Renderer for RecordingRenderer {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn draw_text(&mut self, text: &str, position: Vec2, color: Color, font: FontKind) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            position,
            color,
            font,
        });
    }
}

impl RecordingRenderer {
    /// Texts drawn in the foreground pass, with the black shadow copies
    /// filtered out.
    #[allow(dead_code)]
    pub fn foreground_texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, color, .. } if *color != Color::BLACK => {
                    Some(text.as_str())
                }
                _ => None,
            })
            .collect()
    }

    #[allow(dead_code)]
    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, DrawCommand::FillRect { .. }))
            .count()
    }
}
