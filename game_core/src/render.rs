//! Draw commands produced by the controller and the renderer they are replayed on

use glam::Vec2;

use crate::map::Aabb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One primitive of a frame, in game coordinates (origin bottom-left)
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Color),
    Rect {
        rect: Aabb,
        color: Color,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Color,
    },
    /// `pos.x` is the horizontal centre of the text, `pos.y` its baseline
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Color,
    },
}

impl DrawCommand {
    pub fn apply<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        match self {
            DrawCommand::Clear(color) => renderer.clear(*color),
            DrawCommand::Rect { rect, color } => renderer.fill_rect(*rect, *color),
            DrawCommand::Circle {
                center,
                radius,
                color,
            } => renderer.fill_circle(*center, *radius, *color),
            DrawCommand::Text {
                text,
                pos,
                size,
                color,
            } => renderer.draw_text(text, *pos, *size, *color),
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }
}

/// Rendering backend supplied by the window harness
pub trait Renderer {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Aabb, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Draw text horizontally centred on `pos.x` with its baseline at `pos.y`
    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);

    fn submit(&mut self, commands: &[DrawCommand]) {
        for command in commands {
            command.apply(self);
        }
    }
}
