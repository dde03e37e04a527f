//! SDL2 canvas renderer
//!
//! Game coordinates have their origin bottom-left; SDL's is top-left, so every
//! Y is flipped against the window height.

use game_core::{Aabb, Color, Renderer};
use glam::Vec2;
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels;
use sdl2::rect::Rect;
use sdl2::render::WindowCanvas;

/// Pixel size of one glyph in SDL_gfx's built-in font
const GLYPH_SIZE: f32 = 8.0;

pub struct SdlRenderer {
    canvas: WindowCanvas,
    height: f32,
}

impl SdlRenderer {
    pub fn new(canvas: WindowCanvas, height: f32) -> Self {
        Self { canvas, height }
    }

    pub fn present(&mut self) {
        self.canvas.present();
    }

    fn flip_y(&self, y: f32) -> f32 {
        self.height - y
    }
}

fn sdl_color(color: Color) -> pixels::Color {
    pixels::Color::RGB(color.r, color.g, color.b)
}

/// Text scale so an 8px glyph roughly matches the requested point size
fn text_scale(size: f32) -> f32 {
    (size / 10.0).round().max(1.0)
}

impl Renderer for SdlRenderer {
    fn clear(&mut self, color: Color) {
        self.canvas.set_draw_color(sdl_color(color));
        self.canvas.clear();
    }

    fn fill_rect(&mut self, rect: Aabb, color: Color) {
        let size = rect.size();
        let sdl_rect = Rect::new(
            rect.left().round() as i32,
            self.flip_y(rect.top()).round() as i32,
            size.x.round() as u32,
            size.y.round() as u32,
        );
        self.canvas.set_draw_color(sdl_color(color));
        if let Err(err) = self.canvas.fill_rect(sdl_rect) {
            tracing::warn!(%err, "fill_rect failed");
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        let result = self.canvas.filled_circle(
            center.x.round() as i16,
            self.flip_y(center.y).round() as i16,
            radius.round() as i16,
            sdl_color(color),
        );
        if let Err(err) = result {
            tracing::warn!(%err, "filled_circle failed");
        }
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
        let scale = text_scale(size);
        let width = text.chars().count() as f32 * GLYPH_SIZE * scale;
        // Baseline sits at the bottom of the glyph cell
        let left = pos.x - width / 2.0;
        let top = self.flip_y(pos.y) - GLYPH_SIZE * scale;

        let result = self.canvas.set_scale(scale, scale).and_then(|()| {
            self.canvas.string(
                (left / scale).round() as i16,
                (top / scale).round() as i16,
                text,
                sdl_color(color),
            )
        });
        if let Err(err) = result {
            tracing::warn!(%err, text, "draw_text failed");
        }
        if let Err(err) = self.canvas.set_scale(1.0, 1.0) {
            tracing::warn!(%err, "resetting render scale failed");
        }
    }
}
