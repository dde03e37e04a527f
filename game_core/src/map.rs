use glam::Vec2;

use crate::Side;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.max.x
    }

    pub fn bottom(&self) -> f32 {
        self.min.y
    }

    pub fn top(&self) -> f32 {
        self.max.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Overlap test; boxes that only share an edge do not intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Playing field. Origin is bottom-left, Y grows upward.
#[derive(Debug, Clone, Copy)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
}

impl GameMap {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn ball_spawn(&self) -> Vec2 {
        self.center()
    }

    pub fn paddle_spawn(&self, side: Side, margin: f32) -> Vec2 {
        let x = match side {
            Side::Left => margin,
            Side::Right => self.width - margin,
        };
        Vec2::new(x, self.height / 2.0)
    }
}
