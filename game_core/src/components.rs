use glam::Vec2;

use crate::map::Aabb;

/// Which player a paddle (or a point) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn name(self) -> &'static str {
        match self {
            Side::Left => "Left",
            Side::Right => "Right",
        }
    }
}

/// Paddle component - represents a player's paddle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub x: f32, // centre X, fixed for the whole match
    pub y: f32, // centre Y
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32) -> Self {
        Self { side, x, y }
    }

    pub fn bounds(&self, width: f32, height: f32) -> Aabb {
        Aabb::from_center_size(Vec2::new(self.x, self.y), Vec2::new(width, height))
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Put the ball back on the spawn point, at rest
    pub fn reset(&mut self, spawn: Vec2) {
        self.pos = spawn;
        self.vel = Vec2::ZERO;
    }

    /// Serve in one of the four diagonal directions, each axis picked independently
    pub fn launch(&mut self, speed: f32, rng: &mut crate::GameRng) {
        use rand::Rng;
        let dx = if rng.0.gen_bool(0.5) { speed } else { -speed };
        let dy = if rng.0.gen_bool(0.5) { speed } else { -speed };
        self.vel = Vec2::new(dx, dy);
    }

    pub fn is_moving(&self) -> bool {
        self.vel != Vec2::ZERO
    }

    pub fn bounds(&self, radius: f32) -> Aabb {
        Aabb::from_center_size(self.pos, Vec2::splat(radius * 2.0))
    }
}

/// Movement intent for paddle. Both flags may be held at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleIntent {
    pub up: bool,
    pub down: bool,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameRng;

    #[test]
    fn test_ball_reset_stops_ball() {
        let mut ball = Ball::new(Vec2::new(12.0, 40.0), Vec2::new(4.0, -4.0));
        ball.reset(Vec2::new(400.0, 300.0));
        assert_eq!(ball.pos, Vec2::new(400.0, 300.0));
        assert!(!ball.is_moving());
    }

    #[test]
    fn test_ball_launch_is_diagonal() {
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::new(400.0, 300.0), Vec2::ZERO);
        for _ in 0..20 {
            ball.launch(4.0, &mut rng);
            assert_eq!(ball.vel.x.abs(), 4.0);
            assert_eq!(ball.vel.y.abs(), 4.0);
        }
    }

    #[test]
    fn test_paddle_bounds() {
        let paddle = Paddle::new(Side::Left, 30.0, 300.0);
        let aabb = paddle.bounds(10.0, 100.0);
        assert_eq!(aabb.min, Vec2::new(25.0, 250.0));
        assert_eq!(aabb.max, Vec2::new(35.0, 350.0));
    }
}
