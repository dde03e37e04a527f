use crate::map::Aabb;
use crate::{Ball, Config, Events, GameMap, Paddle, Side};
use hecs::World;

/// Check ball collisions with walls and paddles.
///
/// The wall, left paddle and right paddle checks are independent; all three
/// run every tick, so one tick can report both a wall and a paddle hit.
pub fn check_collisions(world: &mut World, map: &GameMap, config: &Config, events: &mut Events) {
    // Collect paddle boxes first so the ball can be borrowed mutably
    let mut paddles: Vec<(Side, Aabb)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.bounds(config.paddle_width, config.paddle_height)))
        .collect();
    paddles.sort_by_key(|(side, _)| *side);

    let radius = config.ball_radius;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Top/bottom walls
        let bounds = ball.bounds(radius);
        if bounds.top() > map.height || bounds.bottom() < 0.0 {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }

        for (side, paddle) in &paddles {
            if !ball.bounds(radius).intersects(paddle) {
                continue;
            }
            match side {
                Side::Left => {
                    ball.pos.x = paddle.right() + radius;
                    ball.vel.x = ball.vel.x.abs();
                }
                Side::Right => {
                    ball.pos.x = paddle.left() - radius;
                    ball.vel.x = -ball.vel.x.abs();
                }
            }
            events.ball_hit_paddle = true;
        }
    }
}
