use crate::{Ball, Config, GameMap, Paddle, PaddleIntent};
use hecs::World;

/// Move ball by one tick's worth of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

/// Apply paddle movement based on intents.
///
/// The bound is checked before the move, so a paddle can end up to one
/// step past the edge of the arena.
pub fn move_paddles(world: &mut World, map: &GameMap, config: &Config) {
    let half_height = config.paddle_height / 2.0;
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.up && paddle.y + half_height < map.height {
            paddle.y += config.paddle_speed;
        }
        if intent.down && paddle.y - half_height > 0.0 {
            paddle.y -= config.paddle_speed;
        }
    }
}
