pub mod audio;
pub mod components;
pub mod config;
pub mod controller;
pub mod map;
pub mod params;
pub mod prompt;
pub mod render;
pub mod resources;
pub mod systems;

pub use audio::*;
pub use components::*;
pub use config::*;
pub use controller::*;
pub use map::*;
pub use params::*;
pub use render::*;
pub use resources::*;
pub use systems::{Direction, Key};

use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation
pub fn step(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    state: &mut MatchState,
    events: &mut Events,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Move ball
    move_ball(world);

    // 2. Bounce off walls and paddles
    check_collisions(world, map, config, events);

    // 3. Move paddles based on intents
    move_paddles(world, map, config);

    // 4. Check scoring (ball exited arena)
    check_scoring(world, map, config, state, events);

    // 5. End the match once someone reaches the winning score
    check_match_over(world, state, events);
}

/// Helper to create a paddle entity at its spawn point
pub fn create_paddle(world: &mut World, config: &Config, side: Side) -> hecs::Entity {
    let spawn = config.map().paddle_spawn(side, config.paddle_margin);
    world.spawn((Paddle::new(side, spawn.x, spawn.y), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
