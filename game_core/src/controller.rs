//! The match controller: owns every piece of game state and drives it per frame

use glam::Vec2;
use hecs::World;

use crate::systems::{apply_movement_key, Key};
use crate::{
    step, AudioPlayer, Ball, Color, Config, DrawCommand, Events, GameMap, GameRng, MatchPhase,
    MatchState, Paddle, PaddleIntent, Side, Time,
};

const SCORE_TEXT_SIZE: f32 = 30.0;
const WINNER_TEXT_SIZE: f32 = 40.0;
const START_TEXT_SIZE: f32 = 20.0;
pub const START_PROMPT: &str = "Press SPACE to start";

/// A local two-player match.
///
/// Built once at startup and owned by the window harness, which calls
/// [`update`](Self::update) then [`draw`](Self::draw) every frame and forwards
/// key events in between.
pub struct MatchController {
    pub world: World,
    pub time: Time,
    pub map: GameMap,
    pub config: Config,
    pub state: MatchState,
    pub events: Events,
    pub rng: GameRng,
}

impl MatchController {
    pub fn new(config: Config, rng: GameRng) -> Self {
        let map = config.map();
        let mut world = World::new();

        crate::create_paddle(&mut world, &config, Side::Left);
        crate::create_paddle(&mut world, &config, Side::Right);
        crate::create_ball(&mut world, map.ball_spawn(), Vec2::ZERO);

        Self {
            world,
            time: Time::new(),
            map,
            state: MatchState::new(config.win_score),
            config,
            events: Events::new(),
            rng,
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.state.phase()
    }

    /// Advance one tick and play the sounds it produced.
    ///
    /// `dt` only counts as a tick; motion is a fixed displacement per call.
    pub fn update(&mut self, dt: f32, audio: &mut impl AudioPlayer) -> &Events {
        self.time.advance(dt);
        step(
            &mut self.world,
            &self.map,
            &self.config,
            &mut self.state,
            &mut self.events,
        );

        for clip in self.events.clips() {
            audio.play(clip);
        }
        &self.events
    }

    pub fn handle_key_press(&mut self, key: Key) {
        match key {
            Key::Launch => self.launch(),
            Key::Restart => self.restart(),
            _ => apply_movement_key(&mut self.world, key, true),
        }
    }

    pub fn handle_key_release(&mut self, key: Key) {
        apply_movement_key(&mut self.world, key, false);
    }

    /// Serve the ball. Ignored while a rally is running or the match is over.
    fn launch(&mut self) {
        if self.phase() != MatchPhase::NotStarted {
            return;
        }

        let speed = self.config.ball_speed;
        let mut vel = Vec2::ZERO;
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.launch(speed, &mut self.rng);
            vel = ball.vel;
        }
        self.state.started = true;
        tracing::info!(dx = vel.x, dy = vel.y, tick = self.time.ticks, "ball launched");
    }

    /// Start a fresh match from any phase. Paddles keep their positions.
    pub fn restart(&mut self) {
        self.state.reset();
        let spawn = self.map.ball_spawn();
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(spawn);
        }
        tracing::info!(max_points = self.state.max_points, "match restarted");
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle(&self, side: Side) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, paddle)| paddle.side == side)
            .map(|(_e, paddle)| *paddle)
    }

    pub fn intent(&self, side: Side) -> Option<PaddleIntent> {
        self.world
            .query::<(&Paddle, &PaddleIntent)>()
            .iter()
            .find(|(_e, (paddle, _intent))| paddle.side == side)
            .map(|(_e, (_paddle, intent))| *intent)
    }

    /// Build this frame's draw commands. Never mutates state.
    pub fn draw(&self) -> Vec<DrawCommand> {
        let mut commands = vec![DrawCommand::Clear(Color::BLACK)];

        for side in Side::BOTH {
            if let Some(paddle) = self.paddle(side) {
                commands.push(DrawCommand::Rect {
                    rect: paddle.bounds(self.config.paddle_width, self.config.paddle_height),
                    color: Color::WHITE,
                });
            }
        }

        if let Some(ball) = self.ball() {
            commands.push(DrawCommand::Circle {
                center: ball.pos,
                radius: self.config.ball_radius,
                color: Color::WHITE,
            });
        }

        let center_x = self.map.width / 2.0;
        let center_y = self.map.height / 2.0;

        commands.push(DrawCommand::Text {
            text: self.score_text(),
            pos: Vec2::new(center_x, self.map.height - 40.0),
            size: SCORE_TEXT_SIZE,
            color: Color::WHITE,
        });

        if self.state.over {
            if let Some(winner) = self.state.winner() {
                commands.push(DrawCommand::Text {
                    text: winner_text(winner),
                    pos: Vec2::new(center_x, center_y + 80.0),
                    size: WINNER_TEXT_SIZE,
                    color: Color::YELLOW,
                });
            }
        } else if !self.state.started {
            commands.push(DrawCommand::Text {
                text: START_PROMPT.to_string(),
                pos: Vec2::new(center_x, center_y + 50.0),
                size: START_TEXT_SIZE,
                color: Color::WHITE,
            });
        }

        commands
    }

    pub fn score_text(&self) -> String {
        format!("{}     {}", self.state.score.left, self.state.score.right)
    }
}

pub fn winner_text(side: Side) -> String {
    format!("{} Player Wins!", side.name())
}
