use crate::{GameMap, Params, Side};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub win_score: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default configuration with the points-to-win answered at startup.
    /// A zero is raised to one so the match can always end.
    pub fn with_win_score(win_score: u32) -> Self {
        Self {
            win_score: win_score.max(1),
            ..Self::default()
        }
    }

    /// Get X position for paddle based on side
    pub fn paddle_x(&self, side: Side) -> f32 {
        self.map().paddle_spawn(side, self.paddle_margin).x
    }

    pub fn map(&self) -> GameMap {
        GameMap::new(self.screen_width, self.screen_height)
    }
}
