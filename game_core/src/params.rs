/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Window
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    pub const SCREEN_TITLE: &'static str = "Pong Game";

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 30.0; // distance from side wall to paddle centre
    pub const PADDLE_SPEED: f32 = 5.0; // units per tick

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED: f32 = 4.0; // units per tick, per axis

    // Score
    pub const WIN_SCORE: u32 = 5; // used until the startup prompt answers
}
