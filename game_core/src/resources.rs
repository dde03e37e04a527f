use crate::{AudioClip, Side};

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub dt: f32,    // Delta time reported for this tick (not used to scale motion)
    pub now: f32,   // Total elapsed time
    pub ticks: u64, // Number of update steps run
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, dt: f32) {
        self.dt = dt;
        self.now += dt;
        self.ticks += 1;
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Left is checked first, so it takes precedence if both sides qualify
    pub fn winner(&self, win_score: u32) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Where the match is in its lifecycle, derived from the state flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Ball at rest in the centre, waiting for the launch key
    NotStarted,
    /// Ball in motion
    Playing,
    /// A side reached the winning score; only restart leaves this phase
    GameOver,
}

/// Match bookkeeping owned by the controller
#[derive(Debug, Clone)]
pub struct MatchState {
    pub score: Score,
    pub max_points: u32,
    pub started: bool,
    pub over: bool,
    pub win_sound_played: bool,
}

impl MatchState {
    pub fn new(max_points: u32) -> Self {
        Self {
            score: Score::new(),
            max_points,
            started: false,
            over: false,
            win_sound_played: false,
        }
    }

    pub fn phase(&self) -> MatchPhase {
        if self.over {
            MatchPhase::GameOver
        } else if self.started {
            MatchPhase::Playing
        } else {
            MatchPhase::NotStarted
        }
    }

    pub fn winner(&self) -> Option<Side> {
        self.score.winner(self.max_points)
    }

    /// Back to a fresh match with the same points-to-win
    pub fn reset(&mut self) {
        *self = Self::new(self.max_points);
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub match_won: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Sound effects to play for this tick, in the order they happened
    pub fn clips(&self) -> Vec<AudioClip> {
        let mut clips = Vec::new();
        if self.ball_hit_wall {
            clips.push(AudioClip::WallHit);
        }
        if self.ball_hit_paddle {
            clips.push(AudioClip::PaddleHit);
        }
        if self.match_won {
            clips.push(AudioClip::MatchWon);
        }
        clips
    }
}
