//! Sound effects signalled by the controller

/// The three sound effects of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioClip {
    PaddleHit,
    WallHit,
    MatchWon,
}

impl AudioClip {
    pub const ALL: [AudioClip; 3] = [AudioClip::PaddleHit, AudioClip::WallHit, AudioClip::MatchWon];

    /// Asset file name, relative to the sounds directory
    pub fn file_name(self) -> &'static str {
        match self {
            AudioClip::PaddleHit => "paddle.wav",
            AudioClip::WallHit => "wall.wav",
            AudioClip::MatchWon => "applause.wav",
        }
    }
}

/// Audio backend supplied by the window harness.
///
/// Playback is fire-and-forget; implementations swallow their own failures.
pub trait AudioPlayer {
    fn play(&mut self, clip: AudioClip);
}

/// Plays nothing. For headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl AudioPlayer for Silent {
    fn play(&mut self, _clip: AudioClip) {}
}

impl<F: FnMut(AudioClip)> AudioPlayer for F {
    fn play(&mut self, clip: AudioClip) {
        self(clip)
    }
}
