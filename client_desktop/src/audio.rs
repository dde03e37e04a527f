//! SDL2_mixer playback of the match sound effects

use std::collections::HashMap;
use std::path::Path;

use anyhow::anyhow;
use game_core::{AudioClip, AudioPlayer};
use sdl2::mixer::{self, Channel, Chunk};

pub struct SdlAudio {
    chunks: HashMap<AudioClip, Chunk>,
}

impl SdlAudio {
    /// Open the mixer and load every clip from `dir`. A missing file is fatal.
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        mixer::open_audio(
            mixer::DEFAULT_FREQUENCY,
            mixer::DEFAULT_FORMAT,
            mixer::DEFAULT_CHANNELS,
            1024,
        )
        .map_err(|e| anyhow!("opening audio device: {e}"))?;
        mixer::allocate_channels(8);

        let mut chunks = HashMap::new();
        for clip in AudioClip::ALL {
            let path = dir.join(clip.file_name());
            let chunk = Chunk::from_file(&path)
                .map_err(|e| anyhow!("loading sound {}: {e}", path.display()))?;
            chunks.insert(clip, chunk);
        }
        tracing::info!(dir = %dir.display(), "sound effects loaded");

        Ok(Self { chunks })
    }
}

impl AudioPlayer for SdlAudio {
    fn play(&mut self, clip: AudioClip) {
        let Some(chunk) = self.chunks.get(&clip) else {
            return;
        };
        if let Err(err) = Channel::all().play(chunk, 0) {
            tracing::warn!(?clip, %err, "could not play sound");
        }
    }
}

impl Drop for SdlAudio {
    fn drop(&mut self) {
        self.chunks.clear();
        mixer::close_audio();
    }
}
