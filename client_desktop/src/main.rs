mod audio;
mod input;
mod renderer;

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{anyhow, Context};
use game_core::prompt::prompt_points_to_win;
use game_core::{Config, GameRng, MatchController, Params, Renderer};
use tracing_subscriber::EnvFilter;

use crate::audio::SdlAudio;
use crate::input::InputEvent;
use crate::renderer::SdlRenderer;

const FRAME_TIME: Duration = Duration::from_micros(16_667);

/// Where the sound effects live; `PONG_SOUNDS_DIR` overrides the default
fn sounds_dir() -> PathBuf {
    std::env::var_os("PONG_SOUNDS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sounds"))
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the prompt
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let points = prompt_points_to_win(&mut io::stdin().lock(), &mut io::stdout())
        .context("reading points to win")?;
    tracing::info!(points, "points to win set");

    let config = Config::with_win_score(points);

    let sdl = sdl2::init().map_err(|e| anyhow!("initialising SDL: {e}"))?;
    let video = sdl.video().map_err(|e| anyhow!("initialising video: {e}"))?;
    let _audio_subsystem = sdl.audio().map_err(|e| anyhow!("initialising audio: {e}"))?;

    let window = video
        .window(
            Params::SCREEN_TITLE,
            config.screen_width as u32,
            config.screen_height as u32,
        )
        .position_centered()
        .build()
        .context("creating window")?;
    let canvas = window
        .into_canvas()
        .present_vsync()
        .build()
        .context("creating canvas")?;

    let mut renderer = SdlRenderer::new(canvas, config.screen_height);
    let mut audio = SdlAudio::load(&sounds_dir())?;
    let mut events = sdl
        .event_pump()
        .map_err(|e| anyhow!("creating event pump: {e}"))?;

    let mut game = MatchController::new(config, GameRng::from_entropy());
    tracing::info!("window open, waiting for launch");

    let mut last_frame = Instant::now();
    'running: loop {
        for event in events.poll_iter() {
            match input::translate(&event) {
                Some(InputEvent::Quit) => break 'running,
                Some(InputEvent::Pressed(key)) => game.handle_key_press(key),
                Some(InputEvent::Released(key)) => game.handle_key_release(key),
                None => {}
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f32();
        last_frame = now;

        game.update(dt, &mut audio);
        renderer.submit(&game.draw());
        renderer.present();

        let spent = last_frame.elapsed();
        if spent < FRAME_TIME {
            std::thread::sleep(FRAME_TIME - spent);
        }
    }

    tracing::info!(
        left = game.state.score.left,
        right = game.state.score.right,
        ticks = game.time.ticks,
        "window closed"
    );
    Ok(())
}
