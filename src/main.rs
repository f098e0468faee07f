//! Fruit Slicer headless entry point
//!
//! Runs a seeded session with a scripted pointer sweeping the screen and
//! reports the final score. Pass a JSON config path as the first argument
//! to override the defaults.

use std::process::ExitCode;

use glam::Vec2;

use fruit_slicer::GameConfig;
use fruit_slicer::consts::FRAME_DT;
use fruit_slicer::sim::{
    EffectSink, GameEvent, PerspectiveCamera, ScoreDisplay, Session, TickInput, tick,
};

/// Session length in frames (60 seconds at 60 Hz)
const FRAMES: u32 = 60 * 60;

struct LogEffects;

impl EffectSink for LogEffects {
    fn spawn_slice_effect(&mut self, archetype: usize, position: glam::Vec3) {
        log::debug!("Splash (archetype {}) at {}", archetype, position);
    }
}

struct LogDisplay;

impl ScoreDisplay for LogDisplay {
    fn show_score(&mut self, score: u32) {
        log::info!("Score: {}", score);
    }
}

fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    // Already-initialized loggers are fine
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Pointer sweeping a figure-eight across the lower half of the screen
fn pointer_at(frame: u32, camera: &PerspectiveCamera) -> Vec2 {
    let t = frame as f32 * FRAME_DT;
    let center = camera.screen_center();
    Vec2::new(
        center.x + (t * 1.3).sin() * center.x * 0.8,
        center.y * 0.6 + (t * 2.6).sin() * center.y * 0.4,
    )
}

fn main() -> ExitCode {
    init_logging();
    log::info!("Fruit Slicer (headless) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Config error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => GameConfig::default(),
    };

    let camera = PerspectiveCamera::default();
    let seed = 0x5EED;
    let mut session = match Session::builder(config)
        .seed(seed)
        .with_default_collaborators()
        .viewpoint(camera)
        .effects(LogEffects)
        .display(LogDisplay)
        .build()
    {
        Ok(session) => session,
        Err(e) => {
            log::error!("Failed to start session: {}", e);
            return ExitCode::FAILURE;
        }
    };

    session.start_game();

    let (mut spawned, mut sliced, mut missed) = (0u32, 0u32, 0u32);
    for frame in 0..FRAMES {
        let input = TickInput {
            pointer: Some(pointer_at(frame, &camera)),
        };
        tick(&mut session, &input, FRAME_DT);

        for event in session.drain_events() {
            match event {
                GameEvent::Spawned { .. } => spawned += 1,
                GameEvent::Sliced { .. } => sliced += 1,
                GameEvent::FellOut { .. } => missed += 1,
                GameEvent::ScoreChanged { .. } => {}
            }
        }
    }

    session.end_game();
    log::info!(
        "Spawned {}, sliced {}, missed {}, final score {}",
        spawned,
        sliced,
        missed,
        session.score().score()
    );
    ExitCode::SUCCESS
}
