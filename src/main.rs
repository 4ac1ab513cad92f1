//! River Run headless runner
//!
//! Drives the simulation at 60 Hz under the demo autopilot and logs what
//! happens. Usage: `river-run [seed] [seconds] [tuning.json]`.

use river_run::sim::{Game, GameEvent, GamePhase, autopilot};
use river_run::{AmbientMix, FrameClock, Tuning, TuningError};
use thiserror::Error;

/// Host frame length (60 Hz display)
const FRAME_MS: f64 = 1000.0 / 60.0;
/// Pause on the game over screen before the autopilot restarts
const RESTART_DELAY_MS: f64 = 1500.0;

/// Failure to load a tuning file
#[derive(Debug, Error)]
enum LoadError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("bad tuning in {path}: {source}")]
    Tuning { path: String, source: TuningError },
}

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(12345u64);
    let seconds = args.next().and_then(|s| s.parse().ok()).unwrap_or(120.0f64);

    let tuning = match args.next() {
        Some(path) => match load_tuning(&path) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => Tuning::default(),
    };

    log::info!("River Run starting (seed {}, {} s simulated)", seed, seconds);
    let mut game = match Game::new(tuning, seed) {
        Ok(game) => game,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    let mut clock = FrameClock::starting_at(0.0);
    let mut mix = AmbientMix::new();

    let mut runs = 0u32;
    let mut best = 0u64;
    let mut game_over_at: Option<f64> = None;
    let end_ms = seconds * 1000.0;
    let mut host_ms = 0.0;

    while host_ms < end_ms {
        host_ms += FRAME_MS;
        let frame = clock.tick(host_ms);

        // Linger on the game over screen like a human would
        let waiting = game_over_at.is_some_and(|t| frame.now_ms - t < RESTART_DELAY_MS);
        if !waiting {
            if let Some(cmd) = autopilot::suggest(&game) {
                game.apply(cmd, frame.now_ms);
            }
        }

        game.update(frame.now_ms, frame.delta_ms);

        for event in game.drain_events() {
            match event {
                GameEvent::Audio(cue) => mix.apply(cue),
                GameEvent::Started | GameEvent::Restarted => {
                    runs += 1;
                    game_over_at = None;
                }
                GameEvent::GameOver { final_score } => {
                    best = best.max(final_score);
                    game_over_at = Some(frame.now_ms);
                    log::info!("Run {} over: {} points", runs, final_score);
                }
                GameEvent::Danger { level } => log::warn!("DANGER INCREASING! (level {})", level),
                other => log::trace!("{:?}", other),
            }
        }
        for volume in mix.take_one_shots() {
            log::debug!("One-shot at volume {:.2}", volume);
        }
    }

    if game.phase() == GamePhase::Playing {
        best = best.max(game.score().snapshot());
    }
    log::info!("{} run(s), best score {}", runs, best);

    match serde_json::to_string_pretty(&game.view()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to serialize final frame: {}", e),
    }
}

fn load_tuning(path: &str) -> Result<Tuning, LoadError> {
    let json = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_string(),
        source,
    })?;
    Tuning::from_json(&json).map_err(|source| LoadError::Tuning {
        path: path.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_tuning_missing_file() {
        let err = load_tuning("/nonexistent/river-run-tuning.json").unwrap_err();
        assert!(matches!(err, LoadError::Read { .. }));
        assert!(err.to_string().starts_with("cannot read /nonexistent/"));
    }

    #[test]
    fn test_load_tuning_rejects_invalid_values() {
        let path = std::env::temp_dir().join("river-run-bad-tuning.json");
        std::fs::write(&path, r#"{ "min_spawn_interval_ms": 0.0 }"#).unwrap();
        let err = load_tuning(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Tuning {
                source: TuningError::SpawnFloor(_),
                ..
            }
        ));
        let _ = std::fs::remove_file(&path);
    }
}
