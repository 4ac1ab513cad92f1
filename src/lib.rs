//! River Run - a three-lane dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lanes, spawning, difficulty, collisions, game state)
//! - `clock`: Host timestamps to frame times
//! - `audio`: Ambient mix driven by simulation cues
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod clock;
pub mod sim;
pub mod tuning;

pub use audio::{AmbientLevel, AmbientMix, AudioCue};
pub use clock::{FrameClock, FrameTime};
pub use tuning::{CollisionAnchor, Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Number of lanes (fixed)
    pub const LANE_COUNT: usize = 3;
    /// Lane x-coordinates, left to right
    pub const LANE_POSITIONS: [f32; LANE_COUNT] = [300.0, 512.0, 724.0];
    /// Lane the player starts in (and returns to on restart)
    pub const CENTER_LANE: usize = 1;

    /// Player line (y grows downward)
    pub const PLAYER_Y: f32 = 1200.0;
    /// Obstacles appear above the visible field...
    pub const OBSTACLE_SPAWN_Y: f32 = -100.0;
    /// ...and are dropped once they pass this line
    pub const OBSTACLE_EXIT_Y: f32 = 1600.0;

    /// Collision boxes (half of the square's side)
    pub const PLAYER_HALF_SIZE: f32 = 40.0;
    pub const OBSTACLE_HALF_SIZE: f32 = 30.0;

    /// Obstacle speed at level 0 (pixels/s)
    pub const BASE_OBSTACLE_SPEED: f32 = 300.0;
    /// Speed added per difficulty level (no cap)
    pub const SPEED_INCREMENT: f32 = 137.0;

    /// Spawn interval at level 0 (ms)
    pub const BASE_SPAWN_INTERVAL_MS: f64 = 2000.0;
    pub const SPAWN_INTERVAL_DECREMENT_MS: f64 = 100.0;
    /// Extra decrement applied on levels 1..=EARLY_LEVELS
    pub const EARLY_LEVEL_EXTRA_DECREMENT_MS: f64 = 200.0;
    pub const EARLY_LEVELS: u32 = 3;
    pub const MIN_SPAWN_INTERVAL_MS: f64 = 500.0;

    /// Time between difficulty increases (ms)
    pub const DIFFICULTY_INTERVAL_MS: f64 = 10_000.0;

    /// Points per second survived
    pub const SCORE_RATE: f64 = 100.0;

    /// Lane change tween length (ms)
    pub const LANE_TWEEN_MS: f64 = 200.0;
    /// Player bob: y = PLAYER_Y + sin(now / BOB_PERIOD_MS) * BOB_AMPLITUDE
    pub const BOB_AMPLITUDE: f32 = 3.0;
    pub const BOB_PERIOD_MS: f64 = 300.0;
    /// River scroll at base speed (pixels/s, ~4 px per frame at 60 Hz)
    pub const BASE_RIVER_SCROLL: f32 = 240.0;
}
