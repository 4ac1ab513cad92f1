//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only from the caller (absolute timestamps, no wall clock)
//! - Seeded RNG only
//! - No rendering, audio or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod difficulty;
pub mod lanes;
pub mod motion;
pub mod score;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Aabb, CollisionDetector};
pub use difficulty::{DifficultyController, DifficultyParams, DifficultyState, LevelUp};
pub use lanes::{LaneIndex, LaneOutOfRange, LaneTrack};
pub use score::ScoreTracker;
pub use spawner::{ObstacleSpawner, SpawnState};
pub use state::{GameEvent, GamePhase, Obstacle, ObstacleKind, Player};
pub use tick::{Command, FrameView, Game, ObstacleView};
