//! Data-driven game balance
//!
//! Every gameplay constant can be overridden from JSON. Missing fields fall
//! back to the defaults in [`crate::consts`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Which player position feeds the collision test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionAnchor {
    /// Target lane x and fixed player y; animation never affects fairness
    #[default]
    Logical,
    /// Tweened x and bobbing y, as drawn on screen
    Visual,
}

/// Rejected tuning values
#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("invalid tuning JSON: {0}")]
    Parse(String),
    #[error("lane positions must be strictly increasing, got {0:?}")]
    UnorderedLanes([f32; LANE_COUNT]),
    #[error("minimum spawn interval must be positive, got {0} ms")]
    SpawnFloor(f64),
    #[error("base spawn interval {base} ms is below the floor {floor} ms")]
    BaseBelowFloor { base: f64, floor: f64 },
    #[error("difficulty interval must be positive, got {0} ms")]
    DifficultyInterval(f64),
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: f64 },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("exit line {exit_y} must lie below spawn line {spawn_y}")]
    ExitAboveSpawn { spawn_y: f32, exit_y: f32 },
}

/// Balance and layout values for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Layout ===
    pub lane_positions: [f32; LANE_COUNT],
    pub player_y: f32,
    pub spawn_y: f32,
    pub exit_y: f32,
    pub player_half_size: f32,
    pub obstacle_half_size: f32,
    pub collision_anchor: CollisionAnchor,

    // === Difficulty ===
    pub base_obstacle_speed: f32,
    pub speed_increment: f32,
    pub base_spawn_interval_ms: f64,
    pub spawn_interval_decrement_ms: f64,
    pub early_level_extra_decrement_ms: f64,
    pub early_levels: u32,
    pub min_spawn_interval_ms: f64,
    pub difficulty_interval_ms: f64,

    // === Scoring ===
    pub score_rate: f64,

    // === Cosmetics ===
    pub lane_tween_ms: f64,
    pub bob_amplitude: f32,
    pub bob_period_ms: f64,
    pub base_river_scroll: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            lane_positions: LANE_POSITIONS,
            player_y: PLAYER_Y,
            spawn_y: OBSTACLE_SPAWN_Y,
            exit_y: OBSTACLE_EXIT_Y,
            player_half_size: PLAYER_HALF_SIZE,
            obstacle_half_size: OBSTACLE_HALF_SIZE,
            collision_anchor: CollisionAnchor::Logical,

            base_obstacle_speed: BASE_OBSTACLE_SPEED,
            speed_increment: SPEED_INCREMENT,
            base_spawn_interval_ms: BASE_SPAWN_INTERVAL_MS,
            spawn_interval_decrement_ms: SPAWN_INTERVAL_DECREMENT_MS,
            early_level_extra_decrement_ms: EARLY_LEVEL_EXTRA_DECREMENT_MS,
            early_levels: EARLY_LEVELS,
            min_spawn_interval_ms: MIN_SPAWN_INTERVAL_MS,
            difficulty_interval_ms: DIFFICULTY_INTERVAL_MS,

            score_rate: SCORE_RATE,

            lane_tween_ms: LANE_TWEEN_MS,
            bob_amplitude: BOB_AMPLITUDE,
            bob_period_ms: BOB_PERIOD_MS,
            base_river_scroll: BASE_RIVER_SCROLL,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON (missing fields use defaults)
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning =
            serde_json::from_str(json).map_err(|e| TuningError::Parse(e.to_string()))?;
        tuning.validate()
    }

    /// Check invariants the simulation relies on
    pub fn validate(self) -> Result<Self, TuningError> {
        let lanes = self.lane_positions;
        if lanes.windows(2).any(|w| w[0] >= w[1]) {
            return Err(TuningError::UnorderedLanes(lanes));
        }
        if self.min_spawn_interval_ms <= 0.0 {
            return Err(TuningError::SpawnFloor(self.min_spawn_interval_ms));
        }
        if self.base_spawn_interval_ms < self.min_spawn_interval_ms {
            return Err(TuningError::BaseBelowFloor {
                base: self.base_spawn_interval_ms,
                floor: self.min_spawn_interval_ms,
            });
        }
        if self.difficulty_interval_ms <= 0.0 {
            return Err(TuningError::DifficultyInterval(self.difficulty_interval_ms));
        }

        let non_negative = [
            ("speed_increment", self.speed_increment as f64),
            ("spawn_interval_decrement_ms", self.spawn_interval_decrement_ms),
            ("early_level_extra_decrement_ms", self.early_level_extra_decrement_ms),
            ("score_rate", self.score_rate),
            ("base_obstacle_speed", self.base_obstacle_speed as f64),
            ("lane_tween_ms", self.lane_tween_ms),
        ];
        if let Some(&(name, value)) = non_negative.iter().find(|(_, v)| *v < 0.0) {
            return Err(TuningError::Negative { name, value });
        }

        let positive = [
            ("player_half_size", self.player_half_size as f64),
            ("obstacle_half_size", self.obstacle_half_size as f64),
            ("bob_period_ms", self.bob_period_ms),
        ];
        if let Some(&(name, value)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(TuningError::NonPositive { name, value });
        }

        if self.exit_y <= self.spawn_y {
            return Err(TuningError::ExitAboveSpawn {
                spawn_y: self.spawn_y,
                exit_y: self.exit_y,
            });
        }
        Ok(self)
    }
}
