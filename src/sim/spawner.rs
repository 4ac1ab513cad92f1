//! Obstacle spawning
//!
//! One obstacle per elapsed spawn interval, in a random lane with a random
//! kind. The RNG is passed in so runs replay exactly from a seed.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::difficulty::DifficultyController;
use super::lanes::{LaneIndex, LaneTrack};
use super::state::{Obstacle, ObstacleKind};
use crate::consts::LANE_COUNT;

/// Next spawn time and id allocation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnState {
    pub next_spawn_ms: f64,
    pub next_id: u32,
}

impl SpawnState {
    /// First spawn one interval after `now_ms`
    pub fn fresh(now_ms: f64, interval_ms: f64) -> Self {
        Self {
            next_spawn_ms: now_ms + interval_ms,
            next_id: 1,
        }
    }
}

/// Creates obstacles at the top of the field
#[derive(Debug, Clone)]
pub struct ObstacleSpawner {
    spawn_y: f32,
    state: SpawnState,
}

impl ObstacleSpawner {
    pub fn new(spawn_y: f32, now_ms: f64, interval_ms: f64) -> Self {
        Self {
            spawn_y,
            state: SpawnState::fresh(now_ms, interval_ms),
        }
    }

    /// Reschedule the first spawn relative to `now_ms`
    pub fn reset(&mut self, now_ms: f64, interval_ms: f64) {
        self.state = SpawnState::fresh(now_ms, interval_ms);
    }

    /// Spawn one obstacle if the scheduled time has been reached
    pub fn tick<R: Rng>(
        &mut self,
        now_ms: f64,
        difficulty: &DifficultyController,
        track: &LaneTrack,
        rng: &mut R,
    ) -> Option<Obstacle> {
        if now_ms < self.state.next_spawn_ms {
            return None;
        }

        let lane = LaneIndex::clamped(rng.random_range(0..LANE_COUNT));
        let kind = ObstacleKind::ALL[rng.random_range(0..ObstacleKind::ALL.len())];

        let id = self.state.next_id;
        self.state.next_id += 1;
        self.state.next_spawn_ms = now_ms + difficulty.spawn_interval_ms();

        Some(Obstacle {
            id,
            lane,
            kind,
            pos: Vec2::new(track.x(lane), self.spawn_y),
            spawn_speed: difficulty.obstacle_speed(),
        })
    }

    pub fn state(&self) -> &SpawnState {
        &self.state
    }
}
