//! Per-frame simulation update
//!
//! [`Game`] composes the lane track, difficulty controller, spawner,
//! collision detector and score tracker, and owns the phase transitions.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::CollisionDetector;
use super::difficulty::{DifficultyController, DifficultyParams, LevelUp};
use super::lanes::{LaneIndex, LaneTrack};
use super::motion::{LaneTween, bob_offset, river_scroll_speed};
use super::score::ScoreTracker;
use super::spawner::ObstacleSpawner;
use super::state::{GameEvent, GamePhase, Obstacle, ObstacleKind, Player};
use crate::audio::{AmbientLevel, AudioCue};
use crate::tuning::{CollisionAnchor, Tuning, TuningError};

/// Input commands (no payload)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Start from the title screen
    Activate,
    MoveLeft,
    MoveRight,
    /// Play again after game over
    Restart,
}

/// Obstacle as seen by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub id: u32,
    pub kind: ObstacleKind,
    pub pos: Vec2,
}

/// Everything the presentation layer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameView {
    pub phase: GamePhase,
    pub score: u64,
    pub level: u32,
    pub lane: LaneIndex,
    pub player_pos: Vec2,
    pub obstacles: Vec<ObstacleView>,
    pub river_offset: f32,
}

/// The game: state machine plus all gameplay components
#[derive(Debug, Clone)]
pub struct Game<R: Rng = Pcg32> {
    tuning: Tuning,
    track: LaneTrack,
    phase: GamePhase,
    player: Player,
    obstacles: Vec<Obstacle>,
    difficulty: DifficultyController,
    spawner: ObstacleSpawner,
    collision: CollisionDetector,
    score: ScoreTracker,
    /// Time of the previous Playing frame, for score accrual
    last_frame_ms: f64,
    river_offset: f32,
    events: Vec<GameEvent>,
    rng: R,
}

impl Game<Pcg32> {
    /// New game on the title screen, spawns seeded from `seed`
    pub fn new(tuning: Tuning, seed: u64) -> Result<Self, TuningError> {
        Self::with_rng(tuning, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// New game on the title screen using the given random source
    ///
    /// Rejects a [`Tuning`] that fails [`Tuning::validate`].
    pub fn with_rng(tuning: Tuning, rng: R) -> Result<Self, TuningError> {
        let tuning = tuning.validate()?;
        let track = LaneTrack::new(tuning.lane_positions);
        let difficulty = DifficultyController::new(DifficultyParams::from(&tuning), 0.0);
        let spawner = ObstacleSpawner::new(tuning.spawn_y, 0.0, difficulty.spawn_interval_ms());
        Ok(Self {
            player: Player::new(LaneIndex::CENTER, &track, tuning.player_y),
            collision: CollisionDetector::new(tuning.player_half_size, tuning.obstacle_half_size),
            score: ScoreTracker::new(tuning.score_rate),
            phase: GamePhase::Idle,
            obstacles: Vec::new(),
            last_frame_ms: 0.0,
            river_offset: 0.0,
            events: Vec::new(),
            track,
            difficulty,
            spawner,
            tuning,
            rng,
        })
    }

    /// Apply an input command at time `now_ms`
    pub fn apply(&mut self, command: Command, now_ms: f64) {
        match (command, self.phase) {
            (Command::Activate, GamePhase::Idle) => {
                self.reset_run(now_ms);
                self.phase = GamePhase::Playing;
                self.events.push(GameEvent::Started);
                self.events.push(GameEvent::Audio(AudioCue::StartAmbient));
                log::info!("Game started at {:.0} ms", now_ms);
            }
            (Command::MoveLeft, GamePhase::Playing) => {
                if self.player.move_left() {
                    self.begin_lane_tween(now_ms);
                }
            }
            (Command::MoveRight, GamePhase::Playing) => {
                if self.player.move_right() {
                    self.begin_lane_tween(now_ms);
                }
            }
            (Command::Restart, GamePhase::GameOver) => {
                self.reset_run(now_ms);
                self.phase = GamePhase::Playing;
                self.events.push(GameEvent::Restarted);
                self.events
                    .push(GameEvent::Audio(AudioCue::AmbientVolume(AmbientLevel::Normal)));
                log::info!("Game restarted at {:.0} ms", now_ms);
            }
            // Everything else is ignored in the current phase
            _ => {}
        }
    }

    /// Advance one frame
    pub fn update(&mut self, now_ms: f64, delta_ms: f64) {
        let delta_ms = delta_ms.max(0.0);

        // Cosmetic motion runs in every phase
        self.update_motion(now_ms, delta_ms);

        if self.phase != GamePhase::Playing {
            return;
        }

        // Score
        let elapsed_secs = (now_ms - self.last_frame_ms).max(0.0) / 1000.0;
        self.last_frame_ms = now_ms;
        self.score.advance(elapsed_secs);

        // Difficulty
        if let Some(up) = self.difficulty.tick(now_ms) {
            self.on_level_up(up);
        }

        // Spawning
        if let Some(obstacle) =
            self.spawner
                .tick(now_ms, &self.difficulty, &self.track, &mut self.rng)
        {
            log::debug!(
                "Spawned {:?} #{} in lane {}",
                obstacle.kind,
                obstacle.id,
                obstacle.lane.get()
            );
            self.events.push(GameEvent::Spawned {
                id: obstacle.id,
                lane: obstacle.lane,
                kind: obstacle.kind,
            });
            self.obstacles.push(obstacle);
        }

        // Movement uses the current speed, so obstacles in flight speed up too
        let dy = self.difficulty.obstacle_speed() * (delta_ms / 1000.0) as f32;
        let exit_y = self.tuning.exit_y;
        for obstacle in &mut self.obstacles {
            obstacle.pos.y += dy;
        }
        self.obstacles.retain(|o| o.pos.y <= exit_y);

        // Collision
        if self.collision.check(self.collision_pos(), &self.obstacles) {
            self.game_over();
        }
    }

    /// Take all events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Snapshot for the renderer
    pub fn view(&self) -> FrameView {
        FrameView {
            phase: self.phase,
            score: self.score.snapshot(),
            level: self.difficulty.level(),
            lane: self.player.lane,
            player_pos: self.player.visual,
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView {
                    id: o.id,
                    kind: o.kind,
                    pos: o.pos,
                })
                .collect(),
            river_offset: self.river_offset,
        }
    }

    /// Player position used by the collision test
    pub fn collision_pos(&self) -> Vec2 {
        match self.tuning.collision_anchor {
            CollisionAnchor::Logical => self.player.logical_pos(&self.track, self.tuning.player_y),
            CollisionAnchor::Visual => self.player.visual,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn difficulty(&self) -> &DifficultyController {
        &self.difficulty
    }

    pub fn score(&self) -> &ScoreTracker {
        &self.score
    }

    pub fn track(&self) -> &LaneTrack {
        &self.track
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn river_offset(&self) -> f32 {
        self.river_offset
    }

    /// Fresh run state with every timer scheduled from `now_ms`
    fn reset_run(&mut self, now_ms: f64) {
        self.difficulty.reset(now_ms);
        self.spawner.reset(now_ms, self.difficulty.spawn_interval_ms());
        self.score.reset();
        self.obstacles.clear();
        self.last_frame_ms = now_ms;

        let bob = bob_offset(now_ms, self.tuning.bob_amplitude, self.tuning.bob_period_ms);
        self.player = Player::new(LaneIndex::CENTER, &self.track, self.tuning.player_y);
        self.player.visual.y += bob;
    }

    fn begin_lane_tween(&mut self, now_ms: f64) {
        let lane = self.player.lane;
        // Start from where the sprite is now, even if no update ran since the last move
        let from_x = self
            .player
            .tween
            .map_or(self.player.visual.x, |t| t.x_at(now_ms));
        self.player.tween = Some(LaneTween::new(
            from_x,
            self.track.x(lane),
            now_ms,
            self.tuning.lane_tween_ms,
        ));
        self.events.push(GameEvent::LaneChanged { lane });
    }

    fn update_motion(&mut self, now_ms: f64, delta_ms: f64) {
        let t = &self.tuning;

        if let Some(tween) = self.player.tween {
            self.player.visual.x = tween.x_at(now_ms);
            if tween.finished(now_ms) {
                self.player.tween = None;
            }
        }
        self.player.visual.y = t.player_y + bob_offset(now_ms, t.bob_amplitude, t.bob_period_ms);

        let scroll = river_scroll_speed(
            t.base_river_scroll,
            self.difficulty.obstacle_speed(),
            t.base_obstacle_speed,
        );
        self.river_offset += scroll * (delta_ms / 1000.0) as f32;
    }

    fn on_level_up(&mut self, up: LevelUp) {
        log::info!(
            "Difficulty increased! Level: {}, Speed: {}, Spawn interval: {} ms",
            up.level,
            up.obstacle_speed,
            up.spawn_interval_ms
        );
        self.events.push(GameEvent::LevelUp {
            level: up.level,
            obstacle_speed: up.obstacle_speed,
            spawn_interval_ms: up.spawn_interval_ms,
        });
        if up.danger {
            self.events.push(GameEvent::Danger { level: up.level });
        }
    }

    fn game_over(&mut self) {
        self.phase = GamePhase::GameOver;
        let final_score = self.score.snapshot();
        log::info!(
            "Game over at level {} with score {}",
            self.difficulty.level(),
            final_score
        );
        self.events.push(GameEvent::GameOver { final_score });
        self.events.push(GameEvent::Audio(AudioCue::GameOverSting));
        self.events
            .push(GameEvent::Audio(AudioCue::AmbientVolume(AmbientLevel::Ducked)));
    }
}
