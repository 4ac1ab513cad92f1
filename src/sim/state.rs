//! Entities and events shared by the simulation components

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::lanes::{LaneIndex, LaneTrack};
use super::motion::LaneTween;
use crate::audio::AudioCue;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the first activate
    #[default]
    Idle,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart
    GameOver,
}

/// Obstacle types (equal spawn odds)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObstacleKind {
    Rock,
    Log,
}

impl ObstacleKind {
    pub const ALL: [ObstacleKind; 2] = [ObstacleKind::Rock, ObstacleKind::Log];
}

/// A hazard drifting down its lane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub lane: LaneIndex,
    pub kind: ObstacleKind,
    pub pos: Vec2,
    /// Global speed when spawned. Movement always uses the current speed.
    pub spawn_speed: f32,
}

/// The player's canoe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Target lane; the only position gameplay cares about
    pub lane: LaneIndex,
    /// Where the canoe is drawn (tweened x, bobbing y)
    pub visual: Vec2,
    /// Lane change animation in progress
    #[serde(skip)]
    pub tween: Option<LaneTween>,
}

impl Player {
    /// Player resting in `lane` at height `y`
    pub fn new(lane: LaneIndex, track: &LaneTrack, y: f32) -> Self {
        Self {
            lane,
            visual: Vec2::new(track.x(lane), y),
            tween: None,
        }
    }

    /// Logical position: target lane center at the fixed player line
    pub fn logical_pos(&self, track: &LaneTrack, y: f32) -> Vec2 {
        Vec2::new(track.x(self.lane), y)
    }

    /// Move one lane left. Returns false at the left edge.
    pub fn move_left(&mut self) -> bool {
        self.shift(self.lane.left())
    }

    /// Move one lane right. Returns false at the right edge.
    pub fn move_right(&mut self) -> bool {
        self.shift(self.lane.right())
    }

    fn shift(&mut self, lane: Option<LaneIndex>) -> bool {
        match lane {
            Some(lane) => {
                self.lane = lane;
                true
            }
            None => false,
        }
    }
}

/// Something the presentation or audio layer should react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Spawned { id: u32, lane: LaneIndex, kind: ObstacleKind },
    LaneChanged { lane: LaneIndex },
    LevelUp { level: u32, obstacle_speed: f32, spawn_interval_ms: f64 },
    /// Early level warning
    Danger { level: u32 },
    GameOver { final_score: u64 },
    Restarted,
    Audio(AudioCue),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_moves_clamp() {
        let track = LaneTrack::default();
        let mut player = Player::new(LaneIndex::CENTER, &track, 1200.0);
        assert!(player.move_left());
        assert!(!player.move_left());
        assert_eq!(player.lane, LaneIndex::LEFT);
        assert!(player.move_right());
        assert!(player.move_right());
        assert!(!player.move_right());
        assert_eq!(player.lane, LaneIndex::RIGHT);
    }

    #[test]
    fn test_logical_pos_ignores_visual() {
        let track = LaneTrack::default();
        let mut player = Player::new(LaneIndex::CENTER, &track, 1200.0);
        player.visual = Vec2::new(400.0, 1203.0);
        player.move_right();
        assert_eq!(player.logical_pos(&track, 1200.0), Vec2::new(724.0, 1200.0));
    }
}
