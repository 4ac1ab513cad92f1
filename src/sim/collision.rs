//! Collision detection
//!
//! Player and obstacles are axis-aligned squares. Boxes collide only when
//! both their x and y intervals strictly overlap; touching edges is a miss.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Obstacle;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Square of half-size `half` centered on `center`
    pub fn square(center: Vec2, half: f32) -> Self {
        let extent = Vec2::splat(half);
        Self {
            min: center - extent,
            max: center + extent,
        }
    }

    /// Strict overlap on both axes
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }
}

/// Tests the player's box against live obstacles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionDetector {
    pub player_half_size: f32,
    pub obstacle_half_size: f32,
}

impl CollisionDetector {
    pub fn new(player_half_size: f32, obstacle_half_size: f32) -> Self {
        Self {
            player_half_size,
            obstacle_half_size,
        }
    }

    pub fn obstacle_box(&self, obstacle: &Obstacle) -> Aabb {
        Aabb::square(obstacle.pos, self.obstacle_half_size)
    }

    /// True if any obstacle overlaps the player centered at `player_pos`
    pub fn check(&self, player_pos: Vec2, obstacles: &[Obstacle]) -> bool {
        let player_box = Aabb::square(player_pos, self.player_half_size);
        obstacles
            .iter()
            .any(|o| player_box.overlaps(&self.obstacle_box(o)))
    }
}
