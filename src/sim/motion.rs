//! Cosmetic motion
//!
//! Lane tweening, the canoe's bob and the river scroll. None of this feeds
//! back into gameplay unless the collision anchor is set to `Visual`.

use serde::{Deserialize, Serialize};

/// Cubic ease-out, `t` in [0, 1]
#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Horizontal slide between two lane x-coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaneTween {
    pub from_x: f32,
    pub to_x: f32,
    pub start_ms: f64,
    pub duration_ms: f64,
}

impl LaneTween {
    pub fn new(from_x: f32, to_x: f32, start_ms: f64, duration_ms: f64) -> Self {
        Self {
            from_x,
            to_x,
            start_ms,
            duration_ms,
        }
    }

    /// Progress in [0, 1] at `now_ms`
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    /// Eased x at `now_ms`
    pub fn x_at(&self, now_ms: f64) -> f32 {
        let t = ease_out_cubic(self.progress(now_ms));
        self.from_x + (self.to_x - self.from_x) * t
    }

    pub fn finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}

/// Vertical bob offset at `now_ms`
#[inline]
pub fn bob_offset(now_ms: f64, amplitude: f32, period_ms: f64) -> f32 {
    (now_ms / period_ms).sin() as f32 * amplitude
}

/// River scroll speed (pixels/s); speeds up with the obstacles
#[inline]
pub fn river_scroll_speed(base_scroll: f32, obstacle_speed: f32, base_obstacle_speed: f32) -> f32 {
    base_scroll + (obstacle_speed - base_obstacle_speed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
    }

    #[test]
    fn test_tween_runs_for_duration() {
        let tween = LaneTween::new(512.0, 724.0, 1000.0, 200.0);
        assert_eq!(tween.x_at(1000.0), 512.0);
        let mid = tween.x_at(1100.0);
        assert!(mid > 512.0 && mid < 724.0);
        assert!(!tween.finished(1199.0));
        assert_eq!(tween.x_at(1200.0), 724.0);
        assert!(tween.finished(1500.0));
    }

    #[test]
    fn test_zero_length_tween_snaps() {
        let tween = LaneTween::new(300.0, 512.0, 0.0, 0.0);
        assert_eq!(tween.x_at(0.0), 512.0);
    }

    #[test]
    fn test_bob_bounded() {
        for ms in (0..5000).step_by(37) {
            assert!(bob_offset(ms as f64, 3.0, 300.0).abs() <= 3.0);
        }
    }

    #[test]
    fn test_scroll_tracks_speed() {
        assert_eq!(river_scroll_speed(240.0, 300.0, 300.0), 240.0);
        assert_eq!(river_scroll_speed(240.0, 437.0, 300.0), 377.0);
    }
}
