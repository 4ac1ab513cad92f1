//! Difficulty progression
//!
//! Every `difficulty_interval_ms` the level goes up: obstacles get faster
//! (no cap) and spawn more often (down to a floor). The first few levels
//! shorten the spawn interval twice as hard.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Difficulty parameters taken from [`Tuning`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyParams {
    pub base_speed: f32,
    pub speed_increment: f32,
    pub base_spawn_interval_ms: f64,
    pub spawn_decrement_ms: f64,
    pub early_extra_decrement_ms: f64,
    pub early_levels: u32,
    pub min_spawn_interval_ms: f64,
    pub interval_ms: f64,
}

impl From<&Tuning> for DifficultyParams {
    fn from(t: &Tuning) -> Self {
        Self {
            base_speed: t.base_obstacle_speed,
            speed_increment: t.speed_increment,
            base_spawn_interval_ms: t.base_spawn_interval_ms,
            spawn_decrement_ms: t.spawn_interval_decrement_ms,
            early_extra_decrement_ms: t.early_level_extra_decrement_ms,
            early_levels: t.early_levels,
            min_spawn_interval_ms: t.min_spawn_interval_ms,
            interval_ms: t.difficulty_interval_ms,
        }
    }
}

/// Current difficulty and the next scheduled check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyState {
    pub level: u32,
    pub obstacle_speed: f32,
    pub spawn_interval_ms: f64,
    pub next_check_ms: f64,
}

impl DifficultyState {
    /// Level 0 with the first check one interval after `now_ms`
    pub fn fresh(params: &DifficultyParams, now_ms: f64) -> Self {
        Self {
            level: 0,
            obstacle_speed: params.base_speed,
            spawn_interval_ms: params.base_spawn_interval_ms,
            next_check_ms: now_ms + params.interval_ms,
        }
    }
}

/// Result of a level increase
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelUp {
    pub level: u32,
    pub obstacle_speed: f32,
    pub spawn_interval_ms: f64,
    /// Early level: the presentation shows a danger warning
    pub danger: bool,
}

/// Owns [`DifficultyState`] and advances it on a fixed cadence
#[derive(Debug, Clone)]
pub struct DifficultyController {
    params: DifficultyParams,
    state: DifficultyState,
}

impl DifficultyController {
    /// Controller at level 0, first check one interval after `now_ms`
    pub fn new(params: DifficultyParams, now_ms: f64) -> Self {
        Self {
            state: DifficultyState::fresh(&params, now_ms),
            params,
        }
    }

    /// Back to level 0, rescheduled from `now_ms`
    pub fn reset(&mut self, now_ms: f64) {
        self.state = DifficultyState::fresh(&self.params, now_ms);
    }

    /// Level up if the scheduled check time has been reached
    pub fn tick(&mut self, now_ms: f64) -> Option<LevelUp> {
        if now_ms < self.state.next_check_ms {
            return None;
        }

        let p = &self.params;
        let s = &mut self.state;
        s.level += 1;
        s.obstacle_speed += p.speed_increment;
        s.spawn_interval_ms =
            (s.spawn_interval_ms - p.spawn_decrement_ms).max(p.min_spawn_interval_ms);

        let danger = s.level <= p.early_levels;
        if danger {
            s.spawn_interval_ms =
                (s.spawn_interval_ms - p.early_extra_decrement_ms).max(p.min_spawn_interval_ms);
        }
        s.next_check_ms = now_ms + p.interval_ms;

        Some(LevelUp {
            level: s.level,
            obstacle_speed: s.obstacle_speed,
            spawn_interval_ms: s.spawn_interval_ms,
            danger,
        })
    }

    pub fn state(&self) -> &DifficultyState {
        &self.state
    }

    #[inline]
    pub fn level(&self) -> u32 {
        self.state.level
    }

    #[inline]
    pub fn obstacle_speed(&self) -> f32 {
        self.state.obstacle_speed
    }

    #[inline]
    pub fn spawn_interval_ms(&self) -> f64 {
        self.state.spawn_interval_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn controller() -> DifficultyController {
        DifficultyController::new(DifficultyParams::from(&Tuning::default()), 0.0)
    }

    #[test]
    fn test_no_change_before_schedule() {
        let mut c = controller();
        let before = *c.state();
        assert_eq!(c.tick(9_999.0), None);
        assert_eq!(*c.state(), before);
    }

    #[test]
    fn test_early_levels_match_tuning_table() {
        let mut c = controller();
        // 2000 -> 1700 -> 1400 -> 1100 (extra decrement) -> 1000 (plain)
        let expected: [(u32, f32, f64); 4] = [
            (1, 437.0, 1700.0),
            (2, 574.0, 1400.0),
            (3, 711.0, 1100.0),
            (4, 848.0, 1000.0),
        ];
        for (i, &(level, speed, interval)) in expected.iter().enumerate() {
            let now = 10_000.0 * (i + 1) as f64;
            let up = c.tick(now).unwrap();
            assert_eq!(up.level, level);
            assert_eq!(up.obstacle_speed, speed);
            assert_eq!(up.spawn_interval_ms, interval);
            assert_eq!(up.danger, level <= 3);
            assert_eq!(c.state().next_check_ms, now + 10_000.0);
        }
    }

    #[test]
    fn test_one_level_per_tick_even_after_long_gap() {
        let mut c = controller();
        let up = c.tick(1_000_000.0).unwrap();
        assert_eq!(up.level, 1);
        assert_eq!(c.tick(1_000_001.0), None);
    }

    #[test]
    fn test_reset_reschedules_from_now() {
        let mut c = controller();
        c.tick(10_000.0);
        c.tick(20_000.0);
        c.reset(50_000.0);
        assert_eq!(c.level(), 0);
        assert_eq!(c.obstacle_speed(), 300.0);
        assert_eq!(c.spawn_interval_ms(), 2000.0);
        assert_eq!(c.state().next_check_ms, 60_000.0);
        assert_eq!(c.tick(55_000.0), None);
    }

    proptest! {
        #[test]
        fn prop_interval_never_below_floor(ticks in 1usize..200) {
            let mut c = controller();
            for i in 1..=ticks {
                c.tick(i as f64 * 10_000.0);
                prop_assert!(c.spawn_interval_ms() >= 500.0);
            }
        }

        #[test]
        fn prop_speed_strictly_increases(ticks in 1usize..200) {
            let mut c = controller();
            let mut last = c.obstacle_speed();
            for i in 1..=ticks {
                let up = c.tick(i as f64 * 10_000.0).unwrap();
                prop_assert!(up.obstacle_speed > last);
                last = up.obstacle_speed;
            }
        }
    }
}
