//! Survival score

use serde::{Deserialize, Serialize};

/// Accumulates points at a fixed rate per second survived
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreTracker {
    rate: f64,
    score: f64,
}

impl ScoreTracker {
    pub fn new(rate: f64) -> Self {
        Self { rate, score: 0.0 }
    }

    /// Add `rate * delta_secs` (negative deltas are ignored)
    pub fn advance(&mut self, delta_secs: f64) {
        if delta_secs > 0.0 {
            self.score += self.rate * delta_secs;
        }
    }

    pub fn reset(&mut self) {
        self.score = 0.0;
    }

    /// Score as displayed (floored)
    pub fn snapshot(&self) -> u64 {
        self.score.floor() as u64
    }

    /// Unrounded score
    pub fn value(&self) -> f64 {
        self.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_floors_for_display() {
        let mut score = ScoreTracker::new(100.0);
        score.advance(0.0159);
        assert_eq!(score.snapshot(), 1);
        score.advance(1.0);
        assert_eq!(score.snapshot(), 101);
    }

    #[test]
    fn test_reset() {
        let mut score = ScoreTracker::new(100.0);
        score.advance(12.5);
        score.reset();
        assert_eq!(score.value(), 0.0);
        assert_eq!(score.snapshot(), 0);
    }

    #[test]
    fn test_negative_delta_ignored() {
        let mut score = ScoreTracker::new(100.0);
        score.advance(-3.0);
        assert_eq!(score.value(), 0.0);
    }

    proptest! {
        #[test]
        fn prop_rate_times_elapsed(secs in 0.0f64..10_000.0) {
            let mut score = ScoreTracker::new(100.0);
            score.advance(secs);
            prop_assert!((score.value() - 100.0 * secs).abs() < 1e-6);
        }

        #[test]
        fn prop_split_frames_sum(frames in proptest::collection::vec(0.0f64..0.1, 1..500)) {
            let mut score = ScoreTracker::new(100.0);
            for dt in &frames {
                score.advance(*dt);
            }
            let total: f64 = frames.iter().sum();
            prop_assert!((score.value() - 100.0 * total).abs() < 1e-6);
        }
    }
}
