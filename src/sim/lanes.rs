//! Lane geometry
//!
//! Three fixed lanes. A [`LaneIndex`] can only hold a valid lane, so every
//! piece of code that receives one can index the track without checks.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{CENTER_LANE, LANE_COUNT};

/// Raw index that names no lane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("lane {0} out of range 0..{max}", max = LANE_COUNT)]
pub struct LaneOutOfRange(pub usize);

/// Index of a lane, always in `0..LANE_COUNT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct LaneIndex(usize);

impl LaneIndex {
    pub const LEFT: LaneIndex = LaneIndex(0);
    pub const CENTER: LaneIndex = LaneIndex(CENTER_LANE);
    pub const RIGHT: LaneIndex = LaneIndex(LANE_COUNT - 1);

    /// Checked constructor
    pub fn new(index: usize) -> Option<Self> {
        (index < LANE_COUNT).then_some(Self(index))
    }

    /// Clamping constructor
    pub fn clamped(index: usize) -> Self {
        Self(index.min(LANE_COUNT - 1))
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    /// Lane to the left, or `None` at the left edge
    pub fn left(self) -> Option<Self> {
        self.0.checked_sub(1).map(LaneIndex)
    }

    /// Lane to the right, or `None` at the right edge
    pub fn right(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }
}

impl Default for LaneIndex {
    fn default() -> Self {
        Self::CENTER
    }
}

impl TryFrom<usize> for LaneIndex {
    type Error = LaneOutOfRange;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::new(index).ok_or(LaneOutOfRange(index))
    }
}

impl From<LaneIndex> for usize {
    fn from(lane: LaneIndex) -> usize {
        lane.0
    }
}

/// Fixed ordered lane x-positions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaneTrack {
    positions: [f32; LANE_COUNT],
}

impl LaneTrack {
    pub fn new(positions: [f32; LANE_COUNT]) -> Self {
        Self { positions }
    }

    /// X-coordinate of a lane's center
    #[inline]
    pub fn x(&self, lane: LaneIndex) -> f32 {
        self.positions[lane.get()]
    }

    /// Validate a raw index against the track
    pub fn lane(&self, index: usize) -> Option<LaneIndex> {
        LaneIndex::new(index)
    }
}

impl Default for LaneTrack {
    fn default() -> Self {
        Self::new(crate::consts::LANE_POSITIONS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lane_bounds() {
        assert_eq!(LaneIndex::new(0), Some(LaneIndex::LEFT));
        assert_eq!(LaneIndex::new(2), Some(LaneIndex::RIGHT));
        assert_eq!(LaneIndex::new(3), None);
        assert_eq!(LaneIndex::clamped(99), LaneIndex::RIGHT);
    }

    #[test]
    fn test_neighbours_clamp_at_edges() {
        assert_eq!(LaneIndex::LEFT.left(), None);
        assert_eq!(LaneIndex::RIGHT.right(), None);
        assert_eq!(LaneIndex::CENTER.left(), Some(LaneIndex::LEFT));
        assert_eq!(LaneIndex::CENTER.right(), Some(LaneIndex::RIGHT));
    }

    #[test]
    fn test_track_positions() {
        let track = LaneTrack::default();
        assert_eq!(track.x(LaneIndex::LEFT), 300.0);
        assert_eq!(track.x(LaneIndex::CENTER), 512.0);
        assert_eq!(track.x(LaneIndex::RIGHT), 724.0);
        assert_eq!(track.lane(5), None);
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        assert_eq!(serde_json::to_string(&LaneIndex::RIGHT).unwrap(), "2");
        assert!(serde_json::from_str::<LaneIndex>("3").is_err());
        assert_eq!(LaneIndex::try_from(3), Err(LaneOutOfRange(3)));
        assert_eq!(LaneOutOfRange(3).to_string(), "lane 3 out of range 0..3");
        assert_eq!(serde_json::from_str::<LaneIndex>("0").unwrap(), LaneIndex::LEFT);
    }

    proptest! {
        #[test]
        fn prop_clamped_always_in_range(index in 0usize..1000) {
            prop_assert!(LaneIndex::clamped(index).get() < LANE_COUNT);
        }
    }
}
