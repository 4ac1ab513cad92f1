//! Demo mode - the computer plays
//!
//! Looks at the obstacles still heading for the player line and steers
//! toward the adjacent lane with the most clearance.

use rand::Rng;

use super::lanes::LaneIndex;
use super::state::GamePhase;
use super::tick::{Command, Game};

/// Clearance (pixels above the player) below which the current lane is unsafe
pub const DANGER_DISTANCE: f32 = 450.0;

/// Distance to the nearest obstacle still approaching in `lane`
fn clearance<R: Rng>(game: &Game<R>, lane: LaneIndex) -> f32 {
    let t = game.tuning();
    // Obstacles below this line have already passed the player
    let passed_y = t.player_y + t.player_half_size + t.obstacle_half_size;
    game.obstacles()
        .iter()
        .filter(|o| o.lane == lane && o.pos.y < passed_y)
        .map(|o| (t.player_y - o.pos.y).max(0.0))
        .fold(f32::INFINITY, f32::min)
}

/// Next command for the demo player, if any
pub fn suggest<R: Rng>(game: &Game<R>) -> Option<Command> {
    match game.phase() {
        GamePhase::Idle => return Some(Command::Activate),
        GamePhase::GameOver => return Some(Command::Restart),
        GamePhase::Playing => {}
    }

    let lane = game.player().lane;
    let here = clearance(game, lane);
    if here >= DANGER_DISTANCE {
        return None;
    }

    let options = [
        (lane.left(), Command::MoveLeft),
        (lane.right(), Command::MoveRight),
    ];
    options
        .into_iter()
        .filter_map(|(target, cmd)| target.map(|l| (clearance(game, l), cmd)))
        .filter(|(room, _)| *room > here)
        .max_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(_, cmd)| cmd)
}
