//! Home Defender - a lane-based zombie defense arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, shop)
//! - `highscores`: Plain-text high-score persistence
//!
//! Rendering and window/input plumbing are external collaborators: the sim
//! exposes entity positions and sprite ids, and consumes discrete per-tick
//! inputs.

pub mod highscores;
pub mod sim;

pub use sim::{GamePhase, GameState, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Window dimensions (one simulation unit = one pixel)
    pub const WINDOW_WIDTH: f32 = 798.0;
    pub const WINDOW_HEIGHT: f32 = 798.0;

    /// Lane layout - 7 vertical lanes spanning the window
    pub const NUM_LANES: u32 = 7;
    pub const LANE_WIDTH: f32 = 114.0;

    /// Fixed y positions (y grows downward, zombies descend from y=0)
    pub const PLAYER_Y: f32 = 650.0;
    pub const BARRICADE_Y: f32 = 399.0;

    /// Bullet travel per tick (upward)
    pub const BULLET_SPEED: f32 = 30.0;

    /// Barricade defaults
    pub const BARRICADE_HEALTH: f32 = 200.0;
    pub const MAX_BARRICADES: usize = 5;

    /// Vertical collision bands
    pub const BARRICADE_RANGE: f32 = 20.0;
    pub const HIT_RANGE: f32 = 25.0;

    /// Player defaults
    pub const START_LIVES: u32 = 5;
    pub const START_BARRICADES: u32 = 3;

    /// Extra lives purchasable over a whole session
    pub const MAX_LIVES_PURCHASES: u32 = 2;
}

/// Center x coordinate of a lane. All entities in a lane share this exact
/// value, so lane membership is tested with f32 equality.
#[inline]
pub fn lane_center_x(lane: u32) -> f32 {
    (lane as f32 + 0.5) * consts::LANE_WIDTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lane_centers_span_window() {
        assert_eq!(lane_center_x(0), 57.0);
        assert_eq!(lane_center_x(3), 399.0);
        assert_eq!(lane_center_x(6), 741.0);
        assert!(lane_center_x(consts::NUM_LANES - 1) < consts::WINDOW_WIDTH);
    }

    #[test]
    fn test_lane_centers_are_exact() {
        // Lane equality collision tests rely on recomputed centers matching
        for lane in 0..consts::NUM_LANES {
            assert_eq!(lane_center_x(lane), lane_center_x(lane));
            assert_eq!(
                lane_center_x(lane),
                (lane as f32 + 0.5) * consts::LANE_WIDTH
            );
        }
    }
}
