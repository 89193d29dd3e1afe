//! Probabilistic zombie spawner
//!
//! One spawn roll per Playing tick, rate-limiting spawns independent of
//! entity count: ~4% of ticks spawn while below the score-based cap.

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Zombie, ZombieKind};
use crate::consts::NUM_LANES;
use crate::lane_center_x;

/// Maximum live zombies for the current score
pub fn spawn_cap(score: u64) -> usize {
    match score {
        0..500 => 5,
        500..5000 => 10,
        _ => 20,
    }
}

/// Map a uniform roll in [0, 100) to a zombie variant.
///
/// 0-88 normal (89%), 89-98 speedy (10%), 99 tanky (1%).
pub fn kind_for_roll(roll: u32) -> ZombieKind {
    match roll {
        0..=88 => ZombieKind::Normal,
        89..=98 => ZombieKind::Speedy,
        _ => ZombieKind::Tanky,
    }
}

/// Run one spawn roll; at most one zombie appears per tick
pub fn spawn_zombies(state: &mut GameState) {
    if state.zombies.len() >= spawn_cap(state.score) {
        return;
    }
    if state.rng.random_range(0..50u32) >= 2 {
        return;
    }

    let lane = state.rng.random_range(0..NUM_LANES);
    let roll = state.rng.random_range(0..100u32);
    let kind = kind_for_roll(roll);
    spawn_zombie(state, lane, kind);
}

/// Spawn a zombie of the given kind at the top of a lane
pub fn spawn_zombie(state: &mut GameState, lane: u32, kind: ZombieKind) {
    let id = state.next_entity_id();
    let zombie = Zombie {
        id,
        kind,
        pos: Vec2::new(lane_center_x(lane), 0.0),
        speed: kind.base_speed(),
        // Fractional once the health factor has been raised
        health: kind.base_health() * state.zombie_health_factor,
        break_speed: kind.break_speed(),
        coins_given: kind.coins_given(),
        score_given: kind.score_given(),
    };
    state.zombies.push(zombie);
}
