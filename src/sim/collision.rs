//! Collision detection and resolution
//!
//! Lane membership is an exact f32 x comparison (every entity in a lane
//! carries the identical lane-center value); the y axis uses fixed vertical
//! bands. All sweeps remove entities while scanning, so they iterate by
//! descending index with `swap_remove` to visit every survivor exactly once.

use super::state::{GameState, Zombie};
use crate::consts::*;

/// Resolve one zombie against the standing barricades, after movement.
///
/// A blocked zombie with break-speed > 0 damages the barricade; if the
/// barricade survives, the zombie is pushed back by its full movement delta
/// plus a small epsilon, visually halting it. A barricade broken this tick
/// is removed and the zombie keeps its movement. Break-speed 0 variants
/// climb over without interacting.
pub fn resolve_zombie_barricade(
    zombie: &mut Zombie,
    barricades: &mut Vec<super::state::Barricade>,
    speed_factor: f32,
    break_factor: f32,
) {
    if zombie.break_speed == 0.0 {
        return;
    }
    for i in (0..barricades.len()).rev() {
        let barricade = &mut barricades[i];
        if barricade.pos.x != zombie.pos.x {
            continue;
        }
        if (barricade.pos.y - zombie.pos.y).abs() >= BARRICADE_RANGE {
            continue;
        }
        if barricade.health <= 0.0 {
            continue;
        }

        barricade.health -= zombie.break_speed * break_factor;
        if barricade.health > 0.0 {
            zombie.pos.y -= zombie.speed * speed_factor + 0.1;
        } else {
            barricades.swap_remove(i);
        }
    }
}

/// Remove zombies past the bottom edge; each costs the player a life
pub fn cull_offscreen_zombies(state: &mut GameState) {
    for i in (0..state.zombies.len()).rev() {
        if state.zombies[i].pos.y > WINDOW_HEIGHT {
            state.zombies.swap_remove(i);
            state.lose_life();
        }
    }
}

/// Zombies overlapping the player are removed and cost a life each
pub fn resolve_zombie_player(state: &mut GameState) {
    for i in (0..state.zombies.len()).rev() {
        let zombie = &state.zombies[i];
        if zombie.pos.x != state.player.pos.x {
            continue;
        }
        if (state.player.pos.y - zombie.pos.y).abs() >= HIT_RANGE {
            continue;
        }
        state.zombies.swap_remove(i);
        state.lose_life();
    }
}

/// Bullets hit the first overlapping zombie and are always consumed.
///
/// A kill awards score and coins scaled by the session multiplier, exactly
/// once; a surviving zombie keeps its reduced health.
pub fn resolve_bullet_zombie(state: &mut GameState) {
    for bi in (0..state.bullets.len()).rev() {
        let bullet_pos = state.bullets[bi].pos;
        let mut consumed = false;

        for zi in (0..state.zombies.len()).rev() {
            let zombie = &mut state.zombies[zi];
            if zombie.pos.x != bullet_pos.x {
                continue;
            }
            if (bullet_pos.y - zombie.pos.y).abs() >= HIT_RANGE {
                continue;
            }

            zombie.health -= 1.0;
            if zombie.health <= 0.0 {
                state.score += zombie.score_given * state.multiplier;
                state.player.coins += zombie.coins_given * state.multiplier;
                state.zombies.swap_remove(zi);
            }
            consumed = true;
            break;
        }

        if consumed {
            state.bullets.swap_remove(bi);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lane_center_x;
    use crate::sim::spawn::spawn_zombie;
    use crate::sim::state::{GamePhase, ZombieKind};
    use glam::Vec2;

    fn playing_state() -> GameState {
        let mut state = GameState::new(42);
        state.phase = GamePhase::Playing;
        state
    }

    fn barricade_at(state: &mut GameState, lane: u32, health: f32) {
        let id = state.next_entity_id();
        state.barricades.push(super::super::state::Barricade {
            id,
            pos: Vec2::new(lane_center_x(lane), BARRICADE_Y),
            health,
        });
    }

    #[test]
    fn test_blocked_zombie_damages_and_halts() {
        let mut state = playing_state();
        barricade_at(&mut state, 2, BARRICADE_HEALTH);
        spawn_zombie(&mut state, 2, ZombieKind::Normal);
        state.zombies[0].pos.y = BARRICADE_Y + 10.0;

        let mut zombie = state.zombies[0].clone();
        resolve_zombie_barricade(&mut zombie, &mut state.barricades, 1.0, 1.0);

        assert_eq!(state.barricades[0].health, BARRICADE_HEALTH - 1.0);
        // Pushed back by the full movement delta plus epsilon
        assert!((zombie.pos.y - (BARRICADE_Y + 10.0 - 2.1)).abs() < 1e-4);
    }

    #[test]
    fn test_speedy_never_damages_barricades() {
        let mut state = playing_state();
        barricade_at(&mut state, 4, BARRICADE_HEALTH);
        spawn_zombie(&mut state, 4, ZombieKind::Speedy);
        state.zombies[0].pos.y = BARRICADE_Y;

        let mut zombie = state.zombies[0].clone();
        for _ in 0..100 {
            resolve_zombie_barricade(&mut zombie, &mut state.barricades, 1.0, 1.0);
        }
        assert_eq!(state.barricades[0].health, BARRICADE_HEALTH);
        assert_eq!(zombie.pos.y, BARRICADE_Y);
    }

    #[test]
    fn test_broken_barricade_removed_without_pushback() {
        let mut state = playing_state();
        barricade_at(&mut state, 1, 5.0);
        spawn_zombie(&mut state, 1, ZombieKind::Tanky);
        state.zombies[0].pos.y = BARRICADE_Y;

        let mut zombie = state.zombies[0].clone();
        resolve_zombie_barricade(&mut zombie, &mut state.barricades, 1.0, 1.0);

        // 10 break damage destroys a 5-health barricade; zombie keeps moving
        assert!(state.barricades.is_empty());
        assert_eq!(zombie.pos.y, BARRICADE_Y);
    }

    #[test]
    fn test_barricade_out_of_range_untouched() {
        let mut state = playing_state();
        barricade_at(&mut state, 1, BARRICADE_HEALTH);
        spawn_zombie(&mut state, 1, ZombieKind::Normal);
        state.zombies[0].pos.y = BARRICADE_Y - BARRICADE_RANGE;

        let mut zombie = state.zombies[0].clone();
        resolve_zombie_barricade(&mut zombie, &mut state.barricades, 1.0, 1.0);
        assert_eq!(state.barricades[0].health, BARRICADE_HEALTH);
    }

    #[test]
    fn test_break_factor_scales_damage() {
        let mut state = playing_state();
        barricade_at(&mut state, 3, BARRICADE_HEALTH);
        spawn_zombie(&mut state, 3, ZombieKind::Normal);
        state.zombies[0].pos.y = BARRICADE_Y;

        let mut zombie = state.zombies[0].clone();
        resolve_zombie_barricade(&mut zombie, &mut state.barricades, 1.0, 2.0);
        assert_eq!(state.barricades[0].health, BARRICADE_HEALTH - 2.0);
    }

    #[test]
    fn test_offscreen_zombie_costs_a_life() {
        let mut state = playing_state();
        spawn_zombie(&mut state, 0, ZombieKind::Normal);
        state.zombies[0].pos.y = WINDOW_HEIGHT + 1.0;

        cull_offscreen_zombies(&mut state);
        assert!(state.zombies.is_empty());
        assert_eq!(state.player.lives, START_LIVES - 1);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_last_life_lost_ends_run() {
        let mut state = playing_state();
        state.player.lives = 1;
        spawn_zombie(&mut state, 0, ZombieKind::Normal);
        state.zombies[0].pos.y = WINDOW_HEIGHT + 1.0;

        cull_offscreen_zombies(&mut state);
        assert_eq!(state.phase, GamePhase::Dead);
    }

    #[test]
    fn test_zombie_touching_player_is_removed() {
        let mut state = playing_state();
        spawn_zombie(&mut state, 3, ZombieKind::Normal);
        state.zombies[0].pos.y = PLAYER_Y - 10.0;

        resolve_zombie_player(&mut state);
        assert!(state.zombies.is_empty());
        assert_eq!(state.player.lives, START_LIVES - 1);
    }

    #[test]
    fn test_zombie_in_other_lane_misses_player() {
        let mut state = playing_state();
        spawn_zombie(&mut state, 0, ZombieKind::Normal);
        state.zombies[0].pos.y = PLAYER_Y;

        resolve_zombie_player(&mut state);
        assert_eq!(state.zombies.len(), 1);
        assert_eq!(state.player.lives, START_LIVES);
    }

    #[test]
    fn test_bullet_consumed_on_nonlethal_hit() {
        let mut state = playing_state();
        spawn_zombie(&mut state, 3, ZombieKind::Normal);
        state.zombies[0].pos.y = 300.0;
        state.bullets.push(super::super::state::Bullet {
            id: 99,
            pos: Vec2::new(lane_center_x(3), 310.0),
        });

        resolve_bullet_zombie(&mut state);
        assert!(state.bullets.is_empty());
        assert_eq!(state.zombies.len(), 1);
        assert_eq!(state.zombies[0].health, 4.0);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_kill_awards_scaled_rewards_once() {
        let mut state = playing_state();
        state.multiplier = 4;
        spawn_zombie(&mut state, 2, ZombieKind::Normal);
        state.zombies[0].pos.y = 300.0;
        state.zombies[0].health = 1.0;
        state.bullets.push(super::super::state::Bullet {
            id: 99,
            pos: Vec2::new(lane_center_x(2), 300.0),
        });

        resolve_bullet_zombie(&mut state);
        assert!(state.zombies.is_empty());
        assert!(state.bullets.is_empty());
        assert_eq!(state.score, 40);
        assert_eq!(state.player.coins, 4);
    }

    #[test]
    fn test_bullet_hits_at_most_one_zombie() {
        let mut state = playing_state();
        spawn_zombie(&mut state, 5, ZombieKind::Normal);
        spawn_zombie(&mut state, 5, ZombieKind::Normal);
        state.zombies[0].pos.y = 300.0;
        state.zombies[1].pos.y = 305.0;
        state.bullets.push(super::super::state::Bullet {
            id: 99,
            pos: Vec2::new(lane_center_x(5), 302.0),
        });

        resolve_bullet_zombie(&mut state);
        let total: f32 = state.zombies.iter().map(|z| z.health).sum();
        // Exactly one point of damage dealt across the stack
        assert_eq!(total, 9.0);
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_two_bullets_two_zombies_all_resolved() {
        let mut state = playing_state();
        for _ in 0..2 {
            spawn_zombie(&mut state, 6, ZombieKind::Speedy);
        }
        state.zombies[0].pos.y = 200.0;
        state.zombies[1].pos.y = 400.0;
        for y in [210.0, 410.0] {
            let id = state.next_entity_id();
            state.bullets.push(super::super::state::Bullet {
                id,
                pos: Vec2::new(lane_center_x(6), y),
            });
        }

        resolve_bullet_zombie(&mut state);
        assert!(state.bullets.is_empty());
        assert_eq!(state.zombies.len(), 2);
        for zombie in &state.zombies {
            assert_eq!(zombie.health, 1.0);
        }
    }
}
