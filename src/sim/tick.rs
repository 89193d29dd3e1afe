//! Per-frame simulation tick
//!
//! Core game loop that advances the simulation deterministically, one tick
//! per rendered frame. Only the Playing phase advances world state; the
//! menu, shop, and death screens freeze it.

use super::collision;
use super::shop::{self, ShopItemId};
use super::spawn;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
///
/// The window collaborator maps key-down events onto these flags between
/// ticks; quit is handled by the process, not the sim.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Start the game from the main menu
    pub confirm: bool,
    /// Move one lane left
    pub move_left: bool,
    /// Move one lane right
    pub move_right: bool,
    /// Fire a bullet from the current lane
    pub fire: bool,
    /// Place a barricade in the current lane
    pub place_barricade: bool,
    /// Open the shop (Playing only)
    pub open_shop: bool,
    /// Leave the shop (Shop only)
    pub exit_shop: bool,
    /// Numeric purchase selection (Shop only)
    pub buy: Option<ShopItemId>,
}

/// Advance the game by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::MainMenu => {
            if input.confirm {
                log::info!("starting run with seed {}", state.seed);
                state.phase = GamePhase::Playing;
            }
        }

        GamePhase::Dead => {
            // Absorbing; the session is over
        }

        GamePhase::Shop => {
            if let Some(item) = input.buy {
                shop::purchase(state, item);
            }
            if input.exit_shop {
                state.phase = GamePhase::Playing;
            }
        }

        GamePhase::Playing => {
            apply_game_input(state, input);
            if state.phase == GamePhase::Shop {
                // Shop opened this tick; world stays frozen
                return;
            }

            state.time_ticks += 1;

            step_bullets(state);
            spawn::spawn_zombies(state);
            step_zombies(state);
            collision::resolve_zombie_player(state);
            collision::resolve_bullet_zombie(state);

            if state.score > state.hi_score {
                state.hi_score = state.score;
            }
        }
    }
}

/// Apply the player's in-game actions before the world advances
fn apply_game_input(state: &mut GameState, input: &TickInput) {
    if input.move_left {
        state.player.move_left();
    }
    if input.move_right {
        state.player.move_right();
    }
    if input.fire {
        state.fire_bullet();
    }
    if input.place_barricade {
        state.place_barricade();
    }
    if input.open_shop {
        state.phase = GamePhase::Shop;
    }
}

/// Move bullets up a fixed step; cull those past the top edge
fn step_bullets(state: &mut GameState) {
    for bullet in &mut state.bullets {
        bullet.pos.y -= BULLET_SPEED;
    }
    state.bullets.retain(|b| b.pos.y >= 0.0);
}

/// Move zombies down, sweep the bottom edge, then resolve barricades
fn step_zombies(state: &mut GameState) {
    let speed_factor = state.zombie_speed_factor;
    for zombie in &mut state.zombies {
        zombie.pos.y += zombie.speed * speed_factor;
    }

    collision::cull_offscreen_zombies(state);

    let break_factor = state.break_speed_factor;
    for i in 0..state.zombies.len() {
        collision::resolve_zombie_barricade(
            &mut state.zombies[i],
            &mut state.barricades,
            speed_factor,
            break_factor,
        );
    }
}
