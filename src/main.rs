//! Home Defender entry point
//!
//! Runs a headless autopilot session: the demo policy chases the most
//! advanced zombie's lane, fires continuously, places barricades, and spends
//! coins on shop visits. The windowed renderer and real keyboard input are
//! external collaborators consuming the same sim API.

use std::path::Path;

use home_defender::highscores::{self, HI_SCORE_FILE};
use home_defender::sim::{GamePhase, GameState, ShopItemId, TickInput, shop, tick};
use serde::Serialize;

/// Frame budget for a demo run (five minutes at 60 fps)
const MAX_DEMO_TICKS: u64 = 60 * 300;

/// How often the autopilot considers a shop visit
const SHOP_VISIT_INTERVAL: u64 = 600;

#[derive(Serialize)]
struct RunSummary {
    seed: u64,
    ticks: u64,
    score: u64,
    hi_score: u64,
    coins: u64,
    lives: u32,
    multiplier: u64,
}

/// Demo policy for the Playing phase
fn autopilot(state: &GameState) -> TickInput {
    let mut input = TickInput {
        fire: true,
        ..Default::default()
    };

    // Chase the lane of the most advanced zombie
    let target = state.zombies.iter().max_by(|a, b| {
        a.pos
            .y
            .partial_cmp(&b.pos.y)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    if let Some(zombie) = target {
        if zombie.pos.x < state.player.pos.x {
            input.move_left = true;
        } else if zombie.pos.x > state.player.pos.x {
            input.move_right = true;
        } else {
            // Holding the lane; drop a barricade if the guards allow one
            input.place_barricade = state.player.barricades > 0;
        }
    }

    // Periodic shopping once there is something worth buying
    if state.time_ticks > 0
        && state.time_ticks % SHOP_VISIT_INTERVAL == 0
        && state.player.coins >= ShopItemId::Barricade.cost()
    {
        input.open_shop = true;
    }

    input
}

/// Demo policy for the Shop phase: one purchase, then leave
fn shopping_trip(state: &GameState) -> TickInput {
    let wishlist = [
        ShopItemId::DoubleScore,
        ShopItemId::ExtraLife,
        ShopItemId::Barricade,
    ];
    TickInput {
        buy: wishlist
            .into_iter()
            .find(|item| shop::can_purchase(state, *item)),
        exit_shop: true,
        ..Default::default()
    }
}

fn main() {
    env_logger::init();

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let hi_score_path = Path::new(HI_SCORE_FILE);
    let mut state = GameState::new(seed);
    state.hi_score = highscores::load(hi_score_path);

    // Leave the main menu
    tick(
        &mut state,
        &TickInput {
            confirm: true,
            ..Default::default()
        },
    );

    let mut last_phase = state.phase;
    for _ in 0..MAX_DEMO_TICKS {
        let input = match state.phase {
            GamePhase::Playing => autopilot(&state),
            GamePhase::Shop => shopping_trip(&state),
            GamePhase::MainMenu | GamePhase::Dead => TickInput::default(),
        };
        tick(&mut state, &input);

        // Persist the high score once, on the transition into Dead
        if state.phase == GamePhase::Dead && last_phase != GamePhase::Dead {
            if let Err(err) = highscores::save(hi_score_path, state.hi_score) {
                log::error!("failed to save high score: {err}");
            }
            break;
        }
        last_phase = state.phase;
    }

    let summary = RunSummary {
        seed,
        ticks: state.time_ticks,
        score: state.score,
        hi_score: state.hi_score,
        coins: state.player.coins,
        lives: state.player.lives,
        multiplier: state.multiplier,
    };
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("failed to serialize run summary: {err}"),
    }
}
