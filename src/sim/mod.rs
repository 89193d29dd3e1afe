//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per rendered frame, strictly sequential
//! - Seeded RNG only
//! - Removal-safe entity sweeps (every survivor visited exactly once)
//! - No rendering, input, or file I/O dependencies

pub mod collision;
pub mod shop;
pub mod spawn;
pub mod state;
pub mod tick;

pub use shop::{CATALOG, ShopItem, ShopItemId, can_purchase, label, purchase};
pub use spawn::{kind_for_roll, spawn_cap, spawn_zombies};
pub use state::{Barricade, Bullet, GamePhase, GameState, Player, Purchases, Zombie, ZombieKind};
pub use tick::{TickInput, tick};
