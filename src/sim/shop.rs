//! Upgrade shop
//!
//! Six fixed catalog entries. Purchases are atomic: the guard is checked,
//! then cost is deducted and the effect applied together; any failed guard
//! is a silent no-op. Capped items track purchase state on `GameState`, and
//! the sold-out label is derived at render time rather than stored.

use serde::{Deserialize, Serialize};

use super::state::GameState;
use crate::consts::MAX_LIVES_PURCHASES;

/// The six shop upgrades, addressed by numeric slot 1-6
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShopItemId {
    /// +1 barricade inventory (repeatable)
    Barricade,
    /// +1 life, at most twice per session
    ExtraLife,
    /// Double the score/coin multiplier (repeatable, compounds)
    DoubleScore,
    /// One-time: zombies 50% faster, in exchange for x2 multiplier
    FasterZombies,
    /// One-time: zombies spawn with 50% more health, x2 multiplier
    TougherZombies,
    /// One-time: zombies break barricades at +1 rate, x2 multiplier
    StrongerBreakers,
}

/// A catalog entry; display-only apart from the cost
#[derive(Debug, Clone, Copy)]
pub struct ShopItem {
    pub id: ShopItemId,
    pub name: &'static str,
    pub cost: u64,
}

/// The fixed shop catalog, in slot order
pub const CATALOG: [ShopItem; 6] = [
    ShopItem {
        id: ShopItemId::Barricade,
        name: "1. Barricade",
        cost: 10,
    },
    ShopItem {
        id: ShopItemId::ExtraLife,
        name: "2. Extra life",
        cost: 100,
    },
    ShopItem {
        id: ShopItemId::DoubleScore,
        name: "3. Score multiplier increase",
        cost: 500,
    },
    ShopItem {
        id: ShopItemId::FasterZombies,
        name: "4. Zombie speed increase (x2 score)",
        cost: 50,
    },
    ShopItem {
        id: ShopItemId::TougherZombies,
        name: "5. Zombie health increase (x2 score)",
        cost: 50,
    },
    ShopItem {
        id: ShopItemId::StrongerBreakers,
        name: "6. Zombie barricade break speed increase (x2 score)",
        cost: 50,
    },
];

impl ShopItemId {
    /// Map a numeric purchase key (1-6) to an item
    pub fn from_slot(slot: u8) -> Option<Self> {
        match slot {
            1 => Some(ShopItemId::Barricade),
            2 => Some(ShopItemId::ExtraLife),
            3 => Some(ShopItemId::DoubleScore),
            4 => Some(ShopItemId::FasterZombies),
            5 => Some(ShopItemId::TougherZombies),
            6 => Some(ShopItemId::StrongerBreakers),
            _ => None,
        }
    }

    fn catalog_entry(&self) -> &'static ShopItem {
        &CATALOG[match self {
            ShopItemId::Barricade => 0,
            ShopItemId::ExtraLife => 1,
            ShopItemId::DoubleScore => 2,
            ShopItemId::FasterZombies => 3,
            ShopItemId::TougherZombies => 4,
            ShopItemId::StrongerBreakers => 5,
        }]
    }

    /// Coin price of this item
    pub fn cost(&self) -> u64 {
        self.catalog_entry().cost
    }
}

/// True when a capped item has hit its purchase limit
pub fn maxed_out(state: &GameState, item: ShopItemId) -> bool {
    match item {
        ShopItemId::Barricade | ShopItemId::DoubleScore => false,
        ShopItemId::ExtraLife => state.purchases.lives_bought >= MAX_LIVES_PURCHASES,
        ShopItemId::FasterZombies => state.purchases.faster_zombies,
        ShopItemId::TougherZombies => state.purchases.tougher_zombies,
        ShopItemId::StrongerBreakers => state.purchases.stronger_breakers,
    }
}

/// Display label for a catalog entry, derived from purchase state
pub fn label(state: &GameState, item: ShopItemId) -> &'static str {
    if maxed_out(state, item) {
        "MAX BOUGHT"
    } else {
        item.catalog_entry().name
    }
}

/// Whether the purchase guard passes (coins, caps, eligibility)
pub fn can_purchase(state: &GameState, item: ShopItemId) -> bool {
    if state.player.coins < item.cost() {
        return false;
    }
    if maxed_out(state, item) {
        return false;
    }
    // An extra life only helps a player who is still alive
    if item == ShopItemId::ExtraLife && state.player.lives == 0 {
        return false;
    }
    true
}

/// Attempt a purchase; deducts cost and applies the effect atomically.
///
/// Returns false and leaves all state untouched when any guard fails.
pub fn purchase(state: &mut GameState, item: ShopItemId) -> bool {
    if !can_purchase(state, item) {
        return false;
    }
    state.player.coins -= item.cost();

    match item {
        ShopItemId::Barricade => {
            state.player.barricades += 1;
        }
        ShopItemId::ExtraLife => {
            state.player.lives += 1;
            state.purchases.lives_bought += 1;
        }
        ShopItemId::DoubleScore => {
            state.multiplier *= 2;
        }
        ShopItemId::FasterZombies => {
            state.zombie_speed_factor += 0.5;
            state.multiplier *= 2;
            state.purchases.faster_zombies = true;
        }
        ShopItemId::TougherZombies => {
            state.zombie_health_factor += 0.5;
            state.multiplier *= 2;
            state.purchases.tougher_zombies = true;
        }
        ShopItemId::StrongerBreakers => {
            state.break_speed_factor += 1.0;
            state.multiplier *= 2;
            state.purchases.stronger_breakers = true;
        }
    }

    log::info!(
        "bought {:?} for {} coins ({} left, multiplier x{})",
        item,
        item.cost(),
        state.player.coins,
        state.multiplier
    );
    true
}
