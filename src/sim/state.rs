//! Game state and core simulation types
//!
//! All state that must be threaded through the tick pipeline lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::lane_center_x;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for confirm input
    MainMenu,
    /// Active gameplay
    Playing,
    /// Run ended; absorbing (no restart path)
    Dead,
    /// Shop overlay; world state frozen, purchases allowed
    Shop,
}

/// Zombie variants and their stat table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZombieKind {
    /// The common case: middling speed and health, chews through barricades
    Normal,
    /// Fast and fragile; climbs over barricades without damaging them
    Speedy,
    /// Slow, tough, and demolishes barricades quickly
    Tanky,
}

impl ZombieKind {
    /// Base descent speed in units per tick (before the speed factor)
    pub fn base_speed(&self) -> f32 {
        match self {
            ZombieKind::Normal => 2.0,
            ZombieKind::Speedy => 4.0,
            ZombieKind::Tanky => 1.0,
        }
    }

    /// Base health in bullet hits (before the health factor)
    pub fn base_health(&self) -> f32 {
        match self {
            ZombieKind::Normal => 5.0,
            ZombieKind::Speedy => 2.0,
            ZombieKind::Tanky => 15.0,
        }
    }

    /// Barricade damage per blocked tick; 0 means the variant climbs over
    pub fn break_speed(&self) -> f32 {
        match self {
            ZombieKind::Normal => 1.0,
            ZombieKind::Speedy => 0.0,
            ZombieKind::Tanky => 10.0,
        }
    }

    /// Coins awarded on kill (before the multiplier)
    pub fn coins_given(&self) -> u64 {
        match self {
            ZombieKind::Normal => 1,
            ZombieKind::Speedy => 5,
            ZombieKind::Tanky => 10,
        }
    }

    /// Score awarded on kill (before the multiplier)
    pub fn score_given(&self) -> u64 {
        match self {
            ZombieKind::Normal => 10,
            ZombieKind::Speedy => 20,
            ZombieKind::Tanky => 50,
        }
    }

    /// Sprite identifier for the rendering collaborator
    pub fn sprite(&self) -> &'static str {
        match self {
            ZombieKind::Normal => "sprites/normal.png",
            ZombieKind::Speedy => "sprites/speedy.png",
            ZombieKind::Tanky => "sprites/tanky.png",
        }
    }
}

/// A bullet entity; x is fixed to the firing lane, y decreases each tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub pos: Vec2,
}

impl Bullet {
    /// Sprite identifier for the rendering collaborator
    pub fn sprite(&self) -> &'static str {
        "sprites/bullet.png"
    }
}

/// A zombie entity; x is fixed to the spawn lane, y increases each tick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Zombie {
    pub id: u32,
    pub kind: ZombieKind,
    pub pos: Vec2,
    /// Base speed in units per tick (multiplied by the session speed factor)
    pub speed: f32,
    /// Remaining health; fractional once the health factor is above 1
    pub health: f32,
    /// Barricade damage per blocked tick (0 = climbs over)
    pub break_speed: f32,
    pub coins_given: u64,
    pub score_given: u64,
}

/// A placed barricade; one per lane, destroyed by zombie break damage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Barricade {
    pub id: u32,
    pub pos: Vec2,
    pub health: f32,
}

/// The player: lane position, lives, coins, and barricade inventory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Position; x is always a lane center, y is fixed
    pub pos: Vec2,
    pub lives: u32,
    pub coins: u64,
    /// Barricades available to place
    pub barricades: u32,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(lane_center_x(NUM_LANES / 2), PLAYER_Y),
            lives: START_LIVES,
            coins: 0,
            barricades: START_BARRICADES,
        }
    }

    /// Sprite identifier for the rendering collaborator
    pub fn sprite(&self) -> &'static str {
        "sprites/pistol.png"
    }

    /// Move one lane left, clamped at the leftmost lane
    pub fn move_left(&mut self) {
        if self.pos.x > LANE_WIDTH {
            self.pos.x -= LANE_WIDTH;
        }
    }

    /// Move one lane right, clamped at the rightmost lane
    pub fn move_right(&mut self) {
        if self.pos.x < WINDOW_WIDTH - LANE_WIDTH {
            self.pos.x += LANE_WIDTH;
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// One-time purchase tracking for capped shop items.
///
/// Display labels ("MAX BOUGHT") derive from these at render time; the
/// catalog itself is immutable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Purchases {
    /// Extra lives bought so far (capped at MAX_LIVES_PURCHASES)
    pub lives_bought: u32,
    pub faster_zombies: bool,
    pub tougher_zombies: bool,
    pub stronger_breakers: bool,
}

fn fresh_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn RNG; rebuilt from `seed` on deserialization
    #[serde(skip, default = "fresh_rng")]
    pub(crate) rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Score for this run
    pub score: u64,
    /// Best score ever seen; never decreases, caught up once per tick
    pub hi_score: u64,
    /// Score/coin multiplier; always a power of two, only ever doubled
    pub multiplier: u64,
    /// One-time shop purchase state
    pub purchases: Purchases,
    /// Global zombie speed multiplier (starts 1.0)
    pub zombie_speed_factor: f32,
    /// Global zombie health multiplier applied at spawn (starts 1.0)
    pub zombie_health_factor: f32,
    /// Global barricade damage multiplier (starts 1.0)
    pub break_speed_factor: f32,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub zombies: Vec<Zombie>,
    pub barricades: Vec<Barricade>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new session with the given seed, starting at the main menu
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::MainMenu,
            score: 0,
            hi_score: 0,
            multiplier: 1,
            purchases: Purchases::default(),
            zombie_speed_factor: 1.0,
            zombie_health_factor: 1.0,
            break_speed_factor: 1.0,
            player: Player::new(),
            bullets: Vec::new(),
            zombies: Vec::new(),
            barricades: Vec::new(),
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Fire a bullet from the player's current position
    pub fn fire_bullet(&mut self) {
        let id = self.next_entity_id();
        self.bullets.push(Bullet {
            id,
            pos: self.player.pos,
        });
    }

    /// Place a barricade in the player's lane, consuming one inventory unit.
    ///
    /// Rejected (returns false, state unchanged) when inventory is empty,
    /// MAX_BARRICADES already stand, or the lane already has one.
    pub fn place_barricade(&mut self) -> bool {
        if self.player.barricades == 0 {
            return false;
        }
        if self.barricades.len() >= MAX_BARRICADES {
            return false;
        }
        if self.barricades.iter().any(|b| b.pos.x == self.player.pos.x) {
            return false;
        }
        let id = self.next_entity_id();
        self.barricades.push(Barricade {
            id,
            pos: Vec2::new(self.player.pos.x, BARRICADE_Y),
            health: BARRICADE_HEALTH,
        });
        self.player.barricades -= 1;
        true
    }

    /// Decrement lives; at zero the run ends
    pub(crate) fn lose_life(&mut self) {
        self.player.lives = self.player.lives.saturating_sub(1);
        if self.player.lives == 0 {
            log::info!("out of lives at score {}, run over", self.score);
            self.phase = GamePhase::Dead;
        }
    }
}
