//! Game state and core simulation types
//!
//! Everything the per-frame transition touches lives here and is owned by
//! a single `GameState`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::gesture::GestureTracker;
use super::item::{FallingItem, ItemKind};
use super::scroll::ScrollPair;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; waiting for Restart or Quit
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn RNG; seeded once from `seed`, the stream carries across restarts
    rng: Pcg32,
    pub tuning: Tuning,
    /// Player lives
    pub lives: u8,
    /// Score
    pub score: u32,
    /// Simulation frame counter (frozen during game over)
    pub frames: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Items on screen (spawn order)
    pub items: Vec<FallingItem>,
    /// Active slice gesture
    pub gesture: GestureTracker,
    /// Background tile offsets
    pub scroll: ScrollPair,
    /// Number of completed runs since construction
    pub runs: u32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            lives: tuning.starting_lives,
            score: 0,
            frames: 0,
            phase: GamePhase::Playing,
            items: Vec::new(),
            gesture: GestureTracker::new(),
            scroll: ScrollPair::new(tuning.tile_width, tuning.scroll_speed),
            runs: 0,
            next_id: 1,
            tuning,
        }
    }

    /// Start a fresh run: full lives, zero score, empty screen
    ///
    /// The RNG keeps its stream so consecutive runs see different spawns.
    pub fn restart(&mut self) {
        self.lives = self.tuning.starting_lives;
        self.score = 0;
        self.frames = 0;
        self.phase = GamePhase::Playing;
        self.items.clear();
        self.gesture.end();
        self.scroll.reset();
        log::info!("Restarted (run {})", self.runs + 1);
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Current fall speed for every item on screen
    pub fn fall_speed(&self) -> f32 {
        self.tuning.fall_speed(self.score)
    }

    /// Spawn one item above the screen with a weighted random kind
    pub fn spawn_item(&mut self) -> &FallingItem {
        let kind = ItemKind::from_roll(self.rng.random::<f32>(), &self.tuning.kind_weights);
        let lo = self.tuning.spawn_margin_x;
        let hi = self.tuning.screen_width - self.tuning.spawn_margin_x;
        // Whole-pixel columns, inclusive on both ends
        let x = self.rng.random_range(lo.round() as i32..=hi.round() as i32) as f32;
        let pos = Vec2::new(x, self.tuning.spawn_y);
        self.push_item(pos, kind)
    }

    /// Place a specific item (used by spawning and by tests/demos)
    pub fn push_item(&mut self, pos: Vec2, kind: ItemKind) -> &FallingItem {
        let id = self.next_entity_id();
        log::debug!("Spawned {} #{} at x={:.0}", kind.as_str(), id, pos.x);
        self.items.push(FallingItem::new(id, pos, kind));
        &self.items[self.items.len() - 1]
    }
}
