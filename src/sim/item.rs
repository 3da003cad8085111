//! Falling food items

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::lerp;
use crate::tuning::Tuning;

/// Food categories
///
/// `Primary` and `Secondary` are edible (burger, pizza). The two penalty
/// kinds (veg, carrot) cost a life when sliced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Primary,
    Secondary,
    PenaltyA,
    PenaltyB,
}

impl ItemKind {
    /// All kinds in spawn-weight order
    pub const ALL: [ItemKind; 4] = [
        ItemKind::Primary,
        ItemKind::Secondary,
        ItemKind::PenaltyA,
        ItemKind::PenaltyB,
    ];

    pub fn index(self) -> usize {
        match self {
            ItemKind::Primary => 0,
            ItemKind::Secondary => 1,
            ItemKind::PenaltyA => 2,
            ItemKind::PenaltyB => 3,
        }
    }

    pub fn is_penalty(self) -> bool {
        matches!(self, ItemKind::PenaltyA | ItemKind::PenaltyB)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Primary => "burger",
            ItemKind::Secondary => "pizza",
            ItemKind::PenaltyA => "veg",
            ItemKind::PenaltyB => "carrot",
        }
    }

    /// Pick a kind from a uniform roll in `[0, 1)` using relative weights
    pub fn from_roll(roll: f32, weights: &[f32; 4]) -> ItemKind {
        let total: f32 = weights.iter().sum();
        let mut threshold = roll * total;
        for kind in Self::ALL {
            let w = weights[kind.index()];
            if threshold < w {
                return kind;
            }
            threshold -= w;
        }
        // Rounding can leave a sliver past the last bucket; give it to the
        // last kind that can actually spawn.
        Self::ALL
            .into_iter()
            .rev()
            .find(|k| weights[k.index()] > 0.0)
            .unwrap_or(ItemKind::Primary)
    }
}

/// A food item falling down the screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallingItem {
    pub id: u32,
    /// Sprite center in screen pixels
    pub pos: Vec2,
    pub kind: ItemKind,
    pub sliced: bool,
}

impl FallingItem {
    pub fn new(id: u32, pos: Vec2, kind: ItemKind) -> Self {
        Self {
            id,
            pos,
            kind,
            sliced: false,
        }
    }

    /// Move down at the score-dependent fall speed
    ///
    /// `dt` is in frames, so every on-screen item speeds up together as the
    /// player scores.
    pub fn advance(&mut self, score: u32, dt: f32, tuning: &Tuning) {
        self.pos.y += tuning.fall_speed(score) * dt;
    }

    /// Hit box at the unscaled sprite size
    pub fn hit_rect(&self, item_size: f32) -> Rect {
        Rect::from_center(self.pos, Vec2::splat(item_size))
    }

    /// Fell past the bottom edge plus the despawn margin
    pub fn is_off_screen(&self, tuning: &Tuning) -> bool {
        self.pos.y > tuning.screen_height + tuning.despawn_margin
    }

    /// Normalized depth used for presentation (0 at top, 1 at bottom)
    fn depth(&self, screen_height: f32) -> f32 {
        (self.pos.y / screen_height).clamp(0.0, 1.0)
    }

    /// Draw scale: items grow as they fall
    pub fn draw_scale(&self, screen_height: f32) -> f32 {
        lerp(ITEM_MIN_SCALE, ITEM_MAX_SCALE, self.depth(screen_height))
    }

    /// Draw opacity: items fade in as they fall
    pub fn draw_alpha(&self, screen_height: f32) -> u8 {
        let a = lerp(ITEM_MIN_ALPHA as f32, ITEM_MAX_ALPHA as f32, self.depth(screen_height));
        a.round().clamp(0.0, 255.0) as u8
    }
}
