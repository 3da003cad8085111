//! Game balance parameters
//!
//! One immutable `Tuning` is handed to the simulation at construction.
//! Defaults reproduce the classic arcade feel: 3 lives, one spawn per second,
//! items that speed up by 0.1 px/frame per point up to 10 px/frame.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a `Tuning` cannot drive a game
#[derive(Debug, Error, PartialEq)]
pub enum TuningError {
    #[error("screen size must be positive, got {width}x{height}")]
    InvalidScreen { width: f32, height: f32 },
    #[error("speed bounds are inverted: base {base} > max {max}")]
    InvertedSpeed { base: f32, max: f32 },
    #[error("speed values must be non-negative")]
    NegativeSpeed,
    #[error("background tile ({tile}px) is narrower than the screen ({screen}px)")]
    TileTooNarrow { tile: f32, screen: f32 },
    #[error("spawn weights must be non-negative and sum to a positive total")]
    InvalidWeights,
    #[error("spawn margin {margin} leaves no horizontal room on a {width}px screen")]
    SpawnMarginTooWide { margin: f32, width: f32 },
    #[error("spawn interval must be positive")]
    InvalidSpawnInterval,
    #[error("starting lives must be at least 1")]
    NoLives,
}

/// Data-driven game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    pub screen_width: f32,
    pub screen_height: f32,

    /// Fall speed in pixels per frame at score 0
    pub base_speed: f32,
    /// Extra fall speed per point scored
    pub speed_increment: f32,
    /// Fall speed cap
    pub max_speed: f32,

    /// Items spawn this far above the top edge
    pub spawn_y: f32,
    /// Items spawn at least this far from either side
    pub spawn_margin_x: f32,
    /// Items are discarded once this far below the bottom edge
    pub despawn_margin: f32,
    /// Relative spawn weights, indexed like `ItemKind::ALL`
    pub kind_weights: [f32; 4],
    /// Virtual-time spawn period
    pub spawn_interval_ms: f64,

    /// Unscaled item sprite (and hit box) size
    pub item_size: f32,

    pub starting_lives: u8,

    /// Background scroll speed in pixels per frame
    pub scroll_speed: f32,
    /// Width of one background tile
    pub tile_width: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            base_speed: 2.0,
            speed_increment: 0.1,
            max_speed: 10.0,
            spawn_y: -50.0,
            spawn_margin_x: 50.0,
            despawn_margin: 50.0,
            kind_weights: [0.4, 0.4, 0.1, 0.1],
            spawn_interval_ms: 1000.0,
            item_size: ITEM_SIZE,
            starting_lives: 3,
            scroll_speed: 1.0,
            tile_width: SCREEN_WIDTH,
        }
    }
}

impl Tuning {
    /// Fall speed for the given score, clamped to `[base_speed, max_speed]`
    pub fn fall_speed(&self, score: u32) -> f32 {
        // Not `clamp`: that panics when base > max on an unvalidated tuning
        (self.base_speed + self.speed_increment * score as f32)
            .max(self.base_speed)
            .min(self.max_speed)
    }

    /// Same tuning with a background tile sized for an image of the given dimensions
    pub fn with_tile_width(mut self, tile_width: f32) -> Self {
        self.tile_width = tile_width;
        self
    }

    /// Check that the parameters describe a playable game
    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.screen_width > 0.0 && self.screen_height > 0.0 && self.item_size > 0.0) {
            return Err(TuningError::InvalidScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }
        if self.base_speed < 0.0 || self.speed_increment < 0.0 || self.scroll_speed < 0.0 {
            return Err(TuningError::NegativeSpeed);
        }
        if self.base_speed > self.max_speed {
            return Err(TuningError::InvertedSpeed {
                base: self.base_speed,
                max: self.max_speed,
            });
        }
        // Two tiles must always cover the viewport
        if self.tile_width < self.screen_width {
            return Err(TuningError::TileTooNarrow {
                tile: self.tile_width,
                screen: self.screen_width,
            });
        }
        let total: f32 = self.kind_weights.iter().sum();
        if self.kind_weights.iter().any(|w| *w < 0.0 || !w.is_finite()) || total <= 0.0 {
            return Err(TuningError::InvalidWeights);
        }
        if self.spawn_margin_x * 2.0 > self.screen_width {
            return Err(TuningError::SpawnMarginTooWide {
                margin: self.spawn_margin_x,
                width: self.screen_width,
            });
        }
        if self.spawn_interval_ms <= 0.0 {
            return Err(TuningError::InvalidSpawnInterval);
        }
        if self.starting_lives == 0 {
            return Err(TuningError::NoLives);
        }
        Ok(())
    }
}
