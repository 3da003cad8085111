//! Food Ninja - A swipe-to-slice falling food arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (falling items, slicing, game state)
//! - `ui`: Pointer-driven controls (game over buttons)
//! - `renderer`: Draw intents built from game state, plus the canvas executor
//! - `platform`: Browser/native timing and input adaptation
//! - `tuning`: Data-driven game balance
//! - `game`: Per-frame glue that ties the above together

pub mod assets;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use game::Game;
pub use settings::{SettingToggle, Settings};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Logical screen size in pixels
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Nominal frame rate; one frame is one `dt` unit
    pub const FRAMES_PER_SECOND: f32 = 60.0;
    /// Frame duration in milliseconds
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Largest `dt` a host may feed into a single step (frame units)
    pub const MAX_FRAME_DT: f32 = 6.0;

    /// Food items are square sprites of this size (unscaled)
    pub const ITEM_SIZE: f32 = 80.0;

    /// Presentation bounds for item scale/alpha interpolation
    pub const ITEM_MIN_SCALE: f32 = 0.5;
    pub const ITEM_MAX_SCALE: f32 = 1.2;
    pub const ITEM_MIN_ALPHA: u8 = 100;
    pub const ITEM_MAX_ALPHA: u8 = 255;

    /// HUD layout
    pub const LIFE_SIZE: f32 = 30.0;
    pub const LIFE_SPACING: f32 = 40.0;
    pub const HUD_MARGIN: f32 = 20.0;
    pub const SCORE_OFFSET_FROM_RIGHT: f32 = 150.0;

    /// Game over buttons
    pub const BUTTON_WIDTH: f32 = 100.0;
    pub const BUTTON_HEIGHT: f32 = 50.0;
    pub const BUTTON_ELEVATION: f32 = 6.0;

    /// Palette (RGB)
    pub const WHITE: [u8; 3] = [255, 255, 255];
    pub const BLACK: [u8; 3] = [0, 0, 0];
    pub const RED: [u8; 3] = [255, 0, 0];
}

/// Linear interpolation between `a` and `b`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
