//! Rendering module
//!
//! `frame` turns game state into draw intents; `canvas` paints them in the
//! browser.

pub mod frame;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use frame::{Color, DrawCommand, Frame, build_frame};
