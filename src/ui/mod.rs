//! Pointer-driven UI controls

pub mod button;

pub use button::{Button, ButtonVisual};
