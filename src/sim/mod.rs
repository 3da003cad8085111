//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Frame-unit timestep supplied by the host
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod gesture;
pub mod item;
pub mod rect;
pub mod scroll;
pub mod state;
pub mod tick;

pub use autopilot::Autopilot;
pub use collision::{SliceResult, slice_items, trail_hits};
pub use gesture::{GestureState, GestureTracker};
pub use item::{FallingItem, ItemKind};
pub use rect::Rect;
pub use scroll::{ScrollPair, WrappingScroll};
pub use state::{GamePhase, GameState};
pub use tick::{InputEvent, TickOutcome, tick};
