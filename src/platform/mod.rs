//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time/ticks (frame `dt`, virtual-time spawn clock)
//! - Input events (queueing, touch/client coordinate mapping)

pub mod input;
pub mod time;

pub use input::{EventQueue, client_to_normalized, client_to_screen, touch_to_screen};
pub use time::{FrameTimer, SpawnClock};
