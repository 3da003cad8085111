//! Idle/demo mode - a bot that plays the game
//!
//! Each frame it lifts any previous drag, then swipes through the lowest
//! edible item whose swipe path stays clear of penalty items. It only
//! produces input events, so it exercises exactly the same code path as a
//! human player.

use glam::Vec2;

use super::item::FallingItem;
use super::rect::Rect;
use super::state::GameState;
use super::tick::InputEvent;

/// Short horizontal swipe length in pixels
const SWIPE_LENGTH: f32 = 10.0;

/// Demo player
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Frames to wait between swipes
    pub reaction_frames: u32,
    cooldown: u32,
    dragging: bool,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(12)
    }
}

impl Autopilot {
    pub fn new(reaction_frames: u32) -> Self {
        Self {
            reaction_frames,
            cooldown: 0,
            dragging: false,
        }
    }

    /// Where `item` will be when the next tick runs its slice pass
    fn predicted(item: &FallingItem, state: &GameState, dt: f32) -> Vec2 {
        item.pos + Vec2::new(0.0, state.fall_speed() * dt)
    }

    /// Pick the edible item to slice next, if any is safely reachable
    pub fn choose_target(&self, state: &GameState, dt: f32) -> Option<Vec2> {
        let size = state.tuning.item_size;
        let penalties: Vec<_> = state
            .items
            .iter()
            .filter(|i| i.kind.is_penalty())
            .map(|i| Rect::from_center(Self::predicted(i, state, dt), Vec2::splat(size)))
            .collect();

        state
            .items
            .iter()
            .filter(|i| !i.kind.is_penalty() && !i.sliced)
            .map(|i| Self::predicted(i, state, dt))
            .filter(|p| p.y >= 0.0 && p.y <= state.tuning.screen_height)
            .filter(|p| {
                let start = *p - Vec2::new(SWIPE_LENGTH, 0.0);
                !penalties.iter().any(|r| r.contains(start) || r.contains(*p))
            })
            .max_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
    }

    /// Input for the coming frame
    pub fn events(&mut self, state: &GameState, dt: f32) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if self.dragging {
            events.push(InputEvent::PointerUp);
            self.dragging = false;
        }

        if !state.is_playing() {
            return events;
        }

        if self.cooldown > 0 {
            self.cooldown -= 1;
            return events;
        }

        if let Some(target) = self.choose_target(state, dt) {
            events.push(InputEvent::PointerDown(target - Vec2::new(SWIPE_LENGTH, 0.0)));
            events.push(InputEvent::PointerMove(target));
            self.dragging = true;
            self.cooldown = self.reaction_frames;
        }
        events
    }
}
