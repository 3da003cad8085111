//! Host input buffering
//!
//! Browser callbacks fire between frames. They push into an `EventQueue`,
//! which the frame loop drains in arrival order.

use glam::Vec2;

use crate::sim::InputEvent;

/// Map a normalized touch position (0..1 on each axis) to screen pixels
pub fn touch_to_screen(nx: f32, ny: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(nx * width, ny * height)
}

/// Normalize a client-space position against the canvas box (0..1 inside it)
pub fn client_to_normalized(client: Vec2, canvas_origin: Vec2, canvas_size: Vec2) -> Option<Vec2> {
    if canvas_size.x <= 0.0 || canvas_size.y <= 0.0 {
        return None;
    }
    Some((client - canvas_origin) / canvas_size)
}

/// Map a client-space position to the logical screen when the canvas is
/// displayed at a different size
///
/// Goes through the same normalized space as finger input. A collapsed
/// canvas falls back to the raw offset.
pub fn client_to_screen(client: Vec2, canvas_origin: Vec2, canvas_size: Vec2, screen: Vec2) -> Vec2 {
    match client_to_normalized(client, canvas_origin, canvas_size) {
        Some(n) => touch_to_screen(n.x, n.y, screen.x, screen.y),
        None => client - canvas_origin,
    }
}

/// Events waiting for the next frame
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    events: Vec<InputEvent>,
    /// Whether the last queued pointer event left the pointer down; survives `drain`
    pointer_held: bool,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown(_) => self.pointer_held = true,
            InputEvent::PointerUp => self.pointer_held = false,
            _ => {}
        }
        self.events.push(event);
    }

    pub fn pointer_held(&self) -> bool {
        self.pointer_held
    }

    /// Queue a `PointerUp` if a press is still open
    ///
    /// Release can be reported by several listeners (canvas, window,
    /// touchcancel); only the first one counts.
    pub fn release(&mut self) {
        if self.pointer_held {
            self.push(InputEvent::PointerUp);
        }
    }

    /// Queue a move, closing the press first if the device reports no
    /// buttons held (the release happened where we couldn't see it)
    pub fn push_move(&mut self, pos: Vec2, buttons_held: bool) {
        if !buttons_held {
            self.release();
        }
        self.push(InputEvent::PointerMove(pos));
    }

    /// Queue `count` spawn signals
    pub fn push_spawns(&mut self, count: u32) {
        for _ in 0..count {
            self.events.push(InputEvent::SpawnTick);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Take everything queued so far
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }
}
