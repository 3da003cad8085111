//! Raised push button with click edge detection
//!
//! Input sampling is the host's job. `Button::update` only sees the pointer
//! position and whether the primary button/finger is down, so it can be
//! driven from tests without a real device.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Rect;

/// How the button should be drawn this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ButtonVisual {
    #[default]
    Idle,
    Hover,
    Pressed,
}

impl ButtonVisual {
    /// Top face color (RGB)
    pub fn top_color(self) -> [u8; 3] {
        match self {
            ButtonVisual::Idle => [70, 95, 119],
            ButtonVisual::Hover => [100, 130, 160],
            ButtonVisual::Pressed => [40, 60, 80],
        }
    }

    /// Shadow/base color (RGB)
    pub fn bottom_color(self) -> [u8; 3] {
        [53, 75, 94]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Button {
    pub label: String,
    /// Resting position of the top face
    pub region: Rect,
    /// Height of the raised edge below the top face
    pub elevation: f32,
    pub visual: ButtonVisual,
    /// A press started inside the region and has not been released or cancelled
    armed: bool,
    /// Pointer state from the previous poll, for press-edge detection
    was_down: bool,
}

impl Button {
    pub fn new(label: impl Into<String>, region: Rect, elevation: f32) -> Self {
        Self {
            label: label.into(),
            region,
            elevation,
            visual: ButtonVisual::Idle,
            armed: false,
            was_down: false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Forget any in-flight press (e.g. when the button is shown again)
    ///
    /// `pointer_down` is the current pointer state, so a press that began
    /// before the button appeared is not mistaken for a new one.
    pub fn reset(&mut self, pointer_down: bool) {
        self.armed = false;
        self.was_down = pointer_down;
        self.visual = ButtonVisual::Idle;
    }

    /// Poll with the current pointer; returns true exactly once per
    /// completed press-release cycle inside the region
    ///
    /// - press edge inside the region arms the button
    /// - release inside the region while armed activates it
    /// - leaving the region while armed cancels; coming back while still
    ///   held does not re-arm
    pub fn update(&mut self, pointer: Vec2, down: bool) -> bool {
        let over = self.region.contains(pointer);
        let pressed_now = down && !self.was_down;
        self.was_down = down;

        let mut activated = false;
        if !over {
            self.armed = false;
        } else if down {
            if pressed_now {
                self.armed = true;
            }
        } else if self.armed {
            activated = true;
            self.armed = false;
        }

        self.visual = match (over, self.armed) {
            (true, true) => ButtonVisual::Pressed,
            (true, false) => ButtonVisual::Hover,
            (false, _) => ButtonVisual::Idle,
        };

        activated
    }

    /// Height of the top face above the base: 0 while pressed
    pub fn top_offset(&self) -> f32 {
        if self.visual == ButtonVisual::Pressed {
            0.0
        } else {
            self.elevation
        }
    }

    /// Where to draw the top face this frame
    pub fn top_rect(&self) -> Rect {
        self.region.offset_y(self.elevation - self.top_offset())
    }

    /// Where to draw the raised base this frame
    pub fn base_rect(&self) -> Rect {
        Rect {
            min: self.region.min + Vec2::new(0.0, self.elevation),
            size: self.region.size,
        }
    }
}
