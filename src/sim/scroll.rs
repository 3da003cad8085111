//! Horizontally scrolling background offsets
//!
//! Two copies of the background tile sit side by side and slide left.
//! When one scrolls fully off the left edge it jumps behind the other.

use serde::{Deserialize, Serialize};

/// Two leapfrogging tile offsets
///
/// Invariant: one offset lies in `(-tile_width, 0]` and the other sits
/// exactly `tile_width` to its right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollPair {
    pub a: f32,
    pub b: f32,
    pub tile_width: f32,
    /// Pixels per frame
    pub speed: f32,
}

impl ScrollPair {
    pub fn new(tile_width: f32, speed: f32) -> Self {
        Self {
            a: 0.0,
            b: tile_width,
            tile_width,
            speed,
        }
    }

    /// Back to the initial phase
    pub fn reset(&mut self) {
        self.a = 0.0;
        self.b = self.tile_width;
    }

    /// Scroll left by `speed * dt`
    pub fn advance(&mut self, dt: f32) {
        // A step of a whole tile or more would let both offsets wrap at once
        let step = (self.speed * dt).rem_euclid(self.tile_width);
        self.a -= step;
        self.b -= step;

        let w = self.tile_width;
        if self.a <= -w {
            self.a = self.b + w;
        }
        if self.b <= -w {
            self.b = self.a + w;
        }
    }

    /// The offset currently covering the left edge of the screen
    pub fn leading(&self) -> f32 {
        self.a.min(self.b)
    }

    /// Both offsets, leading tile first
    pub fn offsets(&self) -> [f32; 2] {
        if self.a <= self.b {
            [self.a, self.b]
        } else {
            [self.b, self.a]
        }
    }
}

/// Single-offset scroller used by the standalone parallax demo
///
/// The tile is drawn at `x` and `x + tile_width`; `x` snaps back to zero
/// once a full tile has scrolled by.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WrappingScroll {
    pub x: f32,
    pub tile_width: f32,
    pub speed: f32,
}

impl WrappingScroll {
    pub fn new(tile_width: f32, speed: f32) -> Self {
        Self {
            x: 0.0,
            tile_width,
            speed,
        }
    }

    pub fn advance(&mut self) {
        self.x -= self.speed;
        if self.x <= -self.tile_width {
            self.x = 0.0;
        }
    }

    /// Draw positions of the two tile copies
    pub fn offsets(&self) -> [f32; 2] {
        [self.x, self.x + self.tile_width]
    }
}
