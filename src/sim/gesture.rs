//! Slice gesture tracking
//!
//! A drag starts on pointer-down, collects positions on pointer-move and
//! ends on pointer-up. The collected trail is the slicing path.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Whether a drag is in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging,
}

/// Pointer samples for the current drag
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GestureTracker {
    pub state: GestureState,
    trail: Vec<Vec2>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new drag at `pos`, discarding any previous trail
    pub fn begin(&mut self, pos: Vec2) {
        self.trail.clear();
        self.trail.push(pos);
        self.state = GestureState::Dragging;
    }

    /// Append a sample; ignored unless dragging
    pub fn extend(&mut self, pos: Vec2) {
        if self.is_dragging() {
            self.trail.push(pos);
        }
    }

    /// Finish the drag and clear the trail
    pub fn end(&mut self) {
        self.trail.clear();
        self.state = GestureState::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        self.state == GestureState::Dragging
    }

    pub fn trail(&self) -> &[Vec2] {
        &self.trail
    }

    /// A trail can only slice once it has a direction (two or more samples)
    pub fn can_slice(&self) -> bool {
        self.is_dragging() && self.trail.len() >= 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_lifecycle() {
        let mut g = GestureTracker::new();
        assert_eq!(g.state, GestureState::Idle);

        g.extend(Vec2::new(1.0, 1.0));
        assert!(g.trail().is_empty());

        g.begin(Vec2::new(10.0, 10.0));
        assert!(g.is_dragging());
        assert!(!g.can_slice());

        g.extend(Vec2::new(20.0, 10.0));
        g.extend(Vec2::new(30.0, 10.0));
        assert_eq!(g.trail().len(), 3);
        assert!(g.can_slice());

        g.end();
        assert_eq!(g.state, GestureState::Idle);
        assert!(g.trail().is_empty());
        assert!(!g.can_slice());
    }

    #[test]
    fn test_begin_discards_old_trail() {
        let mut g = GestureTracker::new();
        g.begin(Vec2::ZERO);
        g.extend(Vec2::ONE);
        g.begin(Vec2::new(5.0, 5.0));
        assert_eq!(g.trail(), &[Vec2::new(5.0, 5.0)]);
    }
}
