//! Slice collision between a gesture trail and falling items
//!
//! Hit testing is point-in-rectangle: a trail slices an item when any of
//! its samples lands inside the item's unscaled hit box. Segments between
//! samples are not swept, so a very fast swipe can skip over an item.

use glam::Vec2;

use super::item::FallingItem;
use super::rect::Rect;

/// Tally of one slice pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SliceResult {
    /// Items removed by this pass, in the order they were sliced
    pub sliced: Vec<FallingItem>,
    /// Edible items sliced
    pub points: u32,
    /// Penalty items sliced
    pub lives_lost: u32,
}

impl SliceResult {
    pub fn is_empty(&self) -> bool {
        self.sliced.is_empty()
    }
}

/// Does any trail sample fall inside `rect`?
#[inline]
pub fn trail_hits(trail: &[Vec2], rect: &Rect) -> bool {
    trail.iter().any(|p| rect.contains(*p))
}

/// Slice every item the trail passes through
///
/// Sliced items are flagged and removed in the same pass, so no item can be
/// counted twice. An empty item set or a single-sample trail is a no-op.
pub fn slice_items(items: &mut Vec<FallingItem>, trail: &[Vec2], item_size: f32) -> SliceResult {
    let mut result = SliceResult::default();
    if trail.len() < 2 || items.is_empty() {
        return result;
    }

    items.retain_mut(|item| {
        if item.sliced || !trail_hits(trail, &item.hit_rect(item_size)) {
            return true;
        }
        item.sliced = true;
        if item.kind.is_penalty() {
            result.lives_lost += 1;
        } else {
            result.points += 1;
        }
        result.sliced.push(item.clone());
        false
    });

    result
}
