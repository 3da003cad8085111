//! Per-frame simulation tick
//!
//! Core game loop that advances the simulation by one frame.

use glam::Vec2;

use super::collision::slice_items;
use super::item::FallingItem;
use super::state::{GamePhase, GameState};

/// Discrete input delivered to the simulation, in arrival order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window closed / host asked us to stop
    Quit,
    /// Mouse button or finger went down at a screen position
    PointerDown(Vec2),
    /// Pointer moved (only slices while a drag is active)
    PointerMove(Vec2),
    /// Mouse button or finger lifted
    PointerUp,
    /// Periodic spawn signal from the virtual-time clock
    SpawnTick,
}

/// What happened during a tick
#[derive(Debug, Clone, Default)]
pub struct TickOutcome {
    /// Items sliced this frame
    pub sliced: Vec<FallingItem>,
    /// Items that fell off the bottom this frame
    pub missed: u32,
    /// A `Quit` event was seen
    pub quit_requested: bool,
    /// This frame ended the run
    pub game_over_entered: bool,
}

/// Apply one event to the state
fn apply_event(state: &mut GameState, event: InputEvent, outcome: &mut TickOutcome) {
    let playing = state.is_playing();
    match event {
        InputEvent::Quit => outcome.quit_requested = true,
        InputEvent::PointerDown(pos) if playing => state.gesture.begin(pos),
        InputEvent::PointerMove(pos) if playing => state.gesture.extend(pos),
        InputEvent::PointerUp => state.gesture.end(),
        InputEvent::SpawnTick if playing => {
            state.spawn_item();
        }
        _ => {}
    }
}

/// Advance the game state by one frame
///
/// `dt` is in frame units (1.0 = one 60 Hz frame). Nothing moves during
/// game over; the caller polls the game over controls instead.
pub fn tick(state: &mut GameState, events: &[InputEvent], dt: f32) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    for &event in events {
        apply_event(state, event, &mut outcome);
    }

    if state.phase == GamePhase::GameOver {
        return outcome;
    }

    state.frames += 1;

    // Scroll the background
    state.scroll.advance(dt);

    // Fall, then drop anything that left the screen. Misses are free.
    let score = state.score;
    for item in &mut state.items {
        item.advance(score, dt, &state.tuning);
    }
    let before = state.items.len();
    let tuning = &state.tuning;
    state.items.retain(|item| !item.is_off_screen(tuning));
    outcome.missed = (before - state.items.len()) as u32;

    // Slice
    if state.gesture.can_slice() {
        let result = slice_items(&mut state.items, state.gesture.trail(), state.tuning.item_size);
        if !result.is_empty() {
            state.score += result.points;
            state.lives = state.lives.saturating_sub(result.lives_lost.min(u8::MAX as u32) as u8);
            log::debug!(
                "Sliced {} item(s): +{} score, -{} lives (score {}, lives {})",
                result.sliced.len(),
                result.points,
                result.lives_lost,
                state.score,
                state.lives
            );
        }
        outcome.sliced = result.sliced;
    }

    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        state.gesture.end();
        state.runs += 1;
        outcome.game_over_entered = true;
        log::info!("Game over! Final score: {}", state.score);
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ItemKind;
    use crate::tuning::Tuning;

    fn new_state() -> GameState {
        GameState::new(12345, Tuning::default())
    }

    /// Events for a short horizontal swipe through `at`
    fn swipe(at: Vec2) -> Vec<InputEvent> {
        vec![
            InputEvent::PointerDown(at - Vec2::new(5.0, 0.0)),
            InputEvent::PointerMove(at),
        ]
    }

    #[test]
    fn test_spawn_tick_adds_item() {
        let mut state = new_state();
        tick(&mut state, &[InputEvent::SpawnTick], 1.0);
        assert_eq!(state.items.len(), 1);
        // Spawned at -50 then fell one frame at base speed
        assert_eq!(state.items[0].pos.y, -48.0);
    }

    #[test]
    fn test_missed_item_is_free() {
        let mut state = new_state();
        state.push_item(Vec2::new(400.0, 649.0), ItemKind::PenaltyA);
        let outcome = tick(&mut state, &[], 1.0);
        assert_eq!(outcome.missed, 1);
        assert!(state.items.is_empty());
        assert_eq!(state.lives, 3);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_slice_edible_scores() {
        let mut state = new_state();
        state.push_item(Vec2::new(300.0, 200.0), ItemKind::Primary);
        let outcome = tick(&mut state, &swipe(Vec2::new(300.0, 202.0)), 1.0);
        assert_eq!(outcome.sliced.len(), 1);
        assert_eq!(state.score, 1);
        assert_eq!(state.lives, 3);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_slice_penalty_costs_life() {
        let mut state = new_state();
        state.push_item(Vec2::new(300.0, 200.0), ItemKind::PenaltyA);
        tick(&mut state, &swipe(Vec2::new(300.0, 202.0)), 1.0);
        assert_eq!(state.lives, 2);
        assert_eq!(state.score, 0);
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_pointer_up_ends_slicing() {
        let mut state = new_state();
        let mut events = swipe(Vec2::new(300.0, 202.0));
        events.push(InputEvent::PointerUp);
        state.push_item(Vec2::new(300.0, 200.0), ItemKind::Primary);
        tick(&mut state, &events, 1.0);
        assert_eq!(state.score, 0);
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_third_penalty_ends_game() {
        let mut state = new_state();
        for expected_lives in [2u8, 1, 0] {
            state.push_item(Vec2::new(300.0, 200.0), ItemKind::PenaltyB);
            let outcome = tick(&mut state, &swipe(Vec2::new(300.0, 202.0)), 1.0);
            tick(&mut state, &[InputEvent::PointerUp], 1.0);
            assert_eq!(state.lives, expected_lives);
            if expected_lives > 0 {
                assert_eq!(state.phase, GamePhase::Playing);
                assert!(!outcome.game_over_entered);
            } else {
                assert_eq!(state.phase, GamePhase::GameOver);
                assert!(outcome.game_over_entered);
            }
        }
    }

    #[test]
    fn test_multi_penalty_slice_saturates_lives() {
        let mut state = new_state();
        state.lives = 1;
        state.push_item(Vec2::new(100.0, 300.0), ItemKind::PenaltyA);
        state.push_item(Vec2::new(300.0, 300.0), ItemKind::PenaltyB);
        state.push_item(Vec2::new(500.0, 300.0), ItemKind::Primary);
        let events = [
            InputEvent::PointerDown(Vec2::new(100.0, 302.0)),
            InputEvent::PointerMove(Vec2::new(300.0, 302.0)),
            InputEvent::PointerMove(Vec2::new(500.0, 302.0)),
        ];

        let outcome = tick(&mut state, &events, 1.0);
        assert_eq!(outcome.sliced.len(), 3);
        assert_eq!(state.lives, 0);
        assert_eq!(state.score, 1);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(outcome.game_over_entered);
        assert!(!state.gesture.is_dragging());
    }

    #[test]
    fn test_game_over_freezes_world() {
        let mut state = new_state();
        state.push_item(Vec2::new(100.0, 100.0), ItemKind::Primary);
        state.scroll.advance(10.0);
        state.lives = 0;
        tick(&mut state, &[], 1.0);
        assert_eq!(state.phase, GamePhase::GameOver);

        let items = state.items.clone();
        let scroll = state.scroll;
        let frames = state.frames;
        let outcome = tick(
            &mut state,
            &[InputEvent::SpawnTick, InputEvent::PointerDown(Vec2::new(100.0, 100.0))],
            1.0,
        );
        assert_eq!(state.items, items);
        assert_eq!(state.scroll, scroll);
        assert_eq!(state.frames, frames);
        assert!(!state.gesture.is_dragging());
        assert!(!outcome.game_over_entered);
    }

    #[test]
    fn test_quit_is_reported() {
        let mut state = new_state();
        let outcome = tick(&mut state, &[InputEvent::Quit], 1.0);
        assert!(outcome.quit_requested);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = new_state();
        let mut state2 = new_state();

        let inputs = [
            vec![InputEvent::SpawnTick],
            vec![InputEvent::SpawnTick, InputEvent::PointerDown(Vec2::new(400.0, 0.0))],
            vec![InputEvent::PointerMove(Vec2::new(420.0, 10.0))],
            vec![],
        ];

        for events in &inputs {
            tick(&mut state1, events, 1.0);
            tick(&mut state2, events, 1.0);
        }

        assert_eq!(state1.frames, state2.frames);
        assert_eq!(state1.items, state2.items);
        assert_eq!(state1.score, state2.score);
    }
}
