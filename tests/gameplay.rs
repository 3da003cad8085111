// End-to-end scenarios driven through the public `Game` API, the same way
// a host feeds it frames.

use food_ninja::consts::FRAME_MS;
use food_ninja::platform::{EventQueue, SpawnClock};
use food_ninja::sim::{Autopilot, GamePhase, InputEvent, ItemKind};
use food_ninja::{Game, Settings, Tuning};
use glam::Vec2;

fn new_game() -> Game {
    Game::new(2024, Tuning::default(), Settings::default())
}

fn swipe_through(g: &mut Game, at: Vec2) {
    g.step(
        &[
            InputEvent::PointerDown(at - Vec2::new(4.0, 0.0)),
            InputEvent::PointerMove(at),
        ],
        1.0,
    );
    g.step(&[InputEvent::PointerUp], 1.0);
}

#[test]
fn item_below_margin_is_removed_for_free() {
    let mut g = new_game();
    // Lands at HEIGHT + 51 after one frame at base speed
    g.state.push_item(Vec2::new(400.0, 649.0), ItemKind::Primary);
    let out = g.step(&[], 1.0);
    assert_eq!(out.outcome.missed, 1);
    assert!(g.state.items.is_empty());
    assert_eq!((g.state.lives, g.state.score), (3, 0));
}

#[test]
fn penalty_slice_costs_one_life() {
    let mut g = new_game();
    g.state.push_item(Vec2::new(200.0, 200.0), ItemKind::PenaltyA);
    swipe_through(&mut g, Vec2::new(200.0, 202.0));
    assert!(g.state.items.is_empty());
    assert_eq!(g.state.lives, 2);
    assert_eq!(g.state.score, 0);
}

#[test]
fn three_penalties_end_the_run_on_the_third() {
    let mut g = new_game();
    for n in 1..=3 {
        g.state.push_item(Vec2::new(200.0, 200.0), ItemKind::PenaltyB);
        let out = g.step(
            &[
                InputEvent::PointerDown(Vec2::new(196.0, 202.0)),
                InputEvent::PointerMove(Vec2::new(200.0, 202.0)),
            ],
            1.0,
        );
        assert_eq!(out.outcome.game_over_entered, n == 3);
        g.step(&[InputEvent::PointerUp], 1.0);
    }
    assert_eq!(g.state.phase, GamePhase::GameOver);
    assert_eq!(g.state.lives, 0);
}

#[test]
fn one_swipe_can_slice_several_items() {
    let mut g = new_game();
    g.state.push_item(Vec2::new(100.0, 300.0), ItemKind::Primary);
    g.state.push_item(Vec2::new(300.0, 300.0), ItemKind::Secondary);
    g.state.push_item(Vec2::new(500.0, 300.0), ItemKind::PenaltyA);
    let out = g.step(
        &[
            InputEvent::PointerDown(Vec2::new(100.0, 302.0)),
            InputEvent::PointerMove(Vec2::new(300.0, 302.0)),
            InputEvent::PointerMove(Vec2::new(500.0, 302.0)),
        ],
        1.0,
    );
    assert_eq!(out.outcome.sliced.len(), 3);
    assert_eq!(g.state.score, 2);
    assert_eq!(g.state.lives, 2);
}

#[test]
fn items_speed_up_with_score() {
    let mut g = new_game();
    g.state.score = 30;
    g.state.push_item(Vec2::new(100.0, 0.0), ItemKind::Primary);
    g.step(&[], 1.0);
    assert!((g.state.items[0].pos.y - 5.0).abs() < 1e-4);
}

#[test]
fn restart_resets_everything() {
    let mut g = new_game();
    g.state.score = 17;
    g.state.lives = 1;
    g.state.push_item(Vec2::new(600.0, 100.0), ItemKind::Primary);
    g.state.push_item(Vec2::new(200.0, 200.0), ItemKind::PenaltyA);
    swipe_through(&mut g, Vec2::new(200.0, 202.0));
    assert_eq!(g.state.phase, GamePhase::GameOver);

    let center = g.restart_button.region.center();
    let out = g.step(&[InputEvent::PointerDown(center), InputEvent::PointerUp], 1.0);
    assert!(out.restarted);
    assert_eq!(g.state.phase, GamePhase::Playing);
    assert_eq!((g.state.lives, g.state.score), (3, 0));
    assert!(g.state.items.is_empty());
    assert!(g.state.gesture.trail().is_empty());
    assert_eq!(g.state.scroll.offsets(), [0.0, g.state.tuning.tile_width]);
}

#[test]
fn spawn_clock_feeds_one_item_per_second() {
    let mut g = new_game();
    let mut clock = SpawnClock::new(g.state.tuning.spawn_interval_ms);
    let mut queue = EventQueue::new();
    let mut spawned = 0;
    for _ in 0..180 {
        queue.push_spawns(clock.advance(FRAME_MS));
        spawned += queue.len();
        g.step(&queue.drain(), 1.0);
    }
    // 180 frames of 16.67ms is 3s give or take float drift
    assert!((2..=3).contains(&spawned), "spawned {spawned}");
    assert_eq!(g.state.items.len(), spawned);
}

#[test]
fn autopilot_session_never_loses_a_life() {
    let mut g = new_game();
    let mut clock = SpawnClock::new(g.state.tuning.spawn_interval_ms);
    let mut queue = EventQueue::new();
    let mut bot = Autopilot::new(4);
    for _ in 0..60 * 60 {
        queue.push_spawns(clock.advance(FRAME_MS));
        for e in bot.events(&g.state, 1.0) {
            queue.push(e);
        }
        g.step(&queue.drain(), 1.0);
    }
    assert_eq!(g.state.lives, 3);
    assert_eq!(g.state.phase, GamePhase::Playing);
    assert!(g.state.score > 0);
}

#[test]
fn drag_released_off_canvas_stops_slicing() {
    let mut g = new_game();
    let mut queue = EventQueue::new();
    queue.push(InputEvent::PointerDown(Vec2::new(10.0, 10.0)));
    queue.push_move(Vec2::new(20.0, 10.0), true);
    g.step(&queue.drain(), 1.0);
    assert!(g.state.gesture.is_dragging());

    // The release happened outside; the next move reports no buttons held
    g.state.push_item(Vec2::new(400.0, 300.0), ItemKind::Primary);
    queue.push_move(Vec2::new(396.0, 302.0), false);
    queue.push_move(Vec2::new(400.0, 302.0), false);
    g.step(&queue.drain(), 1.0);

    assert!(!g.state.gesture.is_dragging());
    assert!(!g.pointer_down);
    assert_eq!(g.state.score, 0);
    assert_eq!(g.state.items.len(), 1);
}

#[test]
fn first_click_after_stale_release_restarts() {
    let mut g = new_game();
    let mut queue = EventQueue::new();
    g.state.lives = 1;
    g.state.push_item(Vec2::new(200.0, 200.0), ItemKind::PenaltyA);
    queue.push(InputEvent::PointerDown(Vec2::new(196.0, 202.0)));
    queue.push_move(Vec2::new(200.0, 202.0), true);
    g.step(&queue.drain(), 1.0);
    assert_eq!(g.state.phase, GamePhase::GameOver);

    // Released off the canvas; the window listener reports it
    queue.release();
    g.step(&queue.drain(), 1.0);
    assert!(!g.pointer_down);

    let center = g.restart_button.region.center();
    queue.push_move(center, false);
    queue.push(InputEvent::PointerDown(center));
    queue.release();
    let out = g.step(&queue.drain(), 1.0);
    assert!(out.restarted);
    assert_eq!(g.state.phase, GamePhase::Playing);
}
