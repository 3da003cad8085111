//! Per-frame glue between the host, the simulation and the UI
//!
//! A host feeds `Game::step` the events gathered since the last frame and
//! paints the returned `Frame`. Nothing here blocks or yields.

use glam::Vec2;

use crate::consts::*;
use crate::renderer::{Frame, build_frame};
use crate::settings::{SettingToggle, Settings};
use crate::sim::{GamePhase, GameState, InputEvent, Rect, TickOutcome, tick};
use crate::tuning::Tuning;
use crate::ui::Button;

/// Weight of the newest frame in the FPS moving average
const FPS_SMOOTHING: f32 = 0.1;

/// Result of one `Game::step`
#[derive(Debug, Clone)]
pub struct StepOutput {
    pub frame: Frame,
    pub outcome: TickOutcome,
    /// Restart was clicked this frame; hosts should reset their spawn clock
    pub restarted: bool,
}

/// A running game session
#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    pub settings: Settings,
    pub restart_button: Button,
    pub quit_button: Button,
    /// Last known pointer position (tracked even when not dragging)
    pub pointer: Vec2,
    pub pointer_down: bool,
    running: bool,
    /// Smoothed frame rate derived from `dt`
    fps: f32,
}

impl Game {
    pub fn new(seed: u64, tuning: Tuning, settings: Settings) -> Self {
        let cx = tuning.screen_width / 2.0;
        let cy = tuning.screen_height / 2.0;
        let restart_button = Button::new(
            "Restart",
            Rect::new(cx - 110.0, cy, BUTTON_WIDTH, BUTTON_HEIGHT),
            BUTTON_ELEVATION,
        );
        let quit_button = Button::new(
            "Quit",
            Rect::new(cx + 10.0, cy, BUTTON_WIDTH, BUTTON_HEIGHT),
            BUTTON_ELEVATION,
        );

        log::info!("New game with seed {}", seed);

        Self {
            state: GameState::new(seed, tuning),
            settings,
            restart_button,
            quit_button,
            pointer: Vec2::ZERO,
            pointer_down: false,
            running: true,
            fps: FRAMES_PER_SECOND,
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Flip a preference; it shows from the next frame. Returns the
    /// updated settings so the host can persist them.
    pub fn toggle_setting(&mut self, which: SettingToggle) -> &Settings {
        let on = self.settings.toggle(which);
        log::info!("{:?} {}", which, if on { "on" } else { "off" });
        &self.settings
    }

    /// False once Quit was requested; the host should stop after this frame
    pub fn is_running(&self) -> bool {
        self.running
    }

    fn track_pointer(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerDown(p) => {
                self.pointer = p;
                self.pointer_down = true;
            }
            InputEvent::PointerMove(p) => self.pointer = p,
            InputEvent::PointerUp => self.pointer_down = false,
            _ => {}
        }
    }

    /// Poll both buttons; returns (restart, quit)
    fn poll_buttons(&mut self) -> (bool, bool) {
        let restart = self.restart_button.update(self.pointer, self.pointer_down);
        let quit = self.quit_button.update(self.pointer, self.pointer_down);
        (restart, quit)
    }

    /// Run one frame: consume events, advance the simulation by `dt`
    /// frames, drive the game over controls and build the draw list
    pub fn step(&mut self, events: &[InputEvent], dt: f32) -> StepOutput {
        if dt > 0.0 {
            self.fps += (FRAMES_PER_SECOND / dt - self.fps) * FPS_SMOOTHING;
        }

        let was_over = self.state.phase == GamePhase::GameOver;
        let mut restart = false;
        let mut quit = false;

        for event in events {
            self.track_pointer(event);
            // Poll per event so a click that lands inside a single frame
            // still produces both edges
            if was_over {
                let (r, q) = self.poll_buttons();
                restart |= r;
                quit |= q;
            }
        }

        let outcome = tick(&mut self.state, events, dt);
        if outcome.quit_requested {
            log::info!("Quit requested");
            self.running = false;
        }

        if outcome.game_over_entered {
            self.restart_button.reset(self.pointer_down);
            self.quit_button.reset(self.pointer_down);
        } else if was_over {
            // Keep hover state fresh on frames without pointer events
            let (r, q) = self.poll_buttons();
            restart |= r;
            quit |= q;
        }

        if quit {
            log::info!("Quit clicked");
            self.running = false;
        }

        let restarted = restart && self.running;
        if restarted {
            self.state.restart();
            self.restart_button.reset(self.pointer_down);
            self.quit_button.reset(self.pointer_down);
        }

        let buttons = [self.restart_button.clone(), self.quit_button.clone()];
        let frame = build_frame(&self.state, &buttons, &self.settings, self.fps);

        StepOutput {
            frame,
            outcome,
            restarted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ItemKind;

    fn game() -> Game {
        Game::new(5, Tuning::default(), Settings::default())
    }

    fn click(at: Vec2) -> [InputEvent; 2] {
        [InputEvent::PointerDown(at), InputEvent::PointerUp]
    }

    fn end_run(g: &mut Game) {
        g.state.lives = 1;
        g.state.push_item(Vec2::new(600.0, 100.0), ItemKind::PenaltyA);
        g.step(
            &[
                InputEvent::PointerDown(Vec2::new(595.0, 102.0)),
                InputEvent::PointerMove(Vec2::new(600.0, 102.0)),
            ],
            1.0,
        );
        g.step(&[InputEvent::PointerUp], 1.0);
        assert_eq!(g.state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_buttons_inactive_while_playing() {
        let mut g = game();
        let restart_center = g.restart_button.region.center();
        let out = g.step(&click(restart_center), 1.0);
        assert!(!out.restarted);
        assert!(g.is_running());
    }

    #[test]
    fn test_restart_click_after_game_over() {
        let mut g = game();
        g.state.score = 9;
        end_run(&mut g);

        let out = g.step(&click(g.restart_button.region.center()), 1.0);
        assert!(out.restarted);
        assert_eq!(g.state.phase, GamePhase::Playing);
        assert_eq!(g.state.lives, 3);
        assert_eq!(g.state.score, 0);
        assert!(g.state.items.is_empty());
        assert!(g.state.gesture.trail().is_empty());
    }

    #[test]
    fn test_quit_click_stops() {
        let mut g = game();
        end_run(&mut g);
        g.step(&click(g.quit_button.region.center()), 1.0);
        assert!(!g.is_running());
        assert_eq!(g.state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_quit_event_stops() {
        let mut g = game();
        g.step(&[InputEvent::Quit], 1.0);
        assert!(!g.is_running());
    }

    #[test]
    fn test_drag_off_button_cancels_restart() {
        let mut g = game();
        end_run(&mut g);
        let center = g.restart_button.region.center();
        g.step(&[InputEvent::PointerDown(center)], 1.0);
        g.step(&[InputEvent::PointerMove(Vec2::new(10.0, 10.0))], 1.0);
        let out = g.step(&[InputEvent::PointerUp], 1.0);
        assert!(!out.restarted);
        assert_eq!(g.state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_fps_tracks_frame_time() {
        let mut g = game();
        assert_eq!(g.fps(), 60.0);
        for _ in 0..200 {
            g.step(&[], 2.0);
        }
        assert!((g.fps() - 30.0).abs() < 0.5, "fps = {}", g.fps());
    }

    #[test]
    fn test_toggled_fps_shows_next_frame() {
        let mut g = game();
        assert!(!g.step(&[], 1.0).frame.has_text("FPS"));
        assert!(g.toggle_setting(SettingToggle::Fps).show_fps);
        assert!(g.step(&[], 1.0).frame.has_text("FPS: 60"));
    }

    #[test]
    fn test_game_over_frame_shows_buttons() {
        let mut g = game();
        end_run(&mut g);
        let out = g.step(&[], 1.0);
        assert!(out.frame.has_text("Game Over!"));
        assert_eq!(out.frame.item_count(), 0);
    }
}
