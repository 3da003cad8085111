//! Draw intents for one frame
//!
//! The simulation never touches pixels. Each frame it is turned into an
//! ordered list of `DrawCommand`s which a host executor paints back to front.

use glam::Vec2;

use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{GamePhase, GameState, ItemKind, Rect};
use crate::ui::{Button, ButtonVisual};

/// RGB color
pub type Color = [u8; 3];

/// Font size for HUD text
pub const HUD_FONT_SIZE: f32 = 36.0;
/// Font size for button labels
pub const BUTTON_FONT_SIZE: f32 = 28.0;
/// Font size for the FPS readout
pub const FPS_FONT_SIZE: f32 = 20.0;

/// A single draw intent
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// One background tile, top-left at `(x, 0)`
    Background { x: f32, width: f32, height: f32 },
    /// A food sprite centered at `center`
    Item {
        kind: ItemKind,
        center: Vec2,
        scale: f32,
        alpha: u8,
        /// Black rim for high contrast mode
        outlined: bool,
    },
    /// Swipe trail as a connected polyline
    Trail {
        points: Vec<Vec2>,
        width: f32,
        color: Color,
    },
    /// One remaining life
    LifeIndicator { rect: Rect, color: Color },
    /// Text anchored at its top-left, or at its center when `centered`
    Text {
        text: String,
        pos: Vec2,
        size: f32,
        color: Color,
        centered: bool,
    },
    /// A raised button
    Button {
        label: String,
        top: Rect,
        base: Rect,
        visual: ButtonVisual,
    },
}

/// Everything to draw this frame, back to front
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    pub fn push(&mut self, cmd: DrawCommand) {
        self.commands.push(cmd);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }

    /// Number of item sprites in the frame
    pub fn item_count(&self) -> usize {
        self.iter().filter(|c| matches!(c, DrawCommand::Item { .. })).count()
    }

    /// Number of life indicators in the frame
    pub fn life_count(&self) -> usize {
        self.iter()
            .filter(|c| matches!(c, DrawCommand::LifeIndicator { .. }))
            .count()
    }

    /// Does any text command contain `needle`?
    pub fn has_text(&self, needle: &str) -> bool {
        self.iter()
            .any(|c| matches!(c, DrawCommand::Text { text, .. } if text.contains(needle)))
    }
}

fn background(frame: &mut Frame, state: &GameState) {
    for x in state.scroll.offsets() {
        frame.push(DrawCommand::Background {
            x,
            width: state.scroll.tile_width,
            height: state.tuning.screen_height,
        });
    }
}

fn hud(frame: &mut Frame, state: &GameState, settings: &Settings) {
    for i in 0..state.lives {
        frame.push(DrawCommand::LifeIndicator {
            rect: Rect::new(HUD_MARGIN + i as f32 * LIFE_SPACING, HUD_MARGIN, LIFE_SIZE, LIFE_SIZE),
            color: RED,
        });
    }
    frame.push(DrawCommand::Text {
        text: format!("Score: {}", state.score),
        pos: Vec2::new(state.tuning.screen_width - SCORE_OFFSET_FROM_RIGHT, HUD_MARGIN),
        size: HUD_FONT_SIZE,
        color: settings.hud_color(),
        centered: false,
    });
}

fn fps_readout(frame: &mut Frame, state: &GameState, settings: &Settings, fps: f32) {
    frame.push(DrawCommand::Text {
        text: format!("FPS: {:.0}", fps),
        pos: Vec2::new(HUD_MARGIN, state.tuning.screen_height - HUD_MARGIN - FPS_FONT_SIZE),
        size: FPS_FONT_SIZE,
        color: settings.hud_color(),
        centered: false,
    });
}

fn game_over_overlay(frame: &mut Frame, state: &GameState, buttons: &[Button]) {
    frame.push(DrawCommand::Text {
        text: "Game Over!".to_string(),
        pos: Vec2::new(state.tuning.screen_width / 2.0, state.tuning.screen_height / 2.0 - 60.0),
        size: HUD_FONT_SIZE,
        color: RED,
        centered: true,
    });
    for button in buttons {
        frame.push(DrawCommand::Button {
            label: button.label.clone(),
            top: button.top_rect(),
            base: button.base_rect(),
            visual: button.visual,
        });
    }
}

/// Build the draw list for the current state
///
/// While playing: background, items, trail, lives, score.
/// After game over: the frozen background, the overlay text and `buttons`.
/// The FPS readout goes on top in either phase when enabled.
pub fn build_frame(state: &GameState, buttons: &[Button], settings: &Settings, fps: f32) -> Frame {
    let mut frame = Frame::default();
    background(&mut frame, state);

    match state.phase {
        GamePhase::Playing => {
            let h = state.tuning.screen_height;
            for item in &state.items {
                frame.push(DrawCommand::Item {
                    kind: item.kind,
                    center: item.pos,
                    scale: item.draw_scale(h),
                    alpha: item.draw_alpha(h),
                    outlined: settings.high_contrast,
                });
            }

            let trail = state.gesture.trail();
            if settings.show_trail && trail.len() > 1 {
                frame.push(DrawCommand::Trail {
                    points: trail.to_vec(),
                    width: settings.effective_trail_width(),
                    color: RED,
                });
            }

            hud(&mut frame, state, settings);
        }
        GamePhase::GameOver => game_over_overlay(&mut frame, state, buttons),
    }

    if settings.show_fps {
        fps_readout(&mut frame, state, settings, fps);
    }

    frame
}
