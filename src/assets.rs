//! Image assets the renderer needs
//!
//! The manifest only names files; decoding happens in the host. Any failure
//! here is fatal at startup.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::ItemKind;

#[derive(Debug, Error, PartialEq)]
pub enum AssetError {
    #[error("no image configured for {0}")]
    MissingImage(&'static str),
    #[error("background image has degenerate size {width}x{height}")]
    DegenerateBackground { width: u32, height: u32 },
    #[error("failed to load {path}: {reason}")]
    LoadFailed { path: String, reason: String },
}

/// Image paths, relative to the page/executable
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Sprites indexed like `ItemKind::ALL`
    pub items: [String; 4],
    pub background: String,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            items: [
                "images/g1.jpg".to_string(),
                "images/g2.jpg".to_string(),
                "images/g3.jpg".to_string(),
                "images/g4.jpg".to_string(),
            ],
            background: "images/background.jpg".to_string(),
        }
    }
}

impl AssetManifest {
    pub fn item_path(&self, kind: ItemKind) -> &str {
        &self.items[kind.index()]
    }

    /// Every image has a path
    pub fn validate(&self) -> Result<(), AssetError> {
        for kind in ItemKind::ALL {
            if self.item_path(kind).trim().is_empty() {
                return Err(AssetError::MissingImage(kind.as_str()));
            }
        }
        if self.background.trim().is_empty() {
            return Err(AssetError::MissingImage("background"));
        }
        Ok(())
    }

    /// All paths, items first
    pub fn all_paths(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str).chain(std::iter::once(self.background.as_str()))
    }
}

/// Width of the background tile once scaled to fill the screen height
pub fn scaled_tile_width(image_width: u32, image_height: u32, screen_height: f32) -> Result<f32, AssetError> {
    if image_width == 0 || image_height == 0 {
        return Err(AssetError::DegenerateBackground {
            width: image_width,
            height: image_height,
        });
    }
    let scale = screen_height / image_height as f32;
    Ok((image_width as f32 * scale).floor())
}
