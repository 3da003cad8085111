//! Player presentation preferences
//!
//! Persisted in LocalStorage on the web. These never affect gameplay.

use serde::{Deserialize, Serialize};

/// Presentation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Draw the swipe trail
    pub show_trail: bool,
    /// Swipe trail line width in pixels
    pub trail_width: f32,
    /// Show FPS counter
    pub show_fps: bool,
    /// Black outlines around items, white HUD text
    pub high_contrast: bool,
}

/// A preference that can be flipped from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingToggle {
    Trail,
    Fps,
    HighContrast,
}

impl SettingToggle {
    /// Key bindings: T, F, H
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "t" | "T" => Some(Self::Trail),
            "f" | "F" => Some(Self::Fps),
            "h" | "H" => Some(Self::HighContrast),
            _ => None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_trail: true,
            trail_width: 3.0,
            show_fps: false,
            high_contrast: false,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "food_ninja_settings";

    /// Trail width clamped to something visible
    pub fn effective_trail_width(&self) -> f32 {
        self.trail_width.clamp(1.0, 12.0)
    }

    /// HUD text color for the current contrast mode
    pub fn hud_color(&self) -> [u8; 3] {
        if self.high_contrast {
            crate::consts::WHITE
        } else {
            crate::consts::BLACK
        }
    }

    /// Flip one preference; returns its new value
    pub fn toggle(&mut self, which: SettingToggle) -> bool {
        let flag = match which {
            SettingToggle::Trail => &mut self.show_trail,
            SettingToggle::Fps => &mut self.show_fps,
            SettingToggle::HighContrast => &mut self.high_contrast,
        };
        *flag = !*flag;
        *flag
    }

    /// Parse settings JSON, falling back to defaults for missing fields
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring corrupt settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let s = Settings::from_json(r#"{"show_fps": true}"#).unwrap();
        assert!(s.show_fps);
        assert!(s.show_trail);
        assert_eq!(s.trail_width, 3.0);
    }

    #[test]
    fn test_roundtrip_json() {
        let s = Settings {
            high_contrast: true,
            trail_width: 5.0,
            ..Default::default()
        };
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), s);
    }

    #[test]
    fn test_key_toggles() {
        let mut s = Settings::default();
        assert_eq!(SettingToggle::from_key("F"), Some(SettingToggle::Fps));
        assert_eq!(SettingToggle::from_key("x"), None);

        assert!(s.toggle(SettingToggle::Fps));
        assert!(s.show_fps);
        assert!(!s.toggle(SettingToggle::Trail));
        assert!(!s.show_trail);
        assert!(s.toggle(SettingToggle::HighContrast));
        assert_eq!(s.hud_color(), crate::consts::WHITE);

        let saved = serde_json::to_string(&s).unwrap();
        assert_eq!(Settings::from_json(&saved).unwrap(), s);
    }

    #[test]
    fn test_trail_width_clamped() {
        let s = Settings {
            trail_width: 0.0,
            ..Default::default()
        };
        assert_eq!(s.effective_trail_width(), 1.0);
    }
}
