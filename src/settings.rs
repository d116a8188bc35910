//! Settings and debug switches
//!
//! Read from JSON in LocalStorage on the web; defaults everywhere else.

use serde::Deserialize;

use crate::consts::{CANVAS_METERS_HEIGHT, FLOOR_HEIGHT_PX, TICK_HZ};
use crate::input::{Mode, ModeError};
use crate::viewport::Viewport;

/// Host and debugging preferences
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Mode to start in ("menu", "frame" or "run")
    pub start_mode: String,
    /// Host ticks per second
    pub tick_hz: u32,

    // === Layout ===
    /// Floor band height in pixels
    pub floor_height_px: f32,
    /// Meters visible from top to bottom of the canvas
    pub canvas_meters_height: f32,

    // === Debugging ===
    /// Log force application and consumption
    pub log_forces: bool,
    /// Log every body's kinematic state each step
    pub log_state: bool,
    /// Log keyboard events
    pub log_keyboard: bool,
    /// Mark body centers on the canvas
    pub draw_centers: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            start_mode: Mode::Run.as_str().to_string(),
            tick_hz: TICK_HZ,

            floor_height_px: FLOOR_HEIGHT_PX,
            canvas_meters_height: CANVAS_METERS_HEIGHT,

            log_forces: false,
            log_state: false,
            log_keyboard: true,
            draw_centers: false,
        }
    }
}

impl Settings {
    /// Parse the configured start mode
    pub fn start_mode(&self) -> Result<Mode, ModeError> {
        self.start_mode.parse()
    }

    /// Most verbose log level any enabled switch needs
    pub fn log_level(&self) -> log::Level {
        if self.log_state {
            log::Level::Trace
        } else if self.log_forces || self.log_keyboard {
            log::Level::Debug
        } else {
            log::Level::Info
        }
    }

    /// Host tick interval in milliseconds
    pub fn tick_interval_ms(&self) -> i32 {
        (1000 / self.tick_hz.max(1)) as i32
    }

    /// Viewport for a canvas of the given size using these layout settings
    pub fn viewport(&self, width_px: f32, height_px: f32) -> Viewport {
        Viewport::with_layout(width_px, height_px, self.floor_height_px, self.canvas_meters_height)
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "rectfall_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {e}"),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
