//! Pixel <-> simulation unit mapping
//!
//! The canvas always shows `meters_height` meters vertically; the floor is a
//! fixed band of pixels at the bottom, so its height in meters changes with
//! every resize.

use glam::Vec2;

use crate::consts::{CANVAS_METERS_HEIGHT, FLOOR_HEIGHT_PX};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width_px: f32,
    pub height_px: f32,
    /// Height of the floor band in pixels
    pub floor_height_px: f32,
    /// Meters visible from top to bottom
    pub meters_height: f32,
    pub pixels_per_meter: f32,
    /// Floor surface in simulation units (meters from the top)
    pub floor_y: f32,
}

impl Viewport {
    pub fn new(width_px: f32, height_px: f32) -> Self {
        Self::with_layout(width_px, height_px, FLOOR_HEIGHT_PX, CANVAS_METERS_HEIGHT)
    }

    pub fn with_layout(width_px: f32, height_px: f32, floor_height_px: f32, meters_height: f32) -> Self {
        let mut viewport = Self {
            width_px: 0.0,
            height_px: 0.0,
            floor_height_px,
            meters_height,
            pixels_per_meter: 1.0,
            floor_y: 0.0,
        };
        viewport.resize(width_px, height_px);
        viewport
    }

    /// Recompute scale and floor for a new canvas size
    ///
    /// A collapsed canvas (no height) keeps the previous layout.
    pub fn resize(&mut self, width_px: f32, height_px: f32) {
        if height_px.is_nan() || height_px <= 0.0 {
            log::warn!("Ignoring resize to {width_px}x{height_px}");
            return;
        }
        self.width_px = width_px;
        self.height_px = height_px;
        self.pixels_per_meter = height_px / self.meters_height;
        self.floor_y = (height_px - self.floor_height_px) / self.pixels_per_meter;
        log::info!(
            "Viewport {}x{}: {} px/m, floor at {} m",
            width_px,
            height_px,
            self.pixels_per_meter,
            self.floor_y
        );
    }

    /// Simulation-space point to pixels
    #[inline]
    pub fn to_pixels(&self, meters: Vec2) -> Vec2 {
        meters * self.pixels_per_meter
    }

    /// Top edge of the floor band in pixels
    pub fn floor_top_px(&self) -> f32 {
        self.height_px - self.floor_height_px
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}
