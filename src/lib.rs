//! Rectfall - falling rectangles on a canvas
//!
//! Core modules:
//! - `sim`: Bodies, forces and the fixed-step driver
//! - `input`: Key/pointer events and the run/frame/menu mode machine
//! - `viewport`: Pixel to simulation-unit scaling
//! - `renderer`: Scene drawing through a `Painter`
//! - `settings`: Stored preferences and debug switches
//! - `logging`: Per-topic filtering in front of the log backend

pub mod input;
pub mod logging;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod viewport;

pub use input::{Mode, ModeError};
pub use settings::Settings;
pub use sim::SimState;
pub use viewport::Viewport;

/// Simulation constants
pub mod consts {
    /// Time advanced by one simulation step (one step per rendered tick)
    pub const SIM_DT: f32 = 1.0;
    /// Nominal host tick rate
    pub const TICK_HZ: u32 = 60;

    /// Movement below this counts as resting; forces at or below it are spent
    pub const EPSILON: f32 = 0.0001;

    /// Downward gravity force (+y is down)
    pub const GRAVITY: f32 = 9.81;
    pub const DEFAULT_MASS: f32 = 150.0;
    /// Per-step velocity decay
    pub const VELOCITY_DAMPING: f32 = 0.99;
    /// Extra per-step decay of horizontal velocity
    pub const HORIZONTAL_DAMPING: f32 = 0.95;
    /// Fraction of vertical speed a block keeps when bouncing off the floor
    pub const FLOOR_RESTITUTION: f32 = 0.7;

    /// Player input forces
    pub const JUMP_FORCE: f32 = 150.0;
    pub const MOVE_FORCE: f32 = 2.0;
    pub const INPUT_FORCE_TIME: f32 = 1.0;

    /// Canvas layout
    pub const CANVAS_METERS_HEIGHT: f32 = 20.0;
    pub const FLOOR_HEIGHT_PX: f32 = 100.0; // pixels
    pub const HUD_PAD: f32 = 4.0;
    pub const HUD_H: f32 = 28.0;
}
