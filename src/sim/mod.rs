//! Simulation module
//!
//! Bodies, forces and the per-tick driver. Nothing in here knows about the
//! browser or drawing:
//! - Fixed step (`dt = 1` per simulation step)
//! - Bodies integrate independently; no body-body contact
//! - Stable update order (blocks, then the player)

pub mod body;
pub mod force;
pub mod state;
pub mod tick;
pub mod vector;

pub use body::{BodyKind, Rect};
pub use force::Force;
pub use state::SimState;
pub use tick::{player_jump, player_move, run_tick, tick};
pub use vector::Vector2D;
