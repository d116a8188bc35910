//! Canvas rendering module
//!
//! Scene drawing is written against the `Painter` trait; the browser build
//! backs it with a 2D canvas context.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod painter;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasPainter;
pub use painter::{Color, DrawMode, Painter};
pub use scene::{body_color, hud_line, render_frame};
