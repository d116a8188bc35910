//! Scene layout: floor, bodies and the HUD bar

use glam::Vec2;

use super::painter::{Color, DrawMode, Painter};
use crate::consts::{HUD_H, HUD_PAD};
use crate::sim::{Rect, SimState};

/// Radius of the debug center marker, in pixels
const CENTER_MARK_RADIUS: f32 = 3.0;

/// Fill color reflecting a body's contact state
pub fn body_color(body: &Rect) -> Color {
    if body.resting {
        Color::RESTING
    } else if body.touching_floor {
        Color::TOUCHING
    } else {
        Color::AIRBORNE
    }
}

/// Status line shown in the HUD
pub fn hud_line(state: &SimState) -> String {
    format!(
        "[frame: {}][state: {}] {}",
        state.frame_counter,
        state.mode(),
        state.hud_text.as_deref().unwrap_or("")
    )
}

/// Draw one full frame
pub fn render_frame(state: &SimState, draw_centers: bool, painter: &mut impl Painter) {
    let viewport = &state.viewport;
    painter.clear(Color::BACKGROUND);

    painter.rect(
        Vec2::new(0.0, viewport.floor_top_px()),
        Vec2::new(viewport.width_px, viewport.floor_height_px),
        DrawMode::Fill,
        Color::FLOOR,
    );

    for body in state.bodies() {
        painter.rect(
            viewport.to_pixels(Vec2::new(body.x(), body.y())),
            viewport.to_pixels(Vec2::new(body.w(), body.h())),
            DrawMode::Fill,
            body_color(body),
        );
        if draw_centers {
            painter.circle(
                viewport.to_pixels(body.center.into()),
                CENTER_MARK_RADIUS,
                DrawMode::Fill,
                Color::BLACK,
            );
        }
    }

    painter.rect(
        Vec2::splat(HUD_PAD),
        Vec2::new(viewport.width_px - 2.0 * HUD_PAD, HUD_H),
        DrawMode::Both,
        Color::WHITE,
    );
    painter.text(
        &hud_line(state),
        Vec2::new(viewport.width_px / 2.0, HUD_H - 4.0),
        Color::BLACK,
    );
}
