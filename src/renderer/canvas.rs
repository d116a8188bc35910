//! `Painter` backed by a browser 2D canvas context

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::painter::{Color, DrawMode, Painter};

const LINE_WIDTH: f64 = 4.0;
const FONT: &str = "16pt Consolas";

pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasPainter {
    pub fn new(ctx: CanvasRenderingContext2d, width: u32, height: u32) -> Self {
        Self {
            ctx,
            width: f64::from(width),
            height: f64::from(height),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = f64::from(width);
        self.height = f64::from(height);
    }

    /// Stroke and/or fill the current path
    fn finish_path(&self, mode: DrawMode, color: Color) {
        if mode.strokes() {
            self.ctx.stroke();
        }
        if mode.fills() {
            self.ctx.set_fill_style_str(color.as_str());
            self.ctx.fill();
        }
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, color: Color) {
        self.ctx.set_line_width(LINE_WIDTH);
        self.ctx.set_fill_style_str(color.as_str());
        self.ctx.fill_rect(0.0, 0.0, self.width, self.height);
    }

    fn rect(&mut self, origin: Vec2, size: Vec2, mode: DrawMode, color: Color) {
        self.ctx.begin_path();
        self.ctx.rect(
            f64::from(origin.x),
            f64::from(origin.y),
            f64::from(size.x),
            f64::from(size.y),
        );
        self.finish_path(mode, color);
    }

    fn circle(&mut self, center: Vec2, radius: f32, mode: DrawMode, color: Color) {
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            f64::from(center.x),
            f64::from(center.y),
            f64::from(radius),
            0.0,
            std::f64::consts::TAU,
        ) {
            log::warn!("arc failed: {e:?}");
            return;
        }
        self.ctx.close_path();
        self.finish_path(mode, color);
    }

    fn text(&mut self, text: &str, baseline_center: Vec2, color: Color) {
        self.ctx.set_fill_style_str(color.as_str());
        self.ctx.set_font(FONT);
        self.ctx.set_text_align("center");
        if let Err(e) = self.ctx.fill_text(
            text,
            f64::from(baseline_center.x),
            f64::from(baseline_center.y),
        ) {
            log::warn!("fill_text failed: {e:?}");
        }
    }
}
