//! Browser 2D canvas implementation of [`Surface`].

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::Surface;

/// Wraps a `CanvasRenderingContext2d` as a [`Surface`].
///
/// Coordinates are CSS pixels; the attach path scales the context by the
/// device pixel ratio so the backing store stays sharp on high-DPI displays.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx
            .clear_rect(0.0, 0.0, f64::from(width), f64::from(height));
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str) {
        self.ctx.begin_path();
        // arc only errors for negative radii, which the sampler never produces.
        self.ctx
            .arc(f64::from(x), f64::from(y), f64::from(radius), 0.0, TAU)
            .ok();
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
    }
}
