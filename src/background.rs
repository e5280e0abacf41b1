//! Background component state
//!
//! The platform-independent half of the render loop: pointer position,
//! viewport, configuration, and the active flag. Browser glue (listeners,
//! requestAnimationFrame) lives in the entry point and forwards events here;
//! tests drive the same methods directly against a recording surface.
//!
//! Shared-state model: event handlers write pointer/viewport between frames,
//! the next `frame` call reads them once. Last write before the frame wins,
//! which is fine because every read is an idempotent pure sample.

use glam::Vec2;

use crate::error::BackgroundError;
use crate::field::{FieldConfig, Grid, sample_cell};
use crate::renderer::Surface;

/// State for one mounted pixel-field background.
#[derive(Debug, Clone)]
pub struct Background {
    config: FieldConfig,
    pointer: Vec2,
    width: f32,
    height: f32,
    active: bool,
}

impl Background {
    /// New background for the given viewport. The pointer starts at the
    /// configured sentinel, so no cell is perturbed until a real pointer
    /// event arrives.
    pub fn new(config: FieldConfig, width: f32, height: f32) -> Result<Self, BackgroundError> {
        config.validate()?;
        Ok(Self {
            pointer: config.sentinel,
            config,
            width: width.max(0.0),
            height: height.max(0.0),
            active: true,
        })
    }

    /// Record the latest pointer position (viewport coordinates).
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    /// Record a viewport resize. Takes effect on the next frame; there is no
    /// interpolation across a resize.
    pub fn resized(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    /// Grid covering the current viewport.
    pub fn grid(&self) -> Grid {
        Grid::new(self.width, self.height, self.config.spacing)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Stop the component. Frames after this are no-ops; there is no
    /// reactivation, matching the one-way teardown of the mount lifecycle.
    pub fn detach(&mut self) {
        self.active = false;
    }

    /// Draw one frame: clear the surface, then one filled circle per grid
    /// cell in row-major order. Does nothing after `detach`, even if a stored
    /// handler still fires.
    pub fn frame<S: Surface>(&self, surface: &mut S) {
        if !self.active {
            return;
        }
        surface.clear(self.width, self.height);
        for cell in self.grid().cells() {
            let dot = sample_cell(cell, self.pointer, &self.config);
            surface.fill_circle(dot.pos.x, dot.pos.y, dot.radius, dot.color);
        }
    }
}
