//! Grid layout derived from the viewport
//!
//! Cells sit at (i * spacing, j * spacing), counted from zero while the
//! coordinate stays inside the viewport inclusive, so an edge cell lands
//! exactly at (or the loop stops just past) each boundary. Nothing here is
//! retained between frames; a resize simply produces a different `Grid` for
//! the next frame.

use glam::Vec2;

/// The set of sample points covering a viewport at a fixed spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grid {
    width: f32,
    height: f32,
    spacing: f32,
}

impl Grid {
    /// Grid for a `width` x `height` viewport. Negative dimensions clamp to
    /// zero (a zero-sized viewport still has its single origin cell).
    ///
    /// `spacing` must be positive; `FieldConfig::validate` enforces that
    /// upstream.
    pub fn new(width: f32, height: f32, spacing: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
            spacing,
        }
    }

    /// Number of columns, including the column at/past the right edge.
    pub fn cols(&self) -> usize {
        (self.width / self.spacing).floor() as usize + 1
    }

    /// Number of rows, including the row at/past the bottom edge.
    pub fn rows(&self) -> usize {
        (self.height / self.spacing).floor() as usize + 1
    }

    /// Total cell count for this viewport.
    pub fn cell_count(&self) -> usize {
        self.cols() * self.rows()
    }

    /// Iterates all cell positions in row-major order, each exactly once.
    pub fn cells(&self) -> impl Iterator<Item = Vec2> + use<> {
        let cols = self.cols();
        let rows = self.rows();
        let spacing = self.spacing;
        (0..rows).flat_map(move |j| {
            (0..cols).map(move |i| Vec2::new(i as f32 * spacing, j as f32 * spacing))
        })
    }
}
