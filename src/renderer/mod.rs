//! Drawing surface seam
//!
//! `Surface` is the minimal contract the frame loop needs: clear the frame
//! and draw filled circles. The wasm build implements it on the browser's 2D
//! canvas context; tests drive the loop with a recording double instead.

/// A 2D drawing target for one frame of the dot field.
pub trait Surface {
    /// Clear the full drawing area.
    fn clear(&mut self, width: f32, height: f32);

    /// Draw a filled circle at (x, y) with the given CSS color.
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: &str);
}

#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
