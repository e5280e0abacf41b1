//! Pixel Field - an interactive dot-matrix canvas background
//!
//! Core modules:
//! - `field`: Pure per-frame field sampling (grid layout, force math, color tiers)
//! - `background`: Platform-independent component state (pointer, viewport, lifecycle)
//! - `renderer`: Drawing surface seam (browser 2D canvas on wasm, doubles in tests)
//! - `settings`: LocalStorage-backed visual preferences

pub mod background;
pub mod error;
pub mod field;
pub mod renderer;
pub mod settings;

pub use background::Background;
pub use error::BackgroundError;
pub use field::{FieldConfig, sample_cell};
pub use settings::{DensityPreset, Settings};

/// Field configuration constants
pub mod consts {
    /// Distance between dots (CSS pixels)
    pub const GRID_SPACING: f32 = 45.0;
    /// Dot radius when the pointer is out of range
    pub const BASE_RADIUS: f32 = 1.0;
    /// Radius of pointer influence
    pub const INFLUENCE_RADIUS: f32 = 200.0;
    /// How far a dot is pushed at full force (pixels)
    pub const MAX_DISPLACEMENT: f32 = 10.0;
    /// Radius gain at full force
    pub const RADIUS_GAIN: f32 = 1.5;

    /// Pointer position before any pointer event arrives.
    ///
    /// Both components are negative, so the closest any grid cell can get is
    /// the origin at 1000*sqrt(2) px - far outside `INFLUENCE_RADIUS` for
    /// every viewport. `FieldConfig::validate` checks this invariant.
    pub const POINTER_SENTINEL: (f32, f32) = (-1000.0, -1000.0);

    /// Resting dot color (very faint grey)
    pub const COLOR_NORMAL: &str = "rgba(0, 0, 0, 0.06)";
    /// Mid-force transition color
    pub const COLOR_SECONDARY: &str = "rgba(100, 100, 100, 0.5)";
    /// Sharp black for dots closest to the pointer
    pub const COLOR_ACTIVE: &str = "rgba(0, 0, 0, 0.9)";
    /// Outer band of the influence disc
    pub const COLOR_LOW: &str = "rgba(0, 0, 0, 0.2)";
}
