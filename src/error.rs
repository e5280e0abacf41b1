//! Error types for the pixel-field background.
//!
//! The background is a cosmetic layer: callers are expected to log these and
//! render nothing rather than fail the page that embeds it.

use thiserror::Error;

/// Errors produced while validating configuration or attaching to the page.
#[derive(Debug, Error)]
pub enum BackgroundError {
    /// A configuration value was zero, negative, or non-finite.
    #[error("invalid config: {name} must be positive and finite, got {value}")]
    InvalidConfig { name: &'static str, value: f32 },

    /// The pointer sentinel could fall within the influence radius of an
    /// on-screen cell, so untouched pages would render a phantom hover.
    #[error(
        "pointer sentinel ({x}, {y}) is not safely outside the influence radius {radius} of the grid"
    )]
    SentinelTooClose { x: f32, y: f32, radius: f32 },

    /// A required browser object (window, document, canvas, 2D context) was
    /// unavailable at attach time.
    #[error("browser object unavailable: {0}")]
    Environment(&'static str),
}
