//! Pure field sampling
//!
//! Everything here is platform-free and recomputed from scratch every frame:
//! - No retained per-cell state
//! - Output is a pure function of (cell position, pointer position, config)
//! - Cells never interact, so iteration order cannot change the output

pub mod grid;
pub mod sampler;

pub use grid::Grid;
pub use sampler::{Dot, FieldConfig, force, sample_cell};
