//! Constant tables for shader code.
//!
//! Generates golden-angle spiral sample points and normalized Gaussian
//! kernel weights, and renders them as source literals ready to paste into
//! HLSL, GLSL, WGSL or Rust.

pub mod config;
pub mod error;
pub mod format;
pub mod gaussian;
pub mod spiral;

pub use config::{GaussianConfig, SpiralConfig};
pub use error::TableError;
pub use format::{LiteralStyle, float_literal, format_points, format_weights};
pub use gaussian::{gaussian_offsets, gaussian_weights};
pub use spiral::{Point, spiral_angle, spiral_disk_points, spiral_points, turn_fraction};
