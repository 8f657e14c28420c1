//! Color classification for map label text.
//!
//! This module provides:
//! - Named HSV color buckets with calibrated defaults (Red, Blue)
//! - One-pass RGB to HSV conversion shared by all buckets
//! - Binary masking and color isolation of the source image

pub mod hsv;
pub mod mask;
pub mod spec;

pub use hsv::HsvImage;
pub use mask::{color_mask, isolate};
pub use spec::{default_colors, ColorSpec, HsvRange};
