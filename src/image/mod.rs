//! Raster image handling.
//!
//! This module provides the RGBA pixel buffer type shared by the edge
//! detector and the viewer, plus a synthetic sample frame generator used
//! when no decoded image source is available.

mod raster;
mod sample;

pub use raster::{ImageError, RasterImage, BYTES_PER_PIXEL};
pub use sample::sample_frame;
