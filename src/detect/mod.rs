//! Gradient-magnitude edge detection.
//!
//! A single fixed algorithm: per-pixel luminance, forward differences
//! toward the right and lower neighbors, and a hard threshold on the
//! gradient magnitude. Pure transformation with no state, suitable for
//! testing in isolation from any rendering surface.

mod detector;

pub use detector::{detect, luminance, EDGE_THRESHOLD, LUMA_BLUE, LUMA_GREEN, LUMA_RED};
