//! The edge detector.

use crate::image::{ImageError, RasterImage};

/// Rec. 601 luma weight for the red channel.
pub const LUMA_RED: f64 = 0.299;
/// Rec. 601 luma weight for the green channel.
pub const LUMA_GREEN: f64 = 0.587;
/// Rec. 601 luma weight for the blue channel.
pub const LUMA_BLUE: f64 = 0.114;

/// Gradient magnitude above which a pixel is classified as an edge.
pub const EDGE_THRESHOLD: f64 = 30.0;

const EDGE: [u8; 4] = [255, 255, 255, 255];
const NON_EDGE: [u8; 4] = [0, 0, 0, 255];

/// Perceptual luminance of an RGB triple. Alpha is ignored.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> f64 {
    LUMA_RED * r as f64 + LUMA_GREEN * g as f64 + LUMA_BLUE * b as f64
}

#[inline]
fn luminance_at(img: &RasterImage, x: u32, y: u32) -> f64 {
    let [r, g, b, _] = img.pixel(x, y);
    luminance(r, g, b)
}

/// Computes a binary edge map of the source image.
///
/// Each interior pixel is white where the luminance gradient magnitude
/// exceeds [`EDGE_THRESHOLD`], black otherwise. Border pixels (the
/// outermost row and column on each side) are always opaque black; an
/// image too small to have interior pixels yields an all-black map.
///
/// The source is never mutated and the output never aliases it.
///
/// # Errors
///
/// Returns [`ImageError::InvalidBuffer`] when the source buffer length
/// does not match its declared dimensions.
pub fn detect(source: &RasterImage) -> Result<RasterImage, ImageError> {
    source.validate()?;

    let width = source.width();
    let height = source.height();
    let mut edges = RasterImage::filled(width, height, NON_EDGE);

    // Interior requires at least one pixel with both a right and a lower
    // neighbor that are themselves non-border.
    if width < 3 || height < 3 {
        return Ok(edges);
    }

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let here = luminance_at(source, x, y);
            let gx = (here - luminance_at(source, x + 1, y)).abs();
            let gy = (here - luminance_at(source, x, y + 1)).abs();
            let magnitude = (gx * gx + gy * gy).sqrt();

            if magnitude > EDGE_THRESHOLD {
                edges.set_pixel(x, y, EDGE);
            }
        }
    }

    Ok(edges)
}
