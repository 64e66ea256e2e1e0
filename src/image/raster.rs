//! RGBA raster image type.

use thiserror::Error;

/// Channels per pixel: R, G, B, A.
pub const BYTES_PER_PIXEL: usize = 4;

/// Errors raised by image buffer validation.
#[derive(Debug, Clone, Error)]
pub enum ImageError {
    /// The pixel buffer length does not match the declared dimensions.
    #[error("invalid image: buffer length {actual} does not match {width}x{height}x4 = {expected}")]
    InvalidBuffer {
        /// Declared width.
        width: u32,
        /// Declared height.
        height: u32,
        /// Expected buffer length (width * height * 4).
        expected: usize,
        /// Actual buffer length.
        actual: usize,
    },
    /// Two frames that must share dimensions do not.
    #[error("frame dimensions {actual_width}x{actual_height} do not match expected {width}x{height}")]
    DimensionMismatch {
        /// Expected width.
        width: u32,
        /// Expected height.
        height: u32,
        /// Observed width.
        actual_width: u32,
        /// Observed height.
        actual_height: u32,
    },
}

/// A rectangular RGBA8 image stored as a flat, row-major byte sequence.
///
/// Dimensions travel with the pixel data. The constructor does not
/// validate the buffer; callers that receive buffers from outside the
/// crate check [`RasterImage::validate`] before touching pixels.
#[derive(Clone, PartialEq, Eq)]
pub struct RasterImage {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl RasterImage {
    /// Creates an image from an existing pixel buffer.
    pub fn new(pixels: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Creates an image filled with a single RGBA value.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let count = (width as usize) * (height as usize);
        let mut pixels = Vec::with_capacity(count * BYTES_PER_PIXEL);
        for _ in 0..count {
            pixels.extend_from_slice(&rgba);
        }
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Returns the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns a reference to the raw pixel data.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consumes the image, returning the raw pixel buffer.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Expected buffer length for the declared dimensions.
    #[inline]
    pub fn expected_len(&self) -> usize {
        (self.width as usize) * (self.height as usize) * BYTES_PER_PIXEL
    }

    /// Checks that the buffer length matches the declared dimensions.
    pub fn validate(&self) -> Result<(), ImageError> {
        let expected = self.expected_len();
        if self.pixels.len() != expected {
            return Err(ImageError::InvalidBuffer {
                width: self.width,
                height: self.height,
                expected,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }

    /// Byte offset of the pixel at (x, y).
    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * BYTES_PER_PIXEL
    }

    /// Returns the RGBA value at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the image or the buffer is undersized.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// Writes the RGBA value at (x, y).
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = self.offset(x, y);
        self.pixels[i..i + BYTES_PER_PIXEL].copy_from_slice(&rgba);
    }

    /// Resolution formatted as `"WxH"`, e.g. `"640x480"`.
    pub fn resolution_label(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

impl std::fmt::Debug for RasterImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("pixel_bytes", &self.pixels.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_image_valid() {
        let img = RasterImage::filled(640, 480, [0, 0, 0, 255]);
        assert_eq!(img.width(), 640);
        assert_eq!(img.height(), 480);
        assert!(img.validate().is_ok());
        assert_eq!(img.pixels().len(), 640 * 480 * 4);
    }

    #[test]
    fn test_invalid_buffer_length() {
        let img = RasterImage::new(vec![0u8; 100], 640, 480);
        assert!(matches!(
            img.validate(),
            Err(ImageError::InvalidBuffer { .. })
        ));
    }

    #[test]
    fn test_pixel_roundtrip() {
        let mut img = RasterImage::filled(4, 4, [0, 0, 0, 255]);
        img.set_pixel(2, 1, [10, 20, 30, 255]);
        assert_eq!(img.pixel(2, 1), [10, 20, 30, 255]);
        assert_eq!(img.pixel(1, 2), [0, 0, 0, 255]);
    }

    #[test]
    fn test_resolution_label() {
        let img = RasterImage::filled(640, 480, [0; 4]);
        assert_eq!(img.resolution_label(), "640x480");
    }
}
