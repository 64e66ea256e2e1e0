//! Frame composition for export.

use crate::image::RasterImage;

/// Composes two frames side by side on an opaque black background.
///
/// The result is as wide as both inputs together and as tall as the
/// taller one; the right frame starts where the left one ends.
pub fn side_by_side(left: &RasterImage, right: &RasterImage) -> RasterImage {
    let width = left.width() + right.width();
    let height = left.height().max(right.height());
    let mut out = RasterImage::filled(width, height, [0, 0, 0, 255]);

    blit(&mut out, left, 0);
    blit(&mut out, right, left.width());

    out
}

fn blit(dst: &mut RasterImage, src: &RasterImage, x_offset: u32) {
    for y in 0..src.height() {
        for x in 0..src.width() {
            dst.set_pixel(x + x_offset, y, src.pixel(x, y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_by_side_dimensions() {
        let left = RasterImage::filled(640, 480, [10, 0, 0, 255]);
        let right = RasterImage::filled(640, 480, [0, 20, 0, 255]);
        let out = side_by_side(&left, &right);

        assert_eq!(out.width(), 1280);
        assert_eq!(out.height(), 480);
        assert!(out.validate().is_ok());
    }

    #[test]
    fn test_side_by_side_placement() {
        let left = RasterImage::filled(2, 2, [100, 0, 0, 255]);
        let right = RasterImage::filled(2, 2, [0, 200, 0, 255]);
        let out = side_by_side(&left, &right);

        assert_eq!(out.pixel(0, 0), [100, 0, 0, 255]);
        assert_eq!(out.pixel(1, 1), [100, 0, 0, 255]);
        assert_eq!(out.pixel(2, 0), [0, 200, 0, 255]);
        assert_eq!(out.pixel(3, 1), [0, 200, 0, 255]);
    }

    #[test]
    fn test_uneven_heights_padded_black() {
        let left = RasterImage::filled(2, 3, [7, 7, 7, 255]);
        let right = RasterImage::filled(2, 1, [9, 9, 9, 255]);
        let out = side_by_side(&left, &right);

        assert_eq!(out.height(), 3);
        // Below the shorter frame stays background.
        assert_eq!(out.pixel(3, 2), [0, 0, 0, 255]);
    }
}
