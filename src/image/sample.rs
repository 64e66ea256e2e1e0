//! Synthetic sample frame generation.
//!
//! Draws a few filled shapes on a light background so the viewer has
//! something to run the detector on when no decoded image is supplied.
//! Shape positions scale with the frame dimensions.

use super::RasterImage;

const BACKGROUND: [u8; 4] = [240, 240, 240, 255];
const RECT_COLOR: [u8; 4] = [255, 107, 107, 255];
const CIRCLE_COLOR: [u8; 4] = [78, 205, 196, 255];
const TRIANGLE_COLOR: [u8; 4] = [69, 183, 209, 255];

/// Generates a sample frame with a rectangle, a circle and a triangle.
///
/// Deterministic for a given width and height; degenerate dimensions
/// (including 0) produce a well-formed frame with no visible shapes.
pub fn sample_frame(width: u32, height: u32) -> RasterImage {
    let mut img = RasterImage::filled(width, height, BACKGROUND);
    let w = width as f64;
    let h = height as f64;

    // Rectangle in the upper-left quadrant.
    fill_rect(
        &mut img,
        (w * 0.15) as u32,
        (h * 0.20) as u32,
        (w * 0.30) as u32,
        (h * 0.30) as u32,
        RECT_COLOR,
    );

    // Circle right of center.
    fill_circle(&mut img, w * 0.62, h * 0.42, w.min(h) * 0.17, CIRCLE_COLOR);

    // Triangle along the bottom.
    fill_triangle(
        &mut img,
        (w * 0.47, h * 0.72),
        (w * 0.31, h * 0.93),
        (w * 0.62, h * 0.93),
        TRIANGLE_COLOR,
    );

    img
}

fn fill_rect(img: &mut RasterImage, x0: u32, y0: u32, rw: u32, rh: u32, rgba: [u8; 4]) {
    let x1 = (x0 + rw).min(img.width());
    let y1 = (y0 + rh).min(img.height());
    for y in y0..y1 {
        for x in x0..x1 {
            img.set_pixel(x, y, rgba);
        }
    }
}

fn fill_circle(img: &mut RasterImage, cx: f64, cy: f64, radius: f64, rgba: [u8; 4]) {
    let r2 = radius * radius;
    for y in 0..img.height() {
        for x in 0..img.width() {
            let dx = x as f64 - cx;
            let dy = y as f64 - cy;
            if dx * dx + dy * dy <= r2 {
                img.set_pixel(x, y, rgba);
            }
        }
    }
}

fn fill_triangle(
    img: &mut RasterImage,
    a: (f64, f64),
    b: (f64, f64),
    c: (f64, f64),
    rgba: [u8; 4],
) {
    // Signed-area half-plane test; accepts either winding.
    let sign = |p: (f64, f64), q: (f64, f64), r: (f64, f64)| -> f64 {
        (p.0 - r.0) * (q.1 - r.1) - (q.0 - r.0) * (p.1 - r.1)
    };
    for y in 0..img.height() {
        for x in 0..img.width() {
            let p = (x as f64, y as f64);
            let d1 = sign(p, a, b);
            let d2 = sign(p, b, c);
            let d3 = sign(p, c, a);
            let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
            let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
            if !(has_neg && has_pos) {
                img.set_pixel(x, y, rgba);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_frame_dimensions() {
        let img = sample_frame(640, 480);
        assert_eq!(img.width(), 640);
        assert_eq!(img.height(), 480);
        assert!(img.validate().is_ok());
    }

    #[test]
    fn test_sample_frame_has_shapes() {
        let img = sample_frame(64, 48);
        let non_background = img
            .pixels()
            .chunks_exact(4)
            .filter(|p| *p != BACKGROUND)
            .count();
        assert!(non_background > 0);
    }

    #[test]
    fn test_sample_frame_deterministic() {
        let a = sample_frame(32, 32);
        let b = sample_frame(32, 32);
        assert_eq!(a.pixels(), b.pixels());
    }

    #[test]
    fn test_degenerate_dimensions() {
        let img = sample_frame(0, 0);
        assert!(img.validate().is_ok());
        assert!(img.pixels().is_empty());

        let img = sample_frame(1, 1);
        assert!(img.validate().is_ok());
    }
}
