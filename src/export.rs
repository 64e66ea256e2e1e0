//! PNG frame export.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::image::{ImageError, RasterImage};

/// Errors that can occur while exporting a frame.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The frame buffer does not match its dimensions.
    #[error(transparent)]
    Image(#[from] ImageError),
    /// Creating or writing the output file failed.
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
    /// PNG encoding failed.
    #[error("failed to encode png: {0}")]
    Encode(#[from] png::EncodingError),
}

/// Writes a frame to the given path as an RGBA8 PNG.
pub fn write_png(path: impl AsRef<Path>, frame: &RasterImage) -> Result<(), ExportError> {
    frame.validate()?;

    let file = File::create(path.as_ref())?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, frame.width(), frame.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(frame.pixels())?;
    png_writer.finish()?;

    tracing::info!(path = %path.as_ref().display(), "frame exported");
    Ok(())
}

/// Default export filename, timestamped like `edge-detection-20260830T142501.png`.
pub fn default_export_path() -> PathBuf {
    let stamp = chrono::Local::now().format("%Y%m%dT%H%M%S");
    PathBuf::from(format!("edge-detection-{}.png", stamp))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_png_produces_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let frame = RasterImage::filled(16, 8, [120, 30, 200, 255]);

        write_png(&path, &frame).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        // PNG signature.
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_write_png_rejects_bad_buffer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let frame = RasterImage::new(vec![0u8; 5], 16, 8);

        assert!(matches!(
            write_png(&path, &frame),
            Err(ExportError::Image(_))
        ));
    }

    #[test]
    fn test_default_export_path_shape() {
        let path = default_export_path();
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("edge-detection-"));
        assert!(name.ends_with(".png"));
    }
}
