//! External frame feed.
//!
//! Entry point for a fully externally-produced frame: an already
//! processed pair with its own timing figures, merged straight into the
//! displayed state without running the detector or the clock.

use crate::image::{ImageError, RasterImage};

/// A frame pair produced outside the viewer, with its timing figures.
#[derive(Debug, Clone)]
pub struct ExternalFrame {
    /// The source image.
    pub original: RasterImage,
    /// The already-processed counterpart.
    pub processed: RasterImage,
    /// Frame rate reported by the external producer.
    pub fps: f64,
    /// Processing time reported by the external producer, in ms.
    pub processing_time_ms: f64,
}

impl ExternalFrame {
    /// Checks both buffers and that the pair shares dimensions.
    pub fn validate(&self) -> Result<(), ImageError> {
        self.original.validate()?;
        self.processed.validate()?;
        if self.original.width() != self.processed.width()
            || self.original.height() != self.processed.height()
        {
            return Err(ImageError::DimensionMismatch {
                width: self.original.width(),
                height: self.original.height(),
                actual_width: self.processed.width(),
                actual_height: self.processed.height(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_pair_valid() {
        let frame = ExternalFrame {
            original: RasterImage::filled(4, 4, [10, 10, 10, 255]),
            processed: RasterImage::filled(4, 4, [0, 0, 0, 255]),
            fps: 30.0,
            processing_time_ms: 8.0,
        };
        assert!(frame.validate().is_ok());
    }

    #[test]
    fn test_dimension_mismatch_rejected() {
        let frame = ExternalFrame {
            original: RasterImage::filled(4, 4, [0; 4]),
            processed: RasterImage::filled(8, 4, [0; 4]),
            fps: 30.0,
            processing_time_ms: 8.0,
        };
        assert!(matches!(
            frame.validate(),
            Err(ImageError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_bad_buffer_rejected() {
        let frame = ExternalFrame {
            original: RasterImage::new(vec![0u8; 3], 4, 4),
            processed: RasterImage::filled(4, 4, [0; 4]),
            fps: 30.0,
            processing_time_ms: 8.0,
        };
        assert!(matches!(
            frame.validate(),
            Err(ImageError::InvalidBuffer { .. })
        ));
    }
}
