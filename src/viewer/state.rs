//! The before/after display state.

use super::feed::ExternalFrame;
use crate::detect;
use crate::image::{ImageError, RasterImage};
use crate::simulate::FrameStats;

/// Owns the displayed frame pair and the current statistics.
///
/// The rendering collaborator reads from this; producers write through
/// the explicit operations below. Internal production (detector plus
/// simulation clock) and the external feed are alternatives, never
/// combined for a single frame.
#[derive(Debug, Clone)]
pub struct ViewerState {
    original: RasterImage,
    processed: RasterImage,
    stats: FrameStats,
}

impl ViewerState {
    /// Creates a state with blank frames of the given display size.
    pub fn new(width: u32, height: u32) -> Self {
        let blank = RasterImage::filled(width, height, [0, 0, 0, 255]);
        let stats = FrameStats::new(blank.resolution_label());
        Self {
            original: blank.clone(),
            processed: blank,
            stats,
        }
    }

    /// Loads a source frame and derives its edge map.
    ///
    /// # Errors
    ///
    /// Propagates [`ImageError::InvalidBuffer`] from the detector when
    /// the frame's buffer does not match its dimensions.
    pub fn load_frame(&mut self, original: RasterImage) -> Result<(), ImageError> {
        let processed = detect::detect(&original)?;
        self.stats.resolution = original.resolution_label();
        self.original = original;
        self.processed = processed;
        tracing::info!(resolution = %self.stats.resolution, "frame loaded");
        Ok(())
    }

    /// Merges a statistics snapshot from the simulation clock.
    pub fn apply_stats(&mut self, stats: FrameStats) {
        self.stats = stats;
    }

    /// Merges an externally produced frame, bypassing detector and clock.
    ///
    /// The frame counter still advances: the external frame is one more
    /// displayed frame.
    pub fn ingest_external(&mut self, frame: ExternalFrame) -> Result<(), ImageError> {
        frame.validate()?;
        self.stats.fps = frame.fps;
        self.stats.processing_time_ms = frame.processing_time_ms;
        self.stats.frame_count += 1;
        self.stats.resolution = frame.original.resolution_label();
        self.original = frame.original;
        self.processed = frame.processed;
        tracing::debug!(
            fps = self.stats.fps,
            frame = self.stats.frame_count,
            "external frame ingested"
        );
        Ok(())
    }

    /// Zeroes the rolling statistics.
    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// The displayed source frame.
    pub fn original(&self) -> &RasterImage {
        &self.original
    }

    /// The displayed edge map.
    pub fn processed(&self) -> &RasterImage {
        &self.processed
    }

    /// The current statistics.
    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// Original and processed frames composed side by side, for export.
    pub fn composite(&self) -> RasterImage {
        super::compose::side_by_side(&self.original, &self.processed)
    }
}
