//! Edge Detection Viewer Core
//!
//! The core of a before/after frame viewer: a pure gradient-magnitude
//! edge detector and a simulation clock that models a live video
//! pipeline's statistics without a real data source. The rendering
//! surface is an external collaborator that supplies pixel buffers and
//! receives frames plus statistics snapshots.
//!
//! # Architecture
//!
//! ```text
//! image (sample / decoded buffer)
//!     → detect (edge map)
//!     → viewer (displayed state) ← simulate (stats ticks)
//!                                ← external feed (bypasses both)
//! ```
//!
//! # Design Principles
//!
//! - **Pure detector**: [`detect::detect`] is stateless and never
//!   mutates or aliases its input.
//! - **Plain-data coupling**: the clock pushes owned [`FrameStats`]
//!   snapshots over a channel; nothing shares mutable state with the
//!   collaborator.
//! - **Measured, not assumed**: fps always comes from observed tick
//!   deltas, never from the nominal rate.
//!
//! # Example
//!
//! ```no_run
//! use edge_viewer::{
//!     image::sample_frame,
//!     simulate::{FixedSampler, SimulationClock},
//!     viewer::ViewerState,
//! };
//!
//! let mut state = ViewerState::new(640, 480);
//! state.load_frame(sample_frame(640, 480)).unwrap();
//!
//! let (mut clock, ticks) =
//!     SimulationClock::new("640x480", Box::new(FixedSampler(12.0)));
//! clock.start();
//! for stats in ticks.iter().take(15) {
//!     state.apply_stats(stats);
//! }
//! clock.stop();
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod config;
pub mod detect;
pub mod export;
pub mod image;
pub mod simulate;
pub mod viewer;

// Re-export commonly used types at crate root
pub use config::{DisplayConfig, FileConfig, RunConfig};
pub use detect::{detect, EDGE_THRESHOLD};
pub use image::{sample_frame, ImageError, RasterImage};
pub use simulate::{FrameStats, SimulationClock};
pub use viewer::{ExternalFrame, ViewerState};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
