//! Frame statistics simulation.
//!
//! This module models a live video pipeline without a real data source.
//! A [`SimulationClock`] fires at a nominal 15 Hz, deriving instantaneous
//! frame rate from measured inter-tick time, counting frames, and sampling
//! a synthetic per-frame processing time. Each tick pushes a [`FrameStats`]
//! snapshot to the consumer over a channel; the clock never shares mutable
//! state with its consumer.

mod clock;
mod sampler;
mod stats;

pub use clock::{SimulationClock, TICK_RATE_HZ};
pub use sampler::{
    ChaChaSampler, FixedSampler, ProcessingTimeSource, PROCESSING_TIME_MAX_MS,
    PROCESSING_TIME_MIN_MS,
};
pub use stats::FrameStats;
