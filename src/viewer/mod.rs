//! Displayed viewer state.
//!
//! Holds the before/after frame pair and the current statistics, fed by
//! exactly one producer at a time: the internal detector + simulation
//! clock, or a fully external frame feed that bypasses both.

mod compose;
mod feed;
mod state;

pub use compose::side_by_side;
pub use feed::ExternalFrame;
pub use state::ViewerState;
