//! Artifact renderers.
//!
//! - **latex**: camera-ready `longtable` markup for the realizable and
//!   unrealizable benchmark sets.
//! - **plots**: scatter and quantile comparison charts.

pub mod latex;
pub mod plots;

pub use latex::TableRenderer;
pub use plots::PlotRenderer;
