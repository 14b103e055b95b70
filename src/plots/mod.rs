//! High-level chart types.
//!
//! Provides the builder-style shot chart that consumes shot records and
//! region statistics and draws them onto a framebuffer or SVG.

mod shot_chart;

pub use shot_chart::{ChartMode, ShotChart};
