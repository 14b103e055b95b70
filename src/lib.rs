//! # Courtchart
//!
//! Basketball shot-chart analytics and rendering.
//!
//! The core is a small, pure pipeline: raw shot records are classified
//! into named half-court regions (point-in-polygon and point-in-circle
//! containment over a fixed region table), aggregated into per-region
//! attempt/make/percentage statistics, and banded into discrete color
//! tiers for heatmap display. A builder-style chart type renders the
//! result to a framebuffer, PNG, or SVG.
//!
//! ## Quick Start
//!
//! ```rust
//! use courtchart::prelude::*;
//!
//! let shots = vec![
//!     ShotRecord::new("s1", 40.0, 75.0, true),
//!     ShotRecord::new("s2", 400.0, 180.0, false),
//! ];
//!
//! // Per-region statistics
//! let regions = region_table(800.0, 600.0);
//! let stats = aggregate(&shots, &regions);
//! assert_eq!(stats.len(), 2);
//!
//! // Zone heatmap chart
//! let chart = ShotChart::new()
//!     .shots(&shots)
//!     .dimensions(800, 600)
//!     .build()?;
//! let fb = chart.to_framebuffer()?;
//! assert_eq!(fb.width(), 800);
//! # Ok::<(), courtchart::Error>(())
//! ```
//!
//! ## Guarantees
//!
//! Classification always succeeds: coordinates that match no region fall
//! back to the top mid-range zone, malformed region bounds match nothing,
//! and an empty shot collection aggregates to an empty result. All core
//! functions are pure and deterministic — identical input produces
//! identical output, with no shared mutable state.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` derives on shot records, region
//!   stats, and summaries

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Core Modules
// ============================================================================

/// Percentage-to-color-tier banding policy.
pub mod banding;

/// Color types for chart rendering.
pub mod color;

/// Court region table and shot classification.
pub mod court;

/// Geometric containment tests (point-in-polygon, point-in-circle).
pub mod geometry;

/// Shot aggregation into per-region statistics.
pub mod stats;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// High-level chart types.
pub mod plots;

/// Rasterization primitives.
pub mod render;

/// Output encoders (PNG, SVG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for courtchart operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use courtchart::prelude::*;
/// ```
pub mod prelude {
    pub use crate::banding::ColorTier;
    pub use crate::color::Rgba;
    pub use crate::court::{
        classify_shot, region_table, CourtRegion, RegionBounds, ShotValue, FALLBACK_REGION,
    };
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{point_in_circle, point_in_polygon, Point};
    pub use crate::output::{PngEncoder, SvgEncoder};
    pub use crate::plots::{ChartMode, ShotChart};
    pub use crate::stats::{aggregate, summarize, RegionStats, ShotRecord, ShotSummary};
}
