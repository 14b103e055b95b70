//! Rasterization primitives for chart rendering.
//!
//! # Algorithms
//!
//! - **Bresenham's Line**: fast non-antialiased line drawing
//! - **Midpoint Circle**: filled and outlined circle rendering
//! - **Scanline Polygon Fill**: even-odd fill, consistent with the
//!   containment rule used by the region classifier

mod primitives;

pub use primitives::{
    draw_circle, draw_circle_outline, draw_line, draw_marker, draw_polygon_outline, fill_polygon,
};
