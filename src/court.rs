//! Half-court region table and shot classification.
//!
//! The court surface is partitioned into a fixed set of named regions, each
//! bounded by a polygon or a circle and tagged with its scoring value. The
//! table is pure configuration: [`region_table`] builds the same regions
//! for the same dimensions every time, with every vertex a proportional
//! function of the court width and height. The basket sits near the top
//! baseline, centered at `width / 2`.
//!
//! Classification walks the table in definition order and returns the first
//! region containing the point, so the table doubles as the tie-break rule
//! for any overlap: the restricted-area circle precedes the paint, and the
//! corner threes precede the wings.

use crate::geometry::{point_in_circle, point_in_polygon, Point};

/// Scoring value of a region.
///
/// Authoritative for statistics — a shot record's own label is
/// informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotValue {
    /// Two-point zone.
    TwoPoint,
    /// Three-point zone.
    ThreePoint,
}

/// Geometric extent of a region.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionBounds {
    /// Simple polygon, ordered vertices.
    Polygon(Vec<Point>),
    /// Circle (the restricted area is the only circular region in the
    /// standard table).
    Circle {
        /// Circle center.
        center: Point,
        /// Circle radius.
        radius: f32,
    },
}

/// One named zone of the half court.
#[derive(Debug, Clone, PartialEq)]
pub struct CourtRegion {
    /// Short unique identifier, e.g. `"C3L"`.
    pub code: String,
    /// Human-readable label, e.g. `"Corner 3 Left"`.
    pub name: String,
    /// Authoritative scoring value for shots landing here.
    pub value: ShotValue,
    /// Geometric extent.
    pub bounds: RegionBounds,
}

impl CourtRegion {
    /// Test whether this region contains the given point.
    ///
    /// Degenerate polygon bounds (fewer than 3 vertices) contain nothing.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        match &self.bounds {
            RegionBounds::Polygon(vertices) => point_in_polygon(point, vertices),
            RegionBounds::Circle { center, radius } => point_in_circle(point, *center, *radius),
        }
    }
}

/// Code of the region a shot falls back to when no bounds contain it.
///
/// Out-of-range coordinates and gaps in a malformed table land in the top
/// mid-range zone rather than producing an error.
pub const FALLBACK_REGION: &str = "MRT";

fn rect(x0: f32, y0: f32, x1: f32, y1: f32) -> RegionBounds {
    RegionBounds::Polygon(vec![
        Point::new(x0, y0),
        Point::new(x1, y0),
        Point::new(x1, y1),
        Point::new(x0, y1),
    ])
}

fn region(code: &str, name: &str, value: ShotValue, bounds: RegionBounds) -> CourtRegion {
    CourtRegion {
        code: code.to_string(),
        name: name.to_string(),
        value,
        bounds,
    }
}

/// Build the standard 11-region table for a court of the given pixel
/// dimensions.
///
/// Pure configuration: reproducible for identical dimensions, no side
/// effects. Definition order is the classification tie-break (see
/// [`classify_shot`]).
#[must_use]
pub fn region_table(width: f32, height: f32) -> Vec<CourtRegion> {
    let (w, h) = (width, height);
    let basket = Point::new(w * 0.5, h * 0.1);

    vec![
        region(
            "RA",
            "Restricted Area",
            ShotValue::TwoPoint,
            RegionBounds::Circle {
                center: basket,
                radius: w * 0.075,
            },
        ),
        region(
            "C3L",
            "Corner 3 Left",
            ShotValue::ThreePoint,
            rect(0.0, 0.0, w * 0.10, h * 0.25),
        ),
        region(
            "C3R",
            "Corner 3 Right",
            ShotValue::ThreePoint,
            rect(w * 0.90, 0.0, w, h * 0.25),
        ),
        // The wings flare toward the arc, so they are quads, not rects.
        region(
            "W3L",
            "Wing 3 Left",
            ShotValue::ThreePoint,
            RegionBounds::Polygon(vec![
                Point::new(0.0, h * 0.25),
                Point::new(w * 0.10, h * 0.25),
                Point::new(w * 0.30, h * 0.55),
                Point::new(0.0, h * 0.55),
            ]),
        ),
        region(
            "W3R",
            "Wing 3 Right",
            ShotValue::ThreePoint,
            RegionBounds::Polygon(vec![
                Point::new(w * 0.90, h * 0.25),
                Point::new(w, h * 0.25),
                Point::new(w, h * 0.55),
                Point::new(w * 0.70, h * 0.55),
            ]),
        ),
        region(
            "PAINT",
            "Paint Center",
            ShotValue::TwoPoint,
            rect(w * 0.375, 0.0, w * 0.625, h * 0.35),
        ),
        region(
            "MRL",
            "Mid-Range Left",
            ShotValue::TwoPoint,
            rect(w * 0.10, 0.0, w * 0.375, h * 0.40),
        ),
        region(
            "MRR",
            "Mid-Range Right",
            ShotValue::TwoPoint,
            rect(w * 0.625, 0.0, w * 0.90, h * 0.40),
        ),
        region(
            "MRT",
            "Top Mid-Range",
            ShotValue::TwoPoint,
            rect(w * 0.10, h * 0.35, w * 0.90, h * 0.55),
        ),
        region(
            "ATB3",
            "Above the Break 3",
            ShotValue::ThreePoint,
            rect(0.0, h * 0.55, w, h * 0.75),
        ),
        region(
            "D3",
            "Deep 3",
            ShotValue::ThreePoint,
            rect(0.0, h * 0.75, w, h),
        ),
    ]
}

/// Classify a shot coordinate to a region code.
///
/// Walks `regions` in order and returns the code of the first region whose
/// bounds contain the point. Overlaps resolve to the earlier entry; a point
/// matching nothing returns [`FALLBACK_REGION`]. Classification always
/// succeeds.
#[must_use]
pub fn classify_shot<'a>(x: f32, y: f32, regions: &'a [CourtRegion]) -> &'a str {
    let point = Point::new(x, y);
    regions
        .iter()
        .find(|r| r.contains(point))
        .map_or(FALLBACK_REGION, |r| r.code.as_str())
}
