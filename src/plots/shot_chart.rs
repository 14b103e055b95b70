//! Shot chart rendering.
//!
//! Draws a half-court shot chart in two modes: zone overlays colored by
//! make percentage, or one marker per shot. The chart consumes the
//! aggregation engine's output; it never re-derives statistics of its own.

use crate::banding::ColorTier;
use crate::color::Rgba;
use crate::court::{region_table, CourtRegion, RegionBounds};
use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use crate::output::{SvgEncoder, TextAnchor};
use crate::render::{
    draw_circle, draw_circle_outline, draw_line, draw_marker, draw_polygon_outline, fill_polygon,
};
use crate::stats::{aggregate, RegionStats, ShotRecord};

/// Alpha applied to zone fills so the court outline stays visible.
const ZONE_FILL_ALPHA: u8 = 150;

/// View mode for a shot chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartMode {
    /// Colored region overlays, tiered by make percentage.
    #[default]
    Zones,
    /// One marker per shot, made vs missed.
    Markers,
}

/// Builder for creating shot charts.
#[derive(Debug, Clone)]
pub struct ShotChart {
    /// Shot records to chart.
    shots: Vec<ShotRecord>,
    /// View mode.
    mode: ChartMode,
    /// Output width in pixels (also the court coordinate width).
    width: u32,
    /// Output height in pixels (also the court coordinate height).
    height: u32,
    /// Marker diameter in pixels (marker mode).
    marker_size: f32,
    /// Made-shot marker color.
    made_color: Rgba,
    /// Missed-shot marker color.
    missed_color: Rgba,
    /// Court outline color.
    outline_color: Rgba,
}

impl Default for ShotChart {
    fn default() -> Self {
        Self::new()
    }
}

impl ShotChart {
    /// Create a new shot chart builder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            shots: Vec::new(),
            mode: ChartMode::default(),
            width: 800,
            height: 600,
            marker_size: 9.0,
            made_color: Rgba::rgb(34, 197, 94),
            missed_color: Rgba::rgb(239, 68, 68),
            outline_color: Rgba::rgb(60, 60, 60),
        }
    }

    /// Set the shot records.
    #[must_use]
    pub fn shots(mut self, shots: &[ShotRecord]) -> Self {
        self.shots = shots.to_vec();
        self
    }

    /// Set the view mode.
    #[must_use]
    pub fn mode(mut self, mode: ChartMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the output dimensions. These double as the canonical court
    /// coordinate space the shot records are expressed in.
    #[must_use]
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the marker diameter in pixels.
    #[must_use]
    pub fn marker_size(mut self, size: f32) -> Self {
        self.marker_size = size;
        self
    }

    /// Build and validate the shot chart.
    ///
    /// An empty shot collection is valid — it renders a bare court.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero.
    pub fn build(self) -> Result<Self> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    /// Number of shots on the chart.
    #[must_use]
    pub fn shot_count(&self) -> usize {
        self.shots.len()
    }

    /// Render the chart to a framebuffer.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render(&self, fb: &mut Framebuffer) -> Result<()> {
        let regions = region_table(self.width as f32, self.height as f32);

        match self.mode {
            ChartMode::Zones => {
                let stats = aggregate(&self.shots, &regions);
                self.render_zones(fb, &regions, &stats);
            }
            ChartMode::Markers => {
                self.render_court_outline(fb);
                self.render_markers(fb);
            }
        }

        Ok(())
    }

    /// Render to a new framebuffer.
    ///
    /// # Errors
    ///
    /// Returns an error if framebuffer creation or rendering fails.
    pub fn to_framebuffer(&self) -> Result<Framebuffer> {
        let mut fb = Framebuffer::new(self.width, self.height)?;
        fb.clear(Rgba::WHITE);
        self.render(&mut fb)?;
        Ok(fb)
    }

    /// Render to an SVG document with zone percentage labels.
    ///
    /// Zone fills and boundaries are emitted as vector elements; each zone
    /// with at least one shot gets a centered `makes/attempts` and
    /// percentage label.
    ///
    /// # Errors
    ///
    /// Returns an error if the chart is invalid.
    pub fn to_svg(&self) -> Result<String> {
        let regions = region_table(self.width as f32, self.height as f32);
        let stats = aggregate(&self.shots, &regions);
        let mut svg = SvgEncoder::new(self.width, self.height);

        for s in &stats {
            let Some(region) = regions.iter().find(|r| r.code == s.code) else {
                continue;
            };
            let fill = ColorTier::for_percentage(s.percentage)
                .fill()
                .with_alpha(ZONE_FILL_ALPHA);

            match &region.bounds {
                RegionBounds::Polygon(vertices) => {
                    let points: Vec<(f32, f32)> =
                        vertices.iter().map(|v| (v.x, v.y)).collect();
                    svg = svg.polygon(&points, fill, Some(self.outline_color), 1.0);
                }
                RegionBounds::Circle { center, radius } => {
                    svg = svg.circle(
                        center.x,
                        center.y,
                        *radius,
                        fill,
                        Some(self.outline_color),
                        1.0,
                    );
                }
            }
        }

        for (x1, y1, x2, y2) in self.outline_segments() {
            svg = svg.line(x1, y1, x2, y2, self.outline_color, 2.0);
        }
        let (w, h) = (self.width as f32, self.height as f32);
        svg = svg.circle(
            w * 0.5,
            h * 0.1,
            w * 0.075,
            Rgba::TRANSPARENT,
            Some(self.outline_color),
            2.0,
        );

        for s in &stats {
            let Some(region) = regions.iter().find(|r| r.code == s.code) else {
                continue;
            };
            let (lx, ly) = label_anchor(region);
            svg = svg
                .text(
                    lx,
                    ly,
                    &format!("{}/{}", s.makes, s.attempts),
                    13.0,
                    Rgba::BLACK,
                    TextAnchor::Middle,
                )
                .text(
                    lx,
                    ly + 15.0,
                    &format!("{:.1}%", s.percentage),
                    13.0,
                    Rgba::BLACK,
                    TextAnchor::Middle,
                );
        }

        Ok(svg.render())
    }

    fn render_zones(&self, fb: &mut Framebuffer, regions: &[CourtRegion], stats: &[RegionStats]) {
        for s in stats {
            let Some(region) = regions.iter().find(|r| r.code == s.code) else {
                continue;
            };
            let fill = ColorTier::for_percentage(s.percentage)
                .fill()
                .with_alpha(ZONE_FILL_ALPHA);

            match &region.bounds {
                RegionBounds::Polygon(vertices) => fill_polygon(fb, vertices, fill),
                RegionBounds::Circle { center, radius } => {
                    draw_circle(fb, center.x as i32, center.y as i32, *radius as i32, fill);
                }
            }
        }

        // Zone boundaries over the fills, then the court furniture.
        for region in regions {
            match &region.bounds {
                RegionBounds::Polygon(vertices) => {
                    draw_polygon_outline(fb, vertices, self.outline_color);
                }
                RegionBounds::Circle { center, radius } => {
                    draw_circle_outline(
                        fb,
                        center.x as i32,
                        center.y as i32,
                        *radius as i32,
                        self.outline_color,
                    );
                }
            }
        }
        self.render_court_outline(fb);
    }

    fn render_markers(&self, fb: &mut Framebuffer) {
        for shot in &self.shots {
            if shot.made {
                draw_marker(fb, shot.x, shot.y, self.marker_size, self.made_color);
            } else {
                // Misses render as rings: colored disc with a white core.
                draw_marker(fb, shot.x, shot.y, self.marker_size, self.missed_color);
                draw_marker(fb, shot.x, shot.y, (self.marker_size - 4.0).max(2.0), Rgba::WHITE);
            }
        }
    }

    fn render_court_outline(&self, fb: &mut Framebuffer) {
        for (x1, y1, x2, y2) in self.outline_segments() {
            draw_line(fb, x1 as i32, y1 as i32, x2 as i32, y2 as i32, self.outline_color);
        }

        // Restricted area under the basket.
        let w = self.width as f32;
        let h = self.height as f32;
        draw_circle_outline(
            fb,
            (w * 0.5) as i32,
            (h * 0.1) as i32,
            (w * 0.075) as i32,
            self.outline_color,
        );
    }

    /// Court outline segments: border, paint, and the three-point boundary
    /// polyline matching the region-table geometry.
    fn outline_segments(&self) -> Vec<(f32, f32, f32, f32)> {
        let w = self.width as f32;
        let h = self.height as f32;
        let mut segments = vec![
            // Baseline and sidelines
            (0.0, 0.0, w - 1.0, 0.0),
            (0.0, 0.0, 0.0, h - 1.0),
            (w - 1.0, 0.0, w - 1.0, h - 1.0),
            (0.0, h - 1.0, w - 1.0, h - 1.0),
            // Paint rectangle
            (w * 0.375, 0.0, w * 0.375, h * 0.35),
            (w * 0.625, 0.0, w * 0.625, h * 0.35),
            (w * 0.375, h * 0.35, w * 0.625, h * 0.35),
        ];

        // Three-point boundary: corners up, wings flaring to the break.
        let arc = [
            (w * 0.10, 0.0),
            (w * 0.10, h * 0.25),
            (w * 0.30, h * 0.55),
            (w * 0.70, h * 0.55),
            (w * 0.90, h * 0.25),
            (w * 0.90, 0.0),
        ];
        for pair in arc.windows(2) {
            segments.push((pair[0].0, pair[0].1, pair[1].0, pair[1].1));
        }

        segments
    }
}

/// Anchor point for a zone label: polygon vertex centroid or circle center.
fn label_anchor(region: &CourtRegion) -> (f32, f32) {
    match &region.bounds {
        RegionBounds::Polygon(vertices) => {
            if vertices.is_empty() {
                return (0.0, 0.0);
            }
            let n = vertices.len() as f32;
            let (sx, sy) = vertices
                .iter()
                .fold((0.0, 0.0), |(sx, sy), v| (sx + v.x, sy + v.y));
            (sx / n, sy / n)
        }
        RegionBounds::Circle { center, .. } => (center.x, center.y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_shots() -> Vec<ShotRecord> {
        vec![
            ShotRecord::new("a", 40.0, 75.0, true),   // corner 3 left
            ShotRecord::new("b", 40.0, 80.0, true),   // corner 3 left
            ShotRecord::new("c", 45.0, 85.0, false),  // corner 3 left
            ShotRecord::new("d", 400.0, 180.0, true), // paint
            ShotRecord::new("e", 400.0, 185.0, false), // paint
        ]
    }

    #[test]
    fn test_builder_defaults() {
        let chart = ShotChart::new().build().unwrap();
        assert_eq!(chart.shot_count(), 0);
        assert_eq!(chart.mode, ChartMode::Zones);
    }

    #[test]
    fn test_builder_rejects_zero_dimensions() {
        let result = ShotChart::new().dimensions(0, 600).build();
        assert!(matches!(
            result,
            Err(Error::InvalidDimensions { width: 0, .. })
        ));
    }

    #[test]
    fn test_zones_render_colors_active_regions() {
        let chart = ShotChart::new()
            .shots(&sample_shots())
            .dimensions(800, 600)
            .build()
            .unwrap();
        let fb = chart.to_framebuffer().unwrap();

        // Corner 3 Left took shots, so its interior is tinted.
        assert_ne!(fb.get_pixel(40, 75), Some(Rgba::WHITE));
        // Deep 3 took none and stays white away from outlines.
        assert_eq!(fb.get_pixel(400, 500), Some(Rgba::WHITE));
    }

    #[test]
    fn test_markers_render() {
        let chart = ShotChart::new()
            .shots(&sample_shots())
            .mode(ChartMode::Markers)
            .dimensions(800, 600)
            .build()
            .unwrap();
        let fb = chart.to_framebuffer().unwrap();

        // Made shot marker center is the made color.
        assert_eq!(fb.get_pixel(40, 75), Some(Rgba::rgb(34, 197, 94)));
        // Missed shot marker has a white core.
        assert_eq!(fb.get_pixel(400, 185), Some(Rgba::WHITE));
    }

    #[test]
    fn test_empty_chart_renders_bare_court() {
        let chart = ShotChart::new().dimensions(400, 300).build().unwrap();
        let fb = chart.to_framebuffer().unwrap();
        // No zone fill anywhere off the outlines.
        assert_eq!(fb.get_pixel(200, 150), Some(Rgba::WHITE));
    }

    #[test]
    fn test_svg_contains_labels() {
        let chart = ShotChart::new()
            .shots(&sample_shots())
            .dimensions(800, 600)
            .build()
            .unwrap();
        let svg = chart.to_svg().unwrap();

        assert!(svg.contains("<polygon"));
        assert!(svg.contains("2/3")); // corner 3 left makes/attempts
        assert!(svg.contains("66.7%"));
        assert!(svg.contains("1/2")); // paint
        assert!(svg.contains("50.0%"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let chart = ShotChart::new()
            .shots(&sample_shots())
            .dimensions(800, 600)
            .build()
            .unwrap();
        let a = chart.to_framebuffer().unwrap();
        let b = chart.to_framebuffer().unwrap();
        assert_eq!(a.pixels(), b.pixels());
    }
}
