//! SVG output encoder.
//!
//! Vector export for shot charts: zone polygons, the restricted-area
//! circle, court outline strokes, and percentage labels. Raster
//! framebuffers can also be embedded as base64 PNG images, which is how a
//! marker-mode chart rides inside a labeled SVG.

use crate::color::Rgba;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use base64::{engine::general_purpose::STANDARD, Engine};
use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// SVG encoder for vector chart output.
#[derive(Debug, Clone)]
pub struct SvgEncoder {
    /// SVG width
    width: u32,
    /// SVG height
    height: u32,
    /// Background color (None for transparent)
    background: Option<Rgba>,
    /// SVG elements
    elements: Vec<SvgElement>,
}

/// An SVG element.
///
/// Field names are self-documenting and match SVG attribute names.
#[derive(Debug, Clone)]
#[allow(missing_docs)]
pub enum SvgElement {
    /// Circle
    Circle {
        cx: f32,
        cy: f32,
        r: f32,
        fill: Rgba,
        stroke: Option<Rgba>,
        stroke_width: f32,
    },
    /// Line
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: Rgba,
        stroke_width: f32,
    },
    /// Filled polygon
    Polygon {
        points: Vec<(f32, f32)>,
        fill: Rgba,
        stroke: Option<Rgba>,
        stroke_width: f32,
    },
    /// Text
    Text {
        x: f32,
        y: f32,
        text: String,
        font_size: f32,
        fill: Rgba,
        anchor: TextAnchor,
    },
    /// Embedded raster image (base64 PNG)
    Image {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        data: String,
    },
}

/// Text anchor position for SVG text alignment.
#[derive(Debug, Clone, Copy, Default)]
pub enum TextAnchor {
    /// Align text start at position (left-aligned for LTR)
    #[default]
    Start,
    /// Center text at position
    Middle,
    /// Align text end at position (right-aligned for LTR)
    End,
}

impl SvgEncoder {
    /// Create a new SVG encoder with given dimensions.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: Some(Rgba::WHITE),
            elements: Vec::new(),
        }
    }

    /// Create from a framebuffer (embeds as raster image).
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn from_framebuffer(fb: &Framebuffer) -> Result<Self> {
        let mut encoder = Self::new(fb.width(), fb.height());
        encoder.background = None; // Image provides background

        let png_bytes = super::PngEncoder::to_bytes(fb)?;
        let base64_data = STANDARD.encode(&png_bytes);
        let data_uri = format!("data:image/png;base64,{base64_data}");

        encoder.elements.push(SvgElement::Image {
            x: 0.0,
            y: 0.0,
            width: fb.width() as f32,
            height: fb.height() as f32,
            data: data_uri,
        });

        Ok(encoder)
    }

    /// Set background color (None for transparent).
    #[must_use]
    pub fn background(mut self, color: Option<Rgba>) -> Self {
        self.background = color;
        self
    }

    /// Add a circle, optionally stroked.
    #[must_use]
    pub fn circle(
        mut self,
        cx: f32,
        cy: f32,
        r: f32,
        fill: Rgba,
        stroke: Option<Rgba>,
        stroke_width: f32,
    ) -> Self {
        self.elements.push(SvgElement::Circle {
            cx,
            cy,
            r,
            fill,
            stroke,
            stroke_width,
        });
        self
    }

    /// Add a line.
    #[must_use]
    pub fn line(
        mut self,
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        stroke: Rgba,
        stroke_width: f32,
    ) -> Self {
        self.elements.push(SvgElement::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            stroke_width,
        });
        self
    }

    /// Add a filled polygon, optionally stroked.
    #[must_use]
    pub fn polygon(
        mut self,
        points: &[(f32, f32)],
        fill: Rgba,
        stroke: Option<Rgba>,
        stroke_width: f32,
    ) -> Self {
        self.elements.push(SvgElement::Polygon {
            points: points.to_vec(),
            fill,
            stroke,
            stroke_width,
        });
        self
    }

    /// Add text with an anchor.
    #[must_use]
    pub fn text(
        mut self,
        x: f32,
        y: f32,
        text: &str,
        font_size: f32,
        fill: Rgba,
        anchor: TextAnchor,
    ) -> Self {
        self.elements.push(SvgElement::Text {
            x,
            y,
            text: text.to_string(),
            font_size,
            fill,
            anchor,
        });
        self
    }

    /// Add a raw element.
    pub fn add_element(&mut self, element: SvgElement) {
        self.elements.push(element);
    }

    /// Render to SVG string.
    #[must_use]
    pub fn render(&self) -> String {
        let mut svg = String::with_capacity(4096);

        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        );

        if let Some(bg) = self.background {
            let _ = writeln!(
                svg,
                r#"  <rect width="100%" height="100%" fill="{}"/>"#,
                rgba_to_css(bg)
            );
        }

        for element in &self.elements {
            let _ = writeln!(svg, "  {}", element_to_svg(element));
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Write to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.render().as_bytes())?;
        Ok(())
    }
}

/// Convert RGBA to CSS color string.
fn rgba_to_css(color: Rgba) -> String {
    if color.a == 255 {
        format!("rgb({},{},{})", color.r, color.g, color.b)
    } else {
        format!(
            "rgba({},{},{},{:.3})",
            color.r,
            color.g,
            color.b,
            f32::from(color.a) / 255.0
        )
    }
}

fn stroke_attr(stroke: Option<Rgba>, stroke_width: f32) -> String {
    stroke
        .map(|s| {
            format!(
                r#" stroke="{}" stroke-width="{}""#,
                rgba_to_css(s),
                stroke_width
            )
        })
        .unwrap_or_default()
}

/// Convert an SVG element to its string representation.
fn element_to_svg(element: &SvgElement) -> String {
    match element {
        SvgElement::Circle {
            cx,
            cy,
            r,
            fill,
            stroke,
            stroke_width,
        } => {
            format!(
                r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="{}"{}/>"#,
                rgba_to_css(*fill),
                stroke_attr(*stroke, *stroke_width)
            )
        }
        SvgElement::Line {
            x1,
            y1,
            x2,
            y2,
            stroke,
            stroke_width,
        } => {
            format!(
                r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{}" stroke-width="{stroke_width}"/>"#,
                rgba_to_css(*stroke)
            )
        }
        SvgElement::Polygon {
            points,
            fill,
            stroke,
            stroke_width,
        } => {
            let points_str: String = points
                .iter()
                .map(|(x, y)| format!("{x},{y}"))
                .collect::<Vec<_>>()
                .join(" ");
            format!(
                r#"<polygon points="{points_str}" fill="{}"{}/>"#,
                rgba_to_css(*fill),
                stroke_attr(*stroke, *stroke_width)
            )
        }
        SvgElement::Text {
            x,
            y,
            text,
            font_size,
            fill,
            anchor,
        } => {
            let anchor_str = match anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
                TextAnchor::End => "end",
            };
            // Escape XML special characters
            let escaped_text = text
                .replace('&', "&amp;")
                .replace('<', "&lt;")
                .replace('>', "&gt;")
                .replace('"', "&quot;");
            format!(
                r#"<text x="{x}" y="{y}" font-size="{font_size}" fill="{}" text-anchor="{anchor_str}" font-family="sans-serif">{escaped_text}</text>"#,
                rgba_to_css(*fill)
            )
        }
        SvgElement::Image {
            x,
            y,
            width,
            height,
            data,
        } => {
            format!(
                r#"<image x="{x}" y="{y}" width="{width}" height="{height}" xlink:href="{data}"/>"#
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_header_and_dimensions() {
        let svg = SvgEncoder::new(800, 600).render();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="800""#));
        assert!(svg.contains(r#"viewBox="0 0 800 600""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_svg_polygon_element() {
        let svg = SvgEncoder::new(100, 100)
            .polygon(
                &[(0.0, 0.0), (50.0, 0.0), (50.0, 50.0)],
                Rgba::rgb(34, 197, 94),
                Some(Rgba::BLACK),
                1.5,
            )
            .render();
        assert!(svg.contains(r#"<polygon points="0,0 50,0 50,50""#));
        assert!(svg.contains(r#"fill="rgb(34,197,94)""#));
        assert!(svg.contains(r#"stroke-width="1.5""#));
    }

    #[test]
    fn test_svg_circle_and_line() {
        let svg = SvgEncoder::new(100, 100)
            .circle(50.0, 50.0, 10.0, Rgba::RED, None, 1.0)
            .line(0.0, 0.0, 100.0, 100.0, Rgba::BLACK, 2.0)
            .render();
        assert!(svg.contains(r#"<circle cx="50" cy="50" r="10""#));
        assert!(svg.contains(r#"<line x1="0" y1="0" x2="100" y2="100""#));
    }

    #[test]
    fn test_svg_text_escaping() {
        let svg = SvgEncoder::new(100, 100)
            .text(10.0, 20.0, "2PT & <3PT>", 12.0, Rgba::BLACK, TextAnchor::Middle)
            .render();
        assert!(svg.contains("2PT &amp; &lt;3PT&gt;"));
        assert!(svg.contains(r#"text-anchor="middle""#));
    }

    #[test]
    fn test_svg_rgba_alpha_css() {
        let svg = SvgEncoder::new(100, 100)
            .circle(10.0, 10.0, 5.0, Rgba::new(255, 0, 0, 128), None, 1.0)
            .render();
        assert!(svg.contains("rgba(255,0,0,0.502)"));
    }

    #[test]
    fn test_svg_transparent_background() {
        let svg = SvgEncoder::new(100, 100).background(None).render();
        assert!(!svg.contains("<rect"));
    }

    #[test]
    fn test_svg_from_framebuffer_embeds_png() {
        let mut fb = Framebuffer::new(8, 8).unwrap();
        fb.clear(Rgba::WHITE);
        let svg = SvgEncoder::from_framebuffer(&fb).unwrap().render();
        assert!(svg.contains("data:image/png;base64,"));
    }

    #[test]
    fn test_svg_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");
        SvgEncoder::new(100, 100).write_to_file(&path).unwrap();
        assert!(path.exists());
    }
}
