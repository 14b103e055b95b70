//! Primitive rendering functions.
//!
//! Implements rasterization for the shapes a shot chart is built from:
//! lines for the court outline, circles for the restricted area and shot
//! markers, and filled polygons for zone overlays.

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::Point;

/// Draw a line using Bresenham's algorithm.
pub fn draw_line(fb: &mut Framebuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgba) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut x = x0;
    let mut y = y0;

    loop {
        if x >= 0 && y >= 0 {
            fb.set_pixel(x as u32, y as u32, color);
        }

        if x == x1 && y == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            if x == x1 {
                break;
            }
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            if y == y1 {
                break;
            }
            err += dx;
            y += sy;
        }
    }
}

/// Draw a filled circle, one horizontal span per row.
///
/// Translucent colors are alpha-blended over the existing pixels; each row
/// is touched exactly once, so blending never compounds.
pub fn draw_circle(fb: &mut Framebuffer, cx: i32, cy: i32, radius: i32, color: Rgba) {
    if radius <= 0 {
        if radius == 0 && cx >= 0 && cy >= 0 {
            fb.set_pixel(cx as u32, cy as u32, color);
        }
        return;
    }

    for dy in -radius..=radius {
        let half = (((radius * radius - dy * dy) as f32).sqrt()) as i32;
        draw_span(fb, cx - half, cx + half, cy + dy, color);
    }
}

/// Draw a circle outline using the midpoint algorithm.
pub fn draw_circle_outline(fb: &mut Framebuffer, cx: i32, cy: i32, radius: i32, color: Rgba) {
    if radius <= 0 {
        if radius == 0 && cx >= 0 && cy >= 0 {
            fb.set_pixel(cx as u32, cy as u32, color);
        }
        return;
    }

    let mut x = radius;
    let mut y = 0;
    let mut err = 1 - radius;

    while x >= y {
        plot_octants(fb, cx, cy, x, y, color);

        y += 1;
        if err < 0 {
            err += 2 * y + 1;
        } else {
            x -= 1;
            err += 2 * (y - x) + 1;
        }
    }
}

/// Fill a simple polygon using even-odd scanline rasterization.
///
/// Each scanline's crossings with the polygon edges are paired off into
/// horizontal spans — the same even-odd rule the region classifier uses for
/// containment, so a filled zone overlay matches its classification
/// boundary. Translucent colors are alpha-blended. Polygons with fewer
/// than 3 vertices draw nothing.
pub fn fill_polygon(fb: &mut Framebuffer, vertices: &[Point], color: Rgba) {
    if vertices.len() < 3 {
        return;
    }

    let min_y = vertices.iter().map(|v| v.y).fold(f32::INFINITY, f32::min);
    let max_y = vertices.iter().map(|v| v.y).fold(f32::NEG_INFINITY, f32::max);

    let y_start = (min_y.floor().max(0.0)) as i32;
    let y_end = (max_y.ceil().min(fb.height() as f32)) as i32;

    let mut crossings: Vec<f32> = Vec::with_capacity(vertices.len());

    for y in y_start..y_end {
        // Sample at the pixel-row center to avoid double-counting vertices
        // that sit exactly on integer coordinates.
        let scan_y = y as f32 + 0.5;

        crossings.clear();
        let mut j = vertices.len() - 1;
        for i in 0..vertices.len() {
            let vi = vertices[i];
            let vj = vertices[j];
            if (vi.y > scan_y) != (vj.y > scan_y) {
                let x = (vj.x - vi.x) * (scan_y - vi.y) / (vj.y - vi.y) + vi.x;
                crossings.push(x);
            }
            j = i;
        }

        crossings.sort_by(f32::total_cmp);
        for pair in crossings.chunks_exact(2) {
            draw_span(fb, pair[0].ceil() as i32, pair[1].floor() as i32, y, color);
        }
    }
}

/// Draw a polygon outline (edges plus the wrap-around closing edge).
pub fn draw_polygon_outline(fb: &mut Framebuffer, vertices: &[Point], color: Rgba) {
    if vertices.len() < 2 {
        return;
    }

    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        draw_line(
            fb,
            vertices[j].x as i32,
            vertices[j].y as i32,
            vertices[i].x as i32,
            vertices[i].y as i32,
            color,
        );
        j = i;
    }
}

/// Draw a shot marker: a filled circle of the given diameter.
pub fn draw_marker(fb: &mut Framebuffer, x: f32, y: f32, size: f32, color: Rgba) {
    let radius = (size / 2.0) as i32;
    draw_circle(fb, x as i32, y as i32, radius, color);
}

/// Draw a horizontal span, blending when the color is translucent.
#[inline]
fn draw_span(fb: &mut Framebuffer, x1: i32, x2: i32, y: i32, color: Rgba) {
    if y < 0 || y >= fb.height() as i32 || x2 < x1 {
        return;
    }

    let x_start = x1.max(0) as u32;
    let x_end = ((x2 + 1).max(0) as u32).min(fb.width());

    if color.a == 255 {
        if x_start < x_end {
            fb.fill_rect(x_start, y as u32, x_end - x_start, 1, color);
        }
    } else {
        for x in x_start..x_end {
            fb.blend_pixel(x, y as u32, color);
        }
    }
}

/// Plot the 8 symmetric octant points of a circle outline.
#[inline]
fn plot_octants(fb: &mut Framebuffer, cx: i32, cy: i32, x: i32, y: i32, color: Rgba) {
    for (px, py) in [
        (cx + x, cy + y),
        (cx - x, cy + y),
        (cx + x, cy - y),
        (cx - x, cy - y),
        (cx + y, cy + x),
        (cx - y, cy + x),
        (cx + y, cy - x),
        (cx - y, cy - x),
    ] {
        if px >= 0 && py >= 0 {
            fb.set_pixel(px as u32, py as u32, color);
        }
    }
}
