// File: crates/graph-core/src/raster.rs
// Summary: Series rasterizer; stamps markers, line segments, and fill columns.

use crate::geometry::round_away;
use crate::scale::PixelScale;
use crate::series::Series;
use crate::surface::Surface;
use crate::types::Color;

/// Draw one series onto `surface`: every point marker first, then every
/// connecting segment (with its fill columns when fill is enabled).
///
/// The rasterizer never fails; coordinates that land outside the surface are
/// dropped by `Surface::set_pixel`.
pub fn draw_series(series: &Series, scale: &PixelScale, surface: &mut Surface) {
    draw_markers(series, scale, surface);
    draw_segments(series, scale, surface);
}

/// Stamp a point_size x point_size block per point, centered on the mapped
/// location. Loop bounds truncate toward zero, so size 2.7 stamps 2x2.
fn draw_markers(series: &Series, scale: &PixelScale, surface: &mut Surface) {
    let size = series.point_size;
    let steps = size as i32;

    for p in series.points() {
        for dx in 0..steps {
            for dy in 0..steps {
                let px = round_away(p.x / scale.x_scale + (dx as f64 - size / 2.0));
                let py = round_away(
                    scale.y_span / scale.y_scale
                        - (p.y / scale.y_scale + (dy as f64 - size / 2.0)),
                );
                surface.set_pixel(px, py, series.point_color);
            }
        }
    }
}

/// Walk each consecutive pair left to right, stamping a thickness block per
/// pixel column along the interpolated line. A one-point series draws no
/// segments.
fn draw_segments(series: &Series, scale: &PixelScale, surface: &mut Surface) {
    let points = series.points();
    let thickness = series.line_thickness;
    let t_steps = thickness as i32;

    for pair in points.windows(2) {
        let (p1, p2) = (pair[0], pair[1]);

        // rise per pixel column; sort order guarantees p2.x >= p1.x
        let k = (p2.y - p1.y) / ((p2.x - p1.x) / scale.x_scale);
        let x_range = p2.int_x() - p1.int_x();
        let cols = round_away(x_range as f64 / scale.x_scale);

        for col in 0..cols {
            let y_px = scale.y_span / scale.y_scale - (col as f64 * k + p1.y) / scale.y_scale;
            let x_px = p1.int_x() as f64 / scale.x_scale + col as f64;

            for tx in 0..t_steps {
                for ty in 0..t_steps {
                    // the line block centers on thickness/2 - 1, not
                    // thickness/2 as markers do
                    surface.set_pixel(
                        round_away(x_px + (tx as f64 - thickness / 2.0 + 1.0)),
                        round_away(y_px + (ty as f64 - thickness / 2.0 + 1.0)),
                        series.line_color,
                    );
                }
            }

            if series.fill {
                fill_column(surface, x_px, y_px, series.fill_color);
            }
        }
    }
}

/// Paint a two-pixel-wide column from the segment row down to the bottom
/// edge of the surface.
fn fill_column(surface: &mut Surface, x_px: f64, y_px: f64, color: Color) {
    let bottom = surface.height() as i32;
    let limit = surface.height() as f64 - y_px;

    for fx in 0..2 {
        let x = round_away(x_px + fx as f64);
        let mut row = 0i32;
        while (row as f64) < limit {
            surface.set_pixel(x, bottom - row, color);
            row += 1;
        }
    }
}
