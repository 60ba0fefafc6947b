//! Bresenham line rasterization

use crate::canvas::{floor_to_pixel, Canvas};

/// Draw a line from `(x0, y0)` to `(x1, y1)`, both endpoints inclusive.
///
/// Coordinates are floored to pixels first. Drawing from A to B sets the same
/// pixels as drawing from B to A.
pub fn line(canvas: &mut Canvas, x0: f64, y0: f64, x1: f64, y1: f64) {
    let start = (floor_to_pixel(x0), floor_to_pixel(y0));
    let end = (floor_to_pixel(x1), floor_to_pixel(y1));

    // The error term rounds differently depending on travel direction, so
    // always walk from the lexicographically smaller endpoint.
    let ((x0, y0), (x1, y1)) = if end < start { (end, start) } else { (start, end) };

    let dx = x1.saturating_sub(x0).saturating_abs();
    let dy = y1.saturating_sub(y0).saturating_abs();
    let step_x = if x0 < x1 { 1 } else { -1 };
    let step_y = if y0 < y1 { 1 } else { -1 };

    // Steep lines always step in y and sometimes in x, shallow lines the reverse
    let steep = dy > dx;
    let mut err = if steep { dy / 2 } else { dx / 2 };

    let (mut x, mut y) = (x0, y0);
    loop {
        canvas.set(x as f64, y as f64);

        if x == x1 && y == y1 {
            break;
        }

        if steep {
            y += step_y;
            err -= dx;
            if err < 0 {
                x += step_x;
                err += dy;
            }
        } else {
            x += step_x;
            err -= dy;
            if err < 0 {
                y += step_y;
                err += dx;
            }
        }
    }
}
