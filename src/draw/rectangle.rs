//! Axis-aligned rectangles
//!
//! A rectangle at `(x, y)` with size `width x height` covers pixels from
//! `(x, y)` to `(x + width - 1, y + height - 1)` inclusive.

use tracing::trace;

use super::line::line;
use crate::canvas::{floor_to_pixel, Canvas};

/// Draw a rectangle outline.
///
/// A non-positive width or height draws nothing.
pub fn rectangle(canvas: &mut Canvas, x: f64, y: f64, width: f64, height: f64) {
    if !has_area(width, height) {
        return;
    }

    let right = x + width - 1.0;
    let bottom = y + height - 1.0;

    line(canvas, x, y, right, y);
    line(canvas, right, y, right, bottom);
    line(canvas, right, bottom, x, bottom);
    line(canvas, x, bottom, x, y);
}

/// Draw a filled rectangle.
///
/// A non-positive width or height draws nothing.
pub fn rectangle_filled(canvas: &mut Canvas, x: f64, y: f64, width: f64, height: f64) {
    if !has_area(width, height) {
        return;
    }

    let start_x = floor_to_pixel(x);
    let start_y = floor_to_pixel(y);
    let end_x = floor_to_pixel(x + width - 1.0);
    let end_y = floor_to_pixel(y + height - 1.0);

    for py in start_y..=end_y {
        for px in start_x..=end_x {
            canvas.set(px as f64, py as f64);
        }
    }
}

fn has_area(width: f64, height: f64) -> bool {
    // Written so that NaN sizes are rejected too
    let positive = width > 0.0 && height > 0.0;
    if !positive {
        trace!(width, height, "rectangle without area, nothing to draw");
    }
    positive
}
