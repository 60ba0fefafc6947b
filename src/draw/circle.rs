//! Midpoint circle rasterization
//!
//! Both variants walk one octant with the integer midpoint algorithm and
//! mirror each step into the other seven.

use tracing::trace;

use crate::canvas::{floor_to_pixel, Canvas};

/// Draw a circle outline centered at `(cx, cy)`.
///
/// A radius of 0 sets only the center pixel; a negative radius draws nothing.
pub fn circle(canvas: &mut Canvas, cx: f64, cy: f64, radius: f64) {
    walk_octant(canvas, cx, cy, radius, plot_octants);
}

/// Draw a filled circle centered at `(cx, cy)`.
///
/// Every scanline the circle crosses is filled as one contiguous span.
pub fn circle_filled(canvas: &mut Canvas, cx: f64, cy: f64, radius: f64) {
    walk_octant(canvas, cx, cy, radius, fill_spans);
}

/// Run the midpoint algorithm, handing each octant offset `(x, y)` to `emit`.
fn walk_octant<F>(canvas: &mut Canvas, cx: f64, cy: f64, radius: f64, mut emit: F)
where
    F: FnMut(&mut Canvas, i64, i64, i64, i64),
{
    if radius < 0.0 {
        trace!(radius, "negative radius, nothing to draw");
        return;
    }

    let cx = floor_to_pixel(cx);
    let cy = floor_to_pixel(cy);
    let r = floor_to_pixel(radius);

    if r == 0 {
        canvas.set(cx as f64, cy as f64);
        return;
    }

    let mut x = 0i64;
    let mut y = r;
    let mut d = 1 - r;

    emit(canvas, cx, cy, x, y);
    while x <= y {
        x += 1;
        if d < 0 {
            d += 2 * x + 1;
        } else {
            y -= 1;
            d += 2 * (x - y) + 1;
        }
        emit(canvas, cx, cy, x, y);
    }
}

/// Plot the 8 mirror images of octant offset `(x, y)`.
fn plot_octants(canvas: &mut Canvas, cx: i64, cy: i64, x: i64, y: i64) {
    for (dx, dy) in [(x, y), (y, x)] {
        for (sx, sy) in [(dx, dy), (-dx, dy), (dx, -dy), (-dx, -dy)] {
            canvas.set(cx.saturating_add(sx) as f64, cy.saturating_add(sy) as f64);
        }
    }
}

/// Fill the 4 horizontal spans covered by octant offset `(x, y)`.
fn fill_spans(canvas: &mut Canvas, cx: i64, cy: i64, x: i64, y: i64) {
    span(canvas, cx.saturating_sub(x), cx.saturating_add(x), cy.saturating_add(y));
    span(canvas, cx.saturating_sub(x), cx.saturating_add(x), cy.saturating_sub(y));
    span(canvas, cx.saturating_sub(y), cx.saturating_add(y), cy.saturating_add(x));
    span(canvas, cx.saturating_sub(y), cx.saturating_add(y), cy.saturating_sub(x));
}

/// Set pixels `start..=end` on row `y`.
fn span(canvas: &mut Canvas, start: i64, end: i64, y: i64) {
    for x in start..=end {
        canvas.set(x as f64, y as f64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_symmetry() {
        let mut canvas = Canvas::new(30, 30);
        circle(&mut canvas, 14.0, 14.0, 10.0);

        for (dx, dy) in [(10, 0), (0, 10), (7, 7)] {
            let mirrors = [
                (14 + dx, 14 + dy),
                (14 - dx, 14 + dy),
                (14 + dx, 14 - dy),
                (14 - dx, 14 - dy),
                (14 + dy, 14 + dx),
                (14 - dy, 14 + dx),
                (14 + dy, 14 - dx),
                (14 - dy, 14 - dx),
            ];
            for (x, y) in mirrors {
                assert!(
                    canvas.get(x as f64, y as f64),
                    "mirror ({}, {}) of offset ({}, {}) not set",
                    x,
                    y,
                    dx,
                    dy
                );
            }
        }
    }

    #[test]
    fn test_circle_radius_zero() {
        let mut canvas = Canvas::new(10, 12);
        circle(&mut canvas, 5.0, 5.0, 0.0);
        assert!(canvas.get(5.0, 5.0));
        assert_eq!(canvas.count_set(), 1);

        let mut canvas = Canvas::new(10, 12);
        circle_filled(&mut canvas, 5.0, 5.0, 0.0);
        assert!(canvas.get(5.0, 5.0));
        assert_eq!(canvas.count_set(), 1);
    }

    #[test]
    fn test_circle_fractional_radius_below_one() {
        let mut canvas = Canvas::new(10, 12);
        circle(&mut canvas, 5.0, 5.0, 0.7);
        assert_eq!(canvas.count_set(), 1);
    }

    #[test]
    fn test_circle_radius_one() {
        let mut canvas = Canvas::new(10, 12);
        circle(&mut canvas, 5.0, 5.0, 1.0);

        for (x, y) in [(6.0, 5.0), (4.0, 5.0), (5.0, 6.0), (5.0, 4.0)] {
            assert!(canvas.get(x, y), "cardinal ({}, {}) not set", x, y);
        }
        assert_eq!(canvas.count_set(), 4);
    }

    #[test]
    fn test_circle_diagonal() {
        // Radius 7 reaches the x == y step at offset (5, 5)
        let mut canvas = Canvas::new(20, 20);
        circle(&mut canvas, 9.0, 9.0, 7.0);

        for (x, y) in [(16.0, 9.0), (2.0, 9.0), (9.0, 16.0), (9.0, 2.0)] {
            assert!(canvas.get(x, y), "cardinal ({}, {}) not set", x, y);
        }
        for (x, y) in [(14.0, 14.0), (4.0, 14.0), (14.0, 4.0), (4.0, 4.0)] {
            assert!(canvas.get(x, y), "diagonal ({}, {}) not set", x, y);
        }
    }

    #[test]
    fn test_circle_negative_radius() {
        let mut canvas = Canvas::new(20, 20);
        circle(&mut canvas, 10.0, 10.0, -5.0);
        circle_filled(&mut canvas, 10.0, 10.0, -5.0);
        circle(&mut canvas, 10.0, 10.0, -0.5);
        assert_eq!(canvas.count_set(), 0);
    }

    #[test]
    fn test_circle_float_coordinates() {
        let mut canvas = Canvas::new(20, 20);
        circle(&mut canvas, 5.7, 6.9, 3.0);
        assert!(canvas.get(8.0, 6.0));
        assert!(canvas.get(2.0, 6.0));

        let mut canvas = Canvas::new(20, 20);
        circle_filled(&mut canvas, 5.7, 6.9, 3.0);
        assert!(canvas.get(5.0, 6.0));
        assert!(canvas.get(8.0, 6.0));
    }

    #[test]
    fn test_circle_partially_off_canvas() {
        let mut canvas = Canvas::new(20, 20);
        circle(&mut canvas, 0.0, 0.0, 10.0);
        assert!(canvas.get(10.0, 0.0));
        assert!(canvas.get(0.0, 10.0));
    }

    #[test]
    fn test_circle_outline_only() {
        let mut canvas = Canvas::new(30, 30);
        circle(&mut canvas, 14.0, 14.0, 10.0);
        assert!(!canvas.get(14.0, 14.0));
        assert!(!canvas.get(14.0, 10.0));
        assert!(!canvas.get(10.0, 14.0));
    }

    #[test]
    fn test_circle_filled() {
        let mut canvas = Canvas::new(30, 30);
        circle_filled(&mut canvas, 14.0, 14.0, 10.0);

        for (x, y) in [
            (14.0, 14.0),
            (24.0, 14.0),
            (4.0, 14.0),
            (14.0, 24.0),
            (14.0, 4.0),
            (14.0, 10.0),
            (10.0, 14.0),
        ] {
            assert!(canvas.get(x, y), "({}, {}) not set", x, y);
        }
        assert!(!canvas.get(25.0, 14.0));
        assert!(!canvas.get(14.0, 3.0));
    }

    #[test]
    fn test_circle_filled_no_gaps() {
        let mut canvas = Canvas::new(30, 30);
        circle_filled(&mut canvas, 14.0, 14.0, 10.0);

        for y in 4..=24 {
            let row: Vec<usize> = (0..30).filter(|&x| canvas.get(x as f64, y as f64)).collect();
            assert!(!row.is_empty(), "scanline {} empty", y);
            let (first, last) = (row[0], row[row.len() - 1]);
            assert_eq!(row.len(), last - first + 1, "gap on scanline {}", y);
        }
    }

    #[test]
    fn test_circle_filled_covers_outline() {
        let mut outline = Canvas::new(30, 30);
        let mut filled = Canvas::new(30, 30);
        circle(&mut outline, 14.0, 14.0, 9.0);
        circle_filled(&mut filled, 14.0, 14.0, 9.0);

        for y in 0..30 {
            for x in 0..30 {
                if outline.get(x as f64, y as f64) {
                    assert!(filled.get(x as f64, y as f64), "({}, {}) missing from fill", x, y);
                }
            }
        }
    }
}
