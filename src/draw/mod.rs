//! Drawing primitives
//!
//! Stateless rasterizers that turn shapes into [`Canvas::set`] calls. They
//! floor every coordinate to a pixel and never clip on their own: whatever
//! part of a shape falls outside the canvas is dropped by the canvas itself.
//!
//! [`Canvas::set`]: crate::canvas::Canvas::set

mod circle;
mod line;
mod rectangle;

pub use circle::{circle, circle_filled};
pub use line::line;
pub use rectangle::{rectangle, rectangle_filled};
