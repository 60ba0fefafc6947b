//! Braille Canvas Module
//!
//! The pixel canvas and everything it owns:
//! - Braille glyph map (dot position to bit)
//! - Cell colors and their ANSI escape sequences
//! - Construction options
//! - The canvas itself: pixel addressing, bounds checks and frame rendering

pub mod braille;
pub mod color;
mod grid;
mod options;

pub(crate) use grid::floor_to_pixel;

pub use braille::BRAILLE_OFFSET;
pub use color::{ansi_reset, Color};
pub use grid::Canvas;
pub use options::CanvasOptions;
