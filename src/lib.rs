//! Brodot - Braille Canvas Library
//!
//! Terminal graphics built from Unicode braille patterns. Every terminal cell
//! holds a 2x4 grid of dots, so a canvas of `width x height` pixels renders
//! as `width / 2` columns by `height / 4` rows of text.
//!
//! - `canvas`: Glyph map, colors, options and the pixel canvas
//! - `draw`: Line, circle and rectangle rasterizers
//! - `config`: JSON canvas configuration files
//! - `snapshot`: Serializable canvas state for tooling and tests
//!
//! ```
//! use brodot::{draw, Canvas};
//!
//! let mut canvas = Canvas::new(20, 16);
//! draw::rectangle(&mut canvas, 0.0, 0.0, 20.0, 16.0);
//! draw::line(&mut canvas, 0.0, 0.0, 19.0, 15.0);
//! println!("{}", canvas.frame());
//! ```

pub mod canvas;
pub mod config;
pub mod draw;
mod error;
pub mod snapshot;

pub use canvas::{Canvas, CanvasOptions, Color};
pub use config::CanvasConfig;
pub use error::{Error, Result};
pub use snapshot::Snapshot;
