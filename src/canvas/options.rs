//! Canvas construction options

use serde::{Deserialize, Serialize};

/// Options fixed at canvas construction
///
/// By default Y increases downward (screen coordinates) and no color grid
/// is allocated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasOptions {
    /// Allocate a per-cell color grid and emit ANSI colors in frames
    pub color: bool,
    /// Y increases upward, with the origin at the bottom-left
    pub invert_y: bool,
}

impl CanvasOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable per-cell ANSI color support
    pub fn with_color(mut self) -> Self {
        self.color = true;
        self
    }

    /// Invert the Y axis (mathematical coordinates)
    pub fn with_inverted_y(mut self) -> Self {
        self.invert_y = true;
        self
    }
}
