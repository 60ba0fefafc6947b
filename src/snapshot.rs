//! Canvas snapshots
//!
//! Snapshots capture the rendered state of a canvas in a serializable form
//! for tooling and tests. Given the same drawing calls, a canvas always
//! produces an identical snapshot.

use serde::{Deserialize, Serialize};

use crate::canvas::{Canvas, Color};
use crate::error::Result;

/// A complete snapshot of a canvas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Pixel dimensions
    pub width: usize,
    pub height: usize,
    /// Cell dimensions
    pub rows: usize,
    pub cols: usize,
    /// Glyph text of each cell row, without escape sequences
    pub lines: Vec<String>,
    /// Per-cell colors, present only when the canvas has color enabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<Vec<Color>>>,
}

impl Snapshot {
    /// Create a snapshot of the current canvas state
    pub fn from_canvas(canvas: &Canvas) -> Self {
        let lines = canvas
            .glyph_rows()
            .map(|row| row.collect::<String>())
            .collect();

        let colors = canvas.is_color_enabled().then(|| {
            (0..canvas.rows())
                .map(|row| {
                    (0..canvas.cols())
                        .map(|col| canvas.cell_color(row, col).unwrap_or_default())
                        .collect()
                })
                .collect()
        });

        Snapshot {
            width: canvas.width(),
            height: canvas.height(),
            rows: canvas.rows(),
            cols: canvas.cols(),
            lines,
            colors,
        }
    }

    /// Convert snapshot to JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse snapshot from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Plain glyph text, rows joined by newlines
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Whether two snapshots show the same glyphs, ignoring colors
    pub fn content_equals(&self, other: &Snapshot) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.lines == other.lines
    }
}
