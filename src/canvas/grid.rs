//! Braille canvas - the pixel-addressed cell grid
//!
//! Pixels are addressed with floating-point coordinates that are floored to
//! the pixel containing that point. Every pixel operation silently ignores
//! coordinates that fall outside the canvas, so the canvas behaves like an
//! unbounded plane that only renders a finite window.

use tracing::{debug, trace};

use super::braille::{self, CELL_HEIGHT, CELL_WIDTH};
use super::color::{ansi_reset, Color};
use super::options::CanvasOptions;

/// Location of one pixel inside the cell grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellIndex {
    row: usize,
    col: usize,
    dot_row: usize,
    dot_col: usize,
}

impl CellIndex {
    fn bit(&self) -> u8 {
        braille::dot_bit(self.dot_row, self.dot_col)
    }
}

/// A braille graphics canvas
///
/// Each terminal cell shows a 2x4 braille pattern, so a canvas of
/// `width x height` pixels renders as `width / 2` columns by `height / 4`
/// rows. Remainder pixels beyond the last whole cell are never addressable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    /// Set dot bits per cell, `[row][col]`
    cells: Vec<Vec<u8>>,
    /// Per-cell colors, `[row][col]`; `None` when color is disabled
    colors: Option<Vec<Vec<Color>>>,
    /// Pixel width
    width: usize,
    /// Pixel height
    height: usize,
    /// Construction options
    options: CanvasOptions,
}

impl Canvas {
    /// Create a canvas with default options.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_options(width, height, CanvasOptions::default())
    }

    /// Create a canvas with the given options.
    ///
    /// All cells start as the empty braille pattern and, if color is enabled,
    /// every cell color starts as [`Color::Default`].
    pub fn with_options(width: usize, height: usize, options: CanvasOptions) -> Self {
        let rows = height / CELL_HEIGHT;
        let cols = width / CELL_WIDTH;

        let cells = vec![vec![0u8; cols]; rows];
        let colors = options
            .color
            .then(|| vec![vec![Color::Default; cols]; rows]);

        debug!(
            width,
            height,
            rows,
            cols,
            color = options.color,
            invert_y = options.invert_y,
            "allocated braille canvas"
        );

        Self {
            cells,
            colors,
            width,
            height,
            options,
        }
    }

    /// Pixel width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Pixel height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of terminal rows (`height / 4`)
    pub fn rows(&self) -> usize {
        self.height / CELL_HEIGHT
    }

    /// Number of terminal columns (`width / 2`)
    pub fn cols(&self) -> usize {
        self.width / CELL_WIDTH
    }

    /// Options the canvas was built with
    pub fn options(&self) -> CanvasOptions {
        self.options
    }

    /// Whether a color grid was allocated
    pub fn is_color_enabled(&self) -> bool {
        self.colors.is_some()
    }

    /// Turn on the pixel at `(x, y)`.
    pub fn set(&mut self, x: f64, y: f64) {
        if let Some(index) = self.pixel_to_cell(x, y) {
            self.cells[index.row][index.col] |= index.bit();
        }
    }

    /// Turn on the pixel at `(x, y)` and color its whole cell.
    ///
    /// One color is stored per cell, so the last color written to any pixel
    /// of a cell wins. Without color support the pixel is still set and the
    /// color is ignored.
    pub fn set_color(&mut self, x: f64, y: f64, color: Color) {
        let Some(index) = self.pixel_to_cell(x, y) else {
            return;
        };
        self.cells[index.row][index.col] |= index.bit();
        if let Some(colors) = self.colors.as_mut() {
            colors[index.row][index.col] = color;
        }
    }

    /// Turn off the pixel at `(x, y)`.
    pub fn unset(&mut self, x: f64, y: f64) {
        if let Some(index) = self.pixel_to_cell(x, y) {
            self.cells[index.row][index.col] &= !index.bit();
        }
    }

    /// Invert the pixel at `(x, y)`.
    pub fn toggle(&mut self, x: f64, y: f64) {
        if let Some(index) = self.pixel_to_cell(x, y) {
            self.cells[index.row][index.col] ^= index.bit();
        }
    }

    /// Whether the pixel at `(x, y)` is set. Out-of-bounds pixels read as unset.
    pub fn get(&self, x: f64, y: f64) -> bool {
        self.pixel_to_cell(x, y)
            .is_some_and(|index| self.cells[index.row][index.col] & index.bit() != 0)
    }

    /// Reset every cell to the empty pattern and every color to default.
    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(0);
        }
        if let Some(colors) = self.colors.as_mut() {
            for row in colors {
                row.fill(Color::Default);
            }
        }
        debug!(rows = self.rows(), cols = self.cols(), "cleared braille canvas");
    }

    /// Glyph of the cell at `(row, col)`, or `None` outside the grid
    pub fn glyph(&self, row: usize, col: usize) -> Option<char> {
        self.cells
            .get(row)
            .and_then(|line| line.get(col))
            .map(|&bits| braille::glyph(bits))
    }

    /// Color of the cell at `(row, col)`, or `None` when color is disabled or
    /// the cell is outside the grid
    pub fn cell_color(&self, row: usize, col: usize) -> Option<Color> {
        self.colors
            .as_ref()
            .and_then(|colors| colors.get(row))
            .and_then(|line| line.get(col))
            .copied()
    }

    /// Number of pixels currently set
    pub fn count_set(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .map(|bits| bits.count_ones() as usize)
            .sum()
    }

    /// Iterator over rows of glyphs, top row first
    pub fn glyph_rows(&self) -> impl Iterator<Item = impl Iterator<Item = char> + '_> + '_ {
        self.cells
            .iter()
            .map(|row| row.iter().map(|&bits| braille::glyph(bits)))
    }

    /// Render the canvas as text, one line per cell row.
    ///
    /// Rows are joined with `\n` and there is no trailing newline. With color
    /// enabled, each non-default cell is wrapped in its ANSI color and a reset.
    pub fn frame(&self) -> String {
        let Some(colors) = self.colors.as_ref() else {
            return self
                .glyph_rows()
                .map(|row| row.collect::<String>())
                .collect::<Vec<_>>()
                .join("\n");
        };

        let mut out = String::with_capacity(self.rows() * (self.cols() * 3 + 1));
        for (row_index, (row, row_colors)) in self.cells.iter().zip(colors).enumerate() {
            if row_index > 0 {
                out.push('\n');
            }
            for (&bits, &color) in row.iter().zip(row_colors) {
                let glyph = braille::glyph(bits);
                if color.is_default() {
                    out.push(glyph);
                } else {
                    out.push_str(color.ansi());
                    out.push(glyph);
                    out.push_str(ansi_reset());
                }
            }
        }
        out
    }

    /// Map pixel coordinates to a cell and a dot within it.
    ///
    /// Rejects pixels outside `[0, width) x [0, height)`, then separately
    /// rejects pixels in the remainder strip that the `/ 2` and `/ 4`
    /// truncation cut off.
    fn pixel_to_cell(&self, x: f64, y: f64) -> Option<CellIndex> {
        let px = floor_to_pixel(x);
        let mut py = floor_to_pixel(y);

        if self.options.invert_y {
            py = (self.height as i64).saturating_sub(1).saturating_sub(py);
        }

        if px < 0 || py < 0 || px as u64 >= self.width as u64 || py as u64 >= self.height as u64
        {
            trace!(x, y, "pixel outside canvas");
            return None;
        }

        let (px, py) = (px as usize, py as usize);
        let row = py / CELL_HEIGHT;
        let col = px / CELL_WIDTH;

        if row >= self.rows() || col >= self.cols() {
            trace!(x, y, row, col, "pixel in truncated remainder");
            return None;
        }

        Some(CellIndex {
            row,
            col,
            dot_row: py % CELL_HEIGHT,
            dot_col: px % CELL_WIDTH,
        })
    }
}

/// Floor a coordinate to the integer pixel containing it.
///
/// The float to integer cast saturates at the `i64` range and maps NaN to 0.
#[inline]
pub(crate) fn floor_to_pixel(v: f64) -> i64 {
    v.floor() as i64
}
