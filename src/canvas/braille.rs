//! Braille glyph map
//!
//! A braille cell is 2 dots wide and 4 dots tall. Each dot owns one bit of
//! the low byte of a code point in the Unicode Braille Patterns block, so a
//! cell's glyph is always `BRAILLE_OFFSET + bits`.
//!
//! ```text
//! Dot positions:     Bit values:
//!   0  3               0x01  0x08
//!   1  4               0x02  0x10
//!   2  5               0x04  0x20
//!   6  7               0x40  0x80
//! ```

/// The empty braille pattern (U+2800)
pub const BRAILLE_OFFSET: char = '\u{2800}';

/// Number of dot columns in one cell
pub const CELL_WIDTH: usize = 2;

/// Number of dot rows in one cell
pub const CELL_HEIGHT: usize = 4;

/// Dot bits indexed by `[dot_row][dot_col]`.
///
/// Row 3 holds dots 6 and 7, which Unicode appended after the original
/// six-dot layout, so the rows are not in bit order.
const PIXEL_MAP: [[u8; CELL_WIDTH]; CELL_HEIGHT] = [
    [0x01, 0x08],
    [0x02, 0x10],
    [0x04, 0x20],
    [0x40, 0x80],
];

/// Bit controlling the dot at `(dot_row, dot_col)` inside a cell.
///
/// Positions outside the 4x2 cell yield 0, which leaves any glyph unchanged.
#[inline]
pub const fn dot_bit(dot_row: usize, dot_col: usize) -> u8 {
    if dot_row < CELL_HEIGHT && dot_col < CELL_WIDTH {
        PIXEL_MAP[dot_row][dot_col]
    } else {
        0
    }
}

/// Glyph for a cell whose set dots are `bits`.
#[inline]
pub const fn glyph(bits: u8) -> char {
    match char::from_u32(BRAILLE_OFFSET as u32 + bits as u32) {
        Some(c) => c,
        None => BRAILLE_OFFSET,
    }
}
