//! Cell foreground colors
//!
//! A small closed palette of the standard ANSI foreground colors. The
//! `Default` color renders without any escape sequence at all.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// SGR reset sequence emitted after every colored cell
const ANSI_RESET: &str = "\x1b[0m";

/// ANSI foreground color of a canvas cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    /// Terminal default, no escape sequence
    #[default]
    Default = 0,
    Black,
    Blue,
    Cyan,
    Green,
    Magenta,
    Red,
    White,
    Yellow,
}

impl Color {
    /// Every color in palette order
    pub const ALL: [Color; 9] = [
        Color::Default,
        Color::Black,
        Color::Blue,
        Color::Cyan,
        Color::Green,
        Color::Magenta,
        Color::Red,
        Color::White,
        Color::Yellow,
    ];

    /// The SGR foreground escape sequence for this color.
    pub const fn ansi(self) -> &'static str {
        match self {
            Color::Default => "",
            Color::Black => "\x1b[30m",
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Blue => "\x1b[34m",
            Color::Magenta => "\x1b[35m",
            Color::Cyan => "\x1b[36m",
            Color::White => "\x1b[37m",
        }
    }

    /// Lowercase palette name
    pub const fn name(self) -> &'static str {
        match self {
            Color::Default => "default",
            Color::Black => "black",
            Color::Blue => "blue",
            Color::Cyan => "cyan",
            Color::Green => "green",
            Color::Magenta => "magenta",
            Color::Red => "red",
            Color::White => "white",
            Color::Yellow => "yellow",
        }
    }

    /// Whether this color emits escape sequences when rendered
    pub const fn is_default(self) -> bool {
        matches!(self, Color::Default)
    }
}

/// The SGR reset sequence.
pub const fn ansi_reset() -> &'static str {
    ANSI_RESET
}

/// Palette index to color. Indices outside the palette map to `Default`,
/// so their escape sequence is empty.
impl From<u8> for Color {
    fn from(index: u8) -> Self {
        Color::ALL
            .get(usize::from(index))
            .copied()
            .unwrap_or(Color::Default)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Color::ALL
            .iter()
            .copied()
            .find(|color| color.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnknownColor(s.to_string()))
    }
}
