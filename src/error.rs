//! Error types
//!
//! Drawing never fails; these cover configuration files, color names and
//! snapshot JSON.

use std::io;
use thiserror::Error;

/// Brodot error type
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed JSON in a config file or snapshot
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Config asked for a canvas with no pixels
    #[error("Invalid canvas dimensions {width}x{height}: both must be non-zero")]
    InvalidDimensions { width: usize, height: usize },

    /// Color name not in the palette
    #[error("Unknown color: {0}")]
    UnknownColor(String),
}

/// Result type for brodot operations
pub type Result<T> = std::result::Result<T, Error>;
