//! Canvas configuration files
//!
//! A config file is a JSON object holding the pixel dimensions and the
//! construction options:
//!
//! ```json
//! { "width": 80, "height": 40, "color": true, "invert_y": false }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::canvas::{Canvas, CanvasOptions};
use crate::error::{Error, Result};

/// Canvas dimensions plus options, as read from a config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Pixel width
    pub width: usize,
    /// Pixel height
    pub height: usize,
    /// Construction options
    #[serde(flatten)]
    pub options: CanvasOptions,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 40,
            height: 20,
            options: CanvasOptions::default(),
        }
    }
}

impl CanvasConfig {
    pub fn new(width: usize, height: usize, options: CanvasOptions) -> Self {
        Self {
            width,
            height,
            options,
        }
    }

    /// Parse and validate a config from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        debug!(path = %path.display(), ?config, "loaded canvas config");
        Ok(config)
    }

    /// Serialize the config as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configs that would produce a canvas with no pixels.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Construct the configured canvas.
    pub fn build(&self) -> Canvas {
        Canvas::with_options(self.width, self.height, self.options)
    }
}
