//! LUT configuration records.
//!
//! Each configuration is one JSON object:
//!
//! ```json
//! {
//!     "size": 33,
//!     "red_tint": 1.05,
//!     "blue_tint": 0.95,
//!     "output": "cinematic.cube",
//!     "look": "tealorange",
//!     "exposure_offset": 1.2
//! }
//! ```
//!
//! Fields may be omitted. An absent field and a zero-valued field mean
//! the same thing: use the default (`"size": 0` behaves like no `size`
//! at all). Unknown fields are ignored.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::LutResult;

const DEFAULT_SIZE: i64 = 17;
const DEFAULT_RED_TINT: f64 = 1.05;
const DEFAULT_BLUE_TINT: f64 = 0.95;
const DEFAULT_OUTPUT: &str = "output.cube";
const DEFAULT_LOOK: &str = "none";
const DEFAULT_EXPOSURE: f64 = 1.0;

/// A single LUT recipe loaded from JSON.
///
/// # Example
///
/// ```rust
/// use lutforge_cube::LutConfig;
///
/// let config = LutConfig::parse(r#"{"look": "TealOrange"}"#).unwrap();
/// assert_eq!(config.size, 17);
/// assert_eq!(config.look, "TealOrange");
/// assert_eq!(config.output, "output.cube");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LutConfig {
    /// Grid resolution per axis; the LUT holds `size^3` entries.
    pub size: i64,
    /// Red tint factor. Parsed and defaulted, but not consumed by any
    /// pipeline stage.
    pub red_tint: f64,
    /// Blue tint factor. Parsed and defaulted, but not consumed by any
    /// pipeline stage.
    pub blue_tint: f64,
    /// Destination file name, joined onto the output directory unless
    /// absolute.
    pub output: String,
    /// Creative look name (case-insensitive; unknown names mean none).
    pub look: String,
    /// Exposure gain applied before the log decode.
    pub exposure_offset: f64,
}

impl Default for LutConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            red_tint: DEFAULT_RED_TINT,
            blue_tint: DEFAULT_BLUE_TINT,
            output: DEFAULT_OUTPUT.to_string(),
            look: DEFAULT_LOOK.to_string(),
            exposure_offset: DEFAULT_EXPOSURE,
        }
    }
}

impl LutConfig {
    /// Reads and parses a configuration file.
    pub fn read<P: AsRef<Path>>(path: P) -> LutResult<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        Self::parse(&text)
    }

    /// Parses a configuration from JSON text and resolves defaults.
    pub fn parse(json: &str) -> LutResult<Self> {
        let mut config: LutConfig = serde_json::from_str(json)?;
        config.apply_defaults();
        Ok(config)
    }

    /// Replaces zero-equivalent field values with their defaults.
    ///
    /// `size` at or below zero, numeric fields at exactly zero, and
    /// empty strings all resolve to the documented defaults. A `size`
    /// of 1 is not zero-equivalent and is left for [`generate`] to
    /// reject.
    ///
    /// [`generate`]: crate::generate
    pub fn apply_defaults(&mut self) {
        if self.size <= 0 {
            self.size = DEFAULT_SIZE;
        }
        if self.red_tint == 0.0 {
            self.red_tint = DEFAULT_RED_TINT;
        }
        if self.blue_tint == 0.0 {
            self.blue_tint = DEFAULT_BLUE_TINT;
        }
        if self.output.is_empty() {
            self.output = DEFAULT_OUTPUT.to_string();
        }
        if self.look.is_empty() {
            self.look = DEFAULT_LOOK.to_string();
        }
        if self.exposure_offset == 0.0 {
            self.exposure_offset = DEFAULT_EXPOSURE;
        }
    }
}
