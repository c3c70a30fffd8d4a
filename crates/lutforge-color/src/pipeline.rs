//! The display transform pipeline.
//!
//! Every grid sample runs through the same fixed chain:
//!
//! 1. Log decode with exposure gain (per channel)
//! 2. Rec.2020 -> Rec.709 gamut conversion with hard clip (cross channel)
//! 3. Rec.709 OETF (per channel)
//! 4. Optional creative look (cross channel)
//!
//! The stage order is fixed; only the exposure gain and the look vary
//! between configurations. `apply` is a pure function of its input and
//! the pipeline parameters, which is what makes the baked output
//! deterministic and the grid trivially parallel.
//!
//! # Example
//!
//! ```rust
//! use lutforge_color::{Look, Pipeline};
//!
//! let pipeline = Pipeline::new()
//!     .with_exposure(1.0)
//!     .with_look(Look::WarmVintage);
//!
//! let display = pipeline.apply([0.5, 0.5, 0.5]);
//! ```

use lutforge_transfer::{apple_log, rec709};

use crate::gamut;
use crate::look::Look;

/// Parameters for the fixed log-to-display transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pipeline {
    /// Multiplicative exposure gain applied before the log decode
    /// power segment (1.0 = no change).
    pub exposure_offset: f64,
    /// Creative grade applied after display encoding.
    pub look: Look,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Pipeline {
    /// Creates a pipeline with unit exposure and no look.
    pub fn new() -> Self {
        Self {
            exposure_offset: 1.0,
            look: Look::None,
        }
    }

    /// Sets the exposure gain.
    pub fn with_exposure(mut self, exposure_offset: f64) -> Self {
        self.exposure_offset = exposure_offset;
        self
    }

    /// Sets the creative look.
    pub fn with_look(mut self, look: Look) -> Self {
        self.look = look;
        self
    }

    /// Transforms one log-encoded grid sample to display RGB.
    #[inline]
    pub fn apply(&self, rgb: [f64; 3]) -> [f64; 3] {
        let lin = [
            apple_log::decode(rgb[0], self.exposure_offset),
            apple_log::decode(rgb[1], self.exposure_offset),
            apple_log::decode(rgb[2], self.exposure_offset),
        ];
        let rec709_lin = gamut::rec2020_to_rec709(lin);
        let display = rec709::oetf_rgb(rec709_lin);
        self.look.apply(display)
    }
}
