//! # lutforge-color
//!
//! Color operations for the LUT baking pipeline:
//!
//! - **Gamut conversion** - wide-gamut camera RGB to Rec.709 with hard clip
//! - **Looks** - optional stylistic grades (teal/orange, warm vintage)
//! - **Pipeline** - the fixed display chain applied to every grid sample
//!
//! # Architecture
//!
//! ```text
//!        lutforge-color
//!              |
//!      lutforge-transfer
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use lutforge_color::{Look, Pipeline};
//!
//! // Log input -> Rec.709 display with a teal/orange grade
//! let pipeline = Pipeline::new()
//!     .with_exposure(1.0)
//!     .with_look(Look::TealOrange);
//!
//! let rgb = pipeline.apply([0.5, 0.5, 0.5]);
//! assert!(rgb.iter().all(|c| (0.0..=1.0).contains(c)));
//! ```
//!
//! # Dependencies
//!
//! - `lutforge-transfer` - Log decode and Rec.709 OETF
//!
//! # Used By
//!
//! - `lutforge-cube` - Grid generation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod gamut;
pub mod look;
pub mod pipeline;

pub use look::Look;
pub use pipeline::Pipeline;

// Re-export the transfer crate for convenience
pub use lutforge_transfer as transfer;
