//! # lutforge-transfer
//!
//! Transfer functions for the LUT baking pipeline.
//!
//! Transfer functions convert between linear light values and encoded values
//! for storage, display, or transmission.
//!
//! # Terminology
//!
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded (e.g., for display)
//! - **Decode**: Encoded -> Linear (camera log to scene light)
//!
//! # Supported Transfer Functions
//!
//! | Function | Use Case | Range |
//! |----------|----------|-------|
//! | [`apple_log`] | Simplified Apple Log decode for LUT baking | [0, 1] |
//! | [`rec709`] | HDTV broadcast encoding | [0, 1] |
//!
//! # Usage
//!
//! ```rust
//! use lutforge_transfer::{apple_log, rec709};
//!
//! // Decode a log-encoded grid value to linear at unit exposure
//! let linear = apple_log::decode(0.5, 1.0);
//!
//! // Encode linear to Rec.709 for display
//! let encoded = rec709::oetf(linear);
//! ```
//!
//! All math is carried out in `f64`; the baked LUT text is formatted to six
//! decimal places downstream, and 64-bit intermediates keep the formatted
//! output stable across platforms.
//!
//! # Used By
//!
//! - `lutforge-color` - Full display pipeline
//! - `lutforge-cube` - Grid generation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod apple_log;
pub mod rec709;

// Re-export common functions
pub use apple_log::{decode as apple_log_decode, encode as apple_log_encode};
pub use rec709::{eotf as rec709_eotf, oetf as rec709_oetf};
