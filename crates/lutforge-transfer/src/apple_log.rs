//! Simplified Apple Log decode.
//!
//! A deliberately simplified stand-in for the Apple Log curve, used for
//! stylized LUT baking rather than colorimetric accuracy. The full curve
//! (OCIO AppleCameras.cpp) has a parabolic toe and a logarithmic shoulder;
//! this approximation collapses both into a single power segment with an
//! exposure gain folded in front.
//!
//! # Formula
//!
//! ```text
//! lin = min(x * exposure, 1)^1.5
//! ```
//!
//! Only the upper bound is clamped: the baked grid always feeds values in
//! [0, 1], so negative inputs are not guarded against.
//!
//! # Range
//!
//! - Input: [0, 1] (grid sample), exposure >= 0
//! - Output: [0, 1]

/// Decodes a log-encoded value to linear light.
///
/// `exposure` is a plain multiplicative gain applied before the power
/// segment; `1.0` leaves the sample untouched.
///
/// # Formula
///
/// ```text
/// lin = min(x * exposure, 1)^1.5
/// ```
#[inline]
pub fn decode(x: f64, exposure: f64) -> f64 {
    (x * exposure).min(1.0).powf(1.5)
}

/// Encodes linear light back to the log signal at unit exposure.
///
/// Inverse of the power segment of [`decode`]; only exact for inputs that
/// did not saturate the `min` clamp.
#[inline]
pub fn encode(linear: f64) -> f64 {
    linear.powf(1.0 / 1.5)
}

// ============================================================================
// Tests
// ============================================================================
