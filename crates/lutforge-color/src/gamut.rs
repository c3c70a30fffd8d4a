//! Wide-gamut to Rec.709 conversion.
//!
//! Camera material decoded from log lives in a wider gamut than the
//! Rec.709 display target. This module applies a fixed approximation of
//! the Rec.2020 to Rec.709 primary conversion followed by a hard clip.
//!
//! The clip is a plain per-channel clamp, not a perceptual gamut
//! compression: saturated colors outside the target gamut lose hue
//! accuracy. That trade-off is part of the baked look.

// ============================================================================
// Rec.2020 -> Rec.709 approximation
// ============================================================================

/// Approximate Rec.2020 to Rec.709 conversion matrix (row-major).
///
/// Rows sum to ~1.0 so neutral axis values are preserved before the clip.
pub const REC2020_TO_REC709: [[f64; 3]; 3] = [
    [1.660, -0.587, -0.073],
    [-0.124, 1.132, -0.008],
    [-0.018, -0.100, 1.118],
];

/// Converts a linear Rec.2020 triplet to linear Rec.709 with a hard clip.
///
/// All three output channels are computed from the unclamped inputs
/// first; each is then clamped to [0, 1] independently.
#[inline]
pub fn rec2020_to_rec709(rgb: [f64; 3]) -> [f64; 3] {
    let m = &REC2020_TO_REC709;
    let r = m[0][0] * rgb[0] + m[0][1] * rgb[1] + m[0][2] * rgb[2];
    let g = m[1][0] * rgb[0] + m[1][1] * rgb[1] + m[1][2] * rgb[2];
    let b = m[2][0] * rgb[0] + m[2][1] * rgb[1] + m[2][2] * rgb[2];
    [r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_white_preserved() {
        // Each matrix row sums to 1.0 up to rounding
        let out = rec2020_to_rec709([1.0, 1.0, 1.0]);
        for c in out {
            assert!((c - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_black_preserved() {
        assert_eq!(rec2020_to_rec709([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_known_value() {
        let [r, g, b] = rec2020_to_rec709([0.5, 0.25, 0.125]);
        assert_relative_eq!(r, 0.674_125, epsilon = 1e-12);
        assert_relative_eq!(g, 0.220, epsilon = 1e-12);
        assert_relative_eq!(b, 0.105_75, epsilon = 1e-12);
    }

    #[test]
    fn test_primaries_clip() {
        // A pure Rec.2020 red expands past the Rec.709 gamut on every
        // channel; the clip pins it to the red primary.
        assert_eq!(rec2020_to_rec709([1.0, 0.0, 0.0]), [1.0, 0.0, 0.0]);
        assert_eq!(rec2020_to_rec709([0.0, 1.0, 0.0]), [0.0, 1.0, 0.0]);
        assert_eq!(rec2020_to_rec709([0.0, 0.0, 1.0]), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_output_always_in_range() {
        for i in 0..=4 {
            for j in 0..=4 {
                for k in 0..=4 {
                    let rgb = [i as f64 / 4.0, j as f64 / 4.0, k as f64 / 4.0];
                    let out = rec2020_to_rec709(rgb);
                    for (c, v) in out.iter().enumerate() {
                        assert!(
                            (0.0..=1.0).contains(v),
                            "channel {c} out of range for input {rgb:?}: {v}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_cross_channel_before_clip() {
        // Red overshoots 1.0 here (1.660*0.8 - 0.073*0.5 = 1.2915), so
        // blue must be computed from the raw input red: an in-place
        // implementation that clips red first would emit
        // -0.018*1.0 + 1.118*0.5 = 0.541 instead.
        let [r, _, b] = rec2020_to_rec709([0.8, 0.0, 0.5]);
        assert_eq!(r, 1.0);
        assert!((b - (-0.018 * 0.8 + 1.118 * 0.5)).abs() < 1e-12);
    }
}
