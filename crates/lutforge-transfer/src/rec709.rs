//! Rec.709 (BT.709) transfer function.
//!
//! The Rec.709 OETF is used for HDTV encoding. Note that the commonly
//! used Rec.709 EOTF is actually BT.1886 (gamma 2.4), not the inverse
//! of the OETF.
//!
//! # Range
//!
//! - Input/Output: [0, 1]
//!
//! # Reference
//!
//! ITU-R BT.709-6

/// Rec.709 OETF: Encodes linear to Rec.709.
///
/// No clamping is performed here; out-of-range inputs produce
/// out-of-range outputs.
///
/// # Formula
///
/// ```text
/// if L < 0.018:
///     V = 4.5 * L
/// else:
///     V = 1.099 * L^0.45 - 0.099
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l < 0.018 {
        4.5 * l
    } else {
        1.099 * l.powf(0.45) - 0.099
    }
}

/// Rec.709 inverse OETF: Decodes Rec.709 to linear.
///
/// Note: For display, use BT.1886 (gamma 2.4) instead.
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v < 0.081 {
        v / 4.5
    } else {
        ((v + 0.099) / 1.099).powf(1.0 / 0.45)
    }
}

/// Applies the Rec.709 OETF to an RGB triplet.
#[inline]
pub fn oetf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    [oetf(rgb[0]), oetf(rgb[1]), oetf(rgb[2])]
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_roundtrip() {
        for i in 0..=100 {
            let v = i as f64 / 100.0;
            let linear = eotf(v);
            let back = oetf(linear);
            assert_relative_eq!(v, back, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(oetf(0.0), 0.0);
        assert_relative_eq!(oetf(1.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_segment() {
        assert!((oetf(0.01) - 0.045).abs() < 1e-12);
        assert!((oetf(0.017) - 0.0765).abs() < 1e-12);
    }

    #[test]
    fn test_breakpoint_gap() {
        // The two branches do not meet at 0.018: the linear branch ends at
        // 4.5 * 0.018 = 0.081 while the power branch starts at
        // 1.099 * 0.018^0.45 - 0.099 = 0.0812480. The measured step of
        // ~2.48e-4 is part of the curve as shipped.
        let below: f64 = 4.5 * 0.018;
        let at = oetf(0.018);
        assert!((below - 0.081).abs() < 1e-12);
        assert!((at - 0.081_248_0).abs() < 1e-6);
        assert!((at - below - 2.48e-4).abs() < 1e-6);
    }

    #[test]
    fn test_monotonic() {
        let mut prev = oetf(0.0);
        for i in 1..=1000 {
            let l = i as f64 / 1000.0;
            let v = oetf(l);
            assert!(v > prev, "OETF not monotonic at l={l}");
            prev = v;
        }
    }
}
