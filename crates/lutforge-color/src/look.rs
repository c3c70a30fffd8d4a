//! Creative looks applied after display encoding.
//!
//! A look is a fixed stylistic grade baked into the LUT on top of the
//! technical conversion. Looks operate on display-referred values and
//! only ever clamp the upper bound; the conversion ahead of them keeps
//! the lower bound non-negative.
//!
//! # Looks
//!
//! - **TealOrange**: pushes shadows toward teal and highlights toward
//!   orange, split at mid luminance:
//!
//!   ```text
//!   L = 0.2126*R + 0.7152*G + 0.0722*B
//!   L < 0.5:  R' = R*0.95, B' = B*1.1    (cool shadows)
//!   L >= 0.5: R' = R*1.1,  B' = B*0.95   (warm highlights)
//!   out = 0.7*in + 0.3*graded            (green grades to itself)
//!   ```
//!
//! - **WarmVintage**: warm cast plus a gentle contrast lift:
//!
//!   ```text
//!   R *= 1.05, B *= 0.95
//!   out = 0.9*in + 0.1*0.5               (all channels toward mid gray)
//!   ```
//!
//! # Example
//!
//! ```rust
//! use lutforge_color::Look;
//!
//! let look = Look::parse("TealOrange");
//! let rgb = look.apply([0.25, 0.25, 0.25]);
//! assert_eq!(rgb[1], 0.25);
//! ```

// Rec.709 luma weights
const LUMA_R: f64 = 0.2126;
const LUMA_G: f64 = 0.7152;
const LUMA_B: f64 = 0.0722;

/// A stylistic grade selected by name in the LUT configuration.
///
/// Selection is case-insensitive; unrecognized names fall back to
/// [`Look::None`] so a typo in a config yields a technically correct
/// LUT rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Look {
    /// No grade; the technical conversion only.
    #[default]
    None,
    /// Teal shadows, orange highlights.
    TealOrange,
    /// Warm cast with lifted blacks.
    WarmVintage,
}

impl Look {
    /// Parses a look name from a configuration string.
    ///
    /// Matching is case-insensitive. Unknown names (and the empty
    /// string) select [`Look::None`].
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "tealorange" => Look::TealOrange,
            "warmvintage" => Look::WarmVintage,
            _ => Look::None,
        }
    }

    /// Applies the grade to a display-referred RGB triplet.
    #[inline]
    pub fn apply(&self, rgb: [f64; 3]) -> [f64; 3] {
        match self {
            Look::None => rgb,
            Look::TealOrange => teal_orange(rgb),
            Look::WarmVintage => warm_vintage(rgb),
        }
    }
}

/// Teal/orange split-tone: cool shadows, warm highlights, 30% strength.
#[inline]
fn teal_orange(rgb: [f64; 3]) -> [f64; 3] {
    let [r, g, b] = rgb;
    let luminance = LUMA_R * r + LUMA_G * g + LUMA_B * b;

    let (new_r, new_b) = if luminance < 0.5 {
        (r * 0.95, b * 1.1)
    } else {
        (r * 1.1, b * 0.95)
    };

    // Green blends with itself so it stays within one ulp of the input.
    [
        (r * 0.7 + new_r * 0.3).min(1.0),
        (g * 0.7 + g * 0.3).min(1.0),
        (b * 0.7 + new_b * 0.3).min(1.0),
    ]
}

/// Warm vintage: red up, blue down, then a 10% pull toward mid gray.
#[inline]
fn warm_vintage(rgb: [f64; 3]) -> [f64; 3] {
    let r = rgb[0] * 1.05;
    let g = rgb[1];
    let b = rgb[2] * 0.95;

    [
        (r * 0.9 + 0.5 * 0.1).min(1.0),
        (g * 0.9 + 0.5 * 0.1).min(1.0),
        (b * 0.9 + 0.5 * 0.1).min(1.0),
    ]
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Look::parse("tealorange"), Look::TealOrange);
        assert_eq!(Look::parse("TealOrange"), Look::TealOrange);
        assert_eq!(Look::parse("TEALORANGE"), Look::TealOrange);
        assert_eq!(Look::parse("WarmVintage"), Look::WarmVintage);
        assert_eq!(Look::parse("none"), Look::None);
    }

    #[test]
    fn parse_unknown_falls_back_to_none() {
        assert_eq!(Look::parse("sepia"), Look::None);
        assert_eq!(Look::parse(""), Look::None);
        assert_eq!(Look::parse("teal orange"), Look::None);
    }

    #[test]
    fn none_is_passthrough() {
        let rgb = [0.123, 0.456, 0.789];
        assert_eq!(Look::None.apply(rgb), rgb);
    }

    #[test]
    fn teal_orange_green_self_blend() {
        // The 70/30 self-blend keeps green within one ulp of the input,
        // so the six-decimal output never moves.
        for &g in &[0.0, 0.25, 0.5, 0.75, 1.0] {
            let out = Look::TealOrange.apply([0.3, g, 0.6]);
            assert!((out[1] - g).abs() <= g * f64::EPSILON, "g={g}, out={}", out[1]);
            assert_eq!(format!("{:.6}", out[1]), format!("{g:.6}"));
        }
    }

    #[test]
    fn teal_orange_shadows_cool() {
        // L = 0.2 < 0.5: red pulled down, blue pushed up
        let out = Look::TealOrange.apply([0.2, 0.2, 0.2]);
        assert!((out[0] - 0.197).abs() < EPSILON);
        assert!((out[2] - 0.206).abs() < EPSILON);
        assert!(out[0] < 0.2 && out[2] > 0.2);
    }

    #[test]
    fn teal_orange_highlights_warm() {
        // L = 0.8 >= 0.5: red pushed up, blue pulled down
        let out = Look::TealOrange.apply([0.8, 0.8, 0.8]);
        assert!((out[0] - 0.824).abs() < EPSILON);
        assert!((out[2] - 0.788).abs() < EPSILON);
        assert!(out[0] > 0.8 && out[2] < 0.8);
    }

    #[test]
    fn teal_orange_clamps_upper() {
        // Highlight red overshoots 1.0 before the clamp
        let out = Look::TealOrange.apply([1.0, 1.0, 1.0]);
        assert_eq!(out[0], 1.0);
        assert!(out[2] < 1.0);
    }

    #[test]
    fn warm_vintage_known_values() {
        let out = Look::WarmVintage.apply([0.5, 0.5, 0.5]);
        assert!((out[0] - 0.522_5).abs() < EPSILON);
        assert!((out[1] - 0.5).abs() < EPSILON);
        assert!((out[2] - 0.477_5).abs() < EPSILON);
    }

    #[test]
    fn warm_vintage_lifts_black() {
        // The mid-gray pull raises pure black on every channel
        let out = Look::WarmVintage.apply([0.0, 0.0, 0.0]);
        for c in out {
            assert!((c - 0.05).abs() < EPSILON);
        }
    }

    #[test]
    fn grades_stay_bounded() {
        for look in [Look::TealOrange, Look::WarmVintage] {
            for i in 0..=4 {
                for j in 0..=4 {
                    for k in 0..=4 {
                        let rgb = [i as f64 / 4.0, j as f64 / 4.0, k as f64 / 4.0];
                        let out = look.apply(rgb);
                        for v in out {
                            assert!(v <= 1.0, "{look:?} exceeded 1.0 for {rgb:?}: {v}");
                        }
                    }
                }
            }
        }
    }
}
