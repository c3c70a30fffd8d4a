//! `.cube` LUT generation.
//!
//! Bakes a [`LutConfig`] through the display pipeline into the Adobe/
//! Resolve `.cube` text format.
//!
//! # Format
//!
//! ```text
//! # Generated Cinematic LUT for Apple Log to Rec.709 conversion
//! LUT_3D_SIZE 17
//! 0.000000 0.000000 0.000000
//! ...
//! ```
//!
//! The grid is enumerated red index outermost, blue index innermost,
//! and each input coordinate is normalized as `i / (size - 1)`. Data
//! lines are fixed six-decimal, space-separated, newline-terminated.
//! Note the axis order: most `.cube` writers emit red fastest, this
//! one does not. Consumers must match it when indexing.
//!
//! # Example
//!
//! ```rust
//! use lutforge_cube::{cube, LutConfig};
//!
//! let config = LutConfig::default();
//! let text = cube::generate(&config)?;
//! assert_eq!(text.lines().count(), 2 + 17 * 17 * 17);
//! # Ok::<(), lutforge_cube::LutError>(())
//! ```

use std::fs;
use std::path::Path;

use lutforge_color::{Look, Pipeline};

use crate::config::LutConfig;
use crate::error::{LutError, LutResult};

/// Comment line emitted at the top of every generated LUT.
const HEADER_COMMENT: &str = "# Generated Cinematic LUT for Apple Log to Rec.709 conversion";

// "0.000000 0.000000 0.000000\n"
const BYTES_PER_LINE: usize = 27;

/// Capacity hint for the baked text. Absurd sizes overflow the
/// `size^3` sample count; fall back to zero and let the String grow
/// instead of panicking in the multiply.
fn capacity_hint(size: usize) -> usize {
    size.checked_pow(3)
        .and_then(|n| n.checked_mul(BYTES_PER_LINE))
        .and_then(|n| n.checked_add(64))
        .unwrap_or(0)
}

/// Bakes a configuration into `.cube` text.
///
/// The configuration is expected to have its defaults resolved (as
/// [`LutConfig::parse`] and [`LutConfig::read`] do). Sizes below 2
/// cannot be normalized onto the unit cube and are rejected.
pub fn generate(config: &LutConfig) -> LutResult<String> {
    if config.size < 2 {
        return Err(LutError::InvalidSize(config.size));
    }
    let size = config.size as usize;

    let pipeline = Pipeline::new()
        .with_exposure(config.exposure_offset)
        .with_look(Look::parse(&config.look));

    let mut out = String::with_capacity(capacity_hint(size));
    out.push_str(HEADER_COMMENT);
    out.push('\n');
    out.push_str(&format!("LUT_3D_SIZE {size}\n"));

    // Red outermost, blue fastest; normalize once per loop level.
    let max = (size - 1) as f64;
    for i in 0..size {
        let r = i as f64 / max;
        for j in 0..size {
            let g = j as f64 / max;
            for k in 0..size {
                let b = k as f64 / max;
                let rgb = pipeline.apply([r, g, b]);
                out.push_str(&format!("{:.6} {:.6} {:.6}\n", rgb[0], rgb[1], rgb[2]));
            }
        }
    }

    Ok(out)
}

/// Bakes a configuration and writes the result to `path`.
///
/// # Example
///
/// ```rust,no_run
/// use lutforge_cube::{cube, LutConfig};
///
/// let config = LutConfig::read("configs/day.json")?;
/// cube::write_file("output/day.cube", &config)?;
/// # Ok::<(), lutforge_cube::LutError>(())
/// ```
pub fn write_file<P: AsRef<Path>>(path: P, config: &LutConfig) -> LutResult<()> {
    let text = generate(config)?;
    fs::write(path.as_ref(), text)?;
    Ok(())
}
