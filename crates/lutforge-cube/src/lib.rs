//! # lutforge-cube
//!
//! LUT configuration records and `.cube` generation.
//!
//! A configuration is a small JSON document describing one LUT: grid
//! resolution, exposure, and an optional look. [`generate`] bakes it
//! through the display pipeline into `.cube` text.
//!
//! # Output Format
//!
//! ```text
//! # Generated Cinematic LUT for Apple Log to Rec.709 conversion
//! LUT_3D_SIZE 17
//! 0.000000 0.000000 0.000000
//! ...
//! 1.000000 1.000000 1.000000
//! ```
//!
//! One data line per grid point, six decimal places, blue index fastest.
//! No TITLE or DOMAIN keywords are emitted; the domain is always the
//! unit cube.
//!
//! # Usage
//!
//! ```rust
//! use lutforge_cube::{generate, LutConfig};
//!
//! let config = LutConfig::parse(r#"{"size": 2}"#)?;
//! let cube = generate(&config)?;
//! assert!(cube.starts_with("# Generated Cinematic LUT"));
//! # Ok::<(), lutforge_cube::LutError>(())
//! ```
//!
//! # Dependencies
//!
//! - `lutforge-color` - The display pipeline
//! - [`serde`] / [`serde_json`] - Configuration parsing
//! - [`thiserror`] - Error handling
//!
//! # Used By
//!
//! - `lutforge` binary - Batch generation

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod config;
mod error;
pub mod cube;

pub use config::LutConfig;
pub use cube::{generate, write_file};
pub use error::{LutError, LutResult};
