//! # ppmfx - Batch PPM Image Transforms
//!
//! ppmfx reads binary PPM (`P6`) images, applies one transform and writes
//! the result. It provides:
//!
//! - **Pixel buffers**: owned row-major 8-bit RGB images with fallible allocation
//! - **Transforms**: grayscale, alpha blend, rotate, pointilism, Gaussian blur, saturate
//! - **Codec**: PPM decode/encode, PNG preview export
//!
//! ## Quick Start
//!
//! ```no_run
//! use ppmfx::{codec, transform::Operation};
//! use rand::SeedableRng;
//! use std::path::Path;
//!
//! let input = codec::load(Path::new("trees.ppm"))?;
//!
//! let op = Operation::Blur { sigma: 1.5 };
//! op.validate()?;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let output = op.apply(&input, &mut rng)?;
//! codec::save(Path::new("trees-blur.ppm"), &output)?;
//!
//! # Ok::<(), ppmfx::PpmfxError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`buffer`] | `Pixel` and `PixelBuffer` |
//! | [`transform`] | Transforms and the `Operation` registry |
//! | [`codec`] | PPM and PNG I/O |
//! | [`config`] | Transform constants and parameter limits |
//! | [`report`] | JSON run summary |
//! | [`error`] | Error types and exit codes |

pub mod buffer;
pub mod codec;
pub mod config;
pub mod error;
pub mod report;
pub mod transform;

// Re-exports for convenience
pub use buffer::{Pixel, PixelBuffer};
pub use config::TransformConfig;
pub use error::PpmfxError;
pub use transform::Operation;
