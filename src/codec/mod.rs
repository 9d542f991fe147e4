//! # Image Codecs
//!
//! Reading and writing [`PixelBuffer`]s on disk.
//!
//! - [`ppm`]: binary PPM (`P6`), the input and output format of every operation
//! - [`save_png`]: optional PNG preview through the `image` crate

pub mod ppm;

use crate::buffer::PixelBuffer;
use crate::error::{PpmfxError, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

pub use ppm::{read_ppm, write_ppm};

/// Open and decode a PPM file.
pub fn load(path: &Path) -> Result<PixelBuffer> {
    let file = File::open(path).map_err(|source| PpmfxError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_ppm(&mut BufReader::new(file))
}

/// Encode `buffer` into a PPM file, replacing any existing file.
pub fn save(path: &Path, buffer: &PixelBuffer) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| PpmfxError::Write(format!("{}: {}", path.display(), e)))?;
    write_ppm(&mut BufWriter::new(file), buffer)
}

/// Save `buffer` as a PNG image.
pub fn save_png(path: &Path, buffer: &PixelBuffer) -> Result<()> {
    buffer
        .to_rgb_image()?
        .save(path)
        .map_err(|e| PpmfxError::Image(format!("Failed to save PNG: {}", e)))
}
