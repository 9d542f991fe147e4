//! # Pointilism
//!
//! Repaints an image as randomly placed filled disks ("dabs") on black.
//!
//! Each dab samples the input color at a random position and paints a disk
//! of random radius around it:
//!
//! ```text
//! r = 2              r = 3
//! . . # . .          . . . # . . .
//! . # # # .          . # # # # # .
//! # # @ # #          . # # # # # .
//! . # # # .          # # # @ # # #      (@ = sampled pixel)
//! . . # . .          . # # # # # .
//!                    . # # # # # .
//!                    . . . # . . .
//! ```
//!
//! The random source is passed in, so a seeded [`rand::rngs::StdRng`] gives
//! reproducible output.

use crate::buffer::{Pixel, PixelBuffer};
use crate::config::TransformConfig;
use crate::error::Result;
use rand::Rng;

/// Dab count and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointilismParams {
    /// Dabs per pixel. Default: 0.03
    pub density: f64,
    /// Smallest radius, inclusive. Default: 1
    pub min_radius: i64,
    /// Largest radius, inclusive. Default: 5
    pub max_radius: i64,
}

impl Default for PointilismParams {
    fn default() -> Self {
        let config = TransformConfig::DEFAULT;
        Self {
            density: config.dab_density,
            min_radius: config.dab_min_radius,
            max_radius: config.dab_max_radius,
        }
    }
}

impl PointilismParams {
    /// `floor(density * rows * cols)`.
    pub fn dab_count(&self, rows: usize, cols: usize) -> usize {
        (self.density * (rows * cols) as f64) as usize
    }
}

/// Pointilism with the default dab parameters.
pub fn pointilism<R: Rng>(input: &PixelBuffer, rng: &mut R) -> Result<PixelBuffer> {
    pointilism_with(input, &PointilismParams::default(), rng)
}

/// Paint `params.dab_count(rows, cols)` dabs sampled from `input`.
///
/// For every dab the generator is drawn in order: column, row, radius.
/// A disk cell is painted when its column is inside `[0, cols)` and its
/// linear index is inside `[0, rows * cols)`.
pub fn pointilism_with<R: Rng>(
    input: &PixelBuffer,
    params: &PointilismParams,
    rng: &mut R,
) -> Result<PixelBuffer> {
    let mut output = PixelBuffer::new(input.rows(), input.cols())?;
    let rows = input.rows() as i64;
    let cols = input.cols() as i64;
    let dabs = params.dab_count(input.rows(), input.cols());

    log::debug!("pointilism: {} dabs on {}x{}", dabs, rows, cols);

    for _ in 0..dabs {
        let col = rng.random_range(0..cols);
        let row = rng.random_range(0..rows);
        let radius = rng.random_range(params.min_radius..=params.max_radius);

        let color = input.get(row as usize, col as usize);
        paint_dab(&mut output, row, col, radius, color);
    }

    Ok(output)
}

/// Fill the cells with `di² + dj² ≤ radius²` around `(row, col)`.
///
/// A cell is kept when its column lies in `[0, cols)` and its linear index
/// in `[0, rows * cols)`.
fn paint_dab(output: &mut PixelBuffer, row: i64, col: i64, radius: i64, color: Pixel) {
    let cols = output.cols() as i64;
    let num_pix = output.len() as i64;
    let center = row * cols + col;

    for di in -radius..=radius {
        for dj in -radius..=radius {
            if di * di + dj * dj > radius * radius {
                continue;
            }
            let col_pos = col + dj;
            let index = center + di * cols + dj;
            if col_pos < 0 || col_pos >= cols || index < 0 || index >= num_pix {
                continue;
            }
            output.pixels_mut()[index as usize] = color;
        }
    }
}
