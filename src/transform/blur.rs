//! # Gaussian Blur
//!
//! Direct (non-separable) 2D convolution with a square Gaussian kernel.
//!
//! ## Kernel
//!
//! ```text
//! N = trunc(sigma * 10), +1 if even
//! w(dx, dy) = 1 / (2π σ²) · exp(-(dx² + dy²) / (2σ²))
//! ```
//!
//! ## Edges
//!
//! Taps that fall outside the image are skipped and the sum is divided by
//! the weights that were actually used, so border pixels are averaged over a
//! smaller window instead of being darkened by zero padding:
//!
//! ```text
//! out = Σ w·c / Σ w     (both sums over in-bounds taps only)
//! ```

use crate::buffer::{Pixel, PixelBuffer};
use crate::config::TransformConfig;
use crate::error::{PpmfxError, Result};
use std::f64::consts::PI;

/// Square Gaussian kernel of odd side length.
#[derive(Debug, Clone)]
pub struct GaussianKernel {
    side: usize,
    /// Weights scaled so the center tap is exactly 1.0. Ratios between taps,
    /// and therefore every `Σ w·c / Σ w`, match the analytic kernel.
    taps: Vec<f64>,
}

impl GaussianKernel {
    /// Build the kernel for `sigma`. Fails only when the weights cannot be allocated.
    pub fn new(sigma: f64) -> Result<Self> {
        let side = TransformConfig::DEFAULT.kernel_side(sigma);
        let len = side.checked_mul(side).ok_or_else(|| {
            PpmfxError::Allocation(format!("{}x{} gaussian kernel", side, side))
        })?;

        let mut taps = Vec::new();
        taps.try_reserve_exact(len).map_err(|e| {
            PpmfxError::Allocation(format!("{}x{} gaussian kernel: {}", side, side, e))
        })?;

        let center = (side / 2) as i64;
        let peak = gaussian(sigma, 0, 0);
        for i in 0..side as i64 {
            for j in 0..side as i64 {
                taps.push(gaussian(sigma, j - center, i - center) / peak);
            }
        }

        Ok(Self { side, taps })
    }

    /// Side length `N` (always odd).
    pub fn side(&self) -> usize {
        self.side
    }

    /// Distance from the center tap to the edge (`N / 2`).
    pub fn radius(&self) -> usize {
        self.side / 2
    }

    /// Relative tap weight at offset `(dx, dy)`; `None` outside the kernel.
    #[inline]
    fn tap(&self, dx: i64, dy: i64) -> Option<f64> {
        let r = self.radius() as i64;
        if dx.abs() > r || dy.abs() > r {
            return None;
        }
        let idx = (dy + r) as usize * self.side + (dx + r) as usize;
        Some(self.taps[idx])
    }

    /// Convolve `input`, renormalizing by the in-bounds weight sum at every pixel.
    pub fn apply(&self, input: &PixelBuffer) -> Result<PixelBuffer> {
        let rows = input.rows() as i64;
        let cols = input.cols() as i64;
        let r = self.radius() as i64;
        let mut output = PixelBuffer::new(input.rows(), input.cols())?;

        for y in 0..rows {
            for x in 0..cols {
                let mut sums = [0.0f64; 3];
                let mut norm = 0.0f64;

                for dy in -r..=r {
                    let yy = y + dy;
                    if yy < 0 || yy >= rows {
                        continue;
                    }
                    for dx in -r..=r {
                        let xx = x + dx;
                        if xx < 0 || xx >= cols {
                            continue;
                        }
                        let Some(w) = self.tap(dx, dy) else {
                            continue;
                        };
                        let channels = input.get(yy as usize, xx as usize).channels();
                        for (sum, c) in sums.iter_mut().zip(channels) {
                            *sum += c as f64 * w;
                        }
                        norm += w;
                    }
                }

                // The center tap is always in bounds, so norm >= 1.0
                let pixel = Pixel::from_channels(sums.map(|s| (s / norm) as u8));
                output.set(y as usize, x as usize, pixel);
            }
        }

        Ok(output)
    }
}

#[inline]
fn gaussian(sigma: f64, dx: i64, dy: i64) -> f64 {
    let s2 = sigma * sigma;
    let d2 = (dx * dx + dy * dy) as f64;
    (1.0 / (2.0 * PI * s2)) * (-d2 / (2.0 * s2)).exp()
}

/// Gaussian blur with standard deviation `sigma`.
///
/// The kernel is dropped before returning on every path; an allocation
/// failure for either the kernel or the output aborts the whole blur.
pub fn blur(input: &PixelBuffer, sigma: f64) -> Result<PixelBuffer> {
    let kernel = GaussianKernel::new(sigma)?;
    log::debug!(
        "blur sigma={} kernel {}x{} on {}x{}",
        sigma,
        kernel.side(),
        kernel.side(),
        input.rows(),
        input.cols()
    );
    kernel.apply(input)
}
