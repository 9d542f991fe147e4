//! Per-pixel transforms: grayscale and saturation.
//!
//! Both use the same truncated luminance:
//!
//! ```text
//! gray = trunc(0.30 * R + 0.59 * G + 0.11 * B)
//! ```

use crate::buffer::{Pixel, PixelBuffer};
use crate::config::TransformConfig;
use crate::error::Result;

/// Truncated luminance of a pixel.
#[inline]
pub fn luminance(pixel: Pixel) -> u8 {
    let [wr, wg, wb] = TransformConfig::DEFAULT.luma_weights;
    (wr * pixel.r as f64 + wg * pixel.g as f64 + wb * pixel.b as f64) as u8
}

/// Replace every pixel with its luminance on all three channels.
pub fn grayscale(input: &PixelBuffer) -> Result<PixelBuffer> {
    let mut output = PixelBuffer::new(input.rows(), input.cols())?;
    for (dst, &src) in output.pixels_mut().iter_mut().zip(input.pixels()) {
        *dst = Pixel::gray(luminance(src));
    }
    Ok(output)
}

/// Push each channel away from (or toward) the pixel's gray value.
///
/// `c' = clamp(trunc((c - gray) * scale) + gray, 0, 255)`
///
/// - `scale = 0`: grayscale
/// - `scale = 1`: identity
/// - `scale > 1`: oversaturated, clamped
///
/// Negative scales invert hue around gray; NaN collapses to gray.
pub fn saturate(input: &PixelBuffer, scale: f64) -> Result<PixelBuffer> {
    let mut output = PixelBuffer::new(input.rows(), input.cols())?;
    for (dst, &src) in output.pixels_mut().iter_mut().zip(input.pixels()) {
        let gray = luminance(src);
        *dst = Pixel::from_channels(src.channels().map(|c| scale_channel(c, gray, scale)));
    }
    Ok(output)
}

#[inline]
fn scale_channel(channel: u8, gray: u8, scale: f64) -> u8 {
    let diff = channel as i32 - gray as i32;
    // `as i64` saturates and maps NaN to 0
    let scaled = (diff as f64 * scale) as i64;
    (scaled + gray as i64).clamp(0, 255) as u8
}
