//! # Pixel Buffers
//!
//! [`PixelBuffer`] owns a contiguous row-major array of 8-bit RGB pixels.
//! Every transform takes buffers by reference and returns a freshly
//! allocated one, so inputs are never mutated.
//!
//! ## Layout
//!
//! ```text
//!            col 0   col 1   ...   col (cols-1)
//! row 0    │ RGB   │ RGB   │ ... │ RGB          │   index = row * cols + col
//! row 1    │ RGB   │ RGB   │ ... │ RGB          │
//! ...
//! ```
//!
//! ## Example
//!
//! ```
//! use ppmfx::buffer::{Pixel, PixelBuffer};
//!
//! let mut buffer = PixelBuffer::new(2, 3)?;
//! buffer.set(1, 2, Pixel::new(255, 0, 0));
//! assert_eq!(buffer.get(1, 2), Pixel::new(255, 0, 0));
//! assert_eq!(buffer.len(), 6);
//! # Ok::<(), ppmfx::PpmfxError>(())
//! ```

use crate::error::{PpmfxError, Result};

/// A single RGB pixel with 8-bit channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value)
    }

    #[inline]
    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    #[inline]
    pub fn from_channels([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// Owned row-major RGB image.
///
/// `pixels().len() == rows * cols` and both dimensions are at least 1 for
/// every buffer that construction hands out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    rows: usize,
    cols: usize,
    data: Vec<Pixel>,
}

impl PixelBuffer {
    /// Allocate a black buffer of `rows x cols` pixels.
    ///
    /// Storage is reserved with `try_reserve_exact`, so an oversized request
    /// comes back as [`PpmfxError::Allocation`] rather than aborting.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|e| {
            PpmfxError::Allocation(format!("{}x{} pixel buffer: {}", rows, cols, e))
        })?;
        data.resize(len, Pixel::BLACK);
        Ok(Self { rows, cols, data })
    }

    /// Wrap existing pixel data, checking it matches the dimensions.
    pub fn from_pixels(rows: usize, cols: usize, data: Vec<Pixel>) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        if data.len() != len {
            return Err(PpmfxError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols, data })
    }

    /// Height in pixels.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Width in pixels.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total pixel count (`rows * cols`).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false for a constructed buffer; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Pixel {
        self.data[self.index(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, pixel: Pixel) {
        let idx = self.index(row, col);
        self.data[idx] = pixel;
    }

    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.data
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.data
    }

    /// One row of pixels.
    #[inline]
    pub fn row(&self, row: usize) -> &[Pixel] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Flat `R G B R G B ...` bytes, the layout of a PPM payload.
    pub fn as_bytes(&self) -> Vec<u8> {
        self.data.iter().flat_map(|p| p.channels()).collect()
    }

    /// Convert to an [`image::RgbImage`] for PNG export.
    pub fn to_rgb_image(&self) -> Result<image::RgbImage> {
        image::RgbImage::from_raw(self.cols as u32, self.rows as u32, self.as_bytes())
            .ok_or_else(|| PpmfxError::Image("Failed to create image buffer".to_string()))
    }
}

fn checked_len(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(PpmfxError::InvalidDimensions { rows, cols });
    }
    rows.checked_mul(cols).ok_or_else(|| {
        PpmfxError::Allocation(format!("{}x{} pixel count overflows", rows, cols))
    })
}
