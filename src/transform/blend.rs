//! # Alpha Blend
//!
//! Blends two buffers of independent size into one sized to their bounding
//! rectangle. Both inputs are anchored at the top-left corner.
//!
//! ```text
//!  0        min_cols      max_cols
//!  ┌──────────┬─────────────┐ 0
//!  │ overlap  │ right band  │
//!  │ (blend)  │             │
//!  ├──────────┼─────────────┤ min_rows
//!  │ bottom   │ corner      │
//!  │ band     │             │
//!  └──────────┴─────────────┘ max_rows
//! ```
//!
//! The overlap is `trunc(a * alpha + b * (1 - alpha))` per channel. The rest
//! of the output is filled by one [`QuadrantFill`] strategy chosen from the
//! two extents.
//!
//! ## Gap
//!
//! When the inputs share one dimension exactly (e.g. same height, different
//! widths) no strategy applies. [`GapPolicy::Black`] leaves that region
//! black; [`GapPolicy::Fill`] copies each pixel from whichever input covers
//! it.

use crate::buffer::{Pixel, PixelBuffer};
use crate::error::Result;
use std::ops::Range;

/// How the non-overlapping region is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadrantFill {
    /// A is strictly smaller than B in both dimensions: everything else comes from B.
    AInsideB,
    /// B is strictly smaller than A in both dimensions: everything else comes from A.
    BInsideA,
    /// A is wider, B is taller: right band from A, bottom band from B.
    AWideBTall,
    /// A is taller, B is wider: right band from B, bottom band from A.
    ATallBWide,
}

impl QuadrantFill {
    /// Pick the strategy for two extents, or `None` when they share a dimension.
    pub fn select(a: &PixelBuffer, b: &PixelBuffer) -> Option<Self> {
        use std::cmp::Ordering::{Greater, Less};

        match (a.rows().cmp(&b.rows()), a.cols().cmp(&b.cols())) {
            (Less, Less) => Some(Self::AInsideB),
            (Greater, Greater) => Some(Self::BInsideA),
            (Less, Greater) => Some(Self::AWideBTall),
            (Greater, Less) => Some(Self::ATallBWide),
            _ => None,
        }
    }
}

/// Behavior for extents that no [`QuadrantFill`] covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GapPolicy {
    /// Leave the uncovered region black.
    #[default]
    Black,
    /// Copy each uncovered pixel from the input that contains it.
    Fill,
}

/// Blend `a` over `b` with weight `alpha` for `a`.
///
/// `alpha` is expected in `[0, 1]`; the dispatcher checks it.
pub fn blend(
    a: &PixelBuffer,
    b: &PixelBuffer,
    alpha: f64,
    gaps: GapPolicy,
) -> Result<PixelBuffer> {
    let min_rows = a.rows().min(b.rows());
    let max_rows = a.rows().max(b.rows());
    let min_cols = a.cols().min(b.cols());
    let max_cols = a.cols().max(b.cols());

    let mut output = PixelBuffer::new(max_rows, max_cols)?;

    for i in 0..min_rows {
        for j in 0..min_cols {
            let pa = a.get(i, j).channels();
            let pb = b.get(i, j).channels();
            let mixed = std::array::from_fn(|c| {
                (pa[c] as f64 * alpha + pb[c] as f64 * (1.0 - alpha)) as u8
            });
            output.set(i, j, Pixel::from_channels(mixed));
        }
    }

    let right = (0..max_rows, min_cols..max_cols);
    let bottom = (min_rows..max_rows, 0..min_cols);

    match QuadrantFill::select(a, b) {
        Some(fill) => {
            log::debug!("blend {:?}: overlap {}x{}", fill, min_rows, min_cols);
            match fill {
                QuadrantFill::AInsideB => {
                    copy_region(&mut output, b, right);
                    copy_region(&mut output, b, bottom);
                }
                QuadrantFill::BInsideA => {
                    copy_region(&mut output, a, right);
                    copy_region(&mut output, a, bottom);
                }
                QuadrantFill::AWideBTall => {
                    copy_region(&mut output, a, (0..min_rows, min_cols..max_cols));
                    copy_region(&mut output, b, bottom);
                }
                QuadrantFill::ATallBWide => {
                    copy_region(&mut output, b, (0..min_rows, min_cols..max_cols));
                    copy_region(&mut output, a, bottom);
                }
            }
        }
        None if (min_rows, min_cols) == (max_rows, max_cols) => {}
        None => match gaps {
            GapPolicy::Black => {
                log::warn!(
                    "blend of {}x{} and {}x{}: extents share a dimension, leaving non-overlap black",
                    a.rows(),
                    a.cols(),
                    b.rows(),
                    b.cols()
                );
            }
            GapPolicy::Fill => {
                for source in [a, b] {
                    copy_region(&mut output, source, right.clone());
                    copy_region(&mut output, source, bottom.clone());
                }
            }
        },
    }

    Ok(output)
}

/// Copy the part of `(rows, cols)` that lies inside `source`, using its own stride.
fn copy_region(
    output: &mut PixelBuffer,
    source: &PixelBuffer,
    (rows, cols): (Range<usize>, Range<usize>),
) {
    let rows = rows.start..rows.end.min(source.rows());
    let cols = cols.start..cols.end.min(source.cols());
    for i in rows {
        for j in cols.clone() {
            output.set(i, j, source.get(i, j));
        }
    }
}
