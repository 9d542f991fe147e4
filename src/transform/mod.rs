//! # Transforms
//!
//! Every transform reads one buffer (two for [`blend`]) and returns a new
//! one. Inputs are never modified.
//!
//! | Operation | Module | Parameters |
//! |-----------|--------|------------|
//! | `grayscale` | [`point`] | |
//! | `blend` | [`blend`] | second image, alpha ∈ [0, 1] |
//! | `rotate-ccw` | [`geometric`] | |
//! | `pointilism` | [`pointilism`] | random source |
//! | `blur` | [`blur`] | sigma ≥ 0.1 |
//! | `saturate` | [`point`] | scale ≥ 0 |
//!
//! ## Adding a New Operation
//!
//! 1. Implement it in its own module as `fn(&PixelBuffer, ...) -> Result<PixelBuffer>`
//! 2. Add a variant to [`Operation`] and a name to [`OPERATIONS`]
//! 3. Handle it in [`Operation::validate`] and [`Operation::apply`]
//! 4. Add the subcommand in `main.rs`
//!
//! ## Example
//!
//! ```
//! use ppmfx::buffer::{Pixel, PixelBuffer};
//! use ppmfx::transform::Operation;
//! use rand::SeedableRng;
//!
//! let input = PixelBuffer::from_pixels(1, 2, vec![Pixel::new(255, 0, 0), Pixel::gray(9)])?;
//! let op = Operation::Saturate { scale: 0.0 };
//! op.validate()?;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//! let output = op.apply(&input, &mut rng)?;
//! assert_eq!(output.get(0, 0), Pixel::gray(76));
//! # Ok::<(), ppmfx::PpmfxError>(())
//! ```

pub mod blend;
pub mod blur;
pub mod geometric;
pub mod point;
pub mod pointilism;

use crate::buffer::PixelBuffer;
use crate::config::TransformConfig;
use crate::error::{PpmfxError, Result};
use rand::Rng;

pub use blend::{GapPolicy, QuadrantFill};
pub use blur::GaussianKernel;
pub use pointilism::PointilismParams;

/// All operation names, in display order.
pub const OPERATIONS: &[&str] = &[
    "grayscale",
    "blend",
    "rotate-ccw",
    "pointilism",
    "blur",
    "saturate",
];

/// One fully parameterized transform.
///
/// `Blend` owns its second input; it is released when the operation is dropped.
#[derive(Debug, Clone)]
pub enum Operation {
    Grayscale,
    Blend {
        other: PixelBuffer,
        alpha: f64,
        gaps: GapPolicy,
    },
    RotateCcw,
    Pointilism(PointilismParams),
    Blur { sigma: f64 },
    Saturate { scale: f64 },
}

impl Operation {
    /// Operation name as used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Grayscale => "grayscale",
            Operation::Blend { .. } => "blend",
            Operation::RotateCcw => "rotate-ccw",
            Operation::Pointilism(_) => "pointilism",
            Operation::Blur { .. } => "blur",
            Operation::Saturate { .. } => "saturate",
        }
    }

    /// Check scalar parameters against [`TransformConfig::DEFAULT`] limits.
    ///
    /// The transforms themselves do not re-check these ranges.
    pub fn validate(&self) -> Result<()> {
        let config = TransformConfig::DEFAULT;
        match *self {
            Operation::Blend { alpha, .. } if !config.alpha_in_range(alpha) => {
                Err(PpmfxError::OutOfRange(format!(
                    "alpha {} not in [{}, {}]",
                    alpha, config.alpha_min, config.alpha_max
                )))
            }
            Operation::Blur { sigma } if !config.sigma_in_range(sigma) => Err(
                PpmfxError::OutOfRange(format!("sigma {} below {}", sigma, config.sigma_min)),
            ),
            Operation::Saturate { scale } if !config.scale_in_range(scale) => Err(
                PpmfxError::OutOfRange(format!("scale {} below {}", scale, config.scale_min)),
            ),
            Operation::Pointilism(params)
                if !(params.density >= 0.0
                    && params.min_radius >= 0
                    && params.min_radius <= params.max_radius) =>
            {
                Err(PpmfxError::OutOfRange(format!(
                    "pointilism density {} radius {}..={}",
                    params.density, params.min_radius, params.max_radius
                )))
            }
            _ => Ok(()),
        }
    }

    /// Run the transform on `input`.
    ///
    /// `rng` is only drawn from by [`Operation::Pointilism`].
    pub fn apply<R: Rng>(&self, input: &PixelBuffer, rng: &mut R) -> Result<PixelBuffer> {
        match self {
            Operation::Grayscale => point::grayscale(input),
            Operation::Blend { other, alpha, gaps } => blend::blend(input, other, *alpha, *gaps),
            Operation::RotateCcw => geometric::rotate_ccw(input),
            Operation::Pointilism(params) => pointilism::pointilism_with(input, params, rng),
            Operation::Blur { sigma } => blur::blur(input, *sigma),
            Operation::Saturate { scale } => point::saturate(input, *scale),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Pixel;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn image(rows: usize, cols: usize) -> PixelBuffer {
        let pixels = (0..rows * cols)
            .map(|i| Pixel::new(i as u8, 255 - i as u8, 100))
            .collect();
        PixelBuffer::from_pixels(rows, cols, pixels).unwrap()
    }

    #[test]
    fn test_names_match_list() {
        let ops = [
            Operation::Grayscale,
            Operation::Blend {
                other: image(1, 1),
                alpha: 0.5,
                gaps: GapPolicy::Black,
            },
            Operation::RotateCcw,
            Operation::Pointilism(PointilismParams::default()),
            Operation::Blur { sigma: 1.0 },
            Operation::Saturate { scale: 1.0 },
        ];
        let names: Vec<_> = ops.iter().map(Operation::name).collect();
        assert_eq!(names, OPERATIONS);
        assert!(ops.iter().all(|op| op.validate().is_ok()));
    }

    #[test]
    fn test_validate_ranges() {
        let blend = |alpha| Operation::Blend {
            other: image(1, 1),
            alpha,
            gaps: GapPolicy::Black,
        };
        assert!(matches!(blend(1.5).validate(), Err(PpmfxError::OutOfRange(_))));
        assert!(blend(-0.1).validate().is_err());
        assert!(blend(f64::NAN).validate().is_err());
        assert!(Operation::Blur { sigma: 0.05 }.validate().is_err());
        assert!(Operation::Saturate { scale: -1.0 }.validate().is_err());
        assert!(
            Operation::Pointilism(PointilismParams {
                density: 0.1,
                min_radius: 4,
                max_radius: 2,
            })
            .validate()
            .is_err()
        );
    }

    #[test]
    fn test_apply_dispatch() {
        let input = image(2, 3);
        let mut rng = StdRng::seed_from_u64(0);

        let rotated = Operation::RotateCcw.apply(&input, &mut rng).unwrap();
        assert_eq!((rotated.rows(), rotated.cols()), (3, 2));

        let blended = Operation::Blend {
            other: image(4, 1),
            alpha: 1.0,
            gaps: GapPolicy::Black,
        }
        .apply(&input, &mut rng)
        .unwrap();
        assert_eq!((blended.rows(), blended.cols()), (4, 3));

        let blurred = Operation::Blur { sigma: 0.1 }.apply(&input, &mut rng).unwrap();
        assert_eq!(blurred, input);
    }
}
