//! # Transform Configuration
//!
//! Fixed constants shared by the transforms and the parameter limits the
//! dispatcher enforces before a transform runs.
//!
//! ## Usage
//!
//! ```
//! use ppmfx::config::TransformConfig;
//!
//! let config = TransformConfig::DEFAULT;
//! assert_eq!(config.kernel_side(2.0), 21);
//! assert!(config.alpha_in_range(0.5));
//! ```

/// # Transform Configuration
///
/// ## Luminance
///
/// - **luma_weights**: red, green, blue coefficients for the gray value
///
/// ## Pointilism
///
/// - **dab_density**: dabs per pixel (`floor(density * rows * cols)` dabs)
/// - **dab_min_radius** / **dab_max_radius**: inclusive radius range
///
/// ## Blur
///
/// - **kernel_span**: kernel side is `trunc(sigma * kernel_span)`, made odd
///
/// ## Limits
///
/// ```text
/// alpha ∈ [alpha_min, alpha_max]
/// sigma ≥ sigma_min
/// scale ≥ scale_min
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformConfig {
    /// Red, green and blue luminance coefficients
    pub luma_weights: [f64; 3],

    /// Fraction of the pixel count used as the number of dabs
    pub dab_density: f64,

    /// Smallest dab radius
    pub dab_min_radius: i64,

    /// Largest dab radius
    pub dab_max_radius: i64,

    /// Kernel side length per unit of sigma
    pub kernel_span: f64,

    /// Lower bound for blend alpha
    pub alpha_min: f64,

    /// Upper bound for blend alpha
    pub alpha_max: f64,

    /// Smallest accepted blur sigma
    pub sigma_min: f64,

    /// Smallest accepted saturation scale
    pub scale_min: f64,

    /// Maximum channel value written to PPM headers
    pub max_channel: u16,
}

impl TransformConfig {
    pub const DEFAULT: Self = Self {
        luma_weights: [0.30, 0.59, 0.11],
        dab_density: 0.03,
        dab_min_radius: 1,
        dab_max_radius: 5,
        kernel_span: 10.0,
        alpha_min: 0.0,
        alpha_max: 1.0,
        sigma_min: 0.1,
        scale_min: 0.0,
        max_channel: 255,
    };

    /// Odd kernel side length for a given sigma.
    ///
    /// ```
    /// use ppmfx::config::TransformConfig;
    ///
    /// let config = TransformConfig::DEFAULT;
    /// assert_eq!(config.kernel_side(0.1), 1);
    /// assert_eq!(config.kernel_side(0.2), 3); // 2 is even, bumped to 3
    /// assert_eq!(config.kernel_side(0.55), 5);
    /// ```
    #[inline]
    pub fn kernel_side(&self, sigma: f64) -> usize {
        let mut side = (sigma * self.kernel_span) as usize;
        if side % 2 == 0 {
            side += 1;
        }
        side
    }

    #[inline]
    pub fn alpha_in_range(&self, alpha: f64) -> bool {
        (self.alpha_min..=self.alpha_max).contains(&alpha)
    }

    #[inline]
    pub fn sigma_in_range(&self, sigma: f64) -> bool {
        sigma >= self.sigma_min
    }

    #[inline]
    pub fn scale_in_range(&self, scale: f64) -> bool {
        scale >= self.scale_min
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
