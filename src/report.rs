//! JSON summary of one CLI run.
//!
//! ```json
//! {
//!   "operation": "blend",
//!   "parameters": { "alpha": 0.5, "gaps": "black" },
//!   "input": { "rows": 480, "cols": 640 },
//!   "second_input": { "rows": 200, "cols": 300 },
//!   "output": { "rows": 480, "cols": 640 }
//! }
//! ```

use crate::buffer::PixelBuffer;
use crate::config::TransformConfig;
use crate::error::{PpmfxError, Result};
use crate::transform::{GapPolicy, Operation};
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

impl From<&PixelBuffer> for Dimensions {
    fn from(buffer: &PixelBuffer) -> Self {
        Self {
            rows: buffer.rows(),
            cols: buffer.cols(),
        }
    }
}

/// Scalar parameters of the operation that ran.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Parameters {
    None {},
    Blend { alpha: f64, gaps: &'static str },
    Pointilism {
        density: f64,
        min_radius: i64,
        max_radius: i64,
        seed: Option<u64>,
    },
    Blur { sigma: f64, kernel_side: usize },
    Saturate { scale: f64 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub operation: &'static str,
    pub parameters: Parameters,
    pub input: Dimensions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_input: Option<Dimensions>,
    pub output: Dimensions,
}

impl RunReport {
    /// Describe `operation` applied to `input`, producing `output`.
    ///
    /// `seed` is the pointilism seed, if one was given.
    pub fn new(
        operation: &Operation,
        input: &PixelBuffer,
        output: &PixelBuffer,
        seed: Option<u64>,
    ) -> Self {
        let config = TransformConfig::DEFAULT;
        let (parameters, second_input) = match operation {
            Operation::Grayscale | Operation::RotateCcw => (Parameters::None {}, None),
            Operation::Blend { other, alpha, gaps } => (
                Parameters::Blend {
                    alpha: *alpha,
                    gaps: match gaps {
                        GapPolicy::Black => "black",
                        GapPolicy::Fill => "fill",
                    },
                },
                Some(Dimensions::from(other)),
            ),
            Operation::Pointilism(params) => (
                Parameters::Pointilism {
                    density: params.density,
                    min_radius: params.min_radius,
                    max_radius: params.max_radius,
                    seed,
                },
                None,
            ),
            Operation::Blur { sigma } => (
                Parameters::Blur {
                    sigma: *sigma,
                    kernel_side: config.kernel_side(*sigma),
                },
                None,
            ),
            Operation::Saturate { scale } => (Parameters::Saturate { scale: *scale }, None),
        };

        Self {
            operation: operation.name(),
            parameters,
            input: input.into(),
            second_input,
            output: output.into(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| PpmfxError::Report(e.to_string()))
    }

    /// Write the report as pretty JSON to `path`.
    pub fn write(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json)
            .map_err(|e| PpmfxError::Report(format!("{}: {}", path.display(), e)))
    }
}
