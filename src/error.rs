//! # Error Types
//!
//! This module defines the error type used throughout the ppmfx library and
//! the process exit codes the CLI reports for each kind of failure.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for ppmfx operations
#[derive(Debug, Error)]
pub enum PpmfxError {
    /// Input path, output path or operation missing from the command line
    #[error("Missing arguments: {0}")]
    MissingArguments(String),

    /// A pixel buffer or convolution kernel could not be allocated
    #[error("Allocation failed: {0}")]
    Allocation(String),

    /// Buffer dimensions are zero or do not match the pixel data
    #[error("Invalid dimensions: {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },

    /// An input file could not be opened
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not a readable binary PPM
    #[error("Invalid PPM: {0}")]
    InvalidPpm(String),

    /// Operation name is not one of the supported transforms
    #[error("Unsupported operation: {0}")]
    UnknownOperation(String),

    /// Wrong number or format of operation arguments
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Scalar argument outside its accepted range
    #[error("Argument out of range: {0}")]
    OutOfRange(String),

    /// Output could not be written
    #[error("Write failed: {0}")]
    Write(String),

    /// PNG preview export failed
    #[error("Image error: {0}")]
    Image(String),

    /// JSON run report could not be produced
    #[error("Report error: {0}")]
    Report(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PpmfxError {
    /// Process exit code reported by the CLI for this error.
    ///
    /// | Code | Meaning |
    /// |------|---------|
    /// | 1 | input, output or operation missing |
    /// | 2 | input could not be opened |
    /// | 3 | input is not a valid PPM |
    /// | 4 | unsupported operation |
    /// | 5 | malformed operation arguments |
    /// | 6 | argument out of range |
    /// | 7 | output could not be written |
    /// | 8 | anything else |
    pub fn exit_code(&self) -> i32 {
        match self {
            PpmfxError::MissingArguments(_) => exit_code::MISSING_FILENAME,
            PpmfxError::Open { .. } => exit_code::OPEN_FAILED,
            PpmfxError::InvalidPpm(_) | PpmfxError::InvalidDimensions { .. } => {
                exit_code::INVALID_PPM
            }
            PpmfxError::UnknownOperation(_) => exit_code::INVALID_OPERATION,
            PpmfxError::InvalidArguments(_) => exit_code::INVALID_OP_ARGS,
            PpmfxError::OutOfRange(_) => exit_code::OP_ARGS_RANGE_ERR,
            PpmfxError::Write(_) => exit_code::WRITE_FAILED,
            PpmfxError::Allocation(_)
            | PpmfxError::Image(_)
            | PpmfxError::Report(_)
            | PpmfxError::Io(_) => exit_code::UNSPECIFIED_ERR,
        }
    }
}

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const MISSING_FILENAME: i32 = 1;
    pub const OPEN_FAILED: i32 = 2;
    pub const INVALID_PPM: i32 = 3;
    pub const INVALID_OPERATION: i32 = 4;
    pub const INVALID_OP_ARGS: i32 = 5;
    pub const OP_ARGS_RANGE_ERR: i32 = 6;
    pub const WRITE_FAILED: i32 = 7;
    pub const UNSPECIFIED_ERR: i32 = 8;
}

/// Result alias for ppmfx operations
pub type Result<T> = std::result::Result<T, PpmfxError>;
