//! # ppmfx CLI
//!
//! Command-line interface for one-shot PPM transforms.
//!
//! ## Usage
//!
//! ```bash
//! # Convert to grayscale
//! ppmfx trees.ppm trees-gray.ppm grayscale
//!
//! # Blend with a second image, 30% of the first
//! ppmfx trees.ppm mixed.ppm blend building.ppm 0.3
//!
//! # Rotate 90° counter-clockwise
//! ppmfx trees.ppm rotated.ppm rotate-ccw
//!
//! # Reproducible pointilism
//! ppmfx trees.ppm dots.ppm pointilism --seed 42
//!
//! # Gaussian blur, also saving a PNG preview and a JSON report
//! ppmfx trees.ppm soft.ppm blur 1.5 --png soft.png --report soft.json
//!
//! # Double the saturation
//! ppmfx trees.ppm vivid.ppm saturate 2
//! ```
//!
//! Set `RUST_LOG=debug` (or pass `--verbose` for `info`) to see progress.

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;

use ppmfx::{
    PpmfxError, codec,
    error::exit_code,
    report::RunReport,
    transform::{GapPolicy, OPERATIONS, Operation, PointilismParams},
};

/// ppmfx - Batch transforms for binary PPM images
#[derive(Parser, Debug)]
#[command(name = "ppmfx")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input image (binary PPM)
    input: PathBuf,

    /// Output image (binary PPM)
    output: PathBuf,

    #[command(subcommand)]
    command: Commands,

    /// Also save the result as a PNG preview
    #[arg(long, value_name = "FILE", global = true)]
    png: Option<PathBuf>,

    /// Write a JSON summary of the run
    #[arg(long, value_name = "FILE", global = true)]
    report: Option<PathBuf>,

    /// Log progress at info level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert to grayscale
    Grayscale,

    /// Alpha-blend with a second image
    Blend {
        /// Second image, blended under the input
        target: PathBuf,

        /// Weight of the input image, 0.0 to 1.0
        #[arg(allow_negative_numbers = true)]
        alpha: f64,

        /// Fill regions left uncovered when the images share a dimension
        #[arg(long)]
        fill_gaps: bool,
    },

    /// Rotate 90° counter-clockwise
    #[command(name = "rotate-ccw")]
    RotateCcw,

    /// Repaint as random colored dots
    Pointilism {
        /// Seed for reproducible output (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Gaussian blur
    Blur {
        /// Standard deviation in pixels (at least 0.1)
        #[arg(allow_negative_numbers = true)]
        sigma: f64,
    },

    /// Scale saturation
    Saturate {
        /// 0 = grayscale, 1 = unchanged, >1 = more saturated
        #[arg(allow_negative_numbers = true)]
        scale: f64,
    },
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = usage_error(&e).map_or(exit_code::SUCCESS, |err| err.exit_code());
            std::process::exit(code);
        }
    };

    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

/// Classify a command line that clap rejected; `None` for `--help` and `--version`.
///
/// An unknown operation is reported before the input is opened, so
/// `missing.ppm out.ppm sharpen` fails as an unknown operation.
fn usage_error(err: &clap::Error) -> Option<PpmfxError> {
    use clap::error::{ContextKind, ContextValue, ErrorKind};

    let invalid_arg = match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => Some(arg.as_str()),
        _ => None,
    };
    let unknown_operation = |arg: &str| {
        PpmfxError::UnknownOperation(format!(
            "'{}' (expected one of: {})",
            arg,
            OPERATIONS.join(", ")
        ))
    };

    let error = match err.kind() {
        ErrorKind::DisplayHelp
        | ErrorKind::DisplayVersion
        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => return None,
        // Fewer than <INPUT> <OUTPUT> <COMMAND>
        _ if std::env::args_os().len() < 4 => {
            PpmfxError::MissingArguments(invalid_arg.unwrap_or("<COMMAND>").to_string())
        }
        ErrorKind::MissingSubcommand => unknown_operation(""),
        ErrorKind::InvalidSubcommand => unknown_operation(invalid_arg.unwrap_or("")),
        // A bare word where the operation name belongs
        ErrorKind::UnknownArgument => match invalid_arg {
            Some(arg) if !arg.starts_with('-') => unknown_operation(arg),
            _ => PpmfxError::InvalidArguments(err.kind().to_string()),
        },
        kind => PpmfxError::InvalidArguments(kind.to_string()),
    };
    Some(error)
}

fn run(cli: Cli) -> Result<(), PpmfxError> {
    let input = codec::load(&cli.input)?;
    log::info!(
        "Loaded {} (cols = {}, rows = {})",
        cli.input.display(),
        input.cols(),
        input.rows()
    );

    let (operation, seed) = build_operation(cli.command)?;
    operation.validate()?;

    let mut rng = StdRng::seed_from_u64(seed.unwrap_or_default());
    log::info!("Applying {}...", operation.name());
    let output = operation.apply(&input, &mut rng)?;

    codec::save(&cli.output, &output)?;
    log::info!(
        "Saved {} (cols = {}, rows = {})",
        cli.output.display(),
        output.cols(),
        output.rows()
    );

    if let Some(png_path) = &cli.png {
        codec::save_png(png_path, &output)?;
        log::info!("Saved preview to {}", png_path.display());
    }

    if let Some(report_path) = &cli.report {
        RunReport::new(&operation, &input, &output, seed).write(report_path)?;
        log::info!("Wrote report to {}", report_path.display());
    }

    Ok(())
}

/// Turn a parsed subcommand into an [`Operation`], loading the blend target.
///
/// Also returns the pointilism seed; one is drawn at random when not given
/// so the report can record it.
fn build_operation(command: Commands) -> Result<(Operation, Option<u64>), PpmfxError> {
    let built = match command {
        Commands::Grayscale => (Operation::Grayscale, None),
        Commands::Blend {
            target,
            alpha,
            fill_gaps,
        } => {
            let other = codec::load(&target)?;
            log::info!(
                "Loaded {} (cols = {}, rows = {})",
                target.display(),
                other.cols(),
                other.rows()
            );
            let gaps = if fill_gaps {
                GapPolicy::Fill
            } else {
                GapPolicy::Black
            };
            (Operation::Blend { other, alpha, gaps }, None)
        }
        Commands::RotateCcw => (Operation::RotateCcw, None),
        Commands::Pointilism { seed } => {
            let seed = seed.unwrap_or_else(|| rand::rng().random());
            log::debug!("pointilism seed {}", seed);
            (Operation::Pointilism(PointilismParams::default()), Some(seed))
        }
        Commands::Blur { sigma } => (Operation::Blur { sigma }, None),
        Commands::Saturate { scale } => (Operation::Saturate { scale }, None),
    };
    Ok(built)
}
