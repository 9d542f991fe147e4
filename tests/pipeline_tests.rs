//! # Pipeline Tests
//!
//! End-to-end checks: PPM files on disk through [`Operation`] and back, and
//! the `ppmfx` binary's exit codes.
//!
//! Scratch files go under the system temp directory, one subdirectory per
//! test process.

use ppmfx::buffer::{Pixel, PixelBuffer};
use ppmfx::codec;
use ppmfx::error::exit_code;
use ppmfx::report::RunReport;
use ppmfx::transform::{GapPolicy, Operation, PointilismParams};
use pretty_assertions::assert_eq;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Path for a scratch file unique to this test process.
fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ppmfx-tests-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

/// Deterministic colorful image.
fn pattern(rows: usize, cols: usize, seed: u8) -> PixelBuffer {
    let pixels = (0..rows * cols)
        .map(|i| {
            let i = i as u8;
            Pixel::new(
                i.wrapping_mul(37).wrapping_add(seed),
                i.wrapping_mul(11).wrapping_add(90),
                255u8.wrapping_sub(i.wrapping_mul(23)),
            )
        })
        .collect();
    PixelBuffer::from_pixels(rows, cols, pixels).unwrap()
}

fn apply(op: &Operation, input: &PixelBuffer) -> PixelBuffer {
    let mut rng = StdRng::seed_from_u64(1);
    op.validate().unwrap();
    op.apply(input, &mut rng).unwrap()
}

/// Save `input`, load it back, transform, save, load the result.
fn through_files(name: &str, op: &Operation, input: &PixelBuffer) -> PixelBuffer {
    let in_path = scratch(&format!("{}-in.ppm", name));
    let out_path = scratch(&format!("{}-out.ppm", name));
    codec::save(&in_path, input).unwrap();
    let loaded = codec::load(&in_path).unwrap();
    assert_eq!(&loaded, input);
    codec::save(&out_path, &apply(op, &loaded)).unwrap();
    codec::load(&out_path).unwrap()
}

fn ppmfx(args: &[&str]) -> i32 {
    Command::new(env!("CARGO_BIN_EXE_ppmfx"))
        .args(args)
        .output()
        .unwrap()
        .status
        .code()
        .unwrap()
}

// ============================================================================
// TRANSFORMS
// ============================================================================

#[test]
fn test_grayscale_pipeline() {
    let input = pattern(7, 9, 3);
    let output = through_files("grayscale", &Operation::Grayscale, &input);

    assert_eq!((output.rows(), output.cols()), (7, 9));
    for (src, dst) in input.pixels().iter().zip(output.pixels()) {
        let expected = (0.30 * src.r as f64 + 0.59 * src.g as f64 + 0.11 * src.b as f64) as u8;
        assert_eq!(*dst, Pixel::gray(expected), "source {:?}", src);
    }
}

#[test]
fn test_rotate_four_times() {
    let input = pattern(3, 5, 0);
    let mut current = input.clone();
    for _ in 0..4 {
        current = apply(&Operation::RotateCcw, &current);
    }
    assert_eq!(current, input);
}

#[test]
fn test_rotate_literal() {
    let label = |v| Pixel::gray(v);
    let input = PixelBuffer::from_pixels(
        2,
        3,
        vec![label(1), label(2), label(3), label(4), label(5), label(6)],
    )
    .unwrap();
    let output = through_files("rotate", &Operation::RotateCcw, &input);
    assert_eq!((output.rows(), output.cols()), (3, 2));
    assert_eq!(
        output.pixels(),
        &[label(3), label(6), label(2), label(5), label(1), label(4)]
    );
}

#[test]
fn test_blend_small_over_large() {
    let a = pattern(2, 2, 40);
    let b = pattern(4, 4, 7);
    let op = Operation::Blend {
        other: b.clone(),
        alpha: 0.5,
        gaps: GapPolicy::Black,
    };
    let output = through_files("blend", &op, &a);

    assert_eq!((output.rows(), output.cols()), (4, 4));
    for row in 0..4 {
        for col in 0..4 {
            let expected = if row < 2 && col < 2 {
                let (pa, pb) = (a.get(row, col), b.get(row, col));
                let mix = |x: u8, y: u8| (x as f64 * 0.5 + y as f64 * 0.5) as u8;
                Pixel::new(mix(pa.r, pb.r), mix(pa.g, pb.g), mix(pa.b, pb.b))
            } else {
                b.get(row, col)
            };
            assert_eq!(output.get(row, col), expected, "({}, {})", row, col);
        }
    }
}

#[test]
fn test_blend_alpha_extremes() {
    let a = pattern(3, 3, 1);
    let b = pattern(3, 3, 200);
    let blend = |alpha| Operation::Blend {
        other: b.clone(),
        alpha,
        gaps: GapPolicy::Black,
    };
    assert_eq!(apply(&blend(1.0), &a), a);
    assert_eq!(apply(&blend(0.0), &a), b);
}

#[test]
fn test_single_tap_blur_is_identity() {
    let input = pattern(6, 4, 9);
    let output = through_files("blur", &Operation::Blur { sigma: 0.1 }, &input);
    assert_eq!(output, input);
}

#[test]
fn test_saturate_extremes() {
    let input = pattern(4, 6, 55);
    assert_eq!(apply(&Operation::Saturate { scale: 1.0 }, &input), input);
    assert_eq!(
        apply(&Operation::Saturate { scale: 0.0 }, &input),
        apply(&Operation::Grayscale, &input)
    );
}

#[test]
fn test_pointilism_without_dabs_is_black() {
    // 25 pixels at the default density is 0.75 dabs
    let input = pattern(5, 5, 12);
    let output = apply(&Operation::Pointilism(PointilismParams::default()), &input);
    assert_eq!((output.rows(), output.cols()), (5, 5));
    assert!(output.pixels().iter().all(|&p| p == Pixel::BLACK));
}

#[test]
fn test_pointilism_seeded_is_reproducible() {
    let input = pattern(20, 30, 77);
    let op = Operation::Pointilism(PointilismParams::default());
    let first = op
        .apply(&input, &mut StdRng::seed_from_u64(2024))
        .unwrap();
    let second = op
        .apply(&input, &mut StdRng::seed_from_u64(2024))
        .unwrap();
    assert_eq!(first, second);
    assert!(
        first
            .pixels()
            .iter()
            .filter(|&&p| p != Pixel::BLACK)
            .all(|p| input.pixels().contains(p))
    );
}

// ============================================================================
// OUTPUTS
// ============================================================================

#[test]
fn test_png_preview() {
    let buffer = pattern(3, 4, 21);
    let path = scratch("preview.png");
    codec::save_png(&path, &buffer).unwrap();

    let decoded = image::open(&path).unwrap().to_rgb8();
    assert_eq!(decoded.dimensions(), (4, 3));
    let p = buffer.get(2, 1);
    assert_eq!(decoded.get_pixel(1, 2).0, [p.r, p.g, p.b]);
}

#[test]
fn test_report_file() {
    let input = pattern(2, 3, 0);
    let op = Operation::Saturate { scale: 2.0 };
    let output = apply(&op, &input);
    let path = scratch("saturate.json");
    RunReport::new(&op, &input, &output, None)
        .write(&path)
        .unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["operation"], "saturate");
    assert_eq!(value["parameters"]["scale"], 2.0);
    assert_eq!(value["output"]["cols"], 3);
}

// ============================================================================
// CLI
// ============================================================================

#[test]
fn test_cli_success() {
    let input = scratch("cli-in.ppm");
    let output = scratch("cli-out.ppm");
    let report = scratch("cli-report.json");
    codec::save(&input, &pattern(4, 5, 8)).unwrap();

    let code = ppmfx(&[
        input.to_str().unwrap(),
        output.to_str().unwrap(),
        "--report",
        report.to_str().unwrap(),
        "pointilism",
        "--seed",
        "5",
    ]);
    assert_eq!(code, exit_code::SUCCESS);

    let result = codec::load(&output).unwrap();
    assert_eq!((result.rows(), result.cols()), (4, 5));
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(value["parameters"]["seed"], 5);
}

#[test]
fn test_cli_exit_codes() {
    let good = scratch("codes-good.ppm");
    let bad = scratch("codes-bad.ppm");
    let missing = scratch("codes-missing.ppm");
    let out = scratch("codes-out.ppm");
    codec::save(&good, &pattern(2, 2, 0)).unwrap();
    fs::write(&bad, b"P3\n1 1\n255\n0 0 0\n").unwrap();

    let good = good.to_str().unwrap();
    let bad = bad.to_str().unwrap();
    let missing = missing.to_str().unwrap();
    let out = out.to_str().unwrap();

    assert_eq!(ppmfx(&[good, out]), exit_code::MISSING_FILENAME);
    assert_eq!(ppmfx(&[missing, out, "grayscale"]), exit_code::OPEN_FAILED);
    assert_eq!(ppmfx(&[bad, out, "grayscale"]), exit_code::INVALID_PPM);
    assert_eq!(ppmfx(&[good, out, "sharpen"]), exit_code::INVALID_OPERATION);
    // The operation name is checked before the input is opened
    assert_eq!(ppmfx(&[missing, out, "sharpen"]), exit_code::INVALID_OPERATION);
    assert_eq!(ppmfx(&[good, out, "blend", good]), exit_code::INVALID_OP_ARGS);
    assert_eq!(ppmfx(&[good, out, "blur", "wide"]), exit_code::INVALID_OP_ARGS);
    assert_eq!(ppmfx(&[good, out, "saturate", "-1"]), exit_code::OP_ARGS_RANGE_ERR);
    assert_eq!(ppmfx(&[good, out, "blend", good, "1.5"]), exit_code::OP_ARGS_RANGE_ERR);
    assert_eq!(ppmfx(&[good, out, "blur", "0.05"]), exit_code::OP_ARGS_RANGE_ERR);
    assert_eq!(ppmfx(&[good, out, "rotate-ccw"]), exit_code::SUCCESS);
}
