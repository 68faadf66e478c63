//! End-to-end tests driving the `frozen-effect` binary.
//!
//! Each test writes a small synthetic PNG into a temp directory, runs the
//! built binary against it, and inspects the exit status and output file.

use image::{ColorType, ImageEncoder, Rgb, RgbImage};
use std::path::Path;
use std::process::{Command, Output};

const BIN: &str = env!("CARGO_BIN_EXE_frozen-effect");

fn write_png(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 40 % 256) as u8, (y * 60 % 256) as u8, 128])
    });
    let file = std::fs::File::create(path).unwrap();
    image::codecs::png::PngEncoder::new(std::io::BufWriter::new(file))
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

fn run(args: &[&str]) -> Output {
    Command::new(BIN).args(args).output().unwrap()
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn png_round_trip_keeps_size_and_color_mode() {
    let tmp = tempfile::TempDir::new().unwrap();
    let input = tmp.path().join("in.png");
    let output = tmp.path().join("out.png");
    write_png(&input, 12, 9);

    let out = run(&[path_str(&input), path_str(&output)]);
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );

    let frosted = image::open(&output).unwrap();
    assert_eq!((frosted.width(), frosted.height()), (12, 9));
    assert_eq!(frosted.color(), ColorType::Rgb8);
}

#[test]
fn seeded_runs_are_byte_identical() {
    let tmp = tempfile::TempDir::new().unwrap();
    let input = tmp.path().join("in.png");
    let first = tmp.path().join("first.png");
    let second = tmp.path().join("second.png");
    write_png(&input, 16, 16);

    for output in [&first, &second] {
        let out = run(&[path_str(&input), path_str(output), "--seed", "17"]);
        assert!(out.status.success());
    }

    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
}

#[test]
fn noise_intensity_flag_is_accepted() {
    let tmp = tempfile::TempDir::new().unwrap();
    let input = tmp.path().join("in.png");
    let output = tmp.path().join("out.jpg");
    write_png(&input, 8, 8);

    let out = run(&[
        path_str(&input),
        path_str(&output),
        "--noise-intensity",
        "5.5",
        "--quality",
        "70",
    ]);
    assert!(out.status.success());
    assert_eq!(image::image_dimensions(&output).unwrap(), (8, 8));
}

#[test]
fn noise_intensity_changes_output() {
    let tmp = tempfile::TempDir::new().unwrap();
    let input = tmp.path().join("in.png");
    let calm = tmp.path().join("calm.png");
    let grainy = tmp.path().join("grainy.png");
    write_png(&input, 16, 16);

    for (output, intensity) in [(&calm, "0"), (&grainy, "80")] {
        let out = run(&[
            path_str(&input),
            path_str(output),
            "--seed",
            "17",
            "--noise-intensity",
            intensity,
        ]);
        assert!(out.status.success());
    }

    assert_ne!(
        std::fs::read(&calm).unwrap(),
        std::fs::read(&grainy).unwrap()
    );
}

#[test]
fn nonexistent_input_fails_without_output() {
    let tmp = tempfile::TempDir::new().unwrap();
    let input = tmp.path().join("missing.png");
    let output = tmp.path().join("out.png");

    let out = run(&[path_str(&input), path_str(&output)]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("missing.png"));
    assert!(!output.exists());
}

#[test]
fn corrupt_input_fails_without_output() {
    let tmp = tempfile::TempDir::new().unwrap();
    let input = tmp.path().join("broken.png");
    let output = tmp.path().join("out.png");
    std::fs::write(&input, b"not an image at all").unwrap();

    let out = run(&[path_str(&input), path_str(&output)]);
    assert!(!out.status.success());
    assert!(!output.exists());
}

#[test]
fn unsupported_output_extension_fails_without_output() {
    let tmp = tempfile::TempDir::new().unwrap();
    let input = tmp.path().join("in.png");
    let output = tmp.path().join("out.unknown");
    write_png(&input, 4, 4);

    let out = run(&[path_str(&input), path_str(&output)]);
    assert!(!out.status.success());
    assert!(!output.exists());
}

#[test]
fn invalid_tint_is_rejected_by_argument_parsing() {
    let tmp = tempfile::TempDir::new().unwrap();
    let input = tmp.path().join("in.png");
    let output = tmp.path().join("out.png");
    write_png(&input, 4, 4);

    let out = run(&[path_str(&input), path_str(&output), "--tint-dark", "#zzz"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("tint"));
    assert!(!output.exists());
}
