use image::{Rgba, RgbaImage};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

const USAGE: &str = "Usage: png2icns <input.png> <output.icns>";

fn png2icns(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_png2icns"))
        .args(args)
        .output()
        .unwrap()
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

fn assert_usage(output: &Output) {
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), USAGE);
}

#[test]
fn no_arguments_prints_usage() {
    assert_usage(&png2icns(&[]));
}

#[test]
fn one_argument_prints_usage() {
    assert_usage(&png2icns(&["icon.png"]));
}

#[test]
fn three_arguments_print_usage() {
    assert_usage(&png2icns(&["a.png", "b.icns", "c.icns"]));
}

#[test]
fn help_flag_prints_usage() {
    assert_usage(&png2icns(&["--help"]));
}

#[test]
fn missing_input_exits_with_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("missing.png");
    let output = dir.path().join("out.icns");

    let result = png2icns(&[path_str(&input), path_str(&output)]);

    assert_eq!(result.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.starts_with("Error: "), "stderr was {:?}", stderr);
    assert!(stderr.contains("does not exist"));
    assert!(!output.exists());
}

#[test]
fn valid_input_is_converted() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("icon.png");
    let output = dir.path().join("icon.icns");
    RgbaImage::from_pixel(64, 64, Rgba([255, 0, 0, 255]))
        .save(&input)
        .unwrap();

    let result = png2icns(&[path_str(&input), path_str(&output)]);

    assert_eq!(result.status.code(), Some(0));
    assert_eq!(
        String::from_utf8_lossy(&result.stdout).trim(),
        format!("Created {}", output.display())
    );
    assert!(result.stderr.is_empty());
    assert!(std::fs::metadata(&output).unwrap().len() > 0);
}
